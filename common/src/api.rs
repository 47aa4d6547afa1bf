//! Backend endpoint contract
//!
//! Both transport clients (reqwest in the CLI, `fetch` in the browser) build
//! URLs and normalise errors through this module so they behave identically.

use crate::error::ApiError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Header carrying the static API key.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Multipart field names for `POST /api/submit`.
pub mod fields {
    pub const PARTICIPANT_ID: &str = "participant_id";
    pub const RESUME: &str = "resume";
    pub const JOB_DESCRIPTION: &str = "job_description";
    pub const EDUCATION: &str = "jd_education";
}

/// Where the backend lives and how to authenticate against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    api_key: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        let base_url = base_url.into();
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        let api_key = api_key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty());
        Self { base_url, api_key }
    }

    /// Build from optional parts, e.g. `option_env!` values or env vars.
    /// An empty base URL falls back to [`DEFAULT_BASE_URL`].
    pub fn from_parts(base_url: Option<&str>, api_key: Option<&str>) -> Self {
        let base_url = base_url
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(DEFAULT_BASE_URL);
        Self::new(base_url, api_key.map(str::to_string))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub fn url(&self, endpoint: &Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL, None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// One backend capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Register,
    Submit,
    UploadCount(String),
    Scores(String),
    Leaderboard,
    Stats,
    Health,
}

impl Endpoint {
    pub fn method(&self) -> Method {
        match self {
            Endpoint::Register | Endpoint::Submit => Method::Post,
            _ => Method::Get,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Endpoint::Register => "/api/register".to_string(),
            Endpoint::Submit => "/api/submit".to_string(),
            Endpoint::UploadCount(id) => {
                format!("/api/participant/{}/upload-count", encode_path_segment(id))
            }
            Endpoint::Scores(id) => format!("/api/participant/{}/scores", encode_path_segment(id)),
            Endpoint::Leaderboard => "/api/leaderboard".to_string(),
            Endpoint::Stats => "/api/stats".to_string(),
            Endpoint::Health => "/health".to_string(),
        }
    }

    /// Health is the only unauthenticated call.
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, Endpoint::Health)
    }
}

/// Percent-encode everything outside RFC 3986 unreserved characters.
fn encode_path_segment(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Human-readable message for a non-success response.
///
/// Priority: string `detail`, first `msg` of a validation-error `detail`
/// list, string `message`, then `HTTP {status}: {status_text}`.
pub fn error_message(status: u16, status_text: &str, body: &str) -> String {
    let fallback = || format!("HTTP {}: {}", status, status_text);

    let Ok(value) = serde_json::from_str::<serde_json::Value>(body) else {
        return fallback();
    };

    if let Some(detail) = value.get("detail") {
        if let Some(s) = detail.as_str().filter(|s| !s.is_empty()) {
            return s.to_string();
        }
        if let Some(msg) = detail
            .as_array()
            .and_then(|items| items.first())
            .and_then(|item| item.get("msg"))
            .and_then(|msg| msg.as_str())
        {
            return msg.to_string();
        }
    }

    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(fallback)
}

/// Build the [`ApiError`] for a non-success response.
pub fn status_error(status: u16, status_text: &str, body: &str) -> ApiError {
    ApiError::Status {
        status,
        message: error_message(status, status_text, body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =============================================
    // Config / URLs
    // =============================================

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = ApiConfig::new("https://cv.example.com/", None);
        assert_eq!(config.url(&Endpoint::Leaderboard), "https://cv.example.com/api/leaderboard");
    }

    #[test]
    fn test_config_from_parts_defaults() {
        let config = ApiConfig::from_parts(None, Some("  "));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert!(!config.has_api_key());

        let config = ApiConfig::from_parts(Some(""), Some("secret"));
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), Some("secret"));
    }

    #[test]
    fn test_endpoint_paths() {
        assert_eq!(Endpoint::Register.path(), "/api/register");
        assert_eq!(Endpoint::Submit.path(), "/api/submit");
        assert_eq!(Endpoint::UploadCount("p1".into()).path(), "/api/participant/p1/upload-count");
        assert_eq!(Endpoint::Scores("p1".into()).path(), "/api/participant/p1/scores");
        assert_eq!(Endpoint::Stats.path(), "/api/stats");
        assert_eq!(Endpoint::Health.path(), "/health");
    }

    #[test]
    fn test_endpoint_encodes_participant_id() {
        assert_eq!(
            Endpoint::Scores("a b/c".into()).path(),
            "/api/participant/a%20b%2Fc/scores"
        );
        let uuid = "3f2b8c1e-9a4d-4e1f-8b2a-0c6d5e7f9a1b";
        assert_eq!(
            Endpoint::UploadCount(uuid.into()).path(),
            format!("/api/participant/{}/upload-count", uuid)
        );
    }

    #[test]
    fn test_endpoint_methods_and_auth() {
        assert_eq!(Endpoint::Register.method(), Method::Post);
        assert_eq!(Endpoint::Submit.method(), Method::Post);
        assert_eq!(Endpoint::Leaderboard.method(), Method::Get);
        assert!(Endpoint::Stats.requires_api_key());
        assert!(!Endpoint::Health.requires_api_key());
    }

    // =============================================
    // Error normalisation
    // =============================================

    #[test]
    fn test_error_message_uses_detail() {
        let body = r#"{"detail": "Upload limit of 5 reached"}"#;
        assert_eq!(error_message(400, "Bad Request", body), "Upload limit of 5 reached");
    }

    #[test]
    fn test_error_message_uses_validation_list() {
        let body = r#"{"detail": [{"loc": ["body", "email"], "msg": "value is not a valid email address", "type": "value_error"}]}"#;
        assert_eq!(
            error_message(422, "Unprocessable Entity", body),
            "value is not a valid email address"
        );
    }

    #[test]
    fn test_error_message_uses_message_field() {
        let body = r#"{"message": "Invalid API key"}"#;
        assert_eq!(error_message(401, "Unauthorized", body), "Invalid API key");
    }

    #[test]
    fn test_error_message_falls_back_to_status_text() {
        assert_eq!(error_message(502, "Bad Gateway", "<html>oops</html>"), "HTTP 502: Bad Gateway");
        assert_eq!(error_message(500, "Internal Server Error", ""), "HTTP 500: Internal Server Error");
        assert_eq!(error_message(404, "Not Found", r#"{"detail": ""}"#), "HTTP 404: Not Found");
    }

    #[test]
    fn test_status_error() {
        let err = status_error(429, "Too Many Requests", r#"{"detail":"Please wait 10 seconds before next submission"}"#);
        assert_eq!(err.status(), Some(429));
        assert_eq!(err.to_string(), "Please wait 10 seconds before next submission");
    }
}
