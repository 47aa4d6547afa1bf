//! Scoring backend transport (reqwest)
//!
//! One method per backend capability. Each call is one-shot: no retry, no
//! timeout, no caching. Failures come back as [`ApiError`] with the message
//! already normalised by `perfect_cv_common::api`.

use async_trait::async_trait;
use perfect_cv_common::api::{self, fields, Method};
use perfect_cv_common::{
    ApiConfig, ApiError, CompetitionStats, Endpoint, HealthStatus, Leaderboard, Participant,
    RegisterRequest, ScoreHistory, ScoreResult, UploadCount, API_KEY_HEADER,
};
use serde::de::DeserializeOwned;

use crate::error::{PerfectCvError, Result};

/// Everything `POST /api/submit` needs, bytes already read.
#[derive(Debug, Clone)]
pub struct SubmitPayload {
    pub participant_id: String,
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub job_description: String,
    pub education: String,
}

#[async_trait]
pub trait ScoringService: Send + Sync {
    async fn register(&self, request: &RegisterRequest) -> std::result::Result<Participant, ApiError>;

    async fn submit(&self, payload: &SubmitPayload) -> std::result::Result<ScoreResult, ApiError>;

    async fn upload_count(&self, participant_id: &str) -> std::result::Result<UploadCount, ApiError>;

    async fn scores(&self, participant_id: &str) -> std::result::Result<ScoreHistory, ApiError>;

    async fn leaderboard(&self) -> std::result::Result<Leaderboard, ApiError>;

    async fn stats(&self) -> std::result::Result<CompetitionStats, ApiError>;

    /// `None` when the backend is down or unhealthy; never an error.
    async fn health(&self) -> Option<HealthStatus>;
}

pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        if !config.has_api_key() {
            tracing::warn!("API key is not configured; authenticated requests will likely fail");
        }
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| PerfectCvError::Http(e.to_string()))?;
        tracing::debug!(base_url = config.base_url(), api_key = config.has_api_key(), "api client ready");
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, endpoint: &Endpoint) -> reqwest::RequestBuilder {
        let url = self.config.url(endpoint);
        let builder = match endpoint.method() {
            Method::Get => self.http.get(url),
            Method::Post => self.http.post(url),
        };
        match self.config.api_key() {
            Some(key) if endpoint.requires_api_key() => builder.header(API_KEY_HEADER, key),
            _ => builder,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        builder: reqwest::RequestBuilder,
    ) -> std::result::Result<T, ApiError> {
        let path = endpoint.path();
        tracing::debug!(method = endpoint.method().as_str(), path = %path, "request");

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(path = %path, error = %e, "backend unreachable");
            ApiError::Unreachable(e.to_string())
        })?;

        let result = read_response(response).await;
        match &result {
            Ok(_) => tracing::debug!(path = %path, "request ok"),
            Err(e) => tracing::warn!(path = %path, error = %e, "request failed"),
        }
        result
    }
}

async fn read_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> std::result::Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(api::status_error(
            status.as_u16(),
            status.canonical_reason().unwrap_or(""),
            &body,
        ));
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ApiError::Unreachable(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ApiError::Decode(e.to_string()))
}

#[async_trait]
impl ScoringService for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> std::result::Result<Participant, ApiError> {
        tracing::info!(email = %request.email, "registering participant");
        let endpoint = Endpoint::Register;
        let builder = self.request(&endpoint).json(request);
        self.send(&endpoint, builder).await
    }

    async fn submit(&self, payload: &SubmitPayload) -> std::result::Result<ScoreResult, ApiError> {
        tracing::info!(
            participant_id = %payload.participant_id,
            file = %payload.file_name,
            bytes = payload.bytes.len(),
            "submitting resume"
        );
        let resume = reqwest::multipart::Part::bytes(payload.bytes.clone())
            .file_name(payload.file_name.clone())
            .mime_str("application/pdf")
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .text(fields::PARTICIPANT_ID, payload.participant_id.clone())
            .part(fields::RESUME, resume)
            .text(fields::JOB_DESCRIPTION, payload.job_description.clone())
            .text(fields::EDUCATION, payload.education.clone());

        let endpoint = Endpoint::Submit;
        let builder = self.request(&endpoint).multipart(form);
        self.send(&endpoint, builder).await
    }

    async fn upload_count(&self, participant_id: &str) -> std::result::Result<UploadCount, ApiError> {
        let endpoint = Endpoint::UploadCount(participant_id.to_string());
        let builder = self.request(&endpoint);
        self.send(&endpoint, builder).await
    }

    async fn scores(&self, participant_id: &str) -> std::result::Result<ScoreHistory, ApiError> {
        let endpoint = Endpoint::Scores(participant_id.to_string());
        let builder = self.request(&endpoint);
        self.send(&endpoint, builder).await
    }

    async fn leaderboard(&self) -> std::result::Result<Leaderboard, ApiError> {
        let endpoint = Endpoint::Leaderboard;
        let builder = self.request(&endpoint);
        self.send(&endpoint, builder).await
    }

    async fn stats(&self) -> std::result::Result<CompetitionStats, ApiError> {
        let endpoint = Endpoint::Stats;
        let builder = self.request(&endpoint);
        self.send(&endpoint, builder).await
    }

    async fn health(&self) -> Option<HealthStatus> {
        let endpoint = Endpoint::Health;
        let builder = self.request(&endpoint);
        match self.send::<HealthStatus>(&endpoint, builder).await {
            Ok(status) => Some(status),
            Err(e) => {
                tracing::warn!(error = %e, "health check failed");
                None
            }
        }
    }
}
