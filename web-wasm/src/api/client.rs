//! Scoring service client (fetch)
//!
//! Same contract as the native client: attach the key when configured,
//! normalise non-success bodies into a message, parse success bodies as-is.
//! Base URL and key are fixed when the bundle is built.

use perfect_cv_common::api::{fields, status_error};
use perfect_cv_common::{
    ApiConfig, ApiError, CompetitionStats, Endpoint, HealthStatus, Leaderboard, Participant,
    RegisterRequest, ScoreHistory, ScoreResult, UploadCount, API_KEY_HEADER,
};
use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{File, FormData, Request, RequestInit, RequestMode, Response};

pub fn config() -> ApiConfig {
    ApiConfig::from_parts(
        option_env!("PERFECT_CV_API_BASE_URL"),
        option_env!("PERFECT_CV_API_KEY"),
    )
}

/// fetch() rejects only on network failure (CORS, DNS, refused).
fn unreachable(e: JsValue) -> ApiError {
    let detail = e
        .dyn_ref::<js_sys::Error>()
        .map(|err| String::from(err.message()))
        .unwrap_or_else(|| format!("{:?}", e));
    ApiError::Unreachable(detail)
}

enum Body {
    Empty,
    Json(String),
    Form(FormData),
}

async fn call<T: DeserializeOwned>(endpoint: Endpoint, body: Body) -> Result<T, ApiError> {
    let config = config();
    let url = config.url(&endpoint);

    let opts = RequestInit::new();
    opts.set_method(endpoint.method().as_str());
    opts.set_mode(RequestMode::Cors);
    let content_type = match &body {
        Body::Empty => None,
        Body::Json(json) => {
            opts.set_body(&JsValue::from_str(json));
            Some("application/json")
        }
        // the browser sets the multipart boundary itself
        Body::Form(form) => {
            opts.set_body(form.as_ref());
            None
        }
    };

    let request = Request::new_with_str_and_init(&url, &opts).map_err(unreachable)?;
    let headers = request.headers();
    if let Some(content_type) = content_type {
        headers.set("Content-Type", content_type).map_err(unreachable)?;
    }
    if endpoint.requires_api_key() {
        if let Some(key) = config.api_key() {
            headers.set(API_KEY_HEADER, key).map_err(unreachable)?;
        }
    }

    let window = web_sys::window().ok_or_else(|| ApiError::Unreachable("no window".to_string()))?;
    let value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(unreachable)?;
    let response: Response = value.dyn_into().map_err(unreachable)?;

    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string())
            .unwrap_or_default(),
        Err(_) => String::new(),
    };

    if !response.ok() {
        let err = status_error(response.status(), &response.status_text(), &text);
        gloo::console::warn!(format!("{} {} failed: {}", endpoint.method().as_str(), url, err));
        return Err(err);
    }

    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

pub async fn register(request: &RegisterRequest) -> Result<Participant, ApiError> {
    let json = serde_json::to_string(request).map_err(|e| ApiError::Decode(e.to_string()))?;
    call(Endpoint::Register, Body::Json(json)).await
}

pub async fn submit(
    participant_id: &str,
    file: &File,
    job_description: &str,
    education: &str,
) -> Result<ScoreResult, ApiError> {
    let form = FormData::new().map_err(unreachable)?;
    form.append_with_str(fields::PARTICIPANT_ID, participant_id)
        .map_err(unreachable)?;
    form.append_with_blob_and_filename(fields::RESUME, file, &file.name())
        .map_err(unreachable)?;
    form.append_with_str(fields::JOB_DESCRIPTION, job_description)
        .map_err(unreachable)?;
    form.append_with_str(fields::EDUCATION, education)
        .map_err(unreachable)?;
    call(Endpoint::Submit, Body::Form(form)).await
}

pub async fn upload_count(participant_id: &str) -> Result<UploadCount, ApiError> {
    call(Endpoint::UploadCount(participant_id.to_string()), Body::Empty).await
}

pub async fn scores(participant_id: &str) -> Result<ScoreHistory, ApiError> {
    call(Endpoint::Scores(participant_id.to_string()), Body::Empty).await
}

pub async fn leaderboard() -> Result<Leaderboard, ApiError> {
    call(Endpoint::Leaderboard, Body::Empty).await
}

pub async fn stats() -> Result<CompetitionStats, ApiError> {
    call(Endpoint::Stats, Body::Empty).await
}

/// `None` when the backend is down or answers with an error.
pub async fn health() -> Option<HealthStatus> {
    call(Endpoint::Health, Body::Empty).await.ok()
}
