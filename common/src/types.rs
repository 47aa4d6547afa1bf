//! Wire types exchanged with the scoring backend
//!
//! Shared by the CLI and the web (WASM) client. Every response field uses
//! `#[serde(default)]`: the backend evolves independently and the client only
//! displays what it gets.

use serde::{Deserialize, Serialize};

/// `POST /api/register` body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub mobile: String,
}

/// Registered participant as returned by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub id: String,
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub upload_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Per-category score breakdown.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBreakdown {
    pub skills_match: f64,
    pub education: f64,
    pub experience: f64,
    pub projects: f64,
    pub keyword_relevance: f64,
    pub resume_quality: f64,
}

impl ScoreBreakdown {
    /// (label, value) pairs in display order
    pub fn categories(&self) -> [(&'static str, f64); 6] {
        [
            ("Skills match", self.skills_match),
            ("Education", self.education),
            ("Experience", self.experience),
            ("Projects", self.projects),
            ("Keyword relevance", self.keyword_relevance),
            ("Resume quality", self.resume_quality),
        ]
    }
}

/// `POST /api/submit` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreResult {
    pub score: f64,
    pub verdict: String,
    #[serde(alias = "score_breakdown", skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    pub skills: Vec<String>,
    pub matched_skills: Vec<String>,
    pub experience_years: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyword_similarity: Option<f64>,
    pub plagiarism_score: f64,
    pub feedback: Vec<String>,
    pub penalties: Vec<String>,
    /// Backend's count after this submission was recorded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upload_count: Option<u32>,
}

/// `GET /api/participant/{id}/upload-count` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadCount {
    pub upload_count: u32,
    pub max_uploads: u32,
    /// Backend computes `max - count` without clamping, so this may be negative.
    pub remaining: i64,
}

impl Default for UploadCount {
    fn default() -> Self {
        Self {
            upload_count: 0,
            max_uploads: crate::validation::MAX_UPLOADS,
            remaining: i64::from(crate::validation::MAX_UPLOADS),
        }
    }
}

/// One past submission
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreRecord {
    /// Database-generated; integer or string depending on the backend store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
    pub score: f64,
    pub skills_count: u32,
    pub experience_years: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// `GET /api/participant/{id}/scores` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreHistory {
    pub scores: Vec<ScoreRecord>,
    pub best_score: Option<f64>,
    pub total_submissions: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeaderboardEntry {
    pub rank: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub score: f64,
    pub skills_count: u32,
    #[serde(alias = "experience_years")]
    pub experience: f64,
}

impl LeaderboardEntry {
    /// Name if present, otherwise email, otherwise "-".
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.email.as_deref().filter(|s| !s.is_empty()))
            .unwrap_or("-")
    }
}

/// `GET /api/leaderboard` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Leaderboard {
    pub leaderboard: Vec<LeaderboardEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistributionBucket {
    pub range: String,
    pub count: u32,
}

/// `GET /api/stats` response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitionStats {
    pub total_participants: u32,
    pub avg_score: f64,
    pub top_score: f64,
    pub high_scorers: u32,
    pub score_distribution: Vec<DistributionBucket>,
    pub experience_distribution: Vec<DistributionBucket>,
}

/// `GET /health` response. Only `status` is interpreted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HealthStatus {
    pub status: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
