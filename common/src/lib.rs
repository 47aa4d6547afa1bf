//! Perfect CV Match common library
//!
//! Types and client state shared by the CLI and the web (WASM) app.

pub mod api;
pub mod error;
pub mod format;
pub mod loading;
pub mod navigation;
pub mod session;
pub mod types;
pub mod upload;
pub mod validation;

pub use api::{ApiConfig, Endpoint, API_KEY_HEADER};
pub use error::{ApiError, Error, Result};
pub use loading::{ListView, LoadScope, LoadToken, Loadable};
pub use navigation::{Page, Shell};
pub use session::{ActiveParticipant, MemoryStore, SessionContext, SessionStore};
pub use types::{
    CompetitionStats, DistributionBucket, HealthStatus, Leaderboard, LeaderboardEntry, Participant,
    RegisterRequest, ScoreBreakdown, ScoreHistory, ScoreRecord, ScoreResult, UploadCount,
};
pub use upload::{Submission, UploadFlow, UploadState};
pub use validation::{FileLike, ValidationError};
