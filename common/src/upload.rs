//! Upload flow state machine
//!
//! idle -> validating -> (rejected | accepted) -> submitting -> (success | failed)
//!
//! The flow never talks to the network. [`UploadFlow::begin_submit`] either
//! hands back a [`Submission`] for the caller to send, or a validation error,
//! in which case nothing must be sent.

use crate::types::ScoreResult;
use crate::validation::{self, FileLike, ValidationError, MAX_UPLOADS};

#[derive(Debug, Clone, PartialEq)]
pub enum UploadState {
    /// Nothing in flight. A file may or may not be selected.
    Idle,
    Submitting,
    Succeeded(ScoreResult),
    Failed(String),
}

/// Owned payload for one submit call.
#[derive(Debug, Clone)]
pub struct Submission<F> {
    pub file: F,
    pub job_description: String,
    pub education: String,
}

/// Form + status for the home page.
///
/// Rejected file candidates never touch the current selection, on either the
/// browse path or the drag-and-drop path.
#[derive(Debug, Clone)]
pub struct UploadFlow<F> {
    selected: Option<F>,
    job_description: String,
    education: String,
    upload_count: u32,
    dragging: bool,
    state: UploadState,
    error: Option<String>,
    success: Option<String>,
}

impl<F> Default for UploadFlow<F> {
    fn default() -> Self {
        Self {
            selected: None,
            job_description: String::new(),
            education: String::new(),
            upload_count: 0,
            dragging: false,
            state: UploadState::Idle,
            error: None,
            success: None,
        }
    }
}

impl<F: FileLike + Clone> UploadFlow<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Browse path
    pub fn select_file(&mut self, file: F) -> Result<(), ValidationError> {
        match validation::validate_file(&file.file_name(), file.file_size()) {
            Ok(()) => {
                self.selected = Some(file);
                self.error = None;
                Ok(())
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    /// Drag-and-drop path. Same rules as [`Self::select_file`].
    pub fn drop_file(&mut self, file: F) -> Result<(), ValidationError> {
        self.dragging = false;
        self.select_file(file)
    }

    pub fn drag_enter(&mut self) {
        self.dragging = true;
    }

    pub fn drag_leave(&mut self) {
        self.dragging = false;
    }

    pub fn set_job_description(&mut self, text: impl Into<String>) {
        self.job_description = text.into();
    }

    pub fn set_education(&mut self, text: impl Into<String>) {
        self.education = text.into();
    }

    /// Apply a fresh count from the backend.
    pub fn set_upload_count(&mut self, count: u32) {
        self.upload_count = count;
    }

    /// Validate and move to `Submitting`.
    ///
    /// Order of checks: file present, description length, quota.
    pub fn begin_submit(&mut self) -> Result<Submission<F>, ValidationError> {
        if self.state == UploadState::Submitting {
            return Err(ValidationError::SubmissionInProgress);
        }

        self.error = None;
        self.success = None;
        self.state = UploadState::Idle;

        let checked = self.check_submission();
        match checked {
            Ok(submission) => {
                self.state = UploadState::Submitting;
                Ok(submission)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                Err(e)
            }
        }
    }

    fn check_submission(&self) -> Result<Submission<F>, ValidationError> {
        let file = self.selected.clone().ok_or(ValidationError::NoFileSelected)?;
        validation::validate_job_description(&self.job_description)?;
        validation::validate_quota(self.upload_count)?;
        Ok(Submission {
            file,
            job_description: self.job_description.clone(),
            education: self.education.clone(),
        })
    }

    /// Backend accepted the submission.
    ///
    /// The count is provisional until the caller re-queries it.
    pub fn finish_success(&mut self, result: ScoreResult) {
        self.success = Some(format!(
            "Submission successful! Your score: {}% - {}",
            result.score, result.verdict
        ));
        self.upload_count = result.upload_count.unwrap_or(self.upload_count + 1);
        self.selected = None;
        self.job_description.clear();
        self.state = UploadState::Succeeded(result);
    }

    /// Backend refused or could not be reached. Form stays populated.
    pub fn finish_failure(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.error = Some(message.clone());
        self.state = UploadState::Failed(message);
    }
}

impl<F> UploadFlow<F> {
    pub fn selected(&self) -> Option<&F> {
        self.selected.as_ref()
    }

    pub fn job_description(&self) -> &str {
        &self.job_description
    }

    pub fn education(&self) -> &str {
        &self.education
    }

    pub fn upload_count(&self) -> u32 {
        self.upload_count
    }

    pub fn quota_reached(&self) -> bool {
        self.upload_count >= MAX_UPLOADS
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn is_submitting(&self) -> bool {
        self.state == UploadState::Submitting
    }

    /// Submit button enabled?
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && !self.quota_reached()
    }

    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn result(&self) -> Option<&ScoreResult> {
        match &self.state {
            UploadState::Succeeded(result) => Some(result),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::MAX_FILE_SIZE;

    #[derive(Debug, Clone, PartialEq)]
    struct FakeFile {
        name: String,
        size: u64,
    }

    impl FakeFile {
        fn new(name: &str, size: u64) -> Self {
            Self { name: name.to_string(), size }
        }
    }

    impl FileLike for FakeFile {
        fn file_name(&self) -> String {
            self.name.clone()
        }
        fn file_size(&self) -> u64 {
            self.size
        }
    }

    fn long_description() -> String {
        "Backend engineer with Rust, PostgreSQL and distributed systems experience.".to_string()
    }

    fn ready_flow() -> UploadFlow<FakeFile> {
        let mut flow = UploadFlow::new();
        flow.select_file(FakeFile::new("cv.pdf", 2048)).unwrap();
        flow.set_job_description(long_description());
        flow
    }

    fn sample_result(count: Option<u32>) -> ScoreResult {
        ScoreResult {
            score: 82.0,
            verdict: "Excellent Match".to_string(),
            upload_count: count,
            ..Default::default()
        }
    }

    // =============================================
    // File selection
    // =============================================

    #[test]
    fn test_select_pdf() {
        let mut flow: UploadFlow<FakeFile> = UploadFlow::new();
        assert!(flow.select_file(FakeFile::new("cv.pdf", 10)).is_ok());
        assert_eq!(flow.selected().unwrap().name, "cv.pdf");
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection_on_browse() {
        let mut flow = ready_flow();
        let err = flow.select_file(FakeFile::new("cv.docx", 10)).unwrap_err();
        assert_eq!(err, ValidationError::NotPdf);
        assert_eq!(flow.selected().unwrap().name, "cv.pdf");
        assert_eq!(flow.error(), Some("Only PDF files are allowed"));
    }

    #[test]
    fn test_rejected_file_keeps_previous_selection_on_drop() {
        let mut flow = ready_flow();
        flow.drag_enter();
        let err = flow.drop_file(FakeFile::new("big.pdf", MAX_FILE_SIZE + 1)).unwrap_err();
        assert_eq!(err, ValidationError::FileTooLarge);
        assert_eq!(flow.selected().unwrap().name, "cv.pdf");
        assert!(!flow.is_dragging());
    }

    #[test]
    fn test_rejected_file_on_empty_flow_leaves_nothing_selected() {
        let mut flow: UploadFlow<FakeFile> = UploadFlow::new();
        assert!(flow.select_file(FakeFile::new("photo.png", 10)).is_err());
        assert!(flow.selected().is_none());
    }

    #[test]
    fn test_accepted_file_clears_error() {
        let mut flow: UploadFlow<FakeFile> = UploadFlow::new();
        let _ = flow.select_file(FakeFile::new("photo.png", 10));
        assert!(flow.error().is_some());
        flow.drop_file(FakeFile::new("cv.pdf", 10)).unwrap();
        assert!(flow.error().is_none());
    }

    #[test]
    fn test_drag_flag_only() {
        let mut flow: UploadFlow<FakeFile> = UploadFlow::new();
        flow.drag_enter();
        assert!(flow.is_dragging());
        assert!(flow.selected().is_none());
        assert_eq!(flow.state(), &UploadState::Idle);
        flow.drag_leave();
        assert!(!flow.is_dragging());
    }

    // =============================================
    // Submission gating
    // =============================================

    #[test]
    fn test_begin_submit_requires_file() {
        let mut flow: UploadFlow<FakeFile> = UploadFlow::new();
        flow.set_job_description(long_description());
        assert_eq!(flow.begin_submit().unwrap_err(), ValidationError::NoFileSelected);
        assert_eq!(flow.error(), Some("Please select a PDF file"));
        assert_eq!(flow.state(), &UploadState::Idle);
    }

    #[test]
    fn test_begin_submit_requires_long_description() {
        let mut flow = ready_flow();
        flow.set_job_description("Rust dev");
        assert_eq!(
            flow.begin_submit().unwrap_err(),
            ValidationError::JobDescriptionTooShort
        );
        assert!(!flow.is_submitting());
    }

    #[test]
    fn test_begin_submit_blocks_at_quota() {
        let mut flow = ready_flow();
        flow.set_upload_count(5);
        assert!(flow.quota_reached());
        assert!(!flow.can_submit());
        assert_eq!(flow.begin_submit().unwrap_err(), ValidationError::QuotaExceeded);
    }

    #[test]
    fn test_begin_submit_ok() {
        let mut flow = ready_flow();
        flow.set_education("B.Tech in Computer Science");
        let submission = flow.begin_submit().unwrap();
        assert_eq!(submission.file.name, "cv.pdf");
        assert_eq!(submission.job_description, long_description());
        assert_eq!(submission.education, "B.Tech in Computer Science");
        assert!(flow.is_submitting());
        assert!(!flow.can_submit());
    }

    #[test]
    fn test_begin_submit_twice_is_rejected() {
        let mut flow = ready_flow();
        flow.begin_submit().unwrap();
        assert_eq!(
            flow.begin_submit().unwrap_err(),
            ValidationError::SubmissionInProgress
        );
        assert!(flow.is_submitting());
    }

    #[test]
    fn test_begin_submit_clears_previous_messages() {
        let mut flow = ready_flow();
        flow.begin_submit().unwrap();
        flow.finish_failure("Upload limit of 5 reached");
        assert!(flow.error().is_some());
        flow.begin_submit().unwrap();
        assert!(flow.error().is_none());
        assert!(flow.result().is_none());
    }

    // =============================================
    // Completion
    // =============================================

    #[test]
    fn test_finish_success_clears_form() {
        let mut flow = ready_flow();
        flow.set_upload_count(1);
        flow.begin_submit().unwrap();
        flow.finish_success(sample_result(Some(2)));

        assert!(flow.selected().is_none());
        assert_eq!(flow.job_description(), "");
        assert_eq!(flow.upload_count(), 2);
        assert_eq!(
            flow.success(),
            Some("Submission successful! Your score: 82% - Excellent Match")
        );
        assert_eq!(flow.result().unwrap().verdict, "Excellent Match");
    }

    #[test]
    fn test_finish_success_without_backend_count_increments() {
        let mut flow = ready_flow();
        flow.set_upload_count(3);
        flow.begin_submit().unwrap();
        flow.finish_success(sample_result(None));
        assert_eq!(flow.upload_count(), 4);
    }

    #[test]
    fn test_finish_failure_keeps_form() {
        let mut flow = ready_flow();
        flow.begin_submit().unwrap();
        flow.finish_failure("Could not extract sufficient text from PDF.");

        assert_eq!(flow.selected().unwrap().name, "cv.pdf");
        assert_eq!(flow.job_description(), long_description());
        assert_eq!(flow.error(), Some("Could not extract sufficient text from PDF."));
        assert!(matches!(flow.state(), UploadState::Failed(_)));
        assert!(flow.can_submit());
    }
}
