//! Client orchestration
//!
//! Session, shell and upload flow from `perfect_cv_common`, driven against a
//! [`ScoringService`]. Every validation runs before the service is touched.

use perfect_cv_common::validation::validate_registration;
use perfect_cv_common::{
    CompetitionStats, FileLike, HealthStatus, LeaderboardEntry, Page, Participant, RegisterRequest,
    ScoreHistory, ScoreResult, SessionContext, SessionStore, Shell, UploadFlow,
};

use crate::client::{ScoringService, SubmitPayload};
use crate::error::{PerfectCvError, Result};
use crate::resume::LocalFile;

pub struct ClientApp<C, S> {
    service: C,
    session: SessionContext<S>,
    shell: Shell,
    upload: UploadFlow<LocalFile>,
}

impl<C: ScoringService, S: SessionStore> ClientApp<C, S> {
    /// Read the persisted session and pick the first page.
    pub fn launch(service: C, store: S) -> Self {
        let session = SessionContext::load(store);
        let shell = Shell::launch(session.is_logged_in());
        tracing::debug!(page = shell.page().as_str(), "launched");
        Self {
            service,
            session,
            shell,
            upload: UploadFlow::new(),
        }
    }

    pub fn page(&self) -> Page {
        self.shell.page()
    }

    pub fn notice(&self) -> Option<&str> {
        self.shell.notice()
    }

    pub fn session(&self) -> &SessionContext<S> {
        &self.session
    }

    pub fn upload(&self) -> &UploadFlow<LocalFile> {
        &self.upload
    }

    pub fn service(&self) -> &C {
        &self.service
    }

    /// Navigate and return the participant id, or fail if the shell ends up
    /// on Login.
    fn enter(&mut self, page: Page) -> Result<String> {
        let shown = self.shell.navigate(page, self.session.is_logged_in());
        match (shown, self.session.participant_id()) {
            (Page::Login, _) | (_, None) => Err(PerfectCvError::NotLoggedIn),
            (_, Some(id)) => Ok(id.to_string()),
        }
    }

    pub async fn register(&mut self, name: &str, email: &str, mobile: &str) -> Result<Participant> {
        validate_registration(name, email, mobile)?;

        let request = RegisterRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            mobile: mobile.trim().to_string(),
        };
        let participant = self.service.register(&request).await?;
        self.session.login(&participant)?;
        self.shell.on_login(participant.message.as_deref());
        self.upload = UploadFlow::new();
        self.upload.set_upload_count(participant.upload_count);
        tracing::info!(participant_id = %participant.id, "logged in");
        Ok(participant)
    }

    /// Home page mount: fetch the upload count. A failed fetch keeps the
    /// current count and is only logged.
    pub async fn mount_home(&mut self) -> Result<u32> {
        let id = self.enter(Page::Home)?;
        self.refresh_upload_count(&id).await;
        Ok(self.upload.upload_count())
    }

    async fn refresh_upload_count(&mut self, participant_id: &str) {
        match self.service.upload_count(participant_id).await {
            Ok(count) => self.upload.set_upload_count(count.upload_count),
            Err(e) => tracing::warn!(error = %e, "failed to load upload count"),
        }
    }

    /// Validate and submit one resume from the Home page.
    ///
    /// Uses the count loaded by [`Self::mount_home`]; there is no extra
    /// request before validation.
    pub async fn submit(
        &mut self,
        file: LocalFile,
        job_description: &str,
        education: &str,
    ) -> Result<ScoreResult> {
        let participant_id = self.enter(Page::Home)?;

        self.upload.select_file(file)?;
        self.upload.set_job_description(job_description);
        self.upload.set_education(education);
        let submission = self.upload.begin_submit()?;

        let bytes = match submission.file.read_bytes().await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.upload.finish_failure(e.to_string());
                return Err(e);
            }
        };
        let payload = SubmitPayload {
            participant_id: participant_id.clone(),
            file_name: submission.file.file_name(),
            bytes,
            job_description: submission.job_description,
            education: submission.education,
        };

        match self.service.submit(&payload).await {
            Ok(result) => {
                self.upload.finish_success(result.clone());
                self.refresh_upload_count(&participant_id).await;
                Ok(result)
            }
            Err(e) => {
                self.upload.finish_failure(e.to_string());
                Err(e.into())
            }
        }
    }

    pub async fn scores(&mut self) -> Result<ScoreHistory> {
        let id = self.enter(Page::Scores)?;
        Ok(self.service.scores(&id).await?)
    }

    pub async fn leaderboard(&mut self) -> Result<Vec<LeaderboardEntry>> {
        self.enter(Page::Leaderboard)?;
        Ok(self.service.leaderboard().await?.leaderboard)
    }

    pub async fn stats(&mut self) -> Result<CompetitionStats> {
        self.enter(Page::Leaderboard)?;
        Ok(self.service.stats().await?)
    }

    pub async fn health(&self) -> Option<HealthStatus> {
        self.service.health().await
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session.logout()?;
        self.shell.on_logout();
        self.upload = UploadFlow::new();
        tracing::info!("logged out");
        Ok(())
    }
}
