//! Analysis session state and the pure transition rules behind it.
//!
//! ```text
//!            start              upload ok                completed
//!   Idle ──────────▶ Uploading ──────────▶ Analyzing ──────────────▶ Completed
//!    ▲                   │                  │    ▲
//!    │                   │ upload error     │    │ processing (wait interval)
//!    │                   ▼                  │    │
//!    │                 Failed ◀─────────────┴────┘
//!    │                          failed / fetch error / attempt ceiling
//!    └──────────── reset (from any state)
//! ```

use std::fmt;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::config::PollPolicy;
use crate::error::{KolamError, KolamResult};
use crate::types::{AnalysisId, AnalysisResult, AnalysisStatus, UploadResponse};
use crate::upload::KolamImage;

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lifecycle {
    #[default]
    Idle,
    Uploading,
    Analyzing,
    Completed,
    Failed,
}

impl Lifecycle {
    pub fn is_processing(&self) -> bool {
        matches!(self, Lifecycle::Uploading | Lifecycle::Analyzing)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Lifecycle::Completed | Lifecycle::Failed)
    }
}

impl fmt::Display for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifecycle::Idle => write!(f, "idle"),
            Lifecycle::Uploading => write!(f, "uploading"),
            Lifecycle::Analyzing => write!(f, "analyzing"),
            Lifecycle::Completed => write!(f, "completed"),
            Lifecycle::Failed => write!(f, "failed"),
        }
    }
}

/// The single analysis tracked by a client.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalysisSession {
    pub lifecycle: Lifecycle,
    pub analysis_id: Option<AnalysisId>,
    pub uploaded_file: Option<KolamImage>,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    /// Status checks issued for the current analysis
    pub status_checks: u32,
    pub started_at: Option<DateTime<Utc>>,
}

impl AnalysisSession {
    /// `idle → uploading`. Clears the previous error and result.
    pub fn begin_upload(&mut self, image: KolamImage) {
        *self = AnalysisSession {
            lifecycle: Lifecycle::Uploading,
            uploaded_file: Some(image),
            started_at: Some(Utc::now()),
            ..Default::default()
        };
    }

    /// `uploading → analyzing`
    pub fn upload_accepted(&mut self, id: AnalysisId) {
        self.lifecycle = Lifecycle::Analyzing;
        self.analysis_id = Some(id);
        self.status_checks = 0;
    }

    pub fn record_status_check(&mut self, checks: u32) {
        self.status_checks = checks;
    }

    /// `analyzing → completed`
    pub fn complete(&mut self, result: AnalysisResult) {
        self.lifecycle = Lifecycle::Completed;
        self.result = Some(result);
        self.error = None;
    }

    /// `uploading | analyzing → failed`
    pub fn fail(&mut self, message: impl Into<String>) {
        self.lifecycle = Lifecycle::Failed;
        self.error = Some(message.into());
    }

    /// Back to the initial empty state.
    pub fn reset(&mut self) {
        *self = AnalysisSession::default();
    }

    /// Attach a result without going through the backend.
    pub fn set_result(&mut self, result: AnalysisResult) {
        self.result = Some(result);
    }

    /// Attach an analysis id without going through the backend.
    pub fn set_analysis_id(&mut self, id: AnalysisId) {
        self.analysis_id = Some(id);
    }

    pub fn is_processing(&self) -> bool {
        self.lifecycle.is_processing()
    }

    pub fn is_terminal(&self) -> bool {
        self.lifecycle.is_terminal()
    }

    pub fn has_results(&self) -> bool {
        self.result.is_some()
    }

    pub fn can_download(&self) -> bool {
        self.analysis_id.is_some()
            && self
                .result
                .as_ref()
                .is_some_and(|r| r.analysis_image_url.is_some())
    }

    pub fn desmos_url(&self) -> Option<&str> {
        self.result.as_ref().and_then(|r| r.desmos_url.as_deref())
    }

    pub fn can_view_desmos(&self) -> bool {
        self.desmos_url().is_some()
    }
}

/// Turn an upload response into the id to poll.
pub fn accept_upload(response: UploadResponse) -> KolamResult<AnalysisId> {
    if !response.success {
        let message = if response.message.is_empty() {
            "Upload failed".to_string()
        } else {
            response.message
        };
        return Err(KolamError::UploadRejected(message));
    }
    if response.analysis_id.trim().is_empty() {
        return Err(KolamError::MissingAnalysisId);
    }
    Ok(AnalysisId::new(response.analysis_id))
}

/// What to do after a status check
#[derive(Debug)]
pub enum PollStep {
    /// Check again after the delay
    Wait(Duration),
    /// Fetch the full result exactly once
    FetchResults,
    Fail(KolamError),
}

/// Decide the next step given the latest status and the number of status
/// checks issued so far (including this one).
pub fn next_step(policy: &PollPolicy, status: AnalysisStatus, checks: u32) -> PollStep {
    match status {
        AnalysisStatus::Completed => PollStep::FetchResults,
        AnalysisStatus::Failed => PollStep::Fail(KolamError::AnalysisFailed),
        AnalysisStatus::Processing if checks >= policy.max_attempts => {
            PollStep::Fail(KolamError::TimedOut { attempts: checks })
        }
        AnalysisStatus::Processing => PollStep::Wait(policy.interval),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> KolamImage {
        KolamImage::new("kolam.png", "image/png", vec![1, 2, 3])
    }

    fn completed_session() -> AnalysisSession {
        let mut session = AnalysisSession::default();
        session.begin_upload(image());
        session.upload_accepted(AnalysisId::new("a1"));
        session.complete(AnalysisResult {
            analysis_image_url: Some("https://cdn.example.com/a1.png".to_string()),
            desmos_url: Some("https://www.desmos.com/calculator/abc".to_string()),
            ..Default::default()
        });
        session
    }

    #[test]
    fn test_default_is_idle_and_empty() {
        let session = AnalysisSession::default();
        assert_eq!(session.lifecycle, Lifecycle::Idle);
        assert!(session.analysis_id.is_none());
        assert!(!session.is_processing());
        assert!(!session.has_results());
    }

    #[test]
    fn test_begin_upload_clears_error() {
        let mut session = AnalysisSession::default();
        session.fail("Upload failed: Bad Request");
        session.begin_upload(image());

        assert_eq!(session.lifecycle, Lifecycle::Uploading);
        assert!(session.error.is_none());
        assert!(session.uploaded_file.is_some());
        assert!(session.started_at.is_some());
        assert!(session.is_processing());
    }

    #[test]
    fn test_completed_flags() {
        let session = completed_session();
        assert!(session.is_terminal());
        assert!(session.has_results());
        assert!(session.can_download());
        assert!(session.can_view_desmos());
        assert!(!session.is_processing());
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut states = vec![AnalysisSession::default(), completed_session()];

        let mut uploading = AnalysisSession::default();
        uploading.begin_upload(image());
        states.push(uploading.clone());

        let mut analyzing = uploading.clone();
        analyzing.upload_accepted(AnalysisId::new("a2"));
        analyzing.record_status_check(4);
        states.push(analyzing);

        let mut failed = uploading;
        failed.fail("Analysis timed out");
        states.push(failed);

        for mut session in states {
            session.reset();
            assert_eq!(session, AnalysisSession::default());
        }
    }

    #[test]
    fn test_accept_upload() {
        let id = accept_upload(UploadResponse {
            success: true,
            analysis_id: "abc".to_string(),
            message: String::new(),
        })
        .unwrap();
        assert_eq!(id.as_str(), "abc");
    }

    #[test]
    fn test_accept_upload_rejected_uses_message() {
        let err = accept_upload(UploadResponse {
            success: false,
            analysis_id: String::new(),
            message: "Unsupported image".to_string(),
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "Unsupported image");
    }

    #[test]
    fn test_accept_upload_empty_id() {
        let err = accept_upload(UploadResponse {
            success: true,
            analysis_id: "  ".to_string(),
            message: String::new(),
        })
        .unwrap_err();
        assert!(matches!(err, KolamError::MissingAnalysisId));
    }

    #[test]
    fn test_next_step() {
        let policy = PollPolicy::default();

        assert!(matches!(
            next_step(&policy, AnalysisStatus::Processing, 1),
            PollStep::Wait(d) if d == policy.interval
        ));
        assert!(matches!(
            next_step(&policy, AnalysisStatus::Completed, 1),
            PollStep::FetchResults
        ));
        assert!(matches!(
            next_step(&policy, AnalysisStatus::Failed, 3),
            PollStep::Fail(KolamError::AnalysisFailed)
        ));
    }

    #[test]
    fn test_ceiling_reached_on_thirtieth_processing() {
        let policy = PollPolicy::default();
        assert!(matches!(
            next_step(&policy, AnalysisStatus::Processing, 29),
            PollStep::Wait(_)
        ));
        assert!(matches!(
            next_step(&policy, AnalysisStatus::Processing, 30),
            PollStep::Fail(KolamError::TimedOut { attempts: 30 })
        ));
    }

    #[test]
    fn test_completed_at_ceiling_still_fetches() {
        let policy = PollPolicy::default();
        assert!(matches!(
            next_step(&policy, AnalysisStatus::Completed, 30),
            PollStep::FetchResults
        ));
    }
}
