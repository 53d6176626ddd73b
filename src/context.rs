//! Analysis context for the Kolam Analyzer.
//!
//! The controller is injected at launch; `App` mirrors its session and
//! notices into signals so components re-render on every change.
//!
//! ## Usage
//!
//! ```ignore
//! let controller = use_controller();
//! let session = use_session();
//!
//! if session.read().is_processing() { /* ... */ }
//! ```

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use kolam_core::{AnalysisController, AnalysisSession, Notice};

/// Shared controller type for context.
pub type SharedController = Arc<AnalysisController>;

/// How long a toast stays on screen
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// Hook to access the analysis controller.
pub fn use_controller() -> SharedController {
    use_context::<SharedController>()
}

/// Hook to read the latest session snapshot.
pub fn use_session() -> Signal<AnalysisSession> {
    use_context::<Signal<AnalysisSession>>()
}

/// Hook to access the visible notices, oldest first.
pub fn use_notices() -> Signal<Vec<Notice>> {
    use_context::<Signal<Vec<Notice>>>()
}

/// Drop notices older than `ttl`. Returns whether anything was removed.
pub fn prune_expired(notices: &mut Vec<Notice>, now: DateTime<Utc>, ttl: Duration) -> bool {
    let ttl = chrono::Duration::from_std(ttl).unwrap_or_else(|_| chrono::Duration::weeks(52));
    let before = notices.len();
    notices.retain(|n| !n.expired(now, ttl));
    notices.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prune_removes_only_expired_notices() {
        let now = Utc::now();
        let mut old = Notice::info("Upload successful", "Your kolam is being analyzed...");
        old.created_at = now - chrono::Duration::seconds(6);
        let fresh = Notice::error("Analysis failed", "Analysis failed on server");

        let mut notices = vec![old, fresh.clone()];
        assert!(prune_expired(&mut notices, now, NOTICE_TTL));
        assert_eq!(notices, vec![fresh]);

        assert!(!prune_expired(&mut notices, now, NOTICE_TTL));
    }
}
