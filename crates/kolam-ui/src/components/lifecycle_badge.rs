//! Lifecycle Badge Component
//!
//! Shows where an analysis is in its lifecycle:
//! - "ready" - nothing submitted yet
//! - "uploading" - image is being sent
//! - "analyzing (n)" - server is processing, n status checks so far
//! - "complete" / "failed" - terminal states

use dioxus::prelude::*;
use kolam_core::Lifecycle;

/// Display label for a lifecycle stage.
pub fn lifecycle_label(lifecycle: Lifecycle, status_checks: u32) -> String {
    match lifecycle {
        Lifecycle::Idle => "ready".to_string(),
        Lifecycle::Uploading => "uploading".to_string(),
        Lifecycle::Analyzing if status_checks > 0 => format!("analyzing ({status_checks})"),
        Lifecycle::Analyzing => "analyzing".to_string(),
        Lifecycle::Completed => "complete".to_string(),
        Lifecycle::Failed => "failed".to_string(),
    }
}

/// CSS modifier for a lifecycle stage
pub fn lifecycle_class(lifecycle: Lifecycle) -> &'static str {
    match lifecycle {
        Lifecycle::Idle => "lifecycle-badge",
        Lifecycle::Uploading | Lifecycle::Analyzing => "lifecycle-badge active",
        Lifecycle::Completed => "lifecycle-badge complete",
        Lifecycle::Failed => "lifecycle-badge failed",
    }
}

/// Pulsing dot plus label
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     LifecycleBadge { lifecycle: Lifecycle::Analyzing, status_checks: 3 }
/// }
/// ```
#[component]
pub fn LifecycleBadge(lifecycle: Lifecycle, #[props(default)] status_checks: u32) -> Element {
    let label = lifecycle_label(lifecycle, status_checks);
    let active = lifecycle.is_processing();

    rsx! {
        div { class: "{lifecycle_class(lifecycle)}",
            span {
                class: if active { "status-dot active" } else { "status-dot" },
                role: "img",
                "aria-label": if active { "In progress" } else { "Idle" },
            }
            span { class: "status-label", "{label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_per_stage() {
        assert_eq!(lifecycle_label(Lifecycle::Idle, 0), "ready");
        assert_eq!(lifecycle_label(Lifecycle::Uploading, 0), "uploading");
        assert_eq!(lifecycle_label(Lifecycle::Analyzing, 0), "analyzing");
        assert_eq!(lifecycle_label(Lifecycle::Analyzing, 4), "analyzing (4)");
        assert_eq!(lifecycle_label(Lifecycle::Completed, 7), "complete");
        assert_eq!(lifecycle_label(Lifecycle::Failed, 30), "failed");
    }

    #[test]
    fn processing_stages_are_active() {
        assert!(lifecycle_class(Lifecycle::Uploading).contains("active"));
        assert!(lifecycle_class(Lifecycle::Analyzing).contains("active"));
        assert!(!lifecycle_class(Lifecycle::Idle).contains("active"));
    }
}
