//! Analysis page - follows the current session.
//!
//! Shows a processing indicator while the lifecycle runs, the error when it
//! fails, and the results plus generated gallery.

use std::path::PathBuf;

use dioxus::prelude::*;
use kolam_core::{download_file_name, AnalysisSession, Lifecycle};
use kolam_ui::{Button, ButtonVariant, LifecycleBadge};
use rfd::FileDialog;

use crate::app::Route;
use crate::components::{GeneratedKolams, KolamResults};
use crate::context::{use_controller, use_session};

/// Whether the results section is rendered for `session`.
///
/// Idle sessions show the sample analysis as a preview.
pub fn shows_results(session: &AnalysisSession) -> bool {
    session.has_results() || session.lifecycle == Lifecycle::Idle
}

#[component]
pub fn Analysis() -> Element {
    let navigator = use_navigator();
    let controller = use_controller();
    let session = use_session();

    let handle_download = move |_| {
        let controller = controller.clone();
        let suggested = session
            .peek()
            .analysis_id
            .as_ref()
            .map(download_file_name)
            .unwrap_or_else(|| "kolam-analysis.png".to_string());

        spawn(async move {
            let target = tokio::task::spawn_blocking(move || {
                let start_dir = dirs::download_dir().unwrap_or_else(|| PathBuf::from("."));
                FileDialog::new()
                    .set_title("Save Analysis Image")
                    .set_directory(start_dir)
                    .set_file_name(suggested)
                    .add_filter("PNG image", &["png"])
                    .save_file()
            })
            .await;

            match target {
                Ok(Some(path)) => {
                    // Notices report success or failure
                    if let Err(e) = controller.download_image(&path).await {
                        tracing::warn!("Download failed: {}", e);
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::error!("Save dialog error: {:?}", e),
            }
        });
    };

    let current = session.read().clone();

    rsx! {
        main { class: "analysis-page container",
            header { class: "analysis-header",
                Button {
                    variant: ButtonVariant::Outline,
                    class: "sacred-glow".to_string(),
                    onclick: move |_| { navigator.push(Route::Index {}); },
                    "\u{2190} Back to Upload"
                }
                div {
                    h1 { class: "page-title", "Kolam Analysis Results" }
                    p { class: "text-muted", "Discover the cultural significance and mathematical beauty" }
                }
                LifecycleBadge { lifecycle: current.lifecycle, status_checks: current.status_checks }
            }

            div { class: "analysis-body",
                if current.is_processing() {
                    div { class: "processing",
                        div { class: "spinner spinner--large" }
                        p { "Processing your kolam analysis..." }
                    }
                }

                if let Some(error) = current.error.clone() {
                    div { class: "analysis-error", role: "alert",
                        p { "{error}" }
                    }
                }

                if shows_results(&current) {
                    KolamResults {
                        result: current.result.clone(),
                        can_download: current.can_download(),
                        on_download: handle_download,
                    }
                }

                GeneratedKolams { result: current.result.clone() }
            }
        }
    }
}
