//! Index page - hero, upload form and feature overview.
//!
//! Submitting an image starts the analysis and moves to the analysis page,
//! which follows the session from there.

use dioxus::prelude::*;
use kolam_core::{AnalysisController, AnalysisResult, KolamImage, KolamResult};
use kolam_ui::{CardAccent, KolamGrid, SectionCard};
use tokio::task::JoinHandle;

use crate::app::Route;
use crate::components::KolamUpload;
use crate::context::{use_controller, use_session};
use crate::theme::colors;

/// Start analysing `image` in the background. The controller reports the
/// upload and its outcome through its own notices.
fn submit(controller: &AnalysisController, image: KolamImage) -> JoinHandle<KolamResult<AnalysisResult>> {
    tracing::info!("Submitting {} ({})", image.file_name, image.size_mb());
    controller.start(image)
}

#[component]
pub fn Index() -> Element {
    let navigator = use_navigator();
    let controller = use_controller();
    let session = use_session();

    let handle_upload = move |image: KolamImage| {
        // Runs detached; the session signal carries progress
        let _ = submit(&controller, image);
        navigator.push(Route::Analysis {});
    };

    rsx! {
        main { class: "landing",
            section { class: "hero",
                KolamGrid {
                    size: 640,
                    opacity: 0.12,
                    dot_color: colors::SAFFRON.to_string(),
                    line_color: colors::MYSTIC.to_string(),
                }
                div { class: "hero__content",
                    h1 { class: "page-title", "कोलम विश्लेषक" }
                    h2 { class: "hero__subtitle", "Kolam Analyzer" }
                    p { class: "tagline",
                        "Discover the sacred geometry, cultural significance, and mathematical beauty hidden within traditional kolam patterns"
                    }
                    div { class: "hero__pills",
                        span { class: "pill accent-saffron", "Cultural Analysis" }
                        span { class: "pill accent-neon", "Mathematical Modeling" }
                        span { class: "pill accent-mystic", "Interactive Visualization" }
                    }
                }
            }

            section { class: "container narrow",
                div { class: "section-intro",
                    h3 { "Begin Your Journey of Discovery" }
                    p { class: "text-muted",
                        "Upload an image of your kolam to unlock its cultural stories and mathematical secrets"
                    }
                }
                KolamUpload {
                    on_upload: handle_upload,
                    is_processing: session.read().is_processing(),
                }
            }

            section { class: "container features",
                SectionCard {
                    title: "Cultural Heritage".to_string(),
                    icon: "\u{1F3A8}".to_string(),
                    accent: CardAccent::Saffron,
                    p { class: "text-muted",
                        "AI-powered analysis reveals the spiritual significance, regional variations, and traditional meanings encoded in your kolam"
                    }
                }
                SectionCard {
                    title: "Mathematical Beauty".to_string(),
                    icon: "\u{2211}".to_string(),
                    accent: CardAccent::Neon,
                    p { class: "text-muted",
                        "Discover the geometric patterns, symmetries, and mathematical principles that make your kolam a masterpiece of sacred geometry"
                    }
                }
                SectionCard {
                    title: "Interactive Models".to_string(),
                    icon: "\u{2726}".to_string(),
                    accent: CardAccent::Mystic,
                    p { class: "text-muted",
                        "Explore parametric equations and interactive mathematical models that capture the essence of your kolam's design"
                    }
                }
            }

            footer { class: "footer",
                p { class: "text-muted",
                    "Preserving tradition through technology \u{2022} Celebrating the intersection of art, culture, and mathematics"
                }
                p { class: "footer__motto",
                    span { class: "accent-saffron", "\u{2022}" }
                    " सत्यं शिवं सुन्दरम् "
                    span { class: "accent-saffron", "\u{2022}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use kolam_core::{DemoBackend, PollPolicy};

    use super::*;

    #[tokio::test]
    async fn submit_announces_upload_once() {
        let policy = PollPolicy::new(Duration::from_millis(1), 3).unwrap();
        let controller = AnalysisController::new(Arc::new(DemoBackend::default()), policy);
        let mut notices = controller.notices();

        let image = KolamImage::new("pulli.png", "image/png", vec![0]);
        submit(&controller, image).await.unwrap().unwrap();

        let mut titles = Vec::new();
        while let Ok(notice) = notices.try_recv() {
            titles.push(notice.title);
        }
        assert_eq!(titles, ["Upload successful", "Analysis complete"]);
    }
}
