//! Analysis results: cultural description, mathematical analysis with the
//! analysis image, and the parametric model with its Desmos link.

use dioxus::prelude::*;
use kolam_core::demo::sample_result;
use kolam_core::AnalysisResult;
use kolam_ui::{Button, ButtonVariant, CardAccent, SectionCard};

/// Result to display, falling back to the sample analysis.
pub fn displayed_result(result: Option<&AnalysisResult>) -> AnalysisResult {
    match result {
        Some(result) if !result.is_empty() => result.clone(),
        _ => sample_result(),
    }
}

#[component]
pub fn KolamResults(
    /// Real analysis data; sample content is shown when absent
    #[props(default)]
    result: Option<AnalysisResult>,
    #[props(default = false)] can_download: bool,
    on_download: EventHandler<()>,
) -> Element {
    let data = displayed_result(result.as_ref());
    let cultural = data.cultural_description.clone().unwrap_or_default();
    let math = data.mathematical_analysis.clone().unwrap_or_default();
    let equations = data.equations.clone().unwrap_or_default();

    rsx! {
        div { class: "results",
            SectionCard {
                title: "Cultural & Spiritual Significance".to_string(),
                icon: "\u{1F3A8}".to_string(),
                accent: CardAccent::Saffron,
                badge: "AI Generated".to_string(),
                div { class: "kolam-pattern results__prose",
                    p { "{cultural}" }
                }
            }

            SectionCard {
                title: "Mathematical Analysis".to_string(),
                icon: "\u{2211}".to_string(),
                accent: CardAccent::Neon,
                div { class: "results__grid",
                    div {
                        h4 { "Analysis Results" }
                        pre { class: "results__pre math-grid", "{math}" }
                    }
                    div {
                        div { class: "results__row",
                            h4 { "Visualization" }
                            Button {
                                variant: ButtonVariant::Outline,
                                class: "neon-pulse".to_string(),
                                disabled: !can_download,
                                onclick: move |_| on_download.call(()),
                                "Download"
                            }
                        }
                        div { class: "results__image",
                            if let Some(url) = data.analysis_image_url.clone() {
                                img { src: "{url}", alt: "Kolam analysis visualization" }
                            } else {
                                div { class: "results__placeholder",
                                    span { class: "mandala-spin", "\u{2726}" }
                                    p { class: "text-muted", "Analysis visualization will appear here" }
                                }
                            }
                        }
                    }
                }
            }

            SectionCard {
                title: "Parametric Mathematical Model".to_string(),
                icon: "\u{2197}".to_string(),
                accent: CardAccent::Mystic,
                div { class: "results__grid",
                    div {
                        h4 { "Equations" }
                        pre { class: "results__pre results__pre--mystic", "{equations}" }
                    }
                    div { class: "results__desmos",
                        h4 { "Interactive Visualization" }
                        p { class: "text-muted", "View the mathematical model interactively" }
                        if let Some(url) = data.desmos_url.clone() {
                            a {
                                class: "btn-mystic",
                                href: "{url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "View in Desmos"
                            }
                        } else {
                            Button { variant: ButtonVariant::Mystic, disabled: true, "View in Desmos" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_sample_without_data() {
        assert_eq!(displayed_result(None), sample_result());
        assert_eq!(displayed_result(Some(&AnalysisResult::default())), sample_result());
    }

    #[test]
    fn real_data_wins() {
        let result = AnalysisResult {
            cultural_description: Some("Sikku kolam".to_string()),
            ..Default::default()
        };
        assert_eq!(displayed_result(Some(&result)), result);
    }
}
