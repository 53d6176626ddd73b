//! Generated Kolam Gallery
//!
//! Six placeholder tiles until the backend returns generated patterns.

use dioxus::prelude::*;
use kolam_core::demo::{gallery_from_result, placeholder_gallery, GeneratedKolam, MAX_COMPLEXITY};
use kolam_core::AnalysisResult;
use kolam_ui::{Button, ButtonVariant, CardAccent, ComplexityDots, SectionCard};

pub const PLACEHOLDER_TILES: u32 = 6;

/// Tiles for `result`, or `placeholders` when it carries no generated patterns.
pub fn gallery_tiles(result: Option<&AnalysisResult>, placeholders: &[GeneratedKolam]) -> Vec<GeneratedKolam> {
    match result.map(gallery_from_result) {
        Some(tiles) if !tiles.is_empty() => tiles,
        _ => placeholders.to_vec(),
    }
}

#[component]
pub fn GeneratedKolams(#[props(default)] result: Option<AnalysisResult>) -> Element {
    // Fixed per mount so complexities don't reshuffle on re-render
    let placeholders = use_hook(|| placeholder_gallery(PLACEHOLDER_TILES));
    let tiles = gallery_tiles(result.as_ref(), &placeholders);

    rsx! {
        SectionCard {
            title: "Generated Kolam Gallery".to_string(),
            icon: "\u{2726}".to_string(),
            accent: CardAccent::Nature,
            subtitle: "AI-generated kolam patterns based on traditional designs and mathematical principles".to_string(),
            div { class: "gallery",
                for kolam in tiles {
                    div { key: "{kolam.id}", class: "gallery__tile",
                        div { class: "gallery__art",
                            if let Some(url) = kolam.image_url.clone() {
                                img { src: "{url}", alt: "{kolam.title}" }
                            } else {
                                span { class: "mandala-spin", "\u{2726}" }
                                p { class: "text-muted", "Generated Pattern" }
                            }
                        }
                        h4 { "{kolam.title}" }
                        p { class: "text-muted", "{kolam.pattern}" }
                        ComplexityDots { level: kolam.complexity, max: MAX_COMPLEXITY }
                    }
                }
                div { class: "gallery__tile gallery__tile--more",
                    span { "+" }
                    p { "Generate More" }
                    p { class: "text-muted", "Coming Soon" }
                }
            }
            div { class: "gallery__actions",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: true,
                    "Generate New Kolams (Coming Soon)"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholders_without_generated_patterns() {
        let placeholders = placeholder_gallery(PLACEHOLDER_TILES);
        assert_eq!(gallery_tiles(None, &placeholders), placeholders);
        assert_eq!(
            gallery_tiles(Some(&AnalysisResult::default()), &placeholders).len(),
            6
        );
    }

    #[test]
    fn generated_patterns_replace_placeholders() {
        let placeholders = placeholder_gallery(PLACEHOLDER_TILES);
        let result = AnalysisResult {
            generated_kolams: Some(vec!["https://cdn.example/k1.png".to_string()]),
            ..Default::default()
        };
        let tiles = gallery_tiles(Some(&result), &placeholders);
        assert_eq!(tiles.len(), 1);
        assert_eq!(tiles[0].image_url.as_deref(), Some("https://cdn.example/k1.png"));
    }
}
