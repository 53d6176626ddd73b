//! Section card with an icon title.

use dioxus::prelude::*;

/// Accent colour of a card's icon
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum CardAccent {
    #[default]
    Saffron,
    Neon,
    Mystic,
    Nature,
}

impl CardAccent {
    pub fn class(&self) -> &'static str {
        match self {
            CardAccent::Saffron => "accent-saffron",
            CardAccent::Neon => "accent-neon",
            CardAccent::Mystic => "accent-mystic",
            CardAccent::Nature => "accent-nature",
        }
    }
}

/// Bordered card used for every results section.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     SectionCard {
///         title: "Mathematical Analysis".to_string(),
///         icon: "∑".to_string(),
///         accent: CardAccent::Neon,
///         p { "..." }
///     }
/// }
/// ```
#[component]
pub fn SectionCard(
    title: String,
    /// Short glyph shown before the title
    icon: String,
    #[props(default)] accent: CardAccent,
    /// Optional badge after the title
    #[props(default)]
    badge: Option<String>,
    /// Optional subtitle under the title
    #[props(default)]
    subtitle: Option<String>,
    children: Element,
) -> Element {
    rsx! {
        section { class: "cultural-border sacred-glow section-card",
            header { class: "section-card__header",
                h2 { class: "section-card__title",
                    span { class: "section-card__icon {accent.class()}", "{icon}" }
                    "{title}"
                    if let Some(badge) = badge {
                        span { class: "badge-outline", "{badge}" }
                    }
                }
                if let Some(subtitle) = subtitle {
                    p { class: "text-muted", "{subtitle}" }
                }
            }
            div { class: "section-card__body", {children} }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_classes() {
        assert_eq!(CardAccent::default().class(), "accent-saffron");
        assert_eq!(CardAccent::Mystic.class(), "accent-mystic");
    }
}
