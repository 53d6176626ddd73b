//! Button Components
//!
//! - Primary: saffron gradient for the main action (Analyze Kolam)
//! - Outline: bordered, for Choose File, Download and Back to Upload
//! - Mystic: violet gradient for links into interactive models
//! - Ghost: text only

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Outline,
    Mystic,
    Ghost,
}

impl ButtonVariant {
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Outline => "btn-outline",
            ButtonVariant::Mystic => "btn-mystic",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

/// Full class list for a button: variant, busy modifier, then extras.
pub fn button_class(variant: ButtonVariant, busy: bool, extra: Option<&str>) -> String {
    let mut classes = vec![variant.class()];
    if busy {
        classes.push("is-busy");
    }
    if let Some(extra) = extra.filter(|e| !e.trim().is_empty()) {
        classes.push(extra);
    }
    classes.join(" ")
}

/// Styled button.
///
/// A busy button is disabled and shows a spinner before its label.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         busy: session.read().is_processing(),
///         onclick: move |_| analyze(),
///         "Analyze Kolam"
///     }
/// }
/// ```
#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] onclick: Option<EventHandler<()>>,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] busy: bool,
    #[props(default)] class: Option<String>,
    children: Element,
) -> Element {
    let full_class = button_class(variant, busy, class.as_deref());

    rsx! {
        button {
            class: "{full_class}",
            r#type: "button",
            disabled: disabled || busy,
            "aria-busy": busy,
            onclick: move |_| {
                if let Some(handler) = &onclick {
                    handler.call(());
                }
            },
            if busy {
                span { class: "spinner" }
            }
            {children}
        }
    }
}

/// Dismiss button for toasts and panels.
#[component]
pub fn CloseButton(onclick: EventHandler<()>, #[props(default = "Close".to_string())] label: String) -> Element {
    rsx! {
        button {
            class: "icon-btn close-btn",
            r#type: "button",
            "aria-label": "{label}",
            onclick: move |_| onclick.call(()),
            "\u{00D7}"
        }
    }
}
