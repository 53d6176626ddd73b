//! Toast stack for lifecycle notices.

use dioxus::prelude::*;
use kolam_core::NoticeLevel;
use kolam_ui::CloseButton;

use crate::context::use_notices;

pub fn toast_class(level: NoticeLevel) -> String {
    format!("toast {}", level.class())
}

#[component]
pub fn ToastStack() -> Element {
    let mut notices = use_notices();

    rsx! {
        div { class: "toast-stack", role: "status", "aria-live": "polite",
            for notice in notices.read().iter().cloned() {
                div { key: "{notice.id}", class: "{toast_class(notice.level)}",
                    div { class: "toast__body",
                        p { class: "toast__title", "{notice.title}" }
                        p { class: "toast__description", "{notice.description}" }
                    }
                    CloseButton {
                        onclick: move |_| notices.write().retain(|n| n.id != notice.id),
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
    fn toast_classes() {
        assert_eq!(toast_class(NoticeLevel::Info), "toast toast--info");
        assert_eq!(toast_class(NoticeLevel::Error), "toast toast--error");
    }
}
