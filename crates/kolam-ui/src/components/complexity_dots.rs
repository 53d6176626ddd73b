//! Complexity indicator: a row of filled and empty dots.

use dioxus::prelude::*;

/// Fill state of each dot for `level` out of `max`.
pub fn dot_states(level: u8, max: u8) -> Vec<bool> {
    (0..max).map(|i| i < level).collect()
}

#[component]
pub fn ComplexityDots(level: u8, #[props(default = 5)] max: u8) -> Element {
    rsx! {
        div { class: "complexity",
            div {
                class: "complexity__dots",
                role: "img",
                "aria-label": "Complexity {level} of {max}",
                for (i, filled) in dot_states(level, max).into_iter().enumerate() {
                    span {
                        key: "{i}",
                        class: if filled { "complexity__dot filled" } else { "complexity__dot" },
                    }
                }
            }
            span { class: "complexity__label", "Complexity" }
        }
    }
}
