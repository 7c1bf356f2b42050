//! Shared decorative bounce dots.

use dioxus::prelude::*;

/// Three staggered bounce dots.
#[component]
pub fn BounceDots() -> Element {
    rsx! {
        div {
            class: "bounce-dots",
            span { class: "dot dot-1" }
            span { class: "dot dot-2" }
            span { class: "dot dot-3" }
        }
    }
}
