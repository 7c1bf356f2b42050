//! Static loading screen.

use dioxus::prelude::*;

use super::BounceDots;

/// Startup view shown until the greeting catalog is ready.
#[component]
pub fn LoadingScreen() -> Element {
    rsx! {
        div {
            class: "loading-screen",

            div {
                class: "spinner",
                div { class: "spinner-track" }
                div { class: "spinner-arc" }
            }

            div {
                class: "loading-text",
                h2 { class: "loading-title", "Loading..." }
                p { class: "loading-hint", "Preparing your greeting experience" }
            }

            BounceDots {}

            div {
                class: "progress-bar",
                div { class: "progress-fill" }
            }

            div {
                class: "status-pill status-info",
                span { class: "pill-dot" }
                span { "Loading greeting viewer" }
            }
        }
    }
}
