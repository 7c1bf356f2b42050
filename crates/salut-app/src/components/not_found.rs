//! Static not-found screen.

use dioxus::prelude::*;

use super::BounceDots;

/// View shown for unknown navigation targets.
#[component]
pub fn NotFoundScreen(on_home: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "not-found-screen",

            h1 { class: "not-found-code", "404" }

            div {
                class: "screen-text",
                h2 { class: "screen-title", "Page Not Found" }
                p { class: "screen-hint", "Oops! The screen you're looking for doesn't exist." }
            }

            div {
                class: "screen-actions",
                button {
                    class: "action-button",
                    onclick: move |_| on_home.call(()),
                    "Back to Home"
                }
                BounceDots {}
            }

            div {
                class: "suggestions-card",
                p { class: "suggestions-label", "You might be looking for:" }
                div {
                    class: "suggestions-list",
                    button {
                        class: "suggestion suggestion-link",
                        onclick: move |_| on_home.call(()),
                        "Home Screen"
                    }
                    span { class: "suggestion suggestion-disabled", "About (Coming Soon)" }
                    span { class: "suggestion suggestion-disabled", "Contact (Coming Soon)" }
                }
            }
        }
    }
}
