//! Render-failure fallback screen.

use dioxus::prelude::*;

/// Fallback view shown when a screen fails to render.
///
/// Offers a retry (re-invoke the failed render) and a way back home. The
/// raw error text is only shown in debug builds.
#[component]
pub fn ErrorScreen(
    message: String,
    on_retry: EventHandler<()>,
    on_home: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "error-screen",

            h1 { class: "error-headline", "Oops!" }

            div {
                class: "screen-text",
                h2 { class: "screen-title", "Something went wrong!" }
                p { class: "screen-hint", "Don't worry, it's not your fault. Let's try again." }

                if cfg!(debug_assertions) {
                    details {
                        class: "error-details",
                        summary { "Error details" }
                        pre { "{message}" }
                    }
                }
            }

            div {
                class: "screen-actions",
                button {
                    class: "action-button action-danger",
                    onclick: move |_| on_retry.call(()),
                    "Try Again"
                }
                button {
                    class: "action-button action-outline",
                    onclick: move |_| on_home.call(()),
                    "Go Home"
                }
            }

            div {
                class: "status-pill status-error",
                span { class: "pill-dot" }
                span { "Error detected, ready to retry" }
            }
        }
    }
}
