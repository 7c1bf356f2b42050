//! The greeting rotator screen.
//!
//! Owns the two timers of the app: a one-second clock ticker and a
//! three-second greeting cycler. Both run as `use_future` tasks and are
//! dropped with the component, which cancels them.

use dioxus::prelude::*;
use tokio::time::sleep;

use salut_core::clock;
use salut_core::greetings::{GreetingCatalog, GreetingError};
use salut_core::rotation::{CLOCK_TICK, ROTATION_INTERVAL, RotationState};

use super::BounceDots;

/// Subtitle under the rotating greeting.
const SUBTITLE: &str = "Welcome to the future of desktop development";

/// Greeting rotator screen with the live clock and the manual trigger.
#[component]
pub fn Home(catalog: GreetingCatalog, on_render_error: EventHandler<GreetingError>) -> Element {
    let mut rotation = use_signal(move || RotationState::new(catalog.len()));

    // Clock ticker: publish immediately, then once per second.
    let _clock_loop = use_future(move || async move {
        loop {
            rotation.write().set_time(clock::now_display());
            sleep(CLOCK_TICK).await;
        }
    });

    // Greeting cycler: advance once every three seconds.
    let _greeting_loop = use_future(move || async move {
        loop {
            sleep(ROTATION_INTERVAL).await;
            rotation.write().advance();
        }
    });

    let (index, time) = {
        let state = rotation.read();
        (state.index(), state.time().map(str::to_string))
    };

    // Skeleton placeholder until the first clock tick lands.
    let Some(time) = time else {
        return rsx! {
            div {
                class: "home-screen",
                div {
                    class: "skeleton",
                    div { class: "skeleton-block skeleton-title" }
                    div { class: "skeleton-block skeleton-clock" }
                }
            }
        };
    };

    let greeting = match catalog.get(index) {
        Ok(text) => text,
        Err(err) => {
            // Hand the failure to the app-level fallback.
            spawn(async move { on_render_error.call(err) });
            return rsx! {};
        }
    };

    rsx! {
        div {
            class: "home-screen",

            // Rotating greeting
            div {
                class: "greeting-display",
                h1 {
                    class: "greeting-title",
                    "{greeting}"
                }
                div { class: "greeting-glow" }
            }

            p {
                class: "subtitle",
                "{SUBTITLE}"
            }

            // Live clock
            div {
                class: "clock-card",
                p { class: "clock-label", "Current Time" }
                p { class: "clock-value", "{time}" }
            }

            // Manual rotation trigger
            div {
                class: "screen-actions",
                button {
                    class: "action-button",
                    onclick: move |_| {
                        rotation.write().advance();
                    },
                    "Change Greeting"
                }

                BounceDots {}
            }

            // Stack badge
            div {
                class: "status-pill status-live",
                span { class: "pill-dot" }
                span { "Built with Dioxus & Rust" }
            }
        }
    }
}
