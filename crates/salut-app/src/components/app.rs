//! Root application component and screen dispatch.

use dioxus::prelude::*;

use salut_core::greetings::{GreetingCatalog, GreetingError};

use crate::screen::Screen;
use crate::theme::ThemedRoot;

use super::{ErrorScreen, Home, LoadingScreen, NotFoundScreen};

/// Root application component.
///
/// Dispatches between screens and owns the render-failure fallback: a
/// greeting lookup error captured here replaces the active screen with the
/// error view until the user retries or goes home.
#[component]
pub fn App(initial_screen: Screen) -> Element {
    let mut screen = use_signal(move || initial_screen);
    let mut render_error = use_signal(|| None::<GreetingError>);

    // Catalog slot filled by the startup task; the loading screen shows
    // until it lands.
    let mut catalog = use_signal(|| None::<GreetingCatalog>);
    let _boot = use_resource(move || async move {
        tracing::info!("Preparing greeting catalog");
        catalog.set(Some(GreetingCatalog::builtin()));
    });

    use_drop(|| {
        tracing::info!("Shutting down greeting viewer");
    });

    let body = match (catalog(), render_error()) {
        (None, _) => rsx! { LoadingScreen {} },
        (Some(_), Some(err)) => rsx! {
            ErrorScreen {
                message: err.to_string(),
                on_retry: move |_| {
                    render_error.set(None);
                },
                on_home: move |_| {
                    render_error.set(None);
                    screen.set(Screen::Home);
                },
            }
        },
        (Some(cat), None) => match screen() {
            Screen::Home => rsx! {
                Home {
                    catalog: cat,
                    on_render_error: move |err: GreetingError| {
                        tracing::error!("Screen render failed: {err}");
                        render_error.set(Some(err));
                    },
                }
            },
            Screen::NotFound => rsx! {
                NotFoundScreen {
                    on_home: move |_| screen.set(Screen::Home),
                }
            },
        },
    };

    rsx! {
        ThemedRoot {
            {body}
        }
    }
}
