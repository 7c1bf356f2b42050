//! Theme system for the greeting viewer.

use dioxus::prelude::*;

/// Available themes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Soft blue-to-purple gradient look; the stylesheet supplies a dark
    /// variant through `prefers-color-scheme`.
    #[default]
    Aurora,
}

impl Theme {
    /// Returns the CSS class value for this theme.
    pub fn css_value(&self) -> &'static str {
        match self {
            Theme::Aurora => "aurora",
        }
    }

    /// Returns the display name for this theme.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Aurora => "Aurora",
        }
    }
}

/// Global signal for the current theme.
pub static CURRENT_THEME: GlobalSignal<Theme> = GlobalSignal::new(|| Theme::default());

/// Root component that applies the current theme.
#[component]
pub fn ThemedRoot(children: Element) -> Element {
    let theme = *CURRENT_THEME.read();
    rsx! {
        div {
            class: "themed-root",
            "data-theme": "{theme.css_value()}",
            {children}
        }
    }
}
