//! Entry point for the Salut greeting viewer.
//!
//! A Dioxus desktop application that cycles through localized greetings
//! next to a live wall clock.

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, LogicalSize, WindowBuilder};
use dioxus::prelude::*;

use salut_app::components::App;
use salut_app::screen::Screen;

/// CSS styles embedded at compile time.
const STYLES_CSS: &str = include_str!("../assets/styles.css");

/// Global storage for the startup screen argument.
static INITIAL_SCREEN: OnceLock<Screen> = OnceLock::new();

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(name = "salut-app")]
#[command(about = "Rotating multilingual greeting demo")]
struct Args {
    /// Navigation target to open at startup (unknown targets show Not Found)
    #[arg(short, long, default_value = "home")]
    screen: String,

    /// Window title
    #[arg(short, long, default_value = "Salut")]
    title: String,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    tracing::info!("Starting Salut greeting viewer");

    // Parse command line arguments
    let args = Args::parse();

    let initial_screen = Screen::resolve(&args.screen);
    tracing::info!("Opening screen: {}", initial_screen.display_name());
    INITIAL_SCREEN.set(initial_screen).ok();

    // Launch the Dioxus desktop app
    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(
                    WindowBuilder::new()
                        .with_title(args.title)
                        .with_inner_size(LogicalSize::new(1024, 768)),
                )
                .with_custom_head(format!(r#"<style>{}</style>"#, STYLES_CSS)),
        )
        .launch(Root);
}

/// Root component bridging CLI arguments into the app shell.
#[component]
fn Root() -> Element {
    let initial_screen = INITIAL_SCREEN.get().copied().unwrap_or_default();
    rsx! {
        App { initial_screen }
    }
}
