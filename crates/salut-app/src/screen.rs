//! Navigation targets for the app shell.

/// Screens reachable from the app shell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Screen {
    /// The greeting rotator.
    #[default]
    Home,
    /// Fallback for unknown navigation targets.
    NotFound,
}

impl Screen {
    /// Resolves a navigation target name. Unknown targets land on NotFound.
    pub fn resolve(target: &str) -> Self {
        match target.trim().to_ascii_lowercase().as_str() {
            "" | "home" => Screen::Home,
            _ => Screen::NotFound,
        }
    }

    /// Display name for logging and window chrome.
    pub fn display_name(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::NotFound => "Not Found",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_home() {
        assert_eq!(Screen::resolve("home"), Screen::Home);
        assert_eq!(Screen::resolve("Home"), Screen::Home);
        assert_eq!(Screen::resolve("  HOME  "), Screen::Home);
        assert_eq!(Screen::resolve(""), Screen::Home);
    }

    #[test]
    fn test_unknown_targets_are_not_found() {
        assert_eq!(Screen::resolve("about"), Screen::NotFound);
        assert_eq!(Screen::resolve("contact"), Screen::NotFound);
        assert_eq!(Screen::resolve("no/such/screen"), Screen::NotFound);
    }
}
