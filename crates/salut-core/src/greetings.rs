//! The fixed greeting catalog.

use thiserror::Error;

/// Number of greetings in the built-in catalog.
pub const GREETING_COUNT: usize = 10;

/// The rotating greetings, in display order.
const GREETINGS: [&str; GREETING_COUNT] = [
    "Hello, World! 👋",
    "Hello, I am the goat! 👋",
    "Bonjour! 🇫🇷",
    "Hola! 🇪🇸",
    "こんにちは! 🇯🇵",
    "Guten Tag! 🇩🇪",
    "Ciao! 🇮🇹",
    "Olá! 🇧🇷",
    "Привет! 🇷🇺",
    "Hello, World Pat here!",
];

/// Error raised when a greeting lookup lands outside the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("greeting index {index} is out of range for a catalog of {len}")]
pub struct GreetingError {
    /// The index that was requested.
    pub index: usize,
    /// Catalog length at the time of the lookup.
    pub len: usize,
}

/// An ordered, read-only list of greeting strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GreetingCatalog {
    entries: &'static [&'static str],
}

impl Default for GreetingCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl GreetingCatalog {
    /// Returns the built-in ten-entry catalog.
    pub fn builtin() -> Self {
        Self {
            entries: &GREETINGS,
        }
    }

    /// Number of entries in the catalog.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Looks up the greeting at `index`.
    pub fn get(&self, index: usize) -> Result<&'static str, GreetingError> {
        self.entries.get(index).copied().ok_or(GreetingError {
            index,
            len: self.entries.len(),
        })
    }
}
