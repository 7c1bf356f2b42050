//! Core display logic for the Salut greeting viewer.
//!
//! Holds the fixed greeting catalog, the rotation state that drives the
//! greeting cycler and live clock, and wall-clock formatting helpers. This
//! crate has no UI dependency so the display rules stay unit-testable.

pub mod clock;
pub mod greetings;
pub mod rotation;

pub use greetings::{GreetingCatalog, GreetingError};
pub use rotation::{CLOCK_TICK, ROTATION_INTERVAL, RotationState};
