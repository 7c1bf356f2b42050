//! Scenario tests for the greeting rotation contract.

use salut_core::{GreetingCatalog, RotationState};

#[test]
fn three_automatic_rotations_then_manual_click() {
    let catalog = GreetingCatalog::builtin();
    let mut state = RotationState::new(catalog.len());

    // Three automatic rotations land on index 3.
    for _ in 0..3 {
        state.advance();
    }
    assert_eq!(state.index(), 3);

    // A manual click at that point yields index 4.
    state.advance();
    assert_eq!(state.index(), 4);
    assert!(catalog.get(state.index()).is_ok());
}

#[test]
fn manual_trigger_is_phase_free() {
    // The manual trigger is the same advance as the timer; it moves the
    // index by exactly one regardless of how many rotations came before.
    for before in 0..25usize {
        let mut state = RotationState::new(10);
        for _ in 0..before {
            state.advance();
        }
        let clicked = state.advance();
        assert_eq!(clicked, (before + 1) % 10);
    }
}

#[test]
fn placeholder_until_first_clock_tick() {
    let mut state = RotationState::new(10);
    assert!(!state.is_live());
    assert_eq!(state.time(), None);

    state.set_time("08:00:00".to_string());
    assert!(state.is_live());
    assert_eq!(state.time(), Some("08:00:00"));
}

#[test]
fn every_catalog_entry_resolves() {
    let catalog = GreetingCatalog::builtin();
    let mut state = RotationState::new(catalog.len());

    for _ in 0..catalog.len() {
        let index = state.advance();
        assert!(catalog.get(index).is_ok());
    }
    // A full cycle returns to the start.
    assert_eq!(state.index(), 0);
}

#[test]
fn out_of_range_lookup_reports_the_failed_index() {
    let catalog = GreetingCatalog::builtin();
    let err = catalog.get(catalog.len()).unwrap_err();
    assert_eq!(err.index, catalog.len());
    assert_eq!(err.len, catalog.len());
}
