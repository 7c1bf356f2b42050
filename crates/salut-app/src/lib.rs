//! Rotating multilingual greeting viewer.
//!
//! This crate provides a Dioxus desktop application that cycles through
//! localized greetings next to a live wall clock.

pub mod components;
pub mod screen;
pub mod theme;
