//! Terminal input module.
//!
//! Maps `crossterm` key events into [`matrix_rain_types::RainAction`]. The
//! screensaver only needs a handful of keys, but keeping the mapping in its
//! own crate keeps the run loop free of key-code details.

pub mod map;

pub use matrix_rain_types as types;

pub use map::{handle_key_event, should_quit};
