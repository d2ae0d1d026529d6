//! Terminal rendering module.
//!
//! Renders the rain field into a simple framebuffer and flushes it to the
//! terminal with diff-based drawing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so frames can be asserted on in tests
//! - Touch the real terminal only in [`renderer`]

pub mod fb;
pub mod rain_view;
pub mod renderer;

pub use matrix_rain_core as core;
pub use matrix_rain_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use rain_view::{draw_paused_overlay, RainView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
