//! Core animation module - pure, deterministic, and testable
//!
//! This module owns the falling-rain state machine. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same seed produces an identical animation
//! - **Testable**: every invariant can be checked headlessly
//! - **Fast**: the tick path allocates nothing
//!
//! # Module Structure
//!
//! - [`column`]: per-column drop state (head row, speed, trail, respawn)
//! - [`rain`]: the whole-screen field with tick and resize handling
//! - [`rng`]: seedable LCG used for all randomness
//!
//! # Example
//!
//! ```
//! use matrix_rain_core::RainField;
//!
//! let mut field = RainField::new(12345, 80, 24);
//! assert_eq!(field.columns().len(), 80);
//!
//! field.tick();
//! for col in field.columns() {
//!     assert_eq!(col.active, (0..24).contains(&col.head_row));
//! }
//! ```

pub mod column;
pub mod rain;
pub mod rng;

pub use matrix_rain_types as types;

pub use column::ColumnState;
pub use rain::RainField;
pub use rng::SimpleRng;
