//! Matrix rain (workspace facade crate).
//!
//! This package keeps a single `matrix_rain::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use matrix_rain_core as core;
pub use matrix_rain_input as input;
pub use matrix_rain_term as term;
pub use matrix_rain_types as types;
