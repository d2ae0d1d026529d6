//! Shared types module - constants and pure data types
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no external dependencies, making them usable
//! in any context (animation core, view rendering, terminal I/O).
//!
//! # Animation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 250 | Fixed frame interval in milliseconds |
//! | `DEFAULT_COLS` | 80 | Fallback width when the terminal size query fails |
//! | `DEFAULT_ROWS` | 24 | Fallback height when the terminal size query fails |
//! | `MIN_SPEED` / `MAX_SPEED` | 1 / 3 | Rows a drop head advances per tick |
//! | `MIN_TRAIL` | 3 | Shortest fading trail, in rows |
//!
//! # Examples
//!
//! ```
//! use matrix_rain_types::{ColorScheme, GLYPHS, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(GLYPHS.len(), 12);
//! assert_eq!((DEFAULT_COLS, DEFAULT_ROWS), (80, 24));
//!
//! let scheme = ColorScheme::from_str("red").unwrap();
//! assert_eq!(scheme.toggled(), ColorScheme::Green);
//! ```

/// Fixed frame interval in milliseconds.
pub const TICK_MS: u32 = 250;

/// Fallback terminal width when the size query fails.
pub const DEFAULT_COLS: u16 = 80;

/// Fallback terminal height when the size query fails.
pub const DEFAULT_ROWS: u16 = 24;

/// The glyph set: twelve hiragana characters, shared by all columns.
pub const GLYPHS: [char; 12] = [
    'あ', 'ぃ', 'い', 'ぅ', 'う', 'ぇ', 'え', 'ぉ', 'お', 'か', 'が', 'き',
];

/// Slowest drop speed (rows per tick).
pub const MIN_SPEED: i32 = 1;

/// Fastest drop speed (rows per tick).
pub const MAX_SPEED: i32 = 3;

/// Shortest trail length in rows.
pub const MIN_TRAIL: i32 = 3;

/// Longest trail length for a screen of the given height.
///
/// Trails scale with the screen so tall terminals do not look sparse.
pub const fn max_trail(rows: u16) -> i32 {
    MIN_TRAIL + rows as i32 / 3
}

/// Color scheme for the rain.
///
/// - **Green**: the classic look (default)
/// - **Red**: alternative scheme, selected with `--red`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    #[default]
    Green,
    Red,
}

impl ColorScheme {
    /// Parse a scheme from string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "green" => Some(ColorScheme::Green),
            "red" => Some(ColorScheme::Red),
            _ => None,
        }
    }

    /// Convert to lowercase string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorScheme::Green => "green",
            ColorScheme::Red => "red",
        }
    }

    /// The other scheme (for the runtime toggle key).
    pub fn toggled(&self) -> Self {
        match self {
            ColorScheme::Green => ColorScheme::Red,
            ColorScheme::Red => ColorScheme::Green,
        }
    }
}

/// Actions the key mapping can request from the run loop.
///
/// Quitting is handled separately (see the input crate's `should_quit`) so it
/// can short-circuit the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RainAction {
    /// Freeze the animation in place.
    TogglePause,
    /// Swap between the green and red schemes.
    ToggleScheme,
}
