//! RainView: maps `core::RainField` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{ColumnState, RainField};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{ColorScheme, GLYPHS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight view that draws the rain field.
///
/// Each column is rendered as a bright head with a trail fading upward:
/// the head is white and bold, the upper body of the trail uses the scheme's
/// bright color, and the tail uses the scheme's dim color. Cells past the
/// tail stay blank, which is what erases the column as the head falls.
#[derive(Debug, Clone, Copy, Default)]
pub struct RainView;

impl RainView {
    /// Render the current rain state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(
        &self,
        field: &RainField,
        scheme: ColorScheme,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Default::default());

        let rows = viewport.height as i32;
        for (x, col) in field.columns().iter().enumerate() {
            if x as u16 >= viewport.width {
                break;
            }
            self.draw_column(fb, x as u16, col, scheme, rows, field.frame());
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, field: &RainField, scheme: ColorScheme, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(field, scheme, viewport, &mut fb);
        fb
    }

    fn draw_column(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        col: &ColumnState,
        scheme: ColorScheme,
        rows: i32,
        frame: u64,
    ) {
        // d = 0 is the head; larger d walks up the trail.
        for d in 0..=col.trail_len {
            let y = col.head_row - d;
            if y < 0 || y >= rows {
                continue;
            }
            let ch = if d == 0 {
                GLYPHS[col.glyph_index]
            } else {
                trail_glyph(x, y, frame)
            };
            fb.put_char(x, y as u16, ch, trail_style(scheme, d, col.trail_len));
        }
    }
}

/// Style for a trail position `d` rows above the head.
fn trail_style(scheme: ColorScheme, d: i32, trail_len: i32) -> CellStyle {
    if d == 0 {
        return CellStyle {
            fg: Rgb::new(255, 255, 255),
            bold: true,
            dim: false,
        };
    }

    let (bright, dim) = match scheme {
        ColorScheme::Green => (Rgb::new(0, 230, 80), Rgb::new(0, 130, 40)),
        ColorScheme::Red => (Rgb::new(230, 60, 50), Rgb::new(140, 30, 20)),
    };

    // Upper third of the trail is the dim tail.
    if d > trail_len - trail_len / 3 {
        CellStyle {
            fg: dim,
            bold: false,
            dim: true,
        }
    } else {
        CellStyle {
            fg: bright,
            bold: false,
            dim: false,
        }
    }
}

/// Pick a trail glyph from cell position and frame counter.
///
/// Trails re-roll their glyphs every frame (the shimmer). Using a stateless
/// mix instead of the field RNG keeps the view pure and the core frame-rate
/// independent of how often the view renders.
fn trail_glyph(x: u16, y: i32, frame: u64) -> char {
    let v = (x as u32).wrapping_add(frame as u32);
    let u = (y as u32).wrapping_mul(2654435761).wrapping_add((frame >> 32) as u32);
    let v = 36969u32.wrapping_mul(v & 65535).wrapping_add(v >> 16);
    let u = 18000u32.wrapping_mul(u & 65535).wrapping_add(u >> 16);
    let r = (v << 16).wrapping_add(u & 65535);
    GLYPHS[(r % GLYPHS.len() as u32) as usize]
}

/// Draw the pause banner over the current frame.
pub fn draw_paused_overlay(fb: &mut FrameBuffer) {
    let text = "PAUSED";
    let text_w = text.chars().count() as u16;
    let x = fb.width().saturating_sub(text_w) / 2;
    let y = fb.height() / 2;
    let style = CellStyle {
        fg: Rgb::new(255, 255, 255),
        bold: true,
        dim: false,
    };
    fb.put_str(x, y, text, style);
}
