//! Per-column drop state.
//!
//! Each terminal column is animated independently: a bright head falls at a
//! fixed per-column speed, dragging a fading trail behind it. When the head
//! passes the bottom of the screen it respawns above the top at a randomized
//! negative row, which makes the rainfall look continuous and uncorrelated
//! across columns.

use matrix_rain_types::{max_trail, GLYPHS, MAX_SPEED, MIN_SPEED, MIN_TRAIL};

use crate::rng::SimpleRng;

/// Animation state for one terminal column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnState {
    /// Row of the drop head. Negative while the drop is still above the
    /// screen; may briefly equal `rows` before the column respawns.
    pub head_row: i32,
    /// Rows the head advances per tick.
    pub speed: i32,
    /// Length of the fading trail above the head, in rows.
    pub trail_len: i32,
    /// Index into [`GLYPHS`] for the head glyph, re-rolled every tick.
    pub glyph_index: usize,
    /// True exactly while the head is on screen (`0 <= head_row < rows`).
    pub active: bool,
}

impl ColumnState {
    /// Create a column waiting above the screen at a randomized offset.
    pub fn spawn(rng: &mut SimpleRng, rows: u16) -> Self {
        let mut col = Self {
            head_row: 0,
            speed: MIN_SPEED,
            trail_len: MIN_TRAIL,
            glyph_index: 0,
            active: false,
        };
        col.respawn(rng, rows);
        col
    }

    /// Advance the head by one tick.
    ///
    /// The head moves by `speed`, the head glyph is re-rolled, and `active`
    /// is refreshed. A head that has moved past the bottom (`head_row > rows`)
    /// respawns above the screen with fresh speed and trail length.
    pub fn advance(&mut self, rng: &mut SimpleRng, rows: u16) {
        self.head_row += self.speed;
        if self.head_row > rows as i32 {
            self.respawn(rng, rows);
        }
        self.glyph_index = rng.next_range(GLYPHS.len() as u32) as usize;
        self.active = self.head_row >= 0 && self.head_row < rows as i32;
    }

    /// Reset to a randomized off-screen position with fresh parameters.
    fn respawn(&mut self, rng: &mut SimpleRng, rows: u16) {
        // head_row lands in [-rows, -1] so drops enter the screen staggered.
        let above = rows.max(1) as i32;
        self.head_row = rng.next_between(-above, -1);
        self.speed = rng.next_between(MIN_SPEED, MAX_SPEED);
        self.trail_len = rng.next_between(MIN_TRAIL, max_trail(rows));
        self.glyph_index = rng.next_range(GLYPHS.len() as u32) as usize;
        self.active = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_starts_above_the_screen() {
        let mut rng = SimpleRng::new(1);
        for _ in 0..100 {
            let col = ColumnState::spawn(&mut rng, 24);
            assert!((-24..0).contains(&col.head_row));
            assert!((MIN_SPEED..=MAX_SPEED).contains(&col.speed));
            assert!((MIN_TRAIL..=max_trail(24)).contains(&col.trail_len));
            assert!(!col.active);
        }
    }

    #[test]
    fn advance_moves_head_by_speed() {
        let mut rng = SimpleRng::new(1);
        let mut col = ColumnState::spawn(&mut rng, 24);
        col.head_row = 5;
        col.speed = 2;

        col.advance(&mut rng, 24);
        assert_eq!(col.head_row, 7);
        assert!(col.active);
    }

    #[test]
    fn head_past_bottom_respawns_negative() {
        let mut rng = SimpleRng::new(9);
        let mut col = ColumnState::spawn(&mut rng, 24);
        col.head_row = 24;
        col.speed = 1;

        // 24 == rows: not yet past the bottom, the tail is still draining.
        col.advance(&mut rng, 24);
        assert!(col.head_row < 0, "expected respawn, got {}", col.head_row);
        assert!(col.head_row >= -24);
        assert!(!col.active);
    }

    #[test]
    fn active_tracks_visibility() {
        let mut rng = SimpleRng::new(3);
        let mut col = ColumnState::spawn(&mut rng, 10);
        col.head_row = -2;
        col.speed = 1;

        col.advance(&mut rng, 10); // -1
        assert!(!col.active);
        col.advance(&mut rng, 10); // 0
        assert!(col.active);
    }

    #[test]
    fn glyph_index_stays_in_glyph_set() {
        let mut rng = SimpleRng::new(77);
        let mut col = ColumnState::spawn(&mut rng, 24);
        for _ in 0..500 {
            col.advance(&mut rng, 24);
            assert!(col.glyph_index < GLYPHS.len());
        }
    }
}
