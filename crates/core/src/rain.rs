//! The rain field: screen dimensions plus one [`ColumnState`] per column.
//!
//! This is the whole animation state machine. It is pure (no I/O) and
//! deterministic under a fixed seed, so every behavior the run loop relies on
//! can be unit-tested headlessly.

use crate::column::ColumnState;
use crate::rng::SimpleRng;

/// Animation state for the whole screen.
#[derive(Debug, Clone)]
pub struct RainField {
    cols: u16,
    rows: u16,
    columns: Vec<ColumnState>,
    rng: SimpleRng,
    frame: u64,
}

impl RainField {
    /// Allocate one column state per terminal column.
    ///
    /// Each column starts at a randomized off-screen row with randomized
    /// speed, so the rainfall desynchronizes from the first tick.
    pub fn new(seed: u32, cols: u16, rows: u16) -> Self {
        let mut rng = SimpleRng::new(seed);
        let columns = (0..cols).map(|_| ColumnState::spawn(&mut rng, rows)).collect();
        Self {
            cols,
            rows,
            columns,
            rng,
            frame: 0,
        }
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Frames advanced so far. The view folds this into trail glyph selection
    /// so trails shimmer from frame to frame.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn columns(&self) -> &[ColumnState] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [ColumnState] {
        &mut self.columns
    }

    /// Advance every column by one tick.
    pub fn tick(&mut self) {
        let rows = self.rows;
        for col in &mut self.columns {
            col.advance(&mut self.rng, rows);
        }
        self.frame = self.frame.wrapping_add(1);
    }

    /// Adopt a new terminal size.
    ///
    /// Column state that still fits the new width is preserved; state for
    /// removed columns is dropped; added columns spawn fresh off-screen.
    /// Heads below a shrunken bottom edge respawn naturally on the next tick.
    pub fn resize(&mut self, cols: u16, rows: u16) {
        if cols == self.cols && rows == self.rows {
            return;
        }
        self.rows = rows;
        if cols != self.cols {
            self.cols = cols;
            let target = cols as usize;
            if target < self.columns.len() {
                self.columns.truncate(target);
            } else {
                while self.columns.len() < target {
                    self.columns.push(ColumnState::spawn(&mut self.rng, rows));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allocates_one_state_per_column() {
        let field = RainField::new(12345, 80, 24);
        assert_eq!(field.columns().len(), 80);
        assert_eq!((field.cols(), field.rows()), (80, 24));
    }

    #[test]
    fn tick_advances_frame_counter() {
        let mut field = RainField::new(1, 10, 10);
        assert_eq!(field.frame(), 0);
        field.tick();
        field.tick();
        assert_eq!(field.frame(), 2);
    }

    #[test]
    fn same_seed_same_animation() {
        let mut a = RainField::new(999, 40, 20);
        let mut b = RainField::new(999, 40, 20);
        for _ in 0..50 {
            a.tick();
            b.tick();
        }
        assert_eq!(a.columns(), b.columns());
    }

    #[test]
    fn active_invariant_holds_over_many_ticks() {
        let mut field = RainField::new(4242, 120, 40);
        for _ in 0..1000 {
            field.tick();
            for col in field.columns() {
                assert_eq!(
                    col.active,
                    col.head_row >= 0 && col.head_row < 40,
                    "active flag out of sync at head_row {}",
                    col.head_row
                );
            }
        }
    }

    #[test]
    fn resize_narrower_truncates_exactly() {
        let mut field = RainField::new(7, 80, 24);
        let kept = field.columns()[..30].to_vec();
        field.resize(30, 24);
        assert_eq!(field.columns().len(), 30);
        assert_eq!(field.columns(), &kept[..]);
    }

    #[test]
    fn resize_wider_spawns_offscreen_columns() {
        let mut field = RainField::new(7, 20, 24);
        field.resize(50, 24);
        assert_eq!(field.columns().len(), 50);
        for col in &field.columns()[20..] {
            assert!((-24..0).contains(&col.head_row));
            assert!(!col.active);
        }
    }

    #[test]
    fn resize_same_size_is_a_noop() {
        let mut field = RainField::new(7, 20, 24);
        let before = field.columns().to_vec();
        field.resize(20, 24);
        assert_eq!(field.columns(), &before[..]);
    }
}
