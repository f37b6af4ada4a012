//! Board cursor for keyboard play.

use crate::types::{Direction, BOARD_COLS, BOARD_ROWS};

/// Highlighted card on a `cols` x `rows` grid. Movement stops at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardCursor {
    col: u8,
    row: u8,
    cols: u8,
    rows: u8,
}

impl Default for BoardCursor {
    fn default() -> Self {
        Self::new(BOARD_COLS, BOARD_ROWS)
    }
}

impl BoardCursor {
    pub fn new(cols: u8, rows: u8) -> Self {
        Self {
            col: 0,
            row: 0,
            cols: cols.max(1),
            rows: rows.max(1),
        }
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    /// Row-major board position under the cursor.
    pub fn position(&self) -> usize {
        (self.row as usize) * (self.cols as usize) + (self.col as usize)
    }

    /// Move one card. Returns false when already at the edge.
    pub fn apply(&mut self, dir: Direction) -> bool {
        let (col, row) = match dir {
            Direction::Left => (self.col.checked_sub(1), Some(self.row)),
            Direction::Right => ((self.col + 1 < self.cols).then_some(self.col + 1), Some(self.row)),
            Direction::Up => (Some(self.col), self.row.checked_sub(1)),
            Direction::Down => (Some(self.col), (self.row + 1 < self.rows).then_some(self.row + 1)),
        };
        match (col, row) {
            (Some(col), Some(row)) => {
                self.col = col;
                self.row = row;
                true
            }
            _ => false,
        }
    }

    pub fn reset(&mut self) {
        self.col = 0;
        self.row = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_top_left() {
        let c = BoardCursor::default();
        assert_eq!(c.position(), 0);
    }

    #[test]
    fn test_moves_row_major() {
        let mut c = BoardCursor::default();
        assert!(c.apply(Direction::Right));
        assert!(c.apply(Direction::Down));
        assert_eq!((c.col(), c.row()), (1, 1));
        assert_eq!(c.position(), 5);
    }

    #[test]
    fn test_stops_at_edges() {
        let mut c = BoardCursor::default();
        assert!(!c.apply(Direction::Left));
        assert!(!c.apply(Direction::Up));
        for _ in 0..10 {
            c.apply(Direction::Right);
            c.apply(Direction::Down);
        }
        assert_eq!(c.position(), 15);
        assert!(!c.apply(Direction::Right));

        c.reset();
        assert_eq!(c.position(), 0);
    }
}
