//! D4 neighbor directions
//!
//! The algorithms only consider the four axis-aligned neighbors of a
//! cell (D4), never the diagonals. The order of [`Direction::SCAN`] is
//! observable: steepest-descent ties are broken toward the earliest
//! scanned direction.

/// One of the four axis-aligned neighbor directions of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    West,
    East,
    South,
}

impl Direction {
    /// Fixed neighbor scan order: North, West, East, South.
    ///
    /// Used both for sink detection and as the default tie-break order
    /// in steepest-descent selection.
    pub const SCAN: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
    ];

    /// Offset as (row_offset, col_offset).
    pub fn offset(self) -> (isize, isize) {
        match self {
            Direction::North => (-1, 0),
            Direction::West => (0, -1),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
        }
    }

    /// Coordinate one step in this direction from (row, col).
    ///
    /// The result may be off-grid; callers resolve it through the
    /// grid's sentinel accessors.
    pub fn step(self, row: isize, col: isize) -> (isize, isize) {
        let (dr, dc) = self.offset();
        (row + dr, col + dc)
    }
}
