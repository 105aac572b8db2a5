//! Labeled-grid renderer
//!
//! Turns a fully labeled grid into the textual output format: a
//! `Case #i:` header followed by one line per row of single-letter
//! basin codes.

use crate::error::Result;
use crate::grid::{BasinId, GridElement, TerrainGrid};
use std::io::Write;

/// Letter code for a basin id: 0 → 'a', 1 → 'b', ...
///
/// Ids past 25 continue through the Unicode code points after 'z';
/// the inputs in scope never produce more than 26 basins. Invalid
/// code points render as '?'.
pub fn basin_letter(basin: BasinId) -> char {
    char::from_u32('a' as u32 + basin).unwrap_or('?')
}

/// Render one problem instance (1-based case number).
///
/// The caller is expected to hand in a fully labeled grid; a cell that
/// somehow escaped labeling renders as '?' rather than panicking.
pub fn render_case<T: GridElement>(grid: &TerrainGrid<T>, case_nb: usize) -> String {
    // Header + rows of "x y z\n": 2 chars per cell per row.
    let mut out = String::with_capacity(16 + grid.rows() * (2 * grid.cols() + 1));
    out.push_str(&format!("Case #{case_nb}:\n"));

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            if col != 0 {
                out.push(' ');
            }
            match grid.basin(row as isize, col as isize) {
                Some(basin) => out.push(basin_letter(basin)),
                None => out.push('?'),
            }
        }
        out.push('\n');
    }

    out
}

/// Render one problem instance directly into a writer.
pub fn write_case<T: GridElement, W: Write>(
    writer: &mut W,
    grid: &TerrainGrid<T>,
    case_nb: usize,
) -> Result<()> {
    writer.write_all(render_case(grid, case_nb).as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basin_letters() {
        assert_eq!(basin_letter(0), 'a');
        assert_eq!(basin_letter(1), 'b');
        assert_eq!(basin_letter(25), 'z');
    }

    #[test]
    fn test_render_case() {
        let mut grid: TerrainGrid<i64> = TerrainGrid::new(2, 3).unwrap();
        for row in 0..2 {
            for col in 0..3 {
                grid.set_basin_once(row, col, row as BasinId).unwrap();
            }
        }

        assert_eq!(render_case(&grid, 4), "Case #4:\na a a\nb b b\n");
    }

    #[test]
    fn test_render_unlabeled_cell_as_question_mark() {
        let mut grid: TerrainGrid<i64> = TerrainGrid::new(1, 2).unwrap();
        grid.set_basin_once(0, 0, 0).unwrap();

        assert_eq!(render_case(&grid, 1), "Case #1:\na ?\n");
    }

    #[test]
    fn test_write_case() {
        let mut grid: TerrainGrid<i64> = TerrainGrid::new(1, 1).unwrap();
        grid.set_basin_once(0, 0, 2).unwrap();

        let mut buf = Vec::new();
        write_case(&mut buf, &grid, 7).unwrap();
        assert_eq!(buf, b"Case #7:\nc\n");
    }
}
