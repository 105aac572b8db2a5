//! Sink detection
//!
//! A sink is a cell with no strictly lower axis-aligned neighbor:
//! water arriving there has nowhere further downhill to go. Equal
//! neighbors do not disqualify a sink, so a flat region at a local
//! minimum contains one sink per cell.
//!
//! Sink-ness is a purely local property, so rows can be scanned
//! independently; the discovery order (row-major) is still observable
//! because it numbers the basins.

use crate::maybe_rayon::*;
use cuenca_core::grid::{Direction, GridElement, TerrainGrid};
use cuenca_core::{Algorithm, Error};

/// Whether the in-bounds cell at (row, col) is a sink.
///
/// Off-grid coordinates are not sinks. Off-grid neighbors count as
/// "not lower": the boundary never drains a cell.
pub fn is_sink<T: GridElement>(grid: &TerrainGrid<T>, row: usize, col: usize) -> bool {
    let Some(center) = grid.elevation(row as isize, col as isize) else {
        return false;
    };

    Direction::SCAN.iter().all(|dir| {
        let (nr, nc) = dir.step(row as isize, col as isize);
        match grid.elevation(nr, nc) {
            Some(neighbor) => neighbor >= center,
            None => true,
        }
    })
}

/// Find all sinks of a grid, in row-major discovery order.
///
/// The returned list is free of duplicate coordinates. Its order
/// determines basin numbering: the sink at index `i` seeds basin `i`.
pub fn find_sinks<T: GridElement>(grid: &TerrainGrid<T>) -> Vec<(usize, usize)> {
    let cols = grid.cols();

    let candidates: Vec<(usize, usize)> = (0..grid.rows())
        .into_par_iter()
        .flat_map(|row| {
            (0..cols)
                .filter(|&col| is_sink(grid, row, col))
                .map(|col| (row, col))
                .collect::<Vec<_>>()
        })
        .collect();

    // Append guarded by coordinate equality, preserving row-major order.
    let mut sinks: Vec<(usize, usize)> = Vec::with_capacity(candidates.len());
    for coord in candidates {
        if !sinks.contains(&coord) {
            sinks.push(coord);
        }
    }

    sinks
}

/// Sink detection algorithm
#[derive(Debug, Clone, Default)]
pub struct SinkFinder;

impl Algorithm for SinkFinder {
    type Input = TerrainGrid<i64>;
    type Output = Vec<(usize, usize)>;
    type Params = ();
    type Error = Error;

    fn name(&self) -> &'static str {
        "Sink Finder"
    }

    fn description(&self) -> &'static str {
        "Find all local-minimum cells of an elevation grid"
    }

    fn execute(&self, input: Self::Input, _params: Self::Params) -> Result<Self::Output, Error> {
        Ok(find_sinks(&input))
    }
}
