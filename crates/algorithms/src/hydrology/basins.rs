//! Basin labeling
//!
//! Propagates one basin label per sink across the sink's watershed:
//! the set of cells whose steepest-descent chain terminates at that
//! sink. Propagation is a flood fill from the sink that only crosses
//! an edge in reverse flow direction. A cell joins the basin iff the
//! neighbor the fill arrived from is exactly the neighbor the cell
//! itself would drain into (flow-direction consistency); the sink
//! itself is accepted unconditionally.
//!
//! The frontier is an explicit queue of (coordinate, arrived-from)
//! pairs rather than call-stack recursion, so memory stays bounded on
//! adversarial grids. Labels are write-once, which caps total work at
//! one expansion per cell per sink and makes the result independent of
//! the queue discipline: a cell's steepest-descent neighbor is unique,
//! so only one incoming edge can ever accept it.

use crate::hydrology::sinks::find_sinks;
use cuenca_core::grid::{BasinId, Direction, GridElement, TerrainGrid};
use cuenca_core::{Algorithm, Error, Result};
use std::collections::VecDeque;

/// Parameters for basin labeling
#[derive(Debug, Clone)]
pub struct BasinLabelParams {
    /// Neighbor scan order for steepest-descent selection. Ties for
    /// the lowest neighbor go to the earliest scanned direction.
    pub tie_break: [Direction; 4],
}

impl Default for BasinLabelParams {
    fn default() -> Self {
        Self {
            tie_break: Direction::SCAN,
        }
    }
}

/// The neighbor the cell at (row, col) drains into: the strictly
/// lowest of its four neighbors, or `None` when no neighbor is
/// strictly lower (the cell is a sink).
///
/// Neighbors are scanned in `tie_break` order and the best candidate
/// is replaced only on a strictly smaller elevation, so the first
/// direction to reach the minimum wins ties.
pub fn steepest_descent<T: GridElement>(
    grid: &TerrainGrid<T>,
    row: usize,
    col: usize,
    tie_break: &[Direction; 4],
) -> Option<(usize, usize)> {
    let center = grid.elevation(row as isize, col as isize)?;
    let mut best: Option<(T, (usize, usize))> = None;

    for dir in tie_break {
        let (nr, nc) = dir.step(row as isize, col as isize);
        let Some(neighbor) = grid.elevation(nr, nc) else {
            continue;
        };
        if neighbor >= center {
            continue;
        }
        match best {
            Some((best_val, _)) if neighbor >= best_val => {}
            _ => best = Some((neighbor, (nr as usize, nc as usize))),
        }
    }

    best.map(|(_, coord)| coord)
}

/// Label every cell reachable from the given sinks.
///
/// Sink `i` propagates basin id `i`. Expects a grid with all basin
/// labels unset; cells already labeled (by an earlier sink) are left
/// untouched.
pub fn label_basins<T: GridElement>(
    grid: &mut TerrainGrid<T>,
    sinks: &[(usize, usize)],
    params: &BasinLabelParams,
) -> Result<()> {
    let mut frontier: VecDeque<((isize, isize), Option<(usize, usize)>)> = VecDeque::new();

    for (id, &(sink_row, sink_col)) in sinks.iter().enumerate() {
        let basin = id as BasinId;
        frontier.push_back(((sink_row as isize, sink_col as isize), None));

        while let Some(((row, col), prev)) = frontier.pop_front() {
            // Off-grid, or already claimed: stop this branch.
            if grid.elevation(row, col).is_none() || grid.basin(row, col).is_some() {
                continue;
            }
            let (row_u, col_u) = (row as usize, col as usize);

            let accepted = match prev {
                // The originating sink joins its own basin unconditionally.
                None => true,
                // Flow-direction consistency: the cell we arrived from
                // must be the cell this one drains into.
                Some(from) => steepest_descent(grid, row_u, col_u, &params.tie_break) == Some(from),
            };
            if !accepted {
                continue;
            }

            if grid.set_basin_once(row_u, col_u, basin)? {
                for dir in Direction::SCAN {
                    frontier.push_back((dir.step(row, col), Some((row_u, col_u))));
                }
            }
        }
    }

    Ok(())
}

/// Full delineation with default parameters: find the sinks, label
/// every basin, return the sink count.
///
/// On a well-formed grid this leaves every cell labeled with a basin
/// id in `0..sink_count`.
pub fn delineate<T: GridElement>(grid: &mut TerrainGrid<T>) -> Result<usize> {
    let sinks = find_sinks(grid);
    label_basins(grid, &sinks, &BasinLabelParams::default())?;
    Ok(sinks.len())
}

/// Basin labeling algorithm
#[derive(Debug, Clone, Default)]
pub struct BasinLabeler;

impl Algorithm for BasinLabeler {
    type Input = TerrainGrid<i64>;
    type Output = TerrainGrid<i64>;
    type Params = BasinLabelParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Basin Labeler"
    }

    fn description(&self) -> &'static str {
        "Label every cell with the basin of the sink its water drains to"
    }

    fn execute(&self, mut input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        let sinks = find_sinks(&input);
        label_basins(&mut input, &sinks, &params)?;
        Ok(input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: Vec<Vec<i64>>) -> TerrainGrid<i64> {
        TerrainGrid::from_rows(rows).unwrap()
    }

    fn labels(grid: &TerrainGrid<i64>) -> Vec<Vec<Option<BasinId>>> {
        (0..grid.rows())
            .map(|r| (0..grid.cols()).map(|c| grid.basin(r as isize, c as isize)).collect())
            .collect()
    }

    #[test]
    fn test_steepest_descent_picks_lowest_neighbor() {
        let g = grid(vec![vec![9, 2, 9], vec![5, 8, 3], vec![9, 4, 9]]);
        // Center 8: N=2 W=5 E=3 S=4, lowest is N
        assert_eq!(
            steepest_descent(&g, 1, 1, &Direction::SCAN),
            Some((0, 1))
        );
    }

    #[test]
    fn test_steepest_descent_tie_goes_to_earliest_direction() {
        // N and E both 3: scan order North, West, East, South keeps North
        let g = grid(vec![vec![9, 3, 9], vec![5, 8, 3], vec![9, 4, 9]]);
        assert_eq!(
            steepest_descent(&g, 1, 1, &Direction::SCAN),
            Some((0, 1))
        );

        // With East scanned first, the tie flips
        let east_first = [
            Direction::East,
            Direction::North,
            Direction::West,
            Direction::South,
        ];
        assert_eq!(steepest_descent(&g, 1, 1, &east_first), Some((1, 2)));
    }

    #[test]
    fn test_steepest_descent_of_a_sink_is_none() {
        let g = grid(vec![vec![9, 8, 9], vec![8, 1, 8], vec![9, 8, 9]]);
        assert_eq!(steepest_descent(&g, 1, 1, &Direction::SCAN), None);
    }

    #[test]
    fn test_equal_neighbor_is_not_a_descent() {
        // Flat pair: neither cell drains into the other
        let g = grid(vec![vec![6, 6]]);
        assert_eq!(steepest_descent(&g, 0, 0, &Direction::SCAN), None);
        assert_eq!(steepest_descent(&g, 0, 1, &Direction::SCAN), None);
    }

    #[test]
    fn test_single_minimum_single_basin() {
        let mut g = grid(vec![vec![9, 8, 9], vec![8, 1, 8], vec![9, 8, 9]]);
        let sinks = delineate(&mut g).unwrap();
        assert_eq!(sinks, 1);
        assert!(g.fully_labeled());
        assert_eq!(
            labels(&g),
            vec![vec![Some(0); 3]; 3],
            "a single strict minimum should absorb the whole grid"
        );
    }

    #[test]
    fn test_flat_grid_each_cell_its_own_basin() {
        let mut g = grid(vec![vec![8; 3]; 2]);
        let sinks = delineate(&mut g).unwrap();
        assert_eq!(sinks, 6);
        assert_eq!(
            labels(&g),
            vec![
                vec![Some(0), Some(1), Some(2)],
                vec![Some(3), Some(4), Some(5)],
            ],
            "flat cells never strictly descend, so none is absorbed by a neighbor"
        );
    }

    #[test]
    fn test_sink_self_consistency() {
        let mut g = grid(vec![vec![1, 5, 2], vec![2, 5, 3], vec![3, 5, 4]]);
        let sinks = find_sinks(&g);
        label_basins(&mut g, &sinks, &BasinLabelParams::default()).unwrap();

        for (id, &(r, c)) in sinks.iter().enumerate() {
            assert_eq!(g.basin(r as isize, c as isize), Some(id as BasinId));
        }
    }

    #[test]
    fn test_rejected_branch_is_left_for_the_rightful_basin() {
        // 0 1 0: the middle 1 ties W/E and the N/W/E/S scan sends it
        // west, so the east sink's fill must not claim it even though
        // the fill reaches it first from the east.
        let mut g = grid(vec![vec![0, 1, 0]]);
        let count = delineate(&mut g).unwrap();
        assert_eq!(count, 2);
        assert_eq!(labels(&g), vec![vec![Some(0), Some(0), Some(1)]]);
    }

    #[test]
    fn test_partition_every_cell_labeled_exactly_once() {
        let mut g = grid(vec![
            vec![1, 2, 3, 4, 5],
            vec![2, 9, 3, 9, 6],
            vec![3, 3, 0, 8, 7],
            vec![4, 9, 8, 9, 8],
            vec![5, 6, 7, 8, 9],
        ]);
        let count = delineate(&mut g).unwrap();

        assert!(g.fully_labeled());
        assert_eq!(g.labeled_count(), g.len());
        for r in 0..g.rows() {
            for c in 0..g.cols() {
                let basin = g.basin(r as isize, c as isize).unwrap();
                assert!((basin as usize) < count);
            }
        }
    }

    #[test]
    fn test_determinism() {
        let make = || {
            grid(vec![
                vec![7, 6, 7],
                vec![7, 6, 7],
                vec![5, 5, 5],
            ])
        };
        let mut a = make();
        let mut b = make();
        delineate(&mut a).unwrap();
        delineate(&mut b).unwrap();
        assert_eq!(labels(&a), labels(&b));
    }

    #[test]
    fn test_algorithm_wrapper() {
        let g = grid(vec![vec![3, 2, 1]]);
        let labeled = BasinLabeler.execute_default(g).unwrap();
        assert_eq!(labels(&labeled), vec![vec![Some(0); 3]]);
    }
}
