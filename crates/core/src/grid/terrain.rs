//! Main TerrainGrid type

use crate::error::{Error, Result};
use crate::grid::GridElement;
use ndarray::Array2;

/// Identifier of a drainage basin.
///
/// Basin ids are assigned densely in sink discovery order, starting at
/// zero, so a grid with `n` sinks uses the ids `0..n`.
pub type BasinId = u32;

/// A rectangular elevation grid with per-cell basin labels.
///
/// `TerrainGrid<T>` stores one elevation per cell and, separately, an
/// optional basin label per cell. Elevations are fixed at construction
/// time; basin labels start unset and are write-once (see
/// [`set_basin_once`](TerrainGrid::set_basin_once)).
///
/// # Coordinates
///
/// Cells are addressed as `(row, col)` in row-major order. The
/// neighbor-sentinel accessors ([`elevation`](TerrainGrid::elevation),
/// [`basin`](TerrainGrid::basin)) take signed coordinates and return
/// `None` for any off-grid position, so boundary handling never needs
/// special cases at call sites.
///
/// # Example
///
/// ```ignore
/// use cuenca_core::TerrainGrid;
///
/// let mut grid: TerrainGrid<i64> = TerrainGrid::new(3, 3)?;
/// grid.set(0, 0, 9)?;
/// assert_eq!(grid.elevation(0, 0), Some(9));
/// assert_eq!(grid.elevation(-1, 0), None);
/// ```
#[derive(Debug, Clone)]
pub struct TerrainGrid<T: GridElement> {
    /// Elevation data stored in row-major order (row, col)
    elevations: Array2<T>,
    /// Basin label per cell, `None` until assigned
    basins: Array2<Option<BasinId>>,
}

impl<T: GridElement> TerrainGrid<T> {
    /// Create a new grid with all elevations zero and no basin labels.
    ///
    /// Both dimensions must be at least 1.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }
        Ok(Self {
            elevations: Array2::zeros((rows, cols)),
            basins: Array2::from_elem((rows, cols), None),
        })
    }

    /// Create a grid from row-major elevation data.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 || data.len() != rows * cols {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let elevations = Array2::from_shape_vec((rows, cols), data)
            .map_err(|e| Error::Other(e.to_string()))?;

        Ok(Self {
            basins: Array2::from_elem((rows, cols), None),
            elevations,
        })
    }

    /// Create a grid from one `Vec` per row.
    ///
    /// Every row must have the same length; a ragged row is rejected
    /// with [`Error::RowWidthMismatch`]. This is the constructor the
    /// text parser uses.
    pub fn from_rows(rows_data: Vec<Vec<T>>) -> Result<Self> {
        let rows = rows_data.len();
        let cols = rows_data.first().map_or(0, Vec::len);

        if rows == 0 || cols == 0 {
            return Err(Error::InvalidDimensions {
                width: cols,
                height: rows,
            });
        }

        let mut data = Vec::with_capacity(rows * cols);
        for (row, values) in rows_data.into_iter().enumerate() {
            if values.len() != cols {
                return Err(Error::RowWidthMismatch {
                    row,
                    expected: cols,
                    actual: values.len(),
                });
            }
            data.extend(values);
        }

        Self::from_vec(data, rows, cols)
    }

    // Dimensions

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.elevations.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.elevations.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.elevations.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.elevations.len()
    }

    /// Whether the grid is empty (never true for a constructed grid)
    pub fn is_empty(&self) -> bool {
        self.elevations.is_empty()
    }

    /// Check whether signed coordinates fall inside the grid.
    pub fn in_bounds(&self, row: isize, col: isize) -> bool {
        row >= 0 && col >= 0 && row < self.rows() as isize && col < self.cols() as isize
    }

    // Elevation access

    /// Elevation at signed (row, col), or `None` off-grid.
    ///
    /// The `None` sentinel participates in neighbor comparisons as
    /// "not lower, not a candidate" rather than being an error.
    pub fn elevation(&self, row: isize, col: isize) -> Option<T> {
        if self.in_bounds(row, col) {
            Some(self.elevations[(row as usize, col as usize)])
        } else {
            None
        }
    }

    /// Get elevation at (row, col), erroring when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        self.elevations
            .get((row, col))
            .copied()
            .ok_or(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            })
    }

    /// Set elevation at (row, col). Construction time only: elevations
    /// must not change once labeling has started.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }
        self.elevations[(row, col)] = value;
        Ok(())
    }

    // Basin labels

    /// Basin label at signed (row, col), or `None` when unset or
    /// off-grid.
    pub fn basin(&self, row: isize, col: isize) -> Option<BasinId> {
        if self.in_bounds(row, col) {
            self.basins[(row as usize, col as usize)]
        } else {
            None
        }
    }

    /// Assign a basin label exactly once.
    ///
    /// Returns `Ok(true)` if the label was newly assigned, `Ok(false)`
    /// if the cell already carried a label (the existing label is kept,
    /// never overwritten). First writer wins, which is what makes
    /// multi-sink propagation safe to run in any order.
    pub fn set_basin_once(&mut self, row: usize, col: usize, basin: BasinId) -> Result<bool> {
        if row >= self.rows() || col >= self.cols() {
            return Err(Error::IndexOutOfBounds {
                row,
                col,
                rows: self.rows(),
                cols: self.cols(),
            });
        }

        let cell = &mut self.basins[(row, col)];
        if cell.is_some() {
            return Ok(false);
        }
        *cell = Some(basin);
        Ok(true)
    }

    /// Whether every cell carries a basin label.
    ///
    /// The renderer's precondition: labeling a well-formed grid always
    /// ends with this true.
    pub fn fully_labeled(&self) -> bool {
        self.basins.iter().all(Option::is_some)
    }

    /// Number of labeled cells.
    pub fn labeled_count(&self) -> usize {
        self.basins.iter().filter(|b| b.is_some()).count()
    }
}
