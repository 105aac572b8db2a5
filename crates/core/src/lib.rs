//! # Cuenca Core
//!
//! Core types and I/O for the Cuenca drainage-basin labeler.
//!
//! This crate provides:
//! - `TerrainGrid<T>`: rectangular elevation grid with write-once
//!   basin labels
//! - `Direction`: the four axis-aligned neighbor directions and the
//!   fixed tie-break scan order
//! - An `Algorithm` trait for a consistent API across algorithms
//! - A reader and renderer for the plain-text problem-set format

pub mod error;
pub mod grid;
pub mod io;

pub use error::{Error, Result};
pub use grid::{BasinId, Direction, GridElement, TerrainGrid};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::grid::{BasinId, Direction, GridElement, TerrainGrid};
    pub use crate::Algorithm;
}

/// Core trait for all algorithms in Cuenca.
///
/// Algorithms are pure functions that transform input data according to parameters.
pub trait Algorithm {
    /// Input type for the algorithm
    type Input;
    /// Output type for the algorithm
    type Output;
    /// Parameters controlling algorithm behavior
    type Params: Default;
    /// Error type for algorithm execution
    type Error: std::error::Error;

    /// Returns the algorithm name
    fn name(&self) -> &'static str;

    /// Returns a description of what the algorithm does
    fn description(&self) -> &'static str;

    /// Execute the algorithm
    fn execute(
        &self,
        input: Self::Input,
        params: Self::Params,
    ) -> std::result::Result<Self::Output, Self::Error>;

    /// Execute with default parameters
    fn execute_default(&self, input: Self::Input) -> std::result::Result<Self::Output, Self::Error> {
        self.execute(input, Self::Params::default())
    }
}
