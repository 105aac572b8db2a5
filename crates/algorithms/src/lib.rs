//! # Cuenca Algorithms
//!
//! Drainage-basin labeling for elevation grids.
//!
//! Given a rectangular grid of integer elevations, the algorithms here
//! partition its cells into drainage basins: one basin per sink (local
//! minimum), containing exactly the cells whose strict downhill flow
//! ends at that sink.

pub mod hydrology;
pub(crate) mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::hydrology::{
        delineate, find_sinks, label_basins, steepest_descent, BasinLabelParams, BasinLabeler,
        SinkFinder,
    };
    pub use cuenca_core::prelude::*;
}
