//! Drainage analysis algorithms
//!
//! The two-phase labeling pipeline:
//! - Sink detection: find every local-minimum cell, in row-major
//!   discovery order
//! - Basin labeling: from each sink, claim the cells whose
//!   steepest-descent chain ends at that sink

mod basins;
mod sinks;

pub use basins::{delineate, label_basins, steepest_descent, BasinLabelParams, BasinLabeler};
pub use sinks::{find_sinks, is_sink, SinkFinder};
