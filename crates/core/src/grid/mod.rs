//! Grid data structures and neighbor directions

mod direction;
mod element;
mod terrain;

pub use direction::Direction;
pub use element::GridElement;
pub use terrain::{BasinId, TerrainGrid};
