//! Grid element trait for generic elevation values

use num_traits::Zero;
use std::fmt::Debug;

/// Trait for types that can be stored as grid elevations.
///
/// Basin labeling is driven entirely by strict `<` comparisons between
/// neighboring cells, so elements must be totally ordered. Floating
/// point types are excluded: the input format is integral and a NaN
/// elevation would break the steepest-descent tie-break.
pub trait GridElement: Copy + Clone + Debug + Ord + Eq + Zero + Send + Sync + 'static {}

macro_rules! impl_grid_element {
    ($($t:ty),* $(,)?) => {
        $(impl GridElement for $t {})*
    };
}

impl_grid_element!(i8, i16, i32, i64, u8, u16, u32, u64);
