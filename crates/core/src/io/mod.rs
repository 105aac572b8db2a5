//! I/O for the plain-text problem-set format

mod reader;
mod writer;

pub use reader::{read_problem_set, read_problem_set_from};
pub use writer::{basin_letter, render_case, write_case};
