//! Half-open time spans and the overlap checks built on them.

mod index;
mod span;

pub use index::{BTreeIndex, IntervalIndex, LinearIndex};
pub use span::{is_busy, TimeSpan};
