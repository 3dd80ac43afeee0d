//! Planar distance functions.
//!
//! Distances double as travel durations throughout the crate (unit speed).

mod euclidean;

pub use euclidean::{euclidean, path_length};
