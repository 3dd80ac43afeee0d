//! Constructive heuristics for building dispatch plans.
//!
//! - [`compute_savings`] — ranked savings of every ordered load pair, O(n² log n)
//! - [`clarke_wright_savings`] — Clarke-Wright savings route construction (1964), O(n² log n)

mod clarke_wright;
mod savings;

pub use clarke_wright::clarke_wright_savings;
pub use savings::{compute_savings, Saving};
