//! Domain model types for load dispatching.
//!
//! Provides the core abstractions: planar points, pickup-and-delivery loads,
//! drivers carrying ordered loads, the problem instance with its route budget,
//! and the finished solution.

mod driver;
mod load;
mod point;
mod problem;
mod solution;

pub use driver::{Driver, DriverId, DriverIds};
pub use load::{Load, LoadId};
pub use point::{Point, PointParseError};
pub use problem::{DispatchProblem, DEFAULT_FIXED_DRIVER_COST, DEFAULT_MAX_DURATION};
pub use solution::{Solution, Violation, ViolationType};
