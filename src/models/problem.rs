//! Dispatch problem instance.

use super::{Load, Point};

/// Default maximum route duration: twelve hours, in minutes.
pub const DEFAULT_MAX_DURATION: f64 = 12.0 * 60.0;

/// Default flat cost charged for every driver used.
pub const DEFAULT_FIXED_DRIVER_COST: f64 = 500.0;

/// A set of loads to dispatch from a single depot.
///
/// Distances double as durations (unit speed), so the route budget bounds
/// both at once.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchProblem, Load, Point};
///
/// let problem = DispatchProblem::new(vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
/// ])
/// .with_max_duration(100.0)
/// .with_fixed_driver_cost(50.0);
///
/// assert_eq!(problem.num_loads(), 1);
/// assert_eq!(problem.depot(), Point::origin());
/// assert_eq!(problem.max_duration(), 100.0);
/// ```
#[derive(Debug, Clone)]
pub struct DispatchProblem {
    loads: Vec<Load>,
    depot: Point,
    max_duration: f64,
    fixed_driver_cost: f64,
}

impl DispatchProblem {
    /// Creates a problem over the given loads.
    ///
    /// Default: depot at the origin, 720 time units per route, 500 per driver.
    /// Load IDs are expected to be unique.
    pub fn new(loads: Vec<Load>) -> Self {
        Self {
            loads,
            depot: Point::origin(),
            max_duration: DEFAULT_MAX_DURATION,
            fixed_driver_cost: DEFAULT_FIXED_DRIVER_COST,
        }
    }

    /// Sets the depot every route starts and ends at.
    pub fn with_depot(mut self, depot: Point) -> Self {
        self.depot = depot;
        self
    }

    /// Sets the maximum duration of a single route.
    pub fn with_max_duration(mut self, max: f64) -> Self {
        self.max_duration = max;
        self
    }

    /// Sets the flat cost per driver.
    pub fn with_fixed_driver_cost(mut self, cost: f64) -> Self {
        self.fixed_driver_cost = cost;
        self
    }

    /// Loads in input order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Number of loads.
    pub fn num_loads(&self) -> usize {
        self.loads.len()
    }

    /// Depot location.
    pub fn depot(&self) -> Point {
        self.depot
    }

    /// Maximum route duration.
    pub fn max_duration(&self) -> f64 {
        self.max_duration
    }

    /// Flat cost per driver used.
    pub fn fixed_driver_cost(&self) -> f64 {
        self.fixed_driver_cost
    }
}
