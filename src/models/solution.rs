//! Solution and violation types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Driver, LoadId};

/// A type of constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub enum ViolationType {
    /// Route duration exceeds the per-driver budget.
    MaxDurationExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Actual duration.
        duration: f64,
        /// Maximum allowed duration.
        max_duration: f64,
    },
    /// A driver carries no loads.
    EmptyRoute {
        /// Route index in the solution.
        route_index: usize,
    },
    /// A load is served by more than one route, or twice by the same one.
    DuplicateLoad {
        /// Offending load.
        load_id: LoadId,
    },
    /// A load of the problem is not served at all.
    MissingLoad {
        /// Offending load.
        load_id: LoadId,
    },
    /// A route refers to a load the problem does not contain.
    UnknownLoad {
        /// Offending load.
        load_id: LoadId,
    },
}

impl fmt::Display for ViolationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxDurationExceeded {
                route_index,
                duration,
                max_duration,
            } => write!(
                f,
                "route {route_index} takes {duration:.2}, over the budget of {max_duration:.2}"
            ),
            Self::EmptyRoute { route_index } => write!(f, "route {route_index} is empty"),
            Self::DuplicateLoad { load_id } => write!(f, "load {load_id} is served more than once"),
            Self::MissingLoad { load_id } => write!(f, "load {load_id} is not served"),
            Self::UnknownLoad { load_id } => write!(f, "load {load_id} is not in the problem"),
        }
    }
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// A complete dispatch plan: drivers with their routes, plus costs.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Driver, DriverId, Solution};
///
/// let mut sol = Solution::new();
/// sol.add_driver(Driver::new(DriverId::new(1), vec![1, 2]));
/// assert_eq!(sol.num_drivers(), 1);
/// assert_eq!(sol.num_served(), 2);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solution {
    drivers: Vec<Driver>,
    total_distance: f64,
    total_cost: f64,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a driver to this solution.
    pub fn add_driver(&mut self, driver: Driver) {
        self.drivers.push(driver);
    }

    /// Drivers in output order.
    pub fn drivers(&self) -> &[Driver] {
        &self.drivers
    }

    /// Number of drivers used.
    pub fn num_drivers(&self) -> usize {
        self.drivers.len()
    }

    /// Total number of loads served (across all drivers).
    pub fn num_served(&self) -> usize {
        self.drivers.iter().map(|d| d.len()).sum()
    }

    /// Route of every driver as load IDs, in output order.
    pub fn routes(&self) -> Vec<Vec<LoadId>> {
        self.drivers.iter().map(|d| d.loads().to_vec()).collect()
    }

    /// Distance driven by all drivers (set by evaluator).
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Fixed driver costs plus driven distance (set by evaluator).
    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// Sets the total distance.
    pub fn set_total_distance(&mut self, distance: f64) {
        self.total_distance = distance;
    }

    /// Sets the total cost.
    pub fn set_total_cost(&mut self, cost: f64) {
        self.total_cost = cost;
    }
}
