//! Driver and driver identifier types.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::LoadId;

/// Opaque driver identifier.
///
/// Only uniqueness within a solution matters; the value itself carries no
/// meaning. Displayed as 16 hex digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DriverId(u64);

impl DriverId {
    /// Wraps a raw identifier.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw identifier value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DriverId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Issues random driver identifiers that never repeat within one generator.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::DriverIds;
///
/// let mut ids = DriverIds::new();
/// let a = ids.next_id();
/// let b = ids.next_id();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Default)]
pub struct DriverIds {
    issued: HashSet<DriverId>,
}

impl DriverIds {
    /// Creates a generator with no issued identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draws a fresh identifier.
    pub fn next_id(&mut self) -> DriverId {
        loop {
            let id = DriverId(rand::random::<u64>());
            if self.issued.insert(id) {
                return id;
            }
        }
    }
}

/// A driver and the loads it carries, in visiting order.
///
/// The route starts and ends at the depot (not stored in `loads`).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Driver, DriverId};
///
/// let driver = Driver::new(DriverId::new(1), vec![4, 2]);
/// assert_eq!(driver.len(), 2);
/// assert_eq!(driver.loads(), &[4, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Driver {
    id: DriverId,
    loads: Vec<LoadId>,
}

impl Driver {
    /// Creates a driver carrying the given loads.
    pub fn new(id: DriverId, loads: Vec<LoadId>) -> Self {
        Self { id, loads }
    }

    /// Driver ID.
    pub fn id(&self) -> DriverId {
        self.id
    }

    /// Load IDs in visiting order.
    pub fn loads(&self) -> &[LoadId] {
        &self.loads
    }

    /// Number of loads on this route.
    pub fn len(&self) -> usize {
        self.loads.len()
    }

    /// Returns `true` if this driver carries no loads.
    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}
