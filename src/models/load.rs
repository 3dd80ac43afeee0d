//! Delivery load type.

use serde::{Deserialize, Serialize};

use super::Point;

/// Identifier of a load, unique within a problem.
pub type LoadId = i64;

/// A single pickup-to-dropoff delivery request.
///
/// The pickup→dropoff distance is computed once on construction since every
/// route evaluation needs it.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
///
/// let load = Load::new(1, Point::new(0.0, 0.0), Point::new(3.0, 4.0));
/// assert_eq!(load.id(), 1);
/// assert!((load.delivery_distance() - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    id: LoadId,
    pickup: Point,
    dropoff: Point,
    delivery_distance: f64,
}

impl Load {
    /// Creates a load travelling from `pickup` to `dropoff`.
    pub fn new(id: LoadId, pickup: Point, dropoff: Point) -> Self {
        Self {
            id,
            pickup,
            dropoff,
            delivery_distance: pickup.distance_to(&dropoff),
        }
    }

    /// Load ID.
    pub fn id(&self) -> LoadId {
        self.id
    }

    /// Where the load is collected.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Where the load is delivered.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Distance driven while carrying the load.
    pub fn delivery_distance(&self) -> f64 {
        self.delivery_distance
    }
}
