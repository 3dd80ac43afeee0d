//! Planar point type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An immutable location on the plane.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::Point;
///
/// let a = Point::new(0.0, 0.0);
/// let b: Point = "(3,4)".parse().unwrap();
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The origin `(0,0)`.
    pub fn origin() -> Self {
        Self::new(0.0, 0.0)
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        crate::distance::euclidean(self, other)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Error returned when a point cannot be parsed from `(x,y)` text.
#[derive(Debug, Clone, PartialEq)]
pub enum PointParseError {
    /// The text did not contain exactly two comma-separated coordinates.
    CoordinateCount(String),
    /// The x-coordinate is not a real number.
    InvalidX(String),
    /// The y-coordinate is not a real number.
    InvalidY(String),
}

impl fmt::Display for PointParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CoordinateCount(s) => write!(f, "invalid number of coordinates: {s}"),
            Self::InvalidX(s) => write!(f, "invalid x coordinate: {s}"),
            Self::InvalidY(s) => write!(f, "invalid y coordinate: {s}"),
        }
    }
}

impl std::error::Error for PointParseError {}

impl FromStr for Point {
    type Err = PointParseError;

    /// Parses `(x,y)`. Surrounding parentheses are optional.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim_matches(|c| c == '(' || c == ')');
        let coords: Vec<&str> = inner.split(',').collect();
        if coords.len() != 2 {
            return Err(PointParseError::CoordinateCount(inner.to_string()));
        }

        let x = coords[0]
            .trim()
            .parse::<f64>()
            .map_err(|_| PointParseError::InvalidX(coords[0].to_string()))?;
        let y = coords[1]
            .trim()
            .parse::<f64>()
            .map_err(|_| PointParseError::InvalidY(coords[1].to_string()))?;

        Ok(Self::new(x, y))
    }
}
