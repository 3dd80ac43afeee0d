//! Savings ranking for pickup-and-delivery loads.
//!
//! Serving load `j` right after load `i` replaces the trip from `i`'s dropoff
//! back to the depot and the trip from the depot out to `j`'s pickup with a
//! single leg:
//!
//! ```text
//! s(i, j) = d(drop_i, depot) + d(depot, pick_j) - d(drop_i, pick_j)
//! ```
//!
//! The formula is directional, so both `(i, j)` and `(j, i)` are ranked.

use crate::models::{Load, Point};

/// The benefit of serving load `second` directly after load `first`.
///
/// `first` and `second` are positions in the load slice the saving was
/// computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Saving {
    /// Position of the load served first.
    pub first: usize,
    /// Position of the load served second.
    pub second: usize,
    /// Distance saved.
    pub value: f64,
}

/// Computes the savings of every ordered pair of distinct loads, sorted by
/// decreasing value.
///
/// Equal values are ordered by `first`, then `second`, so the ranking only
/// depends on the input order.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{Load, Point};
/// use u_dispatch::constructive::compute_savings;
///
/// let loads = vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
///     Load::new(2, Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
/// ];
/// let savings = compute_savings(&loads, Point::origin());
/// assert_eq!(savings.len(), 2);
/// assert_eq!((savings[0].first, savings[0].second), (0, 1));
/// assert!((savings[0].value - 20.0).abs() < 1e-10);
/// ```
pub fn compute_savings(loads: &[Load], depot: Point) -> Vec<Saving> {
    let n = loads.len();
    if n < 2 {
        return Vec::new();
    }

    let to_depot: Vec<f64> = loads.iter().map(|l| l.dropoff().distance_to(&depot)).collect();
    let from_depot: Vec<f64> = loads.iter().map(|l| depot.distance_to(&l.pickup())).collect();

    let mut savings = Vec::with_capacity(n * (n - 1));
    for (i, a) in loads.iter().enumerate() {
        for (j, b) in loads.iter().enumerate() {
            if i == j {
                continue;
            }
            let value = to_depot[i] + from_depot[j] - a.dropoff().distance_to(&b.pickup());
            savings.push(Saving {
                first: i,
                second: j,
                value,
            });
        }
    }

    savings.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then(a.first.cmp(&b.first))
            .then(a.second.cmp(&b.second))
    });
    savings
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_loads() -> Vec<Load> {
        vec![
            Load::new(1, Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
            Load::new(2, Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
            Load::new(3, Point::new(0.0, 20.0), Point::new(0.0, 30.0)),
        ]
    }

    fn value_of(savings: &[Saving], first: usize, second: usize) -> f64 {
        savings
            .iter()
            .find(|s| s.first == first && s.second == second)
            .map(|s| s.value)
            .expect("pair present")
    }

    #[test]
    fn test_savings_empty_and_single() {
        assert!(compute_savings(&[], Point::origin()).is_empty());
        assert!(compute_savings(&line_loads()[..1], Point::origin()).is_empty());
    }

    #[test]
    fn test_savings_all_ordered_pairs() {
        let savings = compute_savings(&line_loads(), Point::origin());
        assert_eq!(savings.len(), 6);
        assert!(savings.iter().all(|s| s.first != s.second));
    }

    #[test]
    fn test_savings_formula() {
        let savings = compute_savings(&line_loads(), Point::origin());
        // s(1,2) = 10 + 10 - 0
        assert!((value_of(&savings, 0, 1) - 20.0).abs() < 1e-10);
        // s(2,3) = 20 + 20 - 0
        assert!((value_of(&savings, 1, 2) - 40.0).abs() < 1e-10);
        // s(1,3) = 10 + 20 - 10
        assert!((value_of(&savings, 0, 2) - 20.0).abs() < 1e-10);
        // s(2,1) = 20 + 0 - 20
        assert!(value_of(&savings, 1, 0).abs() < 1e-10);
    }

    #[test]
    fn test_savings_asymmetric() {
        let savings = compute_savings(&line_loads(), Point::origin());
        assert!(value_of(&savings, 1, 2) != value_of(&savings, 2, 1));
    }

    #[test]
    fn test_savings_sorted_descending() {
        let savings = compute_savings(&line_loads(), Point::origin());
        assert!(savings.windows(2).all(|w| w[0].value >= w[1].value));
        assert_eq!((savings[0].first, savings[0].second), (1, 2));
    }

    #[test]
    fn test_savings_ties_by_position() {
        let savings = compute_savings(&line_loads(), Point::origin());
        // s(1,2) = s(1,3) = s(3,2) = 20
        let tied: Vec<(usize, usize)> = savings
            .iter()
            .filter(|s| (s.value - 20.0).abs() < 1e-10)
            .map(|s| (s.first, s.second))
            .collect();
        assert_eq!(tied, vec![(0, 1), (0, 2), (2, 1)]);
    }

    #[test]
    fn test_savings_depot_offset() {
        let loads = line_loads();
        let depot = Point::new(0.0, 10.0);
        let savings = compute_savings(&loads, depot);
        // s(1,2) with depot at (0,10): 0 + 0 - 0
        assert!(value_of(&savings, 0, 1).abs() < 1e-10);
    }
}
