//! Clarke-Wright savings algorithm for pickup-and-delivery loads.
//!
//! # Algorithm
//!
//! Savings of every ordered load pair (see [`compute_savings`]) are consumed
//! once, in decreasing order. Each pair `(i, j)` asks to serve `j` right after
//! `i`, and is acted on according to whether the two loads already have a
//! driver:
//!
//! | `i` assigned | `j` assigned | action |
//! |---|---|---|
//! | no  | no  | open a new route `[i, j]` |
//! | yes | no  | append `j`, if `i` ends its route |
//! | no  | yes | prepend `i`, if `j` starts its route |
//! | yes | yes | join both routes, if `i` ends one and `j` starts the other |
//!
//! Every action is committed only if the resulting route fits the duration
//! budget; otherwise the pair is dropped for good. Loads still unassigned after
//! the pass get a driver of their own.
//!
//! Unlike the classic capacity-bounded variant, routes are never reversed:
//! a load has a direction, so the route `[j, i]` is a different route.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of loads (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use std::iter;

use log::{debug, trace, warn};

use super::savings::{compute_savings, Saving};
use crate::evaluation::RouteEvaluator;
use crate::models::{DispatchProblem, Driver, DriverId, DriverIds, Load, Solution};

/// Constructs a dispatch plan using the Clarke-Wright savings algorithm.
///
/// Every load ends up on exactly one driver. Routes built from two or more
/// loads always fit the problem's duration budget; a load whose own round trip
/// exceeds it still gets a single-load driver.
///
/// The returned solution carries its total distance and total cost (fixed cost
/// per driver plus distance).
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchProblem, Load, Point};
/// use u_dispatch::constructive::clarke_wright_savings;
///
/// let problem = DispatchProblem::new(vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
///     Load::new(2, Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
/// ])
/// .with_max_duration(1000.0);
///
/// let solution = clarke_wright_savings(&problem);
/// assert_eq!(solution.routes(), vec![vec![1, 2]]);
/// assert!((solution.total_cost() - 540.0).abs() < 1e-10);
/// ```
pub fn clarke_wright_savings(problem: &DispatchProblem) -> Solution {
    let savings = compute_savings(problem.loads(), problem.depot());
    construct(problem, savings)
}

/// Runs the greedy pass over `savings` in the given order, then assigns the
/// leftover loads.
fn construct(problem: &DispatchProblem, savings: Vec<Saving>) -> Solution {
    let evaluator = RouteEvaluator::new(problem);
    let mut builder = RouteBuilder::new(problem.loads(), &evaluator);

    for saving in savings {
        let (i, j) = (saving.first, saving.second);
        match (builder.route_of[i], builder.route_of[j]) {
            (None, None) => builder.open(i, j),
            (Some(ri), None) => builder.append(ri, i, j),
            (None, Some(rj)) => builder.prepend(i, rj, j),
            (Some(ri), Some(rj)) => builder.join(ri, i, rj, j),
        }
    }
    builder.assign_residual();

    let mut solution = builder.into_solution();
    solution.set_total_distance(evaluator.solution_distance(&solution));
    solution.set_total_cost(evaluator.solution_cost(&solution));

    debug!("dispatched {} loads to {} drivers", solution.num_served(), solution.num_drivers());
    for driver in solution.drivers() {
        debug!("driver {}: loads {:?}", driver.id(), driver.loads());
    }
    solution
}

/// Mutable route state of one construction pass.
///
/// Loads and routes are addressed by position: `route_of[load]` is the slot
/// of the route serving a load, `routes[slot]` its loads in visiting order.
/// A slot becomes `None` once its route is joined into another.
struct RouteBuilder<'a> {
    loads: &'a [Load],
    evaluator: &'a RouteEvaluator<'a>,
    route_of: Vec<Option<usize>>,
    routes: Vec<Option<Vec<usize>>>,
    driver_ids: Vec<DriverId>,
    ids: DriverIds,
}

impl<'a> RouteBuilder<'a> {
    fn new(loads: &'a [Load], evaluator: &'a RouteEvaluator<'a>) -> Self {
        Self {
            loads,
            evaluator,
            route_of: vec![None; loads.len()],
            routes: Vec::new(),
            driver_ids: Vec::new(),
            ids: DriverIds::new(),
        }
    }

    fn duration(&self, route: impl Iterator<Item = usize>) -> f64 {
        let loads = self.loads;
        self.evaluator.route_duration(route.map(move |k| &loads[k]))
    }

    fn members(&self, slot: usize) -> &[usize] {
        self.routes[slot].as_deref().unwrap_or(&[])
    }

    fn new_route(&mut self, members: Vec<usize>) -> usize {
        let slot = self.routes.len();
        for &k in &members {
            self.route_of[k] = Some(slot);
        }
        self.routes.push(Some(members));
        self.driver_ids.push(self.ids.next_id());
        slot
    }

    /// Opens a route serving `i` then `j`.
    fn open(&mut self, i: usize, j: usize) {
        let cost = self.duration([i, j].into_iter());
        if !self.evaluator.within_budget(cost) {
            return;
        }
        let slot = self.new_route(vec![i, j]);
        trace!(
            "open route {slot}: [{}, {}] ({cost:.2})",
            self.loads[i].id(),
            self.loads[j].id()
        );
    }

    /// Serves `j` after `i`, which must be the last load of route `ri`.
    fn append(&mut self, ri: usize, i: usize, j: usize) {
        if self.members(ri).last() != Some(&i) {
            return;
        }
        let cost = self.duration(self.members(ri).iter().copied().chain(iter::once(j)));
        if !self.evaluator.within_budget(cost) {
            return;
        }
        if let Some(route) = self.routes[ri].as_mut() {
            route.push(j);
            self.route_of[j] = Some(ri);
            trace!("append {} to route {ri} ({cost:.2})", self.loads[j].id());
        }
    }

    /// Serves `i` before `j`, which must be the first load of route `rj`.
    fn prepend(&mut self, i: usize, rj: usize, j: usize) {
        if self.members(rj).first() != Some(&j) {
            return;
        }
        let cost = self.duration(iter::once(i).chain(self.members(rj).iter().copied()));
        if !self.evaluator.within_budget(cost) {
            return;
        }
        if let Some(route) = self.routes[rj].as_mut() {
            route.insert(0, i);
            self.route_of[i] = Some(rj);
            trace!("prepend {} to route {rj} ({cost:.2})", self.loads[i].id());
        }
    }

    /// Appends route `rj` to route `ri` when `i` ends `ri` and `j` starts `rj`.
    fn join(&mut self, ri: usize, i: usize, rj: usize, j: usize) {
        if ri == rj || self.members(ri).last() != Some(&i) || self.members(rj).first() != Some(&j)
        {
            return;
        }
        let cost = self.duration(
            self.members(ri)
                .iter()
                .chain(self.members(rj).iter())
                .copied(),
        );
        if !self.evaluator.within_budget(cost) {
            return;
        }
        let Some(absorbed) = self.routes[rj].take() else {
            return;
        };
        for &k in &absorbed {
            self.route_of[k] = Some(ri);
        }
        if let Some(route) = self.routes[ri].as_mut() {
            route.extend(absorbed);
        }
        trace!("join route {rj} into route {ri} ({cost:.2})");
    }

    /// Gives every load without a route a driver of its own, in input order.
    fn assign_residual(&mut self) {
        for k in 0..self.loads.len() {
            if self.route_of[k].is_some() {
                continue;
            }
            let cost = self.duration(iter::once(k));
            if !self.evaluator.within_budget(cost) {
                warn!(
                    "load {} alone takes {cost:.2}, over the route budget",
                    self.loads[k].id()
                );
            }
            self.new_route(vec![k]);
        }
    }

    /// Surviving routes, in the order they were opened.
    fn into_solution(self) -> Solution {
        let mut solution = Solution::new();
        for (route, id) in self.routes.into_iter().zip(self.driver_ids) {
            if let Some(members) = route {
                let load_ids = members.iter().map(|&k| self.loads[k].id()).collect();
                solution.add_driver(Driver::new(id, load_ids));
            }
        }
        solution
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Point;

    fn load(id: i64, pickup: (f64, f64), dropoff: (f64, f64)) -> Load {
        Load::new(
            id,
            Point::new(pickup.0, pickup.1),
            Point::new(dropoff.0, dropoff.1),
        )
    }

    #[test]
    fn test_cw_empty() {
        let problem = DispatchProblem::new(Vec::new());
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.num_drivers(), 0);
        assert_eq!(sol.total_cost(), 0.0);
    }

    #[test]
    fn test_cw_single_load() {
        let problem = DispatchProblem::new(vec![load(1, (0.0, 0.0), (0.0, 10.0))]);
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.routes(), vec![vec![1]]);
        assert!((sol.total_distance() - 20.0).abs() < 1e-10);
        assert!((sol.total_cost() - 520.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_open_route() {
        let problem = DispatchProblem::new(vec![
            load(1, (0.0, 0.0), (0.0, 10.0)),
            load(2, (0.0, 10.0), (0.0, 20.0)),
        ])
        .with_max_duration(1000.0);
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.routes(), vec![vec![1, 2]]);
        // 0 + 10 + 0 + 10 + 20
        assert!((sol.total_distance() - 40.0).abs() < 1e-10);
        assert!((sol.total_cost() - 540.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_over_budget_stays_separate() {
        // alone: 20 and 34.14; together: 48.28 or 44.14
        let problem = DispatchProblem::new(vec![
            load(1, (0.0, 0.0), (0.0, 10.0)),
            load(2, (10.0, 0.0), (10.0, 10.0)),
        ])
        .with_max_duration(40.0);
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.routes(), vec![vec![1], vec![2]]);
        assert_eq!(sol.num_drivers(), 2);
    }

    #[test]
    fn test_cw_prepend() {
        // (2,3) ranks first, then (1,2) puts load 1 in front.
        let problem = DispatchProblem::new(vec![
            load(1, (0.0, 0.0), (0.0, 10.0)),
            load(2, (0.0, 10.0), (0.0, 20.0)),
            load(3, (0.0, 20.0), (0.0, 30.0)),
        ])
        .with_max_duration(1000.0);
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.routes(), vec![vec![1, 2, 3]]);
        assert!((sol.total_distance() - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_append() {
        // (1,2) ranks first, then (2,3) puts load 3 at the end.
        let problem = DispatchProblem::new(vec![
            load(1, (0.0, 20.0), (0.0, 30.0)),
            load(2, (0.0, 30.0), (0.0, 5.0)),
            load(3, (0.0, 5.0), (0.0, 1.0)),
        ])
        .with_max_duration(1000.0);
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.routes(), vec![vec![1, 2, 3]]);
        assert!((sol.total_distance() - 60.0).abs() < 1e-10);
    }

    #[test]
    fn test_cw_join_routes() {
        // Two chains, [1,2] up the y axis and [3,4] along the x axis.
        let problem = DispatchProblem::new(vec![
            load(1, (0.0, 10.0), (0.0, 20.0)),
            load(2, (0.0, 20.0), (0.0, 30.0)),
            load(3, (10.0, 0.0), (20.0, 0.0)),
            load(4, (20.0, 0.0), (30.0, 0.0)),
        ])
        .with_max_duration(1000.0);
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.routes(), vec![vec![1, 2, 3, 4]]);
        assert_eq!(sol.num_drivers(), 1);
    }

    #[test]
    fn test_cw_join_over_budget() {
        // Each chain takes 60, joined they take 111.6.
        let problem = DispatchProblem::new(vec![
            load(1, (0.0, 10.0), (0.0, 20.0)),
            load(2, (0.0, 20.0), (0.0, 30.0)),
            load(3, (10.0, 0.0), (20.0, 0.0)),
            load(4, (20.0, 0.0), (30.0, 0.0)),
        ])
        .with_max_duration(100.0);
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.routes(), vec![vec![1, 2], vec![3, 4]]);
        assert!((sol.total_cost() - 1120.0).abs() < 1e-10);
    }

    fn line_problem(n: i64) -> DispatchProblem {
        let loads = (0..n)
            .map(|k| {
                let y = k as f64 * 10.0;
                load(k + 1, (0.0, y), (0.0, y + 10.0))
            })
            .collect();
        DispatchProblem::new(loads).with_max_duration(1000.0)
    }

    fn ranked(pairs: &[(usize, usize)]) -> Vec<Saving> {
        pairs
            .iter()
            .enumerate()
            .map(|(rank, &(first, second))| Saving {
                first,
                second,
                value: 100.0 - rank as f64,
            })
            .collect()
    }

    #[test]
    fn test_append_requires_route_end() {
        // Load 1 heads [1,2], so (1,3) must leave load 3 alone.
        let sol = construct(&line_problem(3), ranked(&[(0, 1), (0, 2)]));
        assert_eq!(sol.routes(), vec![vec![1, 2], vec![3]]);

        let sol = construct(&line_problem(3), ranked(&[(0, 1), (1, 2)]));
        assert_eq!(sol.routes(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_append_skipped_pair_leaves_load_for_later_route() {
        // (1,3) is refused; (3,4) then opens a route of its own.
        let sol = construct(&line_problem(4), ranked(&[(0, 1), (0, 2), (2, 3)]));
        assert_eq!(sol.routes(), vec![vec![1, 2], vec![3, 4]]);
    }

    #[test]
    fn test_prepend_requires_route_start() {
        // Load 2 ends [1,2], so (3,2) must leave load 3 alone.
        let sol = construct(&line_problem(3), ranked(&[(0, 1), (2, 1)]));
        assert_eq!(sol.routes(), vec![vec![1, 2], vec![3]]);

        let sol = construct(&line_problem(3), ranked(&[(1, 2), (0, 1)]));
        assert_eq!(sol.routes(), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_join_requires_tail_then_head() {
        // Load 1 does not end [1,2].
        let sol = construct(&line_problem(4), ranked(&[(0, 1), (2, 3), (0, 2)]));
        assert_eq!(sol.routes(), vec![vec![1, 2], vec![3, 4]]);

        // Load 4 does not start [3,4].
        let sol = construct(&line_problem(4), ranked(&[(0, 1), (2, 3), (1, 3)]));
        assert_eq!(sol.routes(), vec![vec![1, 2], vec![3, 4]]);

        let sol = construct(&line_problem(4), ranked(&[(0, 1), (2, 3), (1, 2)]));
        assert_eq!(sol.routes(), vec![vec![1, 2, 3, 4]]);
    }

    #[test]
    fn test_join_keeps_surviving_route_position() {
        // [3,4] opens after [1,2] but absorbs it: 4 ends it, 1 starts [1,2].
        let sol = construct(&line_problem(4), ranked(&[(0, 1), (2, 3), (3, 0)]));
        assert_eq!(sol.routes(), vec![vec![3, 4, 1, 2]]);
        assert_eq!(sol.num_drivers(), 1);
    }

    #[test]
    fn test_join_same_route_ignored() {
        let sol = construct(&line_problem(2), ranked(&[(0, 1), (1, 0)]));
        assert_eq!(sol.routes(), vec![vec![1, 2]]);
    }

    #[test]
    fn test_cw_oversized_load_alone() {
        let problem = DispatchProblem::new(vec![
            load(1, (0.0, 0.0), (0.0, 10.0)),
            load(2, (500.0, 0.0), (500.0, 10.0)),
        ])
        .with_max_duration(100.0);
        let sol = clarke_wright_savings(&problem);
        assert_eq!(sol.routes(), vec![vec![1], vec![2]]);
        let evaluator = RouteEvaluator::new(&problem);
        let violations = evaluator.validate(&sol);
        assert_eq!(violations.len(), 1);
        assert!(violations[0].to_string().starts_with("route 1 takes 1010.10"));
    }

    #[test]
    fn test_cw_unique_driver_ids() {
        let loads = (0..6)
            .map(|k| load(k, (k as f64 * 100.0, 0.0), (k as f64 * 100.0, 1.0)))
            .collect();
        let problem = DispatchProblem::new(loads).with_max_duration(50.0);
        let sol = clarke_wright_savings(&problem);
        let mut ids: Vec<DriverId> = sol.drivers().iter().map(|d| d.id()).collect();
        ids.sort_by_key(|id| id.value());
        ids.dedup();
        assert_eq!(ids.len(), sol.num_drivers());
    }

    #[test]
    fn test_cw_valid_solution() {
        let problem = DispatchProblem::new(vec![
            load(1, (-50.1, 80.0), (90.1, 12.2)),
            load(2, (-24.5, -19.2), (98.5, 1.8)),
            load(3, (0.3, 8.9), (40.9, 55.0)),
            load(4, (5.3, -61.1), (77.8, -5.4)),
            load(5, (-10.0, -10.0), (10.0, 10.0)),
        ]);
        let sol = clarke_wright_savings(&problem);
        let evaluator = RouteEvaluator::new(&problem);
        let (cost, violations) = evaluator.evaluate_solution(&sol);
        assert!(violations.is_empty());
        assert!((cost - sol.total_cost()).abs() < 1e-9);
        assert_eq!(sol.num_served(), 5);
    }
}
