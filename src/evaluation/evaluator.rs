//! Route evaluator that computes route durations, solution cost, and violations.

use std::collections::HashMap;

use crate::distance::path_length;
use crate::models::{
    DispatchProblem, Driver, Load, LoadId, Point, Solution, Violation, ViolationType,
};

/// Evaluates routes against a dispatch problem: route duration including the
/// depot legs, the route budget, solution cost, and solution validity.
///
/// # Examples
///
/// ```
/// use u_dispatch::models::{DispatchProblem, Load, Point};
/// use u_dispatch::evaluation::RouteEvaluator;
///
/// let problem = DispatchProblem::new(vec![
///     Load::new(1, Point::new(0.0, 0.0), Point::new(0.0, 10.0)),
///     Load::new(2, Point::new(0.0, 10.0), Point::new(0.0, 20.0)),
/// ]);
/// let evaluator = RouteEvaluator::new(&problem);
///
/// // 0 + 10 (load 1) + 0 + 10 (load 2) + 20 back to the depot
/// let duration = evaluator.route_duration(problem.loads());
/// assert!((duration - 40.0).abs() < 1e-10);
/// assert!(evaluator.within_budget(duration));
/// ```
pub struct RouteEvaluator<'a> {
    problem: &'a DispatchProblem,
    by_id: HashMap<LoadId, &'a Load>,
}

impl<'a> RouteEvaluator<'a> {
    /// Creates a new evaluator for the given problem.
    pub fn new(problem: &'a DispatchProblem) -> Self {
        let by_id = problem.loads().iter().map(|l| (l.id(), l)).collect();
        Self { problem, by_id }
    }

    /// Looks up a load by ID.
    pub fn load(&self, id: LoadId) -> Option<&'a Load> {
        self.by_id.get(&id).copied()
    }

    /// Total duration of serving `route` in order, starting and ending at the
    /// depot.
    ///
    /// Counts every delivery leg, every dropoff→next-pickup leg, and the two
    /// depot legs. An empty route takes zero time.
    pub fn route_duration<'l, I>(&self, route: I) -> f64
    where
        I: IntoIterator<Item = &'l Load>,
    {
        let depot = self.problem.depot();
        let mut total = 0.0;
        let mut prev: Option<&Load> = None;

        for load in route {
            let approach = match prev {
                Some(p) => p.dropoff().distance_to(&load.pickup()),
                None => depot.distance_to(&load.pickup()),
            };
            total += approach + load.delivery_distance();
            prev = Some(load);
        }

        if let Some(last) = prev {
            total += last.dropoff().distance_to(&depot);
        }
        total
    }

    /// Returns `true` if a route of the given duration fits the budget.
    pub fn within_budget(&self, duration: f64) -> bool {
        duration <= self.problem.max_duration()
    }

    /// Distance driven by one driver.
    ///
    /// Walks depot → pickup → dropoff → … → depot. IDs unknown to the problem
    /// are skipped; [`validate`](Self::validate) reports them.
    pub fn driver_distance(&self, driver: &Driver) -> f64 {
        let depot = self.problem.depot();
        let mut points: Vec<Point> = Vec::with_capacity(driver.len() * 2 + 2);
        points.push(depot);
        for load in driver.loads().iter().filter_map(|&id| self.load(id)) {
            points.push(load.pickup());
            points.push(load.dropoff());
        }
        points.push(depot);
        path_length(&points)
    }

    /// Distance driven by all drivers of a solution.
    pub fn solution_distance(&self, solution: &Solution) -> f64 {
        solution
            .drivers()
            .iter()
            .map(|d| self.driver_distance(d))
            .sum()
    }

    /// Fixed cost per driver times driver count, plus all driven distance.
    pub fn solution_cost(&self, solution: &Solution) -> f64 {
        self.problem.fixed_driver_cost() * solution.num_drivers() as f64
            + self.solution_distance(solution)
    }

    /// Checks a solution against the problem.
    ///
    /// Reports routes over budget, empty routes, and loads that are missing,
    /// duplicated, or unknown. A valid solution yields an empty list.
    pub fn validate(&self, solution: &Solution) -> Vec<Violation> {
        let mut violations = Vec::new();
        let mut seen: HashMap<LoadId, usize> = HashMap::new();

        for (route_index, driver) in solution.drivers().iter().enumerate() {
            if driver.is_empty() {
                violations.push(Violation::new(ViolationType::EmptyRoute { route_index }));
                continue;
            }

            for &load_id in driver.loads() {
                if self.load(load_id).is_none() {
                    violations.push(Violation::new(ViolationType::UnknownLoad { load_id }));
                }
                *seen.entry(load_id).or_insert(0) += 1;
            }

            let duration =
                self.route_duration(driver.loads().iter().filter_map(|&id| self.load(id)));
            if !self.within_budget(duration) {
                violations.push(Violation::new(ViolationType::MaxDurationExceeded {
                    route_index,
                    duration,
                    max_duration: self.problem.max_duration(),
                }));
            }
        }

        for load in self.problem.loads() {
            match seen.get(&load.id()).copied().unwrap_or(0) {
                0 => violations.push(Violation::new(ViolationType::MissingLoad {
                    load_id: load.id(),
                })),
                1 => {}
                _ => violations.push(Violation::new(ViolationType::DuplicateLoad {
                    load_id: load.id(),
                })),
            }
        }

        violations
    }

    /// Evaluates an entire solution, returning `(cost, violations)`.
    pub fn evaluate_solution(&self, solution: &Solution) -> (f64, Vec<Violation>) {
        (self.solution_cost(solution), self.validate(solution))
    }
}
