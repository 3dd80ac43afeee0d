//! Route cost evaluation, solution costing, and feasibility checking.

mod evaluator;

pub use evaluator::RouteEvaluator;
