//! # u-dispatch
//!
//! Pickup-and-delivery dispatching: assigns point-to-point loads to drivers
//! whose routes start and end at a depot, keeping every route within a
//! duration budget while keeping fixed driver cost plus driven distance low.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Point, Load, Driver, DispatchProblem, Solution)
//! - [`distance`] — Euclidean distance between points
//! - [`evaluation`] — Route duration, solution cost, and validation
//! - [`constructive`] — Savings ranking and Clarke-Wright route construction
//! - [`io`] — Load list reader and route writer
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade: `trace!`
//! per route decision, `debug!` for the finished plan, `warn!` for a load whose
//! own round trip is over the budget. The library never installs a logger;
//! applications that want these records register a backend themselves. The
//! `vrp` binary installs none and reports budget violations on stderr instead.
//!
//! ## Example
//!
//! ```
//! use u_dispatch::constructive::clarke_wright_savings;
//! use u_dispatch::io::{read_loads, write_routes};
//! use u_dispatch::models::DispatchProblem;
//!
//! let text = "loadNumber pickup dropoff\n1 (0,0) (0,10)\n2 (0,10) (0,20)\n";
//! let problem = DispatchProblem::new(read_loads(text.as_bytes()).unwrap());
//! let solution = clarke_wright_savings(&problem);
//!
//! let mut out = Vec::new();
//! write_routes(&mut out, &solution).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "[1,2]\n");
//! ```

pub mod constructive;
pub mod distance;
pub mod evaluation;
pub mod io;
pub mod models;
