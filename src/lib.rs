//! Exact Traveling Salesman solver for small 2D instances.
//!
//! Every permutation of the cities is scored as a closed Euclidean tour and
//! the shortest one is kept, so the answer is the global optimum at a cost
//! of `n!` evaluations. Practical up to about eight cities.
//!
//! - **City Store** ([`city`]): random generation of distinct integer
//!   points and the flat `Cidade <i>: (<x>, <y>)` text format.
//! - **Tour Search** ([`search`]): in-place swap recursion over all
//!   permutations, strict best tracking, and a [`search::TourSink`] that
//!   observes every evaluated tour.
//! - **Reporting** ([`report`]): the all-tours log, console echo and the
//!   best-tour file.
//! - **Interactive run** ([`App`]): prompt, search and persist in one pass.
//!
//! ```
//! use u_tsp_brute::city::Point;
//! use u_tsp_brute::search::{BruteForceRunner, SearchConfig};
//!
//! let points = [Point::new(0, 0), Point::new(3, 0), Point::new(0, 4)];
//! let result = BruteForceRunner::run(&points, &SearchConfig::default()).unwrap();
//! assert_eq!(result.log.len(), 6);
//! assert!((result.best_distance - 12.0).abs() < 1e-9);
//! ```

mod app;
pub mod city;
mod config;
mod error;
pub mod logging;
pub mod memory;
pub mod report;
pub mod search;

pub use app::{App, Choice, SearchReport};
pub use config::RunConfig;
pub use error::{Error, Result};
