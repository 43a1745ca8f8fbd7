//! Brute-Force Tour Search.
//!
//! Enumerates every permutation of the input cities, scores each as a
//! closed Euclidean cycle and keeps the shortest. Rotations and
//! reflections are evaluated separately, so `n` cities cost exactly `n!`
//! evaluations; intended for `n <= 8`.
//!
//! Every evaluated tour is handed to a [`TourSink`], which keeps file and
//! console reporting out of the search itself.

mod config;
mod permutations;
mod runner;
mod types;

pub use config::SearchConfig;
pub use permutations::SwapPermutations;
pub use runner::{factorial, tour_distance, BruteForceRunner, SearchResult};
pub use types::{NullSink, Tee, TourRecord, TourSink};
