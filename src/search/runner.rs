//! Exhaustive permutation search.

use std::time::{Duration, Instant};

use log::{debug, info};

use super::config::SearchConfig;
use super::types::{NullSink, TourRecord, TourSink};
use crate::city::Point;
use crate::Result;

/// Log entries reserved up front, whatever `n!` is.
const MAX_PREALLOCATED_RECORDS: usize = 1 << 16;

/// Result of an exhaustive tour search.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    /// Shortest tour found, as 0-based city indices.
    ///
    /// On ties the tour evaluated first is kept.
    pub best_tour: Vec<usize>,

    /// Cycle length of `best_tour`, closing edge included.
    pub best_distance: f64,

    /// Every evaluated tour in generation order. Empty when
    /// [`SearchConfig::record_log`] is off.
    pub log: Vec<TourRecord>,

    /// Number of permutations evaluated. Always `n!`.
    pub evaluated: usize,

    /// Wall-clock time of the whole search.
    pub elapsed: Duration,
}

/// Executes the brute-force search.
pub struct BruteForceRunner;

impl BruteForceRunner {
    /// Runs the search without an external sink.
    pub fn run(points: &[Point], config: &SearchConfig) -> Result<SearchResult> {
        Self::run_with_sink(points, config, &mut NullSink)
    }

    /// Runs the search, reporting every evaluated tour to `sink`.
    ///
    /// Permutations are produced by in-place swap recursion: at depth `l`
    /// each position `i >= l` is swapped into `l`, the rest is permuted,
    /// and the swap is undone. All `n!` orderings are visited; rotations
    /// and reflections of the same cycle are not collapsed.
    pub fn run_with_sink<S: TourSink>(
        points: &[Point],
        config: &SearchConfig,
        sink: &mut S,
    ) -> Result<SearchResult> {
        config.validate()?;
        config.check_cities(points.len())?;

        let n = points.len();
        let capacity = if config.record_log {
            factorial(n).map_or(MAX_PREALLOCATED_RECORDS, |f| {
                f.min(MAX_PREALLOCATED_RECORDS)
            })
        } else {
            0
        };

        info!("searching {n} cities exhaustively");
        let start = Instant::now();

        let mut state = SearchState {
            points,
            record_log: config.record_log,
            best_tour: (0..n).collect(),
            best_distance: f64::INFINITY,
            log: Vec::with_capacity(capacity),
            evaluated: 0,
        };
        let mut order: Vec<usize> = (0..n).collect();
        state.permute(&mut order, 0, sink);

        let elapsed = start.elapsed();
        info!(
            "evaluated {} tours in {:.6}s, best distance {:.2}",
            state.evaluated,
            elapsed.as_secs_f64(),
            state.best_distance
        );

        Ok(SearchResult {
            best_tour: state.best_tour,
            best_distance: state.best_distance,
            log: state.log,
            evaluated: state.evaluated,
            elapsed,
        })
    }
}

struct SearchState<'a> {
    points: &'a [Point],
    record_log: bool,
    best_tour: Vec<usize>,
    best_distance: f64,
    log: Vec<TourRecord>,
    evaluated: usize,
}

impl SearchState<'_> {
    fn permute<S: TourSink>(&mut self, order: &mut [usize], depth: usize, sink: &mut S) {
        if depth + 1 >= order.len() {
            self.evaluate(order, sink);
            return;
        }
        for i in depth..order.len() {
            order.swap(depth, i);
            self.permute(order, depth + 1, sink);
            order.swap(depth, i);
        }
    }

    fn evaluate<S: TourSink>(&mut self, order: &[usize], sink: &mut S) {
        let start = Instant::now();
        let distance = tour_distance(self.points, order);
        let elapsed = start.elapsed();

        let record = TourRecord {
            tour: order.to_vec(),
            distance,
            elapsed,
        };
        sink.on_tour_evaluated(&record);
        self.evaluated += 1;

        // Strict comparison: the first of several equal tours wins.
        if distance < self.best_distance {
            debug!("new best {distance:.2} at tour #{}", self.evaluated);
            self.best_distance = distance;
            self.best_tour.copy_from_slice(order);
        }

        if self.record_log {
            self.log.push(record);
        }
    }
}

/// Length of the closed cycle visiting `points` in `tour` order.
///
/// A single-city tour is a self-loop of length zero.
pub fn tour_distance(points: &[Point], tour: &[usize]) -> f64 {
    let Some(&first) = tour.first() else {
        return 0.0;
    };
    let open: f64 = tour
        .windows(2)
        .map(|w| points[w[0]].distance(&points[w[1]]))
        .sum();
    let last = tour[tour.len() - 1];
    open + points[last].distance(&points[first])
}

/// `n!`, or `None` on overflow.
pub fn factorial(n: usize) -> Option<usize> {
    (1..=n).try_fold(1usize, |acc, k| acc.checked_mul(k))
}
