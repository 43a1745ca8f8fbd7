//! Evaluated tours and the sink they are reported to.

use std::time::Duration;

/// One evaluated permutation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TourRecord {
    /// 0-based city indices in visiting order. The closing edge back to
    /// `tour[0]` is implicit.
    pub tour: Vec<usize>,

    /// Total cycle length including the closing edge.
    pub distance: f64,

    /// Time spent scoring this permutation.
    pub elapsed: Duration,
}

/// Receives every tour as soon as it has been scored.
///
/// Sinks are best-effort observers: they cannot fail the search, so any
/// I/O they do must report its own errors.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::city::Point;
/// use u_tsp_brute::search::{BruteForceRunner, SearchConfig, TourRecord};
///
/// let points = [Point::new(0, 0), Point::new(3, 0), Point::new(0, 4)];
/// let mut seen = 0;
/// let mut count = |_: &TourRecord| seen += 1;
/// BruteForceRunner::run_with_sink(&points, &SearchConfig::default(), &mut count).unwrap();
/// assert_eq!(seen, 6);
/// ```
pub trait TourSink {
    fn on_tour_evaluated(&mut self, record: &TourRecord);
}

impl<F> TourSink for F
where
    F: FnMut(&TourRecord),
{
    fn on_tour_evaluated(&mut self, record: &TourRecord) {
        self(record)
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl TourSink for NullSink {
    fn on_tour_evaluated(&mut self, _record: &TourRecord) {}
}

/// Forwards each record to two sinks, left first.
#[derive(Debug, Default)]
pub struct Tee<A, B>(pub A, pub B);

impl<A: TourSink, B: TourSink> TourSink for Tee<A, B> {
    fn on_tour_evaluated(&mut self, record: &TourRecord) {
        self.0.on_tour_evaluated(record);
        self.1.on_tour_evaluated(record);
    }
}

impl<A, B> Tee<A, B> {
    pub fn into_inner(self) -> (A, B) {
        (self.0, self.1)
    }
}
