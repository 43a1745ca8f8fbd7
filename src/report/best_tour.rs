//! The `caminhominimo.txt` best-tour file.
//!
//! ```text
//! Melhor caminho:
//! 1 -> 2: 3.00 Km
//! 2 -> 3: 5.00 Km
//! 3 -> 1: 4.00 Km
//! Distancia total: 12.00 Km
//! ```

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::info;

use crate::city::Point;
use crate::search::SearchResult;
use crate::{Error, Result};

const HEADER: &str = "Melhor caminho:";
const TOTAL_LABEL: &str = "Distancia total:";
const UNIT: &str = "Km";

/// One leg of the best tour, with 0-based endpoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TourEdge {
    pub from: usize,
    pub to: usize,
    pub distance: f64,
}

/// The best tour broken down into legs, closing leg included.
#[derive(Debug, Clone, PartialEq)]
pub struct BestTour {
    pub edges: Vec<TourEdge>,
    pub total: f64,
}

impl BestTour {
    pub fn from_result(points: &[Point], result: &SearchResult) -> Self {
        let tour = &result.best_tour;
        let edges = (0..tour.len())
            .map(|i| {
                let from = tour[i];
                let to = tour[(i + 1) % tour.len()];
                TourEdge {
                    from,
                    to,
                    distance: points[from].distance(&points[to]),
                }
            })
            .collect();
        Self {
            edges,
            total: result.best_distance,
        }
    }

    /// Visiting order, 0-based, without the repeated start.
    pub fn tour(&self) -> Vec<usize> {
        self.edges.iter().map(|e| e.from).collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{HEADER}");
        for edge in &self.edges {
            let _ = writeln!(
                out,
                "{} -> {}: {:.2} {UNIT}",
                edge.from + 1,
                edge.to + 1,
                edge.distance
            );
        }
        let _ = writeln!(out, "{TOTAL_LABEL} {:.2} {UNIT}", self.total);
        out
    }
}

pub fn write_best_tour(path: impl AsRef<Path>, best: &BestTour) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, best.render()).map_err(|e| Error::file(path, e))?;
    info!("saved best tour to {}", path.display());
    Ok(())
}

/// Reads a best-tour file back. Distances carry the two decimals they
/// were written with.
pub fn read_best_tour(path: impl AsRef<Path>) -> Result<BestTour> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::file(path, e))?;
    parse_best_tour(&text)
}

pub fn parse_best_tour(text: &str) -> Result<BestTour> {
    let mut lines = text.lines().enumerate().map(|(idx, line)| (idx + 1, line));

    match lines.next() {
        Some((_, line)) if line.trim() == HEADER => {}
        Some((no, line)) => return Err(Error::parse(no, line)),
        None => return Err(Error::parse(1, "")),
    }

    let mut edges = Vec::new();
    for (no, line) in lines {
        if let Some(rest) = line.trim().strip_prefix(TOTAL_LABEL) {
            let total = parse_km(rest).ok_or_else(|| Error::parse(no, line))?;
            return Ok(BestTour { edges, total });
        }
        edges.push(parse_edge(line).ok_or_else(|| Error::parse(no, line))?);
    }

    Err(Error::parse(text.lines().count() + 1, "missing total line"))
}

fn parse_edge(line: &str) -> Option<TourEdge> {
    let (ends, km) = line.trim().split_once(':')?;
    let (from, to) = ends.split_once("->")?;
    let from = from.trim().parse::<usize>().ok()?.checked_sub(1)?;
    let to = to.trim().parse::<usize>().ok()?.checked_sub(1)?;
    Some(TourEdge {
        from,
        to,
        distance: parse_km(km)?,
    })
}

fn parse_km(text: &str) -> Option<f64> {
    text.trim().strip_suffix(UNIT)?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn triangle_result() -> (Vec<Point>, SearchResult) {
        let points = vec![Point::new(0, 0), Point::new(3, 0), Point::new(0, 4)];
        let result = SearchResult {
            best_tour: vec![0, 1, 2],
            best_distance: 12.0,
            log: Vec::new(),
            evaluated: 6,
            elapsed: Duration::ZERO,
        };
        (points, result)
    }

    #[test]
    fn test_from_result_includes_closing_edge() {
        let (points, result) = triangle_result();
        let best = BestTour::from_result(&points, &result);

        assert_eq!(best.edges.len(), 3);
        assert_eq!((best.edges[2].from, best.edges[2].to), (2, 0));
        let sum: f64 = best.edges.iter().map(|e| e.distance).sum();
        assert!((sum - best.total).abs() < 1e-9);
        assert_eq!(best.tour(), vec![0, 1, 2]);
    }

    #[test]
    fn test_render() {
        let (points, result) = triangle_result();
        assert_eq!(
            BestTour::from_result(&points, &result).render(),
            "Melhor caminho:\n1 -> 2: 3.00 Km\n2 -> 3: 5.00 Km\n3 -> 1: 4.00 Km\nDistancia total: 12.00 Km\n"
        );
    }

    #[test]
    fn test_single_city_self_edge() {
        let points = vec![Point::new(1, 1)];
        let result = SearchResult {
            best_tour: vec![0],
            best_distance: 0.0,
            log: Vec::new(),
            evaluated: 1,
            elapsed: Duration::ZERO,
        };
        assert_eq!(
            BestTour::from_result(&points, &result).render(),
            "Melhor caminho:\n1 -> 1: 0.00 Km\nDistancia total: 0.00 Km\n"
        );
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("caminhominimo.txt");
        let (points, result) = triangle_result();
        let best = BestTour::from_result(&points, &result);

        write_best_tour(&path, &best).unwrap();
        assert_eq!(read_best_tour(&path).unwrap(), best);
    }

    #[test]
    fn test_parse_rejects_bad_header() {
        let err = parse_best_tour("Best:\nDistancia total: 1.00 Km\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_parse_rejects_bad_edge() {
        let err = parse_best_tour("Melhor caminho:\n1 => 2: 3.00 Km\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));
    }

    #[test]
    fn test_parse_requires_total() {
        let err = parse_best_tour("Melhor caminho:\n1 -> 2: 3.00 Km\n").unwrap_err();
        assert!(matches!(err, Error::Parse { line: 3, .. }));
    }

    #[test]
    fn test_parse_rejects_zero_index() {
        assert!(parse_best_tour("Melhor caminho:\n0 -> 1: 1.00 Km\nDistancia total: 1.00 Km\n").is_err());
    }
}
