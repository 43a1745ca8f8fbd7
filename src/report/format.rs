//! Text renderings of tours and results.

use crate::memory::MemoryUsage;
use crate::search::{SearchResult, TourRecord};

/// Writes a tour as 1-based indices, repeating the start to close the cycle.
///
/// `[0, 2, 1]` becomes `"1 -> 3 -> 2 -> 1"`.
pub fn cycle_notation(tour: &[usize]) -> String {
    let Some(first) = tour.first() else {
        return String::new();
    };
    tour.iter()
        .chain(std::iter::once(first))
        .map(|idx| (idx + 1).to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// One `caminhos.txt` line: `<cycle>, <distance>, <seconds>`.
pub fn tour_log_line(record: &TourRecord) -> String {
    format!(
        "{}, {:.2}, {:.6}",
        cycle_notation(&record.tour),
        record.distance,
        record.elapsed.as_secs_f64()
    )
}

/// Per-tour console echo.
pub fn console_line(record: &TourRecord) -> String {
    format!(
        "Tour tested: {} | Distance: {:.2} Km | Time: {:.6} s",
        cycle_notation(&record.tour),
        record.distance,
        record.elapsed.as_secs_f64()
    )
}

/// Final console summary.
pub fn summary_lines(result: &SearchResult, memory: Option<&MemoryUsage>) -> Vec<String> {
    let mut lines = vec![
        format!("Best tour found: {}", cycle_notation(&result.best_tour)),
        format!("Total distance: {:.2} Km", result.best_distance),
        format!(
            "Total time: {:.6} seconds",
            result.elapsed.as_secs_f64()
        ),
    ];
    if let Some(usage) = memory {
        lines.push(format!("Memory before: {:.2} KB", kib(usage.before as f64)));
        lines.push(format!("Memory after: {:.2} KB", kib(usage.after as f64)));
        lines.push(format!("Memory used: {:.2} KB", kib(usage.delta() as f64)));
    }
    lines
}

fn kib(bytes: f64) -> f64 {
    bytes / 1024.0
}
