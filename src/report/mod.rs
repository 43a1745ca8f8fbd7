//! Reporting: console lines, the all-tours log and the best-tour file.

mod best_tour;
mod format;
mod tour_log;

pub use best_tour::{
    parse_best_tour, read_best_tour, write_best_tour, BestTour, TourEdge,
};
pub use format::{console_line, cycle_notation, summary_lines, tour_log_line};
pub use tour_log::{ConsoleEcho, FileTourLog};
