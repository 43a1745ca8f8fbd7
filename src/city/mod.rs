//! City Store.
//!
//! Supplies the ordered list of 2D integer points a tour search runs on:
//! fresh random sets with pairwise-distinct coordinates, or sets read back
//! from the flat `Cidade <i>: (<x>, <y>)` text format.

mod config;
mod store;
mod types;

pub use config::GenerateConfig;
pub use store::{format_city_line, parse_city_line, CityStore};
pub use types::Point;
