//! Run-level settings for the interactive program.

use std::path::PathBuf;

use log::LevelFilter;

use crate::{Error, Result};

/// Settings for one interactive run.
///
/// Everything a user decides at run time is asked for interactively; these
/// are the fixed parts around it.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// City set written after generation and read on load.
    pub cities_path: PathBuf,

    /// One line per evaluated tour.
    pub tours_path: PathBuf,

    /// Best tour, leg by leg.
    pub best_tour_path: PathBuf,

    /// Generated coordinates fall in `[0, coordinate_range)`.
    pub coordinate_range: u32,

    /// Recommended city count shown in the prompt. Larger counts only warn.
    pub max_cities_hint: usize,

    /// Echo every tour to the console.
    pub echo_tours: bool,

    /// Seed for city generation. `None` = OS entropy.
    pub seed: Option<u64>,

    pub log_level: LevelFilter,

    /// Prefix log lines with a millisecond timestamp.
    pub log_timestamp: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            cities_path: PathBuf::from("cidades.txt"),
            tours_path: PathBuf::from("caminhos.txt"),
            best_tour_path: PathBuf::from("caminhominimo.txt"),
            coordinate_range: 100,
            max_cities_hint: 8,
            echo_tours: true,
            seed: None,
            log_level: LevelFilter::Warn,
            log_timestamp: false,
        }
    }
}

impl RunConfig {
    /// Places all three files in `dir` under their default names.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let defaults = Self::default();
        Self {
            cities_path: dir.join(defaults.cities_path),
            tours_path: dir.join(defaults.tours_path),
            best_tour_path: dir.join(defaults.best_tour_path),
            ..Self::default()
        }
    }

    pub fn with_cities_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cities_path = path.into();
        self
    }

    pub fn with_tours_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tours_path = path.into();
        self
    }

    pub fn with_best_tour_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.best_tour_path = path.into();
        self
    }

    pub fn with_coordinate_range(mut self, range: u32) -> Self {
        self.coordinate_range = range;
        self
    }

    pub fn with_echo_tours(mut self, echo: bool) -> Self {
        self.echo_tours = echo;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_log_level(mut self, level: LevelFilter) -> Self {
        self.log_level = level;
        self
    }

    pub fn with_log_timestamp(mut self, timestamp: bool) -> Self {
        self.log_timestamp = timestamp;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.coordinate_range == 0 {
            return Err(Error::invalid_input("coordinate_range must be positive"));
        }
        if self.max_cities_hint == 0 {
            return Err(Error::invalid_input("max_cities_hint must be at least 1"));
        }
        for (name, path) in [
            ("cities_path", &self.cities_path),
            ("tours_path", &self.tours_path),
            ("best_tour_path", &self.best_tour_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(Error::invalid_input(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}
