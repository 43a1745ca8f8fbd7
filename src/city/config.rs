//! City generation settings.

use crate::{Error, Result};

/// Configuration for random city generation.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::city::GenerateConfig;
///
/// let config = GenerateConfig::default()
///     .with_count(6)
///     .with_range(50)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Number of distinct cities to produce.
    pub count: usize,

    /// Coordinates are drawn from `[0, range)` on both axes.
    pub range: u32,

    /// Random seed for reproducibility. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            count: 5,
            range: 100,
            seed: None,
        }
    }
}

impl GenerateConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_range(mut self, range: u32) -> Self {
        self.range = range;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// A count larger than the number of grid cells could never be
    /// satisfied by rejection sampling, so it is refused here.
    pub fn validate(&self) -> Result<()> {
        if self.range == 0 {
            return Err(Error::invalid_input("coordinate range must be positive"));
        }
        if self.count == 0 {
            return Err(Error::invalid_input("city count must be at least 1"));
        }
        let cells = u64::from(self.range) * u64::from(self.range);
        if self.count as u64 > cells {
            return Err(Error::invalid_input(format!(
                "cannot place {} distinct cities on a {}x{} grid",
                self.count, self.range, self.range
            )));
        }
        Ok(())
    }
}
