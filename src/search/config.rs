//! Search configuration.

use crate::{Error, Result};

/// Configuration for the exhaustive tour search.
///
/// # Examples
///
/// ```
/// use u_tsp_brute::search::SearchConfig;
///
/// let config = SearchConfig::default()
///     .with_record_log(false)
///     .with_max_cities(9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Keep every evaluated tour in [`SearchResult::log`](super::SearchResult::log).
    ///
    /// Sinks are notified either way.
    pub record_log: bool,

    /// City count above which a warning is logged. Not enforced.
    pub soft_limit: usize,

    /// Hard city limit. `None` = unlimited.
    pub max_cities: Option<usize>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            record_log: true,
            soft_limit: 8,
            max_cities: None,
        }
    }
}

impl SearchConfig {
    pub fn with_record_log(mut self, record: bool) -> Self {
        self.record_log = record;
        self
    }

    pub fn with_soft_limit(mut self, n: usize) -> Self {
        self.soft_limit = n;
        self
    }

    pub fn with_max_cities(mut self, n: usize) -> Self {
        self.max_cities = Some(n);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.max_cities == Some(0) {
            return Err(Error::invalid_input("max_cities must be at least 1"));
        }
        Ok(())
    }

    /// Checks a city count against the configured limits.
    pub(crate) fn check_cities(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(Error::invalid_input("tour search needs at least one city"));
        }
        if let Some(max) = self.max_cities {
            if n > max {
                return Err(Error::invalid_input(format!(
                    "{n} cities exceed the configured maximum of {max}"
                )));
            }
        }
        if let Some(message) = self.soft_limit_warning(n) {
            log::warn!("{message}");
        }
        Ok(())
    }

    /// The warning for a city count above [`soft_limit`](Self::soft_limit).
    pub(crate) fn soft_limit_warning(&self, n: usize) -> Option<String> {
        (n > self.soft_limit).then(|| {
            format!(
                "{n} cities is above the recommended {}; the search evaluates {n}! tours",
                self.soft_limit
            )
        })
    }
}
