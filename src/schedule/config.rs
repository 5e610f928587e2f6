//! Scheduling run configuration.

use std::time::Duration;

/// Configuration for a schedule generation run.
///
/// # Examples
///
/// ```
/// use u_regatta::schedule::ScheduleConfig;
/// use std::time::Duration;
///
/// let config = ScheduleConfig::default()
///     .with_time_limit(Duration::from_secs(60))
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ScheduleConfig {
    /// Wall-clock budget handed to the solver. Recommended range 1–600 s.
    pub time_limit: Duration,

    /// Random seed for reproducible weight generation.
    ///
    /// `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(300),
            seed: None,
        }
    }
}

impl ScheduleConfig {
    /// Sets the solver time budget.
    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.time_limit.is_zero() {
            return Err("time_limit must be positive".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = ScheduleConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(300));
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = ScheduleConfig::default()
            .with_time_limit(Duration::from_secs(10))
            .with_seed(42);
        assert_eq!(config.time_limit, Duration::from_secs(10));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_zero_time_limit_rejected() {
        let config = ScheduleConfig::default().with_time_limit(Duration::ZERO);
        assert!(config.validate().is_err());
    }
}
