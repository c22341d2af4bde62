//! Refresh interval configuration.
//!
//! This module provides the [`RefreshConfig`] type which controls how often
//! the host re-reads the store and re-runs the widget pipeline. Taps and
//! explicit refresh requests still trigger an immediate update.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default refresh interval (30 seconds).
pub const DEFAULT_REFRESH_INTERVAL: u32 = 30;

/// Minimum allowed refresh interval (1 second).
pub const MIN_REFRESH_INTERVAL: u32 = 1;

/// Maximum allowed refresh interval (1 day).
pub const MAX_REFRESH_INTERVAL: u32 = 86_400;

/// Configuration for the host update cycle.
///
/// # Examples
///
/// ```
/// use adventure_widget_config::RefreshConfig;
///
/// let config = RefreshConfig::default();
/// assert_eq!(config.interval_secs, 30);
///
/// let config = RefreshConfig::with_interval(5);
/// assert_eq!(config.interval().as_secs(), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshConfig {
    /// Seconds between two pipeline runs.
    #[serde(default = "default_interval")]
    pub interval_secs: u32,
}

fn default_interval() -> u32 {
    DEFAULT_REFRESH_INTERVAL
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_secs: DEFAULT_REFRESH_INTERVAL,
        }
    }
}

impl RefreshConfig {
    /// Creates a refresh configuration with the specified interval.
    #[must_use]
    pub fn with_interval(interval_secs: u32) -> Self {
        Self { interval_secs }
    }

    /// Returns the interval as a [`Duration`].
    #[must_use]
    pub fn interval(&self) -> Duration {
        Duration::from_secs(u64::from(self.interval_secs))
    }

    /// Validates the refresh configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the interval is outside the allowed range.
    pub fn validate(&self) -> crate::Result<()> {
        if self.interval_secs < MIN_REFRESH_INTERVAL {
            return Err(crate::ConfigError::InvalidRefreshInterval {
                reason: format!(
                    "interval {} is below minimum of {} seconds",
                    self.interval_secs, MIN_REFRESH_INTERVAL
                ),
            });
        }

        if self.interval_secs > MAX_REFRESH_INTERVAL {
            return Err(crate::ConfigError::InvalidRefreshInterval {
                reason: format!(
                    "interval {} exceeds maximum of {} seconds",
                    self.interval_secs, MAX_REFRESH_INTERVAL
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = RefreshConfig::default();
        assert_eq!(config.interval_secs, DEFAULT_REFRESH_INTERVAL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn interval_as_duration() {
        let config = RefreshConfig::with_interval(90);
        assert_eq!(config.interval(), Duration::from_secs(90));
    }

    #[test]
    fn validate_zero() {
        assert!(RefreshConfig::with_interval(0).validate().is_err());
    }

    #[test]
    fn validate_above_maximum() {
        assert!(
            RefreshConfig::with_interval(MAX_REFRESH_INTERVAL + 1)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn validate_at_boundaries() {
        assert!(
            RefreshConfig::with_interval(MIN_REFRESH_INTERVAL)
                .validate()
                .is_ok()
        );
        assert!(
            RefreshConfig::with_interval(MAX_REFRESH_INTERVAL)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn deserialize_with_defaults() {
        let config: RefreshConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.interval_secs, DEFAULT_REFRESH_INTERVAL);
    }
}
