use crate::error::{MetricsError, Result};

/// Validated configuration for the trailing aggregation window.
///
/// The window covers the interval `(window_end - size, window_end]` for each
/// evaluated minute: exclusive start, inclusive end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowConfig {
    minutes: u32,
}

impl WindowConfig {
    /// Create a window `minutes` minutes wide.
    ///
    /// A zero width is a configuration error; the unsigned type already
    /// rules out negative values.
    pub fn new(minutes: u32) -> Result<Self> {
        if minutes == 0 {
            return Err(MetricsError::Configuration(
                "window size must be a positive number of minutes".to_string(),
            ));
        }
        Ok(Self { minutes })
    }

    /// Window width in whole minutes.
    pub fn minutes(&self) -> u32 {
        self.minutes
    }

    /// Window width as a `chrono` duration.
    pub fn duration(&self) -> chrono::Duration {
        chrono::Duration::minutes(i64::from(self.minutes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_window_rejected() {
        let err = WindowConfig::new(0).unwrap_err();
        assert!(matches!(err, MetricsError::Configuration(_)));
    }

    #[test]
    fn test_positive_window_accepted() {
        let config = WindowConfig::new(10).unwrap();
        assert_eq!(config.minutes(), 10);
        assert_eq!(config.duration(), chrono::Duration::minutes(10));
    }
}
