//! Runtime configuration from environment variables.
//!
//! | Variable | Default |
//! |---|---|
//! | `AGRISMART_LOCATION` | `Salem, Tamil Nadu, India` |
//! | `AGRISMART_DATA_DIR` | `.agrismart` |
//! | `AGRISMART_THINKING_MIN_MS` | `2000` |
//! | `AGRISMART_THINKING_JITTER_MS` | `2000` |

use std::path::PathBuf;
use std::time::Duration;

use rand::Rng;

pub const DEFAULT_LOCATION: &str = "Salem, Tamil Nadu, India";
pub const DEFAULT_DATA_DIR: &str = ".agrismart";

/// Simulated "thinking" pause before a response is produced.
///
/// The pause is `min + uniform(0, jitter)`. It is part of the UX pacing, so the
/// default keeps the 2-4 second window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThinkingDelay {
    pub min: Duration,
    pub jitter: Duration,
}

impl ThinkingDelay {
    pub fn new(min: Duration, jitter: Duration) -> Self {
        Self { min, jitter }
    }

    /// No pause at all (tests, batch use).
    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            jitter: Duration::ZERO,
        }
    }

    /// Draw one delay from the configured window.
    pub fn sample(&self) -> Duration {
        let jitter_ns = u64::try_from(self.jitter.as_nanos()).unwrap_or(u64::MAX);
        if jitter_ns == 0 {
            return self.min;
        }
        self.min + Duration::from_nanos(rand::thread_rng().gen_range(0..jitter_ns))
    }
}

impl Default for ThinkingDelay {
    fn default() -> Self {
        Self {
            min: Duration::from_millis(2000),
            jitter: Duration::from_millis(2000),
        }
    }
}

/// Assistant configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Location quoted in analysis steps and personalized recommendations.
    pub location: String,
    /// Directory backing persistent chat history.
    pub data_dir: PathBuf,
    pub thinking_delay: ThinkingDelay,
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let location = std::env::var("AGRISMART_LOCATION")
            .unwrap_or_else(|_| DEFAULT_LOCATION.to_string());

        let data_dir = std::env::var("AGRISMART_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        let defaults = ThinkingDelay::default();
        let min = env_millis("AGRISMART_THINKING_MIN_MS").unwrap_or(defaults.min);
        let jitter = env_millis("AGRISMART_THINKING_JITTER_MS").unwrap_or(defaults.jitter);

        Self {
            location,
            data_dir,
            thinking_delay: ThinkingDelay::new(min, jitter),
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_thinking_delay(mut self, delay: ThinkingDelay) -> Self {
        self.thinking_delay = delay;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            thinking_delay: ThinkingDelay::default(),
        }
    }
}

fn env_millis(name: &str) -> Option<Duration> {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .map(Duration::from_millis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delay_window() {
        let delay = ThinkingDelay::default();
        for _ in 0..50 {
            let d = delay.sample();
            assert!(d >= Duration::from_millis(2000));
            assert!(d < Duration::from_millis(4000));
        }
    }

    #[test]
    fn test_sub_millisecond_jitter() {
        let delay = ThinkingDelay::new(Duration::ZERO, Duration::from_micros(500));
        for _ in 0..50 {
            assert!(delay.sample() < Duration::from_micros(500));
        }
    }

    #[test]
    fn test_zero_delay() {
        assert_eq!(ThinkingDelay::none().sample(), Duration::ZERO);
    }

    #[test]
    fn test_default_location() {
        let config = Config::default();
        assert_eq!(config.location, "Salem, Tamil Nadu, India");
    }
}
