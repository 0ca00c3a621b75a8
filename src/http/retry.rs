//! Retry policies for HTTP requests.

use std::time::Duration;

/// Retry policy for an HTTP request.
#[derive(Debug, Clone)]
pub enum RetryPolicy {
    /// No retries — used for non-idempotent POST endpoints and
    /// non-replayable bodies (multipart uploads).
    None,
    /// Retry transport failures, retryable 5xx statuses, and 429.
    /// Default for every replayable endpoint; uses the client's configured
    /// [`RetryConfig`].
    Transient,
    /// Caller-provided retry logic.
    Custom(RetryConfig),
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::Transient
    }
}

/// Configuration for retry behavior.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts for one logical call, counting the first.
    /// Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Base delay unit; the N-th retry (1-indexed) is preceded by
    /// `base_delay * 2^N`.
    pub base_delay: Duration,
    /// Whether to add jitter to the delay.
    pub jitter: bool,
    /// Server-error status codes that trigger a retry.
    pub retryable_statuses: Vec<u16>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            jitter: false,
            retryable_statuses: vec![500, 502, 503, 504],
        }
    }
}

impl RetryConfig {
    /// Calculate the delay preceding the given retry (1-indexed).
    ///
    /// With the default 1-second base this yields 2s, 4s, 8s, … — uncapped.
    pub fn delay_for_retry(&self, retry: u32) -> Duration {
        let base = self.base_delay.as_millis() as f64 * 2f64.powi(retry as i32);

        let final_ms = if self.jitter {
            let jitter_range = base * 0.25;
            let jitter = (rand::random::<f64>() - 0.5) * 2.0 * jitter_range;
            (base + jitter).max(0.0)
        } else {
            base
        };

        Duration::from_millis(final_ms as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retry_policy_default_is_transient() {
        assert!(matches!(RetryPolicy::default(), RetryPolicy::Transient));
    }

    #[test]
    fn test_retry_config_default_retries_all_server_statuses() {
        let config = RetryConfig::default();
        for status in [500u16, 502, 503, 504] {
            assert!(config.retryable_statuses.contains(&status));
        }
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_delay_doubles_per_retry_without_jitter() {
        let config = RetryConfig {
            max_attempts: 4,
            base_delay: Duration::from_millis(100),
            jitter: false,
            retryable_statuses: vec![],
        };
        assert_eq!(config.delay_for_retry(1).as_millis(), 200);
        assert_eq!(config.delay_for_retry(2).as_millis(), 400);
        assert_eq!(config.delay_for_retry(3).as_millis(), 800);
    }

    #[test]
    fn test_default_schedule_starts_at_two_seconds() {
        let config = RetryConfig::default();
        assert_eq!(config.delay_for_retry(1), Duration::from_secs(2));
        assert_eq!(config.delay_for_retry(2), Duration::from_secs(4));
        assert_eq!(config.delay_for_retry(3), Duration::from_secs(8));
    }

    #[test]
    fn test_jitter_stays_within_quarter_of_base() {
        let config = RetryConfig {
            max_attempts: 3,
            base_delay: Duration::from_millis(1000),
            jitter: true,
            retryable_statuses: vec![],
        };
        for _ in 0..50 {
            let d = config.delay_for_retry(1).as_millis() as f64;
            assert!((1500.0..=2500.0).contains(&d));
        }
    }
}
