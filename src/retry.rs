use std::time::Duration;

/// Policy governing the submodule initialization retry loop.
///
/// Transient network failures during the initial clone are expected, so the
/// default policy keeps retrying until the update succeeds. A bounded policy
/// with a fixed backoff can be substituted; when its attempts are exhausted
/// the whole run fails rather than continuing with uninitialized submodules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryPolicy {
    /// Retry forever with no backoff
    UntilSuccess,
    /// Retry up to `max_attempts` total attempts, sleeping `backoff` between them
    Limited { max_attempts: u32, backoff: Duration },
}

impl RetryPolicy {
    /// Bounded policy with a two-second backoff between attempts.
    pub fn limited(max_attempts: u32) -> Self {
        RetryPolicy::Limited {
            max_attempts,
            backoff: Duration::from_secs(2),
        }
    }

    /// Decide whether attempt number `attempt` (1-based) may run.
    ///
    /// Returns the delay to sleep before that attempt, or `None` if the
    /// policy is exhausted and the caller must give up.
    pub fn delay_before(&self, attempt: u32) -> Option<Duration> {
        match self {
            RetryPolicy::UntilSuccess => Some(Duration::ZERO),
            RetryPolicy::Limited {
                max_attempts,
                backoff,
            } => {
                if attempt > *max_attempts {
                    None
                } else {
                    Some(*backoff)
                }
            }
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy::UntilSuccess
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_until_success_never_gives_up() {
        let policy = RetryPolicy::UntilSuccess;
        for attempt in [1, 2, 100, 10_000] {
            assert_eq!(policy.delay_before(attempt), Some(Duration::ZERO));
        }
    }

    #[test]
    fn test_limited_allows_up_to_max_attempts() {
        let policy = RetryPolicy::limited(3);
        assert_eq!(policy.delay_before(1), Some(Duration::from_secs(2)));
        assert_eq!(policy.delay_before(3), Some(Duration::from_secs(2)));
        assert_eq!(policy.delay_before(4), None);
    }

    #[test]
    fn test_default_is_until_success() {
        assert_eq!(RetryPolicy::default(), RetryPolicy::UntilSuccess);
    }
}
