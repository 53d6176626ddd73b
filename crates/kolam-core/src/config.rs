//! Client configuration.
//!
//! Defaults target a backend on `localhost:8000`. Environment variables
//! override the defaults; command-line flags override both.

use std::time::Duration;

use reqwest::Url;

use crate::error::{KolamError, KolamResult};

/// Default backend address
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Default delay between status checks
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);
/// Default status-check ceiling (5 minutes at the default interval)
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

pub const ENV_API_URL: &str = "KOLAM_API_URL";
pub const ENV_POLL_INTERVAL_SECS: &str = "KOLAM_POLL_INTERVAL_SECS";
pub const ENV_POLL_MAX_ATTEMPTS: &str = "KOLAM_POLL_MAX_ATTEMPTS";

/// Fixed-interval polling parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

impl PollPolicy {
    pub fn new(interval: Duration, max_attempts: u32) -> KolamResult<Self> {
        if max_attempts == 0 {
            return Err(KolamError::Config(
                "max attempts must be at least 1".to_string(),
            ));
        }
        if interval.is_zero() {
            return Err(KolamError::Config(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        Ok(Self {
            interval,
            max_attempts,
        })
    }

    /// Upper bound on time spent waiting between checks.
    pub fn ceiling(&self) -> Duration {
        self.interval * self.max_attempts.saturating_sub(1)
    }
}

/// Everything needed to talk to the analysis backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: Url,
    pub poll: PollPolicy,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_API_URL).expect("DEFAULT_API_URL is a valid URL"),
            poll: PollPolicy::default(),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: &str) -> KolamResult<Self> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            poll: PollPolicy::default(),
        })
    }

    /// Defaults overridden by `KOLAM_*` environment variables.
    pub fn from_env() -> KolamResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> KolamResult<Self> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.base_url = parse_base_url(&url)?;
        }
        if let Some(secs) = lookup(ENV_POLL_INTERVAL_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                KolamError::Config(format!("{} must be a whole number of seconds", ENV_POLL_INTERVAL_SECS))
            })?;
            config.poll = PollPolicy::new(Duration::from_secs(secs), config.poll.max_attempts)?;
        }
        if let Some(attempts) = lookup(ENV_POLL_MAX_ATTEMPTS) {
            let attempts: u32 = attempts.trim().parse().map_err(|_| {
                KolamError::Config(format!("{} must be a positive integer", ENV_POLL_MAX_ATTEMPTS))
            })?;
            config.poll = PollPolicy::new(config.poll.interval, attempts)?;
        }

        Ok(config)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(
        mut self,
        api_url: Option<&str>,
        poll_interval_secs: Option<u64>,
        max_attempts: Option<u32>,
    ) -> KolamResult<Self> {
        if let Some(url) = api_url {
            self.base_url = parse_base_url(url)?;
        }
        if let Some(secs) = poll_interval_secs {
            self.poll = PollPolicy::new(Duration::from_secs(secs), self.poll.max_attempts)?;
        }
        if let Some(attempts) = max_attempts {
            self.poll = PollPolicy::new(self.poll.interval, attempts)?;
        }
        Ok(self)
    }

    /// Join an endpoint path onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn parse_base_url(raw: &str) -> KolamResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| KolamError::Config(format!("invalid API URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(KolamError::Config(format!(
            "unsupported URL scheme '{}' (expected http or https)",
            other
        ))),
    }
}
