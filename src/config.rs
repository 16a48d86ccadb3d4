//! Configuration for the sample job
//!
//! This module centralizes the defaults and turns raw values (as read from the
//! environment or command line) into a validated [`JobConfig`].

use std::num::{IntErrorKind, ParseIntError};
use std::time::Duration;

use thiserror::Error;

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_JOB_NAME: &str = "sample-job";

pub const DEFAULT_PROCESS_COUNT: u64 = 5;

/// Simulated work duration for a single item
pub const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid literal for PROCESS_COUNT: '{value}'")]
    InvalidProcessCount {
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("PROCESS_COUNT must be non-negative, got {0}")]
    NegativeProcessCount(i64),

    #[error("PROCESS_COUNT '{0}' exceeds the maximum of {max}", max = u64::MAX)]
    ProcessCountTooLarge(String),

    #[error("invalid literal for STEP_DELAY_MS: '{value}'")]
    InvalidStepDelay {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Immutable settings for one job run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobConfig {
    pub job_name: String,
    pub process_count: u64,
    pub step_delay: Duration,
}

impl Default for JobConfig {
    fn default() -> Self {
        Self {
            job_name: DEFAULT_JOB_NAME.to_string(),
            process_count: DEFAULT_PROCESS_COUNT,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }
}

impl JobConfig {
    pub fn new(job_name: impl Into<String>, process_count: u64) -> Self {
        Self {
            job_name: job_name.into(),
            process_count,
            ..Self::default()
        }
    }

    pub fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Build a config from raw string values, applying defaults for anything unset
    ///
    /// `job_name` is taken verbatim. `process_count` and `step_delay_ms` must be
    /// non-negative integers; surrounding whitespace is ignored.
    pub fn from_raw(
        job_name: Option<&str>,
        process_count: Option<&str>,
        step_delay_ms: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let job_name = job_name.unwrap_or(DEFAULT_JOB_NAME).to_string();

        let process_count = match process_count {
            Some(raw) => parse_process_count(raw)?,
            None => DEFAULT_PROCESS_COUNT,
        };

        let step_delay = match step_delay_ms {
            Some(raw) => {
                let millis = raw
                    .trim()
                    .parse::<u64>()
                    .map_err(|source| ConfigError::InvalidStepDelay {
                        value: raw.to_string(),
                        source,
                    })?;
                Duration::from_millis(millis)
            }
            None => DEFAULT_STEP_DELAY,
        };

        Ok(Self {
            job_name,
            process_count,
            step_delay,
        })
    }
}

fn parse_process_count(raw: &str) -> Result<u64, ConfigError> {
    let trimmed = raw.trim();
    trimmed.parse::<u64>().map_err(|source| {
        // Report "-3" as negative rather than as a bad digit
        if let Ok(signed) = trimmed.parse::<i64>()
            && signed < 0
        {
            ConfigError::NegativeProcessCount(signed)
        } else if *source.kind() == IntErrorKind::PosOverflow {
            ConfigError::ProcessCountTooLarge(trimmed.to_string())
        } else {
            ConfigError::InvalidProcessCount {
                value: raw.to_string(),
                source,
            }
        }
    })
}
