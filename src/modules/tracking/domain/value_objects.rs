use crate::shared::errors::{AppError, AppResult};
use std::fmt;

/// Identifier as read from the list file. The text form is what goes into the
/// request path; the integer form is the storage key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimeId {
    raw: String,
    value: i64,
}

impl AnimeId {
    pub fn parse(raw: &str) -> AppResult<Self> {
        let raw = raw.trim();
        let value = raw.parse::<i64>().map_err(|_| {
            AppError::InvalidInput(format!("'{}' is not a numeric anime ID", raw))
        })?;

        Ok(Self {
            raw: raw.to_string(),
            value,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn value(&self) -> i64 {
        self.value
    }
}

impl fmt::Display for AnimeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Terminal state of one identifier in a check run
#[derive(Debug)]
pub enum CheckOutcome {
    New {
        title: String,
        status: String,
    },
    Changed {
        title: String,
        previous_status: String,
        status: String,
    },
    Unchanged {
        title: String,
        status: String,
    },
    /// Fetch, decode or identifier error; nothing was written
    Skipped {
        id: String,
        error: AppError,
    },
}

impl fmt::Display for CheckOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CheckOutcome::New { title, status } => {
                write!(f, "  -> NEW ANIME FOUND: '{}' has status '{}'.", title, status)
            }
            CheckOutcome::Changed {
                title,
                previous_status,
                status,
            } => write!(
                f,
                "  -> STATUS CHANGE! '{}' changed from '{}' to '{}'.",
                title, previous_status, status
            ),
            CheckOutcome::Unchanged { title, status } => write!(
                f,
                "  -> No news for '{}'. Status remains: '{}'.",
                title, status
            ),
            CheckOutcome::Skipped { id, error } => {
                write!(f, "  -> Error fetching data for ID {}: {}", id, error)
            }
        }
    }
}

/// Per-run tally, logged when the run finishes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckSummary {
    pub new: usize,
    pub changed: usize,
    pub unchanged: usize,
    pub skipped: usize,
}

impl CheckSummary {
    pub fn record(&mut self, outcome: &CheckOutcome) {
        match outcome {
            CheckOutcome::New { .. } => self.new += 1,
            CheckOutcome::Changed { .. } => self.changed += 1,
            CheckOutcome::Unchanged { .. } => self.unchanged += 1,
            CheckOutcome::Skipped { .. } => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.new + self.changed + self.unchanged + self.skipped
    }
}

impl fmt::Display for CheckSummary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} checked: {} new, {} changed, {} unchanged, {} skipped",
            self.total(),
            self.new,
            self.changed,
            self.unchanged,
            self.skipped
        )
    }
}
