//! The failure signal.
//!
//! An assertion failure is the expected, user-facing outcome when a condition
//! does not hold, not a bug. It carries the human-readable message the
//! fluent layer panics with, plus which matcher produced it for callers that
//! inspect results programmatically.

use thiserror::Error;

use crate::registry::MatcherName;

#[derive(Debug, Error)]
pub enum AssertionError {
    /// A matcher condition did not hold (or held, under negation).
    #[error("{message}")]
    Failed {
        matcher: MatcherName,
        message: String,
    },

    /// The invoked name has no registered matcher able to handle the
    /// subject. This is what the initial, pre-registration table entries
    /// report, mirroring a host framework with no such method.
    #[error("no '{0}' matcher is registered for this subject")]
    Unregistered(MatcherName),
}

impl AssertionError {
    pub fn failed(matcher: MatcherName, message: impl Into<String>) -> Self {
        AssertionError::Failed {
            matcher,
            message: message.into(),
        }
    }

    /// The matcher name this error originated from.
    pub fn matcher(&self) -> MatcherName {
        match self {
            AssertionError::Failed { matcher, .. } => *matcher,
            AssertionError::Unregistered(matcher) => *matcher,
        }
    }
}
