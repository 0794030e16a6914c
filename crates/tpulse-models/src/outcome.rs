//! Outcome of a call to the generative text service.
//!
//! AI-driven components never fail outward. They always hand back a value,
//! but callers that care (tests, logs, metrics) can still see whether the
//! value was generated or is a fallback, and why.

use serde::Serialize;
use thiserror::Error;

/// Why a fallback value was returned instead of a generated one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum DegradeReason {
    #[error("no credential configured")]
    MissingCredential,

    #[error("nothing to analyze")]
    EmptyInput,

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("invalid shape: {0}")]
    InvalidShape(String),
}

impl DegradeReason {
    /// Short label for metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            DegradeReason::MissingCredential => "missing_credential",
            DegradeReason::EmptyInput => "empty_input",
            DegradeReason::Transport(_) => "transport",
            DegradeReason::MalformedResponse(_) => "malformed_response",
            DegradeReason::InvalidShape(_) => "invalid_shape",
        }
    }
}

/// A value produced by an AI-driven component.
#[derive(Debug, Clone, PartialEq)]
pub enum AiOutcome<T> {
    /// The service produced a value that passed validation.
    Generated(T),
    /// The fallback value, with the reason it was used.
    Degraded { value: T, reason: DegradeReason },
}

impl<T> AiOutcome<T> {
    pub fn degraded(value: T, reason: DegradeReason) -> Self {
        Self::Degraded { value, reason }
    }

    pub fn value(&self) -> &T {
        match self {
            AiOutcome::Generated(value) | AiOutcome::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            AiOutcome::Generated(value) | AiOutcome::Degraded { value, .. } => value,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, AiOutcome::Generated(_))
    }

    pub fn reason(&self) -> Option<&DegradeReason> {
        match self {
            AiOutcome::Generated(_) => None,
            AiOutcome::Degraded { reason, .. } => Some(reason),
        }
    }

    /// Label for metrics: "generated" or the degrade reason.
    pub fn label(&self) -> &'static str {
        self.reason().map(DegradeReason::as_str).unwrap_or("generated")
    }
}
