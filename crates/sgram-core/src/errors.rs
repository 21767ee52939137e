//! Structured error types shared across the sgram crates.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code, message and lookup coordinates behind an [`SgramError`].
///
/// Coordinates are the keys a caller needs to reproduce the failure:
/// `family`, `index`, `max_index`, `label`, `state`, `symbol`, or `path`
/// for config and export files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable code such as `index-out-of-range`.
    pub code: String,
    /// Message shown to users.
    pub message: String,
    /// Coordinates keyed by name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Suggested remedy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no coordinates and no hint.
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_owned(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records a coordinate; numbers and paths are rendered with `Display`.
    pub fn with_context(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.context.insert(key.to_owned(), value.to_string());
        self
    }

    /// Attaches a remedy.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Coordinate recorded under `key`.
    pub fn coordinate(&self, key: &str) -> Option<&str> {
        self.context.get(key).map(String::as_str)
    }
}

/// Renders `message (code: c) [k=v, ..] hint: h`.
impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        let mut coordinates = self.context.iter();
        if let Some((key, value)) = coordinates.next() {
            write!(f, " [{key}={value}")?;
            for (key, value) in coordinates {
                write!(f, ", {key}={value}")?;
            }
            f.write_str("]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " hint: {hint}")?;
        }
        Ok(())
    }
}

/// Every failure a catalog lookup, transformer call or CLI run can report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail")]
pub enum SgramError {
    /// Requested index lies outside the domain of a family.
    #[error("index out of range: {0}")]
    IndexOutOfRange(ErrorInfo),
    /// A transformer operation was asked about a value absent from the cycle.
    #[error("value not in cycle: {0}")]
    ValueNotInCycle(ErrorInfo),
    /// The entry has no primary cycle to fall back on.
    #[error("no patterns available: {0}")]
    NoPatternsAvailable(ErrorInfo),
    /// A caller supplied label does not exist in the pattern set.
    #[error("unknown label: {0}")]
    UnknownLabel(ErrorInfo),
    /// Literal cycle data violated a construction invariant.
    #[error("invalid cycle: {0}")]
    InvalidCycle(ErrorInfo),
    /// Configuration could not be loaded or parsed.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Filesystem or serialization failure while exporting.
    #[error("io error: {0}")]
    Io(ErrorInfo),
}

impl SgramError {
    /// Payload shared by every variant.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SgramError::IndexOutOfRange(info)
            | SgramError::ValueNotInCycle(info)
            | SgramError::NoPatternsAvailable(info)
            | SgramError::UnknownLabel(info)
            | SgramError::InvalidCycle(info)
            | SgramError::Config(info)
            | SgramError::Io(info) => info,
        }
    }

    /// Stable machine code of the error.
    pub fn code(&self) -> &str {
        &self.info().code
    }

    /// Adds a coordinate without changing the variant.
    pub fn with_context(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.info_mut().context.insert(key.to_owned(), value.to_string());
        self
    }

    fn info_mut(&mut self) -> &mut ErrorInfo {
        match self {
            SgramError::IndexOutOfRange(info)
            | SgramError::ValueNotInCycle(info)
            | SgramError::NoPatternsAvailable(info)
            | SgramError::UnknownLabel(info)
            | SgramError::InvalidCycle(info)
            | SgramError::Config(info)
            | SgramError::Io(info) => info,
        }
    }

    /// Index outside `0..=max_index` for the named family.
    pub fn index_out_of_range(family: &str, index: usize, max_index: usize) -> Self {
        SgramError::IndexOutOfRange(
            ErrorInfo::new(
                "index-out-of-range",
                format!("index {index} exceeds supported range (0-{max_index})"),
            )
            .with_context("family", family)
            .with_context("index", index)
            .with_context("max_index", max_index),
        )
    }

    /// Value absent from the cycle identified by `label`.
    pub fn value_not_in_cycle(label: &str, state: u64) -> Self {
        SgramError::ValueNotInCycle(
            ErrorInfo::new(
                "value-not-in-cycle",
                format!("state {state} not in pattern {label}"),
            )
            .with_context("label", label)
            .with_context("state", state),
        )
    }

    /// No primary cycle defined for the entry.
    pub fn no_patterns() -> Self {
        SgramError::NoPatternsAvailable(ErrorInfo::new(
            "no-patterns",
            "no primary pattern is defined",
        ))
    }

    /// Caller supplied label that does not exist.
    pub fn unknown_label(label: &str) -> Self {
        SgramError::UnknownLabel(
            ErrorInfo::new("unknown-label", format!("pattern {label} not found"))
                .with_context("label", label),
        )
    }

    /// Cycle construction invariant violation.
    pub fn invalid_cycle(label: &str, message: impl Into<String>) -> Self {
        SgramError::InvalidCycle(
            ErrorInfo::new("invalid-cycle", message).with_context("label", label),
        )
    }
}
