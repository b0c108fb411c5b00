//! Error type shared by the smgroup crates.
//!
//! Every failure here is a caller input error: nothing is transient, so
//! nothing is retried.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Machine readable description of a rejected input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable kebab-case code such as `unknown-su3-dimension`.
    pub code: String,
    /// Diagnostic message.
    pub message: String,
    /// Offending values keyed by parameter name.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub context: BTreeMap<String, String>,
    /// Suggested remedy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records the rendered `value` of the parameter `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.context.insert(key.into(), value.to_string());
        self
    }

    /// Attaches a remedy.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

impl fmt::Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut entries = self.context.iter();
        if let Some((key, value)) = entries.next() {
            write!(f, " {{{key}={value}")?;
            for (key, value) in entries {
                write!(f, ", {key}={value}")?;
            }
            f.write_str("}")?;
        }
        match &self.hint {
            Some(hint) => write!(f, " (hint: {hint})"),
            None => Ok(()),
        }
    }
}

/// Failure raised by a group theory computation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SmgError {
    /// Descriptor that does not map onto a supported irrep, or whose
    /// invariants leave the 64-bit rational range.
    #[error("invalid representation {0}")]
    Representation(ErrorInfo),
    /// Gauge group index outside the supported range.
    #[error("invalid group index {0}")]
    Group(ErrorInfo),
    /// JSON encode or decode failure.
    #[error("serialization failed {0}")]
    Serde(ErrorInfo),
}

impl SmgError {
    /// Payload carried by every variant.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SmgError::Representation(info) | SmgError::Group(info) | SmgError::Serde(info) => info,
        }
    }

    /// Shorthand for `self.info().code`.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
