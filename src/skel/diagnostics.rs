//! Line-numbered processing diagnostics
//!
//! Bad lines never abort a run; they become [`Diagnostic`] values collected
//! alongside the output, and the caller decides where to surface them. Only
//! I/O and configuration failures are signalled as hard errors.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Recoverable oddity; processing state may change but no line is lost
    Warning,
    /// The line was dropped
    Error,
}

/// One diagnostic, tied to the 1-based line it came from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub line: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Warning,
            line,
            message: message.into(),
        }
    }

    pub fn error(line: usize, message: impl Into<String>) -> Self {
        Diagnostic {
            severity: Severity::Error,
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{:2}:[{}] {}", self.line, tag, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_format() {
        let warning = Diagnostic::warning(3, "unknown stanza name: 'thing'");
        assert_eq!(warning.to_string(), " 3:[warning] unknown stanza name: 'thing'");

        let error = Diagnostic::error(12, "bracket not matched (column 1): '{.x'");
        assert_eq!(
            error.to_string(),
            "12:[error] bracket not matched (column 1): '{.x'"
        );
    }
}
