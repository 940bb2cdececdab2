use ferrous_inet_domain::DomainError;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeError {
    pub kind: &'static str,
    pub message: String,
}

/// Result of one call: either a value or the reason there is none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub input: String,
    pub result: Option<String>,
    pub error: Option<OutcomeError>,
}

impl Outcome {
    pub fn new(input: String, result: Result<String, DomainError>) -> Self {
        match result {
            Ok(value) => Self {
                input,
                result: Some(value),
                error: None,
            },
            Err(e) => Self::failed(input, e.kind().as_str(), e.to_string()),
        }
    }

    pub fn failed(input: String, kind: &'static str, message: String) -> Self {
        Self {
            input,
            result: None,
            error: Some(OutcomeError { kind, message }),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// Writes the outcome as one line. Text mode puts the input in front only
    /// when `with_input` is set (batch mode); failures go to `err`.
    pub fn write(
        &self,
        format: OutputFormat,
        with_input: bool,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> std::io::Result<()> {
        match format {
            OutputFormat::Json => {
                let line = serde_json::to_string(self).map_err(std::io::Error::other)?;
                writeln!(out, "{}", line)
            }
            OutputFormat::Text => match (&self.result, &self.error) {
                (Some(value), _) if with_input => writeln!(out, "{}\t{}", self.input, value),
                (Some(value), _) => writeln!(out, "{}", value),
                (None, Some(e)) if with_input => {
                    writeln!(err, "{}\t{}: {}", self.input, e.kind, e.message)
                }
                (None, Some(e)) => writeln!(err, "{}: {}", e.kind, e.message),
                (None, None) => Ok(()),
            },
        }
    }
}
