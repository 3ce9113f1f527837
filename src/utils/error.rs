use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Usage: {program} <input_file> <output_file>")]
    UsageError { program: String },

    #[error("Cannot read {path}: {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write {path}: {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path} at line {line}: {source}")]
    ParseError {
        path: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field} ({value:?}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Configuration,
    Input,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit status for a failure of this severity.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl ConvertError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ConvertError::UsageError { .. } => ErrorCategory::Usage,
            ConvertError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            ConvertError::ReadError { .. } | ConvertError::ParseError { .. } => {
                ErrorCategory::Input
            }
            ConvertError::WriteError { .. } | ConvertError::SerializationError(_) => {
                ErrorCategory::Output
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ConvertError::UsageError { .. }
            | ConvertError::InvalidConfigValueError { .. }
            | ConvertError::ParseError { .. }
            | ConvertError::SerializationError(_) => ErrorSeverity::High,
            ConvertError::ReadError { .. } | ConvertError::WriteError { .. } => {
                ErrorSeverity::Critical
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ConvertError::UsageError { .. } => self.to_string(),
            ConvertError::ReadError { path, source } => {
                format!("Could not read input file '{}': {}", path, source)
            }
            ConvertError::WriteError { path, source } => {
                format!("Could not write output file '{}': {}", path, source)
            }
            ConvertError::ParseError { path, line, source } => {
                format!("Line {} of '{}' is not valid JSON: {}", line, path, source)
            }
            ConvertError::SerializationError(e) => format!("Could not encode JSON: {}", e),
            ConvertError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Usage => "Pass exactly two arguments: the input file and the output file",
            ErrorCategory::Configuration => "Check the command-line options and try again",
            ErrorCategory::Input => match self {
                ConvertError::ParseError { .. } => {
                    "Make sure every non-blank line holds exactly one complete JSON value"
                }
                _ => "Check that the input file exists and is readable",
            },
            ErrorCategory::Output => {
                "Check that the output directory exists and is writable"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
