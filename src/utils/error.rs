use thiserror::Error;

#[derive(Error, Debug)]
pub enum EtlError {
    #[error("{message}")]
    UsageError { message: String },

    #[error("The following required columns are missing from the input file: {}", missing.join(", "))]
    SchemaError { missing: Vec<String> },

    #[error("Row {row} is missing required field '{field}'")]
    MissingFieldError { field: String, row: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Input,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl EtlError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            EtlError::UsageError { .. } => ErrorCategory::Usage,
            EtlError::SchemaError { .. } | EtlError::CsvError(_) => ErrorCategory::Input,
            EtlError::MissingFieldError { .. } | EtlError::ProcessingError { .. } => {
                ErrorCategory::Data
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
            EtlError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EtlError::MissingFieldError { .. }
            | EtlError::CsvError(_)
            | EtlError::ProcessingError { .. } => ErrorSeverity::Medium,
            EtlError::UsageError { .. }
            | EtlError::SchemaError { .. }
            | EtlError::ConfigValidationError { .. }
            | EtlError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            EtlError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            EtlError::UsageError { .. } => {
                "Pass the path of the exported CSV file as the first argument".to_string()
            }
            EtlError::SchemaError { missing } => format!(
                "Re-export the test cases including the {} column(s)",
                missing.join(", ")
            ),
            EtlError::MissingFieldError { field, row } => format!(
                "Fill in the '{}' column for row {} or remove the row",
                field, row
            ),
            EtlError::IoError(_) => {
                "Check that the input file exists and the output directory is writable".to_string()
            }
            EtlError::CsvError(_) => {
                "Make sure the input is valid CSV text with a header row".to_string()
            }
            EtlError::ConfigValidationError { .. } | EtlError::InvalidConfigValueError { .. } => {
                "Review the settings file and command-line flags".to_string()
            }
            EtlError::ProcessingError { .. } => {
                "Re-run with --verbose to see which row failed".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            EtlError::UsageError { message } => message.clone(),
            EtlError::IoError(e) => format!("Could not read or write a file: {}", e),
            EtlError::CsvError(e) => format!("The input file could not be parsed: {}", e),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EtlError>;
