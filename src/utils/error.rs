use thiserror::Error;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Resource request failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("Template error: {message}")]
    TemplateError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Template,
    Config,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl SiteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SiteError::FetchError(_) => ErrorCategory::Network,
            SiteError::JsonError(_) => ErrorCategory::Data,
            SiteError::TemplateError { .. } => ErrorCategory::Template,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorCategory::Config,
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            // 網路錯誤通常可以重試
            SiteError::FetchError(_) => ErrorSeverity::Medium,
            SiteError::JsonError(_) | SiteError::TemplateError { .. } => ErrorSeverity::High,
            SiteError::ConfigValidationError { .. }
            | SiteError::InvalidConfigValueError { .. }
            | SiteError::MissingConfigError { .. } => ErrorSeverity::High,
            SiteError::IoError(_) | SiteError::ZipError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            SiteError::FetchError(_) => {
                "Check the data source URL and network connectivity, then run again".to_string()
            }
            SiteError::IoError(_) => {
                "Check that the template and output paths exist and are writable".to_string()
            }
            SiteError::JsonError(_) => {
                "Validate the JSON data files against the expected resource shapes".to_string()
            }
            SiteError::ZipError(_) => {
                "Re-run without --archive, or free disk space and retry".to_string()
            }
            SiteError::TemplateError { .. } => {
                "Point --template at a page template containing the insertion-point ids"
                    .to_string()
            }
            SiteError::ConfigValidationError { field, .. }
            | SiteError::InvalidConfigValueError { field, .. }
            | SiteError::MissingConfigError { field } => {
                format!("Fix the '{}' setting in the configuration", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not reach the data source: {}", self),
            ErrorCategory::Data => format!("A data file could not be understood: {}", self),
            ErrorCategory::Template => format!("The page template is unusable: {}", self),
            ErrorCategory::Config => format!("The configuration is invalid: {}", self),
            ErrorCategory::System => format!("A file operation failed: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, SiteError>;
