use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Could not open {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Course {course_number} not found")]
    CourseNotFound { course_number: String },
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
