use thiserror::Error;

#[derive(Error, Debug)]
pub enum SizerError {
    #[error("Invalid input: {0}")]
    InvalidInputError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: '{value}' - {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

pub type Result<T> = std::result::Result<T, SizerError>;
