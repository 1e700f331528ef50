use thiserror::Error;

/// Non-fatal diagnostics raised while validating fields or looking up phones
/// inside a single record. Callers recover from these locally.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("Incorrect phone number {0}.")]
    InvalidPhone(String),

    #[error("Incorrect date {input}. Date in format {prompt} is required.")]
    InvalidDate { input: String, prompt: &'static str },

    #[error("Phone number {0} not found.")]
    PhoneNotFound(String),

    #[error("Phone number {0} already exists.")]
    DuplicatePhone(String),
}

#[derive(Error, Debug)]
pub enum BookError {
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BookError>;
