use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormatError {
    #[error("Not an ISO date: {0}")]
    InvalidDate(String),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),
}
