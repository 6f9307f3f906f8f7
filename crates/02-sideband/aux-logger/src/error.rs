use thiserror::Error;

pub type LoggerResult<T> = Result<T, LoggerError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoggerError {
    #[error("invalid logger configuration: {0}")]
    InvalidConfig(&'static str),
}
