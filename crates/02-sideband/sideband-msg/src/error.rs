use thiserror::Error;

pub type HeaderResult<T> = Result<T, HeaderError>;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("header needs {needed_bits} bits but only {available_bits} are available")]
    Truncated {
        needed_bits: usize,
        available_bits: usize,
    },

    #[error("link count total of zero")]
    InvalidLinkCount,
}
