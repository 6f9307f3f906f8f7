use thiserror::Error;

pub type AuxResult<T> = Result<T, AuxError>;

/// Caller contract breaches. Bus-level failures are reported as
/// [`Outcome`](crate::Outcome)s, never through this type.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum AuxError {
    #[error("transaction of {requested} bytes exceeds the bus limit of {limit} bytes")]
    OversizedTransaction { requested: usize, limit: usize },

    #[error("bus reports a transaction size of zero bytes")]
    ZeroTransactionSize,

    #[error("span of {len} bytes at {address:#07x} overflows the address space")]
    AddressOverflow { address: u32, len: usize },
}
