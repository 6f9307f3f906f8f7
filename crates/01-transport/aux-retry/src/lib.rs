//! Bounded-retry, chunked transactions over an [`AuxBus`](aux_bus::AuxBus).
//!
//! [`classify`] turns one raw transport reply into an [`Outcome`] and spends
//! the caller's retry budget on transient failures. [`AuxRetry`] drives the
//! classifier in a loop per transaction and splits arbitrary spans into
//! bus-sized chunks.

mod classify;
mod error;
mod retry;

pub use classify::{classify, Outcome};
pub use error::{AuxError, AuxResult};
pub use retry::{AuxRetry, DEFAULT_RETRIES};
