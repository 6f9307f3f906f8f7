//! Tracing decorator for an [`AuxBus`](aux_bus::AuxBus).
//!
//! [`AuxLogger`] forwards every transaction to the wrapped bus untouched and
//! emits one hex-dump line per call to a [`TraceSink`]. Transactions on the
//! sideband mailboxes additionally get their message header decoded so the
//! line carries the route, start/end flags and sequence number.

mod config;
mod decoder;
mod error;
mod format;
mod logger;
mod sink;

pub use config::LoggerConfig;
pub use decoder::{HeaderDecoder, SidebandDecoder};
pub use error::{LoggerError, LoggerResult};
pub use format::{action_tag, hex_dump, status_tag, type_tag};
pub use logger::AuxLogger;
pub use sink::{LogSink, MemorySink, TraceSink, TRACE_TARGET};
