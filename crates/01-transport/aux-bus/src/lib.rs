//! Single-transaction AUX channel contract.
//!
//! Everything above the physical transport talks to the AUX channel through
//! the pieces exported here:
//! * [`AuxBus`] – one bounded transaction per call plus the per-call byte limit.
//! * [`TransactionReply`] / [`BusStatus`] – the raw result reported by a transport.
//! * [`Action`] / [`AddressType`] – direction and addressing mode tags.
//! * [`mailbox`] – the reserved DPCD addresses of the sideband message boxes.

mod bus;
pub mod mailbox;
mod types;

pub use bus::AuxBus;
pub use mailbox::{
    is_mailbox_address, MAILBOX_ADDRESSES, MBOX_DOWN_REP, MBOX_DOWN_REQ, MBOX_UP_REP, MBOX_UP_REQ,
};
pub use types::{Action, AddressType, BusStatus, TransactionReply};

/// Largest payload a native AUX transaction can carry.
pub const AUX_MAX_BURST: usize = 16;
