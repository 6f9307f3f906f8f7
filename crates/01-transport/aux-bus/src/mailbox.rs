//! Reserved DPCD addresses of the sideband message boxes.
//!
//! Sideband messages are exchanged by writing to or reading from these four
//! register windows. They are fixed by the message protocol, not computed.

/// Source-to-sink request box.
pub const MBOX_DOWN_REQ: u32 = 0x1000;
/// Source-to-sink reply box for sink-initiated requests.
pub const MBOX_UP_REP: u32 = 0x1200;
/// Sink-to-source reply box for source-initiated requests.
pub const MBOX_DOWN_REP: u32 = 0x1400;
/// Sink-to-source request box.
pub const MBOX_UP_REQ: u32 = 0x1600;

/// All four mailbox bases in protocol order.
pub const MAILBOX_ADDRESSES: [u32; 4] = [MBOX_DOWN_REQ, MBOX_UP_REP, MBOX_DOWN_REP, MBOX_UP_REQ];

/// Returns `true` when `address` is exactly one of the mailbox bases.
#[inline]
pub fn is_mailbox_address(address: u32) -> bool {
    MAILBOX_ADDRESSES.contains(&address)
}
