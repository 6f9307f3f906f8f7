use core::fmt;

/// Direction of a single AUX transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Read,
    Write,
}

/// Addressing mode of a single AUX transaction.
///
/// Only [`AddressType::Native`] is interpreted above the transport; the I2C
/// modes are passed through untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AddressType {
    /// Direct DPCD register access.
    Native,
    /// I2C-over-AUX, stop after the transaction.
    I2c,
    /// I2C-over-AUX with the middle-of-transaction bit set.
    I2cMot,
}

/// Raw status reported by a transport for one transaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BusStatus {
    Success,
    /// Sink is busy; the same transaction may succeed if reissued.
    Defer,
    /// Sink rejected the transaction.
    Nack,
    /// Any other transport-level failure (timeout, unsupported request, ...).
    Unsupported,
}

impl BusStatus {
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, BusStatus::Success)
    }
}

/// Status plus the number of bytes the transport actually moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransactionReply {
    pub status: BusStatus,
    /// Bytes completed, expected to lie in `0..=requested`.
    pub completed: usize,
}

impl TransactionReply {
    pub const fn new(status: BusStatus, completed: usize) -> Self {
        Self { status, completed }
    }

    /// Successful reply covering `completed` bytes.
    pub const fn success(completed: usize) -> Self {
        Self::new(BusStatus::Success, completed)
    }

    pub const fn defer() -> Self {
        Self::new(BusStatus::Defer, 0)
    }

    pub const fn nack() -> Self {
        Self::new(BusStatus::Nack, 0)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Action::Read => "read",
            Action::Write => "write",
        })
    }
}

impl fmt::Display for BusStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BusStatus::Success => "success",
            BusStatus::Defer => "defer",
            BusStatus::Nack => "nack",
            BusStatus::Unsupported => "unsupported",
        })
    }
}
