use crate::types::{Action, AddressType, TransactionReply};

/// A channel able to execute one bounded AUX transaction at a time.
///
/// The requested size of a transaction is the length of `buffer`. Reads fill
/// the front of `buffer`; writes send it. Implementations must never report
/// more completed bytes than were requested, and callers must never request
/// more than [`AuxBus::transaction_size`] bytes in one call.
///
/// Serialisation between threads, timing and native vs. I2C addressing are
/// the implementation's concern.
pub trait AuxBus {
    /// Executes exactly one transaction against the sink.
    fn transaction(
        &mut self,
        action: Action,
        address_type: AddressType,
        address: u32,
        buffer: &mut [u8],
    ) -> TransactionReply;

    /// Maximum number of bytes a single transaction may carry.
    fn transaction_size(&self) -> usize;
}

impl<B: AuxBus + ?Sized> AuxBus for &mut B {
    #[inline]
    fn transaction(
        &mut self,
        action: Action,
        address_type: AddressType,
        address: u32,
        buffer: &mut [u8],
    ) -> TransactionReply {
        (**self).transaction(action, address_type, address, buffer)
    }

    #[inline]
    fn transaction_size(&self) -> usize {
        (**self).transaction_size()
    }
}

impl<B: AuxBus + ?Sized> AuxBus for Box<B> {
    #[inline]
    fn transaction(
        &mut self,
        action: Action,
        address_type: AddressType,
        address: u32,
        buffer: &mut [u8],
    ) -> TransactionReply {
        (**self).transaction(action, address_type, address, buffer)
    }

    #[inline]
    fn transaction_size(&self) -> usize {
        (**self).transaction_size()
    }
}
