use aux_bus::{Action, AddressType, AuxBus, AUX_MAX_BURST};
use log::{debug, trace};
use smallvec::SmallVec;

use crate::classify::{classify, Outcome};
use crate::error::{AuxError, AuxResult};

/// Retry budget used by callers that have no stronger opinion.
pub const DEFAULT_RETRIES: u32 = 3;

/// Chunking, retrying front end over a borrowed [`AuxBus`].
///
/// Every transaction issued here uses native addressing. Retries are granted
/// per chunk: each chunk of a multi-chunk span starts with the full budget.
pub struct AuxRetry<'a, B: AuxBus + ?Sized> {
    bus: &'a mut B,
}

impl<'a, B: AuxBus + ?Sized> AuxRetry<'a, B> {
    pub fn new(bus: &'a mut B) -> Self {
        Self { bus }
    }

    pub fn bus(&self) -> &B {
        &*self.bus
    }

    pub fn bus_mut(&mut self) -> &mut B {
        &mut *self.bus
    }

    /// Reads `buffer.len()` bytes starting at `address` in one transaction.
    ///
    /// `buffer` must fit within [`AuxBus::transaction_size`].
    pub fn read_transaction(
        &mut self,
        address: u32,
        buffer: &mut [u8],
        retries: u32,
    ) -> AuxResult<Outcome> {
        self.check_fits(buffer.len())?;
        Ok(self.transact(Action::Read, address, buffer, retries))
    }

    /// Writes `data` starting at `address` in one transaction.
    ///
    /// `data` must fit within [`AuxBus::transaction_size`].
    pub fn write_transaction(
        &mut self,
        address: u32,
        data: &[u8],
        retries: u32,
    ) -> AuxResult<Outcome> {
        self.check_fits(data.len())?;
        let mut scratch: SmallVec<[u8; AUX_MAX_BURST]> = SmallVec::from_slice(data);
        Ok(self.transact(Action::Write, address, &mut scratch, retries))
    }

    /// Reads an arbitrary span, splitting it into bus-sized chunks.
    ///
    /// Returns the outcome of the first chunk that did not ack; chunks after
    /// it are not attempted and their part of `buffer` is left untouched.
    pub fn read(&mut self, address: u32, buffer: &mut [u8], retries: u32) -> AuxResult<Outcome> {
        let limit = self.chunk_limit(address, buffer.len())?;
        for (index, chunk) in buffer.chunks_mut(limit).enumerate() {
            let chunk_address = chunk_address(address, index, limit);
            let outcome = self.transact(Action::Read, chunk_address, chunk, retries);
            if !outcome.is_ack() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::Ack)
    }

    /// Writes an arbitrary span, splitting it into bus-sized chunks.
    ///
    /// Same early-exit behaviour as [`AuxRetry::read`].
    pub fn write(&mut self, address: u32, data: &[u8], retries: u32) -> AuxResult<Outcome> {
        let limit = self.chunk_limit(address, data.len())?;
        for (index, chunk) in data.chunks(limit).enumerate() {
            let chunk_address = chunk_address(address, index, limit);
            let mut scratch: SmallVec<[u8; AUX_MAX_BURST]> = SmallVec::from_slice(chunk);
            let outcome = self.transact(Action::Write, chunk_address, &mut scratch, retries);
            if !outcome.is_ack() {
                return Ok(outcome);
            }
        }
        Ok(Outcome::Ack)
    }

    /// Reads a single register.
    pub fn read_byte(&mut self, address: u32, retries: u32) -> AuxResult<(Outcome, u8)> {
        let mut value = [0u8; 1];
        let outcome = self.read_transaction(address, &mut value, retries)?;
        Ok((outcome, value[0]))
    }

    /// Writes a single register.
    pub fn write_byte(&mut self, address: u32, value: u8, retries: u32) -> AuxResult<Outcome> {
        self.write_transaction(address, &[value], retries)
    }

    fn check_fits(&self, requested: usize) -> AuxResult<()> {
        let limit = self.bus.transaction_size();
        if requested > limit {
            return Err(AuxError::OversizedTransaction { requested, limit });
        }
        Ok(())
    }

    fn chunk_limit(&self, address: u32, len: usize) -> AuxResult<usize> {
        let limit = self.bus.transaction_size();
        if limit == 0 {
            return Err(AuxError::ZeroTransactionSize);
        }
        if len > 0 {
            let last = u32::try_from(len - 1)
                .ok()
                .and_then(|offset| address.checked_add(offset));
            if last.is_none() {
                return Err(AuxError::AddressOverflow { address, len });
            }
        }
        Ok(limit)
    }

    /// Issues one transaction until it resolves or the budget runs out.
    fn transact(
        &mut self,
        action: Action,
        address: u32,
        buffer: &mut [u8],
        retries: u32,
    ) -> Outcome {
        let requested = buffer.len();
        let mut remaining = retries;
        let mut attempt = 1u32;
        loop {
            let reply = self.bus.transaction(action, AddressType::Native, address, buffer);
            let before = remaining;
            let outcome = classify(reply.status, reply.completed, requested, &mut remaining);
            match outcome {
                Outcome::Ack => return outcome,
                Outcome::Defer if remaining < before => {
                    trace!(
                        "aux {action} {address:#06x}+{requested}: attempt {attempt} deferred ({} after {}/{requested} bytes), {remaining} retries left",
                        reply.status,
                        reply.completed,
                    );
                    attempt += 1;
                }
                _ => {
                    debug!(
                        "aux {action} {address:#06x}+{requested}: {outcome} after {attempt} attempt(s)"
                    );
                    return outcome;
                }
            }
        }
    }
}

/// Address of chunk `index`. `chunk_limit` has already proven the
/// whole span fits in `u32`, so the offset cannot overflow.
#[inline]
fn chunk_address(address: u32, index: usize, limit: usize) -> u32 {
    address.wrapping_add((index * limit) as u32)
}
