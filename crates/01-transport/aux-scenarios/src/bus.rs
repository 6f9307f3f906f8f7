use std::collections::{BTreeMap, VecDeque};

use aux_bus::{Action, AddressType, AuxBus, BusStatus, TransactionReply, AUX_MAX_BURST};
use smallvec::SmallVec;

use crate::script::Response;

/// One transaction observed by the scripted bus.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallRecord {
    pub action: Action,
    pub address_type: AddressType,
    pub address: u32,
    pub requested: usize,
    /// Bytes carried by a write request; empty for reads.
    pub written: SmallVec<[u8; AUX_MAX_BURST]>,
    pub reply: TransactionReply,
}

/// Register-file backed [`AuxBus`] whose replies can be scripted per call.
///
/// Queued responses are consumed one per transaction; once the queue drains,
/// the fallback response answers every call. Completed bytes move between the
/// caller's buffer and the register file; unmapped registers read as zero.
pub struct ScriptedBus {
    transaction_size: usize,
    registers: BTreeMap<u32, u8>,
    script: VecDeque<Response>,
    fallback: Response,
    journal: Vec<CallRecord>,
}

impl ScriptedBus {
    pub fn new(transaction_size: usize) -> Self {
        Self {
            transaction_size,
            registers: BTreeMap::new(),
            script: VecDeque::new(),
            fallback: Response::Complete,
            journal: Vec::new(),
        }
    }

    /// Seeds the register file starting at `address`.
    pub fn load(&mut self, address: u32, bytes: &[u8]) -> &mut Self {
        for (offset, byte) in bytes.iter().enumerate() {
            self.registers.insert(address.wrapping_add(offset as u32), *byte);
        }
        self
    }

    /// Copies `len` registers starting at `address`.
    pub fn peek(&self, address: u32, len: usize) -> Vec<u8> {
        (0..len)
            .map(|offset| self.register(address.wrapping_add(offset as u32)))
            .collect()
    }

    pub fn push(&mut self, response: Response) -> &mut Self {
        self.script.push_back(response);
        self
    }

    pub fn push_n(&mut self, response: Response, count: usize) -> &mut Self {
        self.script.extend(std::iter::repeat(response).take(count));
        self
    }

    /// Response used once the scripted queue is empty.
    pub fn always(&mut self, response: Response) -> &mut Self {
        self.fallback = response;
        self
    }

    pub fn calls(&self) -> &[CallRecord] {
        &self.journal
    }

    pub fn call_count(&self) -> usize {
        self.journal.len()
    }

    pub fn clear_calls(&mut self) {
        self.journal.clear();
    }

    fn register(&self, address: u32) -> u8 {
        self.registers.get(&address).copied().unwrap_or(0)
    }
}

impl AuxBus for ScriptedBus {
    fn transaction(
        &mut self,
        action: Action,
        address_type: AddressType,
        address: u32,
        buffer: &mut [u8],
    ) -> TransactionReply {
        let requested = buffer.len();
        let response = self.script.pop_front().unwrap_or(self.fallback);
        let (status, completed) = response.resolve(requested);

        let written = match action {
            Action::Write => SmallVec::from_slice(buffer),
            Action::Read => SmallVec::new(),
        };

        if matches!(status, BusStatus::Success | BusStatus::Unsupported) {
            for (offset, byte) in buffer[..completed].iter_mut().enumerate() {
                let reg = address.wrapping_add(offset as u32);
                match action {
                    Action::Read => *byte = self.register(reg),
                    Action::Write => {
                        self.registers.insert(reg, *byte);
                    }
                }
            }
        }

        let reply = TransactionReply::new(status, completed);
        log::trace!(
            "scripted aux {action} {address:#06x}+{requested} -> {status} ({completed} bytes)"
        );
        self.journal.push(CallRecord {
            action,
            address_type,
            address,
            requested,
            written,
            reply,
        });
        reply
    }

    fn transaction_size(&self) -> usize {
        self.transaction_size
    }
}
