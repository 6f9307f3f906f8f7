use aux_bus::MAILBOX_ADDRESSES;
use serde::{Deserialize, Serialize};

use crate::error::{LoggerError, LoggerResult};

/// Knobs for [`AuxLogger`](crate::AuxLogger).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Name the request carried by a mailbox write that starts a message.
    /// Defaults to on in debug builds only.
    pub verbose_hint: bool,
    /// Native addresses whose traffic is decoded as sideband messages.
    pub mailbox_addresses: [u32; 4],
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            verbose_hint: cfg!(debug_assertions),
            mailbox_addresses: MAILBOX_ADDRESSES,
        }
    }
}

impl LoggerConfig {
    pub fn with_verbose_hint(mut self, verbose_hint: bool) -> Self {
        self.verbose_hint = verbose_hint;
        self
    }

    pub fn validate(&self) -> LoggerResult<()> {
        let addrs = &self.mailbox_addresses;
        for (i, addr) in addrs.iter().enumerate() {
            if addrs[i + 1..].contains(addr) {
                return Err(LoggerError::InvalidConfig("mailbox addresses must be distinct"));
            }
        }
        Ok(())
    }

    #[inline]
    pub fn is_mailbox(&self, address: u32) -> bool {
        self.mailbox_addresses.contains(&address)
    }
}
