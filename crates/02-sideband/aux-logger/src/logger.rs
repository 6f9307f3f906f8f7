use aux_bus::{Action, AddressType, AuxBus, TransactionReply};
use sideband_msg::{request_name, MIN_HEADER_BYTES};

use crate::config::LoggerConfig;
use crate::decoder::{HeaderDecoder, SidebandDecoder};
use crate::error::LoggerResult;
use crate::format::{hex_dump, line_prefix};
use crate::sink::{LogSink, TraceSink};

/// Pass-through [`AuxBus`] that traces every transaction.
///
/// The wrapped bus is borrowed, not owned. Replies are returned exactly as the
/// wrapped bus produced them.
pub struct AuxLogger<'a, B, S = LogSink, D = SidebandDecoder>
where
    B: AuxBus + ?Sized,
{
    bus: &'a mut B,
    sink: S,
    decoder: D,
    config: LoggerConfig,
}

impl<'a, B: AuxBus + ?Sized> AuxLogger<'a, B> {
    /// Logs through the `log` facade with the default configuration.
    pub fn new(bus: &'a mut B) -> Self {
        Self {
            bus,
            sink: LogSink,
            decoder: SidebandDecoder,
            config: LoggerConfig::default(),
        }
    }
}

impl<'a, B, S, D> AuxLogger<'a, B, S, D>
where
    B: AuxBus + ?Sized,
    S: TraceSink,
    D: HeaderDecoder,
{
    pub fn with_sink<S2: TraceSink>(self, sink: S2) -> AuxLogger<'a, B, S2, D> {
        AuxLogger {
            bus: self.bus,
            sink,
            decoder: self.decoder,
            config: self.config,
        }
    }

    pub fn with_decoder<D2: HeaderDecoder>(self, decoder: D2) -> AuxLogger<'a, B, S, D2> {
        AuxLogger {
            bus: self.bus,
            sink: self.sink,
            decoder,
            config: self.config,
        }
    }

    pub fn with_config(mut self, config: LoggerConfig) -> LoggerResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.config
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn inner(&self) -> &B {
        &*self.bus
    }

    /// Line for a successful native mailbox transfer, or `None` when the
    /// transfer is not one or its header cannot be decoded.
    fn mailbox_line(
        &self,
        action: Action,
        address_type: AddressType,
        address: u32,
        incomplete: bool,
        reply: TransactionReply,
        completed: &[u8],
    ) -> Option<String> {
        if !reply.status.is_success()
            || address_type != AddressType::Native
            || !self.config.is_mailbox(address)
            || completed.len() < MIN_HEADER_BYTES
        {
            return None;
        }

        let header = match self.decoder.decode(completed) {
            Ok(header) => header,
            Err(err) => {
                log::debug!("mailbox {address:#06x}: undecodable sideband header: {err}");
                return None;
            }
        };

        let (head, body) = completed.split_at(header.header_len().min(completed.len()));
        let name = match body.first() {
            Some(&request)
                if self.config.verbose_hint
                    && header.is_transaction_start
                    && action == Action::Write =>
            {
                request_name(request)
            }
            _ => "",
        };

        Some(format!(
            "{} hint(to:{} {}{} {} #{}) {{ {}| {}}}",
            line_prefix(incomplete, reply.status, action, address_type, address),
            header.address,
            if header.is_transaction_start { "S" } else { "" },
            if header.is_transaction_end { "E" } else { "" },
            name,
            header.message_number,
            hex_dump(head),
            hex_dump(body),
        ))
    }
}

impl<'a, B, S, D> AuxBus for AuxLogger<'a, B, S, D>
where
    B: AuxBus + ?Sized,
    S: TraceSink,
    D: HeaderDecoder,
{
    fn transaction(
        &mut self,
        action: Action,
        address_type: AddressType,
        address: u32,
        buffer: &mut [u8],
    ) -> TransactionReply {
        let requested = buffer.len();
        let reply = self.bus.transaction(action, address_type, address, buffer);

        let completed = &buffer[..reply.completed.min(requested)];
        let incomplete = reply.completed != requested;
        let line = self
            .mailbox_line(action, address_type, address, incomplete, reply, completed)
            .unwrap_or_else(|| {
                format!(
                    "{} {{ {} }}",
                    line_prefix(incomplete, reply.status, action, address_type, address),
                    hex_dump(completed),
                )
            });
        self.sink.emit(&line);

        reply
    }

    fn transaction_size(&self) -> usize {
        self.bus.transaction_size()
    }
}
