use sideband_msg::{decode_header, HeaderResult, MessageHeader};

/// Source of message headers for mailbox traffic.
pub trait HeaderDecoder {
    /// Decodes the header at the front of `bytes`.
    fn decode(&self, bytes: &[u8]) -> HeaderResult<MessageHeader>;
}

/// Decodes standard sideband message headers.
#[derive(Clone, Copy, Debug, Default)]
pub struct SidebandDecoder;

impl HeaderDecoder for SidebandDecoder {
    fn decode(&self, bytes: &[u8]) -> HeaderResult<MessageHeader> {
        decode_header(bytes, 0)
    }
}

impl<D: HeaderDecoder + ?Sized> HeaderDecoder for &D {
    fn decode(&self, bytes: &[u8]) -> HeaderResult<MessageHeader> {
        (**self).decode(bytes)
    }
}
