//! Sideband message header decoding.
//!
//! Sideband messages travel through the DPCD mailboxes with a short
//! bit-packed header in front of the body:
//! * [`decode_header`] – parses a header out of a byte buffer via [`BitReader`].
//! * [`MessageHeader`] – routing, sequencing and length fields of one header.
//! * [`header_crc4`] – the 4-bit header checksum.
//! * [`request_name`] – names of the request identifiers carried in the body.

mod bits;
mod crc;
mod error;
mod header;
mod request;

pub use bits::BitReader;
pub use crc::header_crc4;
pub use error::{HeaderError, HeaderResult};
pub use header::{
    decode_header, MessageHeader, RelativeAddress, MAX_HEADER_BYTES, MIN_HEADER_BYTES,
};
pub use request::{request_name, RequestId};
