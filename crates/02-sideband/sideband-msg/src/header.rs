use core::fmt;

use smallvec::SmallVec;

use crate::bits::BitReader;
use crate::crc::{crc4_bits, header_crc4};
use crate::error::{HeaderError, HeaderResult};

/// Smallest possible header: a single-link route with no relative address.
pub const MIN_HEADER_BYTES: usize = 3;
/// Largest possible header: fifteen links, seven relative-address bytes.
pub const MAX_HEADER_BYTES: usize = 10;

/// Port path from the source to the addressed branch device.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct RelativeAddress {
    ports: SmallVec<[u8; 14]>,
}

impl RelativeAddress {
    /// The directly attached device.
    pub fn root() -> Self {
        Self::default()
    }

    /// Route through `ports`, each a 4-bit port number. A header can carry
    /// at most fourteen hops; extra ports are dropped.
    pub fn from_ports(ports: &[u8]) -> Self {
        Self {
            ports: ports.iter().take(14).map(|port| port & 0x0F).collect(),
        }
    }

    pub fn ports(&self) -> &[u8] {
        &self.ports
    }

    /// Number of links the route crosses, counting the first hop.
    pub fn link_count(&self) -> u8 {
        self.ports.len() as u8 + 1
    }
}

impl fmt::Display for RelativeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("0")?;
        for port in &self.ports {
            write!(f, ".{port}")?;
        }
        Ok(())
    }
}

/// Fields of one sideband message header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageHeader {
    pub link_count_total: u8,
    pub link_count_remaining: u8,
    pub address: RelativeAddress,
    pub is_broadcast: bool,
    pub is_path_message: bool,
    /// Body length in bytes, including the body CRC.
    pub payload_bytes: u8,
    pub is_transaction_start: bool,
    pub is_transaction_end: bool,
    /// One-bit message sequence number.
    pub message_number: u8,
    pub header_size_bits: usize,
    /// Whether the header CRC nibble matched. Decoding does not fail on a mismatch.
    pub crc_valid: bool,
}

impl MessageHeader {
    /// Single-part, non-broadcast header routed along `address`.
    pub fn for_route(address: RelativeAddress) -> Self {
        let link_count = address.link_count();
        Self {
            link_count_total: link_count,
            link_count_remaining: link_count - 1,
            header_size_bits: header_bytes(link_count) * 8,
            address,
            is_broadcast: false,
            is_path_message: false,
            payload_bytes: 0,
            is_transaction_start: true,
            is_transaction_end: true,
            message_number: 0,
            crc_valid: true,
        }
    }

    /// Header length in whole bytes.
    pub fn header_len(&self) -> usize {
        self.header_size_bits / 8
    }

    /// Serialises the header with a freshly computed CRC.
    pub fn encode(&self) -> SmallVec<[u8; MAX_HEADER_BYTES]> {
        let lct = self.address.link_count();
        let len = header_bytes(lct);
        let mut nibbles: SmallVec<[u8; MAX_HEADER_BYTES * 2]> = SmallVec::new();
        nibbles.push(lct);
        nibbles.push(self.link_count_remaining & 0x0F);
        nibbles.extend_from_slice(self.address.ports());
        nibbles.resize((len - 2) * 2, 0);

        let mut out: SmallVec<[u8; MAX_HEADER_BYTES]> =
            nibbles.chunks(2).map(|pair| (pair[0] << 4) | pair[1]).collect();
        out.push(
            (u8::from(self.is_broadcast) << 7)
                | (u8::from(self.is_path_message) << 6)
                | (self.payload_bytes & 0x3F),
        );
        out.push(
            (u8::from(self.is_transaction_start) << 7)
                | (u8::from(self.is_transaction_end) << 6)
                | ((self.message_number & 1) << 4),
        );
        let crc = header_crc4(&out, len * 2 - 1);
        out[len - 1] |= crc;
        out
    }
}

#[inline]
fn header_bytes(link_count: u8) -> usize {
    3 + usize::from(link_count) / 2
}

/// Decodes a header starting at bit `start_bit` of `bytes`.
///
/// Fails when the buffer holds fewer bits than the header announces or when
/// the link count is zero.
pub fn decode_header(bytes: &[u8], start_bit: usize) -> HeaderResult<MessageHeader> {
    let mut reader = BitReader::new(bytes, start_bit);
    let available_bits = reader.remaining();

    let link_count_total = reader.read(4)? as u8;
    let link_count_remaining = reader.read(4)? as u8;
    if link_count_total == 0 {
        return Err(HeaderError::InvalidLinkCount);
    }

    let header_size_bits = header_bytes(link_count_total) * 8;
    if available_bits < header_size_bits {
        return Err(HeaderError::Truncated {
            needed_bits: header_size_bits,
            available_bits,
        });
    }

    let hops = usize::from(link_count_total - 1);
    let mut ports: SmallVec<[u8; 14]> = SmallVec::with_capacity(hops);
    for _ in 0..hops {
        ports.push(reader.read(4)? as u8);
    }
    if hops % 2 == 1 {
        reader.skip(4)?;
    }

    let is_broadcast = reader.read_bool()?;
    let is_path_message = reader.read_bool()?;
    let payload_bytes = reader.read(6)? as u8;
    let is_transaction_start = reader.read_bool()?;
    let is_transaction_end = reader.read_bool()?;
    reader.skip(1)?;
    let message_number = reader.read(1)? as u8;
    let crc = reader.read(4)? as u8;

    let mut crc_reader = BitReader::new(bytes, start_bit);
    let crc_valid = crc4_bits(&mut crc_reader, header_size_bits - 4) == Some(crc);

    Ok(MessageHeader {
        link_count_total,
        link_count_remaining,
        address: RelativeAddress { ports },
        is_broadcast,
        is_path_message,
        payload_bytes,
        is_transaction_start,
        is_transaction_end,
        message_number,
        header_size_bits,
        crc_valid,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn decodes_root_header() {
        let header = decode_header(&[0x10, 0x05, 0xC3, 0x01, 0xAA], 0).unwrap();
        assert_eq!(header.link_count_total, 1);
        assert_eq!(header.address, RelativeAddress::root());
        assert_eq!(header.payload_bytes, 5);
        assert!(header.is_transaction_start);
        assert!(header.is_transaction_end);
        assert_eq!(header.message_number, 0);
        assert_eq!(header.header_len(), 3);
        assert!(header.crc_valid);
    }

    #[test]
    fn decodes_routed_header() {
        let header = decode_header(&[0x32, 0x18, 0x0A, 0xD6], 0).unwrap();
        assert_eq!(header.link_count_total, 3);
        assert_eq!(header.link_count_remaining, 2);
        assert_eq!(header.address.to_string(), "0.1.8");
        assert_eq!(header.payload_bytes, 10);
        assert_eq!(header.message_number, 1);
        assert_eq!(header.header_size_bits, 32);
        assert!(header.crc_valid);
    }

    #[test]
    fn odd_hop_count_skips_padding() {
        let header = decode_header(&[0x21, 0x30, 0xC2, 0x47], 0).unwrap();
        assert_eq!(header.address.ports(), &[3]);
        assert!(header.is_broadcast);
        assert!(header.is_path_message);
        assert_eq!(header.payload_bytes, 2);
        assert!(!header.is_transaction_start);
        assert!(header.is_transaction_end);
        assert!(header.crc_valid);
    }

    #[test]
    fn crc_mismatch_is_reported_not_fatal() {
        let header = decode_header(&[0x10, 0x05, 0xC4], 0).unwrap();
        assert!(!header.crc_valid);
    }

    #[test]
    fn truncated_header_fails() {
        assert_eq!(
            decode_header(&[0x32, 0x18, 0x0A], 0),
            Err(HeaderError::Truncated {
                needed_bits: 32,
                available_bits: 24
            })
        );
        assert!(matches!(
            decode_header(&[], 0),
            Err(HeaderError::Truncated { .. })
        ));
    }

    #[test]
    fn zero_link_count_is_rejected() {
        assert_eq!(
            decode_header(&[0x00, 0x00, 0x00], 0),
            Err(HeaderError::InvalidLinkCount)
        );
    }

    #[test]
    fn decodes_from_bit_offset() {
        let mut shifted = vec![0xFFu8];
        shifted.extend_from_slice(&[0x10, 0x03, 0x91]);
        let header = decode_header(&shifted, 8).unwrap();
        assert_eq!(header.payload_bytes, 3);
        assert!(!header.is_transaction_end);
        assert_eq!(header.message_number, 1);
        assert!(header.crc_valid);
    }

    #[test]
    fn encode_matches_reference_bytes() {
        let mut header = MessageHeader::for_route(RelativeAddress::from_ports(&[1, 8]));
        header.payload_bytes = 10;
        header.message_number = 1;
        assert_eq!(header.encode().as_slice(), &[0x32, 0x18, 0x0A, 0xD6]);
    }

    proptest! {
        #[test]
        fn encoded_headers_decode_back(
            ports in proptest::collection::vec(0u8..16, 0..14),
            payload in 0u8..64,
            start in any::<bool>(),
            end in any::<bool>(),
            seq in 0u8..2,
        ) {
            let mut header = MessageHeader::for_route(RelativeAddress::from_ports(&ports));
            header.payload_bytes = payload;
            header.is_transaction_start = start;
            header.is_transaction_end = end;
            header.message_number = seq;

            let bytes = header.encode();
            prop_assert_eq!(bytes.len(), header.header_len());
            prop_assert_eq!(decode_header(&bytes, 0).unwrap(), header);
        }
    }
}
