use crate::error::{HeaderError, HeaderResult};

/// MSB-first bit cursor over a byte slice.
#[derive(Clone, Debug)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> BitReader<'a> {
    /// Starts reading at bit `start_bit`, counted from the MSB of `bytes[0]`.
    pub fn new(bytes: &'a [u8], start_bit: usize) -> Self {
        Self {
            bytes,
            position: start_bit,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn remaining(&self) -> usize {
        (self.bytes.len() * 8).saturating_sub(self.position)
    }

    /// Reads `count` bits (at most 32) as a big-endian integer.
    pub fn read(&mut self, count: usize) -> HeaderResult<u32> {
        debug_assert!(count <= 32);
        if count > self.remaining() {
            return Err(HeaderError::Truncated {
                needed_bits: count,
                available_bits: self.remaining(),
            });
        }
        let mut value = 0u32;
        for _ in 0..count {
            value = (value << 1) | u32::from(self.next_bit());
        }
        Ok(value)
    }

    pub fn read_bool(&mut self) -> HeaderResult<bool> {
        Ok(self.read(1)? != 0)
    }

    pub fn skip(&mut self, count: usize) -> HeaderResult<()> {
        if count > self.remaining() {
            return Err(HeaderError::Truncated {
                needed_bits: count,
                available_bits: self.remaining(),
            });
        }
        self.position += count;
        Ok(())
    }

    fn next_bit(&mut self) -> u8 {
        let byte = self.bytes[self.position / 8];
        let bit = (byte >> (7 - self.position % 8)) & 1;
        self.position += 1;
        bit
    }
}
