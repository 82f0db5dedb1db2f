//! Bitstream writer for JPEG entropy coding.
//!
//! Bit-level output into an owned byte buffer with:
//! - 64-bit bit accumulation, emitted MSB-first
//! - Automatic 0xFF byte stuffing (0xFF -> 0xFF 0x00, T.81 F.1.2.3)
//! - Zero-bit padding of the final partial byte
//! - Geometric (doubling) growth through fallible reservation
//!
//! The marker writers share the same buffer through `write_bytes`, so the
//! whole JPEG stream accumulates in one place and is handed out by move.

use crate::error::Result;
use crate::types::BitCode;

/// Size of the bit accumulator in bits.
const BIT_BUF_SIZE: i32 = 64;

/// Worst-case bytes appended by one accumulator flush (8 data bytes, each
/// possibly followed by a stuffed 0x00).
const FLUSH_HEADROOM: usize = 16;

/// Bitstream writer accumulating the JPEG byte stream.
pub struct BitWriter {
    /// Output buffer; capacity is kept ahead of writes through `reserve_for`
    output: Vec<u8>,
    /// Bit accumulation buffer
    put_buffer: u64,
    /// Number of free bits remaining in the accumulator
    free_bits: i32,
}

impl BitWriter {
    /// Create a writer with an initial capacity reservation.
    ///
    /// Fails only if the reservation cannot be satisfied.
    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let mut output = Vec::new();
        output.try_reserve(capacity.max(1))?;
        Ok(Self {
            output,
            put_buffer: 0,
            free_bits: BIT_BUF_SIZE,
        })
    }

    /// Ensure at least `additional` bytes of headroom, doubling the buffer
    /// when it falls short.
    #[inline]
    fn reserve_for(&mut self, additional: usize) -> Result<()> {
        let free = self.output.capacity() - self.output.len();
        if free < additional {
            let grow = self.output.capacity().max(additional);
            self.output.try_reserve(grow)?;
        }
        Ok(())
    }

    /// Append a bit code MSB-first.
    ///
    /// Complete bytes are emitted with 0xFF stuffing as they form. A code
    /// with zero bits is a no-op.
    #[inline]
    pub fn put_bits(&mut self, code: BitCode) -> Result<()> {
        let size = i32::from(code.nbits());
        let bits = u64::from(code.value());

        self.free_bits -= size;

        if self.free_bits < 0 {
            // Accumulator full: top up with the high bits, flush, then keep
            // the overflowed low bits.
            let overflow_bits = (-self.free_bits) as u32;

            self.put_buffer =
                (self.put_buffer << (size + self.free_bits)) | (bits >> overflow_bits);
            self.flush_accumulator()?;

            self.free_bits += BIT_BUF_SIZE;
            self.put_buffer = bits & ((1u64 << overflow_bits) - 1);
        } else {
            self.put_buffer = (self.put_buffer << size) | bits;
        }

        Ok(())
    }

    /// Emit all 64 accumulated bits as 8 bytes with stuffing.
    #[inline]
    fn flush_accumulator(&mut self) -> Result<()> {
        self.reserve_for(FLUSH_HEADROOM)?;
        let buffer = self.put_buffer;

        // SWAR probe: a byte can be 0xFF only if its high bit is set and
        // adding 1 carries out of it.
        if buffer & 0x8080_8080_8080_8080 & !(buffer.wrapping_add(0x0101_0101_0101_0101)) != 0 {
            for i in (0..8).rev() {
                let byte = (buffer >> (i * 8)) as u8;
                self.output.push(byte);
                if byte == 0xFF {
                    self.output.push(0x00);
                }
            }
        } else {
            self.output.extend_from_slice(&buffer.to_be_bytes());
        }

        Ok(())
    }

    /// Flush remaining bits, padding the final partial byte with zero bits.
    ///
    /// Stuffing still applies to the emitted bytes (a final byte of all one
    /// bits becomes 0xFF 0x00). Afterwards the accumulator is empty.
    pub fn finish(&mut self) -> Result<()> {
        let bits_in_buffer = BIT_BUF_SIZE - self.free_bits;

        if bits_in_buffer > 0 {
            let padding_bits = (8 - (bits_in_buffer % 8)) % 8;
            let bytes_to_write = ((bits_in_buffer + padding_bits) / 8) as usize;

            // Left-align; the vacated low bits are the zero padding.
            let buffer = self.put_buffer << (BIT_BUF_SIZE - bits_in_buffer);

            self.reserve_for(bytes_to_write * 2)?;
            for i in 0..bytes_to_write {
                let byte = (buffer >> (56 - i * 8)) as u8;
                self.output.push(byte);
                if byte == 0xFF {
                    self.output.push(0x00);
                }
            }

            self.put_buffer = 0;
            self.free_bits = BIT_BUF_SIZE;
        }

        Ok(())
    }

    /// Append raw bytes without stuffing (marker segments).
    ///
    /// The accumulator must be empty; entropy-coded data and markers never
    /// interleave within a byte.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        debug_assert!(
            self.free_bits == BIT_BUF_SIZE,
            "accumulator must be flushed before raw bytes"
        );
        self.reserve_for(bytes.len())?;
        self.output.extend_from_slice(bytes);
        Ok(())
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    /// Whether anything has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    /// Consume the writer and return the bytes.
    #[inline]
    pub fn into_bytes(self) -> Vec<u8> {
        self.output
    }

    /// The bytes written so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.output
    }
}
