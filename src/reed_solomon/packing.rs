//! Symbol packing
//!
//! Symbols are written [`BITS_PER_SYMBOL`] bits at a time, most significant
//! symbol and most significant bit first, into consecutive bytes. The final
//! byte is zero padded when the bit count is not a multiple of eight.

use super::error::{CodecError, Result};
use super::galois::{Gf8, BITS_PER_SYMBOL};

/// Bytes needed to carry `symbols` packed symbols
#[inline]
pub const fn packed_len(symbols: usize) -> usize {
    (symbols * BITS_PER_SYMBOL).div_ceil(8)
}

/// Pack field elements into bytes
pub fn pack(symbols: &[Gf8]) -> Vec<u8> {
    let mut bytes = vec![0u8; packed_len(symbols.len())];
    for (index, symbol) in symbols.iter().enumerate() {
        let value = symbol.value();
        for bit in 0..BITS_PER_SYMBOL {
            if (value >> (BITS_PER_SYMBOL - 1 - bit)) & 1 == 1 {
                let position = index * BITS_PER_SYMBOL + bit;
                bytes[position / 8] |= 0x80 >> (position % 8);
            }
        }
    }
    bytes
}

/// Unpack exactly `N` field elements
///
/// Fails if `bytes` is not exactly [`packed_len`]`(N)` long. Padding bits are
/// ignored.
pub fn unpack<const N: usize>(bytes: &[u8]) -> Result<[Gf8; N]> {
    let expected = packed_len(N);
    if bytes.len() != expected {
        return Err(CodecError::MalformedTransmission {
            expected,
            actual: bytes.len(),
        });
    }

    let mut symbols = [Gf8::ZERO; N];
    for (index, symbol) in symbols.iter_mut().enumerate() {
        let mut value = 0u8;
        for bit in 0..BITS_PER_SYMBOL {
            let position = index * BITS_PER_SYMBOL + bit;
            let set = (bytes[position / 8] & (0x80 >> (position % 8))) != 0;
            value = (value << 1) | set as u8;
        }
        *symbol = Gf8::from_bits(value);
    }
    Ok(symbols)
}
