//! Reed-Solomon Error Correction Module
//!
//! Short messages are encoded over GF(8) into codewords of up to eight 3-bit
//! symbols and packed into a few bytes for transmission. Decoding corrects up
//! to half the minimum distance of the code using a precomputed syndrome table.

pub mod codec;
pub mod error;
pub mod galois;
pub mod matrix;
pub mod packing;
pub mod syndrome;

pub use codec::*;
pub use error::{CodecError, Result};
pub use galois::*;
pub use packing::{pack, packed_len, unpack};
