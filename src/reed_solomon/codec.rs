//! Reed-Solomon encoder and decoder over GF(8)
//!
//! ## Construction
//!
//! A code of length `N` evaluates the message polynomial at the first `N`
//! field elements in decimal order. The generator matrix is the `K × N`
//! Vandermonde matrix `G[i][j] = x_jⁱ`; the parity-check matrix is
//! `H[i][j] = v_j · x_jⁱ` for `i < P = N − K` with
//! `v_j = 1 / Π_{l≠j}(x_j − x_l)`, which makes `G · Hᵀ = 0`. When the code
//! uses every field element (`N = 8`) all `v_j` are one.
//!
//! ## Decoding
//!
//! Bounded-distance syndrome decoding: any error pattern of weight up to
//! `⌊(N − K) / 2⌋` is corrected. Heavier patterns produce a well-formed but
//! possibly wrong message and are not reported as failures.
//!
//! The message is read back by inverting the generator columns of the first
//! `K` positions, so the generator does not need an identity prefix.

use super::error::{CodecError, Result};
use super::galois::{Gf8, BITS_PER_SYMBOL, FIELD_SIZE};
use super::matrix::{evaluation_point, vandermonde, Matrix};
use super::packing::{pack, packed_len, unpack};
use super::syndrome::SyndromeTable;
use log::{debug, trace};
use std::sync::OnceLock;

/// The (8, 2) code: 64 messages, three-byte transmissions, corrects 3 symbols
pub type Rs8x2 = ReedSolomon<8, 2, 6>;

/// The (4, 2) code: 64 messages, two-byte transmissions, corrects 1 symbol
pub type Rs4x2 = ReedSolomon<4, 2, 2>;

/// What the decoder did to a received word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionStatus {
    /// Syndrome was zero
    Clean,
    /// Syndrome matched an error pattern within the correction radius
    Corrected,
    /// Syndrome matched nothing within the radius; word left unchanged
    BeyondRadius,
}

/// Result of correcting a received word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Correction<const N: usize> {
    pub codeword: [Gf8; N],
    pub error_weight: usize,
    pub status: CorrectionStatus,
}

/// Reed-Solomon code with `N` symbols per codeword, `K` message symbols and
/// `P = N − K` parity-check rows
#[derive(Debug, Clone)]
pub struct ReedSolomon<const N: usize, const K: usize, const P: usize> {
    generator: Matrix<K, N>,
    parity_check: Matrix<P, N>,
    /// Hᵀ, applied to received words
    parity_columns: Matrix<N, P>,
    /// Inverse of the first K generator columns
    recovery: Matrix<K, K>,
    syndromes: SyndromeTable<N, P>,
}

impl<const N: usize, const K: usize, const P: usize> ReedSolomon<N, K, P> {
    const SHAPE: () = {
        assert!(K > 0, "message length must be positive");
        assert!(K < N, "message length must be below code length");
        assert!(N <= FIELD_SIZE, "code length exceeds the number of field elements");
        assert!(P == N - K, "parity dimension must equal code length minus message length");
        assert!(K * BITS_PER_SYMBOL < 32, "message does not fit in u32");
    };

    pub const CODE_LENGTH: usize = N;
    pub const MESSAGE_LENGTH: usize = K;
    pub const PARITY_DIM: usize = P;
    /// Minimum distance `N − K + 1`
    pub const DISTANCE: usize = N - K + 1;
    /// Correction radius `⌊(d − 1) / 2⌋`
    pub const CORRECTABLE: usize = (N - K) / 2;
    pub const TRANSMISSION_LEN: usize = packed_len(N);
    /// Messages must be below this value
    pub const MESSAGE_LIMIT: u32 = 1 << (K * BITS_PER_SYMBOL);

    /// Build the matrices and the syndrome table
    pub fn new() -> Result<Self> {
        let () = Self::SHAPE;

        let generator = vandermonde::<K, N>(&[Gf8::ONE; N]);
        let parity_check = vandermonde::<P, N>(&Self::column_multipliers()?);
        let parity_columns = parity_check.transpose();
        debug_assert!(generator.multiply(&parity_columns).is_zero());

        let recovery = generator.leading_columns::<K>().inverse()?;
        let syndromes = SyndromeTable::build(&parity_columns, Self::CORRECTABLE);

        debug!(
            "Reed-Solomon ({}, {}) over GF(8): distance {}, corrects {} symbols",
            N,
            K,
            Self::DISTANCE,
            Self::CORRECTABLE
        );

        Ok(Self {
            generator,
            parity_check,
            parity_columns,
            recovery,
            syndromes,
        })
    }

    /// `v_j = 1 / Π_{l≠j}(x_j − x_l)`
    fn column_multipliers() -> Result<[Gf8; N]> {
        let mut multipliers = [Gf8::ONE; N];
        for (j, multiplier) in multipliers.iter_mut().enumerate() {
            let x_j = evaluation_point(j);
            let product: Gf8 = (0..N)
                .filter(|&l| l != j)
                .fold(Gf8::ONE, |acc, l| acc * (x_j - evaluation_point(l)));
            *multiplier = product.inverse().ok_or(CodecError::SingularMatrix)?;
        }
        Ok(multipliers)
    }

    pub fn generator(&self) -> &Matrix<K, N> {
        &self.generator
    }

    pub fn parity_check(&self) -> &Matrix<P, N> {
        &self.parity_check
    }

    pub fn syndrome_table(&self) -> &SyndromeTable<N, P> {
        &self.syndromes
    }

    /// Split a message into `K` symbols, most significant slice first
    pub fn message_symbols(message: u32) -> Result<[Gf8; K]> {
        if message >= Self::MESSAGE_LIMIT {
            return Err(CodecError::MessageOutOfRange {
                message,
                limit: Self::MESSAGE_LIMIT,
            });
        }

        let mut symbols = [Gf8::ZERO; K];
        for (i, symbol) in symbols.iter_mut().enumerate() {
            let shift = BITS_PER_SYMBOL * (K - 1 - i);
            *symbol = Gf8::from_bits((message >> shift) as u8);
        }
        Ok(symbols)
    }

    /// Inverse of [`Self::message_symbols`]
    pub fn message_from_symbols(symbols: &[Gf8; K]) -> u32 {
        symbols
            .iter()
            .fold(0u32, |message, s| (message << BITS_PER_SYMBOL) | s.value() as u32)
    }

    pub fn encode_symbols(&self, message: u32) -> Result<[Gf8; N]> {
        let symbols = Self::message_symbols(message)?;
        Ok(self.generator.apply(&symbols))
    }

    /// Encode a message into a packed transmission
    pub fn encode(&self, message: u32) -> Result<Vec<u8>> {
        let codeword = self.encode_symbols(message)?;
        Ok(pack(&codeword))
    }

    /// Parity-check transform of a received word
    #[inline]
    pub fn syndrome(&self, received: &[Gf8; N]) -> [Gf8; P] {
        self.parity_columns.apply(received)
    }

    pub fn is_codeword(&self, word: &[Gf8; N]) -> bool {
        self.syndrome(word).iter().all(|s| s.is_zero())
    }

    /// Syndrome lookup and correction
    pub fn correct(&self, received: &[Gf8; N]) -> Correction<N> {
        let syndrome = self.syndrome(received);
        if syndrome.iter().all(|s| s.is_zero()) {
            return Correction {
                codeword: *received,
                error_weight: 0,
                status: CorrectionStatus::Clean,
            };
        }

        match self.syndromes.lookup(&syndrome) {
            Some(error) => {
                let mut codeword = *received;
                for (symbol, &e) in codeword.iter_mut().zip(error.iter()) {
                    *symbol -= e;
                }
                let error_weight = weight(error);
                debug!("Corrected {} symbol error(s)", error_weight);
                Correction {
                    codeword,
                    error_weight,
                    status: CorrectionStatus::Corrected,
                }
            }
            None => {
                debug!(
                    "Syndrome {:?} beyond correction radius {}",
                    syndrome,
                    Self::CORRECTABLE
                );
                Correction {
                    codeword: *received,
                    error_weight: 0,
                    status: CorrectionStatus::BeyondRadius,
                }
            }
        }
    }

    /// Message symbols of a codeword, solved from its first `K` positions
    pub fn recover_message(&self, codeword: &[Gf8; N]) -> [Gf8; K] {
        let mut information = [Gf8::ZERO; K];
        information.copy_from_slice(&codeword[..K]);
        self.recovery.apply(&information)
    }

    pub fn decode_symbols(&self, received: &[Gf8; N]) -> u32 {
        let correction = self.correct(received);
        Self::message_from_symbols(&self.recover_message(&correction.codeword))
    }

    /// Decode a packed transmission, correcting symbol errors
    pub fn decode(&self, transmission: &[u8]) -> Result<u32> {
        let received: [Gf8; N] = unpack(transmission)?;
        let message = self.decode_symbols(&received);
        trace!("Decoded {:02x?} -> {}", transmission, message);
        Ok(message)
    }

    /// Overwrite one symbol of a packed transmission
    pub fn replace_symbol(&self, transmission: &[u8], index: usize, value: Gf8) -> Result<Vec<u8>> {
        let mut symbols: [Gf8; N] = unpack(transmission)?;
        let slot = symbols
            .get_mut(index)
            .ok_or(CodecError::SymbolIndexOutOfRange { index, len: N })?;
        *slot = value;
        Ok(pack(&symbols))
    }
}

/// Number of nonzero symbols
pub fn weight(word: &[Gf8]) -> usize {
    word.iter().filter(|s| !s.is_zero()).count()
}

/// Number of positions where two words differ
pub fn hamming_distance(a: &[Gf8], b: &[Gf8]) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count()
}

/// Shape-independent codec surface
pub trait SymbolCodec: Send + Sync {
    fn encode(&self, message: u32) -> Result<Vec<u8>>;
    fn decode(&self, transmission: &[u8]) -> Result<u32>;
    fn replace_symbol(&self, transmission: &[u8], index: usize, value: Gf8) -> Result<Vec<u8>>;
    fn code_length(&self) -> usize;
    fn message_length(&self) -> usize;
    fn parity_dim(&self) -> usize;
    fn distance(&self) -> usize;
    fn correctable(&self) -> usize;
    fn transmission_len(&self) -> usize;
    fn message_limit(&self) -> u32;
    fn syndrome_entries(&self) -> usize;
}

impl<const N: usize, const K: usize, const P: usize> SymbolCodec for ReedSolomon<N, K, P> {
    fn encode(&self, message: u32) -> Result<Vec<u8>> {
        ReedSolomon::<N, K, P>::encode(self, message)
    }

    fn decode(&self, transmission: &[u8]) -> Result<u32> {
        ReedSolomon::<N, K, P>::decode(self, transmission)
    }

    fn replace_symbol(&self, transmission: &[u8], index: usize, value: Gf8) -> Result<Vec<u8>> {
        ReedSolomon::<N, K, P>::replace_symbol(self, transmission, index, value)
    }

    fn code_length(&self) -> usize {
        N
    }

    fn message_length(&self) -> usize {
        K
    }

    fn parity_dim(&self) -> usize {
        P
    }

    fn distance(&self) -> usize {
        Self::DISTANCE
    }

    fn correctable(&self) -> usize {
        Self::CORRECTABLE
    }

    fn transmission_len(&self) -> usize {
        Self::TRANSMISSION_LEN
    }

    fn message_limit(&self) -> u32 {
        Self::MESSAGE_LIMIT
    }

    fn syndrome_entries(&self) -> usize {
        self.syndromes.len()
    }
}

static DEFAULT_CODE: OnceLock<Result<Rs8x2>> = OnceLock::new();

/// Process-wide (8, 2) code, built on first use
pub fn default_code() -> Result<&'static Rs8x2> {
    DEFAULT_CODE
        .get_or_init(Rs8x2::new)
        .as_ref()
        .map_err(Clone::clone)
}

/// Encode with the default (8, 2) code
pub fn encode(message: u32) -> Result<Vec<u8>> {
    default_code()?.encode(message)
}

/// Decode with the default (8, 2) code
pub fn decode(transmission: &[u8]) -> Result<u32> {
    default_code()?.decode(transmission)
}
