//! Syndrome lookup table
//!
//! Maps each syndrome reachable by an error pattern of weight at most `t` to
//! that pattern. For weights within the correction radius the pattern is
//! unique, so the table is built by plain enumeration in increasing weight.

use super::galois::{Gf8, BITS_PER_SYMBOL, FIELD_SIZE};
use super::matrix::Matrix;
use log::debug;
use rustc_hash::FxHashMap as HashMap;

/// Pack a syndrome into an integer key, three bits per symbol
#[inline]
pub fn syndrome_key<const P: usize>(syndrome: &[Gf8; P]) -> u32 {
    syndrome
        .iter()
        .fold(0u32, |key, s| (key << BITS_PER_SYMBOL) | s.value() as u32)
}

/// Syndrome → minimum-weight error vector
#[derive(Debug, Clone)]
pub struct SyndromeTable<const N: usize, const P: usize> {
    entries: HashMap<u32, [Gf8; N]>,
    max_weight: usize,
}

impl<const N: usize, const P: usize> SyndromeTable<N, P> {
    /// Build the table for every error pattern of weight `1..=max_weight`
    ///
    /// `columns` is the transposed parity-check matrix: row `j` holds the
    /// syndrome of a unit error at position `j`.
    pub fn build(columns: &Matrix<N, P>, max_weight: usize) -> Self {
        let max_weight = max_weight.min(N);
        let mut entries = HashMap::default();
        let mut pattern = [Gf8::ZERO; N];

        for weight in 1..=max_weight {
            Self::enumerate(
                columns,
                &mut entries,
                &mut pattern,
                0,
                weight,
                [Gf8::ZERO; P],
            );
        }

        debug!(
            "Built syndrome table for n={} p={}: {} entries up to weight {}",
            N,
            P,
            entries.len(),
            max_weight
        );

        Self {
            entries,
            max_weight,
        }
    }

    fn enumerate(
        columns: &Matrix<N, P>,
        entries: &mut HashMap<u32, [Gf8; N]>,
        pattern: &mut [Gf8; N],
        start: usize,
        remaining: usize,
        syndrome: [Gf8; P],
    ) {
        if remaining == 0 {
            entries.entry(syndrome_key(&syndrome)).or_insert(*pattern);
            return;
        }

        // Leave room for the positions still to place
        for position in start..=N - remaining {
            let column = columns.row(position);
            for value in 1..FIELD_SIZE as u8 {
                let magnitude = Gf8::from_bits(value);
                let mut next = syndrome;
                for (s, &c) in next.iter_mut().zip(column.iter()) {
                    *s += magnitude * c;
                }
                pattern[position] = magnitude;
                Self::enumerate(columns, entries, pattern, position + 1, remaining - 1, next);
            }
            pattern[position] = Gf8::ZERO;
        }
    }

    /// Error pattern for a syndrome, if one within the radius produces it
    #[inline]
    pub fn lookup(&self, syndrome: &[Gf8; P]) -> Option<&[Gf8; N]> {
        self.entries.get(&syndrome_key(syndrome))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest error weight covered
    pub fn max_weight(&self) -> usize {
        self.max_weight
    }
}
