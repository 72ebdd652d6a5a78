//! Galois Field GF(8) arithmetic
//!
//! ## Field polynomial
//!
//! GF(8) is generated by the irreducible polynomial x³ + x² + 1 (0b1101) over
//! GF(2), with α = x as the primitive element. Every element has two forms:
//!
//! | Power | Additive      | Binary  | Decimal |
//! |-------|---------------|---------|---------|
//! | 0     | 0             | 000     | 0       |
//! | α⁰    | 1             | 001     | 1       |
//! | α¹    | x             | 010     | 2       |
//! | α²    | x²            | 100     | 4       |
//! | α³    | x² + 1        | 101     | 5       |
//! | α⁴    | x² + x + 1    | 111     | 7       |
//! | α⁵    | x + 1         | 011     | 3       |
//! | α⁶    | x² + x        | 110     | 6       |
//!
//! The decimal form is what travels on the wire and what [`Gf8`] stores.
//! Addition is XOR of the decimal form; multiplication goes through
//! [`MUL_TABLE`], which is built by constant evaluation from the log tables.

use super::error::CodecError;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Sub, SubAssign};

/// Field polynomial x³ + x² + 1
const GF8_GENERATOR: u8 = 0b1101;

/// Bits per field element on the wire
pub const BITS_PER_SYMBOL: usize = 3;

/// Number of field elements
pub const FIELD_SIZE: usize = 1 << BITS_PER_SYMBOL;

/// Order of the multiplicative group
const LIMIT: usize = FIELD_SIZE - 1;

/// Log/antilog tables for GF(8)
pub struct GaloisTable {
    pub log: [u8; FIELD_SIZE],
    pub antilog: [u8; FIELD_SIZE],
}

impl GaloisTable {
    const fn build() -> Self {
        let mut log = [0u8; FIELD_SIZE];
        let mut antilog = [0u8; FIELD_SIZE];
        let mut b = 1u8;
        let mut l = 0;

        while l < LIMIT {
            log[b as usize] = l as u8;
            antilog[l] = b;

            b <<= 1;
            if b & FIELD_SIZE as u8 != 0 {
                b ^= GF8_GENERATOR;
            }
            l += 1;
        }

        // log(0) is undefined; the slot is never read for multiplication.
        log[0] = LIMIT as u8;
        antilog[LIMIT] = 0;

        Self { log, antilog }
    }
}

pub const GF8_TABLES: GaloisTable = GaloisTable::build();

const fn build_mul_table() -> [[u8; FIELD_SIZE]; FIELD_SIZE] {
    let mut table = [[0u8; FIELD_SIZE]; FIELD_SIZE];
    let mut a = 1;
    while a < FIELD_SIZE {
        let mut b = 1;
        while b < FIELD_SIZE {
            let log_sum =
                (GF8_TABLES.log[a] as usize + GF8_TABLES.log[b] as usize) % LIMIT;
            table[a][b] = GF8_TABLES.antilog[log_sum];
            b += 1;
        }
        a += 1;
    }
    table
}

/// Product table indexed by the decimal form of both operands.
/// `MUL_TABLE[5][6]` is α³ · α⁶.
pub static MUL_TABLE: [[u8; FIELD_SIZE]; FIELD_SIZE] = build_mul_table();

/// GF(8) element in decimal (additive) form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Gf8(u8);

impl Gf8 {
    pub const ZERO: Self = Self(0);
    pub const ONE: Self = Self(1);
    /// Primitive element α = x
    pub const ALPHA: Self = Self(2);

    /// Create an element from its decimal form, rejecting values outside the field
    #[inline]
    pub const fn new(value: u8) -> Option<Self> {
        if (value as usize) < FIELD_SIZE {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Create an element from the low three bits of `value`
    #[inline]
    pub const fn from_bits(value: u8) -> Self {
        Self(value & LIMIT as u8)
    }

    /// Decimal form
    #[inline]
    pub const fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// α^exponent
    #[inline]
    pub const fn from_power(exponent: u32) -> Self {
        Self(GF8_TABLES.antilog[exponent as usize % LIMIT])
    }

    /// Power form: the exponent e with α^e == self, or `None` for zero
    #[inline]
    pub const fn power(self) -> Option<u8> {
        if self.0 == 0 {
            None
        } else {
            Some(GF8_TABLES.log[self.0 as usize])
        }
    }

    /// Multiplicative inverse, `None` for zero
    #[inline]
    pub const fn inverse(self) -> Option<Self> {
        match self.power() {
            Some(log) => Some(Self(GF8_TABLES.antilog[(LIMIT - log as usize) % LIMIT])),
            None => None,
        }
    }

    /// Division that reports a zero divisor instead of panicking
    #[inline]
    pub fn checked_div(self, rhs: Self) -> Option<Self> {
        rhs.inverse().map(|inv| self * inv)
    }

    /// Power operation
    pub fn pow(self, exponent: u32) -> Self {
        if exponent == 0 {
            return Self::ONE;
        }
        match self.power() {
            Some(log) => Self::from_power(log as u32 * (exponent % LIMIT as u32)),
            None => Self::ZERO,
        }
    }

    /// Every element in decimal order
    pub fn elements() -> impl Iterator<Item = Self> {
        (0..FIELD_SIZE as u8).map(Self)
    }
}

// Addition (XOR in GF(2^n))
impl Add for Gf8 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl AddAssign for Gf8 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

// Subtraction is addition in characteristic 2
impl Sub for Gf8 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 ^ rhs.0)
    }
}

impl SubAssign for Gf8 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 ^= rhs.0;
    }
}

impl Mul for Gf8 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        Self(MUL_TABLE[self.0 as usize][rhs.0 as usize])
    }
}

impl MulAssign for Gf8 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Div for Gf8 {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        match self.checked_div(rhs) {
            Some(quotient) => quotient,
            None => panic!("Division by zero in Galois field"),
        }
    }
}

impl DivAssign for Gf8 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl TryFrom<u8> for Gf8 {
    type Error = CodecError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(CodecError::InvalidSymbol(value))
    }
}

impl From<Gf8> for u8 {
    fn from(val: Gf8) -> Self {
        val.0
    }
}

impl std::fmt::Display for Gf8 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Field product of two elements
#[inline]
pub fn multiply(a: Gf8, b: Gf8) -> Gf8 {
    a * b
}

/// Field sum of two elements (XOR)
#[inline]
pub fn add(a: Gf8, b: Gf8) -> Gf8 {
    a + b
}
