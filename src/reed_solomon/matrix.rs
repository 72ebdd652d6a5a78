//! Const-generic matrices over GF(8)
//!
//! Dimensions are type parameters, so a generator matrix can only be applied to
//! a message of the right length and produces a codeword of the right length.

use super::error::{CodecError, Result};
use super::galois::Gf8;

/// Matrix with const generic dimensions
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matrix<const ROWS: usize, const COLS: usize> {
    data: [[Gf8; COLS]; ROWS],
}

impl<const ROWS: usize, const COLS: usize> Default for Matrix<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> Matrix<ROWS, COLS> {
    /// Create a new zero matrix
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: [[Gf8::ZERO; COLS]; ROWS],
        }
    }

    #[inline]
    pub const fn from_rows(data: [[Gf8; COLS]; ROWS]) -> Self {
        Self { data }
    }

    /// Build a matrix from a function of (row, col)
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> Gf8) -> Self {
        let mut matrix = Self::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                matrix.data[row][col] = f(row, col);
            }
        }
        matrix
    }

    #[inline]
    pub const fn get(&self, row: usize, col: usize) -> Gf8 {
        self.data[row][col]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: Gf8) {
        self.data[row][col] = value;
    }

    #[inline]
    pub const fn dimensions() -> (usize, usize) {
        (ROWS, COLS)
    }

    #[inline]
    pub const fn row(&self, row: usize) -> &[Gf8; COLS] {
        &self.data[row]
    }

    pub fn transpose(&self) -> Matrix<COLS, ROWS> {
        Matrix::from_fn(|row, col| self.data[col][row])
    }

    /// Row vector times matrix: `result[i] = Σ vector[r] · self[r][i]`
    ///
    /// Sums are taken with field addition, so the result is always a field
    /// element regardless of how many rows contribute.
    pub fn apply(&self, vector: &[Gf8; ROWS]) -> [Gf8; COLS] {
        let mut result = [Gf8::ZERO; COLS];
        for (coefficient, row) in vector.iter().zip(self.data.iter()) {
            if coefficient.is_zero() {
                continue;
            }
            for (out, &entry) in result.iter_mut().zip(row.iter()) {
                *out += *coefficient * entry;
            }
        }
        result
    }

    /// Matrix product
    pub fn multiply<const OTHER: usize>(&self, rhs: &Matrix<COLS, OTHER>) -> Matrix<ROWS, OTHER> {
        let mut product = Matrix::new();
        for (row, lhs_row) in self.data.iter().enumerate() {
            product.data[row] = rhs.apply(lhs_row);
        }
        product
    }

    /// Select `WIDTH` leading columns
    pub fn leading_columns<const WIDTH: usize>(&self) -> Matrix<ROWS, WIDTH> {
        debug_assert!(WIDTH <= COLS);
        Matrix::from_fn(|row, col| self.data[row][col])
    }

    pub fn is_zero(&self) -> bool {
        self.data.iter().flatten().all(|e| e.is_zero())
    }
}

impl<const SIZE: usize> Matrix<SIZE, SIZE> {
    /// Create an identity matrix (only for square matrices)
    #[inline]
    pub fn identity() -> Self {
        let mut matrix = Self::new();
        for i in 0..SIZE {
            matrix.set(i, i, Gf8::ONE);
        }
        matrix
    }

    /// Gauss-Jordan inversion
    pub fn inverse(&self) -> Result<Self> {
        let mut work = self.clone();
        let mut inverse = Self::identity();

        for pivot_row in 0..SIZE {
            // Find pivot
            let search = (pivot_row..SIZE).find(|&row| !work.get(row, pivot_row).is_zero());
            let Some(found) = search else {
                return Err(CodecError::SingularMatrix);
            };
            if found != pivot_row {
                work.data.swap(pivot_row, found);
                inverse.data.swap(pivot_row, found);
            }

            // Scale pivot row
            let pivot_inv = work
                .get(pivot_row, pivot_row)
                .inverse()
                .ok_or(CodecError::SingularMatrix)?;
            for col in 0..SIZE {
                work.data[pivot_row][col] *= pivot_inv;
                inverse.data[pivot_row][col] *= pivot_inv;
            }

            // Eliminate column
            for row in 0..SIZE {
                if row == pivot_row {
                    continue;
                }
                let factor = work.get(row, pivot_row);
                if factor.is_zero() {
                    continue;
                }
                for col in 0..SIZE {
                    let w = work.data[pivot_row][col];
                    let i = inverse.data[pivot_row][col];
                    work.data[row][col] -= factor * w;
                    inverse.data[row][col] -= factor * i;
                }
            }
        }

        Ok(inverse)
    }
}

/// Vandermonde matrix `m[i][j] = x_j^i` over the first `COLS` field elements
/// in decimal order, scaled per column by `scale[j]`
pub fn vandermonde<const ROWS: usize, const COLS: usize>(scale: &[Gf8; COLS]) -> Matrix<ROWS, COLS> {
    Matrix::from_fn(|row, col| scale[col] * evaluation_point(col).pow(row as u32))
}

/// Evaluation point of codeword position `index`
#[inline]
pub fn evaluation_point(index: usize) -> Gf8 {
    Gf8::from_bits(index as u8)
}
