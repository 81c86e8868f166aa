//! Square matrices over a prime field, the workhorse element representation.
//!
//! A [`FieldMatrix`] stores its entries row-major, reduced into `0..p`, next
//! to a [`PrimeField`] descriptor. Its canonical key encodes shape, field,
//! and every entry, so key equality is exactly entrywise field equality.

use itertools::Itertools;

use crate::algebra::element::GroupElement;
use crate::algebra::field::PrimeField;
use crate::container::indexed_set::Keyed;
use crate::error::GroupError;

/// A matrix over GF(p).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldMatrix {
    rows: usize,
    cols: usize,
    /// Row-major entries, each reduced into `0..field.order()`.
    entries: Vec<u64>,
    field: PrimeField,
}

impl FieldMatrix {
    /// Builds a matrix from a flattened row-major entry list, reducing each
    /// entry into the field.
    ///
    /// Fails with [`GroupError::WrongEntryCount`] if the list does not fill
    /// the requested shape.
    pub fn new(
        rows: usize,
        cols: usize,
        entries: Vec<u64>,
        field: PrimeField,
    ) -> Result<Self, GroupError> {
        if entries.len() != rows * cols {
            return Err(GroupError::WrongEntryCount {
                rows,
                cols,
                found: entries.len(),
            });
        }
        let entries = entries.into_iter().map(|v| field.reduce(v)).collect();
        Ok(Self {
            rows,
            cols,
            entries,
            field,
        })
    }

    /// Builds an `n`-by-`n` matrix from a flattened entry list.
    pub fn square(dimension: usize, entries: Vec<u64>, field: PrimeField) -> Result<Self, GroupError> {
        Self::new(dimension, dimension, entries, field)
    }

    /// The `n`-by-`n` identity matrix over `field`.
    pub fn identity(dimension: usize, field: PrimeField) -> Self {
        let mut entries = vec![0; dimension * dimension];
        for i in 0..dimension {
            entries[i * dimension + i] = 1 % field.order();
        }
        Self {
            rows: dimension,
            cols: dimension,
            entries,
            field,
        }
    }

    /// Row count.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// The field the entries live in.
    #[inline]
    pub fn field(&self) -> PrimeField {
        self.field
    }

    /// Entry at `(row, col)`.
    ///
    /// # Panics
    /// Panics if the coordinates are outside the matrix shape.
    #[inline]
    pub fn entry(&self, row: usize, col: usize) -> u64 {
        assert!(row < self.rows && col < self.cols, "entry out of shape");
        self.entries[row * self.cols + col]
    }

    /// Row-major entries, reduced into the field.
    #[inline]
    pub fn entries(&self) -> &[u64] {
        &self.entries
    }
}

impl Keyed for FieldMatrix {
    type Key = String;

    /// Canonical encoding of shape, field, and all entries, e.g.
    /// `2x2/gf5[1,0,0,1]`.
    fn key(&self) -> String {
        format!(
            "{}x{}/gf{}[{}]",
            self.rows,
            self.cols,
            self.field.order(),
            self.entries.iter().join(",")
        )
    }
}

impl GroupElement for FieldMatrix {
    /// Matrix multiplication with entrywise arithmetic in the field.
    fn multiply(&self, other: &Self) -> Result<Self, GroupError> {
        if self.field != other.field {
            return Err(GroupError::FieldMismatch {
                left: self.field.order(),
                right: other.field.order(),
            });
        }
        if self.cols != other.rows {
            return Err(GroupError::DimensionMismatch {
                left: (self.rows, self.cols),
                right: (other.rows, other.cols),
            });
        }
        let f = self.field;
        let mut entries = vec![0u64; self.rows * other.cols];
        for r in 0..self.rows {
            for c in 0..other.cols {
                let mut acc = 0u64;
                for k in 0..self.cols {
                    acc = f.add(acc, f.mul(self.entry(r, k), other.entry(k, c)));
                }
                entries[r * other.cols + c] = acc;
            }
        }
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            entries,
            field: f,
        })
    }

    /// Gauss–Jordan elimination over the field. A singular (or non-square)
    /// matrix has no inverse and reports [`GroupError::NotInvertible`].
    fn invert(&self) -> Result<Self, GroupError> {
        if self.rows != self.cols {
            return Err(GroupError::NotInvertible { key: self.key() });
        }
        let n = self.rows;
        let f = self.field;
        let mut a = self.entries.clone();
        let mut inv = Self::identity(n, f).entries;

        for col in 0..n {
            let pivot = (col..n)
                .find(|&r| a[r * n + col] != 0)
                .ok_or_else(|| GroupError::NotInvertible { key: self.key() })?;
            if pivot != col {
                for j in 0..n {
                    a.swap(pivot * n + j, col * n + j);
                    inv.swap(pivot * n + j, col * n + j);
                }
            }
            // Pivot is nonzero, so the field inverse exists.
            let scale = f
                .inv(a[col * n + col])
                .ok_or_else(|| GroupError::NotInvertible { key: self.key() })?;
            for j in 0..n {
                a[col * n + j] = f.mul(a[col * n + j], scale);
                inv[col * n + j] = f.mul(inv[col * n + j], scale);
            }
            for r in 0..n {
                if r == col || a[r * n + col] == 0 {
                    continue;
                }
                let factor = a[r * n + col];
                for j in 0..n {
                    a[r * n + j] = f.sub(a[r * n + j], f.mul(factor, a[col * n + j]));
                    inv[r * n + j] = f.sub(inv[r * n + j], f.mul(factor, inv[col * n + j]));
                }
            }
        }

        Ok(Self {
            rows: n,
            cols: n,
            entries: inv,
            field: f,
        })
    }

    fn identity_like(&self) -> Self {
        Self::identity(self.rows, self.field)
    }

    fn label(&self) -> String {
        self.key()
    }
}
