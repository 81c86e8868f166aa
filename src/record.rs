//! Boundary records for externally supplied group data.
//!
//! The data-loading collaborator hands the core one record per group:
//! a name, a finite-field order, and the generator matrices as flattened
//! entry lists. Fetching and parsing the payload (files, network, embedding)
//! is that collaborator's job; this module only defines the shape and turns
//! a record into a closed [`FiniteGroup`].

use serde::{Deserialize, Serialize};

use crate::algebra::field::PrimeField;
use crate::algebra::matrix::FieldMatrix;
use crate::error::GroupError;
use crate::group::finite_group::{ClosureOptions, FiniteGroup};

/// One generator matrix, flattened row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorRecord {
    /// Row-major entries; must hold exactly `dimension * dimension` values.
    pub entries: Vec<u64>,
    /// Side length of the square matrix.
    pub dimension: usize,
}

/// One named group: a field order plus its generating matrices.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub name: String,
    /// Order of the prime field the matrix entries live in.
    pub field_order: u64,
    pub generators: Vec<GeneratorRecord>,
}

impl FiniteGroup<FieldMatrix> {
    /// Builds and closes the group a record describes.
    ///
    /// Validates the field order ([`GroupError::NotPrime`]) and each
    /// generator's entry count ([`GroupError::MalformedGenerator`], naming
    /// the group and generator ordinal) before running the closure.
    pub fn from_record(
        record: &GroupRecord,
        options: ClosureOptions,
    ) -> Result<Self, GroupError> {
        let field = PrimeField::new(record.field_order)?;
        let mut generators = Vec::with_capacity(record.generators.len());
        for (index, generator) in record.generators.iter().enumerate() {
            let expected = generator.dimension * generator.dimension;
            if generator.entries.len() != expected {
                return Err(GroupError::MalformedGenerator {
                    group: record.name.clone(),
                    index,
                    expected,
                    found: generator.entries.len(),
                });
            }
            generators.push(FieldMatrix::square(
                generator.dimension,
                generator.entries.clone(),
                field,
            )?);
        }
        FiniteGroup::with_options(record.name.clone(), generators, options)
    }
}
