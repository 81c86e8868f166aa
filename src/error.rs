//! GroupError: unified error type for cayley-grapher public APIs
//!
//! This error type is used throughout the crate to provide robust,
//! non-panicking error handling for all public APIs. Arithmetic failures
//! (`DimensionMismatch`, `NotInvertible`, ...) propagate unmodified to the
//! caller; the closure algorithm only adds pair context via [`GroupError::ClosureStep`]
//! and performs no local recovery, since a partially closed group is not a
//! meaningful result.

use thiserror::Error;

/// Unified error type for group construction, element arithmetic, and graph
/// derivation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GroupError {
    /// Operand shapes are incompatible for matrix multiplication.
    #[error("dimension mismatch: cannot multiply a {left:?} matrix by a {right:?} matrix")]
    DimensionMismatch {
        /// `(rows, cols)` of the left operand.
        left: (usize, usize),
        /// `(rows, cols)` of the right operand.
        right: (usize, usize),
    },
    /// Operands live over different finite fields.
    #[error("field mismatch: left operand is over GF({left}), right over GF({right})")]
    FieldMismatch { left: u64, right: u64 },
    /// Residue operands carry different moduli.
    #[error("modulus mismatch: left operand is in Z/{left}Z, right in Z/{right}Z")]
    ModulusMismatch { left: u64, right: u64 },
    /// The element has no multiplicative inverse in its field.
    #[error("element `{key}` is not invertible")]
    NotInvertible {
        /// Canonical key of the offending element.
        key: String,
    },
    /// Closure passed the configured element ceiling; the generating set is
    /// either not finite or larger than the caller is willing to expand.
    #[error("closure exceeded the ceiling of {limit} elements")]
    GroupTooLarge { limit: usize },
    /// Indexed access past the end of a membership set. Programming error in
    /// correct usage.
    #[error("index {index} out of range for a set of {len} elements")]
    IndexOutOfRange { index: usize, len: usize },
    /// A group needs at least one generating element.
    #[error("empty generating set")]
    EmptyGeneratingSet,
    /// Matrix elements are only supported over prime fields.
    #[error("field order {order} is not prime")]
    NotPrime { order: u64 },
    /// Residue classes need a positive modulus.
    #[error("modulus must be positive, got {modulus}")]
    InvalidModulus { modulus: u64 },
    /// Flattened entry list does not fill the requested matrix shape.
    #[error("a {rows}x{cols} matrix needs {} entries, got {found}", .rows * .cols)]
    WrongEntryCount {
        rows: usize,
        cols: usize,
        found: usize,
    },
    /// A generator record does not describe a well-formed square matrix.
    #[error("group `{group}`: generator {index} has {found} entries, expected {expected}")]
    MalformedGenerator {
        group: String,
        index: usize,
        expected: usize,
        found: usize,
    },
    /// A product left the element set while deriving a graph; the group was
    /// not closed.
    #[error("`{left}` * `{right}` is not in the element set; the group is not closed")]
    NotClosed { left: String, right: String },
    /// A data structure invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
    /// A multiplication failed while expanding the closure; carries the keys
    /// of the pair that triggered the abort.
    #[error("closure aborted on `{left}` * `{right}`")]
    ClosureStep {
        left: String,
        right: String,
        #[source]
        source: Box<GroupError>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closure_step_reports_pair_and_cause() {
        let err = GroupError::ClosureStep {
            left: "a".into(),
            right: "b".into(),
            source: Box::new(GroupError::DimensionMismatch {
                left: (2, 3),
                right: (2, 3),
            }),
        };
        let msg = err.to_string();
        assert!(msg.contains("`a` * `b`"));
        let source = std::error::Error::source(&err).expect("wrapped cause");
        assert!(source.to_string().contains("dimension mismatch"));
    }

    #[test]
    fn entry_count_message_multiplies_shape() {
        let err = GroupError::WrongEntryCount {
            rows: 2,
            cols: 3,
            found: 5,
        };
        assert!(err.to_string().contains("needs 6 entries, got 5"));
    }
}
