// SPDX-License-Identifier: MPL-2.0

//! Handling validation errors.
//!
//! Every constructor and every operation producing a new [Sequence](crate::sequence::Sequence)
//! validates eagerly. A failure is always terminal for the attempted construction: there is no
//! partial value and no silent coercion.

use thiserror::Error;

/// Errors that may occur while building intervals and sequences.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// The end of an interval precedes its start.
    #[error("integer interval [{start}-{end}] is invalid")]
    InvalidRange {
        /// Start of the rejected interval.
        start: i64,
        /// End of the rejected interval.
        end: i64,
    },

    /// An interval was given as a list of bounds that does not hold exactly two values.
    #[error("integer interval expects exactly 2 bounds instead of {len}")]
    InvalidArity {
        /// Number of bounds that were provided.
        len: usize,
    },

    /// A bound does not satisfy the constraint of the sequence variant.
    #[error("value {value} violates constraint: {constraint}")]
    ConstraintViolation {
        /// The offending bound.
        value: i64,
        /// Description of the violated constraint.
        constraint: &'static str,
    },

    /// Two consecutive intervals overlap or are adjacent where merging is not permitted.
    #[error("adjacent or overlapping intervals [{}-{}] and [{}-{}]", .previous.0, .previous.1, .next.0, .next.1)]
    Overlap {
        /// The earlier interval, as `(start, end)`.
        previous: (i64, i64),
        /// The interval following it, as `(start, end)`.
        next: (i64, i64),
    },

    /// A value was appended that is not strictly greater than the last value of the sequence.
    #[error("attempt to append value {value} to integer sequence that ends at value {last}")]
    NonMonotonicAppend {
        /// The rejected value.
        value: i64,
        /// Current last value of the sequence.
        last: i64,
    },

    /// The first or last value of a sequence without intervals was requested.
    #[error("integer sequence is empty")]
    EmptySequence,

    /// A token of the interval notation could not be read.
    #[error("cannot parse '{token}' in interval notation: {reason}")]
    Malformed {
        /// The token where parsing failed.
        token: String,
        /// Why the token was rejected.
        reason: String,
    },
}

/// Coarse classification of a [SequenceError].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Inverted interval bounds, or an interval given with the wrong number of bounds.
    InvalidRange,
    /// Variant-specific constraint failure, such as a negative bound.
    ConstraintViolation,
    /// Overlapping or adjacent intervals where merging is not permitted.
    Overlap,
    /// Append of a value that does not extend the sequence.
    NonMonotonicAppend,
    /// First or last value of an empty sequence.
    EmptySequence,
    /// Unreadable interval notation.
    Malformed,
}

impl SequenceError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidRange { .. } | Self::InvalidArity { .. } => ErrorKind::InvalidRange,
            Self::ConstraintViolation { .. } => ErrorKind::ConstraintViolation,
            Self::Overlap { .. } => ErrorKind::Overlap,
            Self::NonMonotonicAppend { .. } => ErrorKind::NonMonotonicAppend,
            Self::EmptySequence => ErrorKind::EmptySequence,
            Self::Malformed { .. } => ErrorKind::Malformed,
        }
    }
}
