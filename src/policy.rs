// SPDX-License-Identifier: MPL-2.0

//! Variant policies constraining the values a sequence may hold.
//!
//! A policy is a zero-sized type parameter of [Interval](crate::interval::Interval) and
//! [Sequence](crate::sequence::Sequence). Every bound of every interval is checked against it when
//! the interval is built, and every operation builds its result with the same policy as its
//! operands, so a `Sequence<NonNegative>` can never hold a negative value.
//!
//! Two policies are provided:
//!  - [Unconstrained]: every `i64` is admitted
//!  - [NonNegative]: only values `>= 0` are admitted
//!
//! Other constraints can be expressed by implementing [Policy] on a new unit struct.

use std::fmt::Debug;
use std::hash::Hash;

use crate::error::SequenceError;

/// Element-level constraint enforced on every interval bound.
///
/// The admitted values must form a contiguous range of integers: operations such as
/// [after](crate::sequence::Sequence::after) derive new bounds lying between existing ones and
/// rely on those being admitted too.
pub trait Policy: Copy + Default + Debug + Ord + Hash + Send + Sync + 'static {
    /// Description of the constraint, reported in [SequenceError::ConstraintViolation].
    const CONSTRAINT: &'static str;

    /// Whether `value` may appear in a sequence of this variant.
    fn admits(value: i64) -> bool;

    // Automatically implemented functions ###########################

    /// Check a single value against the constraint.
    fn check(value: i64) -> Result<(), SequenceError> {
        if Self::admits(value) {
            Ok(())
        } else {
            Err(SequenceError::ConstraintViolation {
                value,
                constraint: Self::CONSTRAINT,
            })
        }
    }
}

/// No constraint beyond `start <= end`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unconstrained;

impl Policy for Unconstrained {
    const CONSTRAINT: &'static str = "any integer";

    fn admits(_value: i64) -> bool {
        true
    }
}

/// Values must be zero or positive, e.g. version numbers and row identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonNegative;

impl Policy for NonNegative {
    const CONSTRAINT: &'static str = "value must be non-negative";

    fn admits(value: i64) -> bool {
        value >= 0
    }
}
