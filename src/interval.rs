// SPDX-License-Identifier: MPL-2.0

//! Closed integer intervals `[start, end]` validated against a [Policy].

use std::fmt::{self, Debug, Display};
use std::marker::PhantomData;

use crate::error::SequenceError;
use crate::policy::{NonNegative, Policy, Unconstrained};

/// A closed range of integers with `start <= end`, both bounds admitted by `P`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "(i64, i64)", into = "(i64, i64)", bound = "P: Policy")
)]
pub struct Interval<P: Policy> {
    start: i64,
    end: i64,
    policy: PhantomData<P>,
}

/// Interval admitting any integer.
pub type IntegerInterval = Interval<Unconstrained>;

/// Interval of non-negative integers.
pub type NonNegativeInterval = Interval<NonNegative>;

impl<P: Policy> Interval<P> {
    /// Create the interval `[start, end]`.
    ///
    /// Fails with [SequenceError::InvalidRange] if `start > end` and with
    /// [SequenceError::ConstraintViolation] if a bound is not admitted by `P`.
    pub fn new(start: i64, end: i64) -> Result<Self, SequenceError> {
        if start > end {
            return Err(SequenceError::InvalidRange { start, end });
        }
        P::check(start)?;
        P::check(end)?;
        Ok(Self::new_unchecked(start, end))
    }

    /// The interval `[value, value]`.
    pub fn point(value: i64) -> Result<Self, SequenceError> {
        Self::new(value, value)
    }

    /// Create an interval from a list of bounds, which must hold exactly `[start, end]`.
    pub fn from_slice(bounds: &[i64]) -> Result<Self, SequenceError> {
        match bounds {
            [start, end] => Self::new(*start, *end),
            _ => Err(SequenceError::InvalidArity { len: bounds.len() }),
        }
    }

    /// Bounds are known to be ordered and admitted, typically because they were taken from
    /// other intervals of the same policy.
    pub(crate) fn new_unchecked(start: i64, end: i64) -> Self {
        debug_assert!(start <= end, "interval [{start}-{end}] is inverted");
        Self {
            start,
            end,
            policy: PhantomData,
        }
    }

    /// The start of the interval.
    pub fn start(&self) -> i64 {
        self.start
    }

    /// The end of the interval.
    pub fn end(&self) -> i64 {
        self.end
    }

    /// The interval as a `(start, end)` pair.
    pub fn as_pair(&self) -> (i64, i64) {
        (self.start, self.end)
    }

    /// Number of integers in the interval, saturating at `u64::MAX`.
    pub fn count(&self) -> u64 {
        self.end.abs_diff(self.start).saturating_add(1)
    }

    /// Whether the interval holds a single value.
    pub fn is_point(&self) -> bool {
        self.start == self.end
    }

    /// Returns true if `value` lies within the interval.
    pub fn contains_value(&self, value: i64) -> bool {
        self.start <= value && value <= self.end
    }

    /// Returns true if every value of `other` lies within this interval.
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Returns true if the two intervals share at least one value.
    ///
    /// Intervals touching at a shared boundary value overlap; intervals that are merely adjacent,
    /// such as `[1-3]` and `[4-5]`, do not.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Smallest interval covering both `self` and `other`.
    pub(crate) fn hull(&self, other: &Self) -> Self {
        Self::new_unchecked(self.start.min(other.start), self.end.max(other.end))
    }
}

/// The next integer after `value`, if there is one.
pub(crate) fn successor(value: i64) -> Option<i64> {
    value.checked_add(1)
}

/// An interval ending at `end` cannot be kept separate from one starting at `start`: they
/// overlap, or `start` directly follows `end`.
pub(crate) fn touches(end: i64, start: i64) -> bool {
    end >= start || successor(end) == Some(start)
}

impl<P: Policy> Debug for Interval<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.start, self.end)
    }
}

/// Renders as `v` for a single value and as `v1-v2` otherwise.
impl<P: Policy> Display for Interval<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_point() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

impl<P: Policy> TryFrom<(i64, i64)> for Interval<P> {
    type Error = SequenceError;

    fn try_from((start, end): (i64, i64)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl<P: Policy> From<Interval<P>> for (i64, i64) {
    fn from(interval: Interval<P>) -> Self {
        interval.as_pair()
    }
}
