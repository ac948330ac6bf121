// SPDX-License-Identifier: MPL-2.0

//! Sequences of integers stored as ordered lists of disjoint, non-adjacent closed intervals.
//!
//! A [Sequence] such as `4-17,19-25,27` stands for every integer covered by one of its
//! intervals. Between the end of an interval and the start of the next one there is always at
//! least one missing value, so the representation of a set of integers is unique and structural
//! equality is set equality.
//!
//! Sequences are immutable values. Every operation returns a new sequence built through the
//! [SequenceFactory] of the operands, so results keep the [Policy] of their inputs:
//!  - set algebra: [union](Sequence::union), [intersect](Sequence::intersect),
//!    [contains_sequence](Sequence::contains_sequence), [overlaps](Sequence::overlaps),
//!    [is_disjoint](Sequence::is_disjoint)
//!  - growth: [append](Sequence::append) a new maximum value
//!  - slicing: [after](Sequence::after) a value and [close](Sequence::close) at a value
//!
//! All scans run in `O(n + m)` over the interval counts of the operands.

use std::cmp::Ordering;
use std::fmt::{self, Debug};

use log::trace;
#[cfg(any(feature = "proptest", test))]
use proptest::prelude::*;
use smallvec::SmallVec;

use crate::error::SequenceError;
use crate::factory::SequenceFactory;
use crate::interval::{successor, touches, Interval};
use crate::policy::{NonNegative, Policy, Unconstrained};

pub(crate) type Segments<P> = SmallVec<[Interval<P>; 1]>;

/// Set of integers admitted by `P`, as ascending disjoint non-adjacent intervals.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "Vec<(i64, i64)>",
        into = "Vec<(i64, i64)>",
        bound = "P: Policy"
    )
)]
pub struct Sequence<P: Policy> {
    segments: Segments<P>,
}

/// Sequence of arbitrary integers.
pub type IntegerSequence = Sequence<Unconstrained>;

/// Sequence of non-negative integers, such as version numbers.
pub type NonNegativeSequence = Sequence<NonNegative>;

// Constructors ################################################################

impl<P: Policy> Sequence<P> {
    /// Empty set of values.
    pub fn empty() -> Self {
        Self::factory_of().empty()
    }

    /// Set containing exactly one value.
    pub fn singleton(value: i64) -> Result<Self, SequenceError> {
        Self::factory_of().singleton(value)
    }

    /// See [SequenceFactory::from_pairs].
    pub fn from_pairs<I>(pairs: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self::factory_of().from_pairs(pairs)
    }

    /// See [SequenceFactory::from_arrays].
    pub fn from_arrays<I, R>(rows: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[i64]>,
    {
        Self::factory_of().from_arrays(rows)
    }

    /// See [SequenceFactory::from_intervals].
    pub fn from_intervals<I>(intervals: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = Interval<P>>,
    {
        Self::factory_of().from_intervals(intervals)
    }

    /// See [SequenceFactory::to_sequence].
    pub fn from_sorted_values<I>(values: I) -> Result<Self, SequenceError>
    where
        I: IntoIterator<Item = i64>,
    {
        Self::factory_of().to_sequence(values)
    }

    /// The same values under another policy, re-validating every bound.
    pub fn with_policy<Q: Policy>(&self) -> Result<Sequence<Q>, SequenceError> {
        let factory = SequenceFactory::<Q>::new();
        let intervals = self
            .segments
            .iter()
            .map(|interval| factory.interval(interval.start(), interval.end()))
            .collect::<Result<Vec<_>, _>>()?;
        factory.from_intervals(intervals)
    }

    /// The factory every operation on this sequence builds its results with.
    pub fn factory(&self) -> SequenceFactory<P> {
        Self::factory_of()
    }

    fn factory_of() -> SequenceFactory<P> {
        SequenceFactory::new()
    }

    /// Callers go through [SequenceFactory::assemble] to get the invariants checked.
    pub(crate) fn from_segments(segments: Segments<P>) -> Self {
        Self { segments }
    }

    pub(crate) fn check_invariants(self) -> Self {
        if cfg!(debug_assertions) {
            for p in self.segments.windows(2) {
                assert!(
                    !touches(p[0].end(), p[1].start()),
                    "intervals {:?} and {:?} must be separated by a gap",
                    p[0],
                    p[1]
                );
            }
            for interval in self.segments.iter() {
                assert!(interval.start() <= interval.end());
                assert!(P::admits(interval.start()) && P::admits(interval.end()));
            }
        }
        self
    }
}

impl<P: Policy> Default for Sequence<P> {
    fn default() -> Self {
        Self::empty()
    }
}

// Inspection ##################################################################

impl<P: Policy> Sequence<P> {
    /// Whether the sequence holds no value.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Number of intervals.
    pub fn interval_count(&self) -> usize {
        self.segments.len()
    }

    /// The interval at position `index`.
    pub fn interval(&self, index: usize) -> Option<Interval<P>> {
        self.segments.get(index).copied()
    }

    /// Iterate over the intervals in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &Interval<P>> {
        self.segments.iter()
    }

    /// Iterate over every value in ascending order.
    pub fn values(&self) -> impl Iterator<Item = i64> + '_ {
        self.segments
            .iter()
            .flat_map(|interval| interval.start()..=interval.end())
    }

    /// Smallest value.
    pub fn first_value(&self) -> Result<i64, SequenceError> {
        self.segments
            .first()
            .map(Interval::start)
            .ok_or(SequenceError::EmptySequence)
    }

    /// Largest value.
    pub fn last_value(&self) -> Result<i64, SequenceError> {
        self.segments
            .last()
            .map(Interval::end)
            .ok_or(SequenceError::EmptySequence)
    }

    /// Total number of values, saturating at `u64::MAX`.
    pub fn length(&self) -> u64 {
        self.segments
            .iter()
            .fold(0u64, |count, interval| count.saturating_add(interval.count()))
    }

    /// Structural equality, which for sequences is set equality.
    pub fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

// Membership ##################################################################

impl<P: Policy> Sequence<P> {
    /// Returns true if `value` is in the sequence.
    pub fn contains(&self, value: i64) -> bool {
        self.segments
            .binary_search_by(|interval| {
                if interval.end() < value {
                    Ordering::Less
                } else if interval.start() > value {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            })
            .is_ok()
    }

    /// Membership of many values at once.
    ///
    /// The `values` must be sorted. Functionally equivalent to `values.map(|v| self.contains(v))`
    /// but runs in `O(n + len_of_values)`.
    pub fn contains_many<'s, I>(&'s self, values: I) -> impl Iterator<Item = bool> + 's
    where
        I: IntoIterator<Item = i64>,
        I::IntoIter: 's,
    {
        values
            .into_iter()
            .scan((0usize, None::<i64>), move |(i, last), value| {
                debug_assert!(
                    last.map_or(true, |l| l <= value),
                    "`contains_many` `values` argument incorrectly sorted"
                );
                *last = Some(value);
                while let Some(interval) = self.segments.get(*i) {
                    if value < interval.start() {
                        return Some(false);
                    }
                    if value <= interval.end() {
                        return Some(true);
                    }
                    *i += 1;
                }
                Some(false)
            })
    }

    /// Returns true if every value of `other` is also in `self`.
    pub fn contains_sequence(&self, other: &Self) -> bool {
        let mut containing_iter = self.segments.iter().peekable();
        for subset_elem in other.segments.iter() {
            // Skip the intervals of self that end before this one starts.
            while let Some(containing_elem) = containing_iter.peek() {
                if containing_elem.end() < subset_elem.start() {
                    containing_iter.next();
                } else {
                    break;
                }
            }
            match containing_iter.peek() {
                Some(containing_elem) if containing_elem.contains(subset_elem) => {}
                _ => return false,
            }
        }
        true
    }

    /// Returns true if every value of `self` is also in `other`.
    pub fn subset_of(&self, other: &Self) -> bool {
        other.contains_sequence(self)
    }

    /// Returns true if the two sequences share at least one value.
    pub fn overlaps(&self, other: &Self) -> bool {
        let mut left_iter = self.segments.iter().peekable();
        let mut right_iter = other.segments.iter().peekable();
        while let Some((&&left, &&right)) = left_iter.peek().zip(right_iter.peek()) {
            if left.overlaps(&right) {
                return true;
            }
            // The interval starting first ends before the other one starts.
            if left.start() < right.start() {
                left_iter.next();
            } else {
                right_iter.next();
            }
        }
        false
    }

    /// Returns true if no value is in both sequences.
    pub fn is_disjoint(&self, other: &Self) -> bool {
        !self.overlaps(other)
    }
}

// Set operations ##############################################################

impl<P: Policy> Sequence<P> {
    /// Computes the intersection of two sequences.
    pub fn intersect(&self, other: &Self) -> Self {
        let factory = self.factory();
        let mut output = SmallVec::new();
        let mut left_iter = self.segments.iter().peekable();
        let mut right_iter = other.segments.iter().peekable();
        while let Some((&&left, &&right)) = left_iter.peek().zip(right_iter.peek()) {
            if left.end() < right.start() {
                left_iter.next();
            } else if right.end() < left.start() {
                right_iter.next();
            } else {
                // The longer of the two intervals may still overlap the next interval of the
                // other side, so only the side(s) ending first move on.
                let end = left.end().min(right.end());
                output.push(factory.derived_interval(left.start().max(right.start()), end));
                if left.end() <= end {
                    left_iter.next();
                }
                if right.end() <= end {
                    right_iter.next();
                }
            }
        }
        factory.assemble(output)
    }

    /// Computes the union of two sequences.
    ///
    /// Disjoint inputs do not make for a disjoint merge: an interval of one side may bridge the
    /// gap between several intervals of the other side. Intervals are therefore consumed in
    /// order of their start and folded into the last emitted interval whenever they touch it.
    pub fn union(&self, other: &Self) -> Self {
        let factory = self.factory();
        let mut output = SmallVec::new();
        let mut accumulator: Option<Interval<P>> = None;
        let mut left_iter = self.segments.iter().peekable();
        let mut right_iter = other.segments.iter().peekable();
        loop {
            let smaller_interval = match (left_iter.peek(), right_iter.peek()) {
                (Some(&&left), Some(&&right)) => {
                    if left.start() <= right.start() {
                        left_iter.next();
                        left
                    } else {
                        right_iter.next();
                        right
                    }
                }
                (Some(&&left), None) => {
                    left_iter.next();
                    left
                }
                (None, Some(&&right)) => {
                    right_iter.next();
                    right
                }
                (None, None) => break,
            };

            accumulator = Some(match accumulator {
                Some(last) if touches(last.end(), smaller_interval.start()) => {
                    trace!("union folds {smaller_interval:?} into {last:?}");
                    let hull = last.hull(&smaller_interval);
                    factory.derived_interval(hull.start(), hull.end())
                }
                Some(last) => {
                    output.push(last);
                    smaller_interval
                }
                None => smaller_interval,
            });
        }
        output.extend(accumulator);
        factory.assemble(output)
    }
}

// Growth and slicing ##########################################################

impl<P: Policy> Sequence<P> {
    /// The sequence with `value` added as its new maximum.
    ///
    /// Fails with [SequenceError::ConstraintViolation] if `P` does not admit `value` and with
    /// [SequenceError::NonMonotonicAppend] if `value` is not greater than the last value.
    pub fn append(&self, value: i64) -> Result<Self, SequenceError> {
        P::check(value)?;
        let factory = self.factory();
        let mut segments = self.segments.clone();
        if let Some(last) = segments.last_mut() {
            if last.end() >= value {
                return Err(SequenceError::NonMonotonicAppend {
                    value,
                    last: last.end(),
                });
            }
            if successor(last.end()) == Some(value) {
                *last = factory.interval(last.start(), value)?;
                return Ok(factory.assemble(segments));
            }
        }
        segments.push(factory.point(value)?);
        Ok(factory.assemble(segments))
    }

    /// The values strictly greater than `value`.
    pub fn after(&self, value: i64) -> Self {
        let factory = self.factory();
        let Some(first) = successor(value) else {
            return factory.empty();
        };
        let segments = self
            .segments
            .iter()
            .filter_map(|interval| {
                if interval.start() >= first {
                    Some(*interval)
                } else if interval.end() >= first {
                    Some(factory.derived_interval(first, interval.end()))
                } else {
                    None
                }
            })
            .collect();
        factory.assemble(segments)
    }

    /// The values lower than or equal to `last_value`.
    pub fn close(&self, last_value: i64) -> Self {
        let factory = self.factory();
        let mut segments = SmallVec::new();
        for interval in self.segments.iter() {
            if interval.start() > last_value {
                break;
            } else if interval.end() <= last_value {
                segments.push(*interval);
            } else {
                segments.push(factory.derived_interval(interval.start(), last_value));
                break;
            }
        }
        factory.assemble(segments)
    }
}

// Conversions #################################################################

impl<P: Policy> Debug for Sequence<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.segments.iter()).finish()
    }
}

impl<P: Policy> TryFrom<Vec<(i64, i64)>> for Sequence<P> {
    type Error = SequenceError;

    fn try_from(pairs: Vec<(i64, i64)>) -> Result<Self, Self::Error> {
        Self::from_pairs(pairs)
    }
}

impl<P: Policy> From<Sequence<P>> for Vec<(i64, i64)> {
    fn from(sequence: Sequence<P>) -> Self {
        sequence.segments.iter().map(Interval::as_pair).collect()
    }
}

impl<'a, P: Policy> IntoIterator for &'a Sequence<P> {
    type Item = &'a Interval<P>;
    type IntoIter = std::slice::Iter<'a, Interval<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

/// Generate non-negative sequences from a random vector of gaps and interval lengths.
///
/// Values stay small so that independently generated sequences interact.
#[cfg(any(feature = "proptest", test))]
pub fn proptest_strategy() -> impl Strategy<Value = NonNegativeSequence> {
    prop::collection::vec((0..12i64, 0..12i64), 0..10).prop_map(|runs| {
        let mut segments = SmallVec::new();
        let mut next_start = 0;
        for (gap, len) in runs {
            let start = next_start + gap;
            let end = start + len;
            segments.push(Interval::new_unchecked(start, end));
            // Leave at least one missing value before the next interval.
            next_start = end + 2;
        }
        Sequence { segments }.check_invariants()
    })
}
