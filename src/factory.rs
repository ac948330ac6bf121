// SPDX-License-Identifier: MPL-2.0

//! Construction of intervals and sequences for a given [Policy].
//!
//! A [SequenceFactory] is the single place where new intervals and sequences come into existence.
//! Sequences remember the factory they were built with (through their type parameter) and every
//! algebra operation builds its result through that same factory, so the constraints of the
//! variant hold for every derived value.
//!
//! There are two ways to build a sequence from a list of intervals, and they do not agree on
//! adjacent input:
//!  - [from_pairs](SequenceFactory::from_pairs) takes raw `(start, end)` pairs and merges a pair
//!    starting exactly one after the previous end into it, while rejecting real overlaps.
//!  - [from_intervals](SequenceFactory::from_intervals) takes validated intervals and rejects any
//!    adjacency or overlap, merging nothing.
//!
//! The difference is kept on purpose so callers can rely on either behavior, but it is likely an
//! accident of history rather than a meaningful contract.

use std::marker::PhantomData;

use log::trace;
use smallvec::SmallVec;

use crate::error::SequenceError;
use crate::interval::{successor, touches, Interval};
use crate::policy::{NonNegative, Policy, Unconstrained};
use crate::sequence::{Segments, Sequence};

/// Builds intervals and sequences whose values are admitted by `P`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct SequenceFactory<P: Policy> {
    policy: PhantomData<P>,
}

/// Factory for sequences of arbitrary integers.
pub type IntegerSequenceFactory = SequenceFactory<Unconstrained>;

/// Factory for sequences of non-negative integers.
pub type NonNegativeSequenceFactory = SequenceFactory<NonNegative>;

impl<P: Policy> SequenceFactory<P> {
    /// The factory of policy `P`.
    pub const fn new() -> Self {
        Self {
            policy: PhantomData,
        }
    }

    // Intervals ###############################################################

    /// Validated interval `[start, end]`.
    pub fn interval(&self, start: i64, end: i64) -> Result<Interval<P>, SequenceError> {
        Interval::new(start, end)
    }

    /// Validated interval `[value, value]`.
    pub fn point(&self, value: i64) -> Result<Interval<P>, SequenceError> {
        Interval::point(value)
    }

    /// Interval whose bounds lie within intervals already admitted by `P`.
    pub(crate) fn derived_interval(&self, start: i64, end: i64) -> Interval<P> {
        debug_assert!(
            P::admits(start) && P::admits(end),
            "derived interval [{start}-{end}] escapes the policy"
        );
        Interval::new_unchecked(start, end)
    }

    // Sequences ###############################################################

    /// Sequence without any value.
    pub fn empty(&self) -> Sequence<P> {
        Sequence::from_segments(SmallVec::new())
    }

    /// Sequence holding exactly `value`.
    pub fn singleton(&self, value: i64) -> Result<Sequence<P>, SequenceError> {
        let mut segments = SmallVec::new();
        segments.push(self.point(value)?);
        Ok(self.assemble(segments))
    }

    /// Sequence from `(start, end)` pairs given in ascending order.
    ///
    /// A pair starting exactly one after the end of the previous pair is merged into it. Pairs
    /// that overlap or are out of order fail with [SequenceError::Overlap].
    pub fn from_pairs<I>(&self, pairs: I) -> Result<Sequence<P>, SequenceError>
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        self.merge_pairs(pairs.into_iter().map(Ok))
    }

    /// Sequence from rows of bounds, each of which must hold exactly `[start, end]`.
    ///
    /// Apart from the arity check this follows the rules of [from_pairs](Self::from_pairs).
    pub fn from_arrays<I, R>(&self, rows: I) -> Result<Sequence<P>, SequenceError>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[i64]>,
    {
        self.merge_pairs(rows.into_iter().map(|row| match row.as_ref() {
            [start, end] => Ok((*start, *end)),
            bounds => Err(SequenceError::InvalidArity { len: bounds.len() }),
        }))
    }

    /// Sequence from validated intervals given in ascending order.
    ///
    /// Every pair of consecutive intervals must leave at least one value between them, otherwise
    /// this fails with [SequenceError::Overlap]. Nothing is merged.
    pub fn from_intervals<I>(&self, intervals: I) -> Result<Sequence<P>, SequenceError>
    where
        I: IntoIterator<Item = Interval<P>>,
    {
        let mut segments: Segments<P> = SmallVec::new();
        for interval in intervals {
            if let Some(previous) = segments.last() {
                if touches(previous.end(), interval.start()) {
                    return Err(SequenceError::Overlap {
                        previous: previous.as_pair(),
                        next: interval.as_pair(),
                    });
                }
            }
            segments.push(interval);
        }
        Ok(self.assemble(segments))
    }

    /// Collapse an ascending list of values into the fewest intervals covering them.
    ///
    /// Values that are not strictly ascending fail with [SequenceError::Overlap].
    pub fn to_sequence<I>(&self, values: I) -> Result<Sequence<P>, SequenceError>
    where
        I: IntoIterator<Item = i64>,
    {
        let mut intervals = Vec::new();
        let mut run: Option<Interval<P>> = None;
        for value in values {
            run = Some(match run {
                Some(current) if successor(current.end()) == Some(value) => {
                    self.interval(current.start(), value)?
                }
                Some(current) => {
                    intervals.push(current);
                    self.point(value)?
                }
                None => self.point(value)?,
            });
        }
        intervals.extend(run);
        self.from_intervals(intervals)
    }

    /// Shared implementation of raw pair construction.
    pub(crate) fn merge_pairs<I>(&self, pairs: I) -> Result<Sequence<P>, SequenceError>
    where
        I: Iterator<Item = Result<(i64, i64), SequenceError>>,
    {
        let mut segments: Segments<P> = SmallVec::new();
        for pair in pairs {
            let (start, end) = pair?;
            let interval = self.interval(start, end)?;
            if let Some(previous) = segments.last_mut() {
                if previous.end() >= start {
                    return Err(SequenceError::Overlap {
                        previous: previous.as_pair(),
                        next: (start, end),
                    });
                }
                if successor(previous.end()) == Some(start) {
                    trace!("merging adjacent pairs {previous:?} and {interval:?}");
                    *previous = self.derived_interval(previous.start(), end);
                    continue;
                }
            }
            segments.push(interval);
        }
        Ok(self.assemble(segments))
    }

    /// Wrap segments computed by an operation into a sequence of this factory.
    pub(crate) fn assemble(&self, segments: Segments<P>) -> Sequence<P> {
        Sequence::from_segments(segments).check_invariants()
    }
}
