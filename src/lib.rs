// SPDX-License-Identifier: MPL-2.0

//! Compact sets of integers stored as disjoint, non-adjacent closed intervals.
//!
//! Version numbers and record identifiers in a data-curation pipeline tend to come in long runs.
//! Instead of storing every element, a [Sequence] stores the minimal list of closed intervals
//! covering them, so that questions such as "is version 17 present" or "what was visible as of
//! version 25" are answered in time proportional to the number of intervals.
//!
//! # Building sequences
//!
//! You can construct a sequence from one of the following building blocks:
//!  - [empty()](Sequence::empty): no value
//!  - [singleton(v)](Sequence::singleton): only the value v
//!  - [from_pairs(pairs)](Sequence::from_pairs): ascending `(start, end)` pairs, merging pairs
//!    exactly one apart
//!  - [from_intervals(intervals)](Sequence::from_intervals): ascending validated intervals,
//!    rejecting any adjacency
//!  - [from_sorted_values(values)](Sequence::from_sorted_values): ascending individual values
//!  - the interval notation `4-17,19-25,27` through [str::parse] for [NonNegativeSequence]
//!
//! All other sequences are unions, intersections, appends and slices of these.
//!
//! # Policies
//!
//! Sequences are generic over a [Policy] constraining the values they may hold. The policy is
//! checked on every bound of every interval, and every operation builds its result through the
//! [SequenceFactory] of that same policy, so for instance the union of two
//! [NonNegativeSequence]s is again a [NonNegativeSequence].
//!
//! # Basic example
//!
//! ```
//! use intseq::NonNegativeSequence;
//!
//! let visible: NonNegativeSequence = "2-5,7-9".parse()?;
//! assert!(visible.contains(8));
//! assert_eq!(visible.after(6).to_string(), "7-9");
//! assert_eq!(visible.close(7).to_string(), "2-5,7");
//!
//! let grown = visible.append(10)?.append(12)?;
//! assert_eq!(grown.to_string(), "2-5,7-10,12");
//! assert_eq!(grown.length(), 9);
//! # Ok::<(), intseq::SequenceError>(())
//! ```
//!
//! # Errors
//!
//! Every constructor validates eagerly and reports a [SequenceError]. Its [kind](SequenceError::kind)
//! distinguishes inverted ranges, policy violations, overlapping input, non-monotonic appends,
//! first/last values of an empty sequence and unreadable interval notation.
//!
//! ## Optional features
//!
//! * `serde`: serialization and deserialization of intervals as `(start, end)` pairs and of
//!   sequences as lists of pairs. Deserialization goes through the same validation as
//!   [from_pairs](Sequence::from_pairs).
//! * `proptest`: exports `proptest_strategy()` generating valid [NonNegativeSequence]s.

#![warn(missing_docs)]

pub mod error;
pub mod factory;
pub mod interval;
pub mod policy;
pub mod sequence;
mod text;

pub use error::{ErrorKind, SequenceError};
pub use factory::{IntegerSequenceFactory, NonNegativeSequenceFactory, SequenceFactory};
pub use interval::{IntegerInterval, Interval, NonNegativeInterval};
pub use policy::{NonNegative, Policy, Unconstrained};
#[cfg(feature = "proptest")]
pub use sequence::proptest_strategy;
pub use sequence::{IntegerSequence, NonNegativeSequence, Sequence};
