// SPDX-License-Identifier: MPL-2.0

//! Interval notation for sequences of non-negative integers.
//!
//! A sequence is written as a comma separated list of its intervals in ascending order, each
//! interval being either a single value `v` or a range `v1-v2`:
//!
//! ```txt
//! 4-17,19-25,27,29-33,35
//! ```
//!
//! The empty sequence is written as the empty string. Parsing applies the same rules as
//! [from_pairs](crate::factory::SequenceFactory::from_pairs), so tokens exactly one apart such
//! as `3,4` are merged while overlapping tokens are rejected.

use std::fmt::{self, Display};
use std::str::FromStr;

use log::debug;

use crate::error::SequenceError;
use crate::factory::SequenceFactory;
use crate::policy::{NonNegative, Policy};
use crate::sequence::Sequence;

impl Display for Sequence<NonNegative> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, interval) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ",")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}

impl FromStr for Sequence<NonNegative> {
    type Err = SequenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SequenceFactory::<NonNegative>::new().parse(s)
    }
}

impl SequenceFactory<NonNegative> {
    /// Parse a sequence written in interval notation, e.g. `4-17,19-25,27`.
    pub fn parse(&self, text: &str) -> Result<Sequence<NonNegative>, SequenceError> {
        if text.trim().is_empty() {
            return Ok(self.empty());
        }
        let parsed = self.merge_pairs(text.split(',').map(parse_token));
        match &parsed {
            Ok(sequence) => debug!(
                "parsed {} intervals from interval notation",
                sequence.interval_count()
            ),
            Err(err) => debug!("rejected interval notation {text:?}: {err}"),
        }
        parsed
    }
}

/// Read a `v` or `v1-v2` token, splitting at the first `-`.
fn parse_token(token: &str) -> Result<(i64, i64), SequenceError> {
    let parse_bound = |part: &str| -> Result<i64, SequenceError> {
        let value = part
            .trim()
            .parse::<i64>()
            .map_err(|e| SequenceError::Malformed {
                token: token.to_string(),
                reason: e.to_string(),
            })?;
        // Negative bounds are reported before inverted ranges.
        NonNegative::check(value)?;
        Ok(value)
    };
    match token.split_once('-') {
        Some((start, end)) => Ok((parse_bound(start)?, parse_bound(end)?)),
        None => {
            let value = parse_bound(token)?;
            Ok((value, value))
        }
    }
}
