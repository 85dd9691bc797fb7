//! Repeated-block number filter.
//!
//! Sums every number inside a set of inclusive ranges whose decimal form is a
//! shorter block written out several times, such as `6464` or `123123123`.

use std::sync::OnceLock;

use log::{debug, trace};
use regex::Regex;

use crate::error::{Error, Result};

/// Example input shipped with the puzzle.
pub const EXAMPLE: &str = include_str!("../fixtures/repeats.txt");

/// Known `(part1, part2)` answers for [`EXAMPLE`].
pub const EXAMPLE_ANSWERS: (u64, u64) = (1_227_775_554, 4_174_379_265);

/// Inclusive range of candidate numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdRange {
    pub min: u64,
    pub max: u64,
}

impl IdRange {
    pub fn new(min: u64, max: u64) -> Result<Self> {
        if min > max {
            return Err(Error::InvalidInput(format!(
                "range {min}-{max} is reversed"
            )));
        }
        Ok(Self { min, max })
    }
}

/// How many copies of a block a number must consist of.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Repetition {
    /// Exactly two copies, e.g. `1212`.
    Twice,
    /// Two or more copies, e.g. `1212` or `121212`.
    AtLeastTwice,
}

impl Repetition {
    pub fn matches(self, number: u64) -> bool {
        let digits = number.to_string();
        match self {
            Repetition::Twice => is_doubled(&digits),
            Repetition::AtLeastTwice => is_repeated(&digits),
        }
    }
}

/// Extract every `<digits>-<digits>` token from `input`, in order.
pub fn parse_ranges(input: &str) -> Result<Vec<IdRange>> {
    static RE_RANGE: OnceLock<Regex> = OnceLock::new();
    let re = RE_RANGE.get_or_init(|| Regex::new(r"([0-9]+)-([0-9]+)").unwrap());

    let ranges = re
        .captures_iter(input)
        .map(|caps| {
            let bound = |i: usize| {
                caps[i]
                    .parse::<u64>()
                    .map_err(|e| Error::InvalidInput(format!("range {}: {}", &caps[0], e)))
            };
            IdRange::new(bound(1)?, bound(2)?)
        })
        .collect::<Result<Vec<_>>>()?;

    debug!("parsed {} ranges", ranges.len());
    Ok(ranges)
}

/// `true` when `digits` is some block followed by an identical copy.
pub fn is_doubled(digits: &str) -> bool {
    let len = digits.len();
    len % 2 == 0 && len > 0 && digits[..len / 2] == digits[len / 2..]
}

/// `true` when `digits` is some block repeated two or more times.
pub fn is_repeated(digits: &str) -> bool {
    let len = digits.len();
    (1..=len / 2)
        .filter(|block| len % block == 0)
        .any(|block| {
            let head = &digits[..block];
            digits
                .as_bytes()
                .chunks(block)
                .all(|chunk| chunk == head.as_bytes())
        })
}

/// Sum every number in `ranges` that satisfies `repetition`.
///
/// A total that doesn't fit in a `u64` is rejected rather than wrapped.
pub fn sum_matching(ranges: &[IdRange], repetition: Repetition) -> Result<u64> {
    let overflow = || {
        Error::InvalidInput(format!("{repetition:?} sum does not fit in 64 bits"))
    };

    let total = ranges.iter().try_fold(0u64, |total, range| {
        let sum = (range.min..=range.max)
            .filter(|&number| repetition.matches(number))
            .try_fold(0u64, |sum, number| sum.checked_add(number))
            .ok_or_else(overflow)?;
        trace!("{}-{} {repetition:?}: {sum}", range.min, range.max);
        total.checked_add(sum).ok_or_else(overflow)
    })?;

    debug!("{repetition:?} total: {total}");
    Ok(total)
}

/// Parse `input` and compute both answers.
pub fn solve(input: &str) -> Result<(u64, u64)> {
    let ranges = parse_ranges(input)?;
    Ok((
        sum_matching(&ranges, Repetition::Twice)?,
        sum_matching(&ranges, Repetition::AtLeastTwice)?,
    ))
}
