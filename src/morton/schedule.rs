//! Construction of the mask and shift schedule used to split and compact lanes.
use std::fmt;

use itertools::Itertools;

use crate::types::{check_configuration, low_mask, CodeType, Result};

/// One step of a schedule.
///
/// Splitting applies `value = (value | (value << lshift)) & mask`, compacting applies
/// `code = (code | (code >> rshift)) & mask`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Step {
    /// Bits that survive the step
    pub mask: CodeType,
    /// Shift applied when splitting
    pub lshift: u32,
    /// Shift applied when compacting
    pub rshift: u32,
}

/// Ordered steps spreading the bits of one lane so that consecutive bits end up `dimensions`
/// positions apart.
///
/// The first step is always the truncation to the lane width with an `lshift` of zero. The
/// remaining steps use descending powers of two, and a power of two is only present if it moves
/// at least one bit for this configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Schedule {
    steps: Vec<Step>,
}

/// Largest power of two not exceeding `value`, or zero if `value` is zero.
fn largest_power_of_two(value: u64) -> u64 {
    let mut value = value;
    value |= value >> 1;
    value |= value >> 2;
    value |= value >> 4;
    value |= value >> 8;
    value |= value >> 16;
    value |= value >> 32;
    value - (value >> 1)
}

impl Schedule {
    /// Compute the schedule for `dimensions` lanes of `bits` bits.
    pub fn new(dimensions: usize, bits: u32) -> Result<Self> {
        check_configuration(dimensions, bits)?;

        let dimensions = dimensions as u64;
        let bits = bits as u64;

        // A source bit at position `bit` travels `dimensions * bit - bit` places in total.
        let mut shift = largest_power_of_two(dimensions * (bits - 1));

        let mut splits: Vec<(CodeType, u64)> = vec![(low_mask(bits as u32), 0)];

        while shift > 0 {
            let mut mask: CodeType = 0;
            let mut moved = 0;

            for bit in 0..bits {
                let distance = dimensions * bit - bit;
                moved |= shift & distance;
                // Position of the bit once every shift down to this one has been applied.
                mask |= 1u64 << bit << (!(shift - 1) & distance);
            }

            if moved != 0 {
                splits.push((mask, shift));
            }

            shift >>= 1;
        }

        let rshifts = splits
            .iter()
            .skip(1)
            .map(|&(_, lshift)| lshift)
            .chain(std::iter::once(0));

        let steps = splits
            .iter()
            .zip(rshifts)
            .map(|(&(mask, lshift), rshift)| Step {
                mask,
                lshift: lshift as u32,
                rshift: rshift as u32,
            })
            .collect();

        Ok(Self { steps })
    }

    /// The steps in splitting order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of steps, including the truncation step.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// A schedule always holds at least the truncation step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Spread the low bits of `value` apart.
    #[inline]
    pub fn split(&self, value: CodeType) -> CodeType {
        self.steps.iter().fold(value, |value, step| {
            (value | (value << step.lshift)) & step.mask
        })
    }

    /// Gather every spread bit of `code` back into the low bits.
    #[inline]
    pub fn compact(&self, code: CodeType) -> CodeType {
        self.steps
            .iter()
            .rev()
            .fold(code, |code, step| (code | (code >> step.rshift)) & step.mask)
    }
}

impl fmt::Display for Schedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let steps = self
            .steps
            .iter()
            .map(|step| format!("{:#018x} << {}", step.mask, step.lshift))
            .join(", ");
        write!(f, "[{steps}]")
    }
}
