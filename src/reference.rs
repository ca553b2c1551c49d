//! Bit by bit interleaving.
//!
//! [`ReferenceCodec`] moves one bit per operation. It is slow but obviously correct, and is
//! used to check [`Codec`](crate::Codec) and as a baseline in benchmarks.
use crate::traits::MortonEncoder;
use crate::types::{check_configuration, check_dimensions, low_mask, CodeType, Error, Result};

/// Morton encoder interleaving one bit at a time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ReferenceCodec {
    dimensions: usize,
    bits: u32,
}

impl ReferenceCodec {
    /// Create a reference codec, with the same validation as [`Codec::new`](crate::Codec::new).
    pub fn new(dimensions: usize, bits: u32) -> Result<Self> {
        check_configuration(dimensions, bits)?;
        Ok(Self { dimensions, bits })
    }

    /// Position of bit `bit` of lane `lane` in a code.
    fn position(&self, lane: usize, bit: u32) -> u32 {
        bit * self.dimensions as u32 + lane as u32
    }

    /// Gather the bits of lane `lane` from `code`.
    fn extract(&self, code: CodeType, lane: usize) -> u64 {
        (0..self.bits).fold(0, |value, bit| {
            value | (((code >> self.position(lane, bit)) & 1) << bit)
        })
    }
}

impl MortonEncoder for ReferenceCodec {
    fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn bits(&self) -> u32 {
        self.bits
    }

    fn pack(&self, values: &[u64]) -> Result<CodeType> {
        check_dimensions(self.dimensions, values.len())?;

        let mut code = 0;
        for (lane, &value) in values.iter().enumerate() {
            if value > low_mask(self.bits) {
                return Err(Error::ValueRange {
                    lane,
                    value: value.into(),
                    bits: self.bits,
                });
            }
            for bit in 0..self.bits {
                code |= ((value >> bit) & 1) << self.position(lane, bit);
            }
        }
        Ok(code)
    }

    fn unpack_into(&self, code: CodeType, values: &mut [u64]) -> Result<()> {
        check_dimensions(self.dimensions, values.len())?;

        for (lane, value) in values.iter_mut().enumerate() {
            *value = self.extract(code, lane);
        }
        Ok(())
    }
}
