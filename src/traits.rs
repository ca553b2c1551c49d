//! Trait definitions
use crate::morton::codec::Codec;
use crate::morton::signed::{shift_signs, unshift_sign};
use crate::types::{check_dimensions, CodeType, Error, Result};

/// Interface of a Morton encoder for a fixed number of lanes and bits per lane.
///
/// Implementors must be `Sync`, as encoders are shared by the workers of the batched
/// routines in [`crate::batch`].
pub trait MortonEncoder: Sync {
    /// Number of lanes in a code
    fn dimensions(&self) -> usize;

    /// Bits per lane
    fn bits(&self) -> u32;

    /// Interleave one unsigned value per lane into a code.
    fn pack(&self, values: &[u64]) -> Result<CodeType>;

    /// Separate a code into `values`, which must hold exactly `dimensions()` lanes.
    fn unpack_into(&self, code: CodeType, values: &mut [u64]) -> Result<()>;

    /// Separate a code into its unsigned lanes.
    fn unpack(&self, code: CodeType) -> Result<Vec<u64>> {
        let mut values = vec![0; self.dimensions()];
        self.unpack_into(code, &mut values)?;
        Ok(values)
    }

    /// Interleave one signed value per lane into a code, using sign-magnitude lanes.
    fn pack_signed(&self, values: &[i64]) -> Result<CodeType> {
        check_dimensions(self.dimensions(), values.len())?;
        self.pack(&shift_signs(values, self.bits())?)
    }

    /// Separate a code into `values` as signed lanes, which must hold exactly `dimensions()`
    /// lanes.
    fn unpack_signed_into(&self, code: CodeType, values: &mut [i64]) -> Result<()> {
        let dimensions = self.dimensions();
        check_dimensions(dimensions, values.len())?;

        let bits = self.bits();
        let lanes = self.unpack(code)?;
        for (value, lane) in values.iter_mut().zip(lanes) {
            *value = unshift_sign(lane, bits).ok_or(Error::Configuration { dimensions, bits })?;
        }
        Ok(())
    }

    /// Separate a code into its signed lanes.
    fn unpack_signed(&self, code: CodeType) -> Result<Vec<i64>> {
        let mut values = vec![0; self.dimensions()];
        self.unpack_signed_into(code, &mut values)?;
        Ok(values)
    }
}

impl MortonEncoder for Codec {
    fn dimensions(&self) -> usize {
        Codec::dimensions(self)
    }

    fn bits(&self) -> u32 {
        Codec::bits(self)
    }

    fn pack(&self, values: &[u64]) -> Result<CodeType> {
        Codec::pack(self, values)
    }

    fn unpack_into(&self, code: CodeType, values: &mut [u64]) -> Result<()> {
        Codec::unpack_into(self, code, values)
    }

    fn unpack(&self, code: CodeType) -> Result<Vec<u64>> {
        Ok(Codec::unpack(self, code))
    }

    fn pack_signed(&self, values: &[i64]) -> Result<CodeType> {
        Codec::pack_signed(self, values)
    }

    fn unpack_signed_into(&self, code: CodeType, values: &mut [i64]) -> Result<()> {
        Codec::unpack_signed_into(self, code, values)
    }

    fn unpack_signed(&self, code: CodeType) -> Result<Vec<i64>> {
        Ok(Codec::unpack_signed(self, code))
    }
}
