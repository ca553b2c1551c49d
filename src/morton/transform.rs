//! Splitting, compacting, packing and unpacking of unsigned lanes.
use crate::morton::codec::Codec;
use crate::types::{check_dimensions, CodeType, Error, Result};

impl Codec {
    /// Spread the bits of `value` so that bit `i` lands on bit `i * dimensions`.
    ///
    /// Bits of `value` at or above `bits` are discarded.
    #[inline]
    pub fn split(&self, value: CodeType) -> CodeType {
        self.schedule.split(value)
    }

    /// Gather bits `0, dimensions, 2 * dimensions, ...` of `code` into a contiguous value.
    ///
    /// Inverse of [`Codec::split`]. All other bits of `code` are ignored.
    #[inline]
    pub fn compact(&self, code: CodeType) -> CodeType {
        self.schedule.compact(code)
    }

    /// Interleave `values`, one per lane, into a code. Lane `i` occupies bits
    /// `i, i + dimensions, i + 2 * dimensions, ...` of the result.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `values.len() != dimensions`, and with
    /// [`Error::ValueRange`] if any value is `>= 2^bits`. Nothing is packed unless every lane is
    /// valid.
    pub fn pack(&self, values: &[u64]) -> Result<CodeType> {
        check_dimensions(self.dimensions, values.len())?;

        let max = self.max_value();
        if let Some((lane, &value)) = values.iter().enumerate().find(|&(_, &value)| value > max) {
            return Err(Error::ValueRange {
                lane,
                value: value.into(),
                bits: self.bits,
            });
        }

        Ok(self.interleave(values))
    }

    /// Interleave lanes already known to be in range.
    #[inline]
    pub(crate) fn interleave(&self, values: &[u64]) -> CodeType {
        values
            .iter()
            .enumerate()
            .fold(0, |code, (lane, &value)| code | (self.split(value) << lane))
    }

    /// Separate a code into its lanes.
    ///
    /// Every code decodes, including codes never produced by [`Codec::pack`]; bits above
    /// `dimensions * bits` are ignored.
    pub fn unpack(&self, code: CodeType) -> Vec<u64> {
        (0..self.dimensions)
            .map(|lane| self.compact(code >> lane))
            .collect()
    }

    /// Separate a code into its lanes, writing them to `values`.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `values.len() != dimensions`.
    pub fn unpack_into(&self, code: CodeType, values: &mut [u64]) -> Result<()> {
        check_dimensions(self.dimensions, values.len())?;

        for (lane, value) in values.iter_mut().enumerate() {
            *value = self.compact(code >> lane);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_split() {
        let codec = Codec::new(2, 32).unwrap();
        assert_eq!(codec.split(0b1011), 0b1000101);
        assert_eq!(codec.split(u32::MAX as u64), 0x5555_5555_5555_5555);

        let codec = Codec::new(3, 21).unwrap();
        assert_eq!(codec.split(0b11), 0b1001);
        // Bits beyond the lane width are dropped.
        assert_eq!(codec.split(1 << 21), 0);
    }

    #[test]
    fn test_compact() {
        let codec = Codec::new(2, 32).unwrap();
        assert_eq!(codec.compact(0b1000101), 0b1011);
        // Odd bits belong to the other lane.
        assert_eq!(codec.compact(0xaaaa_aaaa_aaaa_aaaa), 0);
        assert_eq!(codec.compact(u64::MAX), u32::MAX as u64);
    }

    #[test]
    fn test_pack_layout() {
        let codec = Codec::new(2, 32).unwrap();
        assert_eq!(codec.pack(&[1, 2]).unwrap(), 0b1001);
        assert_eq!(codec.pack(&[2, 1]).unwrap(), 0b0110);

        let codec = Codec::new(3, 21).unwrap();
        assert_eq!(codec.pack(&[1, 1, 1]).unwrap(), 0b111);
        assert_eq!(codec.pack(&[0, 0, 2]).unwrap(), 0b100000);
    }

    #[test]
    fn test_pack_unpack() {
        let codec = Codec::new(2, 32).unwrap();
        let max = (1 << 32) - 1;
        let code = codec.pack(&[max, max]).unwrap();
        assert_eq!(code, u64::MAX);
        assert_eq!(codec.unpack(code), vec![max, max]);

        let codec = Codec::new(6, 10).unwrap();
        let values = [1, 2, 4, 8, 16, 32];
        assert_eq!(codec.unpack(codec.pack(&values).unwrap()), values);
    }

    #[test]
    fn test_pack_rejects_dimensions() {
        let codec = Codec::new(2, 32).unwrap();
        assert_eq!(
            codec.pack(&[1, 2, 3]),
            Err(Error::DimensionMismatch {
                expected: 2,
                received: 3
            })
        );
        assert_eq!(
            codec.pack(&[1]),
            Err(Error::DimensionMismatch {
                expected: 2,
                received: 1
            })
        );
    }

    #[test]
    fn test_pack_rejects_values() {
        let codec = Codec::new(2, 1).unwrap();
        assert_eq!(
            codec.pack(&[0, 2]),
            Err(Error::ValueRange {
                lane: 1,
                value: 2,
                bits: 1
            })
        );

        // Arity is checked before range.
        assert!(matches!(
            codec.pack(&[2, 2, 2]),
            Err(Error::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_unpack_ignores_spare_bits() {
        let codec = Codec::new(3, 21).unwrap();
        assert_eq!(codec.unpack(1 << 63), vec![0, 0, 0]);
    }

    #[test]
    fn test_unpack_into() {
        let codec = Codec::new(4, 16).unwrap();
        let code = codec.pack(&[8, 4, 2, 1]).unwrap();

        let mut values = [0; 4];
        codec.unpack_into(code, &mut values).unwrap();
        assert_eq!(values, [8, 4, 2, 1]);

        let mut short = [0; 3];
        assert!(codec.unpack_into(code, &mut short).is_err());
    }
}
