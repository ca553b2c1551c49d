//! Sign-magnitude mapping of signed lanes.
//!
//! A signed lane of `bits` bits stores its magnitude in the low `bits - 1` bits and the sign in
//! bit `bits - 1`. This is not two's complement: zero has a single representation, and the
//! representable range `(-2^(bits-1), 2^(bits-1))` is symmetric.
use crate::morton::codec::Codec;
use crate::types::{check_dimensions, CodeType, Error, Result};

#[inline]
fn sign_bit(bits: u32) -> u64 {
    1 << (bits - 1)
}

#[inline]
fn valid_width(bits: u32) -> bool {
    (1..=64).contains(&bits)
}

/// Map `value` to its sign-magnitude form in a lane of `bits` bits.
///
/// Returns `None` if `|value| >= 2^(bits-1)`, or if `bits` lies outside `1..=64`.
pub fn shift_sign(value: i64, bits: u32) -> Option<u64> {
    if !valid_width(bits) {
        return None;
    }

    let limit = 1i128 << (bits - 1);
    let wide = i128::from(value);
    if wide >= limit || wide <= -limit {
        return None;
    }

    if value < 0 {
        Some(value.unsigned_abs() | sign_bit(bits))
    } else {
        Some(value as u64)
    }
}

/// Recover a signed value from its sign-magnitude form in a lane of `bits` bits.
///
/// Inverse of [`shift_sign`]. Bits at or above `bits` are ignored, and a set sign bit with a
/// zero magnitude decodes to zero. Returns `None` if `bits` lies outside `1..=64`.
pub fn unshift_sign(value: u64, bits: u32) -> Option<i64> {
    valid_width(bits).then(|| decode_sign(value, bits))
}

/// Sign-magnitude decode for a width already validated by a codec.
#[inline]
pub(crate) fn decode_sign(value: u64, bits: u32) -> i64 {
    let sign = value & sign_bit(bits);
    let magnitude = (value & (sign_bit(bits) - 1)) as i64;
    if sign != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Map every lane of `values` to sign-magnitude form, reporting the first lane out of range.
pub(crate) fn shift_signs(values: &[i64], bits: u32) -> Result<Vec<u64>> {
    values
        .iter()
        .enumerate()
        .map(|(lane, &value)| {
            shift_sign(value, bits).ok_or(Error::ValueRange {
                lane,
                value: value.into(),
                bits,
            })
        })
        .collect()
}

impl Codec {
    /// Interleave signed `values`, one per lane, into a code.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `values.len() != dimensions`, and with
    /// [`Error::ValueRange`] if any `|value| >= 2^(bits-1)`.
    pub fn pack_signed(&self, values: &[i64]) -> Result<CodeType> {
        check_dimensions(self.dimensions, values.len())?;
        let lanes = shift_signs(values, self.bits)?;
        Ok(self.interleave(&lanes))
    }

    /// Separate a code into signed lanes.
    pub fn unpack_signed(&self, code: CodeType) -> Vec<i64> {
        (0..self.dimensions)
            .map(|lane| decode_sign(self.compact(code >> lane), self.bits))
            .collect()
    }

    /// Separate a code into signed lanes, writing them to `values`.
    ///
    /// Fails with [`Error::DimensionMismatch`] if `values.len() != dimensions`.
    pub fn unpack_signed_into(&self, code: CodeType, values: &mut [i64]) -> Result<()> {
        check_dimensions(self.dimensions, values.len())?;

        for (lane, value) in values.iter_mut().enumerate() {
            *value = decode_sign(self.compact(code >> lane), self.bits);
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_shift_sign() {
        assert_eq!(shift_sign(0, 32), Some(0));
        assert_eq!(shift_sign(5, 32), Some(5));
        assert_eq!(shift_sign(-1, 32), Some((1 << 31) | 1));
        assert_eq!(shift_sign(-1, 2), Some(0b11));
        assert_eq!(shift_sign(1, 2), Some(0b01));

        assert_eq!(shift_sign(2, 2), None);
        assert_eq!(shift_sign(-2, 2), None);
        assert_eq!(shift_sign(8, 4), None);
        assert_eq!(shift_sign(-8, 4), None);
    }

    #[test]
    fn test_single_bit_lanes_hold_zero() {
        assert_eq!(shift_sign(0, 1), Some(0));
        assert_eq!(shift_sign(1, 1), None);
        assert_eq!(shift_sign(-1, 1), None);
        assert_eq!(unshift_sign(1, 1), Some(0));
    }

    #[test]
    fn test_full_width_lanes() {
        assert_eq!(shift_sign(i64::MAX, 64), Some(i64::MAX as u64));
        assert_eq!(shift_sign(-i64::MAX, 64), Some(u64::MAX));
        assert_eq!(shift_sign(i64::MIN, 64), None);
        assert_eq!(unshift_sign(u64::MAX, 64), Some(-i64::MAX));
    }

    #[test]
    fn test_unshift_sign() {
        for bits in [2, 7, 21, 32, 63] {
            let max = (1i64 << (bits - 1)) - 1;
            for value in [-max, -1, 0, 1, max] {
                let mapped = shift_sign(value, bits).unwrap();
                assert!(mapped < 1 << bits);
                assert_eq!(unshift_sign(mapped, bits), Some(value));
            }
        }
    }

    #[test]
    fn test_negative_zero_decodes_to_zero() {
        assert_eq!(unshift_sign(1 << 31, 32), Some(0));
    }

    #[test]
    fn test_invalid_lane_widths() {
        for bits in [0, 65, u32::MAX] {
            assert_eq!(shift_sign(0, bits), None);
            assert_eq!(shift_sign(1, bits), None);
            assert_eq!(shift_sign(-1, bits), None);
            assert_eq!(unshift_sign(0, bits), None);
            assert_eq!(unshift_sign(1, bits), None);
        }
    }

    #[test]
    fn test_pack_signed() {
        let codec = Codec::new(2, 32).unwrap();
        let code = codec.pack_signed(&[-1, -2]).unwrap();
        assert_eq!(codec.unpack_signed(code), vec![-1, -2]);

        let code = codec.pack_signed(&[0, 0]).unwrap();
        assert_eq!(code, 0);
        assert_eq!(codec.unpack_signed(code), vec![0, 0]);

        let mut values = [0; 2];
        codec.unpack_signed_into(code, &mut values).unwrap();
        assert_eq!(values, [0, 0]);
    }

    #[test]
    fn test_pack_signed_rejects() {
        let codec = Codec::new(2, 2).unwrap();
        assert_eq!(
            codec.pack_signed(&[0, -2]),
            Err(Error::ValueRange {
                lane: 1,
                value: -2,
                bits: 2
            })
        );
        assert!(codec.pack_signed(&[2, 0]).is_err());
        assert_eq!(
            codec.pack_signed(&[0, 0, 0]),
            Err(Error::DimensionMismatch {
                expected: 2,
                received: 3
            })
        );
    }
}
