//! General type definitions

/// A packed Morton code.
pub type CodeType = u64;

/// Number of bits available in a [`CodeType`].
pub const CODE_BITS: u32 = CodeType::BITS;

/// Errors raised while building a codec or packing values.
///
/// Unpacking never fails: every 64-bit word decodes to some lane tuple.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The `(dimensions, bits)` pair cannot describe a 64-bit code.
    #[error("can't build a codec with {dimensions} dimensions and {bits} bits")]
    Configuration {
        /// Requested number of lanes
        dimensions: usize,
        /// Requested bits per lane
        bits: u32,
    },

    /// The number of lanes supplied differs from the codec's dimension count.
    #[error("codec with {expected} dimensions received {received} values")]
    DimensionMismatch {
        /// Dimension count of the codec
        expected: usize,
        /// Number of lanes supplied
        received: usize,
    },

    /// A lane value is not representable in the codec's bits per lane.
    #[error("codec with {bits} bits per dimension received {value} in lane {lane}")]
    ValueRange {
        /// Index of the offending lane
        lane: usize,
        /// Offending value, widened so signed and unsigned inputs are reported exactly
        value: i128,
        /// Bits per lane of the codec
        bits: u32,
    },
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Check that `dimensions` lanes of `bits` bits fit in one code.
pub(crate) fn check_configuration(dimensions: usize, bits: u32) -> Result<()> {
    let fits = dimensions
        .checked_mul(bits as usize)
        .is_some_and(|total| total <= CODE_BITS as usize);

    if dimensions == 0 || bits == 0 || !fits {
        return Err(Error::Configuration { dimensions, bits });
    }
    Ok(())
}

/// Check that `received` lanes were supplied to a codec of `expected` dimensions.
pub(crate) fn check_dimensions(expected: usize, received: usize) -> Result<()> {
    if expected != received {
        return Err(Error::DimensionMismatch { expected, received });
    }
    Ok(())
}

/// Mask of the low `bits` bits, valid for `1 <= bits <= 64`.
pub(crate) fn low_mask(bits: u32) -> CodeType {
    CodeType::MAX >> (CODE_BITS - bits)
}
