//! Parallel packing and unpacking of large buffers.
//!
//! Lanes are stored flat: a buffer for a codec with `D` dimensions holds `D` consecutive lanes
//! per code. Work is split across the rayon thread pool, and results are always returned in
//! input order.
use rayon::prelude::*;

use crate::traits::MortonEncoder;
use crate::types::{CodeType, Error, Result};

/// Options for the batched routines
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchOptions {
    /// Minimum number of codes each parallel task handles
    batch_size: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self { batch_size: 1024 }
    }
}

impl BatchOptions {
    /// Create options with the given batch size. A batch size of zero is treated as one.
    pub fn new(batch_size: usize) -> Self {
        let mut options = Self::default();
        options.set_batch_size(batch_size);
        options
    }

    /// Minimum number of codes each parallel task handles
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Set the minimum number of codes each parallel task handles
    pub fn set_batch_size(&mut self, batch_size: usize) {
        self.batch_size = batch_size.max(1);
    }
}

/// Check that a flat buffer of `len` lanes holds a whole number of codes.
fn check_lanes(dimensions: usize, len: usize) -> Result<()> {
    let trailing = len % dimensions;
    if trailing != 0 {
        return Err(Error::DimensionMismatch {
            expected: dimensions,
            received: trailing,
        });
    }
    Ok(())
}

/// Pack a flat buffer of unsigned lanes into codes.
///
/// Fails if `values.len()` is not a multiple of the encoder's dimension count, or if any lane
/// is out of range. A failure in any lane fails the whole batch.
pub fn pack_batch<E: MortonEncoder + ?Sized>(
    encoder: &E,
    values: &[u64],
    options: &BatchOptions,
) -> Result<Vec<CodeType>> {
    let dimensions = encoder.dimensions();
    check_lanes(dimensions, values.len())?;

    values
        .par_chunks_exact(dimensions)
        .with_min_len(options.batch_size)
        .map(|lanes| encoder.pack(lanes))
        .collect()
}

/// Pack a flat buffer of signed lanes into codes.
///
/// Fails under the same conditions as [`pack_batch`], using the signed range.
pub fn pack_signed_batch<E: MortonEncoder + ?Sized>(
    encoder: &E,
    values: &[i64],
    options: &BatchOptions,
) -> Result<Vec<CodeType>> {
    let dimensions = encoder.dimensions();
    check_lanes(dimensions, values.len())?;

    values
        .par_chunks_exact(dimensions)
        .with_min_len(options.batch_size)
        .map(|lanes| encoder.pack_signed(lanes))
        .collect()
}

/// Unpack codes into a flat buffer of unsigned lanes.
///
/// Each code is decoded into a buffer of exactly `dimensions()` lanes, so this only fails if
/// the encoder rejects a correctly sized buffer.
pub fn unpack_batch<E: MortonEncoder + ?Sized>(
    encoder: &E,
    codes: &[CodeType],
    options: &BatchOptions,
) -> Result<Vec<u64>> {
    let dimensions = encoder.dimensions();
    let mut values = vec![0; codes.len() * dimensions];

    values
        .par_chunks_mut(dimensions)
        .zip(codes.par_iter())
        .with_min_len(options.batch_size)
        .try_for_each(|(lanes, &code)| encoder.unpack_into(code, lanes))?;

    Ok(values)
}

/// Unpack codes into a flat buffer of signed lanes.
///
/// Fails under the same conditions as [`unpack_batch`].
pub fn unpack_signed_batch<E: MortonEncoder + ?Sized>(
    encoder: &E,
    codes: &[CodeType],
    options: &BatchOptions,
) -> Result<Vec<i64>> {
    let dimensions = encoder.dimensions();
    let mut values = vec![0; codes.len() * dimensions];

    values
        .par_chunks_mut(dimensions)
        .zip(codes.par_iter())
        .with_min_len(options.batch_size)
        .try_for_each(|(lanes, &code)| encoder.unpack_signed_into(code, lanes))?;

    Ok(values)
}
