//! Bindings for C

#![allow(missing_docs)]
#![allow(clippy::missing_safety_doc)]

use std::ptr;
use std::slice;

use log::warn;

use crate::morton::codec::Codec;
use crate::types::{CodeType, Error};

#[derive(Debug, PartialEq, Clone, Copy)]
#[repr(u8)]
pub enum MortonStatus {
    Ok = 0,
    ConfigurationError = 1,
    DimensionMismatch = 2,
    ValueRange = 3,
    NullPointer = 4,
}

impl From<&Error> for MortonStatus {
    fn from(err: &Error) -> Self {
        match err {
            Error::Configuration { .. } => MortonStatus::ConfigurationError,
            Error::DimensionMismatch { .. } => MortonStatus::DimensionMismatch,
            Error::ValueRange { .. } => MortonStatus::ValueRange,
        }
    }
}

fn status<T>(result: crate::types::Result<T>) -> MortonStatus {
    match result {
        Ok(_) => MortonStatus::Ok,
        Err(err) => MortonStatus::from(&err),
    }
}

/// Returns null if the configuration is invalid.
#[no_mangle]
pub extern "C" fn morton_codec_new(dimensions: usize, bits: u32) -> *mut Codec {
    match Codec::new(dimensions, bits) {
        Ok(codec) => Box::into_raw(Box::new(codec)),
        Err(err) => {
            warn!("{err}");
            ptr::null_mut()
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn morton_codec_free(codec: *mut Codec) {
    if !codec.is_null() {
        drop(unsafe { Box::from_raw(codec) })
    }
}

#[no_mangle]
pub unsafe extern "C" fn morton_codec_dimensions(codec: *const Codec) -> usize {
    match unsafe { codec.as_ref() } {
        Some(codec) => codec.dimensions(),
        None => 0,
    }
}

#[no_mangle]
pub unsafe extern "C" fn morton_codec_bits(codec: *const Codec) -> u32 {
    match unsafe { codec.as_ref() } {
        Some(codec) => codec.bits(),
        None => 0,
    }
}

#[no_mangle]
pub unsafe extern "C" fn morton_codec_pack(
    codec: *const Codec,
    values: *const u64,
    len: usize,
    code: *mut CodeType,
) -> MortonStatus {
    if codec.is_null() || values.is_null() || code.is_null() {
        return MortonStatus::NullPointer;
    }
    let codec = unsafe { &*codec };
    let values = unsafe { slice::from_raw_parts(values, len) };

    match codec.pack(values) {
        Ok(packed) => {
            unsafe { *code = packed };
            MortonStatus::Ok
        }
        Err(err) => MortonStatus::from(&err),
    }
}

#[no_mangle]
pub unsafe extern "C" fn morton_codec_unpack(
    codec: *const Codec,
    code: CodeType,
    values: *mut u64,
    len: usize,
) -> MortonStatus {
    if codec.is_null() || values.is_null() {
        return MortonStatus::NullPointer;
    }
    let codec = unsafe { &*codec };
    let values = unsafe { slice::from_raw_parts_mut(values, len) };

    status(codec.unpack_into(code, values))
}

#[no_mangle]
pub unsafe extern "C" fn morton_codec_pack_signed(
    codec: *const Codec,
    values: *const i64,
    len: usize,
    code: *mut CodeType,
) -> MortonStatus {
    if codec.is_null() || values.is_null() || code.is_null() {
        return MortonStatus::NullPointer;
    }
    let codec = unsafe { &*codec };
    let values = unsafe { slice::from_raw_parts(values, len) };

    match codec.pack_signed(values) {
        Ok(packed) => {
            unsafe { *code = packed };
            MortonStatus::Ok
        }
        Err(err) => MortonStatus::from(&err),
    }
}

#[no_mangle]
pub unsafe extern "C" fn morton_codec_unpack_signed(
    codec: *const Codec,
    code: CodeType,
    values: *mut i64,
    len: usize,
) -> MortonStatus {
    if codec.is_null() || values.is_null() {
        return MortonStatus::NullPointer;
    }
    let codec = unsafe { &*codec };
    let values = unsafe { slice::from_raw_parts_mut(values, len) };

    status(codec.unpack_signed_into(code, values))
}
