//! # Generalised Morton codes
//!
//! Interleave the bits of `D` unsigned integers of `B` bits each into a single 64-bit code
//! (a Morton, or Z-order, code), and separate them again. Any `D * B <= 64` is supported.
//!
//! A [`Codec`] is built once per `(D, B)` pair. Construction precomputes a short schedule of
//! mask and shift steps (the "magic bits" method), so that packing and unpacking a lane costs
//! `O(log B)` word operations rather than one operation per bit.
//!
//! ```
//! use morton64::Codec;
//!
//! let codec = Codec::new(2, 32)?;
//! let code = codec.pack(&[1, 2])?;
//! assert_eq!(code, 0b1001);
//! assert_eq!(codec.unpack(code), vec![1, 2]);
//!
//! let code = codec.pack_signed(&[-1, -2])?;
//! assert_eq!(codec.unpack_signed(code), vec![-1, -2]);
//! # Ok::<(), morton64::Error>(())
//! ```
//!
//! A codec never changes after construction and is `Send + Sync`, so a single instance can be
//! shared between any number of threads. The [`batch`] module uses this to encode large
//! buffers in parallel.
//!
//! ## References
//! \[1\] Anderson, S. E. "Bit Twiddling Hacks", section "Interleave bits by Binary Magic Numbers".
//!
//! \[2\] Morton, G. M. "A computer oriented geodetic data base and a new technique in file
//! sequencing." IBM Technical Report (1966).
#![cfg_attr(feature = "strict", deny(warnings))]
#![warn(missing_docs)]

pub mod batch;
pub mod bindings;
pub mod morton;
pub mod reference;
pub mod traits;
pub mod types;

pub use batch::BatchOptions;
pub use morton::codec::Codec;
pub use reference::ReferenceCodec;
pub use traits::MortonEncoder;
pub use types::{CodeType, Error, Result};
