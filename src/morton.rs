//! Morton codec: schedule construction, the transform engine and signed lane mapping.

pub mod codec;
pub mod fixed;
pub mod schedule;
pub mod signed;
pub mod transform;

pub use codec::Codec;
pub use schedule::{Schedule, Step};
pub use signed::{shift_sign, unshift_sign};
