//! Aligned byte buffers backing fixed-width sequence storage.

pub mod buffer;

pub use buffer::TypedByteVec;
