//! Various general-purpose collection types.
//!
//! # Method
//! Applicable types here implement [`Deref<Target = [T]>`](std::ops::Deref) (and DerefMut), which
//! saves writing some of the more repetitive functionality, such as borrowed iteration and slice
//! indexing.

#[cfg(feature = "contiguous")]
pub mod contiguous;
