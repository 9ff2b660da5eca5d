//! Contiguous collection types. Namely [`DynamicArray`], a growable array which manages the
//! lifecycle of its elements within a block of raw storage.
#![warn(missing_docs)]

pub(crate) mod storage;
pub mod vector;

#[doc(inline)]
pub use vector::{DynamicArray, GrowthPolicy};
