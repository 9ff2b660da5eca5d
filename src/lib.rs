//! This crate provides a growable, contiguous array built directly on top of raw memory, rather
//! than on top of [`Vec`].
//!
//! # Purpose
//! The interesting part of a dynamic array isn't the indexing, it's the gap between "these bytes
//! are allocated" and "a value lives at this address". [`DynamicArray`] keeps that gap explicit:
//! a crate-private raw storage type owns a block of uninitialized memory and knows nothing about
//! its contents, while the array tracks how many slots at the start of the block are initialized
//! and is solely responsible for constructing, moving and dropping them.
//!
//! # Failure
//! Each operation documents what happens to the array if it fails part way through. Operations
//! which build a new block (construction, cloning, reallocating assignment) build it fully before
//! committing it with a swap, so a failure leaves the original untouched. Assigning into existing
//! elements only promises that the array remains valid.
//!
//! # Error Handling
//! It is more ergonomic for some functions to panic, because users don't want to be forced to
//! handle an error every time they push into an array. So every fallible method has a `try_`
//! counterpart which returns a [`Result`] instead.
//!
//! Errors are strongly typed, using enums for static dispatch rather than dynamic, with structs
//! (often ZSTs) that implement [`Error`](std::error::Error). They live in the [`error`] module.
//!
//! # Dependencies
//! This crate depends on some derive macros because they're helpful and remove the need for some
//! very repetitive programming. Allocation and growth are reported at `trace` level through the
//! [`log`] facade.
//!
//! [`DynamicArray`]: collections::contiguous::DynamicArray

// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

#[cfg(feature = "collections")]
pub mod collections;

pub use util::error;

pub(crate) mod util;
