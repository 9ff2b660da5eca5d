//! A module containing [`RawStorage`], the uninitialized block of memory underlying
//! [`DynamicArray`](super::DynamicArray).
//!
//! Nothing here is exposed outside of the crate, the storage is purely a capacity provider for the
//! collections which track which of its slots are initialized.

mod raw_storage;

pub(crate) use raw_storage::*;
