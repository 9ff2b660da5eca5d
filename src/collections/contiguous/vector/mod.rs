//! A module containing [`DynamicArray`] and associated types.
//!
//! [`IntoIter`] provides owned iteration over a DynamicArray, while [`IterMut`](std::slice::IterMut)
//! and [`Iter`](std::slice::Iter) from [`std::slice`] are used for borrowed iteration.
//! [`GrowthPolicy`] decides how the capacity increases when a push runs out of room.
//!
//! [`DynamicArray`] is also re-exported under the parent module.

mod growth;
mod iter;
mod tests;
mod vector;

pub use growth::*;
pub use iter::*;
pub use vector::*;
