use std::alloc::{self, Layout};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant, TryInto};

/// An index was at or beyond the length of a collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The index that was requested.
    pub index: usize,
    /// The length of the collection at the time.
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// A requested capacity would need more than [`isize::MAX`] bytes, or couldn't be represented at
/// all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// The global allocator couldn't provide a block of memory.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("memory allocation of {} bytes failed", layout.size())]
pub struct AllocFailure {
    /// The layout of the block that was requested.
    #[error(not(source))]
    pub layout: Layout,
}

/// An element was removed from a collection with none left.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("attempted to remove an element from an empty collection")]
pub struct EmptyCollection;

/// The ways in which acquiring a block of memory for a collection can fail.
#[derive(Debug, Display, Error, From, TryInto, IsVariant, Clone, PartialEq, Eq)]
pub enum ReserveError {
    /// See [`CapacityOverflow`].
    CapacityOverflow(CapacityOverflow),
    /// See [`AllocFailure`].
    AllocFailure(AllocFailure),
}

impl ReserveError {
    /// Diverges in the way the standard collections do: capacity overflow panics, while a failed
    /// allocation is passed to [`alloc::handle_alloc_error`].
    ///
    /// # Panics
    /// Panics with the message of a [`CapacityOverflow`].
    pub fn handle(self) -> ! {
        match self {
            ReserveError::CapacityOverflow(error) => panic!("{}", error),
            ReserveError::AllocFailure(AllocFailure { layout }) => {
                alloc::handle_alloc_error(layout)
            },
        }
    }
}

/// An error produced while constructing the elements of a collection, either because the memory
/// for them couldn't be acquired or because producing the element at `index` failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructError<E> {
    /// Memory for the elements couldn't be acquired.
    Reserve(ReserveError),
    /// Constructing the element at `index` failed with `error`.
    Element {
        /// The index of the element.
        index: usize,
        /// The error produced while constructing it.
        error: E,
    },
}

impl<E> From<ReserveError> for ConstructError<E> {
    fn from(value: ReserveError) -> Self {
        ConstructError::Reserve(value)
    }
}

impl<E: Display> Display for ConstructError<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConstructError::Reserve(error) => write!(f, "{}", error),
            ConstructError::Element { index, error } => {
                write!(f, "Failed to construct element {}: {}", index, error)
            },
        }
    }
}

impl<E: Error + 'static> Error for ConstructError<E> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConstructError::Reserve(error) => Some(error),
            ConstructError::Element { error, .. } => Some(error),
        }
    }
}
