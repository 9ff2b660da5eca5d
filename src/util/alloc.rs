//! Allocation bookkeeping for the storage layer, along with element types that are only useful for
//! testing how collections treat their contents.
#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::ops::{Deref, DerefMut};
use std::rc::Rc;

thread_local! {
    static LIVE_BLOCKS: Cell<isize> = const { Cell::new(0) };
    static FAIL_NEXT_ALLOC: Cell<bool> = const { Cell::new(false) };
    static TRIPWIRE_BUDGET: Cell<Option<usize>> = const { Cell::new(None) };
    static TRIPWIRE_LIVE: Cell<usize> = const { Cell::new(0) };
}

/// Records that a block has been allocated. Only tracked in test builds.
#[inline]
pub(crate) fn record_alloc() {
    if cfg!(test) {
        LIVE_BLOCKS.with(|c| c.set(c.get() + 1));
    }
}

/// Records that a block has been released. Only tracked in test builds.
#[inline]
pub(crate) fn record_dealloc() {
    if cfg!(test) {
        LIVE_BLOCKS.with(|c| c.set(c.get() - 1));
    }
}

/// Returns true if the next allocation should report failure, consuming the injected failure.
#[inline]
pub(crate) fn take_injected_failure() -> bool {
    cfg!(test) && FAIL_NEXT_ALLOC.with(|f| f.replace(false))
}

/// The number of blocks allocated by this thread which haven't been released yet. Blocks released
/// on a different thread to the one that allocated them make this negative on the releasing thread.
pub(crate) fn live_blocks() -> isize {
    LIVE_BLOCKS.with(Cell::get)
}

/// Makes the next allocation on this thread fail as though the allocator had returned null.
pub(crate) fn fail_next_alloc() {
    FAIL_NEXT_ALLOC.with(|f| f.set(true));
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ZeroSizedType;

#[derive(Debug, Clone)]
pub struct CountedDrop(pub Rc<RefCell<usize>>);

impl CountedDrop {
    pub fn new(value: usize) -> CountedDrop {
        CountedDrop(Rc::new(RefCell::new(value)))
    }
}

impl Deref for CountedDrop {
    type Target = Rc<RefCell<usize>>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for CountedDrop {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.replace_with(|v| *v + 1);
    }
}

/// An element which panics when constructed (via [`Default`] or [`Clone`]) once the budget set
/// with [`Tripwire::arm`] runs out. All live instances on the current thread are counted.
#[derive(Debug, PartialEq)]
pub struct Tripwire(pub usize);

impl Tripwire {
    /// Allow `successes` more constructions before panicking.
    pub fn arm(successes: usize) {
        TRIPWIRE_BUDGET.with(|b| b.set(Some(successes)));
    }

    pub fn disarm() {
        TRIPWIRE_BUDGET.with(|b| b.set(None));
    }

    pub fn live() -> usize {
        TRIPWIRE_LIVE.with(Cell::get)
    }

    fn spend() {
        TRIPWIRE_BUDGET.with(|b| match b.get() {
            Some(0) => panic!("tripwire triggered"),
            Some(n) => b.set(Some(n - 1)),
            None => (),
        });
    }

    pub fn new(value: usize) -> Tripwire {
        Tripwire::spend();
        TRIPWIRE_LIVE.with(|c| c.set(c.get() + 1));
        Tripwire(value)
    }
}

impl Default for Tripwire {
    fn default() -> Self {
        Tripwire::new(0)
    }
}

impl Clone for Tripwire {
    fn clone(&self) -> Self {
        Tripwire::new(self.0)
    }

    fn clone_from(&mut self, source: &Self) {
        // Assignment trips in the same way as construction, without changing the live count.
        Tripwire::spend();
        self.0 = source.0;
    }
}

impl Drop for Tripwire {
    fn drop(&mut self) {
        TRIPWIRE_LIVE.with(|c| c.set(c.get() - 1));
    }
}
