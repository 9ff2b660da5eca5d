use crate::util::error::CapacityOverflow;

/// The policy a [`DynamicArray`](super::DynamicArray) uses to pick a new capacity when it runs out
/// of room during a push.
///
/// An empty array grows to `initial`, after which the capacity is multiplied by `factor` each time
/// it fills up. The default, [`GrowthPolicy::DOUBLING`], produces the capacities `1, 2, 4, 8, ...`.
///
/// # Examples
/// ```
/// # use dynamic_array::collections::contiguous::GrowthPolicy;
/// let policy = GrowthPolicy::new(4, 3);
/// assert_eq!(policy.next_cap(0), Ok(4));
/// assert_eq!(policy.next_cap(4), Ok(12));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GrowthPolicy {
    initial: usize,
    factor: usize,
}

impl GrowthPolicy {
    /// Start at a single element and double from there.
    pub const DOUBLING: GrowthPolicy = GrowthPolicy::new(1, 2);

    /// Creates a new GrowthPolicy.
    ///
    /// # Panics
    /// Panics if `initial` is 0 or `factor` is less than 2, either of which would allow a push to
    /// "grow" without making room for another element.
    pub const fn new(initial: usize, factor: usize) -> GrowthPolicy {
        assert!(initial > 0, "Initial capacity of a growth policy must be non-zero!");
        assert!(factor >= 2, "Growth factor must be at least 2!");

        GrowthPolicy { initial, factor }
    }

    /// The capacity an empty collection grows to.
    pub const fn initial(&self) -> usize {
        self.initial
    }

    /// The multiplier applied to the capacity of a full, non-empty collection.
    pub const fn factor(&self) -> usize {
        self.factor
    }

    /// Calculates the capacity to grow to from `cap`. The result is always greater than `cap`.
    ///
    /// # Errors
    /// Returns [`CapacityOverflow`] if the new capacity doesn't fit in a [`usize`].
    pub const fn next_cap(&self, cap: usize) -> Result<usize, CapacityOverflow> {
        if cap == 0 {
            return Ok(self.initial);
        }

        match cap.checked_mul(self.factor) {
            Some(new_cap) => Ok(new_cap),
            None => Err(CapacityOverflow),
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::DOUBLING
    }
}
