//! Capacity configuration for `IntVec`.

/// Capacity reserved by `IntVec::new()`.
pub const DEFAULT_INITIAL_CAPACITY: usize = 4;

/// Smallest capacity a vector ever holds.
///
/// A zero-capacity vector could never grow by doubling, so this is at
/// least 1.
pub const DEFAULT_MIN_CAPACITY: usize = 1;

/// Configuration for vector capacity management.
///
/// Both values are clamped on construction: `min_capacity >= 1` and
/// `initial_capacity >= min_capacity`.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct IntVecConfig {
    /// Capacity reserved when the vector is created.
    initial_capacity: usize,
    /// Floor for shrinking, and the capacity an empty buffer grows to.
    min_capacity: usize,
}

impl Default for IntVecConfig {
    fn default() -> Self {
        IntVecConfig {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            min_capacity: DEFAULT_MIN_CAPACITY,
        }
    }
}

impl IntVecConfig {
    /// Create a config with the default capacities.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity, raised to `min_capacity` if smaller.
    #[must_use]
    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity.max(self.min_capacity);
        self
    }

    /// Set the minimum capacity (at least 1).
    ///
    /// Raises the initial capacity too if it would fall below the new floor.
    #[must_use]
    pub fn with_min_capacity(mut self, min_capacity: usize) -> Self {
        self.min_capacity = min_capacity.max(1);
        self.initial_capacity = self.initial_capacity.max(self.min_capacity);
        self
    }

    #[inline]
    pub fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }

    #[inline]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }
}
