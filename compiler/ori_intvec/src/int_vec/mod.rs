//! The `IntVec` list type.
//!
//! Storage is a `Vec<i64>` whose length is the list length. The logical
//! capacity is tracked separately so growth and shrink follow the exact
//! doubling/halving thresholds of the runtime list, independent of the
//! allocator's own rounding.

use std::fmt;

use crate::config::{IntVecConfig, DEFAULT_INITIAL_CAPACITY};
use crate::error::{IntVecError, IntVecResult};
use crate::growth::{grown_capacity, shrunk_capacity};

/// Growable list of `i64` with negative indexing.
///
/// # Layout
///
/// ```text
/// items: [e0, e1, ..., e(len-1), <reserved> ...]
///         ^                      ^              ^
///         0                      len            cap
/// ```
///
/// `len <= cap` always, and the backing buffer holds room for `cap`
/// elements. Index `-1` names the last element, `-len` the first.
pub struct IntVec {
    /// Live elements; `items.len()` is the list length.
    items: Vec<i64>,
    /// Logical capacity. `items.capacity() >= cap`.
    cap: usize,
    config: IntVecConfig,
}

impl IntVec {
    /// Create an empty list with the default capacity.
    pub fn new() -> Self {
        IntVec {
            items: Vec::with_capacity(DEFAULT_INITIAL_CAPACITY),
            cap: DEFAULT_INITIAL_CAPACITY,
            config: IntVecConfig::default(),
        }
    }

    /// Create an empty list reserving room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> IntVecResult<Self> {
        Self::with_config(IntVecConfig::new().with_initial_capacity(capacity))
    }

    /// Create an empty list using the given capacity configuration.
    pub fn with_config(config: IntVecConfig) -> IntVecResult<Self> {
        let cap = config.initial_capacity();
        let mut items = Vec::new();
        reserve_storage(&mut items, cap)?;
        Ok(IntVec { items, cap, config })
    }

    /// Create a list holding a copy of `values`.
    ///
    /// Values are appended one by one, so the capacity is the one the
    /// doubling rule reaches from the default.
    pub fn from_slice(values: &[i64]) -> IntVecResult<Self> {
        let mut list = Self::new();
        for &value in values {
            list.append(value)?;
        }
        Ok(list)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the logical capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub fn config(&self) -> &IntVecConfig {
        &self.config
    }

    #[inline]
    pub fn as_slice(&self) -> &[i64] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, i64> {
        self.items.iter()
    }

    pub fn contains(&self, value: i64) -> bool {
        self.items.contains(&value)
    }

    pub fn to_vec(&self) -> Vec<i64> {
        self.items.clone()
    }

    /// Resolve `index` to a slot in `0..len`.
    ///
    /// Negative indices count from the end (`-1` is the last element).
    /// Anything still outside `0..len` after wraparound is rejected with
    /// [`IntVecError::IndexOutOfBounds`], carrying both the index as passed
    /// and the wrapped index.
    pub fn resolve_index(&self, index: i64) -> IntVecResult<usize> {
        let len = self.items.len();
        // `len >= 0` and `index < 0`, so the sum cannot overflow.
        let resolved = if index < 0 {
            i64::try_from(len).unwrap_or(i64::MAX) + index
        } else {
            index
        };

        match usize::try_from(resolved) {
            Ok(slot) if slot < len => Ok(slot),
            _ => {
                tracing::debug!(index, resolved, len, "int list index out of bounds");
                Err(IntVecError::IndexOutOfBounds {
                    length: len,
                    requested: index,
                    resolved,
                })
            }
        }
    }

    /// Read the element at `index`.
    pub fn get(&self, index: i64) -> IntVecResult<i64> {
        let slot = self.resolve_index(index)?;
        Ok(self.items[slot])
    }

    /// Overwrite the element at `index`.
    pub fn set(&mut self, index: i64, value: i64) -> IntVecResult<()> {
        let slot = self.resolve_index(index)?;
        self.items[slot] = value;
        Ok(())
    }

    /// Push `value` onto the end, doubling capacity first if full.
    ///
    /// On allocation failure the list is left unchanged.
    pub fn append(&mut self, value: i64) -> IntVecResult<()> {
        if self.items.len() >= self.cap {
            let new_cap = grown_capacity(self.cap, self.config.min_capacity());
            reserve_storage(&mut self.items, new_cap)?;
            tracing::trace!(
                old_capacity = self.cap,
                new_capacity = new_cap,
                len = self.items.len(),
                "growing int list"
            );
            self.cap = new_cap;
        }
        self.items.push(value);
        Ok(())
    }

    /// Remove every element equal to `value` and return how many went.
    ///
    /// Remaining elements keep their order. The shrink rule runs even when
    /// nothing matched.
    pub fn remove_all(&mut self, value: i64) -> usize {
        let before = self.items.len();
        self.items.retain(|&item| item != value);
        let removed = before - self.items.len();
        self.shrink_after_removal();
        removed
    }

    /// Remove and return the element at `index`, shifting later ones left.
    pub fn del(&mut self, index: i64) -> IntVecResult<i64> {
        let slot = self.resolve_index(index)?;
        let removed = self.items.remove(slot);
        self.shrink_after_removal();
        Ok(removed)
    }

    /// Add `delta` to the element at `index` in place.
    ///
    /// On overflow the element is left unchanged.
    pub fn inc(&mut self, index: i64, delta: i64) -> IntVecResult<()> {
        let slot = self.resolve_index(index)?;
        let item = &mut self.items[slot];
        *item = item
            .checked_add(delta)
            .ok_or(IntVecError::IntegerOverflow { index: slot, delta })?;
        Ok(())
    }

    /// Copy the list, reserving the same capacity.
    pub fn try_clone(&self) -> IntVecResult<Self> {
        let mut items = Vec::new();
        reserve_storage(&mut items, self.cap)?;
        items.extend_from_slice(&self.items);
        Ok(IntVec {
            items,
            cap: self.cap,
            config: self.config,
        })
    }

    /// Copy only the elements, at the smallest capacity the config allows.
    fn compact_clone(&self) -> Self {
        let cap = self.items.len().max(self.config.min_capacity());
        let mut items = Vec::with_capacity(cap);
        items.extend_from_slice(&self.items);
        IntVec {
            items,
            cap,
            config: self.config,
        }
    }

    fn shrink_after_removal(&mut self) {
        let new_cap = shrunk_capacity(self.cap, self.items.len(), self.config.min_capacity());
        if new_cap < self.cap {
            tracing::trace!(
                old_capacity = self.cap,
                new_capacity = new_cap,
                len = self.items.len(),
                "shrinking int list"
            );
            self.items.shrink_to(new_cap);
            self.cap = new_cap;
        }
    }
}

/// Make sure `items` can hold `capacity` elements without reallocating.
fn reserve_storage(items: &mut Vec<i64>, capacity: usize) -> IntVecResult<()> {
    let additional = capacity.saturating_sub(items.len());
    items
        .try_reserve_exact(additional)
        .map_err(|_| IntVecError::AllocationFailure {
            requested: capacity,
        })
}

impl Default for IntVec {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for IntVec {
    /// Falls back to a compact copy when the full capacity can't be reserved.
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|_| self.compact_clone())
    }
}

/// Lists compare by elements; capacity and configuration are ignored.
impl PartialEq for IntVec {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl Eq for IntVec {}

impl fmt::Debug for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntVec")
            .field("items", &self.items)
            .field("len", &self.items.len())
            .field("cap", &self.cap)
            .finish()
    }
}

impl fmt::Display for IntVec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{item}")?;
        }
        f.write_str("]")
    }
}

impl<'a> IntoIterator for &'a IntVec {
    type Item = &'a i64;
    type IntoIter = std::slice::Iter<'a, i64>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
