//! Doubling and halving thresholds for the logical capacity.
//!
//! Kept as pure functions so the policy can be tested without a buffer.

/// Capacity to grow a full buffer to: double, or the floor when empty.
#[inline]
pub(crate) fn grown_capacity(capacity: usize, min_capacity: usize) -> usize {
    capacity.saturating_mul(2).max(min_capacity)
}

/// Capacity after a removal leaves `len` elements.
///
/// Halves while `capacity >= 4 * len`, stopping at `min_capacity`. Each
/// halving starts from at least `4 * len`, so the result stays `>= len`.
pub(crate) fn shrunk_capacity(mut capacity: usize, len: usize, min_capacity: usize) -> usize {
    while capacity > min_capacity && capacity >= len.saturating_mul(4) {
        capacity = (capacity / 2).max(min_capacity);
    }
    capacity
}
