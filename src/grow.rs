//! Growth policies for vectors which have exceeded their available capacity.

use core::fmt::Debug;

/// Growth behavior for collections which have exceeded their available storage
pub trait Grow: Debug {
    /// Calculate the next capacity to request from the provider, given the
    /// current capacity `prev` and the `minimum` capacity needed.
    fn next_capacity(prev: usize, minimum: usize) -> usize;
}

/// Growth behavior which never requests extra capacity
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowExact;

impl Grow for GrowExact {
    #[inline]
    fn next_capacity(_prev: usize, minimum: usize) -> usize {
        minimum
    }
}

/// Growth behavior which doubles the capacity, starting from a single slot.
///
/// When a single doubling is not enough (a large `resize` or slice
/// extension), the capacity keeps doubling until it covers the minimum.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct GrowDoubling;

impl Grow for GrowDoubling {
    #[inline]
    fn next_capacity(prev: usize, minimum: usize) -> usize {
        let mut capacity = if prev == 0 { 1 } else { prev };
        while capacity < minimum {
            capacity = capacity.saturating_mul(2);
        }
        capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doubling_from_empty() {
        assert_eq!(GrowDoubling::next_capacity(0, 1), 1);
        assert_eq!(GrowDoubling::next_capacity(1, 2), 2);
        assert_eq!(GrowDoubling::next_capacity(2, 3), 4);
        assert_eq!(GrowDoubling::next_capacity(4, 5), 8);
    }

    #[test]
    fn doubling_rounds_up_large_requests() {
        assert_eq!(GrowDoubling::next_capacity(0, 5), 8);
        assert_eq!(GrowDoubling::next_capacity(2, 5), 8);
        assert_eq!(GrowDoubling::next_capacity(3, 13), 24);
        assert_eq!(GrowDoubling::next_capacity(4, 16), 16);
    }

    #[test]
    fn doubling_saturates() {
        let cap = GrowDoubling::next_capacity(usize::MAX / 2 + 1, usize::MAX);
        assert_eq!(cap, usize::MAX);
    }

    #[test]
    fn exact_is_minimum() {
        assert_eq!(GrowExact::next_capacity(0, 5), 5);
        assert_eq!(GrowExact::next_capacity(8, 9), 9);
    }
}
