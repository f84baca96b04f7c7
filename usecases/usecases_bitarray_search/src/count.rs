//! Prefix Count Search
//!
//! Finds the shortest prefix of a bitarray holding a given number of set bits.
//!
//! The search bisects over prefix lengths. Every probe needs the number of set
//! bits below some index; those counts are memoized in a [`CountCache`] that
//! lives only for the duration of one [`count_n`] call. A new count is derived
//! from the nearest already-known prefix count, so each range count scans as
//! few bits as possible.

use std::collections::BTreeMap;

use entities_bitarray::{Bitarray, BitarrayError, Result};
use tracing::{debug, trace};

/// Memoized prefix counts (`m -> count(a[0:m])`) for one bitarray
pub struct CountCache<'a> {
    array: &'a Bitarray,
    counts: BTreeMap<usize, usize>,
}

impl<'a> CountCache<'a> {
    /// Seed the cache with both boundaries: `0 -> 0` and `len -> total`
    pub fn new(array: &'a Bitarray, total: usize) -> Self {
        let mut counts = BTreeMap::new();
        counts.insert(0, 0);
        counts.insert(array.len(), total);
        Self { array, counts }
    }

    /// Number of set bits in `a[0:m]`
    ///
    /// `m` must lie within `[0, len]`.
    pub fn count_to(&mut self, m: usize) -> usize {
        if let Some(&count) = self.counts.get(&m) {
            return count;
        }

        // both boundaries are always cached, so neighbours exist on each side
        let (&below, &below_count) = self
            .counts
            .range(..m)
            .next_back()
            .unwrap_or((&0, &0));
        let (&above, &above_count) = self
            .counts
            .range(m + 1..)
            .next()
            .unwrap_or((&below, &below_count));

        let count = if m - below < above.saturating_sub(m) {
            trace!(m, anchor = below, "counting up from cached prefix");
            below_count + self.array.count(true, below, m)
        } else {
            trace!(m, anchor = above, "counting down from cached prefix");
            above_count - self.array.count(true, m, above)
        };
        self.counts.insert(m, count);
        count
    }

    /// Number of memoized prefixes, boundaries included
    fn cached(&self) -> usize {
        self.counts.len()
    }
}

/// Find the smallest index `i` for which `a[0:i]` holds exactly `n` set bits
///
/// # Errors
///
/// [`BitarrayError::OutOfRange`] if `n` exceeds the length of `a` or its
/// total number of set bits.
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::Bitarray;
/// use usecases_bitarray_search::count_n;
///
/// let a: Bitarray = "0100110".parse().unwrap();
/// assert_eq!(count_n(&a, 0).unwrap(), 0);
/// assert_eq!(count_n(&a, 1).unwrap(), 2);
/// assert_eq!(count_n(&a, 3).unwrap(), 6);
/// assert!(count_n(&a, 4).is_err());
/// ```
pub fn count_n(a: &Bitarray, n: usize) -> Result<usize> {
    if n == 0 {
        return Ok(0);
    }
    if n > a.len() {
        return Err(BitarrayError::out_of_range(format!(
            "n = {} larger than bitarray size {}",
            n,
            a.len()
        )));
    }
    let total = a.count(true, 0, a.len());
    if n > total {
        return Err(BitarrayError::out_of_range(format!(
            "n exceeds total count of {}",
            total
        )));
    }

    let mut cache = CountCache::new(a, total);

    // a prefix holding n set bits is at least n bits long
    let (mut left, mut right) = (n, a.len());
    while !(cache.count_to(right) == n && a.get(right - 1) == Some(true)) {
        let middle = (left + right) / 2;
        if cache.count_to(middle) < n {
            left = middle;
        } else {
            right = middle;
        }
        trace!(left, right, "count_n bisection step");
    }

    debug!(n, index = right, cached = cache.cached(), "count_n resolved");
    Ok(right)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_bitarray::{zeros, Endian};

    fn ba(s: &str) -> Bitarray {
        s.parse().unwrap()
    }

    fn brute_force(a: &Bitarray, n: usize) -> usize {
        (0..=a.len())
            .find(|&i| a.count(true, 0, i) == n)
            .unwrap()
    }

    #[test]
    fn test_count_n_zero() {
        assert_eq!(count_n(&ba(""), 0).unwrap(), 0);
        assert_eq!(count_n(&ba("111"), 0).unwrap(), 0);
        assert_eq!(count_n(&zeros(5, Endian::Big), 0).unwrap(), 0);
    }

    #[test]
    fn test_count_n_all_ones() {
        let a = ba("11111111111");
        for n in 1..=a.len() {
            assert_eq!(count_n(&a, n).unwrap(), n);
        }
    }

    #[test]
    fn test_count_n_matches_brute_force() {
        let a = ba("0010_0111_0000_0001_1010_0000_0100_1");
        let total = a.count(true, 0, a.len());
        for n in 0..=total {
            assert_eq!(count_n(&a, n).unwrap(), brute_force(&a, n), "n = {}", n);
        }
    }

    #[test]
    fn test_count_n_total_is_last_set_bit() {
        let a = ba("0100_1000_0000_0000");
        assert_eq!(count_n(&a, 2).unwrap(), 5);
    }

    #[test]
    fn test_count_n_exceeds_total() {
        let err = count_n(&ba("0101_0000"), 3).unwrap_err();
        assert_eq!(err, BitarrayError::out_of_range("n exceeds total count of 2"));
    }

    #[test]
    fn test_count_n_exceeds_length() {
        let err = count_n(&ba("11"), 3).unwrap_err();
        assert!(matches!(err, BitarrayError::OutOfRange(_)));
    }

    #[test]
    fn test_count_n_little_endian() {
        let mut a = zeros(50, Endian::Little);
        for i in [3, 17, 18, 40] {
            a.set(i, true);
        }
        assert_eq!(count_n(&a, 1).unwrap(), 4);
        assert_eq!(count_n(&a, 3).unwrap(), 19);
        assert_eq!(count_n(&a, 4).unwrap(), 41);
    }

    #[test]
    fn test_cache_seeded_with_boundaries() {
        let a = ba("1011_0");
        let mut cache = CountCache::new(&a, 3);
        assert_eq!(cache.cached(), 2);
        assert_eq!(cache.count_to(0), 0);
        assert_eq!(cache.count_to(5), 3);
        assert_eq!(cache.cached(), 2);
    }

    #[test]
    fn test_cache_counts_from_nearest_anchor() {
        let a = ba("1101_0011_1010_1111_0001");
        let total = a.count(true, 0, a.len());
        let mut cache = CountCache::new(&a, total);
        for m in [10, 3, 17, 11, 1, 19, 6] {
            assert_eq!(cache.count_to(m), a.count(true, 0, m), "m = {}", m);
        }
        assert_eq!(cache.cached(), 9);
    }
}
