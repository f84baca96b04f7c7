//! Bitarray Container
//!
//! A growable sequence of bits tagged with a fixed [`Endian`]. Bits are packed
//! eight to a byte; the endianness decides where bit `i` sits inside byte
//! `i / 8` (see [`bits`](crate::bits)).
//!
//! The container only offers what the search and codec layers consume: bit
//! access, forward and reverse search, range counting, slicing, concatenation,
//! byte import/export and truncation. Every transformation that yields a new
//! sequence returns a fresh `Bitarray`; the argument is never touched.
//!
//! ## Examples
//!
//! ```rust
//! use entities_bitarray::{Bitarray, Endian};
//!
//! let a: Bitarray = "0010110".parse().unwrap();
//! assert_eq!(a.len(), 7);
//! assert_eq!(a.endian(), Endian::Big);
//! assert_eq!(a.index(true, 0, a.len()), Some(2));
//! assert_eq!(a.count(true, 0, a.len()), 3);
//! assert_eq!(a.slice(2, 6).to_string(), "1011");
//! assert_eq!(a.to_bytes(), vec![0b0010_1100]);
//! ```

/*
 * %CopyrightBegin%
 *
 * SPDX-License-Identifier: Apache-2.0
 *
 * Copyright Lee Barney 2025. All Rights Reserved.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 *
 * %CopyrightEnd%
 */

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::bits::{self, bit_offset, byte_offset, nbytes};
use crate::endian::Endian;
use crate::error::{BitarrayError, Result};

static TRUE: bool = true;
static FALSE: bool = false;

/// Sequence of bits with a fixed bit-endianness
///
/// Bits past `len()` in the last storage byte are always zero, so the byte
/// buffer can be exported or counted without masking.
#[derive(Clone, Default)]
pub struct Bitarray {
    /// Packed storage, `nbytes(nbits)` long
    buf: Vec<u8>,
    /// Number of valid bits
    nbits: usize,
    endian: Endian,
}

impl Bitarray {
    /// Create an empty bitarray
    pub fn new(endian: Endian) -> Self {
        Self {
            buf: Vec::new(),
            nbits: 0,
            endian,
        }
    }

    /// Create an empty bitarray with room for `capacity` bits
    pub fn with_capacity(capacity: usize, endian: Endian) -> Self {
        Self {
            buf: Vec::with_capacity(nbytes(capacity)),
            nbits: 0,
            endian,
        }
    }

    /// Create a bitarray holding all bits of `bytes` (`8 * bytes.len()` bits)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use entities_bitarray::{Bitarray, Endian};
    ///
    /// let big = Bitarray::from_bytes(&[0x0A], Endian::Big);
    /// assert_eq!(big.to_string(), "00001010");
    ///
    /// let little = Bitarray::from_bytes(&[0x0A], Endian::Little);
    /// assert_eq!(little.to_string(), "01010000");
    /// ```
    pub fn from_bytes(bytes: &[u8], endian: Endian) -> Self {
        Self {
            buf: bytes.to_vec(),
            nbits: bits::nbits(bytes.len()),
            endian,
        }
    }

    /// Parse a string of `'0'` and `'1'` characters
    ///
    /// Underscores and ASCII whitespace are ignored so long literals can be
    /// grouped (`"0000_1010"`). Any other character is an invalid argument.
    pub fn from_bin_str(s: &str, endian: Endian) -> Result<Self> {
        let mut a = Self::with_capacity(s.len(), endian);
        for c in s.chars() {
            match c {
                '0' => a.push(false),
                '1' => a.push(true),
                '_' => {}
                c if c.is_ascii_whitespace() => {}
                other => {
                    return Err(BitarrayError::invalid_argument(format!(
                        "expected '0' or '1', got {:?}",
                        other
                    )))
                }
            }
        }
        Ok(a)
    }

    /// Number of bits
    pub fn len(&self) -> usize {
        self.nbits
    }

    /// Check for zero length
    pub fn is_empty(&self) -> bool {
        self.nbits == 0
    }

    /// Bit-endianness of this bitarray
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Get bit `i`, or `None` if `i >= len()`
    pub fn get(&self, i: usize) -> Option<bool> {
        if i < self.nbits {
            Some(bits::get_bit(&self.buf, self.endian, i))
        } else {
            None
        }
    }

    /// Set bit `i` to `value`
    ///
    /// # Panics
    /// Panics if `i >= len()`
    pub fn set(&mut self, i: usize, value: bool) {
        assert!(
            i < self.nbits,
            "bit index {} out of range for bitarray of length {}",
            i,
            self.nbits
        );
        bits::set_bit(&mut self.buf, self.endian, i, value);
    }

    /// Set every bit to `value`
    pub fn setall(&mut self, value: bool) {
        let fill = if value { 0xFF } else { 0x00 };
        self.buf.iter_mut().for_each(|b| *b = fill);
        self.clear_unused();
    }

    /// Append one bit
    pub fn push(&mut self, value: bool) {
        if bit_offset(self.nbits) == 0 {
            self.buf.push(0);
        }
        self.nbits += 1;
        if value {
            bits::set_bit(&mut self.buf, self.endian, self.nbits - 1, true);
        }
    }

    /// Grow or shrink to `new_len` bits, filling new bits with `value`
    pub fn resize(&mut self, new_len: usize, value: bool) {
        if new_len <= self.nbits {
            self.truncate(new_len);
            return;
        }
        let old_len = self.nbits;
        self.buf.resize(nbytes(new_len), 0);
        self.nbits = new_len;
        if value {
            for i in old_len..new_len {
                bits::set_bit(&mut self.buf, self.endian, i, true);
            }
        }
    }

    /// Drop every bit from index `len` onwards; no-op if `len >= len()`
    pub fn truncate(&mut self, len: usize) {
        if len >= self.nbits {
            return;
        }
        self.buf.truncate(nbytes(len));
        self.nbits = len;
        self.clear_unused();
    }

    /// Check whether `value` occurs at all
    pub fn contains(&self, value: bool) -> bool {
        self.index(value, 0, self.nbits).is_some()
    }

    /// Index of the first `value` in `[start, end)`
    ///
    /// `end` is clamped to `len()`. Whole bytes that cannot contain `value`
    /// are skipped without looking at their bits.
    pub fn index(&self, value: bool, start: usize, end: usize) -> Option<usize> {
        let end = end.min(self.nbits);
        let mut i = start;
        if i >= end {
            return None;
        }

        while i < end && bit_offset(i) != 0 {
            if bits::get_bit(&self.buf, self.endian, i) == value {
                return Some(i);
            }
            i += 1;
        }

        let skip = if value { 0x00 } else { 0xFF };
        while i + 8 <= end && self.buf[byte_offset(i)] == skip {
            i += 8;
        }

        while i < end {
            if bits::get_bit(&self.buf, self.endian, i) == value {
                return Some(i);
            }
            i += 1;
        }
        None
    }

    /// Index of the last `value`, scanning from the right
    ///
    /// Whole bytes that cannot contain `value` are skipped.
    pub fn rfind(&self, value: bool) -> Option<usize> {
        let mut i = self.nbits;

        while i > 0 && bit_offset(i) != 0 {
            i -= 1;
            if bits::get_bit(&self.buf, self.endian, i) == value {
                return Some(i);
            }
        }

        let skip = if value { 0x00 } else { 0xFF };
        while i >= 8 && self.buf[byte_offset(i - 1)] == skip {
            i -= 8;
        }

        while i > 0 {
            i -= 1;
            if bits::get_bit(&self.buf, self.endian, i) == value {
                return Some(i);
            }
        }
        None
    }

    /// Number of bits equal to `value` in `[start, end)`
    ///
    /// `end` is clamped to `len()`. Whole bytes are counted with a popcount.
    pub fn count(&self, value: bool, start: usize, end: usize) -> usize {
        let end = end.min(self.nbits);
        if start >= end {
            return 0;
        }

        let mut ones = 0;
        let mut i = start;
        while i < end && bit_offset(i) != 0 {
            ones += bits::get_bit(&self.buf, self.endian, i) as usize;
            i += 1;
        }

        let whole = (end - i) >> 3;
        let first = byte_offset(i);
        ones += bits::count_ones(&self.buf[first..first + whole]);
        i += bits::nbits(whole);

        while i < end {
            ones += bits::get_bit(&self.buf, self.endian, i) as usize;
            i += 1;
        }

        if value {
            ones
        } else {
            (end - start) - ones
        }
    }

    /// New bitarray with the bits of `[start, end)`, same endianness
    ///
    /// `end` is clamped to `len()`; an empty range yields an empty bitarray.
    pub fn slice(&self, start: usize, end: usize) -> Bitarray {
        let end = end.min(self.nbits);
        if start >= end {
            return Bitarray::new(self.endian);
        }

        if bit_offset(start) == 0 {
            let mut out = Bitarray {
                buf: self.buf[byte_offset(start)..nbytes(end)].to_vec(),
                nbits: bits::nbits(nbytes(end) - byte_offset(start)),
                endian: self.endian,
            };
            out.truncate(end - start);
            return out;
        }

        let mut out = Bitarray::with_capacity(end - start, self.endian);
        for i in start..end {
            out.push(bits::get_bit(&self.buf, self.endian, i));
        }
        out
    }

    /// New bitarray holding `self` followed by `other`, with `self`'s endianness
    pub fn concat(&self, other: &Bitarray) -> Bitarray {
        let mut out = Bitarray::with_capacity(self.nbits + other.nbits, self.endian);
        out.extend_from(self);
        out.extend_from(other);
        out
    }

    /// Append all bits of `other` (bit order is kept, whatever its endianness)
    pub fn extend_from(&mut self, other: &Bitarray) {
        if bit_offset(self.nbits) == 0 && self.endian == other.endian {
            self.buf.extend_from_slice(&other.buf);
            self.nbits += other.nbits;
            return;
        }
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Export as bytes; the last byte is zero-padded
    pub fn to_bytes(&self) -> Vec<u8> {
        self.buf.clone()
    }

    /// Borrow the packed storage
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Iterate over the bits in index order
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            array: self,
            front: 0,
            back: self.nbits,
        }
    }

    fn clear_unused(&mut self) {
        let mask = bits::used_mask(self.endian, self.nbits);
        if let Some(last) = self.buf.last_mut() {
            *last &= mask;
        }
    }
}

impl PartialEq for Bitarray {
    /// Two bitarrays are equal when they hold the same bits in the same
    /// order; endianness does not take part.
    fn eq(&self, other: &Self) -> bool {
        if self.nbits != other.nbits {
            return false;
        }
        if self.endian == other.endian {
            return self.buf == other.buf;
        }
        self.iter().eq(other.iter())
    }
}

impl Eq for Bitarray {}

impl Index<usize> for Bitarray {
    type Output = bool;

    fn index(&self, i: usize) -> &bool {
        match self.get(i) {
            Some(true) => &TRUE,
            Some(false) => &FALSE,
            None => panic!(
                "bit index {} out of range for bitarray of length {}",
                i, self.nbits
            ),
        }
    }
}

impl fmt::Display for Bitarray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Bitarray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitarray('{}', endian={})", self, self.endian)
    }
}

impl FromStr for Bitarray {
    type Err = BitarrayError;

    /// Parse a big-endian bitarray from `'0'`/`'1'` text
    fn from_str(s: &str) -> Result<Self> {
        Bitarray::from_bin_str(s, Endian::Big)
    }
}

impl FromIterator<bool> for Bitarray {
    /// Collect into a big-endian bitarray
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut a = Bitarray::new(Endian::Big);
        a.extend(iter);
        a
    }
}

impl Extend<bool> for Bitarray {
    fn extend<I: IntoIterator<Item = bool>>(&mut self, iter: I) {
        for bit in iter {
            self.push(bit);
        }
    }
}

impl<'a> IntoIterator for &'a Bitarray {
    type Item = bool;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Iterator over the bits of a [`Bitarray`]
#[derive(Clone)]
pub struct Iter<'a> {
    array: &'a Bitarray,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let bit = bits::get_bit(&self.array.buf, self.array.endian, self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.back - self.front;
        (n, Some(n))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(bits::get_bit(&self.array.buf, self.array.endian, self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn ba(s: &str) -> Bitarray {
        s.parse().unwrap()
    }

    fn ba_little(s: &str) -> Bitarray {
        Bitarray::from_bin_str(s, Endian::Little).unwrap()
    }

    #[test]
    fn test_new_is_empty() {
        let a = Bitarray::new(Endian::Little);
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
        assert_eq!(a.endian(), Endian::Little);
        assert!(a.to_bytes().is_empty());
    }

    #[test]
    fn test_push_and_get() {
        let mut a = Bitarray::new(Endian::Big);
        for bit in [true, false, true, true, false, false, false, false, true] {
            a.push(bit);
        }
        assert_eq!(a.len(), 9);
        assert_eq!(a.get(0), Some(true));
        assert_eq!(a.get(1), Some(false));
        assert_eq!(a.get(8), Some(true));
        assert_eq!(a.get(9), None);
        assert_eq!(a.to_bytes(), vec![0b1011_0000, 0b1000_0000]);
    }

    #[test]
    fn test_from_bin_str_ignores_separators() {
        let a = ba("0000_1010 1");
        assert_eq!(a.len(), 9);
        assert_eq!(a.to_string(), "000010101");
    }

    #[test]
    fn test_from_bin_str_rejects_other_characters() {
        let err = "01x".parse::<Bitarray>().unwrap_err();
        assert!(matches!(err, BitarrayError::InvalidArgument(_)));
    }

    #[test]
    fn test_from_bytes_little_endian_layout() {
        let a = Bitarray::from_bytes(&[0x01, 0x80], Endian::Little);
        assert_eq!(a.to_string(), "1000000000000001");
    }

    #[test]
    fn test_set_and_setall_keep_unused_bits_clear() {
        let mut a = ba("00000");
        a.set(4, true);
        assert_eq!(a.to_string(), "00001");
        a.setall(true);
        assert_eq!(a.to_bytes(), vec![0b1111_1000]);
        a.setall(false);
        assert_eq!(a.to_bytes(), vec![0]);

        let mut b = ba_little("000");
        b.setall(true);
        assert_eq!(b.to_bytes(), vec![0b0000_0111]);
    }

    #[test]
    #[should_panic]
    fn test_set_out_of_range_panics() {
        let mut a = ba("01");
        a.set(2, true);
    }

    #[test]
    fn test_resize() {
        let mut a = ba("1");
        a.resize(10, true);
        assert_eq!(a.to_string(), "1111111111");
        a.resize(3, false);
        assert_eq!(a.to_string(), "111");
        a.resize(5, false);
        assert_eq!(a.to_string(), "11100");
    }

    #[test]
    fn test_truncate_clears_dropped_bits() {
        let mut a = ba("11111111_11");
        a.truncate(3);
        assert_eq!(a.len(), 3);
        assert_eq!(a.to_bytes(), vec![0b1110_0000]);
        a.truncate(10);
        assert_eq!(a.len(), 3);
    }

    #[test]
    fn test_index() {
        let a = ba("0000000000001000");
        assert_eq!(a.index(true, 0, a.len()), Some(12));
        assert_eq!(a.index(true, 12, 13), Some(12));
        assert_eq!(a.index(true, 13, a.len()), None);
        assert_eq!(a.index(true, 0, 12), None);
        assert_eq!(a.index(false, 0, a.len()), Some(0));
        assert_eq!(a.index(true, 5, 100), Some(12));
        assert_eq!(a.index(true, 20, 30), None);
    }

    #[test]
    fn test_index_false_skips_full_bytes() {
        let a = ba("11111111_11111111_110");
        assert_eq!(a.index(false, 0, a.len()), Some(18));
        assert_eq!(a.index(false, 3, 18), None);
    }

    #[test]
    fn test_rfind() {
        assert_eq!(ba("").rfind(true), None);
        assert_eq!(ba("0000").rfind(true), None);
        assert_eq!(ba("1000_0000_0000_0000_00").rfind(true), Some(0));
        assert_eq!(ba("0100_0000_0000_0000_01").rfind(true), Some(17));
        assert_eq!(ba("1111_1111_1111_1111").rfind(false), None);
        assert_eq!(ba("1011_1111_1111_1111").rfind(false), Some(1));
        assert_eq!(ba_little("0001_0000_0000").rfind(true), Some(3));
    }

    #[test]
    fn test_count() {
        let a = ba("1101_0011_1111_1111_011");
        assert_eq!(a.count(true, 0, a.len()), 15);
        assert_eq!(a.count(false, 0, a.len()), 4);
        assert_eq!(a.count(true, 2, 7), 2);
        assert_eq!(a.count(true, 8, 16), 8);
        assert_eq!(a.count(true, 3, 19), 13);
        assert_eq!(a.count(true, 5, 5), 0);
        assert_eq!(a.count(true, 7, 3), 0);
        assert_eq!(a.count(true, 0, 1000), 15);
    }

    #[test]
    fn test_slice() {
        let a = ba("0010_1101_1100_01");
        assert_eq!(a.slice(0, 4).to_string(), "0010");
        assert_eq!(a.slice(8, 14).to_string(), "110001");
        assert_eq!(a.slice(3, 10).to_string(), "0110111");
        assert!(a.slice(5, 5).is_empty());
        assert_eq!(a.slice(12, 99).to_string(), "01");
    }

    #[test]
    fn test_slice_keeps_endianness_and_clears_tail() {
        let a = ba_little("1111_1111_1");
        let s = a.slice(0, 3);
        assert_eq!(s.endian(), Endian::Little);
        assert_eq!(s.to_bytes(), vec![0b0000_0111]);
    }

    #[test]
    fn test_concat_aligned_and_unaligned() {
        let a = ba("1010_1010");
        let b = ba("11");
        assert_eq!(a.concat(&b).to_string(), "1010101011");
        assert_eq!(b.concat(&a).to_string(), "1110101010");

        let c = ba_little("0001");
        let joined = a.concat(&c);
        assert_eq!(joined.endian(), Endian::Big);
        assert_eq!(joined.to_string(), "101010100001");
    }

    #[test]
    fn test_concat_leaves_arguments_untouched() {
        let a = ba("101");
        let b = ba("0");
        let _ = a.concat(&b);
        assert_eq!(a.to_string(), "101");
        assert_eq!(b.to_string(), "0");
    }

    #[test]
    fn test_equality_ignores_endianness() {
        assert_eq!(ba("1011"), ba_little("1011"));
        assert_ne!(ba("1011"), ba("10110"));
        assert_ne!(ba("1011"), ba("1010"));
    }

    #[test]
    fn test_index_operator() {
        let a = ba("10");
        assert!(a[0]);
        assert!(!a[1]);
    }

    #[test]
    fn test_iter_both_ends() {
        let a = ba("1100");
        let forward: Vec<bool> = a.iter().collect();
        let backward: Vec<bool> = a.iter().rev().collect();
        assert_eq!(forward, vec![true, true, false, false]);
        assert_eq!(backward, vec![false, false, true, true]);
        assert_eq!(a.iter().len(), 4);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", ba_little("01")), "Bitarray('01', endian=little)");
    }
}
