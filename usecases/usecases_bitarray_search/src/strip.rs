//! Zero Trimming
//!
//! Removes leading and/or trailing runs of zero bits.

use std::fmt;
use std::str::FromStr;

use entities_bitarray::{Bitarray, BitarrayError};

use crate::boundary::rindex;

/// Which end(s) of a bitarray [`strip`] trims
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StripMode {
    /// Leading zeros only
    Left,
    /// Trailing zeros only
    #[default]
    Right,
    /// Leading and trailing zeros
    Both,
}

impl StripMode {
    fn trims_left(&self) -> bool {
        matches!(self, StripMode::Left | StripMode::Both)
    }

    fn trims_right(&self) -> bool {
        matches!(self, StripMode::Right | StripMode::Both)
    }

    /// Name used when parsing and displaying
    pub fn as_str(&self) -> &'static str {
        match self {
            StripMode::Left => "left",
            StripMode::Right => "right",
            StripMode::Both => "both",
        }
    }
}

impl fmt::Display for StripMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StripMode {
    type Err = BitarrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(StripMode::Left),
            "right" => Ok(StripMode::Right),
            "both" => Ok(StripMode::Both),
            other => Err(BitarrayError::invalid_argument(format!(
                "allowed values 'left', 'right', 'both', got: {:?}",
                other
            ))),
        }
    }
}

/// Strip zeros from the left, right or both ends
///
/// An all-zero (or empty) input yields an empty bitarray with the input's
/// endianness. The input itself is never modified.
///
/// # Examples
///
/// ```rust
/// use entities_bitarray::Bitarray;
/// use usecases_bitarray_search::{strip, StripMode};
///
/// let a: Bitarray = "0011010000".parse().unwrap();
/// assert_eq!(strip(&a, StripMode::Right).to_string(), "001101");
/// assert_eq!(strip(&a, StripMode::Left).to_string(), "11010000");
/// assert_eq!(strip(&a, StripMode::Both).to_string(), "1101");
/// ```
pub fn strip(a: &Bitarray, mode: StripMode) -> Bitarray {
    let mut first = 0;
    if mode.trims_left() {
        match a.index(true, 0, a.len()) {
            Some(i) => first = i,
            None => return Bitarray::new(a.endian()),
        }
    }

    let mut last = a.len().saturating_sub(1);
    if mode.trims_right() {
        match rindex(a, true) {
            Ok(i) => last = i,
            Err(_) => return Bitarray::new(a.endian()),
        }
    }

    a.slice(first, last + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use entities_bitarray::{zeros, Endian};

    fn ba(s: &str) -> Bitarray {
        s.parse().unwrap()
    }

    #[test]
    fn test_default_mode_is_right() {
        assert_eq!(StripMode::default(), StripMode::Right);
    }

    #[test]
    fn test_parse_mode() {
        assert_eq!("left".parse::<StripMode>().unwrap(), StripMode::Left);
        assert_eq!("right".parse::<StripMode>().unwrap(), StripMode::Right);
        assert_eq!("both".parse::<StripMode>().unwrap(), StripMode::Both);
        let err = "up".parse::<StripMode>().unwrap_err();
        assert!(matches!(err, BitarrayError::InvalidArgument(_)));
    }

    #[test]
    fn test_strip_each_mode() {
        let a = ba("00010110000");
        assert_eq!(strip(&a, StripMode::Left).to_string(), "10110000");
        assert_eq!(strip(&a, StripMode::Right).to_string(), "0001011");
        assert_eq!(strip(&a, StripMode::Both).to_string(), "1011");
    }

    #[test]
    fn test_strip_nothing_to_strip() {
        let a = ba("1001");
        for mode in [StripMode::Left, StripMode::Right, StripMode::Both] {
            assert_eq!(strip(&a, mode), a);
        }
    }

    #[test]
    fn test_strip_all_zeros_is_empty_with_same_endian() {
        let a = zeros(9, Endian::Little);
        for mode in [StripMode::Left, StripMode::Right, StripMode::Both] {
            let s = strip(&a, mode);
            assert!(s.is_empty());
            assert_eq!(s.endian(), Endian::Little);
        }
    }

    #[test]
    fn test_strip_empty() {
        let a = Bitarray::new(Endian::Big);
        for mode in [StripMode::Left, StripMode::Right, StripMode::Both] {
            assert!(strip(&a, mode).is_empty());
        }
    }

    #[test]
    fn test_strip_does_not_modify_input() {
        let a = ba("0110");
        let _ = strip(&a, StripMode::Both);
        assert_eq!(a.to_string(), "0110");
    }

    #[test]
    fn test_strip_preserves_endianness() {
        let a = Bitarray::from_bin_str("0011", Endian::Little).unwrap();
        let s = strip(&a, StripMode::Left);
        assert_eq!(s.endian(), Endian::Little);
        assert_eq!(s.to_string(), "11");
    }
}
