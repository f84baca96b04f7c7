//! API Facades Layer
//!
//! Single entry point for the bitarray utilities. The facades accept the
//! loosely-typed arguments of the utility API (signed lengths,
//! endianness and strip mode as text), validate them, and call the typed
//! functions of the inner layers.
//!
//! ## Usage
//!
//! ```rust
//! use api_facades::{count_n, hex2ba, int2ba, ba2int, strip, Integer};
//!
//! let a = hex2ba("0f8").unwrap();
//! assert_eq!(strip(&a, "both").unwrap().to_string(), "11111");
//! assert_eq!(count_n(&a, 5).unwrap(), 9);
//!
//! let b = int2ba(&Integer::from(300), Some(16), "little").unwrap();
//! assert_eq!(ba2int(&b).unwrap(), Integer::from(300));
//! ```

pub mod util_facades;

pub use util_facades::*;

// Re-export main types for convenience
pub use entities_bitarray::{Bitarray, BitarrayError, Endian, Result};
pub use infrastructure_bitarray_encoding::Integer;
pub use usecases_bitarray_search::StripMode;
