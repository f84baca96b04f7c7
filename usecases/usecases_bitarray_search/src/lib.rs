//! Use Cases Layer: Bitarray Search
//!
//! Search and trimming algorithms layered on top of the [`Bitarray`](entities_bitarray::Bitarray)
//! container.
//!
//! ## Overview
//!
//! The `usecases_bitarray_search` crate is part of the use cases layer. It
//! depends only on the entities layer and implements:
//!
//! - **[`boundary`](boundary/index.html)**: [`rindex`], the rightmost index of a
//!   bit value found by bisection over forward existence probes.
//!
//! - **[`strip`](strip/index.html)**: [`strip`] with [`StripMode`], removing
//!   leading and/or trailing zeros.
//!
//! - **[`count`](count/index.html)**: [`count_n`], the shortest prefix holding a
//!   given number of set bits, with its per-call [`CountCache`].
//!
//! - **[`pairwise`](pairwise/index.html)**: [`count_and`], [`count_or`],
//!   [`count_xor`] and [`subset`] over two equally shaped bitarrays.
//!
//! ## Usage
//!
//! ```rust
//! use entities_bitarray::Bitarray;
//! use usecases_bitarray_search::{count_n, rindex, strip, StripMode};
//!
//! let a: Bitarray = "0001011000".parse().unwrap();
//! assert_eq!(rindex(&a, true).unwrap(), 6);
//! assert_eq!(strip(&a, StripMode::Both).to_string(), "1011");
//! assert_eq!(count_n(&a, 2).unwrap(), 6);
//! ```
//!
//! ## See Also
//!
//! - [`entities_bitarray`](../entities_bitarray/index.html): the container
//! - [`infrastructure_bitarray_encoding`](../infrastructure_bitarray_encoding/index.html):
//!   codecs built on `rindex` and `strip`

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

pub mod boundary;
pub mod count;
pub mod pairwise;
pub mod strip;

pub use boundary::rindex;
pub use count::{count_n, CountCache};
pub use pairwise::{count_and, count_or, count_xor, subset};
pub use strip::{strip, StripMode};
