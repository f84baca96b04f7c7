//! Entities Layer: Bitarray
//!
//! This crate provides the bit-sequence container that every other layer of the
//! bitarray utilities builds on: a packed sequence of bits with a fixed
//! bit-endianness, plus the shared error type.
//!
//! ## Overview
//!
//! The `entities_bitarray` crate is the innermost layer of the workspace. It has
//! no dependencies on other crates in the system, making it the foundational
//! building block for the search (use cases) and codec (infrastructure) layers.
//!
//! ## Modules
//!
//! - **[`bits`](bits/index.html)**: Low-level bit addressing inside byte buffers
//!   for both bit-endiannesses, byte/bit size calculations and masks.
//!
//! - **[`bitarray`](bitarray/index.html)**: The [`Bitarray`] container. Bit
//!   access, forward and reverse search, range counting, slicing,
//!   concatenation, byte import/export and truncation.
//!
//! - **[`endian`](endian/index.html)**: The [`Endian`] tag (`big` / `little`).
//!
//! - **[`zeros`](zeros/index.html)**: All-zero construction.
//!
//! - **[`error`](error/index.html)**: [`BitarrayError`] and the crate-wide
//!   [`Result`] alias.
//!
//! ## Usage
//!
//! ```rust
//! use entities_bitarray::{zeros, Bitarray, Endian};
//!
//! let mut a = zeros(12, Endian::Big);
//! a.set(3, true);
//! assert_eq!(a.to_string(), "000100000000");
//! assert_eq!(a.count(true, 0, a.len()), 1);
//!
//! let b = Bitarray::from_bytes(&[0xF0], Endian::Little);
//! assert_eq!(b.to_string(), "00001111");
//! ```
//!
//! ## See Also
//!
//! - [`usecases_bitarray_search`](../usecases_bitarray_search/index.html):
//!   rindex, strip, count_n and pairwise counting
//! - [`infrastructure_bitarray_encoding`](../infrastructure_bitarray_encoding/index.html):
//!   hex and integer codecs

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

pub mod bits;
pub mod bitarray;
pub mod endian;
pub mod error;
pub mod zeros;

// Re-export main types for convenience
pub use bitarray::{Bitarray, Iter};
pub use endian::Endian;
pub use error::{BitarrayError, Result};
pub use zeros::zeros;
