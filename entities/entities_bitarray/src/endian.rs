//! Bit-Endianness
//!
//! Determines how a bit index maps to numeric significance when a bitarray
//! is viewed as bytes or as an integer.
//!
//! - **Big**: bit 0 is the most significant bit of byte 0 (MSB-first)
//! - **Little**: bit 0 is the least significant bit of byte 0 (LSB-first)

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
use std::str::FromStr;

use crate::error::BitarrayError;

/// Bit-endianness of a bitarray
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Endian {
    /// Bit 0 is the most significant bit
    #[default]
    Big,
    /// Bit 0 is the least significant bit
    Little,
}

impl Endian {
    /// Name used when parsing and displaying (`"big"` or `"little"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Endian::Big => "big",
            Endian::Little => "little",
        }
    }

    /// Check for big-endian
    pub fn is_big(&self) -> bool {
        matches!(self, Endian::Big)
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endian {
    type Err = BitarrayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "big" => Ok(Endian::Big),
            "little" => Ok(Endian::Little),
            other => Err(BitarrayError::invalid_argument(format!(
                "endian can only be 'big' or 'little', got: {:?}",
                other
            ))),
        }
    }
}
