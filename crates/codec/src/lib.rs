// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod address;
mod circuit_value;
mod custom_input;
mod error;
mod field_value;

pub use address::*;
pub use circuit_value::*;
pub use custom_input::*;
pub use error::CodecError;
pub use field_value::*;

/// Largest byte length a byte-like value may occupy.
pub const MAX_VALUE_BYTES: usize = 32;
