// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod error_code;
pub mod formatters;
mod http;
pub mod poll;

pub use error_code::*;
pub use formatters::*;
pub use http::*;
pub use poll::*;
