// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod client;
mod error;
mod transport;
mod types;

pub use client::*;
pub use error::*;
pub use transport::*;
pub use types::*;
