// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod builder;
mod error;
mod types;
pub mod validate;
mod wire;

pub use builder::*;
pub use error::*;
pub use types::*;
pub use wire::*;
