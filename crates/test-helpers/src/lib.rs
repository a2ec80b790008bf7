// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

mod fixtures;
mod http_stub;
mod mock_gateway;
mod mock_prover;
mod utils;

pub use fixtures::*;
pub use http_stub::*;
pub use mock_gateway::*;
pub use mock_prover::*;
pub use utils::*;
