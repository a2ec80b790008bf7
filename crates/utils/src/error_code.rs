// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error taxonomy shared by every stage of a proof request's life: local
/// validation, proving and gateway submission. Remote services report the
/// same codes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrCode {
    /// A receipt, storage or transaction attribute is malformed.
    #[serde(rename = "ERROR_INVALID_INPUT")]
    InvalidInput,
    /// A custom input value failed coercion or fixed length decoding.
    #[serde(rename = "ERROR_INVALID_CUSTOM_INPUT")]
    InvalidCustomInput,
    /// The proving service could not produce a proof.
    #[serde(rename = "ERROR_FAILED_TO_PROVE")]
    FailedToProve,
    /// The gateway rejected a step of the submission.
    #[serde(rename = "ERROR_GATEWAY")]
    GatewayError,
    /// A bounded poll ran out of attempts.
    #[serde(rename = "ERROR_TIMEOUT")]
    Timeout,
    /// Any code this client does not know about.
    #[serde(rename = "ERROR_UNDEFINED", other)]
    Undefined,
}

impl ErrCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrCode::InvalidInput => "ERROR_INVALID_INPUT",
            ErrCode::InvalidCustomInput => "ERROR_INVALID_CUSTOM_INPUT",
            ErrCode::FailedToProve => "ERROR_FAILED_TO_PROVE",
            ErrCode::GatewayError => "ERROR_GATEWAY",
            ErrCode::Timeout => "ERROR_TIMEOUT",
            ErrCode::Undefined => "ERROR_UNDEFINED",
        }
    }
}

impl fmt::Display for ErrCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error body reported by the proving service and the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteError {
    #[serde(default = "undefined")]
    pub code: ErrCode,
    #[serde(default)]
    pub msg: String,
}

fn undefined() -> ErrCode {
    ErrCode::Undefined
}

impl fmt::Display for RemoteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.msg)
    }
}
