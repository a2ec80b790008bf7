// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;
use zq_utils::ErrCode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("'{0}' is not a numeric literal")]
    NotNumeric(String),

    #[error("'{0}' is not a hex string")]
    NotHex(String),

    #[error("value {0} is negative")]
    Negative(String),

    #[error("value {value} does not fit {ty}")]
    OutOfRange { ty: &'static str, value: String },

    #[error("{ty} must take bytes of length {expected}: actual {actual}")]
    InvalidLength {
        ty: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("expected a {expected} value, got {actual}")]
    WrongType {
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{0}' is not a valid address")]
    InvalidAddress(String),

    #[error("custom input encoding failed: {0}")]
    Encoding(String),
}

impl CodecError {
    /// Values are only ever coerced through the codec when building custom
    /// inputs or checking evidence, so the code depends on the caller. This is
    /// the classification used for custom inputs.
    pub fn code(&self) -> ErrCode {
        ErrCode::InvalidCustomInput
    }
}

impl From<serde_json::Error> for CodecError {
    fn from(value: serde_json::Error) -> Self {
        CodecError::Encoding(value.to_string())
    }
}
