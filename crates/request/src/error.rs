// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;
use zq_codec::CodecError;
use zq_utils::ErrCode;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("invalid {field} {value}")]
    Invalid { field: String, value: String },

    #[error("{kind} index {index} is already taken")]
    DuplicateIndex { kind: &'static str, index: u32 },

    #[error("invalid custom input: {0}")]
    CustomInput(#[from] CodecError),
}

impl RequestError {
    pub(crate) fn invalid(field: impl Into<String>, value: impl ToString) -> Self {
        RequestError::Invalid {
            field: field.into(),
            value: value.to_string(),
        }
    }

    /// Attribute name of an `Invalid` failure.
    pub fn field(&self) -> Option<&str> {
        match self {
            RequestError::Invalid { field, .. } => Some(field),
            _ => None,
        }
    }

    pub fn code(&self) -> ErrCode {
        match self {
            RequestError::Invalid { .. } | RequestError::DuplicateIndex { .. } => {
                ErrCode::InvalidInput
            }
            RequestError::CustomInput(_) => ErrCode::InvalidCustomInput,
        }
    }
}
