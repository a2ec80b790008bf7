// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::SubmissionState;
use thiserror::Error;
use zq_codec::CodecError;
use zq_utils::{ErrCode, HttpError, RemoteError};

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("gateway rejected {step}: {err}")]
    Remote {
        step: &'static str,
        err: RemoteError,
    },

    #[error("request {request_id} is {actual}, expected {expected}")]
    InvalidState {
        request_id: String,
        expected: SubmissionState,
        actual: SubmissionState,
    },

    #[error("waiting for request {request_id} was cancelled")]
    Cancelled { request_id: String },

    #[error("evidence could not be projected: {0}")]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Http(#[from] HttpError),
}

impl GatewayError {
    pub fn code(&self) -> ErrCode {
        match self {
            GatewayError::Codec(_) => ErrCode::InvalidInput,
            GatewayError::Cancelled { .. } => ErrCode::Timeout,
            GatewayError::Remote { .. }
            | GatewayError::InvalidState { .. }
            | GatewayError::Http(_) => ErrCode::GatewayError,
        }
    }
}
