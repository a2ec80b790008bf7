// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use thiserror::Error;
use zq_utils::{ErrCode, HttpError, RemoteError};

#[derive(Error, Debug)]
pub enum ProverError {
    #[error("prover rejected the request: {0}")]
    Rejected(RemoteError),

    #[error("proof {proof_id} not ready after {attempts} attempts")]
    ProofTimeout { proof_id: String, attempts: u32 },

    #[error("waiting for proof {proof_id} was cancelled")]
    Cancelled { proof_id: String },

    #[error(transparent)]
    Http(#[from] HttpError),
}

impl ProverError {
    pub fn code(&self) -> ErrCode {
        match self {
            ProverError::Rejected(remote) => match remote.code {
                ErrCode::Undefined => ErrCode::FailedToProve,
                code => code,
            },
            ProverError::ProofTimeout { .. } | ProverError::Cancelled { .. } => ErrCode::Timeout,
            ProverError::Http(_) => ErrCode::FailedToProve,
        }
    }
}
