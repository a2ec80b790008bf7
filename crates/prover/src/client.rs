// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{
    GetProofRequest, HttpProverTransport, ProveAsyncResponse, ProveResponse, ProverError,
    ProverTransport,
};
use std::{future::Future, time::Duration};
use tracing::{debug, info};
use zq_request::ProofRequest;
use zq_utils::{hex_preview, poll_until, PollConfig, PollOutcome, PollStep};

/// Handle to a proving service. Cheap to share by reference; the caller owns
/// its lifetime.
#[derive(Debug, Clone)]
pub struct Prover<T = HttpProverTransport> {
    transport: T,
}

impl Prover<HttpProverTransport> {
    pub fn connect(url: &str, timeout: Duration) -> Result<Self, ProverError> {
        Ok(Self::new(HttpProverTransport::new(url, timeout)?))
    }
}

impl<T: ProverTransport> Prover<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Builds `request` and waits for the service to compute the proof.
    pub async fn prove(&self, request: &ProofRequest) -> Result<ProveResponse, ProverError> {
        let res = self.transport.prove(&request.build()).await?;
        if let Some(err) = res.err {
            return Err(ProverError::Rejected(err));
        }
        info!(proof = %hex_preview(&res.proof), "proof computed");
        Ok(res)
    }

    /// Hands `request` to the service and returns the id to fetch the proof
    /// with later.
    pub async fn prove_async(
        &self,
        request: &ProofRequest,
    ) -> Result<ProveAsyncResponse, ProverError> {
        let res = self.transport.prove_async(&request.build()).await?;
        if let Some(err) = res.err {
            return Err(ProverError::Rejected(err));
        }
        info!(proof_id = %res.proof_id, "proof requested");
        Ok(res)
    }

    /// `None` while the proof is still being computed.
    pub async fn get_proof(&self, proof_id: &str) -> Result<Option<String>, ProverError> {
        let req = GetProofRequest {
            proof_id: proof_id.to_string(),
        };
        let res = self.transport.get_proof(&req).await?;
        if let Some(err) = res.err {
            return Err(ProverError::Rejected(err));
        }
        Ok(Some(res.proof).filter(|proof| !proof.is_empty()))
    }

    pub async fn wait_for_proof(
        &self,
        proof_id: &str,
        poll: &PollConfig,
    ) -> Result<String, ProverError> {
        self.wait_for_proof_until(proof_id, poll, std::future::pending())
            .await
    }

    /// Polls [`Prover::get_proof`] until the proof exists. A remote error
    /// ends the wait immediately.
    pub async fn wait_for_proof_until(
        &self,
        proof_id: &str,
        poll: &PollConfig,
        cancel: impl Future<Output = ()>,
    ) -> Result<String, ProverError> {
        let outcome = poll_until(poll, cancel, |attempt| async move {
            debug!(proof_id, attempt, "checking proof");
            Ok::<_, ProverError>(match self.get_proof(proof_id).await? {
                Some(proof) => PollStep::Ready(proof),
                None => PollStep::Pending,
            })
        })
        .await?;

        match outcome {
            PollOutcome::Ready(proof) => {
                info!(proof_id, proof = %hex_preview(&proof), "proof ready");
                Ok(proof)
            }
            PollOutcome::Exhausted { attempts } => Err(ProverError::ProofTimeout {
                proof_id: proof_id.to_string(),
                attempts,
            }),
            PollOutcome::Cancelled { .. } => Err(ProverError::Cancelled {
                proof_id: proof_id.to_string(),
            }),
        }
    }
}
