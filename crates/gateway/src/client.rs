// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{
    FinalResult, GatewayError, GatewayTransport, GetQueryStatusRequest, GetQueryStatusResponse,
    HttpGatewayTransport, PrepareQueryRequest, QueryStatus, SubmitAppCircuitProofRequest,
    SubmitResult, Submission, SubmissionState,
};
use std::{future::Future, time::Duration};
use tracing::{debug, info, warn};
use zq_prover::{AppCircuitInfo, ProveResponse};
use zq_request::ProofRequest;
use zq_utils::{hex_preview, poll_until, PollConfig, PollOutcome, PollStep};

/// Handle to the gateway. Settlement polling follows `status_poll`, every
/// 10s for 50 attempts unless configured otherwise.
#[derive(Debug, Clone)]
pub struct Gateway<T = HttpGatewayTransport> {
    transport: T,
    status_poll: PollConfig,
}

impl Gateway<HttpGatewayTransport> {
    pub fn connect(url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self::new(HttpGatewayTransport::new(url, timeout)?))
    }
}

impl<T: GatewayTransport> Gateway<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            status_poll: PollConfig::settlement(),
        }
    }

    pub fn with_status_poll(mut self, poll: PollConfig) -> Self {
        self.status_poll = poll;
        self
    }

    pub fn status_poll(&self) -> &PollConfig {
        &self.status_poll
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Registers the evidence of `request` with the gateway. The returned
    /// submission is `Prepared` and carries the request id and fee quote.
    pub async fn prepare_query(
        &self,
        request: &ProofRequest,
        circuit_info: &AppCircuitInfo,
        src_chain_id: u64,
        dst_chain_id: u64,
    ) -> Result<Submission, GatewayError> {
        let req =
            PrepareQueryRequest::from_request(request, circuit_info, src_chain_id, dst_chain_id)?;
        let res = self.transport.prepare_query(&req).await?;
        if let Some(err) = res.err {
            return Err(GatewayError::Remote {
                step: "prepare_query",
                err,
            });
        }

        info!(
            request_id = %res.query_hash,
            fee = %res.fee,
            src_chain_id,
            dst_chain_id,
            "query prepared"
        );
        Ok(Submission::new(res.query_hash, res.fee, dst_chain_id))
    }

    /// Attaches `proof` to a prepared submission.
    pub async fn submit_proof(
        &self,
        submission: &mut Submission,
        proof: &str,
    ) -> Result<(), GatewayError> {
        if submission.state != SubmissionState::Prepared {
            return Err(GatewayError::InvalidState {
                request_id: submission.request_id.clone(),
                expected: SubmissionState::Prepared,
                actual: submission.state,
            });
        }

        let req = SubmitAppCircuitProofRequest {
            query_hash: submission.request_id.clone(),
            target_chain_id: submission.dst_chain_id,
            proof: proof.to_string(),
        };
        let res = self.transport.submit_proof(&req).await?;
        if let Some(err) = res.err {
            return Err(GatewayError::Remote {
                step: "submit_proof",
                err,
            });
        }

        submission.state = SubmissionState::ProofSubmitted;
        info!(
            request_id = %submission.request_id,
            dst_chain_id = submission.dst_chain_id,
            proof = %hex_preview(proof),
            "proof submitted"
        );
        Ok(())
    }

    /// Attaches `proof` to a query known only by its id.
    pub async fn submit_proof_for(
        &self,
        request_id: &str,
        dst_chain_id: u64,
        proof: &str,
    ) -> Result<Submission, GatewayError> {
        let mut submission = Submission::prepared(request_id, dst_chain_id);
        self.submit_proof(&mut submission, proof).await?;
        Ok(submission)
    }

    /// Prepares the query and submits the proof in one go.
    pub async fn submit(
        &self,
        request: &ProofRequest,
        proof: &ProveResponse,
        src_chain_id: u64,
        dst_chain_id: u64,
    ) -> Result<SubmitResult, GatewayError> {
        let mut submission = self
            .prepare_query(request, &proof.circuit_info, src_chain_id, dst_chain_id)
            .await?;
        self.submit_proof(&mut submission, &proof.proof).await?;
        Ok(submission.result())
    }

    /// A single settlement status check.
    pub async fn query_status(
        &self,
        request_id: &str,
        dst_chain_id: u64,
    ) -> Result<GetQueryStatusResponse, GatewayError> {
        let req = GetQueryStatusRequest {
            query_hash: request_id.to_string(),
            target_chain_id: dst_chain_id,
        };
        let res = self.transport.query_status(&req).await?;
        if let Some(err) = res.err {
            return Err(GatewayError::Remote {
                step: "query_status",
                err,
            });
        }
        Ok(res)
    }

    pub async fn wait(&self, request_id: &str, dst_chain_id: u64) -> Result<FinalResult, GatewayError> {
        self.wait_until(request_id, dst_chain_id, std::future::pending())
            .await
    }

    /// Polls the settlement status until it is terminal or the attempt budget
    /// is spent. Running out of attempts is not an error: the result reports
    /// `TimedOut` since the request may still settle later.
    ///
    /// `cancel` is only observed between two status checks.
    pub async fn wait_until(
        &self,
        request_id: &str,
        dst_chain_id: u64,
        cancel: impl Future<Output = ()>,
    ) -> Result<FinalResult, GatewayError> {
        let outcome = poll_until(&self.status_poll, cancel, |attempt| async move {
            let res = self.query_status(request_id, dst_chain_id).await?;
            Ok::<_, GatewayError>(match res.status {
                QueryStatus::Complete => {
                    let tx_hash = Some(res.tx_hash).filter(|h| !h.is_empty());
                    PollStep::Ready(FinalResult::settled(request_id, tx_hash))
                }
                QueryStatus::Failed => PollStep::Ready(FinalResult::failed(request_id)),
                QueryStatus::ToBePaid => {
                    warn!(
                        request_id,
                        attempt, "waiting for payment, the fee has to be paid on chain"
                    );
                    PollStep::Pending
                }
                QueryStatus::Pending => {
                    debug!(request_id, attempt, "waiting for the settling transaction");
                    PollStep::Pending
                }
            })
        })
        .await?;

        match outcome {
            PollOutcome::Ready(result) => {
                info!(
                    request_id,
                    dst_chain_id,
                    success = result.success,
                    tx_hash = ?result.tx_hash,
                    "request {}",
                    result.state
                );
                Ok(result)
            }
            PollOutcome::Exhausted { attempts } => {
                warn!(
                    request_id,
                    attempts,
                    "request not settled within {:?}",
                    self.status_poll.budget()
                );
                Ok(FinalResult::timed_out(request_id))
            }
            PollOutcome::Cancelled { attempts } => {
                debug!(request_id, attempts, "wait cancelled");
                Err(GatewayError::Cancelled {
                    request_id: request_id.to_string(),
                })
            }
        }
    }

    /// Waits for a submitted proof to settle and records the outcome on
    /// `submission`.
    pub async fn wait_submission(
        &self,
        submission: &mut Submission,
    ) -> Result<FinalResult, GatewayError> {
        if submission.state != SubmissionState::ProofSubmitted {
            return Err(GatewayError::InvalidState {
                request_id: submission.request_id.clone(),
                expected: SubmissionState::ProofSubmitted,
                actual: submission.state,
            });
        }
        let result = self
            .wait(&submission.request_id, submission.dst_chain_id)
            .await?;
        submission.state = result.state;
        Ok(result)
    }
}
