// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use zq_prover::{
    GetProofRequest, GetProofResponse, ProveAsyncResponse, ProveResponse, ProverError,
    ProverTransport,
};
use zq_request::ProveRequest;
use zq_utils::{ErrCode, RemoteError};

/// Proving service answering from scripted queues. An empty queue answers
/// with a default response: an empty proof, or a proof that is not ready.
#[derive(Clone, Default)]
pub struct MockProver {
    inner: Arc<Mutex<MockProverState>>,
}

#[derive(Default)]
struct MockProverState {
    prove_responses: VecDeque<ProveResponse>,
    prove_async_responses: VecDeque<ProveAsyncResponse>,
    get_proof_responses: VecDeque<GetProofResponse>,
    prove_requests: Vec<ProveRequest>,
    get_proof_requests: Vec<String>,
    prove_async_calls: u32,
}

pub fn remote_error(code: ErrCode, msg: &str) -> RemoteError {
    RemoteError {
        code,
        msg: msg.to_string(),
    }
}

impl MockProver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_prove(&self, res: ProveResponse) {
        self.inner.lock().unwrap().prove_responses.push_back(res);
    }

    pub fn push_prove_async(&self, proof_id: &str) {
        self.inner
            .lock()
            .unwrap()
            .prove_async_responses
            .push_back(ProveAsyncResponse {
                proof_id: proof_id.to_string(),
                ..Default::default()
            });
    }

    /// Queues `count` not-ready answers followed by `proof`.
    pub fn push_proof_after(&self, count: usize, proof: &str) {
        let mut state = self.inner.lock().unwrap();
        for _ in 0..count {
            state.get_proof_responses.push_back(GetProofResponse::default());
        }
        state.get_proof_responses.push_back(GetProofResponse {
            err: None,
            proof: proof.to_string(),
        });
    }

    pub fn push_get_proof_error(&self, code: ErrCode, msg: &str) {
        self.inner
            .lock()
            .unwrap()
            .get_proof_responses
            .push_back(GetProofResponse {
                err: Some(remote_error(code, msg)),
                proof: String::new(),
            });
    }

    pub fn prove_requests(&self) -> Vec<ProveRequest> {
        self.inner.lock().unwrap().prove_requests.clone()
    }

    pub fn prove_async_calls(&self) -> u32 {
        self.inner.lock().unwrap().prove_async_calls
    }

    pub fn get_proof_calls(&self) -> usize {
        self.inner.lock().unwrap().get_proof_requests.len()
    }

    pub fn get_proof_ids(&self) -> Vec<String> {
        self.inner.lock().unwrap().get_proof_requests.clone()
    }
}

#[async_trait]
impl ProverTransport for MockProver {
    async fn prove(&self, request: &ProveRequest) -> Result<ProveResponse, ProverError> {
        let mut state = self.inner.lock().unwrap();
        state.prove_requests.push(request.clone());
        Ok(state.prove_responses.pop_front().unwrap_or_default())
    }

    async fn prove_async(
        &self,
        request: &ProveRequest,
    ) -> Result<ProveAsyncResponse, ProverError> {
        let mut state = self.inner.lock().unwrap();
        state.prove_requests.push(request.clone());
        state.prove_async_calls += 1;
        Ok(state.prove_async_responses.pop_front().unwrap_or_default())
    }

    async fn get_proof(&self, request: &GetProofRequest) -> Result<GetProofResponse, ProverError> {
        let mut state = self.inner.lock().unwrap();
        state.get_proof_requests.push(request.proof_id.clone());
        Ok(state.get_proof_responses.pop_front().unwrap_or_default())
    }
}
