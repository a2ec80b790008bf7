// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::remote_error;
use async_trait::async_trait;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};
use zq_gateway::{
    GatewayError, GatewayTransport, GetQueryStatusRequest, GetQueryStatusResponse,
    PrepareQueryRequest, PrepareQueryResponse, QueryStatus, SubmitAppCircuitProofRequest,
    SubmitAppCircuitProofResponse,
};
use zq_utils::{ErrCode, HttpError};

/// Gateway answering from scripted queues. With nothing queued, prepare and
/// submit succeed and every status check reports pending.
#[derive(Clone, Default)]
pub struct MockGateway {
    inner: Arc<Mutex<MockGatewayState>>,
}

#[derive(Default)]
struct MockGatewayState {
    prepare_responses: VecDeque<PrepareQueryResponse>,
    submit_responses: VecDeque<SubmitAppCircuitProofResponse>,
    status_responses: VecDeque<Result<GetQueryStatusResponse, String>>,
    prepare_requests: Vec<PrepareQueryRequest>,
    submit_requests: Vec<SubmitAppCircuitProofRequest>,
    status_calls: u32,
}

impl MockGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_prepared(&self, query_hash: &str, fee: &str) {
        self.inner
            .lock()
            .unwrap()
            .prepare_responses
            .push_back(PrepareQueryResponse {
                err: None,
                query_hash: query_hash.to_string(),
                fee: fee.to_string(),
            });
    }

    pub fn push_prepare_error(&self, msg: &str) {
        self.inner
            .lock()
            .unwrap()
            .prepare_responses
            .push_back(PrepareQueryResponse {
                err: Some(remote_error(ErrCode::GatewayError, msg)),
                ..Default::default()
            });
    }

    pub fn push_submit_error(&self, msg: &str) {
        self.inner
            .lock()
            .unwrap()
            .submit_responses
            .push_back(SubmitAppCircuitProofResponse {
                err: Some(remote_error(ErrCode::GatewayError, msg)),
            });
    }

    pub fn push_status(&self, status: QueryStatus, tx_hash: &str) {
        self.inner
            .lock()
            .unwrap()
            .status_responses
            .push_back(Ok(GetQueryStatusResponse {
                err: None,
                status,
                tx_hash: tx_hash.to_string(),
            }));
    }

    pub fn push_pending(&self, count: usize) {
        for _ in 0..count {
            self.push_status(QueryStatus::Pending, "");
        }
    }

    pub fn push_status_error(&self, msg: &str) {
        self.inner
            .lock()
            .unwrap()
            .status_responses
            .push_back(Ok(GetQueryStatusResponse {
                err: Some(remote_error(ErrCode::GatewayError, msg)),
                ..Default::default()
            }));
    }

    /// The next status check fails to reach the gateway.
    pub fn push_status_unreachable(&self, url: &str) {
        self.inner
            .lock()
            .unwrap()
            .status_responses
            .push_back(Err(url.to_string()));
    }

    pub fn prepare_requests(&self) -> Vec<PrepareQueryRequest> {
        self.inner.lock().unwrap().prepare_requests.clone()
    }

    pub fn submit_requests(&self) -> Vec<SubmitAppCircuitProofRequest> {
        self.inner.lock().unwrap().submit_requests.clone()
    }

    pub fn prepare_calls(&self) -> usize {
        self.inner.lock().unwrap().prepare_requests.len()
    }

    pub fn submit_calls(&self) -> usize {
        self.inner.lock().unwrap().submit_requests.len()
    }

    pub fn status_calls(&self) -> u32 {
        self.inner.lock().unwrap().status_calls
    }
}

#[async_trait]
impl GatewayTransport for MockGateway {
    async fn prepare_query(
        &self,
        request: &PrepareQueryRequest,
    ) -> Result<PrepareQueryResponse, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.prepare_requests.push(request.clone());
        Ok(state.prepare_responses.pop_front().unwrap_or_default())
    }

    async fn submit_proof(
        &self,
        request: &SubmitAppCircuitProofRequest,
    ) -> Result<SubmitAppCircuitProofResponse, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.submit_requests.push(request.clone());
        Ok(state.submit_responses.pop_front().unwrap_or_default())
    }

    async fn query_status(
        &self,
        _request: &GetQueryStatusRequest,
    ) -> Result<GetQueryStatusResponse, GatewayError> {
        let mut state = self.inner.lock().unwrap();
        state.status_calls += 1;
        match state.status_responses.pop_front() {
            Some(Ok(res)) => Ok(res),
            Some(Err(url)) => Err(GatewayError::Http(HttpError::Status { url, status: 502 })),
            None => Ok(GetQueryStatusResponse::default()),
        }
    }
}
