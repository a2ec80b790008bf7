// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{
    GetProofRequest, GetProofResponse, ProveAsyncResponse, ProveResponse, ProverError,
};
use async_trait::async_trait;
use std::time::Duration;
use zq_request::ProveRequest;
use zq_utils::JsonEndpoint;

/// Calls understood by a proving service. Remote errors are returned inside
/// the responses; `Err` is reserved for failures to reach the service.
#[async_trait]
pub trait ProverTransport: Send + Sync {
    async fn prove(&self, request: &ProveRequest) -> Result<ProveResponse, ProverError>;

    async fn prove_async(&self, request: &ProveRequest)
        -> Result<ProveAsyncResponse, ProverError>;

    async fn get_proof(&self, request: &GetProofRequest)
        -> Result<GetProofResponse, ProverError>;
}

/// Proving service reached over JSON/HTTP.
#[derive(Debug, Clone)]
pub struct HttpProverTransport {
    endpoint: JsonEndpoint,
}

impl HttpProverTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ProverError> {
        Ok(Self {
            endpoint: JsonEndpoint::new(url, timeout)?,
        })
    }

    pub fn endpoint(&self) -> &JsonEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl ProverTransport for HttpProverTransport {
    async fn prove(&self, request: &ProveRequest) -> Result<ProveResponse, ProverError> {
        Ok(self.endpoint.post("prove", request).await?)
    }

    async fn prove_async(
        &self,
        request: &ProveRequest,
    ) -> Result<ProveAsyncResponse, ProverError> {
        Ok(self.endpoint.post("prove_async", request).await?)
    }

    async fn get_proof(&self, request: &GetProofRequest) -> Result<GetProofResponse, ProverError> {
        Ok(self.endpoint.post("get_proof", request).await?)
    }
}
