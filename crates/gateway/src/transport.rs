// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{
    GatewayError, GetQueryStatusRequest, GetQueryStatusResponse, PrepareQueryRequest,
    PrepareQueryResponse, SubmitAppCircuitProofRequest, SubmitAppCircuitProofResponse,
};
use async_trait::async_trait;
use std::time::Duration;
use zq_utils::JsonEndpoint;

/// Calls understood by the gateway. Remote errors are returned inside the
/// responses; `Err` is reserved for failures to reach the service.
#[async_trait]
pub trait GatewayTransport: Send + Sync {
    async fn prepare_query(
        &self,
        request: &PrepareQueryRequest,
    ) -> Result<PrepareQueryResponse, GatewayError>;

    async fn submit_proof(
        &self,
        request: &SubmitAppCircuitProofRequest,
    ) -> Result<SubmitAppCircuitProofResponse, GatewayError>;

    async fn query_status(
        &self,
        request: &GetQueryStatusRequest,
    ) -> Result<GetQueryStatusResponse, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct HttpGatewayTransport {
    endpoint: JsonEndpoint,
}

impl HttpGatewayTransport {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, GatewayError> {
        Ok(Self {
            endpoint: JsonEndpoint::new(url, timeout)?,
        })
    }

    pub fn endpoint(&self) -> &JsonEndpoint {
        &self.endpoint
    }
}

#[async_trait]
impl GatewayTransport for HttpGatewayTransport {
    async fn prepare_query(
        &self,
        request: &PrepareQueryRequest,
    ) -> Result<PrepareQueryResponse, GatewayError> {
        Ok(self.endpoint.post("prepare_query", request).await?)
    }

    async fn submit_proof(
        &self,
        request: &SubmitAppCircuitProofRequest,
    ) -> Result<SubmitAppCircuitProofResponse, GatewayError> {
        Ok(self.endpoint.post("submit_proof", request).await?)
    }

    async fn query_status(
        &self,
        request: &GetQueryStatusRequest,
    ) -> Result<GetQueryStatusResponse, GatewayError> {
        Ok(self.endpoint.post("query_status", request).await?)
    }
}
