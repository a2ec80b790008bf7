// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use zq_prover::AppCircuitInfo;
use zq_utils::RemoteError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogExtractInfo {
    pub contract_address: String,
    pub log_index: i64,
    pub log_topic0: String,
    pub value_from_topic: bool,
    pub value_index: i64,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptInfo {
    pub blk_num: i64,
    pub transaction_hash: String,
    pub log_extract_infos: Vec<LogExtractInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageQueryInfo {
    pub account: String,
    pub storage_keys: Vec<String>,
    pub blk_num: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInfo {
    pub transaction_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrepareQueryRequest {
    /// Chain the evidence was taken from
    pub chain_id: u64,
    /// Chain the settling call is made on
    pub target_chain_id: u64,
    pub receipt_infos: Vec<ReceiptInfo>,
    pub storage_query_infos: Vec<StorageQueryInfo>,
    pub transaction_infos: Vec<TransactionInfo>,
    pub use_app_circuit_info: bool,
    pub app_circuit_info: AppCircuitInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrepareQueryResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<RemoteError>,
    /// Request id assigned by the gateway
    #[serde(default)]
    pub query_hash: String,
    /// Amount owed in wei, decimal
    #[serde(default)]
    pub fee: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAppCircuitProofRequest {
    pub query_hash: String,
    pub target_chain_id: u64,
    pub proof: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitAppCircuitProofResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<RemoteError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetQueryStatusRequest {
    pub query_hash: String,
    pub target_chain_id: u64,
}

/// Settlement status as reported by the gateway. Anything unrecognized is
/// read as pending.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueryStatus {
    #[serde(rename = "QS_TO_BE_PAID")]
    ToBePaid,
    #[serde(rename = "QS_COMPLETE")]
    Complete,
    #[serde(rename = "QS_FAILED")]
    Failed,
    #[default]
    #[serde(rename = "QS_PENDING", other)]
    Pending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetQueryStatusResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<RemoteError>,
    #[serde(default)]
    pub status: QueryStatus,
    /// Settling transaction, set once the status is complete
    #[serde(default)]
    pub tx_hash: String,
}
