// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zq_utils::RemoteError;

/// Metadata of the application circuit that produced a proof. The gateway
/// needs it to verify the proof; fields this client does not know are kept
/// in `extra` and passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppCircuitInfo {
    #[serde(default)]
    pub output_commitment: String,
    #[serde(default)]
    pub vk_hash: String,
    #[serde(default)]
    pub input_commitments: Vec<String>,
    #[serde(default)]
    pub toggles_commitment: String,
    #[serde(default)]
    pub toggles: Vec<bool>,
    #[serde(default)]
    pub use_callback: bool,
    #[serde(default)]
    pub output: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProveResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<RemoteError>,
    #[serde(default)]
    pub proof: String,
    #[serde(default)]
    pub circuit_info: AppCircuitInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProveAsyncResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<RemoteError>,
    #[serde(default)]
    pub proof_id: String,
    #[serde(default)]
    pub circuit_info: AppCircuitInfo,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProofRequest {
    pub proof_id: String,
}

/// `proof` stays empty until the proof has been computed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetProofResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub err: Option<RemoteError>,
    #[serde(default)]
    pub proof: String,
}
