// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use core::fmt;
use serde::{Deserialize, Serialize};

/// `Preparing -> Prepared -> ProofSubmitted -> {Settled | Failed | TimedOut}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionState {
    Preparing,
    Prepared,
    ProofSubmitted,
    Settled,
    Failed,
    TimedOut,
}

impl SubmissionState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Settled | SubmissionState::Failed | SubmissionState::TimedOut
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SubmissionState::Preparing => "PREPARING",
            SubmissionState::Prepared => "PREPARED",
            SubmissionState::ProofSubmitted => "PROOF_SUBMITTED",
            SubmissionState::Settled => "SETTLED",
            SubmissionState::Failed => "FAILED",
            SubmissionState::TimedOut => "TIMED_OUT",
        }
    }
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A query known to the gateway and how far its submission got.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub request_id: String,
    pub fee: String,
    pub dst_chain_id: u64,
    pub state: SubmissionState,
}

impl Submission {
    pub fn new(request_id: impl Into<String>, fee: impl Into<String>, dst_chain_id: u64) -> Self {
        Self {
            request_id: request_id.into(),
            fee: fee.into(),
            dst_chain_id,
            state: SubmissionState::Prepared,
        }
    }

    /// Resumes a query prepared elsewhere, e.g. by an earlier process. The fee
    /// quote is not known.
    pub fn prepared(request_id: impl Into<String>, dst_chain_id: u64) -> Self {
        Self::new(request_id, String::new(), dst_chain_id)
    }

    pub fn result(&self) -> SubmitResult {
        SubmitResult {
            request_id: self.request_id.clone(),
            fee: self.fee.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub request_id: String,
    /// Amount owed in wei, decimal
    pub fee: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalResult {
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_hash: Option<String>,
    pub success: bool,
    pub state: SubmissionState,
}

impl FinalResult {
    pub fn settled(request_id: &str, tx_hash: Option<String>) -> Self {
        Self {
            request_id: request_id.to_string(),
            tx_hash,
            success: true,
            state: SubmissionState::Settled,
        }
    }

    pub fn failed(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            tx_hash: None,
            success: false,
            state: SubmissionState::Failed,
        }
    }

    pub fn timed_out(request_id: &str) -> Self {
        Self {
            request_id: request_id.to_string(),
            tx_hash: None,
            success: false,
            state: SubmissionState::TimedOut,
        }
    }
}
