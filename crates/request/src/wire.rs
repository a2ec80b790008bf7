// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{IndexedReceipt, IndexedStorage, IndexedTransaction};
use serde::{Deserialize, Serialize};
use zq_codec::{CodecError, CustomInput};

/// Encoded custom input as carried inside a [`ProveRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomInputBlob {
    pub json_bytes: String,
}

impl CustomInputBlob {
    pub fn encode(input: &CustomInput) -> Result<Self, CodecError> {
        Ok(Self {
            json_bytes: input.encode()?,
        })
    }

    pub fn decode(&self) -> Result<CustomInput, CodecError> {
        CustomInput::decode(&self.json_bytes)
    }
}

impl Default for CustomInputBlob {
    fn default() -> Self {
        Self {
            json_bytes: "{}".to_string(),
        }
    }
}

/// Finalized request sent to the proving service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProveRequest {
    pub receipts: Vec<IndexedReceipt>,
    pub storages: Vec<IndexedStorage>,
    pub transactions: Vec<IndexedTransaction>,
    pub custom_input: CustomInputBlob,
}
