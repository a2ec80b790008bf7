// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use serde::{Deserialize, Serialize};
use zq_codec::FieldValue;

/// One value extracted from an event log of a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub contract: String,
    pub log_index: i64,
    /// Topic 0 of the log
    pub event_id: FieldValue,
    /// Whether `value` comes from an indexed topic instead of the data body
    pub is_topic: bool,
    pub field_index: i64,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptData {
    pub block_num: i64,
    pub tx_hash: FieldValue,
    /// Order matches the extraction order of the circuit.
    pub fields: Vec<Field>,
}

/// One storage slot read at one block height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageData {
    pub block_num: i64,
    pub address: String,
    pub slot: FieldValue,
    pub value: FieldValue,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionData {
    pub hash: FieldValue,
    pub chain_id: u64,
    pub block_num: i64,
    pub nonce: i64,
    pub gas_tip_cap_or_gas_price: FieldValue,
    pub gas_fee_cap: FieldValue,
    pub gas_limit: i64,
    pub from: String,
    pub to: String,
    pub value: FieldValue,
}

/// An evidence item and the optional slot it occupies in the circuit input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indexed<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
    pub data: T,
}

impl<T> Indexed<T> {
    pub fn new(data: T, index: Option<u32>) -> Self {
        Self { index, data }
    }
}

pub type IndexedReceipt = Indexed<ReceiptData>;
pub type IndexedStorage = Indexed<StorageData>;
pub type IndexedTransaction = Indexed<TransactionData>;
