// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Re-projection of builder evidence into the descriptors the gateway
//! expects. Byte-like values are sent in canonical hex, addresses in their
//! EIP-55 checksum form.

use crate::{
    LogExtractInfo, PrepareQueryRequest, ReceiptInfo, StorageQueryInfo, TransactionInfo,
};
use zq_codec::{parse_address, CodecError};
use zq_prover::AppCircuitInfo;
use zq_request::{Field, ProofRequest, ReceiptData, StorageData, TransactionData};

fn checksummed(address: &str) -> Result<String, CodecError> {
    Ok(parse_address(address)?.to_checksum(None))
}

fn log_extract_info(field: &Field) -> Result<LogExtractInfo, CodecError> {
    Ok(LogExtractInfo {
        contract_address: checksummed(&field.contract)?,
        log_index: field.log_index,
        log_topic0: field.event_id.to_hex()?,
        value_from_topic: field.is_topic,
        value_index: field.field_index,
        value: field.value.to_hex()?,
    })
}

pub fn receipt_info(data: &ReceiptData) -> Result<ReceiptInfo, CodecError> {
    Ok(ReceiptInfo {
        blk_num: data.block_num,
        transaction_hash: data.tx_hash.to_hex()?,
        log_extract_infos: data
            .fields
            .iter()
            .map(log_extract_info)
            .collect::<Result<_, _>>()?,
    })
}

pub fn storage_query_info(data: &StorageData) -> Result<StorageQueryInfo, CodecError> {
    Ok(StorageQueryInfo {
        account: checksummed(&data.address)?,
        storage_keys: vec![data.slot.to_hex()?],
        blk_num: data.block_num,
    })
}

pub fn transaction_info(data: &TransactionData) -> Result<TransactionInfo, CodecError> {
    Ok(TransactionInfo {
        transaction_hash: data.hash.to_hex()?,
    })
}

impl PrepareQueryRequest {
    pub fn from_request(
        request: &ProofRequest,
        circuit_info: &AppCircuitInfo,
        src_chain_id: u64,
        dst_chain_id: u64,
    ) -> Result<Self, CodecError> {
        Ok(Self {
            chain_id: src_chain_id,
            target_chain_id: dst_chain_id,
            receipt_infos: request
                .receipts()
                .iter()
                .map(|r| receipt_info(&r.data))
                .collect::<Result<_, _>>()?,
            storage_query_infos: request
                .storages()
                .iter()
                .map(|s| storage_query_info(&s.data))
                .collect::<Result<_, _>>()?,
            transaction_infos: request
                .transactions()
                .iter()
                .map(|t| transaction_info(&t.data))
                .collect::<Result<_, _>>()?,
            use_app_circuit_info: true,
            app_circuit_info: circuit_info.clone(),
        })
    }
}
