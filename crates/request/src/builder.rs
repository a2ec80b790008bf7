// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::{
    validate::{validate_receipt, validate_storage, validate_transaction},
    CustomInputBlob, Indexed, IndexedReceipt, IndexedStorage, IndexedTransaction, ProveRequest,
    ReceiptData, RequestError, StorageData, TransactionData,
};
use tracing::debug;
use zq_codec::CustomInput;

/// Accumulates validated evidence for one proof.
///
/// Every `add_*` validates the item before touching the builder, so a
/// rejected item leaves all sequences as they were.
#[derive(Debug, Clone, Default)]
pub struct ProofRequest {
    receipts: Vec<IndexedReceipt>,
    storages: Vec<IndexedStorage>,
    transactions: Vec<IndexedTransaction>,
    custom_input: Option<CustomInputBlob>,
}

fn check_index<T>(
    kind: &'static str,
    items: &[Indexed<T>],
    index: Option<u32>,
) -> Result<(), RequestError> {
    match index {
        Some(index) if items.iter().any(|item| item.index == Some(index)) => {
            Err(RequestError::DuplicateIndex { kind, index })
        }
        _ => Ok(()),
    }
}

impl ProofRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn receipts(&self) -> &[IndexedReceipt] {
        &self.receipts
    }

    pub fn storages(&self) -> &[IndexedStorage] {
        &self.storages
    }

    pub fn transactions(&self) -> &[IndexedTransaction] {
        &self.transactions
    }

    pub fn add_receipt(
        &mut self,
        data: ReceiptData,
        index: Option<u32>,
    ) -> Result<(), RequestError> {
        validate_receipt(&data)?;
        check_index("receipt", &self.receipts, index)?;
        debug!(
            block_num = data.block_num,
            fields = data.fields.len(),
            ?index,
            "receipt added"
        );
        self.receipts.push(Indexed::new(data, index));
        Ok(())
    }

    pub fn add_storage(
        &mut self,
        data: StorageData,
        index: Option<u32>,
    ) -> Result<(), RequestError> {
        validate_storage(&data)?;
        check_index("storage", &self.storages, index)?;
        debug!(
            block_num = data.block_num,
            address = %data.address,
            ?index,
            "storage added"
        );
        self.storages.push(Indexed::new(data, index));
        Ok(())
    }

    pub fn add_transaction(
        &mut self,
        data: TransactionData,
        index: Option<u32>,
    ) -> Result<(), RequestError> {
        validate_transaction(&data)?;
        check_index("transaction", &self.transactions, index)?;
        debug!(
            block_num = data.block_num,
            hash = %data.hash,
            ?index,
            "transaction added"
        );
        self.transactions.push(Indexed::new(data, index));
        Ok(())
    }

    /// Replaces the custom input. Values were already checked when they were
    /// constructed so only encoding can fail here.
    pub fn set_custom_input(&mut self, input: &CustomInput) -> Result<(), RequestError> {
        self.custom_input = Some(CustomInputBlob::encode(input)?);
        Ok(())
    }

    /// Snapshot of the current state as a wire request. An unset custom input
    /// becomes the empty document.
    pub fn build(&self) -> ProveRequest {
        ProveRequest {
            receipts: self.receipts.clone(),
            storages: self.storages.clone(),
            transactions: self.transactions.clone(),
            custom_input: self.custom_input.clone().unwrap_or_default(),
        }
    }
}
