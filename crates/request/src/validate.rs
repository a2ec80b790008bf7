// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Well-formedness checks for single evidence items. Every check reports the
//! first offending attribute together with the value that was supplied.

use crate::{Field, ReceiptData, RequestError, StorageData, TransactionData};
use zq_codec::{is_address, FieldValue, MAX_VALUE_BYTES};

type Result<T> = std::result::Result<T, RequestError>;

/// Byte-like values must occupy between 1 and 32 bytes.
pub fn valid_len(value: &FieldValue) -> bool {
    matches!(value.byte_len(), Ok(len) if len > 0 && len <= MAX_VALUE_BYTES)
}

fn check_len(name: &str, value: &FieldValue) -> Result<()> {
    if valid_len(value) {
        Ok(())
    } else {
        Err(RequestError::invalid(name, value))
    }
}

fn check_address(name: &str, value: &str) -> Result<()> {
    if is_address(value) {
        Ok(())
    } else {
        Err(RequestError::invalid(name, value))
    }
}

fn check_non_negative(name: &str, value: i64) -> Result<()> {
    if value < 0 {
        Err(RequestError::invalid(name, value))
    } else {
        Ok(())
    }
}

pub fn validate_receipt(data: &ReceiptData) -> Result<()> {
    check_non_negative("receipt.block_num", data.block_num)?;
    check_len("receipt.tx_hash", &data.tx_hash)?;
    for (i, field) in data.fields.iter().enumerate() {
        validate_field(field, i)?;
    }
    Ok(())
}

/// Checks the `i`th field of a receipt.
pub fn validate_field(field: &Field, i: usize) -> Result<()> {
    let name = |attr: &str| format!("receipt.field[{i}].{attr}");
    check_address(&name("contract"), &field.contract)?;
    check_non_negative(&name("log_index"), field.log_index)?;
    check_len(&name("event_id"), &field.event_id)?;
    check_non_negative(&name("field_index"), field.field_index)?;
    check_len(&name("value"), &field.value)
}

pub fn validate_storage(data: &StorageData) -> Result<()> {
    check_non_negative("storage.block_num", data.block_num)?;
    check_address("storage.address", &data.address)?;
    check_len("storage.slot", &data.slot)?;
    check_len("storage.value", &data.value)
}

pub fn validate_transaction(data: &TransactionData) -> Result<()> {
    check_len("transaction.hash", &data.hash)?;
    check_non_negative("transaction.block_num", data.block_num)?;
    check_non_negative("transaction.nonce", data.nonce)?;
    check_len(
        "transaction.gas_tip_cap_or_gas_price",
        &data.gas_tip_cap_or_gas_price,
    )?;
    check_len("transaction.gas_fee_cap", &data.gas_fee_cap)?;
    check_non_negative("transaction.gas_limit", data.gas_limit)?;
    check_address("transaction.from", &data.from)?;
    check_address("transaction.to", &data.to)?;
    check_len("transaction.value", &data.value)
}
