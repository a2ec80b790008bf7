// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use alloy_primitives::B256;
use anyhow::Result;
use num_bigint::BigInt;
use proptest::prelude::*;
use zq_codec::{as_bytes32, as_uint248, CircuitDataType, CodecError, CustomInput};
use zq_request::{CustomInputBlob, ProofRequest, RequestError};
use zq_test_helpers::{
    custom_input_sample, receipt_with, sample_request, swap_amount_field, swap_receipt,
    transaction_sample, usdc_transfer_field, USDC_BAD_CHECKSUM,
};
use zq_utils::ErrCode;

#[test]
fn test_swap_receipt_is_appended() -> Result<()> {
    let mut request = ProofRequest::new();
    request.add_receipt(swap_receipt(), None)?;

    assert_eq!(request.receipts().len(), 1);
    assert_eq!(request.receipts()[0].index, None);
    assert_eq!(request.receipts()[0].data.fields.len(), 3);

    let wire = request.build();
    assert_eq!(wire.receipts.len(), 1);
    assert_eq!(wire.custom_input, CustomInputBlob::default());
    Ok(())
}

#[test]
fn test_transaction_with_bad_recipient_is_rejected() {
    let mut request = ProofRequest::new();
    let mut tx = transaction_sample();
    tx.to = "not-an-address".to_string();

    let err = request.add_transaction(tx, None).unwrap_err();
    assert_eq!(err.code(), ErrCode::InvalidInput);
    assert_eq!(err.field(), Some("transaction.to"));
    assert!(err.to_string().contains("not-an-address"));
    assert!(request.transactions().is_empty());
}

#[test]
fn test_bad_checksum_contract_is_rejected() {
    let mut field = usdc_transfer_field();
    field.contract = USDC_BAD_CHECKSUM.to_string();
    let receipt = receipt_with(vec![swap_amount_field(), field]);

    let err = ProofRequest::new().add_receipt(receipt, None).unwrap_err();
    assert_eq!(err.field(), Some("receipt.field[1].contract"));
}

#[test]
fn test_lowercase_contract_is_accepted() -> Result<()> {
    let mut field = usdc_transfer_field();
    field.contract = USDC_BAD_CHECKSUM.to_lowercase();

    let mut request = ProofRequest::new();
    request.add_receipt(receipt_with(vec![field]), Some(4))?;
    assert_eq!(request.receipts()[0].index, Some(4));
    Ok(())
}

#[test]
fn test_custom_input_blob_decodes_to_the_same_input() -> Result<()> {
    let request = sample_request();
    let blob = request.build().custom_input;

    assert!(blob.json_bytes.starts_with(r#"{"u248Var":{"type":"Uint248","data":"0"}"#));

    let decoded = blob.decode()?;
    assert_eq!(decoded, custom_input_sample());
    assert_eq!(decoded.len(), 8);
    Ok(())
}

#[test]
fn test_out_of_range_value_in_blob_fails() {
    let too_big = BigInt::from(1) << 248;
    let json = format!(r#"{{"x":{{"type":"Uint248","data":"{too_big}"}}}}"#);
    let blob = CustomInputBlob {
        json_bytes: json,
    };

    assert!(blob.decode().is_err());
    assert!(matches!(
        as_uint248(too_big),
        Err(CodecError::OutOfRange { .. })
    ));
}

#[test]
fn test_replacing_custom_input_keeps_the_latest() -> Result<()> {
    let mut request = sample_request();
    let input = CustomInput::new().with("only", as_uint248(7)?);
    request.set_custom_input(&input)?;

    assert_eq!(request.build().custom_input.decode()?, input);
    Ok(())
}

#[test]
fn test_duplicate_slot_is_rejected() -> Result<()> {
    let mut request = ProofRequest::new();
    request.add_receipt(swap_receipt(), Some(1))?;
    let err = request.add_receipt(swap_receipt(), Some(1)).unwrap_err();

    assert!(matches!(err, RequestError::DuplicateIndex { index: 1, .. }));
    assert_eq!(request.receipts().len(), 1);
    Ok(())
}

proptest! {
    #[test]
    fn test_bytes32_keeps_its_bytes(bytes in any::<[u8; 32]>()) {
        let hex = B256::from(bytes).to_string();
        let value = as_bytes32(&hex).unwrap();

        prop_assert_eq!(value.ty(), CircuitDataType::Bytes32);
        prop_assert_eq!(value.to_bytes32().unwrap(), bytes);
    }
}
