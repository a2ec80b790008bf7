// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

//! Mainnet evidence samples: a Uniswap v3 swap receipt plus a USDC transfer
//! log, a storage read and a plain ETH transfer.

use serde_json::{json, Value};
use zq_codec::{as_bytes32, as_int248, as_uint248, as_uint521, CircuitValue, CustomInput};
use zq_prover::{AppCircuitInfo, ProveResponse};
use zq_request::{Field, ProofRequest, ReceiptData, StorageData, TransactionData};

pub const SRC_CHAIN_ID: u64 = 1;
pub const DST_CHAIN_ID: u64 = 11155111;

pub const UNISWAP_POOL: &str = "0x88e6A0c2dDD26FEEb64F039a2c41296FcB3f5640";
pub const USDC: &str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
/// `USDC` with a broken checksum
pub const USDC_BAD_CHECKSUM: &str = "0xa0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";

pub const SWAP_TX_HASH: &str =
    "0x53b37ec7975d217295f4bdadf8043b261fc49dccc16da9b9fc8b9530845a5794";
pub const SWAP_EVENT: &str = "0xc42079f94a6350d7e6235f29174924f928cc2ac818eb64fed8004e115fbcca67";
pub const TRANSFER_EVENT: &str =
    "0xddf252ad1be2c89b69c2b068fc378daa952ba7f163c4a11628f55a4df523b3ef";

pub fn swap_amount_field() -> Field {
    Field {
        contract: UNISWAP_POOL.to_string(),
        log_index: 3,
        event_id: SWAP_EVENT.into(),
        is_topic: false,
        field_index: 0,
        value: "724999999".into(),
    }
}

pub fn swap_recipient_field() -> Field {
    Field {
        contract: UNISWAP_POOL.to_string(),
        log_index: 3,
        event_id: SWAP_EVENT.into(),
        is_topic: true,
        field_index: 2,
        value: "0xEf1c6E67703c7BD7107eed8303Fbe6EC2554BF6B".into(),
    }
}

pub fn usdc_transfer_field() -> Field {
    Field {
        contract: USDC.to_string(),
        log_index: 2,
        event_id: TRANSFER_EVENT.into(),
        is_topic: true,
        field_index: 1,
        value: "0xaefB31e9EEee2822f4C1cBC13B70948b0B5C0b3c".into(),
    }
}

pub fn receipt_with(fields: Vec<Field>) -> ReceiptData {
    ReceiptData {
        block_num: 18064070,
        tx_hash: SWAP_TX_HASH.into(),
        fields,
    }
}

pub fn swap_receipt() -> ReceiptData {
    receipt_with(vec![
        swap_amount_field(),
        swap_recipient_field(),
        usdc_transfer_field(),
    ])
}

pub fn storage_sample() -> StorageData {
    StorageData {
        block_num: 18233760,
        address: "0x5427FEFA711Eff984124bFBB1AB6fbf5E3DA1820".to_string(),
        slot: format!("0x{}", "0".repeat(64)).into(),
        value: "0xf380166f8490f24af32bf47d1aa217fba62b6575".into(),
    }
}

pub fn transaction_sample() -> TransactionData {
    TransactionData {
        hash: "0x6dc75e61220cc775aafa17796c20e49ac08030020fce710e3e546aa4e003454c".into(),
        chain_id: 1,
        block_num: 19073244,
        nonce: 0,
        gas_tip_cap_or_gas_price: "90000000000".into(),
        gas_fee_cap: "90000000000".into(),
        gas_limit: 21000,
        from: "0x6c2843bA78Feb261798be1AAC579d1A4aE2C64b4".to_string(),
        to: "0x2F19E5C3C66C44E6405D4c200fE064ECe9bC253a".to_string(),
        value: "22329290000000000".into(),
    }
}

fn b32(byte: &str) -> CircuitValue {
    as_bytes32(&format!("0x{}", byte.repeat(32))).unwrap()
}

/// Scalars and arrays of all four circuit types.
pub fn custom_input_sample() -> CustomInput {
    CustomInput::new()
        .with("u248Var", as_uint248(0).unwrap())
        .with("u521Var", as_uint521(1).unwrap())
        .with("i248Var", as_int248(-2).unwrap())
        .with("b32Var", b32("33"))
        .with(
            "u248Arr",
            vec![
                as_uint248(1).unwrap(),
                as_uint248(2).unwrap(),
                as_uint248(3).unwrap(),
            ],
        )
        .with(
            "u521Arr",
            vec![
                as_uint521(11).unwrap(),
                as_uint521(22).unwrap(),
                as_uint521(33).unwrap(),
            ],
        )
        .with(
            "i248Arr",
            vec![
                as_int248(111).unwrap(),
                as_int248(-222).unwrap(),
                as_int248(333).unwrap(),
            ],
        )
        .with("b32Arr", vec![b32("11"), b32("22")])
}

/// A request holding every sample.
pub fn sample_request() -> ProofRequest {
    let mut req = ProofRequest::new();
    req.add_receipt(swap_receipt(), Some(0)).unwrap();
    req.add_storage(storage_sample(), Some(0)).unwrap();
    req.add_transaction(transaction_sample(), Some(0)).unwrap();
    req.set_custom_input(&custom_input_sample()).unwrap();
    req
}

pub fn sample_proof() -> String {
    format!("0x{}", "ab".repeat(512))
}

pub fn sample_circuit_info() -> AppCircuitInfo {
    AppCircuitInfo {
        output_commitment: format!("0x{}", "01".repeat(32)),
        vk_hash: format!("0x{}", "02".repeat(32)),
        input_commitments: vec![format!("0x{}", "03".repeat(32))],
        toggles: vec![true],
        ..Default::default()
    }
}

pub fn sample_prove_response() -> ProveResponse {
    ProveResponse {
        err: None,
        proof: sample_proof(),
        circuit_info: sample_circuit_info(),
    }
}

/// The samples in the evidence file layout read by the `zq` binary.
pub fn sample_evidence_json() -> Value {
    json!({
        "receipts": [{ "index": 0, "data": swap_receipt() }],
        "storages": [{ "data": storage_sample() }],
        "transactions": [{ "index": 0, "data": transaction_sample() }],
        "custom_input": custom_input_sample(),
    })
}
