// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;
use zq_codec::CustomInput;
use zq_request::{IndexedReceipt, IndexedStorage, IndexedTransaction, ProofRequest};

/// Evidence as written by the chain scraping side.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EvidenceFile {
    pub receipts: Vec<IndexedReceipt>,
    pub storages: Vec<IndexedStorage>,
    pub transactions: Vec<IndexedTransaction>,
    pub custom_input: Option<CustomInput>,
}

impl EvidenceFile {
    /// Feeds every item through the builder so each one is validated.
    pub fn into_request(self) -> Result<ProofRequest> {
        let mut req = ProofRequest::new();
        for (i, item) in self.receipts.into_iter().enumerate() {
            req.add_receipt(item.data, item.index)
                .with_context(|| format!("receipts[{i}] rejected"))?;
        }
        for (i, item) in self.storages.into_iter().enumerate() {
            req.add_storage(item.data, item.index)
                .with_context(|| format!("storages[{i}] rejected"))?;
        }
        for (i, item) in self.transactions.into_iter().enumerate() {
            req.add_transaction(item.data, item.index)
                .with_context(|| format!("transactions[{i}] rejected"))?;
        }
        if let Some(input) = &self.custom_input {
            req.set_custom_input(input)?;
        }
        Ok(req)
    }
}

pub fn load_request(path: &Path) -> Result<ProofRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Could not read evidence file {}", path.display()))?;
    let file: EvidenceFile = serde_json::from_str(&content)
        .with_context(|| format!("Could not parse evidence file {}", path.display()))?;
    let req = file.into_request()?;
    info!(
        receipts = req.receipts().len(),
        storages = req.storages().len(),
        transactions = req.transactions().len(),
        "evidence loaded"
    );
    Ok(req)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::tempdir;
    use zq_request::RequestError;
    use zq_test_helpers::{
        custom_input_sample, sample_evidence_json, sample_request, transaction_sample,
        write_json_file,
    };

    #[test]
    fn test_load_sample() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("evidence.json");
        write_json_file(&path, &sample_evidence_json())?;

        let req = load_request(&path)?;
        assert_eq!(req.receipts().len(), 1);
        assert_eq!(req.receipts()[0].index, Some(0));
        assert_eq!(req.storages()[0].index, None);
        assert_eq!(req.transactions().len(), 1);
        assert_eq!(
            req.build().custom_input.decode()?,
            custom_input_sample()
        );
        // values come back in canonical hex
        assert_eq!(
            req.receipts()[0].data.fields[0].value.to_hex()?,
            sample_request().receipts()[0].data.fields[0].value.to_hex()?
        );
        Ok(())
    }

    #[test]
    fn test_empty_file_sections() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("evidence.json");
        write_json_file(&path, &json!({}))?;

        let req = load_request(&path)?;
        assert!(req.receipts().is_empty());
        assert_eq!(req.build().custom_input.json_bytes, "{}");
        Ok(())
    }

    #[test]
    fn test_invalid_item_named() -> Result<()> {
        let mut tx = transaction_sample();
        tx.to = "not-an-address".to_string();
        let dir = tempdir()?;
        let path = dir.path().join("evidence.json");
        write_json_file(&path, &json!({ "transactions": [{ "data": tx }] }))?;

        let err = load_request(&path).unwrap_err();
        assert!(format!("{err:#}").contains("transactions[0] rejected"));
        let cause = err.downcast_ref::<RequestError>().unwrap();
        assert_eq!(cause.field(), Some("transaction.to"));
        Ok(())
    }

    #[test]
    fn test_wide_integer_value() -> Result<()> {
        let mut tx = serde_json::to_value(transaction_sample())?;
        tx["value"] = json!("WIDE");
        let text = json!({ "transactions": [{ "data": tx }] })
            .to_string()
            .replace("\"WIDE\"", "100000000000000000000");
        let dir = tempdir()?;
        let path = dir.path().join("evidence.json");
        fs::write(&path, text)?;

        let req = load_request(&path)?;
        assert_eq!(
            req.transactions()[0].data.value.to_hex()?,
            "0x056bc75e2d63100000"
        );
        Ok(())
    }

    #[test]
    fn test_bad_custom_input_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("evidence.json");
        write_json_file(
            &path,
            &json!({ "custom_input": { "x": { "type": "Bytes32", "data": "0x01" } } }),
        )?;

        assert!(load_request(&path).is_err());
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        let err = load_request(Path::new("/nope/evidence.json")).unwrap_err();
        assert!(err.to_string().contains("Could not read evidence file"));
    }
}
