// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use anyhow::{Context, Result};
use zq_prover::{Prover, ProverTransport};
use zq_utils::PollConfig;

use crate::evidence::load_request;

/// Returns the proof id, and the proof when `wait` is given.
pub async fn execute<T: ProverTransport>(
    prover: &Prover<T>,
    evidence: &Path,
    wait: Option<&PollConfig>,
) -> Result<(String, Option<String>)> {
    let request = load_request(evidence)?;
    let res = prover
        .prove_async(&request)
        .await
        .context("Proving failed")?;
    println!("proof_id: {}", res.proof_id);

    let Some(poll) = wait else {
        return Ok((res.proof_id, None));
    };

    let proof = prover.wait_for_proof(&res.proof_id, poll).await?;
    println!("proof: {}", proof);
    Ok((res.proof_id, Some(proof)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::tempdir;
    use zq_test_helpers::{sample_evidence_json, write_json_file, MockProver};

    #[tokio::test(start_paused = true)]
    async fn test_prove_async_and_wait() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("evidence.json");
        write_json_file(&path, &sample_evidence_json())?;

        let mock = MockProver::new();
        mock.push_prove_async("proof-7");
        mock.push_proof_after(2, "0xfeed");
        let prover = Prover::new(mock.clone());

        let (id, proof) = execute(&prover, &path, None).await?;
        assert_eq!(id, "proof-7");
        assert_eq!(proof, None);
        assert_eq!(mock.get_proof_calls(), 0);

        mock.push_prove_async("proof-8");
        let poll = PollConfig::new(Duration::from_secs(3), 10);
        let (id, proof) = execute(&prover, &path, Some(&poll)).await?;
        assert_eq!(id, "proof-8");
        assert_eq!(proof.as_deref(), Some("0xfeed"));
        assert_eq!(mock.get_proof_ids(), vec!["proof-8"; 3]);
        Ok(())
    }
}
