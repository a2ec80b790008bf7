// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use anyhow::{Context, Result};
use zq_prover::{ProveResponse, Prover, ProverTransport};

use crate::evidence::load_request;

pub async fn execute<T: ProverTransport>(
    prover: &Prover<T>,
    evidence: &Path,
) -> Result<ProveResponse> {
    let request = load_request(evidence)?;
    let res = prover.prove(&request).await.context("Proving failed")?;
    println!("proof: {}", res.proof);
    Ok(res)
}
