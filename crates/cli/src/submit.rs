// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::Path;

use anyhow::{Context, Result};
use zq_config::ChainsConfig;
use zq_gateway::{FinalResult, Gateway, GatewayTransport, SubmitResult};
use zq_prover::{Prover, ProverTransport};

use crate::{evidence::load_request, status::print_result};

/// Proves the evidence, submits it and optionally waits for settlement.
pub async fn execute<P: ProverTransport, G: GatewayTransport>(
    prover: &Prover<P>,
    gateway: &Gateway<G>,
    evidence: &Path,
    chains: &ChainsConfig,
    wait: bool,
) -> Result<(SubmitResult, Option<FinalResult>)> {
    let request = load_request(evidence)?;
    let proof = prover.prove(&request).await.context("Proving failed")?;

    let submitted = gateway
        .submit(&request, &proof, chains.src_chain_id, chains.dst_chain_id)
        .await
        .context("Submission failed")?;
    println!("request_id: {}", submitted.request_id);
    println!("fee: {}", submitted.fee);

    if !wait {
        return Ok((submitted, None));
    }

    let result = gateway
        .wait(&submitted.request_id, chains.dst_chain_id)
        .await?;
    print_result(&result);
    Ok((submitted, Some(result)))
}
