// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use std::time::Duration;
use zq_gateway::{Gateway, GatewayError, QueryStatus, SubmissionState};
use zq_prover::Prover;
use zq_request::ProofRequest;
use zq_test_helpers::{
    custom_input_sample, sample_proof, sample_prove_response, sample_request, storage_sample,
    swap_receipt, MockGateway, MockProver, DST_CHAIN_ID, SRC_CHAIN_ID,
};
use zq_utils::{ErrCode, PollConfig};

const SETTLE_TX: &str = "0x1f3c5e7a9b2d4f6e8a0c1b3d5f7e9a2c4b6d8f0e1a3c5b7d9f2e4a6c8b0d1f3e";

/// build -> prove -> prepare -> submit proof -> wait
#[tokio::test(start_paused = true)]
async fn test_sync_proof_settles() -> Result<()> {
    let request = sample_request();

    let prover_mock = MockProver::new();
    prover_mock.push_prove(sample_prove_response());
    let prover = Prover::new(prover_mock.clone());

    let gateway_mock = MockGateway::new();
    gateway_mock.push_prepared("0xquery", "120000000000000");
    gateway_mock.push_status(QueryStatus::ToBePaid, "");
    gateway_mock.push_pending(2);
    gateway_mock.push_status(QueryStatus::Complete, SETTLE_TX);
    let gateway = Gateway::new(gateway_mock.clone());

    let proof = prover.prove(&request).await?;

    let mut submission = gateway
        .prepare_query(&request, &proof.circuit_info, SRC_CHAIN_ID, DST_CHAIN_ID)
        .await?;
    assert_eq!(submission.state, SubmissionState::Prepared);
    assert_eq!(submission.fee, "120000000000000");

    gateway.submit_proof(&mut submission, &proof.proof).await?;
    assert_eq!(submission.state, SubmissionState::ProofSubmitted);

    let result = gateway.wait_submission(&mut submission).await?;
    assert!(result.success);
    assert_eq!(result.request_id, "0xquery");
    assert_eq!(result.tx_hash.as_deref(), Some(SETTLE_TX));
    assert_eq!(submission.state, SubmissionState::Settled);
    assert_eq!(gateway_mock.status_calls(), 4);

    // the prover saw exactly what the builder holds
    let sent = prover_mock.prove_requests().remove(0);
    assert_eq!(sent, request.build());
    assert_eq!(sent.custom_input.decode()?, custom_input_sample());
    Ok(())
}

/// prove async -> poll for the proof -> submit
#[tokio::test(start_paused = true)]
async fn test_async_proof_flow() -> Result<()> {
    let request = sample_request();

    let prover_mock = MockProver::new();
    prover_mock.push_prove_async("proof-42");
    prover_mock.push_proof_after(5, &sample_proof());
    let prover = Prover::new(prover_mock.clone());

    let gateway_mock = MockGateway::new();
    gateway_mock.push_prepared("0xquery", "1");
    let gateway = Gateway::new(gateway_mock.clone());

    let handle = prover.prove_async(&request).await?;
    let proof = prover
        .wait_for_proof(&handle.proof_id, &PollConfig::proof())
        .await?;
    assert_eq!(proof, sample_proof());
    assert_eq!(prover_mock.get_proof_calls(), 6);

    let mut submission = gateway
        .prepare_query(&request, &handle.circuit_info, SRC_CHAIN_ID, DST_CHAIN_ID)
        .await?;
    gateway.submit_proof(&mut submission, &proof).await?;

    assert_eq!(gateway_mock.submit_requests()[0].proof, sample_proof());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_unsettled_request_times_out() -> Result<()> {
    let gateway_mock = MockGateway::new();
    gateway_mock.push_prepared("0xquery", "1");
    let gateway = Gateway::new(gateway_mock.clone())
        .with_status_poll(PollConfig::new(Duration::from_secs(10), 6));

    let mut submission = gateway
        .prepare_query(
            &sample_request(),
            &sample_prove_response().circuit_info,
            SRC_CHAIN_ID,
            DST_CHAIN_ID,
        )
        .await?;
    gateway.submit_proof(&mut submission, &sample_proof()).await?;

    let result = gateway.wait_submission(&mut submission).await?;
    assert!(!result.success);
    assert_eq!(result.tx_hash, None);
    assert_eq!(submission.state, SubmissionState::TimedOut);
    assert_eq!(gateway_mock.status_calls(), 6);
    Ok(())
}

#[tokio::test]
async fn test_failed_submission_leaves_prepared_state() -> Result<()> {
    let gateway_mock = MockGateway::new();
    gateway_mock.push_prepared("0xquery", "1");
    gateway_mock.push_submit_error("proof does not verify");
    let gateway = Gateway::new(gateway_mock.clone());

    let mut submission = gateway
        .prepare_query(
            &sample_request(),
            &sample_prove_response().circuit_info,
            SRC_CHAIN_ID,
            DST_CHAIN_ID,
        )
        .await?;
    let err = gateway
        .submit_proof(&mut submission, "0xdead")
        .await
        .unwrap_err();

    assert_eq!(err.code(), ErrCode::GatewayError);
    assert!(matches!(err, GatewayError::Remote { .. }));
    assert_eq!(submission.state, SubmissionState::Prepared);
    Ok(())
}

#[tokio::test]
async fn test_independent_requests_concurrently() -> Result<()> {
    let prover_mock = MockProver::new();
    prover_mock.push_prove(sample_prove_response());
    prover_mock.push_prove(sample_prove_response());
    let prover = Prover::new(prover_mock.clone());

    let mut storage_only = ProofRequest::new();
    storage_only.add_storage(storage_sample(), None)?;
    let mut receipt_only = ProofRequest::new();
    receipt_only.add_receipt(swap_receipt(), None)?;

    let (a, b) = tokio::join!(prover.prove(&storage_only), prover.prove(&receipt_only));
    a?;
    b?;

    let sent = prover_mock.prove_requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(
        sent.iter().map(|r| r.storages.len() + r.receipts.len()).sum::<usize>(),
        2
    );
    Ok(())
}
