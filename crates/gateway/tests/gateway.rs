// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::time::Duration;
use tracing_test::traced_test;
use zq_gateway::{
    Gateway, GatewayError, HttpGatewayTransport, QueryStatus, SubmissionState,
};
use zq_test_helpers::{
    sample_circuit_info, sample_proof, sample_prove_response, sample_request, serve_once,
    MockGateway, DST_CHAIN_ID, SRC_CHAIN_ID,
};
use zq_utils::{ErrCode, PollConfig};

const SETTLE_TX: &str = "0x9a1bd8b8a53f1b6e4df6b5d6b8a1c8d2f1e0a9b8c7d6e5f4a3b2c1d0e9f8a7b6";

fn gateway(mock: &MockGateway) -> Gateway<MockGateway> {
    Gateway::new(mock.clone())
}

#[tokio::test]
#[traced_test]
async fn test_submit_prepares_then_submits() {
    let mock = MockGateway::new();
    mock.push_prepared("0xreq", "1000");

    let res = gateway(&mock)
        .submit(
            &sample_request(),
            &sample_prove_response(),
            SRC_CHAIN_ID,
            DST_CHAIN_ID,
        )
        .await
        .unwrap();

    assert_eq!(res.request_id, "0xreq");
    assert_eq!(res.fee, "1000");

    let prepared = &mock.prepare_requests()[0];
    assert_eq!(prepared.chain_id, SRC_CHAIN_ID);
    assert_eq!(prepared.target_chain_id, DST_CHAIN_ID);
    assert_eq!(prepared.receipt_infos[0].log_extract_infos.len(), 3);
    assert_eq!(prepared.storage_query_infos.len(), 1);
    assert_eq!(prepared.transaction_infos.len(), 1);
    assert_eq!(prepared.app_circuit_info, sample_circuit_info());

    let submitted = &mock.submit_requests()[0];
    assert_eq!(submitted.query_hash, "0xreq");
    assert_eq!(submitted.target_chain_id, DST_CHAIN_ID);
    assert_eq!(submitted.proof, sample_proof());

    assert!(logs_contain("query prepared"));
    assert!(logs_contain("proof submitted"));
}

#[tokio::test]
async fn test_submit_fails_at_prepare() {
    let mock = MockGateway::new();
    mock.push_prepare_error("unsupported chain");

    let err = gateway(&mock)
        .submit(&sample_request(), &sample_prove_response(), 1, 999)
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GatewayError::Remote {
            step: "prepare_query",
            ..
        }
    ));
    assert_eq!(err.code(), ErrCode::GatewayError);
    assert!(err.to_string().contains("unsupported chain"));
    assert_eq!(mock.prepare_calls(), 1);
    assert_eq!(mock.submit_calls(), 0);
}

#[tokio::test]
async fn test_submit_fails_at_submit_proof() {
    let mock = MockGateway::new();
    mock.push_prepared("0xreq", "1000");
    mock.push_submit_error("invalid proof");

    let err = gateway(&mock)
        .submit(
            &sample_request(),
            &sample_prove_response(),
            SRC_CHAIN_ID,
            DST_CHAIN_ID,
        )
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        GatewayError::Remote {
            step: "submit_proof",
            ..
        }
    ));
    assert_eq!(mock.prepare_calls(), 1);
    assert_eq!(mock.submit_calls(), 1);
}

#[tokio::test]
async fn test_submit_proof_by_request_id() {
    let mock = MockGateway::new();

    let submission = gateway(&mock)
        .submit_proof_for("0xearlier", DST_CHAIN_ID, &sample_proof())
        .await
        .unwrap();

    assert_eq!(submission.state, SubmissionState::ProofSubmitted);
    assert_eq!(mock.prepare_calls(), 0);
    let requests = mock.submit_requests();
    let sent = &requests[0];
    assert_eq!(sent.query_hash, "0xearlier");
    assert_eq!(sent.target_chain_id, DST_CHAIN_ID);
    assert_eq!(sent.proof, sample_proof());
}

#[tokio::test]
async fn test_submission_state_machine() {
    let mock = MockGateway::new();
    mock.push_prepared("0xreq", "7");
    mock.push_status(QueryStatus::Complete, SETTLE_TX);
    let gw = gateway(&mock);

    let mut submission = gw
        .prepare_query(
            &sample_request(),
            &sample_circuit_info(),
            SRC_CHAIN_ID,
            DST_CHAIN_ID,
        )
        .await
        .unwrap();
    assert_eq!(submission.state, SubmissionState::Prepared);

    // waiting before the proof is attached is refused without a status call
    let err = gw.wait_submission(&mut submission).await.unwrap_err();
    assert!(matches!(err, GatewayError::InvalidState { .. }));
    assert_eq!(mock.status_calls(), 0);

    gw.submit_proof(&mut submission, &sample_proof()).await.unwrap();
    assert_eq!(submission.state, SubmissionState::ProofSubmitted);

    let err = gw
        .submit_proof(&mut submission, &sample_proof())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        GatewayError::InvalidState {
            expected: SubmissionState::Prepared,
            actual: SubmissionState::ProofSubmitted,
            ..
        }
    ));
    assert_eq!(mock.submit_calls(), 1);

    let result = gw.wait_submission(&mut submission).await.unwrap();
    assert!(result.success);
    assert_eq!(submission.state, SubmissionState::Settled);
}

#[tokio::test]
async fn test_failed_prepare_does_not_advance() {
    let mock = MockGateway::new();
    mock.push_prepare_error("busy");
    let res = gateway(&mock)
        .prepare_query(
            &sample_request(),
            &sample_circuit_info(),
            SRC_CHAIN_ID,
            DST_CHAIN_ID,
        )
        .await;
    assert!(res.is_err());
}

#[tokio::test(start_paused = true)]
async fn test_wait_settles_on_first_complete() {
    let mock = MockGateway::new();
    mock.push_pending(2);
    mock.push_status(QueryStatus::Complete, SETTLE_TX);
    mock.push_status(QueryStatus::Failed, "");

    let started = tokio::time::Instant::now();
    let result = gateway(&mock).wait("0xreq", DST_CHAIN_ID).await.unwrap();

    assert!(result.success);
    assert_eq!(result.tx_hash.as_deref(), Some(SETTLE_TX));
    assert_eq!(result.state, SubmissionState::Settled);
    assert_eq!(mock.status_calls(), 3);
    assert_eq!(started.elapsed(), Duration::from_secs(20));
}

#[tokio::test(start_paused = true)]
async fn test_wait_reports_failure() {
    let mock = MockGateway::new();
    mock.push_pending(1);
    mock.push_status(QueryStatus::Failed, "");

    let result = gateway(&mock).wait("0xreq", DST_CHAIN_ID).await.unwrap();
    assert!(!result.success);
    assert_eq!(result.tx_hash, None);
    assert_eq!(result.state, SubmissionState::Failed);
}

#[tokio::test(start_paused = true)]
#[traced_test]
async fn test_wait_times_out_when_always_pending() {
    let mock = MockGateway::new();

    let started = tokio::time::Instant::now();
    let result = gateway(&mock).wait("0xreq", DST_CHAIN_ID).await.unwrap();

    assert!(!result.success);
    assert_eq!(result.tx_hash, None);
    assert_eq!(result.state, SubmissionState::TimedOut);
    assert_eq!(mock.status_calls(), 50);
    assert_eq!(started.elapsed(), Duration::from_secs(500));
    assert!(logs_contain("request not settled"));
}

#[tokio::test(start_paused = true)]
#[traced_test]
async fn test_awaiting_payment_keeps_polling() {
    let mock = MockGateway::new();
    mock.push_status(QueryStatus::ToBePaid, "");
    mock.push_status(QueryStatus::ToBePaid, "");
    mock.push_status(QueryStatus::Complete, SETTLE_TX);

    let result = gateway(&mock).wait("0xreq", DST_CHAIN_ID).await.unwrap();
    assert!(result.success);
    assert_eq!(mock.status_calls(), 3);
    assert!(logs_contain("waiting for payment"));
}

#[tokio::test(start_paused = true)]
async fn test_wait_uses_configured_budget() {
    let mock = MockGateway::new();
    let gw = gateway(&mock).with_status_poll(PollConfig::new(Duration::from_secs(1), 4));

    let result = gw.wait("0xreq", DST_CHAIN_ID).await.unwrap();
    assert_eq!(result.state, SubmissionState::TimedOut);
    assert_eq!(mock.status_calls(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_wait_aborts_on_status_error() {
    let mock = MockGateway::new();
    mock.push_pending(1);
    mock.push_status_error("unknown query");

    let err = gateway(&mock).wait("0xreq", DST_CHAIN_ID).await.unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Remote {
            step: "query_status",
            ..
        }
    ));
    assert_eq!(err.code(), ErrCode::GatewayError);
    assert_eq!(mock.status_calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_wait_aborts_when_unreachable() {
    let mock = MockGateway::new();
    mock.push_status_unreachable("http://gateway/v1/query_status");

    let err = gateway(&mock).wait("0xreq", DST_CHAIN_ID).await.unwrap_err();
    assert!(matches!(err, GatewayError::Http(_)));
    assert_eq!(mock.status_calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_wait_until_cancelled() {
    let mock = MockGateway::new();
    let gw = gateway(&mock);

    let cancel = tokio::time::sleep(Duration::from_secs(25));
    let err = gw.wait_until("0xreq", DST_CHAIN_ID, cancel).await.unwrap_err();

    assert!(matches!(err, GatewayError::Cancelled { .. }));
    assert_eq!(err.code(), ErrCode::Timeout);
    // checks at 0s, 10s and 20s; cancelled while sleeping towards 30s
    assert_eq!(mock.status_calls(), 3);
}

#[tokio::test]
async fn test_http_transport_query_status() {
    let body = format!(r#"{{"status":"QS_COMPLETE","tx_hash":"{SETTLE_TX}"}}"#);
    let (url, recorded) = serve_once("200 OK", body).await;
    let gw = Gateway::new(HttpGatewayTransport::new(&url, Duration::from_secs(5)).unwrap());

    let res = gw.query_status("0xreq", DST_CHAIN_ID).await.unwrap();
    assert_eq!(res.status, QueryStatus::Complete);
    assert_eq!(res.tx_hash, SETTLE_TX);

    let recorded = recorded.await.unwrap();
    assert_eq!(recorded.line, "POST /v1/query_status HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
    assert_eq!(sent["query_hash"], "0xreq");
    assert_eq!(sent["target_chain_id"], DST_CHAIN_ID);
}

#[tokio::test]
async fn test_http_transport_prepare_query() {
    let (url, recorded) = serve_once(
        "200 OK",
        r#"{"query_hash":"0xreq","fee":"42"}"#.to_string(),
    )
    .await;
    let gw = Gateway::connect(&url, Duration::from_secs(5)).unwrap();

    let submission = gw
        .prepare_query(
            &sample_request(),
            &sample_circuit_info(),
            SRC_CHAIN_ID,
            DST_CHAIN_ID,
        )
        .await
        .unwrap();
    assert_eq!(submission.request_id, "0xreq");
    assert_eq!(submission.fee, "42");

    let recorded = recorded.await.unwrap();
    assert_eq!(recorded.line, "POST /v1/prepare_query HTTP/1.1");
    let sent: serde_json::Value = serde_json::from_str(&recorded.body).unwrap();
    assert_eq!(sent["use_app_circuit_info"], true);
    assert_eq!(
        sent["receipt_infos"][0]["log_extract_infos"][1]["value"],
        "0xef1c6e67703c7bd7107eed8303fbe6ec2554bf6b"
    );
    assert_eq!(
        sent["storage_query_infos"][0]["account"],
        "0x5427FEFA711Eff984124bFBB1AB6fbf5E3DA1820"
    );
}
