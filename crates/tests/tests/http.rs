// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use serde_json::{json, Value};
use std::time::Duration;
use zq_test_helpers::serve_once;
use zq_utils::{HttpError, JsonEndpoint};

#[tokio::test]
async fn test_post_reaches_versioned_method() -> Result<()> {
    let (base, recorded) = serve_once("200 OK", json!({ "ok": true }).to_string()).await;
    let endpoint = JsonEndpoint::new(&format!("{base}/"), Duration::from_secs(5))?;

    let res: Value = endpoint.post("echo", &json!({ "n": 1 })).await?;
    assert_eq!(res, json!({ "ok": true }));

    let req = recorded.await?;
    assert_eq!(req.line, "POST /v1/echo HTTP/1.1");
    assert_eq!(serde_json::from_str::<Value>(&req.body)?, json!({ "n": 1 }));
    Ok(())
}

#[tokio::test]
async fn test_non_success_status_is_an_error() -> Result<()> {
    let (base, _recorded) = serve_once("503 Service Unavailable", "{}".to_string()).await;
    let endpoint = JsonEndpoint::new(&base, Duration::from_secs(5))?;

    let err = endpoint
        .post::<_, Value>("echo", &json!({}))
        .await
        .unwrap_err();
    assert!(matches!(err, HttpError::Status { status: 503, .. }));
    Ok(())
}
