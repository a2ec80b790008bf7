// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use zq_gateway::{FinalResult, Gateway, GatewayTransport};

pub fn print_result(result: &FinalResult) {
    println!("state: {}", result.state);
    println!("success: {}", result.success);
    if let Some(tx) = &result.tx_hash {
        println!("tx_hash: {}", tx);
    }
}

pub async fn execute<T: GatewayTransport>(
    gateway: &Gateway<T>,
    request_id: &str,
    dst_chain_id: u64,
) -> Result<FinalResult> {
    let result = gateway.wait(request_id, dst_chain_id).await?;
    print_result(&result);
    Ok(result)
}
