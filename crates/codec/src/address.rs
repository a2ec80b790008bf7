// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::CodecError;
use alloy_primitives::Address;

/// Parses a 20 byte account address given as `0x` and 40 hex digits.
///
/// All-lowercase and all-uppercase digits are accepted as is. Mixed case
/// digits must carry a valid EIP-55 checksum.
pub fn parse_address(input: &str) -> Result<Address, CodecError> {
    let invalid = || CodecError::InvalidAddress(input.to_string());
    let digits = input.strip_prefix("0x").ok_or_else(invalid)?;

    if digits.len() != 40 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let has_lower = digits.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = digits.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(format!("0x{digits}"), None).map_err(|_| invalid());
    }

    let bytes = hex::decode(digits).map_err(|_| invalid())?;
    Ok(Address::from_slice(&bytes))
}

pub fn is_address(input: &str) -> bool {
    parse_address(input).is_ok()
}
