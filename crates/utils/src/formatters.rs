// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

/// Shortens a hex payload (proofs, blobs) for log output. Accepts the value
/// with or without a `0x` prefix and always returns it prefixed.
pub fn hex_preview(data: &str) -> String {
    let digits = data
        .strip_prefix("0x")
        .or_else(|| data.strip_prefix("0X"))
        .unwrap_or(data);
    truncate(digits)
}

/// truncate a string of hex digits
fn truncate(s: &str) -> String {
    let threshold = 100; // will leave it
    let limit = 50;
    let cutoff = limit / 2;
    if s.len() <= threshold || !s.is_ascii() {
        format!("0x{}", s)
    } else {
        let start = &s[..cutoff];
        let end = &s[s.len() - (limit - cutoff)..];
        format!("<hex({}):0x{}..{}>", s.len(), start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_values_are_kept() {
        assert_eq!(hex_preview("0xdeadbeef"), "0xdeadbeef");
        assert_eq!(hex_preview("deadbeef"), "0xdeadbeef");
    }

    #[test]
    fn test_long_values_are_truncated() {
        let long = format!("0x{}", "ab".repeat(200));
        let preview = hex_preview(&long);
        assert!(preview.starts_with("<hex(400):0x"));
        assert!(preview.len() < 80);
    }
}
