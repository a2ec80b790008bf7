// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::str::FromStr;

use anyhow::bail;
use url::Url;

/// An absolute http(s) service url.
#[derive(Clone, Debug)]
pub struct ValidUrl(Url);

impl FromStr for ValidUrl {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let url = Url::parse(s)?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("unsupported scheme '{}' in '{}'", url.scheme(), s);
        }
        Ok(ValidUrl(url))
    }
}

impl From<ValidUrl> for String {
    fn from(value: ValidUrl) -> Self {
        value.0.to_string()
    }
}
