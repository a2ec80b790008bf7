// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::trace;
use url::Url;

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("invalid service url '{0}'")]
    InvalidUrl(String),

    #[error("request to {url} failed with status {status}")]
    Status { url: String, status: u16 },

    #[error("HTTP error: {0}")]
    Request(#[from] reqwest::Error),
}

/// JSON-over-HTTP access to one remote service. Methods are posted to
/// `{base}/v1/{method}`.
#[derive(Debug, Clone)]
pub struct JsonEndpoint {
    client: Client,
    base: Url,
}

impl JsonEndpoint {
    pub fn new(base: &str, timeout: Duration) -> Result<Self, HttpError> {
        let base = Url::parse(base).map_err(|_| HttpError::InvalidUrl(base.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(HttpError::InvalidUrl(base.to_string()));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    pub fn method_url(&self, method: &str) -> Result<Url, HttpError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| HttpError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(["v1", method]);
        Ok(url)
    }

    pub async fn post<Req, Res>(&self, method: &str, body: &Req) -> Result<Res, HttpError>
    where
        Req: Serialize + ?Sized,
        Res: DeserializeOwned,
    {
        let url = self.method_url(method)?;
        trace!(%url, "POST");
        let response = self.client.post(url.clone()).json(body).send().await?;
        if !response.status().is_success() {
            return Err(HttpError::Status {
                url: url.to_string(),
                status: response.status().as_u16(),
            });
        }
        Ok(response.json().await?)
    }
}
