// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::{
    env,
    path::{Path, PathBuf},
    str::FromStr,
    time::Duration,
};

use anyhow::{bail, Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use zq_utils::PollConfig;

use crate::{
    load_config::{find_in_parent, resolve_config_path, ConfigSource},
    validation::ValidUrl,
};

pub const DEFAULT_CONFIG_NAME: &str = "zq.config.yaml";
pub const ENV_PREFIX: &str = "ZQ_";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProverConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// Schedule for fetching asynchronously computed proofs
    pub proof_poll: PollConfig,
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:33247".to_string(),
            timeout_secs: 600,
            proof_poll: PollConfig::proof(),
        }
    }
}

impl ProverConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GatewayConfig {
    pub url: String,
    pub timeout_secs: u64,
    /// Schedule for settlement status checks
    pub status_poll: PollConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:11080".to_string(),
            timeout_secs: 30,
            status_poll: PollConfig::settlement(),
        }
    }
}

impl GatewayConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainsConfig {
    /// Chain the evidence is taken from
    pub src_chain_id: u64,
    /// Chain the settling call is made on
    pub dst_chain_id: u64,
}

impl Default for ChainsConfig {
    fn default() -> Self {
        Self {
            src_chain_id: 1,
            dst_chain_id: 11155111,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZqConfig {
    pub prover: ProverConfig,
    pub gateway: GatewayConfig,
    pub chains: ChainsConfig,
}

impl ZqConfig {
    /// Defaults, then the yaml file at `file` if given, then `ZQ_` prefixed
    /// environment variables with `__` separating nested keys.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(ZqConfig::default()));
        if let Some(file) = file {
            figment = figment.merge(Yaml::file(file));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<()> {
        ValidUrl::from_str(&self.prover.url)
            .with_context(|| format!("Invalid prover url '{}'", self.prover.url))?;
        ValidUrl::from_str(&self.gateway.url)
            .with_context(|| format!("Invalid gateway url '{}'", self.gateway.url))?;
        for (name, poll) in [
            ("prover.proof_poll", &self.prover.proof_poll),
            ("gateway.status_poll", &self.gateway.status_poll),
        ] {
            if poll.max_attempts == 0 {
                bail!("{name}.max_attempts must be at least 1");
            }
        }
        Ok(())
    }
}

pub struct OsDirs;
impl OsDirs {
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("zq"))
    }
}

/// Load the config at `config_file`, or the first `zq.config.yaml` found
/// walking up from the working directory, or the one in the user config
/// directory. Defaults are used for everything no file sets.
pub fn load_config(config_file: Option<String>) -> Result<ZqConfig> {
    let cwd = env::current_dir()?;
    let config_dir = OsDirs::config_dir();
    let cli_file = config_file.map(PathBuf::from);

    let source = resolve_config_path(
        find_in_parent,
        &cwd,
        config_dir.as_deref(),
        DEFAULT_CONFIG_NAME,
        cli_file.as_deref(),
    );

    let file = match &source {
        ConfigSource::Explicit(path) => {
            if !path.exists() {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    format!("{} does not exist", path.display()),
                ))
                .context("Configuration file not found");
            }
            Some(path.as_path())
        }
        ConfigSource::Found(path) => Some(path.as_path()),
        ConfigSource::Default(path) if path.exists() => Some(path.as_path()),
        ConfigSource::Default(_) | ConfigSource::None => None,
    };
    debug!(file = ?file, "loading configuration");

    let config: ZqConfig = ZqConfig::figment(file)
        .extract()
        .context("Could not parse configuration")?;
    config.validate()?;
    Ok(config)
}
