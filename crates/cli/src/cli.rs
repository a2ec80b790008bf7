// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::PathBuf;

use crate::helpers::telemetry::setup_simple_tracing;
use crate::{prove, prove_async, status, submit};
use anyhow::{Context, Result};
use clap::{command, ArgAction, Parser, Subcommand};
use tracing::{debug, instrument, Level};
use zq_config::{load_config, ZqConfig};
use zq_gateway::Gateway;
use zq_prover::Prover;

#[derive(Parser, Debug)]
#[command(name = "zq")]
#[command(about = "Assemble proof requests from chain evidence, prove them and submit them to the gateway", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,

    /// Indicate error levels by adding additional `-v` arguments. Eg. `zq -vvv` will give you
    /// trace level output
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        global = true
    )]
    pub verbose: u8,

    /// Silence all output. This argument cannot be used alongside `-v`
    #[arg(
        short,
        long,
        action = ArgAction::SetTrue,
        conflicts_with = "verbose",
        global = true
    )]
    quiet: bool,
}

impl Cli {
    pub fn log_level(&self) -> Level {
        if self.quiet {
            Level::ERROR
        } else {
            match self.verbose {
                0 => Level::WARN,  //
                1 => Level::INFO,  // -v
                2 => Level::DEBUG, // -vv
                _ => Level::TRACE, // -vvv
            }
        }
    }

    /// Installs logging through `init_tracing` and then loads the config, so
    /// config resolution is logged too.
    fn bootstrap(&self, init_tracing: impl FnOnce(Level)) -> Result<ZqConfig> {
        init_tracing(self.log_level());
        let config = load_config(self.config.clone())?;
        debug!(?config, "config loaded");
        Ok(config)
    }

    #[instrument(skip_all)]
    pub async fn execute(self) -> Result<()> {
        let config = self.bootstrap(setup_simple_tracing)?;

        match self.command {
            Commands::Prove { evidence } => {
                prove::execute(&prover(&config)?, &evidence).await?;
            }
            Commands::ProveAsync { evidence, wait } => {
                let poll = wait.then_some(config.prover.proof_poll);
                prove_async::execute(&prover(&config)?, &evidence, poll.as_ref()).await?;
            }
            Commands::Submit { evidence, wait } => {
                submit::execute(
                    &prover(&config)?,
                    &gateway(&config)?,
                    &evidence,
                    &config.chains,
                    wait,
                )
                .await?;
            }
            Commands::Status { request_id } => {
                status::execute(&gateway(&config)?, &request_id, config.chains.dst_chain_id)
                    .await?;
            }
        }

        Ok(())
    }
}

fn prover(config: &ZqConfig) -> Result<Prover> {
    Prover::connect(&config.prover.url, config.prover.timeout())
        .with_context(|| format!("Could not create prover client for {}", config.prover.url))
}

fn gateway(config: &ZqConfig) -> Result<Gateway> {
    Ok(
        Gateway::connect(&config.gateway.url, config.gateway.timeout())
            .with_context(|| {
                format!("Could not create gateway client for {}", config.gateway.url)
            })?
            .with_status_poll(config.gateway.status_poll),
    )
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a request from an evidence file and prove it, waiting for the proof
    Prove {
        /// Evidence JSON file
        #[arg(short, long)]
        evidence: PathBuf,
    },

    /// Hand a request to the prover and print the proof id
    ProveAsync {
        /// Evidence JSON file
        #[arg(short, long)]
        evidence: PathBuf,

        /// Poll until the proof is available and print it
        #[arg(long)]
        wait: bool,
    },

    /// Prove a request and submit the proof to the gateway
    Submit {
        /// Evidence JSON file
        #[arg(short, long)]
        evidence: PathBuf,

        /// Wait for the request to settle on the destination chain
        #[arg(long)]
        wait: bool,
    },

    /// Wait for a submitted request to settle
    Status {
        /// Request id returned by `submit`
        #[arg(long)]
        request_id: String,
    },
}
