//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use aura_core::provider::openai::{DEFAULT_MODEL, DEFAULT_OPENAI_URL};
use aura_core::{OpenAiClient, OpenAiConfig};
use clap::{Args, Parser, Subcommand};
use std::time::Duration;

pub mod analyze;
pub mod serve;

/// Aura - sentiment, keyword and emotion analysis over an LLM provider
#[derive(Parser)]
#[command(name = "aura")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the analysis web server
    Serve(serve::ServeArgs),

    /// Analyze a single piece of text and print the result as JSON
    Analyze(analyze::AnalyzeArgs),
}

/// Provider connection settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct ProviderArgs {
    /// API key for the completion provider
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Chat model identifier
    #[arg(long, env = "AURA_MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Base URL of the chat-completions API
    #[arg(long, env = "OPENAI_BASE_URL", default_value = DEFAULT_OPENAI_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds (waits indefinitely when unset)
    #[arg(long, env = "AURA_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,
}

impl ProviderArgs {
    /// Build the provider client these settings describe.
    pub fn build_client(&self) -> Result<OpenAiClient> {
        if self.api_key.trim().is_empty() {
            anyhow::bail!("OPENAI_API_KEY is empty");
        }

        let config = OpenAiConfig {
            api_key: self.api_key.clone(),
            model: self.model.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout_secs.map(Duration::from_secs),
        };

        OpenAiClient::new(config).context("Failed to build provider client")
    }
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::execute(args).await,
            Commands::Analyze(args) => analyze::execute(args).await,
        }
    }
}
