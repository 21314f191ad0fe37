//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

use super::ProviderArgs;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, env = "AURA_PORT", default_value = "8000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, env = "AURA_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Also append logs to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    let client = args.provider.build_client()?;

    println!();
    println!("  {} {}", "Aura".cyan().bold(), "Analysis Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}/process_text",
        "Endpoint".green(),
        args.host,
        args.port
    );
    println!("  {}     {}", "Model".green(), client.model());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    aura_web::run_server(Arc::new(client), &args.host, args.port).await?;

    Ok(())
}
