//! One-shot analysis command.

use anyhow::Result;
use aura_core::AnalysisResult;
use clap::Args;

use super::ProviderArgs;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Text to analyze
    pub text: String,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Run the same pipeline as `POST /process_text` and print the payload the
/// endpoint would have returned.
pub async fn execute(args: AnalyzeArgs) -> Result<()> {
    let client = args.provider.build_client()?;

    let result = match aura_core::analyze_text(&client, &args.text).await {
        Ok(result) => result,
        Err(err) => {
            tracing::warn!(error = %err, "Analysis failed");
            AnalysisResult::from_error(&err)
        }
    };

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}
