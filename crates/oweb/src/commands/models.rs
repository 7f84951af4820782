//! List-models command - available LLM models.

use anyhow::Result;

use super::{Context, report};
use crate::output;

/// Run the list-models command.
pub async fn run(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let outcome = client.models().list().await?;
    report(ctx, outcome, "Failed to retrieve models", output::models)?;
    Ok(())
}
