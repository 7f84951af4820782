//! List-knowledge command - uploaded knowledge documents.

use anyhow::Result;

use super::{Context, report};
use crate::output;

/// Run the list-knowledge command.
pub async fn run(ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    let outcome = client.files().list().await?;
    report(
        ctx,
        outcome,
        "Failed to retrieve knowledge documents",
        |files| output::knowledge(files),
    )?;
    Ok(())
}
