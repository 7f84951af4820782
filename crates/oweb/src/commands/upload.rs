//! Upload command - send one document for indexing.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Args;
use oweb_client::OwebClient;

use super::{Context, report};
use crate::output;

/// Arguments for the upload command.
#[derive(Args, Debug)]
pub struct UploadArgs {
    /// Path to the document
    pub file: PathBuf,
}

/// Run the upload command.
pub async fn run(args: UploadArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;
    upload_file(&client, &args.file, ctx).await?;
    Ok(())
}

/// Upload one file and print the outcome. Returns whether the server accepted it.
///
/// An unreadable file is an error; a rejected upload is only reported.
pub(crate) async fn upload_file(client: &OwebClient, path: &Path, ctx: &Context) -> Result<bool> {
    let outcome = client
        .files()
        .upload(path)
        .await
        .with_context(|| format!("failed to upload {}", path.display()))?;
    report(ctx, outcome, "Failed to upload file", output::upload)
}
