//! Ask command - one-shot question to a model.

use anyhow::Result;
use clap::Args;
use console::Style;

use super::{Context, report};
use crate::output;

/// Arguments for the ask command.
#[derive(Args, Debug)]
pub struct AskArgs {
    /// The question to ask
    #[arg(required = true)]
    pub question: String,

    /// Model name to use
    #[arg(short, long, required = true)]
    pub model: String,

    /// Knowledge document IDs to ground the answer in
    #[arg(short, long, num_args = 0..)]
    pub knowledge: Option<Vec<String>>,
}

/// Run the ask command.
pub async fn run(args: AskArgs, ctx: &Context) -> Result<()> {
    let client = ctx.client()?;

    if ctx.verbose {
        let dim = Style::new().dim();
        println!(
            "{}",
            dim.apply_to(format!("Sending to: {}", client.base_url()))
        );
        println!("{}", dim.apply_to(format!("Model: {}", args.model)));
        if let Some(ref ids) = args.knowledge {
            println!("{}", dim.apply_to(format!("Knowledge: {:?}", ids)));
        }
        println!();
    }

    let outcome = client
        .chat()
        .ask(&args.model, &args.question, args.knowledge)
        .await?;
    report(ctx, outcome, "Failed to get response", output::answer)?;
    Ok(())
}
