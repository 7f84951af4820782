//! CLI command handlers.

pub mod ask;
pub mod knowledge;
pub mod load_dir;
pub mod models;
pub mod upload;

use anyhow::{Context as _, Result};
use oweb_client::{Error as ClientError, Outcome, OwebClient};
use serde::Serialize;

use crate::config::Config;
use crate::output;

/// Shared context for all commands.
#[derive(Debug, Clone)]
pub struct Context {
    /// Resolved configuration.
    pub config: Config,
    /// Output success payloads as JSON for scripting.
    pub json_output: bool,
    /// Verbose output enabled.
    pub verbose: bool,
}

impl Context {
    /// Build an API client for this run.
    pub fn client(&self) -> Result<OwebClient> {
        self.config
            .client()
            .with_context(|| format!("failed to create client for {}", self.config.base_url))
    }
}

/// Print an outcome to stdout.
///
/// Successes go through `render` (or pretty JSON with `--json`); failures are
/// printed as status plus raw body. Returns whether the call succeeded.
pub(crate) fn report<T: Serialize>(
    ctx: &Context,
    outcome: Outcome<T>,
    failure_prefix: &str,
    render: impl FnOnce(&T) -> String,
) -> Result<bool> {
    match outcome {
        Outcome::Success(value) => {
            if ctx.json_output {
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                print!("{}", render(&value));
            }
            Ok(true)
        }
        Outcome::Failure(failure) => {
            print!("{}", output::failure(failure_prefix, &failure));
            Ok(false)
        }
    }
}

/// Explain a failed run when the server could not be reached at all.
///
/// Other errors are returned untouched.
pub fn explain_unreachable(err: anyhow::Error, base_url: &str) -> anyhow::Error {
    let unreachable = err.chain().any(|cause| {
        cause
            .downcast_ref::<ClientError>()
            .is_some_and(ClientError::is_connect_error)
    });
    if unreachable {
        err.context(format!(
            "could not reach the server at {} (is Open WebUI running?)",
            base_url
        ))
    } else {
        err
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_errors_are_untouched() {
        let err = anyhow::Error::from(ClientError::Config("api_key is required".to_string()))
            .context("failed to create client");
        let explained = explain_unreachable(err, "http://localhost:3000/api/");
        assert_eq!(explained.to_string(), "failed to create client");
        assert_eq!(explained.chain().count(), 2);
    }

    #[tokio::test]
    async fn test_refused_connection_names_the_server() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let base_url = format!("http://127.0.0.1:{}/api/", port);
        let client = OwebClient::builder()
            .base_url(&base_url)
            .api_key("test-key")
            .build()
            .unwrap();
        let err = client.models().list().await.unwrap_err();
        assert!(err.is_connect_error());

        let explained = explain_unreachable(anyhow::Error::from(err), &base_url);
        assert!(
            explained
                .to_string()
                .starts_with("could not reach the server at http://127.0.0.1:")
        );
    }
}
