//! HTTP client SDK for an Open WebUI server.
//!
//! Covers the endpoints needed to manage a knowledge base and ask questions
//! against it:
//!
//! - **Files**: upload documents, list indexed documents
//! - **Models**: list available models
//! - **Chat**: one-shot completions, optionally scoped to knowledge documents
//!
//! Every call returns [`Result<Outcome<T>>`](Outcome). `Err` means the request
//! could not be made or its success payload could not be parsed;
//! [`Outcome::Failure`] carries any non-200 response verbatim.
//!
//! # Example
//!
//! ```no_run
//! use oweb_client::{Outcome, OwebClient, Result};
//!
//! # async fn example() -> Result<()> {
//! let client = OwebClient::builder()
//!     .base_url("http://localhost:3000/api")
//!     .api_key("sk-secret")
//!     .build()?;
//!
//! if let Outcome::Success(answer) = client.chat().ask("llama3", "Hello?", None).await? {
//!     for text in answer.answers() {
//!         println!("{}", text);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod error;
pub mod outcome;
pub mod types;

pub use client::{ClientBuilder, DEFAULT_BASE_URL, OwebClient};
pub use error::{Error, Result};
pub use outcome::{HttpFailure, Outcome};
pub use types::*;
