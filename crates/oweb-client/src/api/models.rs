//! Models API.

use crate::client::OwebClient;
use crate::error::Result;
use crate::outcome::Outcome;
use crate::types::ModelList;

/// Models API client.
pub struct ModelsApi {
    client: OwebClient,
}

impl ModelsApi {
    pub(crate) fn new(client: OwebClient) -> Self {
        Self { client }
    }

    /// List the models available for chat.
    pub async fn list(&self) -> Result<Outcome<ModelList>> {
        self.client.get("models").await
    }
}
