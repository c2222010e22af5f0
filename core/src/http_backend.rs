use reqwest::header::CONTENT_TYPE;
use reqwest::Client;

use crate::client::GenerationBackend;
use crate::config::StudioConfig;
use crate::error::GenerationError;

/// `reqwest` transport for native callers. Needs an absolute backend URL;
/// a same-origin (empty) base only makes sense in the browser.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    config: StudioConfig,
}

impl HttpBackend {
    pub fn new(config: StudioConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

impl GenerationBackend for HttpBackend {
    async fn get(&self, path: &str) -> Result<(), GenerationError> {
        let response = self.client.get(self.config.url(path)).send().await?;
        response.error_for_status()?;
        Ok(())
    }

    async fn post_json(&self, path: &str, body: String) -> Result<String, GenerationError> {
        let response = self
            .client
            .post(self.config.url(path))
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GenerationError::Status(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}
