use gloo_net::http::{Request, Response};
use studio_core::{GenerationBackend, GenerationError, StudioConfig};

/// Browser client for the generation service. Paths are resolved against the
/// configured backend URL, or left relative for same-origin deployments.
#[derive(Clone, PartialEq)]
pub struct Api {
    config: StudioConfig,
}

/// A request bound to a path on the generation service
pub struct RequestWrapper {
    request: Request,
}

impl RequestWrapper {
    fn new(config: &StudioConfig, path: &str, method: &str) -> Self {
        let full_url = config.url(path);
        let request = match method {
            "POST" => Request::post(&full_url),
            _ => Request::get(&full_url),
        };

        Self { request }
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.request = self.request.header(name, value);
        self
    }

    /// Set an already serialized JSON body
    pub fn json_body(self, body: String) -> Self {
        let mut wrapper = self.header("Content-Type", "application/json");
        wrapper.request = wrapper.request.body(body);
        wrapper
    }

    /// Send the request; anything but a 2xx comes back as an error
    pub async fn send(self) -> Result<Response, GenerationError> {
        let response = self
            .request
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(GenerationError::Status(response.status()));
        }
        Ok(response)
    }
}

impl Api {
    pub fn new(config: StudioConfig) -> Self {
        Self { config }
    }

    pub fn get(&self, path: &str) -> RequestWrapper {
        RequestWrapper::new(&self.config, path, "GET")
    }

    pub fn post(&self, path: &str) -> RequestWrapper {
        RequestWrapper::new(&self.config, path, "POST")
    }
}

impl GenerationBackend for Api {
    async fn get(&self, path: &str) -> Result<(), GenerationError> {
        Api::get(self, path).send().await.map(|_| ())
    }

    async fn post_json(&self, path: &str, body: String) -> Result<String, GenerationError> {
        let response = self.post(path).json_body(body).send().await?;
        response
            .text()
            .await
            .map_err(|e| GenerationError::Decode(e.to_string()))
    }
}
