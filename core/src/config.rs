/// Where the generation backend lives. Built once at startup and handed to
/// whatever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudioConfig {
    backend_url: String,
}

impl StudioConfig {
    /// An empty base means same-origin: endpoints stay relative paths.
    pub fn new(backend_url: impl Into<String>) -> Self {
        let backend_url = backend_url.into();
        Self {
            backend_url: backend_url.trim().trim_end_matches('/').to_string(),
        }
    }

    /// Loads `.env` if present and reads `BACKEND_URL`, falling back to
    /// same-origin when it is unset.
    #[cfg(feature = "native")]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::new(std::env::var("BACKEND_URL").unwrap_or_default())
    }

    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.backend_url, path)
    }
}
