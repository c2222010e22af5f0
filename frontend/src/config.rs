use studio_core::StudioConfig;

/// Backend base URL baked in at build time (`BACKEND_URL=... trunk build`).
/// Empty means the API is served from the same origin as the page.
pub fn get_backend_url() -> &'static str {
    option_env!("BACKEND_URL").unwrap_or("")
}

pub fn studio_config() -> StudioConfig {
    StudioConfig::new(get_backend_url())
}
