//! Backend endpoint configuration
//!
//! The base URL is read once from the build environment and injected into
//! `GenerationClient` at construction time; nothing consults the
//! environment ad hoc.

/// Production host used when `BACKEND_URL` is not set at build time.
const DEFAULT_BACKEND_URL: &str = "https://readme.mrigank.me";

#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Configuration as baked into the wasm binary at compile time.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("BACKEND_URL").unwrap_or(DEFAULT_BACKEND_URL))
    }

    /// Full URL of the generation endpoint.
    pub fn generate_url(&self) -> String {
        format!("{}/generate-readme", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig::new("https://example.com/");
        assert_eq!(config.generate_url(), "https://example.com/generate-readme");
    }

    #[test]
    fn generate_url_appends_endpoint_path() {
        let config = ApiConfig::new("http://localhost:8000");
        assert_eq!(config.generate_url(), "http://localhost:8000/generate-readme");
    }
}
