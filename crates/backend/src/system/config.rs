//! Process configuration
//!
//! Read once from the environment at startup and installed as a process
//! global; nothing else touches the environment afterwards.

use once_cell::sync::OnceCell;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MODEL: &str = "claude-3-5-sonnet-20241022";
const DEFAULT_STATIC_DIR: &str = "dist";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub static_dir: String,
    pub anthropic_api_key: String,
    pub anthropic_model: String,
    pub github_token: Option<String>,
}

impl AppConfig {
    /// Read configuration from the environment. The Anthropic key is the
    /// only required variable.
    pub fn from_env() -> anyhow::Result<Self> {
        let anthropic_api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "No Anthropic API key set in environment variable ANTHROPIC_API_KEY"
                )
            })?;

        Ok(Self {
            bind_addr: env_or("BIND_ADDR", DEFAULT_BIND_ADDR),
            static_dir: env_or("STATIC_DIR", DEFAULT_STATIC_DIR),
            anthropic_api_key,
            anthropic_model: env_or("ANTHROPIC_MODEL", DEFAULT_MODEL),
            github_token: std::env::var("GITHUB_TOKEN")
                .ok()
                .filter(|token| !token.is_empty()),
        })
    }
}

fn env_or(name: &str, default: &str) -> String {
    std::env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_owned())
}

/// Install the configuration; called exactly once from `main`.
pub fn install(config: AppConfig) -> anyhow::Result<()> {
    CONFIG
        .set(config)
        .map_err(|_| anyhow::anyhow!("configuration installed twice"))
}

/// Panics when called before `install`; `main` installs before serving.
pub fn get() -> &'static AppConfig {
    CONFIG.get().expect("configuration not installed")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_to_the_default() {
        assert_eq!(env_or("README_GEN_UNSET_VARIABLE", "fallback"), "fallback");
    }
}
