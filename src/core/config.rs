// Process configuration, loaded once at startup.
//
// The two secrets are required; startup must fail before any network
// connection is attempted when either is missing.

use std::env;

use thiserror::Error;

const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_PORT: u16 = 10000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0} (check your .env file)")]
    MissingVar(&'static str),
    #[error("invalid value for {0}: {1:?}")]
    InvalidVar(&'static str, String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub discord_token: String,
    pub openai_api_key: String,
    /// Completion model identifier. Overridable via `OPENAI_MODEL`.
    pub model: String,
    /// Listen port for the keep-alive endpoint. Overridable via `PORT`.
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidVar("PORT", raw))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            discord_token: required("DISCORD_TOKEN")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            model: optional("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            port,
        })
    }
}

fn required(name: &'static str) -> Result<String, ConfigError> {
    optional(name).ok_or(ConfigError::MissingVar(name))
}

// Empty and whitespace-only values count as unset.
fn optional(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so the fixed env var names aren't mutated from
    // concurrently running tests.
    #[test]
    fn from_env_requires_both_secrets() {
        env::set_var("DISCORD_TOKEN", "token-123");
        env::set_var("OPENAI_API_KEY", "sk-456");
        env::remove_var("OPENAI_MODEL");
        env::remove_var("PORT");

        let config = Config::from_env().expect("both secrets set");
        assert_eq!(config.discord_token, "token-123");
        assert_eq!(config.openai_api_key, "sk-456");
        assert_eq!(config.model, DEFAULT_MODEL);
        assert_eq!(config.port, DEFAULT_PORT);

        env::set_var("OPENAI_MODEL", "gpt-4o-mini");
        env::set_var("PORT", "8080");
        let config = Config::from_env().expect("overrides set");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.port, 8080);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidVar("PORT", _))
        ));
        env::remove_var("PORT");

        // Whitespace-only counts as unset.
        env::set_var("OPENAI_API_KEY", "   ");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("OPENAI_API_KEY"))
        ));

        env::remove_var("DISCORD_TOKEN");
        env::set_var("OPENAI_API_KEY", "sk-456");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::MissingVar("DISCORD_TOKEN"))
        ));

        env::remove_var("OPENAI_API_KEY");
        env::remove_var("OPENAI_MODEL");
    }
}
