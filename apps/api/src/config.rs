use anyhow::{Context, Result};

const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/generate";
const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";
const DEFAULT_PISTON_URL: &str = "https://emkc.org/api/v2/piston/execute";

/// Application configuration loaded from environment variables.
/// Every upstream has a local-development default, so nothing is required.
#[derive(Debug, Clone)]
pub struct Config {
    pub ollama_url: String,
    pub ollama_model: String,
    pub piston_url: String,
    pub port: u16,
    pub max_upload_bytes: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let max_upload_mb = env_or("MAX_UPLOAD_MB", "10")
            .parse::<usize>()
            .context("MAX_UPLOAD_MB must be a whole number of megabytes")?;

        Ok(Config {
            ollama_url: env_or("OLLAMA_URL", DEFAULT_OLLAMA_URL),
            ollama_model: env_or("OLLAMA_MODEL", DEFAULT_OLLAMA_MODEL),
            piston_url: env_or("PISTON_URL", DEFAULT_PISTON_URL),
            port: env_or("PORT", "8000")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            max_upload_bytes: upload_limit_bytes(max_upload_mb)?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn upload_limit_bytes(megabytes: usize) -> Result<usize> {
    megabytes
        .checked_mul(1024 * 1024)
        .context("MAX_UPLOAD_MB is too large")
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_limit_converts_megabytes() {
        assert_eq!(upload_limit_bytes(10).unwrap(), 10 * 1024 * 1024);
    }

    #[test]
    fn test_upload_limit_overflow_is_an_error() {
        let err = upload_limit_bytes(usize::MAX).unwrap_err();
        assert_eq!(err.to_string(), "MAX_UPLOAD_MB is too large");
    }
}
