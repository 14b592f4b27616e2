use std::env;

#[derive(Clone)]
pub struct Config {
    /// Base URL of the remote data gateway.
    pub gateway_url: String,
    pub request_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        let _ = dotenvy::dotenv();

        let gateway_url = env::var("GATEWAY_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_string());
        if gateway_url.is_empty() {
            return Err(ConfigError::InvalidGatewayUrl);
        }

        Ok(Self {
            gateway_url: gateway_url.trim_end_matches('/').to_string(),
            request_timeout_secs: env::var("REQUEST_TIMEOUT")
                .unwrap_or_else(|_| "30".to_string())
                .parse()
                .unwrap_or(30),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid gateway URL")]
    InvalidGatewayUrl,
}
