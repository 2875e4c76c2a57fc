use std::env;

const DEFAULT_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream card-data API, without a trailing slash.
    pub card_api_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Self {
        let card_api_url = env::var("CARD_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3000);

        Self {
            card_api_url,
            host,
            port,
        }
    }
}
