use reqwest::Client;
use std::time::Duration;

/// One bounded timeout for every outbound call to the card API.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

pub fn create_client() -> Client {
    Client::builder()
        .user_agent(concat!("cardfront/", env!("CARGO_PKG_VERSION")))
        .timeout(REQUEST_TIMEOUT)
        .build()
        .expect("Failed to create HTTP client")
}
