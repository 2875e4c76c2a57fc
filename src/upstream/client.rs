use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::CardStats;
use crate::upstream::http_client::create_client;
use crate::upstream::source::{
    CardListRequest, CardPage, CardSearchRequest, CardSource, UpstreamError, UpstreamResult,
};

/// `CardSource` backed by the real card-data API over HTTP.
pub struct HttpCardApi {
    client: Client,
    base_url: String,
}

impl HttpCardApi {
    pub fn new(base_url: String) -> Self {
        Self {
            client: create_client(),
            base_url,
        }
    }

    async fn get_json<Q, T>(&self, path: &str, query: Option<&Q>) -> UpstreamResult<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        let mut request = self.client.get(&url);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CardSource for HttpCardApi {
    async fn list_cards(&self, request: &CardListRequest) -> UpstreamResult<CardPage> {
        tracing::debug!(page = request.page, search = %request.search, "Fetching card listing");
        self.get_json("/api/cards", Some(request)).await
    }

    async fn search_cards(&self, request: &CardSearchRequest) -> UpstreamResult<CardPage> {
        tracing::debug!(page = request.page, "Running advanced card search");
        self.get_json("/api/cards/search", Some(request)).await
    }

    async fn card_stats(&self) -> UpstreamResult<CardStats> {
        self.get_json::<(), CardStats>("/api/cards/stats", None).await
    }
}
