use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::models::{Card, CardStats, Pagination};

/// One page of cards as returned by the upstream listing and search
/// endpoints. Both top-level fields default when the response omits them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CardPage {
    #[serde(default)]
    pub cards: Vec<Card>,
    #[serde(default)]
    pub pagination: Pagination,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filters: Option<Value>,
}

/// Parameters for the listing endpoint. Serializes directly onto the query
/// string; `search` is omitted when empty, matching what the API expects.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CardListRequest {
    pub page: i64,
    pub per_page: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
}

/// Parameters for the advanced-search endpoint. Empty filter fields are sent
/// as empty strings; the API treats them as "no constraint".
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CardSearchRequest {
    pub card_name: String,
    pub rules_text: String,
    pub card_color: String,
    pub type_line: String,
    pub mana_value: String,
    pub power: String,
    pub toughness: String,
    pub flavor_text: String,
    pub department: String,
    pub page: i64,
    pub per_page: u32,
}

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("request to card API failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("card API returned {0}")]
    Status(StatusCode),
}

pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// The outbound seam to the card-data API. Handlers only see this trait;
/// tests substitute a stub.
#[async_trait]
pub trait CardSource: Send + Sync {
    async fn list_cards(&self, request: &CardListRequest) -> UpstreamResult<CardPage>;

    async fn search_cards(&self, request: &CardSearchRequest) -> UpstreamResult<CardPage>;

    async fn card_stats(&self) -> UpstreamResult<CardStats>;
}
