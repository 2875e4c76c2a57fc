pub mod client;
pub mod http_client;
pub mod source;

pub use client::HttpCardApi;
pub use source::{CardListRequest, CardPage, CardSearchRequest, CardSource, UpstreamError};
