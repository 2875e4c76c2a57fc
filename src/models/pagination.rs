use serde::{Deserialize, Serialize};

/// Pagination descriptor produced by the upstream API. Passed through to the
/// views unchanged; each field falls back independently when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default)]
    pub total_pages: i64,
    #[serde(default)]
    pub total: i64,
}

fn default_page() -> i64 {
    1
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: 1,
            total_pages: 0,
            total: 0,
        }
    }
}
