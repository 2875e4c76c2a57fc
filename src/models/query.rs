use serde::Deserialize;

/// Cards shown per listing page. Fixed per route and never read from the
/// request; the upstream `per_page` parameter always carries this value.
pub const CARDS_PER_PAGE: u32 = 12;

/// Raw listing parameters as they arrive on the query string. Everything is
/// optional and stringly typed; normalization happens in [`ListQuery`].
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ListParams {
    pub q: Option<String>,
    pub page: Option<String>,
    pub view: Option<String>,
    pub display: Option<String>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// Canonical listing query, defaults applied. `page` keeps whatever numeric
/// value the client sent (negative included, the upstream API interprets it);
/// only absent or non-numeric values collapse to 1.
#[derive(Debug, Clone)]
pub struct ListQuery {
    pub search: String,
    pub page: i64,
    pub view: String,
    pub display: String,
    pub sort: String,
    pub order: String,
}

impl ListQuery {
    pub fn from_params(params: ListParams) -> Self {
        Self {
            search: params.q.unwrap_or_default(),
            page: params
                .page
                .as_deref()
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(1),
            view: params.view.unwrap_or_else(|| "cards".to_string()),
            display: params.display.unwrap_or_else(|| "images".to_string()),
            sort: params.sort.unwrap_or_else(|| "name".to_string()),
            order: params.order.unwrap_or_else(|| "asc".to_string()),
        }
    }

    pub fn sort_key(&self) -> SortKey {
        SortKey::parse(&self.sort)
    }

    pub fn sort_order(&self) -> SortOrder {
        SortOrder::parse(&self.order)
    }

    /// Link back to the index for another page of the same query.
    pub fn page_href(&self, page: i64) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());
        if !self.search.is_empty() {
            query.append_pair("q", &self.search);
        }
        query.append_pair("sort", &self.sort);
        query.append_pair("order", &self.order);
        query.append_pair("page", &page.to_string());
        format!("/?{}", query.finish())
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::from_params(ListParams::default())
    }
}

/// Client-chosen secondary sort key. Unrecognized values fall back to the
/// display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Year,
    CardNumber,
}

impl SortKey {
    pub fn parse(s: &str) -> Self {
        match s {
            "year" | "release_date" => SortKey::Year,
            "card_number" => SortKey::CardNumber,
            _ => SortKey::Name,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Self {
        if s == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }
}

/// Advanced-search form body. Missing fields deserialize to empty strings so
/// the form can be echoed back verbatim.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AdvancedSearchForm {
    #[serde(default)]
    pub card_name: String,
    #[serde(default)]
    pub rules_text: String,
    #[serde(default)]
    pub card_color: String,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub mana_value: String,
    #[serde(default)]
    pub power: String,
    #[serde(default)]
    pub toughness: String,
    #[serde(default)]
    pub flavor_text: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub page: Option<String>,
}

impl AdvancedSearchForm {
    pub fn page_number(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}
