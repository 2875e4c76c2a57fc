use askama::Template;

use crate::models::{AdvancedSearchForm, ListQuery};
use crate::shaping::CardListView;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub view: CardListView,
    pub query: ListQuery,
}

impl IndexTemplate {
    pub fn prev_href(&self) -> String {
        self.query.page_href(self.view.pagination.page - 1)
    }

    pub fn next_href(&self) -> String {
        self.query.page_href(self.view.pagination.page + 1)
    }
}

#[derive(Template)]
#[template(path = "cards_page.html")]
pub struct CardsPageTemplate {
    pub page_number: i64,
    pub view: CardListView,
}

#[derive(Template)]
#[template(path = "advanced_search.html")]
pub struct AdvancedSearchTemplate {
    pub view: CardListView,
    pub form: AdvancedSearchForm,
    pub results_shown: bool,
}

#[derive(Template)]
#[template(path = "full_view.html")]
pub struct FullViewTemplate {
    pub card_name: &'static str,
    pub alt_name: &'static str,
    pub mana_cost: &'static str,
    pub card_type: &'static str,
    pub oracle_text: Vec<&'static str>,
    pub flavor_text: &'static str,
    pub power: i64,
    pub toughness: i64,
    pub rarity: &'static str,
    pub printing: &'static str,
}
