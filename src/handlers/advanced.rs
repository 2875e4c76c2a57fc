use axum::extract::State;
use axum::Form;

use crate::models::{AdvancedSearchForm, CARDS_PER_PAGE};
use crate::shaping::{self, CardListView};
use crate::state::AppState;
use crate::upstream::CardSearchRequest;
use crate::utils::response::HtmlTemplate;
use crate::views::AdvancedSearchTemplate;

/// The empty search form, before any submission.
pub async fn form() -> HtmlTemplate<AdvancedSearchTemplate> {
    HtmlTemplate(AdvancedSearchTemplate {
        view: CardListView::empty(),
        form: AdvancedSearchForm::default(),
        results_shown: false,
    })
}

pub async fn search(
    State(state): State<AppState>,
    Form(form): Form<AdvancedSearchForm>,
) -> HtmlTemplate<AdvancedSearchTemplate> {
    let request = CardSearchRequest {
        card_name: form.card_name.clone(),
        rules_text: form.rules_text.clone(),
        card_color: form.card_color.clone(),
        type_line: form.type_line.clone(),
        mana_value: form.mana_value.clone(),
        power: form.power.clone(),
        toughness: form.toughness.clone(),
        flavor_text: form.flavor_text.clone(),
        department: form.department.clone(),
        page: form.page_number(),
        per_page: CARDS_PER_PAGE,
    };

    let view = match state.source.search_cards(&request).await {
        Ok(page) => shaping::build_view(page, None),
        Err(err) => {
            tracing::error!(error = %err, "Advanced search failed");
            CardListView::degraded("Error performing search. Please try again.".to_string())
        }
    };

    let results_shown = view.error.is_none();

    HtmlTemplate(AdvancedSearchTemplate {
        view,
        form,
        results_shown,
    })
}
