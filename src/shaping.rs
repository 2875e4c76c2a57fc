//! Turns an upstream card page into a render-ready view model: image-path
//! fixup, optional client-requested re-sort, featured image, stats banner.

use crate::models::{Card, CardStats, Pagination, SortKey, SortOrder, DEFAULT_CARD_IMAGE};
use crate::upstream::CardPage;

/// Everything a listing template needs. Always fully populated: a failed
/// upstream call produces the degraded form, never a missing field.
#[derive(Debug, Clone)]
pub struct CardListView {
    pub cards: Vec<Card>,
    pub card_image: String,
    pub pagination: Pagination,
    pub stats: CardStats,
    pub error: Option<String>,
}

impl CardListView {
    /// An empty result set with no error, e.g. the advanced-search form
    /// before any submission.
    pub fn empty() -> Self {
        Self {
            cards: Vec::new(),
            card_image: DEFAULT_CARD_IMAGE.to_string(),
            pagination: Pagination::default(),
            stats: CardStats::default(),
            error: None,
        }
    }

    /// Fallback view for an upstream failure. The message must be non-empty;
    /// it is surfaced to the user.
    pub fn degraded(message: String) -> Self {
        Self {
            error: Some(message),
            ..Self::empty()
        }
    }
}

/// Shape one upstream page into a view model, re-sorting when the route
/// supports a client-chosen sort.
pub fn build_view(page: CardPage, sort: Option<(SortKey, SortOrder)>) -> CardListView {
    let mut cards = normalize_image_paths(page.cards);
    if let Some((key, order)) = sort {
        sort_cards(&mut cards, key, order);
    }
    let card_image = featured_image(&cards);
    let stats = CardStats::from_total(page.pagination.total);

    CardListView {
        cards,
        card_image,
        pagination: page.pagination,
        stats,
        error: None,
    }
}

/// The upstream API returns relative image paths. Anchor them at the asset
/// root, and fall back to the default asset for cards with no image. Missing
/// and empty paths are treated the same.
pub fn normalize_image_paths(cards: Vec<Card>) -> Vec<Card> {
    cards
        .into_iter()
        .map(|mut card| {
            card.image_filepath = Some(match card.image_filepath.take() {
                Some(path) if path.starts_with('/') => path,
                Some(path) if !path.is_empty() => format!("/{path}"),
                _ => DEFAULT_CARD_IMAGE.to_string(),
            });
            card
        })
        .collect()
}

/// Total-order comparator over the client-chosen key; ties stay in upstream
/// order. Missing numeric fields compare as 0, missing names as "".
pub fn sort_cards(cards: &mut [Card], key: SortKey, order: SortOrder) {
    cards.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Year => a.card_year.unwrap_or(0).cmp(&b.card_year.unwrap_or(0)),
            SortKey::CardNumber => a
                .card_number
                .unwrap_or(0)
                .cmp(&b.card_number.unwrap_or(0)),
            SortKey::Name => a
                .display_name()
                .to_lowercase()
                .cmp(&b.display_name().to_lowercase()),
        };
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// The image representing the current result set: the first card's
/// normalized path, or the default asset for an empty page.
pub fn featured_image(cards: &[Card]) -> String {
    cards
        .first()
        .map(|card| card.image_path().to_string())
        .unwrap_or_else(|| DEFAULT_CARD_IMAGE.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Pagination;

    fn card(name: &str) -> Card {
        Card {
            card_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    fn card_with_year(year: i64) -> Card {
        Card {
            card_year: Some(year),
            ..Default::default()
        }
    }

    #[test]
    fn missing_image_gets_the_default_asset() {
        let shaped = normalize_image_paths(vec![card("Academy Ruins")]);
        assert_eq!(shaped[0].image_filepath.as_deref(), Some(DEFAULT_CARD_IMAGE));
    }

    #[test]
    fn empty_image_path_gets_the_default_asset() {
        let mut c = card("Academy Ruins");
        c.image_filepath = Some(String::new());
        let shaped = normalize_image_paths(vec![c]);
        assert_eq!(shaped[0].image_filepath.as_deref(), Some(DEFAULT_CARD_IMAGE));
    }

    #[test]
    fn relative_image_path_is_anchored() {
        let mut c = card("Academy Ruins");
        c.image_filepath = Some("card_images/academy.png".to_string());
        let shaped = normalize_image_paths(vec![c]);
        assert_eq!(
            shaped[0].image_filepath.as_deref(),
            Some("/card_images/academy.png")
        );
    }

    #[test]
    fn absolute_image_path_is_untouched() {
        let mut c = card("Academy Ruins");
        c.image_filepath = Some("/card_images/academy.png".to_string());
        let shaped = normalize_image_paths(vec![c]);
        assert_eq!(
            shaped[0].image_filepath.as_deref(),
            Some("/card_images/academy.png")
        );
    }

    #[test]
    fn year_descending() {
        let mut cards = vec![card_with_year(2003), card_with_year(1999), card_with_year(2015)];
        sort_cards(&mut cards, SortKey::Year, SortOrder::Desc);
        let years: Vec<_> = cards.iter().map(|c| c.card_year.unwrap()).collect();
        assert_eq!(years, vec![2015, 2003, 1999]);
    }

    #[test]
    fn name_ascending_is_case_insensitive() {
        let mut cards = vec![card("zebra"), card("Apple")];
        sort_cards(&mut cards, SortKey::Name, SortOrder::Asc);
        let names: Vec<_> = cards.iter().map(|c| c.display_name()).collect();
        assert_eq!(names, vec!["Apple", "zebra"]);
    }

    #[test]
    fn card_number_treats_missing_as_zero() {
        let mut with_number = card("numbered");
        with_number.card_number = Some(7);
        let mut cards = vec![with_number, card("unnumbered")];
        sort_cards(&mut cards, SortKey::CardNumber, SortOrder::Asc);
        assert_eq!(cards[0].display_name(), "unnumbered");
        assert_eq!(cards[1].display_name(), "numbered");
    }

    #[test]
    fn featured_image_on_empty_set_is_the_default() {
        assert_eq!(featured_image(&[]), DEFAULT_CARD_IMAGE);
    }

    #[test]
    fn build_view_derives_stats_from_the_pagination_total() {
        let page = CardPage {
            cards: vec![],
            pagination: Pagination {
                page: 1,
                total_pages: 4,
                total: 42,
            },
            filters: None,
        };
        let view = build_view(page, None);
        assert_eq!(view.stats.total_cards, 42);
        assert_eq!(view.stats.unique_cards, 42);
        assert!(view.error.is_none());
    }

    #[test]
    fn degraded_view_is_fully_populated() {
        let view = CardListView::degraded("Unable to load cards".to_string());
        assert!(view.cards.is_empty());
        assert_eq!(view.pagination, Pagination::default());
        assert_eq!(view.card_image, DEFAULT_CARD_IMAGE);
        assert!(!view.error.as_deref().unwrap().is_empty());
    }
}
