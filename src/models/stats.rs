use serde::{Deserialize, Serialize};

/// Collection statistics shown in the results banner. The upstream stats
/// endpoint returns the same shape with a real distinct count; the listing
/// views derive theirs from the pagination total instead, so both fields
/// carry the same value there.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardStats {
    #[serde(default)]
    pub total_cards: i64,
    #[serde(default)]
    pub unique_cards: i64,
}

impl CardStats {
    pub fn from_total(total: i64) -> Self {
        Self {
            total_cards: total,
            unique_cards: total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_mirrors_the_pagination_total() {
        let stats = CardStats::from_total(42);
        assert_eq!(stats.total_cards, 42);
        assert_eq!(stats.unique_cards, 42);
    }
}
