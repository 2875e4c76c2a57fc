use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Default asset shown when a card has no usable image path.
pub const DEFAULT_CARD_IMAGE: &str = "/card_images/default-card.png";

/// A card record as served by the upstream API. The API owns this shape; we
/// treat it as a read-only mapping of named fields and only ever rewrite
/// `image_filepath` on our own copies. Unknown fields are kept in `extra` so
/// the JSON passthrough route does not drop them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Card {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mana_cost: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_text: Option<String>,
    #[serde(
        default,
        deserialize_with = "loose_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub power: Option<i64>,
    #[serde(
        default,
        deserialize_with = "loose_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub toughness: Option<i64>,
    #[serde(
        default,
        deserialize_with = "loose_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_year: Option<i64>,
    #[serde(
        default,
        deserialize_with = "loose_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub card_number: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_filepath: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl Card {
    pub fn display_name(&self) -> &str {
        self.card_name.as_deref().unwrap_or("")
    }

    /// Image path for rendering. After shaping this is always set; the
    /// default keeps the accessor total either way.
    pub fn image_path(&self) -> &str {
        self.image_filepath.as_deref().unwrap_or(DEFAULT_CARD_IMAGE)
    }

    pub fn mana_cost_text(&self) -> &str {
        self.mana_cost.as_deref().unwrap_or("")
    }

    pub fn type_line_text(&self) -> &str {
        self.type_line.as_deref().unwrap_or("")
    }

    /// "5/5"-style label, only when both halves are known.
    pub fn power_toughness(&self) -> Option<String> {
        match (self.power, self.toughness) {
            (Some(power), Some(toughness)) => Some(format!("{power}/{toughness}")),
            _ => None,
        }
    }
}

/// Accepts a JSON number or a numeric string. Strings parse like a leading
/// integer (`"15a"` -> 15); anything else becomes `None`.
fn loose_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_int))
}

fn value_as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
        Value::String(s) => parse_leading_int(s),
        _ => None,
    }
}

fn parse_leading_int(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_fields_accept_numbers_and_strings() {
        let card: Card = serde_json::from_value(serde_json::json!({
            "card_name": "Doc-Gargac, Parun",
            "card_year": "2003",
            "card_number": 17,
            "power": "5",
            "toughness": 5
        }))
        .unwrap();

        assert_eq!(card.card_year, Some(2003));
        assert_eq!(card.card_number, Some(17));
        assert_eq!(card.power, Some(5));
        assert_eq!(card.toughness, Some(5));
    }

    #[test]
    fn non_numeric_strings_become_absent() {
        let card: Card = serde_json::from_value(serde_json::json!({
            "card_year": "unknown",
            "power": null
        }))
        .unwrap();

        assert_eq!(card.card_year, None);
        assert_eq!(card.power, None);
    }

    #[test]
    fn leading_integer_parse() {
        assert_eq!(parse_leading_int("2003 Core"), Some(2003));
        assert_eq!(parse_leading_int("  15a"), Some(15));
        assert_eq!(parse_leading_int("-4"), Some(-4));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
    }

    #[test]
    fn unknown_fields_survive_a_round_trip() {
        let card: Card = serde_json::from_value(serde_json::json!({
            "card_name": "Hill Memorial",
            "rarity": "Rare",
            "printing": "Nonfoil"
        }))
        .unwrap();

        let back = serde_json::to_value(&card).unwrap();
        assert_eq!(back["rarity"], "Rare");
        assert_eq!(back["printing"], "Nonfoil");
    }
}
