use crate::utils::response::HtmlTemplate;
use crate::views::FullViewTemplate;

/// Demo page showing the full-card layout with a fixed model.
pub async fn full_view() -> HtmlTemplate<FullViewTemplate> {
    HtmlTemplate(FullViewTemplate {
        card_name: "Doc-Gargac, Parun",
        alt_name: "Niv-Mizzet, Parun",
        mana_cost: "{UUURRR}",
        card_type: "Legendary Creature - Dragon Wizard",
        oracle_text: vec![
            "This spell can't be countered.",
            "Flying",
            "Whenever you draw a card, Doc-Gargac, Parun deals 1 damage to any target.",
            "Whenever a player casts an instant or sorcery spell, you draw a card.",
        ],
        flavor_text: "As a capstone professor, he is always working on a new project",
        power: 5,
        toughness: 5,
        rarity: "Rare",
        printing: "Nonfoil",
    })
}
