//! Card Association Store: heritage-site cards grouped by region id.

use serde::{Deserialize, Serialize};

use sanskriti_core::{CatalogResult, RegionId, ValueObject};

/// A heritage-site highlight shown on a state page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub image_src: String,
    pub title: String,
    pub description: String,
}

impl ValueObject for Card {}

impl Card {
    pub fn new(
        image_src: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            image_src: image_src.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Cards for one region, in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardGroup {
    pub state_id: RegionId,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Mutable, insertion-ordered association of region id to cards.
///
/// Populated from `state_cards.json` at start-up; lookups never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardStore {
    groups: Vec<CardGroup>,
}

impl CardStore {
    pub fn new(groups: Vec<CardGroup>) -> Self {
        Self { groups }
    }

    pub fn from_json(json: &str) -> CatalogResult<Self> {
        let groups: Vec<CardGroup> = serde_json::from_str(json)?;
        tracing::info!(groups = groups.len(), "heritage cards loaded");
        Ok(Self::new(groups))
    }

    /// Cards of the first group whose id matches exactly; empty otherwise.
    pub fn cards_for(&self, region_id: &str) -> &[Card] {
        self.groups
            .iter()
            .find(|g| g.state_id.as_str() == region_id)
            .map(|g| g.cards.as_slice())
            .unwrap_or(&[])
    }

    /// Replace the cards of an existing group in place, or append a new group.
    pub fn upsert_group(&mut self, state_id: RegionId, cards: Vec<Card>) {
        match self.groups.iter_mut().find(|g| g.state_id == state_id) {
            Some(group) => group.cards = cards,
            None => self.groups.push(CardGroup { state_id, cards }),
        }
    }

    pub fn groups(&self) -> &[CardGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amber_fort() -> Card {
        Card::new("amber.jpg", "Amber Fort", "Hilltop fort near Jaipur")
    }

    fn hawa_mahal() -> Card {
        Card::new("hawa.jpg", "Hawa Mahal", "Palace of winds")
    }

    #[test]
    fn cards_for_returns_stored_list_in_order() {
        let store = CardStore::new(vec![CardGroup {
            state_id: RegionId::new("rajasthan"),
            cards: vec![amber_fort(), hawa_mahal()],
        }]);

        assert_eq!(store.cards_for("rajasthan"), &[amber_fort(), hawa_mahal()]);
    }

    #[test]
    fn unknown_region_yields_empty_slice() {
        let store = CardStore::default();
        assert!(store.cards_for("atlantis").is_empty());
    }

    #[test]
    fn first_matching_group_wins() {
        let store = CardStore::new(vec![
            CardGroup {
                state_id: RegionId::new("goa"),
                cards: vec![amber_fort()],
            },
            CardGroup {
                state_id: RegionId::new("goa"),
                cards: vec![hawa_mahal()],
            },
        ]);
        assert_eq!(store.cards_for("goa"), &[amber_fort()]);
    }

    #[test]
    fn upsert_replaces_or_appends() {
        let mut store = CardStore::default();
        store.upsert_group(RegionId::new("rajasthan"), vec![amber_fort()]);
        store.upsert_group(RegionId::new("kerala"), vec![]);
        store.upsert_group(RegionId::new("rajasthan"), vec![hawa_mahal()]);

        assert_eq!(store.groups().len(), 2);
        assert_eq!(store.groups()[0].state_id.as_str(), "rajasthan");
        assert_eq!(store.cards_for("rajasthan"), &[hawa_mahal()]);
    }

    #[test]
    fn from_json_reads_camel_case_groups() {
        let json = r#"[{ "stateId": "rajasthan", "cards": [
            { "imageSrc": "amber.jpg", "title": "Amber Fort", "description": "Hilltop fort near Jaipur" }
        ]}]"#;
        let store = CardStore::from_json(json).unwrap();
        assert_eq!(store.cards_for("rajasthan"), &[amber_fort()]);
    }
}
