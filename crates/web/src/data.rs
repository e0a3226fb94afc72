//! Static site data, embedded into the bundle at compile time.

use anyhow::Context;

use sanskriti_catalog::{CardStore, CatalogStore};

const STATES_JSON: &str = include_str!("../data/states.json");
const STATE_CARDS_JSON: &str = include_str!("../data/state_cards.json");

/// Everything the pages read, parsed and validated once at start-up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SiteData {
    pub catalog: CatalogStore,
    pub cards: CardStore,
}

impl SiteData {
    /// Load the data shipped with the bundle.
    pub fn load_embedded() -> anyhow::Result<Self> {
        Self::from_json(STATES_JSON, STATE_CARDS_JSON)
    }

    pub fn from_json(states: &str, state_cards: &str) -> anyhow::Result<Self> {
        let catalog = CatalogStore::from_json(states).context("failed to load states.json")?;
        let cards =
            CardStore::from_json(state_cards).context("failed to load state_cards.json")?;

        for group in cards.groups() {
            if !catalog.resolve(group.state_id.as_str()).is_found() {
                tracing::warn!(state_id = %group.state_id, "heritage cards for unknown state");
            }
        }

        Ok(Self { catalog, cards })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::ImageResolver;
    use crate::page::StatePage;
    use sanskriti_core::CatalogError;

    #[test]
    fn embedded_data_loads() {
        let data = SiteData::load_embedded().unwrap();
        assert!(!data.catalog.is_empty());
        assert!(!data.cards.is_empty());
    }

    #[test]
    fn embedded_cards_all_belong_to_known_states() {
        let data = SiteData::load_embedded().unwrap();
        for group in data.cards.groups() {
            assert!(
                data.catalog.resolve(group.state_id.as_str()).is_found(),
                "unknown state {}",
                group.state_id
            );
        }
    }

    #[test]
    fn load_errors_carry_file_context() {
        let err = SiteData::from_json("[]", "not json").unwrap_err();
        assert!(err.to_string().contains("state_cards.json"));
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn blank_state_name_still_loads_and_renders() {
        let states = r#"[
            {"id":"goa","name":"","imageName":"","description":"","capital":"","language":"","area":"","population":""}
        ]"#;
        let data = SiteData::from_json(states, "[]").unwrap();

        let page = StatePage::for_route(&data, "goa", &ImageResolver::new("/img"));
        let StatePage::Found(view) = page else {
            panic!("Expected goa page");
        };
        assert_eq!(view.name, "");
        assert_eq!(view.hero_image, None);
        assert!(view.facts.iter().all(|fact| fact.value.is_empty()));
    }

    #[test]
    fn duplicate_states_are_rejected() {
        let states = r#"[
            {"id":"goa","name":"Goa","imageName":"","description":"","capital":"","language":"","area":"","population":""},
            {"id":"goa","name":"Goa","imageName":"","description":"","capital":"","language":"","area":"","population":""}
        ]"#;
        let err = SiteData::from_json(states, "[]").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::DuplicateId(_))
        ));
    }
}
