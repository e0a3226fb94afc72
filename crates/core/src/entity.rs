//! Entity trait: identity + continuity across state changes.

use std::collections::HashSet;

use crate::error::{CatalogError, CatalogResult};

/// Entity marker + minimal interface.
///
/// Regions and products are entities: two records with the same identifier
/// are the same record, whatever their attributes say.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}

/// Fail on the first identifier seen twice; `describe` names it in the error.
pub fn ensure_unique_ids<'a, E, I, F>(entities: I, describe: F) -> CatalogResult<()>
where
    E: Entity + 'a,
    I: IntoIterator<Item = &'a E>,
    F: Fn(&E::Id) -> String,
{
    let mut seen = HashSet::new();
    for entity in entities {
        if !seen.insert(entity.id()) {
            return Err(CatalogError::duplicate_id(describe(entity.id())));
        }
    }
    Ok(())
}
