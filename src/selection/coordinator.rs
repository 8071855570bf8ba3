use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{info, warn};

use crate::catalog::{Catalog, CatalogEntry};
use crate::error::{AppError, AppResult};

/// Selected entry plus the list entries drawn expanded. Only constructed
/// through [`SelectionState::single`], so `expanded_ids == {selected_id}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionState {
    selected_id: String,
    expanded_ids: BTreeSet<String>,
}

impl SelectionState {
    fn single(id: &str) -> Self {
        Self {
            selected_id: id.to_string(),
            expanded_ids: BTreeSet::from([id.to_string()]),
        }
    }

    pub fn selected_id(&self) -> &str {
        &self.selected_id
    }

    pub fn expanded_ids(&self) -> &BTreeSet<String> {
        &self.expanded_ids
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    pub from: String,
    pub to: String,
}

/// Keeps the detail panel and the list highlight pointing at the same entry.
///
/// Every mutation replaces the whole [`SelectionState`] in one assignment.
/// Unknown ids are always rejected with [`AppError::UnknownEntry`] and leave
/// the previous state untouched.
#[derive(Debug, Clone)]
pub struct SelectionCoordinator {
    catalog: Arc<Catalog>,
    state: SelectionState,
}

impl SelectionCoordinator {
    pub fn initialize(catalog: Arc<Catalog>) -> AppResult<Self> {
        let Some(first) = catalog.first() else {
            return Err(AppError::EmptyCatalog);
        };
        let state = SelectionState::single(&first.id);
        Ok(Self { catalog, state })
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn selected_id(&self) -> &str {
        &self.state.selected_id
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.catalog.position(&self.state.selected_id)
    }

    pub fn select(&mut self, id: &str) -> AppResult<&CatalogEntry> {
        if self.catalog.get(id).is_none() {
            warn!(id, "rejected selection of unknown catalog entry");
            return Err(AppError::unknown_entry(id));
        }
        if self.state.selected_id != id {
            info!(from = %self.state.selected_id, to = id, "selection changed");
            self.state = SelectionState::single(id);
        }
        self.detail()
    }

    pub fn detail(&self) -> AppResult<&CatalogEntry> {
        self.catalog.get(&self.state.selected_id).ok_or_else(|| {
            AppError::invariant(format!(
                "selected entry {} missing from catalog",
                self.state.selected_id
            ))
        })
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.state.selected_id == id
    }

    /// Moves to the following entry in display order. Returns `None` at the
    /// last entry.
    pub fn select_next(&mut self) -> AppResult<Option<SelectionChange>> {
        self.step(true)
    }

    pub fn select_prev(&mut self) -> AppResult<Option<SelectionChange>> {
        self.step(false)
    }

    fn step(&mut self, forward: bool) -> AppResult<Option<SelectionChange>> {
        let current = self.selected_index().ok_or_else(|| {
            AppError::invariant(format!(
                "selected entry {} missing from catalog",
                self.state.selected_id
            ))
        })?;
        let target = if forward {
            current + 1
        } else if let Some(prev) = current.checked_sub(1) {
            prev
        } else {
            return Ok(None);
        };
        let Some(entry) = self.catalog.at(target) else {
            return Ok(None);
        };

        let to = entry.id.clone();
        let from = self.state.selected_id.clone();
        self.select(&to)?;
        Ok(Some(SelectionChange { from, to }))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::SelectionCoordinator;
    use crate::catalog::{Catalog, CatalogEntry, sample_catalog};
    use crate::error::AppError;

    fn catalog_with_ids(ids: &[&str]) -> Arc<Catalog> {
        let template = sample_catalog()
            .first()
            .cloned()
            .expect("sample catalog is not empty");
        let entries = ids
            .iter()
            .map(|id| CatalogEntry {
                id: id.to_string(),
                project: template.project.clone(),
            })
            .collect();
        Arc::new(Catalog::new(entries).expect("ids are unique"))
    }

    #[test]
    fn initialize_rejects_empty_catalog() {
        let empty = Arc::new(Catalog::new(Vec::new()).expect("empty catalog is valid"));
        let err = SelectionCoordinator::initialize(empty).expect_err("empty should fail");
        assert!(matches!(err, AppError::EmptyCatalog));
    }

    #[test]
    fn initialize_selects_first_entry() {
        let coordinator =
            SelectionCoordinator::initialize(catalog_with_ids(&["1"])).expect("init");
        assert_eq!(coordinator.selected_id(), "1");
        assert!(coordinator.is_expanded("1"));
        assert_eq!(coordinator.state().expanded_ids().len(), 1);
    }

    #[test]
    fn select_updates_detail_and_expansion_together() {
        let mut coordinator =
            SelectionCoordinator::initialize(catalog_with_ids(&["1", "2", "3"])).expect("init");

        let entry = coordinator.select("3").expect("known id");
        assert_eq!(entry.id, "3");
        assert_eq!(coordinator.detail().expect("detail").id, "3");
        assert!(coordinator.is_expanded("3"));
        assert!(!coordinator.is_expanded("2"));
        assert!(!coordinator.is_expanded("1"));
        assert_eq!(
            coordinator.state().expanded_ids().iter().collect::<Vec<_>>(),
            vec!["3"]
        );
    }

    #[test]
    fn select_unknown_id_keeps_previous_state() {
        let mut coordinator =
            SelectionCoordinator::initialize(catalog_with_ids(&["1", "2"])).expect("init");
        coordinator.select("2").expect("known id");
        let before = coordinator.state().clone();

        let err = coordinator.select("9").expect_err("unknown id");
        assert!(matches!(err, AppError::UnknownEntry { ref id } if id == "9"));
        assert_eq!(coordinator.state(), &before);
        assert_eq!(coordinator.detail().expect("detail").id, "2");
    }

    #[test]
    fn expansion_tracks_every_selection_in_a_sequence() {
        let ids = ["a", "b", "c", "d"];
        let mut coordinator =
            SelectionCoordinator::initialize(catalog_with_ids(&ids)).expect("init");

        for id in ["c", "a", "a", "d", "b", "c"] {
            coordinator.select(id).expect("known id");
            for other in ids {
                assert_eq!(coordinator.is_expanded(other), other == id);
            }
            assert_eq!(coordinator.state().expanded_ids().len(), 1);
        }
    }

    #[test]
    fn step_moves_in_display_order_without_wrapping() {
        let mut coordinator =
            SelectionCoordinator::initialize(catalog_with_ids(&["1", "2", "3"])).expect("init");

        assert_eq!(coordinator.select_prev().expect("step"), None);

        let change = coordinator.select_next().expect("step").expect("moved");
        assert_eq!((change.from.as_str(), change.to.as_str()), ("1", "2"));
        coordinator.select_next().expect("step");
        assert_eq!(coordinator.selected_index(), Some(2));
        assert_eq!(coordinator.select_next().expect("step"), None);
        assert!(coordinator.is_expanded("3"));

        coordinator.select_prev().expect("step");
        assert_eq!(coordinator.selected_id(), "2");
    }
}
