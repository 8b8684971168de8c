//! Editing session: the store, the selection and the undo history behind
//! one facade.
//!
//! Every mutating call follows the same path: snapshot, run the command,
//! repair the selection, record the snapshot. A rejected command returns
//! its error before anything is recorded, and the store is left as it was.

use tracing::{debug, info};

use crate::component::{self, model::ComponentType};
use crate::config::DsConfig;
use crate::edit::{self, EditOutcome};
use crate::error::DsResult;
use crate::history::{History, Snapshot};
use crate::selection::Selection;
use crate::store::Store;
use crate::style::{resolve_selection, StyleOverrides, StyleRecord};
use crate::variation;

#[derive(Debug, Clone, Default)]
pub struct Session {
    store: Store,
    selection: Selection,
    history: History,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history_limit(limit: usize) -> Self {
        Self {
            history: History::new(limit),
            ..Self::default()
        }
    }

    pub fn from_config(config: &DsConfig) -> Self {
        Self::with_history_limit(config.history_limit)
    }

    /// Rebuild a session from stored parts. The selection is repaired
    /// against `store` before use.
    pub fn from_parts(store: Store, mut selection: Selection, history: History) -> Self {
        selection.repair(&store);
        Self {
            store,
            selection,
            history,
        }
    }

    pub fn into_parts(self) -> (Store, Selection, History) {
        (self.store, self.selection, self.history)
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    fn snapshot(&self) -> Snapshot {
        Snapshot {
            store: self.store.clone(),
            selection: self.selection.clone(),
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        self.store = snapshot.store;
        self.selection = snapshot.selection;
        self.selection.repair(&self.store);
    }

    fn mutate<T>(&mut self, op: impl FnOnce(&mut Store) -> DsResult<T>) -> DsResult<T> {
        let before = self.snapshot();
        let value = op(&mut self.store)?;
        self.selection.repair(&self.store);
        self.history.record(before);
        Ok(value)
    }

    // --- Components ---

    /// Create a component and select it (first variant, first state).
    pub fn create_component(&mut self, component_type: ComponentType, name: &str) -> DsResult<String> {
        let before = self.snapshot();
        let id = component::create_component(&mut self.store, component_type, name)?;
        self.selection = Selection::select_component(&self.store, &id)?;
        self.history.record(before);
        Ok(id)
    }

    /// Delete a component. A selection pointing into it is cleared.
    pub fn delete_component(&mut self, component_id: &str) -> DsResult<()> {
        self.mutate(|store| component::delete_component(store, component_id).map(|_| ()))
    }

    pub fn update_component_details(
        &mut self,
        component_id: &str,
        name: &str,
        description: Option<&str>,
    ) -> DsResult<()> {
        self.mutate(|store| component::update_component_details(store, component_id, name, description))
    }

    // --- Selection ---

    pub fn select_component(&mut self, component_id: &str) -> DsResult<()> {
        self.selection = Selection::select_component(&self.store, component_id)?;
        debug!(selection = ?self.selection, "Selection changed");
        Ok(())
    }

    pub fn select_variant(&mut self, component_id: &str, variant_id: &str) -> DsResult<()> {
        self.selection = Selection::select_variant(&self.store, component_id, variant_id)?;
        debug!(selection = ?self.selection, "Selection changed");
        Ok(())
    }

    pub fn select_state(&mut self, component_id: &str, variant_id: &str, state_id: &str) -> DsResult<()> {
        self.selection = Selection::select_state(&self.store, component_id, variant_id, state_id)?;
        debug!(selection = ?self.selection, "Selection changed");
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    // --- Styles ---

    /// Effective style of the current selection, or the default style
    /// record when nothing is selected.
    pub fn resolved_style(&self) -> StyleRecord {
        resolve_selection(&self.store, &self.selection)
    }

    /// Apply a style edit to the current selection. A no-selection edit
    /// leaves the store and the history untouched.
    pub fn apply_style_edit(&mut self, changes: &StyleOverrides) -> EditOutcome {
        let before = self.snapshot();
        let outcome = edit::apply_style_edit(&mut self.store, &self.selection, changes);
        if outcome.is_applied() {
            self.history.record(before);
        }
        outcome
    }

    pub fn reset_state_overrides(
        &mut self,
        component_id: &str,
        variant_id: &str,
        state_id: &str,
    ) -> DsResult<usize> {
        self.mutate(|store| edit::reset_state_overrides(store, component_id, variant_id, state_id))
    }

    // --- Variants ---

    /// Add a variant. The selection does not move.
    pub fn add_variant(
        &mut self,
        component_id: &str,
        name: &str,
        copy_from: Option<&str>,
    ) -> DsResult<String> {
        self.mutate(|store| variation::add_variant(store, component_id, name, copy_from))
    }

    pub fn remove_variant(&mut self, component_id: &str, variant_id: &str) -> DsResult<()> {
        self.mutate(|store| variation::remove_variant(store, component_id, variant_id).map(|_| ()))
    }

    pub fn duplicate_variant(&mut self, component_id: &str, variant_id: &str) -> DsResult<String> {
        self.mutate(|store| variation::duplicate_variant(store, component_id, variant_id))
    }

    pub fn rename_variant(&mut self, component_id: &str, variant_id: &str, name: &str) -> DsResult<()> {
        self.mutate(|store| variation::rename_variant(store, component_id, variant_id, name))
    }

    // --- States ---

    pub fn add_state(&mut self, component_id: &str, variant_id: &str, name: &str) -> DsResult<String> {
        self.mutate(|store| variation::add_state(store, component_id, variant_id, name))
    }

    pub fn remove_state(&mut self, component_id: &str, variant_id: &str, state_id: &str) -> DsResult<()> {
        self.mutate(|store| variation::remove_state(store, component_id, variant_id, state_id).map(|_| ()))
    }

    pub fn rename_state(
        &mut self,
        component_id: &str,
        variant_id: &str,
        state_id: &str,
        name: &str,
    ) -> DsResult<()> {
        self.mutate(|store| variation::rename_state(store, component_id, variant_id, state_id, name))
    }

    // --- History ---

    /// Step back one mutation. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(previous) => {
                self.restore(previous);
                info!(remaining = self.history.undo_depth(), "Undo");
                true
            }
            None => false,
        }
    }

    /// Re-apply the last undone mutation. Returns false when there is
    /// nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(next) => {
                self.restore(next);
                info!("Redo");
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DsError;
    use crate::style::{StyleProperty, StyleValue};

    fn session_with_button() -> (Session, String) {
        let mut session = Session::new();
        let id = session.create_component(ComponentType::Button, "CTA").unwrap();
        (session, id)
    }

    fn edit(property: StyleProperty, value: StyleValue) -> StyleOverrides {
        StyleOverrides::new().with(property, value).unwrap()
    }

    #[test]
    fn test_create_selects_new_component() {
        let (session, id) = session_with_button();
        assert_eq!(
            session.selection(),
            &Selection::new(id, "primary", "primary-default")
        );
    }

    #[test]
    fn test_remove_selected_variant_repairs_selection() {
        let (mut session, id) = session_with_button();
        session.select_state(&id, "ghost", "ghost-hover").unwrap();

        session.remove_variant(&id, "ghost").unwrap();

        assert_eq!(
            session.selection(),
            &Selection::new(id.clone(), "primary", "primary-default")
        );
        assert!(session.selection().is_valid(session.store()));
    }

    #[test]
    fn test_remove_selected_state_repairs_selection() {
        let (mut session, id) = session_with_button();
        session.select_state(&id, "primary", "primary-loading").unwrap();

        session.remove_state(&id, "primary", "primary-loading").unwrap();

        assert_eq!(session.selection().state_id.as_deref(), Some("primary-default"));
    }

    #[test]
    fn test_delete_component_clears_selection() {
        let (mut session, id) = session_with_button();
        session.delete_component(&id).unwrap();
        assert!(session.selection().is_empty());
        assert!(session.store().is_empty());
    }

    #[test]
    fn test_delete_other_component_keeps_selection() {
        let (mut session, first) = session_with_button();
        let second = session.create_component(ComponentType::Card, "Panel").unwrap();
        session.select_component(&first).unwrap();

        session.delete_component(&second).unwrap();
        assert_eq!(session.selection().component_id.as_deref(), Some(first.as_str()));
    }

    #[test]
    fn test_rejected_command_records_nothing() {
        let mut session = Session::new();
        let id = session.create_component(ComponentType::Hero, "Top").unwrap();
        let depth = session.history().undo_depth();
        let before = session.store().clone();

        let err = session.remove_variant(&id, "default").unwrap_err();
        assert!(err.is_cardinality());
        assert_eq!(session.store(), &before);
        assert_eq!(session.history().undo_depth(), depth);
    }

    #[test]
    fn test_no_selection_edit_records_nothing() {
        let mut session = Session::new();
        let outcome = session.apply_style_edit(&edit(StyleProperty::Opacity, StyleValue::Number(0.5)));
        assert_eq!(outcome, EditOutcome::NoSelection);
        assert!(!session.history().can_undo());
    }

    #[test]
    fn test_undo_redo_style_edit() {
        let (mut session, id) = session_with_button();
        let original = session.resolved_style();

        session.apply_style_edit(&edit(StyleProperty::BorderRadius, StyleValue::text("20px")));
        assert_eq!(session.resolved_style().border_radius, "20px");

        assert!(session.undo());
        assert_eq!(session.resolved_style(), original);

        assert!(session.redo());
        assert_eq!(session.resolved_style().border_radius, "20px");
        assert_eq!(session.selection().component_id.as_deref(), Some(id.as_str()));
    }

    #[test]
    fn test_undo_restores_removed_variant_and_selection() {
        let (mut session, id) = session_with_button();
        session.select_state(&id, "outline", "outline-hover").unwrap();
        session.remove_variant(&id, "outline").unwrap();

        assert!(session.undo());
        let component = session.store().component(&id).unwrap();
        assert!(component.variant("outline").is_some());
        assert_eq!(session.selection(), &Selection::new(id, "outline", "outline-hover"));
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut session = Session::new();
        assert!(!session.undo());
        assert!(!session.redo());
    }

    #[test]
    fn test_select_unknown_component_fails() {
        let (mut session, _) = session_with_button();
        let err = session.select_component("nope").unwrap_err();
        assert!(matches!(err, DsError::ComponentNotFound(_)));
    }

    #[test]
    fn test_from_parts_repairs_selection() {
        let (session, id) = session_with_button();
        let (store, _, history) = session.into_parts();
        let session = Session::from_parts(store, Selection::new(id.clone(), "gone", "gone"), history);
        assert_eq!(session.selection(), &Selection::new(id, "primary", "primary-default"));
    }
}
