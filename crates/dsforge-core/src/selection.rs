//! The (component, variant, state) cursor of the editor.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{DsError, DsResult};
use crate::store::Store;

/// What the editor currently points at.
///
/// Either all three ids are empty, or all three point at live entities.
/// `repair` restores that after any structural change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub component_id: Option<String>,
    pub variant_id: Option<String>,
    pub state_id: Option<String>,
}

impl Selection {
    pub fn new(
        component_id: impl Into<String>,
        variant_id: impl Into<String>,
        state_id: impl Into<String>,
    ) -> Self {
        Self {
            component_id: Some(component_id.into()),
            variant_id: Some(variant_id.into()),
            state_id: Some(state_id.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.component_id.is_none()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether every id points at a live entity (an empty selection is valid).
    pub fn is_valid(&self, store: &Store) -> bool {
        match (&self.component_id, &self.variant_id, &self.state_id) {
            (None, None, None) => true,
            (Some(_), Some(_), Some(_)) => store.resolve(self).is_some(),
            _ => false,
        }
    }

    /// Select a component, landing on its first variant and first state.
    pub fn select_component(store: &Store, component_id: &str) -> DsResult<Self> {
        let component = store.get_component(component_id)?;
        let mut selection = Self {
            component_id: Some(component.id.clone()),
            variant_id: None,
            state_id: None,
        };
        selection.repair(store);
        Ok(selection)
    }

    /// Select a variant, landing on its first state.
    pub fn select_variant(store: &Store, component_id: &str, variant_id: &str) -> DsResult<Self> {
        let (component, variant) = store.get_variant(component_id, variant_id)?;
        let mut selection = Self {
            component_id: Some(component.id.clone()),
            variant_id: Some(variant.id.clone()),
            state_id: None,
        };
        selection.repair(store);
        Ok(selection)
    }

    /// Select an exact (component, variant, state) triple.
    pub fn select_state(
        store: &Store,
        component_id: &str,
        variant_id: &str,
        state_id: &str,
    ) -> DsResult<Self> {
        let (_, variant) = store.get_variant(component_id, variant_id)?;
        if variant.state(state_id).is_none() {
            return Err(DsError::StateNotFound(state_id.to_string()));
        }
        Ok(Self::new(component_id, variant_id, state_id))
    }

    /// Re-point dangling ids at the first live sibling, or clear.
    ///
    /// - component gone: clear everything;
    /// - variant gone: first variant of the component and its first state;
    /// - state gone: first state of the variant.
    pub fn repair(&mut self, store: &Store) {
        let before = self.clone();

        let component = match self.component_id.as_deref().and_then(|id| store.component(id)) {
            Some(component) => component,
            None => {
                self.clear();
                log_repair(&before, self);
                return;
            }
        };

        let variant = match self.variant_id.as_deref().and_then(|id| component.variant(id)) {
            Some(variant) => variant,
            None => match component.variants.first() {
                Some(first) => {
                    self.variant_id = Some(first.id.clone());
                    self.state_id = None;
                    first
                }
                None => {
                    self.clear();
                    log_repair(&before, self);
                    return;
                }
            },
        };

        if self.state_id.as_deref().and_then(|id| variant.state(id)).is_none() {
            match variant.states.first() {
                Some(first) => self.state_id = Some(first.id.clone()),
                None => self.clear(),
            }
        }

        log_repair(&before, self);
    }
}

fn log_repair(before: &Selection, after: &Selection) {
    if before != after {
        debug!(
            from = ?before,
            to = ?after,
            "Selection repaired"
        );
    }
}
