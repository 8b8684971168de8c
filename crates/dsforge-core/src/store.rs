//! In-memory component store.
//!
//! The store exclusively owns every component. Structural commands live in
//! `component` and `variation`; this module only offers lookups and the
//! invariant checks that persistence and tests rely on.

use serde::{Deserialize, Serialize};

use crate::component::model::{ComponentState, ComponentVariant, DesignSystemComponent};
use crate::error::{DsError, DsResult};
use crate::selection::Selection;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Store {
    pub components: Vec<DesignSystemComponent>,
}

/// A broken structural invariant found by `Store::check_invariants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    pub component_id: String,
    pub message: String,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn component(&self, id: &str) -> Option<&DesignSystemComponent> {
        self.components.iter().find(|c| c.id == id)
    }

    pub fn component_mut(&mut self, id: &str) -> Option<&mut DesignSystemComponent> {
        self.components.iter_mut().find(|c| c.id == id)
    }

    /// Like `component`, failing with `ComponentNotFound`.
    pub fn get_component(&self, id: &str) -> DsResult<&DesignSystemComponent> {
        self.component(id)
            .ok_or_else(|| DsError::ComponentNotFound(id.to_string()))
    }

    pub fn get_component_mut(&mut self, id: &str) -> DsResult<&mut DesignSystemComponent> {
        self.component_mut(id)
            .ok_or_else(|| DsError::ComponentNotFound(id.to_string()))
    }

    /// Component and variant, failing with the matching not-found error.
    pub fn get_variant(
        &self,
        component_id: &str,
        variant_id: &str,
    ) -> DsResult<(&DesignSystemComponent, &ComponentVariant)> {
        let component = self.get_component(component_id)?;
        let variant = component
            .variant(variant_id)
            .ok_or_else(|| DsError::VariantNotFound(variant_id.to_string()))?;
        Ok((component, variant))
    }

    /// Follow a selection down to live entities, if all three exist.
    pub fn resolve(
        &self,
        selection: &Selection,
    ) -> Option<(&DesignSystemComponent, &ComponentVariant, &ComponentState)> {
        let component = self.component(selection.component_id.as_deref()?)?;
        let variant = component.variant(selection.variant_id.as_deref()?)?;
        let state = variant.state(selection.state_id.as_deref()?)?;
        Some((component, variant, state))
    }

    /// Check the structural invariants of the whole tree.
    ///
    /// - component ids are unique;
    /// - every component has at least one variant, variant ids unique;
    /// - every variant has at least one state, state ids unique;
    /// - every variant has a "default" state and it carries no overrides.
    pub fn check_invariants(&self) -> Vec<InvariantViolation> {
        let mut violations = Vec::new();
        let mut push = |component_id: &str, message: String| {
            violations.push(InvariantViolation {
                component_id: component_id.to_string(),
                message,
            })
        };

        for (i, component) in self.components.iter().enumerate() {
            if self.components[..i].iter().any(|c| c.id == component.id) {
                push(&component.id, "duplicate component id".to_string());
            }
            if component.variants.is_empty() {
                push(&component.id, "component has no variants".to_string());
            }

            for (j, variant) in component.variants.iter().enumerate() {
                if component.variants[..j].iter().any(|v| v.id == variant.id) {
                    push(&component.id, format!("duplicate variant id '{}'", variant.id));
                }
                if variant.states.is_empty() {
                    push(&component.id, format!("variant '{}' has no states", variant.name));
                }
                match variant.default_state() {
                    None => push(
                        &component.id,
                        format!("variant '{}' has no default state", variant.name),
                    ),
                    Some(state) if !state.styles.is_empty() => push(
                        &component.id,
                        format!("default state of '{}' carries overrides", variant.name),
                    ),
                    Some(_) => {}
                }
                for (k, state) in variant.states.iter().enumerate() {
                    if variant.states[..k].iter().any(|s| s.id == state.id) {
                        push(&component.id, format!("duplicate state id '{}'", state.id));
                    }
                }
            }
        }

        violations
    }
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.component_id, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{self, model::ComponentType};
    use crate::style::{StyleProperty, StyleValue};

    #[test]
    fn test_fresh_components_satisfy_invariants() {
        let mut store = Store::new();
        for ty in [ComponentType::Button, ComponentType::Card, ComponentType::Hero] {
            component::create_component(&mut store, ty, "Sample").unwrap();
        }
        assert!(store.check_invariants().is_empty());
    }

    #[test]
    fn test_detects_polluted_default_state() {
        let mut store = Store::new();
        let id = component::create_component(&mut store, ComponentType::Button, "CTA").unwrap();
        let c = store.component_mut(&id).unwrap();
        c.variants[0].states[0]
            .styles
            .insert(StyleProperty::Opacity, StyleValue::Number(0.3))
            .unwrap();

        let violations = store.check_invariants();
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("default state"));
    }

    #[test]
    fn test_detects_empty_variant_list() {
        let mut store = Store::new();
        let id = component::create_component(&mut store, ComponentType::Badge, "Tag").unwrap();
        store.component_mut(&id).unwrap().variants.clear();
        assert!(!store.check_invariants().is_empty());
    }

    #[test]
    fn test_resolve_requires_all_three() {
        let mut store = Store::new();
        let id = component::create_component(&mut store, ComponentType::Button, "CTA").unwrap();
        let partial = Selection {
            component_id: Some(id),
            variant_id: Some("primary".to_string()),
            state_id: None,
        };
        assert!(store.resolve(&partial).is_none());
    }
}
