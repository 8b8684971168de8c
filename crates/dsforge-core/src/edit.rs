//! Style edits: deciding which layer an edit lands in.
//!
//! Editing while the "default" state is selected rewrites the variant's base
//! style. Editing any other state stores only the properties that differ
//! from the variant's base, so later base edits keep cascading to every
//! property the state does not override.

use tracing::{debug, info};

use crate::error::{DsError, DsResult};
use crate::selection::Selection;
use crate::store::Store;
use crate::style::{resolve_style, StyleOverrides};

/// Which layer an edit was written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// Default state selected: the variant base style was rewritten.
    /// `changed` counts base properties whose value actually changed.
    VariantBase { changed: usize },
    /// Non-default state selected: its override map was recomputed and now
    /// holds `overridden` entries.
    StateOverride { overridden: usize },
    /// Nothing (live) selected; the store is untouched.
    NoSelection,
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        !matches!(self, Self::NoSelection)
    }
}

/// Apply `changes` to the selected (component, variant, state).
///
/// Never fails: `changes` is already typed, and a missing selection is a
/// silent no-op reported as `EditOutcome::NoSelection`.
pub fn apply_style_edit(
    store: &mut Store,
    selection: &Selection,
    changes: &StyleOverrides,
) -> EditOutcome {
    let (Some(component_id), Some(variant_id), Some(state_id)) = (
        selection.component_id.as_deref(),
        selection.variant_id.as_deref(),
        selection.state_id.as_deref(),
    ) else {
        debug!("Style edit dropped: nothing selected");
        return EditOutcome::NoSelection;
    };

    let Some(component) = store.component_mut(component_id) else {
        debug!(component_id, "Style edit dropped: component not found");
        return EditOutcome::NoSelection;
    };
    let Some(variant) = component.variant_mut(variant_id) else {
        debug!(variant_id, "Style edit dropped: variant not found");
        return EditOutcome::NoSelection;
    };
    let Some(index) = variant.states.iter().position(|s| s.id == state_id) else {
        debug!(state_id, "Style edit dropped: state not found");
        return EditOutcome::NoSelection;
    };

    let effective = resolve_style(variant, &variant.states[index]);
    let edited = effective.overlay(changes);

    let outcome = if variant.states[index].is_default() {
        let changed = edited.diff_from(&variant.styles).len();
        variant.styles = edited;
        variant.states[index].styles.clear();
        EditOutcome::VariantBase { changed }
    } else {
        let overrides = edited.diff_from(&variant.styles);
        let overridden = overrides.len();
        variant.states[index].styles = overrides;
        EditOutcome::StateOverride { overridden }
    };

    component.touch();
    info!(
        component_id,
        variant_id,
        state_id,
        properties = changes.len(),
        outcome = ?outcome,
        "Style edit applied"
    );
    outcome
}

/// Drop every override of a state so it inherits the variant base again.
/// Returns how many overrides were removed.
pub fn reset_state_overrides(
    store: &mut Store,
    component_id: &str,
    variant_id: &str,
    state_id: &str,
) -> DsResult<usize> {
    let component = store.get_component_mut(component_id)?;
    let variant = component
        .variant_mut(variant_id)
        .ok_or_else(|| DsError::VariantNotFound(variant_id.to_string()))?;
    let state = variant
        .state_mut(state_id)
        .ok_or_else(|| DsError::StateNotFound(state_id.to_string()))?;

    let removed = state.styles.len();
    state.styles.clear();
    if removed > 0 {
        component.touch();
    }
    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::{self, model::ComponentType};
    use crate::style::{StyleProperty, StyleValue};

    fn edit(property: StyleProperty, value: StyleValue) -> StyleOverrides {
        StyleOverrides::new().with(property, value).unwrap()
    }

    fn button_store() -> (Store, String) {
        let mut store = Store::new();
        let id = component::create_component(&mut store, ComponentType::Button, "CTA").unwrap();
        (store, id)
    }

    #[test]
    fn test_default_state_edit_rewrites_base() {
        let (mut store, id) = button_store();
        let selection = Selection::new(id.clone(), "primary", "primary-default");

        let outcome = apply_style_edit(
            &mut store,
            &selection,
            &edit(StyleProperty::BorderRadius, StyleValue::text("20px")),
        );
        assert_eq!(outcome, EditOutcome::VariantBase { changed: 1 });

        let variant = store.component(&id).unwrap().variant("primary").unwrap();
        assert_eq!(variant.styles.border_radius, "20px");
        assert!(variant.states[0].styles.is_empty());
    }

    #[test]
    fn test_non_default_edit_stores_delta_only() {
        let (mut store, id) = button_store();
        let selection = Selection::new(id.clone(), "primary", "primary-hover");
        let base_before = store.component(&id).unwrap().variants[0].styles.clone();

        let outcome = apply_style_edit(
            &mut store,
            &selection,
            &edit(StyleProperty::BackgroundColor, StyleValue::text("#112233")),
        );
        // backgroundColor replaced, transform from the factory kept.
        assert_eq!(outcome, EditOutcome::StateOverride { overridden: 2 });

        let variant = store.component(&id).unwrap().variant("primary").unwrap();
        let hover = variant.state("primary-hover").unwrap();
        assert_eq!(
            hover.styles.get(StyleProperty::BackgroundColor),
            Some(&StyleValue::text("#112233"))
        );
        assert!(hover.styles.contains(StyleProperty::Transform));
        assert_eq!(variant.styles, base_before);
    }

    #[test]
    fn test_setting_base_value_drops_override() {
        let (mut store, id) = button_store();
        let selection = Selection::new(id.clone(), "primary", "primary-hover");
        let base_bg = store.component(&id).unwrap().variants[0].styles.background_color.clone();

        apply_style_edit(
            &mut store,
            &selection,
            &edit(StyleProperty::BackgroundColor, StyleValue::text(base_bg)),
        );

        let hover = store.component(&id).unwrap().variants[0]
            .state("primary-hover")
            .unwrap()
            .clone();
        assert!(!hover.styles.contains(StyleProperty::BackgroundColor));
    }

    #[test]
    fn test_no_selection_leaves_store_unchanged() {
        let (mut store, _) = button_store();
        let before = store.clone();
        let outcome = apply_style_edit(
            &mut store,
            &Selection::default(),
            &edit(StyleProperty::Glow, StyleValue::Flag(true)),
        );
        assert_eq!(outcome, EditOutcome::NoSelection);
        assert_eq!(store, before);
    }

    #[test]
    fn test_dangling_selection_is_a_no_op() {
        let (mut store, id) = button_store();
        let before = store.clone();
        let outcome = apply_style_edit(
            &mut store,
            &Selection::new(id, "primary", "missing"),
            &edit(StyleProperty::Glow, StyleValue::Flag(true)),
        );
        assert_eq!(outcome, EditOutcome::NoSelection);
        assert_eq!(store, before);
    }

    #[test]
    fn test_edit_bumps_updated_at() {
        let (mut store, id) = button_store();
        let before = store.component(&id).unwrap().updated_at;
        apply_style_edit(
            &mut store,
            &Selection::new(id.clone(), "ghost", "ghost-hover"),
            &edit(StyleProperty::Opacity, StyleValue::Number(0.7)),
        );
        assert!(store.component(&id).unwrap().updated_at >= before);
    }

    #[test]
    fn test_reset_state_overrides() {
        let (mut store, id) = button_store();
        let removed = reset_state_overrides(&mut store, &id, "primary", "primary-hover").unwrap();
        assert_eq!(removed, 2);
        let variant = &store.component(&id).unwrap().variants[0];
        let hover = variant.state("primary-hover").unwrap();
        assert_eq!(resolve_style(variant, hover), variant.styles);

        let err = reset_state_overrides(&mut store, &id, "primary", "nope").unwrap_err();
        assert!(matches!(err, DsError::StateNotFound(_)));
    }
}
