//! Style model and resolution.
//!
//! The effective style of a (variant, state) pair is the variant's full base
//! style with the state's partial overrides laid on top:
//!
//! ```text
//! effective = overlay(variant.styles, state.styles)
//! ```

pub mod model;
pub mod overrides;

pub use model::{PropertyKind, Spacing, StyleProperty, StyleRecord, StyleValue, TextAlign};
pub use overrides::StyleOverrides;

use tracing::{debug, warn};

use crate::component::model::{ComponentState, ComponentVariant};
use crate::selection::Selection;
use crate::store::Store;

impl StyleRecord {
    /// Copy of this record with every entry of `overrides` written over it.
    pub fn overlay(&self, overrides: &StyleOverrides) -> StyleRecord {
        let mut out = self.clone();
        for (property, value) in overrides.iter() {
            // Overrides are kind-checked on insert, so this only trips on a
            // hand-built map that bypassed `StyleOverrides::insert`.
            if let Err(e) = out.set(property, value.clone()) {
                warn!(property = %property, error = %e, "Ignoring ill-typed override");
            }
        }
        out
    }

    /// The properties where `self` differs from `base`, by structural equality.
    pub fn diff_from(&self, base: &StyleRecord) -> StyleOverrides {
        let mut delta = StyleOverrides::new();
        for property in StyleProperty::ALL {
            let value = self.get(property);
            if value != base.get(property) {
                // Both sides come from typed records, the kind always matches.
                if let Err(e) = delta.insert(property, value) {
                    warn!(property = %property, error = %e, "Dropping diff entry");
                }
            }
        }
        delta
    }
}

/// Effective style of `state` within `variant`.
pub fn resolve_style(variant: &ComponentVariant, state: &ComponentState) -> StyleRecord {
    variant.styles.overlay(&state.styles)
}

/// Effective style for the current selection.
///
/// Falls back to `StyleRecord::default()` when nothing (or nothing live) is
/// selected.
pub fn resolve_selection(store: &Store, selection: &Selection) -> StyleRecord {
    match store.resolve(selection) {
        Some((_, variant, state)) => {
            debug!(variant = %variant.id, state = %state.id, "Resolving selected style");
            resolve_style(variant, state)
        }
        None => StyleRecord::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variant_with_hover(hover: StyleOverrides) -> ComponentVariant {
        let mut hover_state = ComponentState::new("hover", "hover", "");
        hover_state.styles = hover;
        ComponentVariant {
            id: "primary".to_string(),
            name: "Primary".to_string(),
            description: String::new(),
            styles: StyleRecord::default(),
            states: vec![ComponentState::new("default", "default", ""), hover_state],
        }
    }

    #[test]
    fn test_default_state_resolves_to_base() {
        let variant = variant_with_hover(StyleOverrides::new());
        assert_eq!(resolve_style(&variant, &variant.states[0]), variant.styles);
    }

    #[test]
    fn test_overlay_replaces_only_present_keys() {
        let hover = StyleOverrides::new()
            .with(StyleProperty::BackgroundColor, StyleValue::text("#112233"))
            .unwrap();
        let variant = variant_with_hover(hover);

        let effective = resolve_style(&variant, &variant.states[1]);
        assert_eq!(effective.background_color, "#112233");
        assert_eq!(effective.text_color, variant.styles.text_color);
        assert_eq!(effective.padding, variant.styles.padding);
    }

    #[test]
    fn test_diff_from_is_minimal() {
        let base = StyleRecord::default();
        let mut edited = base.clone();
        edited.border_radius = "20px".to_string();
        edited.glow = true;

        let delta = edited.diff_from(&base);
        assert_eq!(delta.len(), 2);
        assert!(delta.contains(StyleProperty::BorderRadius));
        assert!(delta.contains(StyleProperty::Glow));
        assert!(base.diff_from(&base).is_empty());
    }

    #[test]
    fn test_resolve_selection_falls_back() {
        let store = Store::new();
        assert_eq!(
            resolve_selection(&store, &Selection::default()),
            StyleRecord::default()
        );
    }
}
