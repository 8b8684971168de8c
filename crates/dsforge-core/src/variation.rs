//! Variant and state management commands.
//!
//! Every command validates fully before mutating, so a rejected command
//! leaves the store exactly as it was. Selection repair is the caller's job
//! (see `Session`).

use tracing::{info, warn};
use uuid::Uuid;

use crate::component::model::{is_default_name, ComponentState, ComponentVariant, DEFAULT_STATE_NAME};
use crate::component::validate_name;
use crate::error::{DsError, DsResult};
use crate::store::Store;
use crate::style::StyleRecord;

fn new_id() -> String {
    Uuid::new_v4().to_string()
}

fn default_state() -> ComponentState {
    ComponentState::new(new_id(), DEFAULT_STATE_NAME, "Resting appearance")
}

/// Append a new variant to a component.
///
/// The base style is the global default style, or a copy of `copy_from`'s
/// base style. The variant starts with a single empty "default" state.
/// Returns the new variant id.
pub fn add_variant(
    store: &mut Store,
    component_id: &str,
    name: &str,
    copy_from: Option<&str>,
) -> DsResult<String> {
    let name = validate_name(name, "Variant")?;
    let component = store.get_component_mut(component_id)?;

    if component.variant_by_name(&name).is_some() {
        return Err(DsError::DuplicateName {
            name,
            scope: format!("component '{}'", component.name),
        });
    }

    let styles = match copy_from {
        Some(source_id) => component
            .variant(source_id)
            .ok_or_else(|| DsError::VariantNotFound(source_id.to_string()))?
            .styles
            .clone(),
        None => StyleRecord::default(),
    };

    let id = new_id();
    component.variants.push(ComponentVariant {
        id: id.clone(),
        name: name.clone(),
        description: String::new(),
        styles,
        states: vec![default_state()],
    });
    component.touch();

    info!(component_id, variant_id = %id, name = %name, "Variant added");
    Ok(id)
}

/// Remove a variant. The last variant of a component cannot be removed.
pub fn remove_variant(
    store: &mut Store,
    component_id: &str,
    variant_id: &str,
) -> DsResult<ComponentVariant> {
    let component = store.get_component_mut(component_id)?;
    let index = component
        .variants
        .iter()
        .position(|v| v.id == variant_id)
        .ok_or_else(|| DsError::VariantNotFound(variant_id.to_string()))?;

    if component.variants.len() == 1 {
        warn!(component_id, variant_id, "Refusing to remove the last variant");
        return Err(DsError::MinimumCardinality {
            entity: "variant",
            parent: format!("component '{}'", component.name),
        });
    }

    let removed = component.variants.remove(index);
    component.touch();
    info!(component_id, variant_id, "Variant removed");
    Ok(removed)
}

/// Deep-clone a variant (base style and all states) under a fresh id and a
/// name of the form "<Name> Copy", "<Name> Copy 2", ... The original is not
/// touched. Returns the new variant id.
pub fn duplicate_variant(store: &mut Store, component_id: &str, variant_id: &str) -> DsResult<String> {
    let component = store.get_component_mut(component_id)?;
    let source = component
        .variant(variant_id)
        .ok_or_else(|| DsError::VariantNotFound(variant_id.to_string()))?;

    let mut name = format!("{} Copy", source.name);
    let mut n = 2;
    while component.variant_by_name(&name).is_some() {
        name = format!("{} Copy {}", source.name, n);
        n += 1;
    }

    let mut copy = source.clone();
    copy.id = new_id();
    copy.name = name;
    for state in &mut copy.states {
        state.id = new_id();
    }

    let id = copy.id.clone();
    component.variants.push(copy);
    component.touch();

    info!(component_id, source = variant_id, variant_id = %id, "Variant duplicated");
    Ok(id)
}

/// Rename a variant.
pub fn rename_variant(
    store: &mut Store,
    component_id: &str,
    variant_id: &str,
    name: &str,
) -> DsResult<()> {
    let name = validate_name(name, "Variant")?;
    let component = store.get_component_mut(component_id)?;

    if component
        .variants
        .iter()
        .any(|v| v.id != variant_id && v.has_name(&name))
    {
        return Err(DsError::DuplicateName {
            name,
            scope: format!("component '{}'", component.name),
        });
    }

    let variant = component
        .variant_mut(variant_id)
        .ok_or_else(|| DsError::VariantNotFound(variant_id.to_string()))?;
    variant.name = name;
    component.touch();
    Ok(())
}

/// Append a state with no overrides: it renders exactly like the variant
/// base until explicitly edited. Returns the new state id.
pub fn add_state(
    store: &mut Store,
    component_id: &str,
    variant_id: &str,
    name: &str,
) -> DsResult<String> {
    let name = validate_name(name, "State")?;
    let component = store.get_component_mut(component_id)?;
    let variant = component
        .variant_mut(variant_id)
        .ok_or_else(|| DsError::VariantNotFound(variant_id.to_string()))?;

    if variant.state_by_name(&name).is_some() {
        return Err(DsError::DuplicateName {
            name,
            scope: format!("variant '{}'", variant.name),
        });
    }

    let id = new_id();
    variant.states.push(ComponentState::new(id.clone(), name.clone(), ""));
    component.touch();

    info!(component_id, variant_id, state_id = %id, name = %name, "State added");
    Ok(id)
}

/// Remove a state.
///
/// The last state of a variant is rejected with `MinimumCardinality`; the
/// "default" state (always the first) is rejected with `ProtectedState`.
pub fn remove_state(
    store: &mut Store,
    component_id: &str,
    variant_id: &str,
    state_id: &str,
) -> DsResult<ComponentState> {
    let component = store.get_component_mut(component_id)?;
    let variant = component
        .variant_mut(variant_id)
        .ok_or_else(|| DsError::VariantNotFound(variant_id.to_string()))?;
    let index = variant
        .states
        .iter()
        .position(|s| s.id == state_id)
        .ok_or_else(|| DsError::StateNotFound(state_id.to_string()))?;

    if variant.states.len() == 1 {
        warn!(component_id, variant_id, state_id, "Refusing to remove the last state");
        return Err(DsError::MinimumCardinality {
            entity: "state",
            parent: format!("variant '{}'", variant.name),
        });
    }
    if index == 0 || variant.states[index].is_default() {
        warn!(component_id, variant_id, state_id, "Refusing to remove the default state");
        return Err(DsError::ProtectedState(variant.states[index].name.clone()));
    }

    let removed = variant.states.remove(index);
    component.touch();
    info!(component_id, variant_id, state_id, "State removed");
    Ok(removed)
}

/// Rename a non-default state. The default state keeps its name and no
/// other state may take it.
pub fn rename_state(
    store: &mut Store,
    component_id: &str,
    variant_id: &str,
    state_id: &str,
    name: &str,
) -> DsResult<()> {
    let name = validate_name(name, "State")?;
    if is_default_name(&name) {
        return Err(DsError::invalid_name(format!(
            "'{}' is reserved for the first state",
            DEFAULT_STATE_NAME
        )));
    }

    let component = store.get_component_mut(component_id)?;
    let variant = component
        .variant_mut(variant_id)
        .ok_or_else(|| DsError::VariantNotFound(variant_id.to_string()))?;

    let current = variant
        .state(state_id)
        .ok_or_else(|| DsError::StateNotFound(state_id.to_string()))?;
    if current.is_default() {
        return Err(DsError::ProtectedState(current.name.clone()));
    }
    if variant.states.iter().any(|s| s.id != state_id && s.has_name(&name)) {
        return Err(DsError::DuplicateName {
            name,
            scope: format!("variant '{}'", variant.name),
        });
    }

    if let Some(state) = variant.state_mut(state_id) {
        state.name = name;
    }
    component.touch();
    Ok(())
}
