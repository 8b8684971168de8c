//! Component lifecycle: creation from the type catalog, deletion.

pub mod factory;
pub mod model;

pub use factory::create_default_variants;
pub use model::{
    ComponentCategory, ComponentState, ComponentType, ComponentVariant, DesignSystemComponent,
    DEFAULT_STATE_NAME,
};

use chrono::Utc;
use tracing::info;

use crate::error::{DsError, DsResult};
use crate::store::Store;
use crate::style::StyleRecord;

/// Trim a user supplied name, rejecting empty ones.
pub(crate) fn validate_name(name: &str, what: &str) -> DsResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(DsError::invalid_name(format!("{} name cannot be empty", what)));
    }
    Ok(trimmed.to_string())
}

/// Create a component of `component_type`, seeded with the type's starter
/// variants. Returns the new component id (`<type>-<unix millis>`).
pub fn create_component(
    store: &mut Store,
    component_type: ComponentType,
    name: &str,
) -> DsResult<String> {
    let name = validate_name(name, "Component")?;
    let now = Utc::now();

    let base_id = format!("{}-{}", component_type.as_str(), now.timestamp_millis());
    let mut id = base_id.clone();
    let mut n = 2;
    while store.component(&id).is_some() {
        id = format!("{}-{}", base_id, n);
        n += 1;
    }

    let component = DesignSystemComponent {
        id: id.clone(),
        component_type,
        name,
        description: format!("{} component", component_type.display_name()),
        category: component_type.category(),
        variants: create_default_variants(component_type),
        base_styles: StyleRecord::default(),
        created_at: now,
        updated_at: now,
    };

    info!(
        component_id = %id,
        component_type = component_type.as_str(),
        variants = component.variants.len(),
        "Component created"
    );
    store.components.push(component);
    Ok(id)
}

/// Remove a component from the store and hand it back.
pub fn delete_component(store: &mut Store, component_id: &str) -> DsResult<DesignSystemComponent> {
    let index = store
        .components
        .iter()
        .position(|c| c.id == component_id)
        .ok_or_else(|| DsError::ComponentNotFound(component_id.to_string()))?;

    let removed = store.components.remove(index);
    info!(component_id = %component_id, "Component deleted");
    Ok(removed)
}

/// Update a component's display name and description.
pub fn update_component_details(
    store: &mut Store,
    component_id: &str,
    name: &str,
    description: Option<&str>,
) -> DsResult<()> {
    let name = validate_name(name, "Component")?;
    let component = store.get_component_mut(component_id)?;
    component.name = name;
    if let Some(description) = description {
        component.description = description.trim().to_string();
    }
    component.touch();
    Ok(())
}

/// Components in a given category, in store order.
pub fn list_by_category(store: &Store, category: ComponentCategory) -> Vec<&DesignSystemComponent> {
    store
        .components
        .iter()
        .filter(|c| c.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_component_seeds_variants() {
        let mut store = Store::new();
        let id = create_component(&mut store, ComponentType::Button, "  CTA ").unwrap();
        let component = store.component(&id).unwrap();

        assert!(id.starts_with("button-"));
        assert_eq!(component.name, "CTA");
        assert_eq!(component.category, ComponentCategory::Actions);
        assert_eq!(component.variants.len(), 5);
        assert_eq!(component.created_at, component.updated_at);
    }

    #[test]
    fn test_create_component_rejects_blank_name() {
        let mut store = Store::new();
        let err = create_component(&mut store, ComponentType::Card, "   ").unwrap_err();
        assert!(matches!(err, DsError::InvalidName(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_ids_stay_unique_within_same_millisecond() {
        let mut store = Store::new();
        let ids: Vec<String> = (0..5)
            .map(|i| create_component(&mut store, ComponentType::Badge, &format!("B{}", i)).unwrap())
            .collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_delete_component() {
        let mut store = Store::new();
        let id = create_component(&mut store, ComponentType::Card, "Panel").unwrap();
        let removed = delete_component(&mut store, &id).unwrap();
        assert_eq!(removed.id, id);
        assert!(store.is_empty());

        let err = delete_component(&mut store, &id).unwrap_err();
        assert!(matches!(err, DsError::ComponentNotFound(_)));
    }

    #[test]
    fn test_list_by_category() {
        let mut store = Store::new();
        create_component(&mut store, ComponentType::Button, "A").unwrap();
        create_component(&mut store, ComponentType::Input, "B").unwrap();
        create_component(&mut store, ComponentType::Checkbox, "C").unwrap();
        assert_eq!(list_by_category(&store, ComponentCategory::Forms).len(), 2);
    }
}
