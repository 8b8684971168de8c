//! Resolve user-typed references (id or name) to ids.
//!
//! An omitted reference falls back to the current selection.

use anyhow::{anyhow, bail, Result};

use dsforge_core::{DsError, Session};

fn selected<'a>(value: Option<&'a String>, what: &str) -> Result<&'a str> {
    value
        .map(String::as_str)
        .ok_or_else(|| anyhow!("No {} selected. Pass one explicitly or run 'dsforge select'.", what))
}

/// Component id for `key` (id, or case-insensitive name).
pub fn component_id(session: &Session, key: Option<&str>) -> Result<String> {
    let Some(key) = key else {
        return Ok(selected(session.selection().component_id.as_ref(), "component")?.to_string());
    };

    let store = session.store();
    if let Some(component) = store.component(key) {
        return Ok(component.id.clone());
    }

    let matches: Vec<_> = store
        .components
        .iter()
        .filter(|c| c.name.eq_ignore_ascii_case(key.trim()))
        .collect();
    match matches.as_slice() {
        [] => Err(DsError::ComponentNotFound(key.to_string()).into()),
        [one] => Ok(one.id.clone()),
        _ => bail!(
            "'{}' matches {} components, use the id instead",
            key,
            matches.len()
        ),
    }
}

/// Variant id for `key` within a component. Without `key`, the selected
/// variant is used if it belongs to that component.
pub fn variant_id(session: &Session, component_id: &str, key: Option<&str>) -> Result<String> {
    let component = session.store().get_component(component_id)?;

    let Some(key) = key else {
        let selection = session.selection();
        if selection.component_id.as_deref() != Some(component_id) {
            bail!("No variant selected in '{}'. Pass one explicitly.", component.name);
        }
        return Ok(selected(selection.variant_id.as_ref(), "variant")?.to_string());
    };

    component
        .variant(key)
        .or_else(|| component.variant_by_name(key))
        .map(|v| v.id.clone())
        .ok_or_else(|| DsError::VariantNotFound(key.to_string()).into())
}

/// State id for `key` within a variant. Without `key`, the selected state
/// is used if it belongs to that variant of that component. Variant ids
/// repeat across components, so both ids are compared.
pub fn state_id(
    session: &Session,
    component_id: &str,
    variant_id: &str,
    key: Option<&str>,
) -> Result<String> {
    let (_, variant) = session.store().get_variant(component_id, variant_id)?;

    let Some(key) = key else {
        let selection = session.selection();
        if selection.component_id.as_deref() != Some(component_id)
            || selection.variant_id.as_deref() != Some(variant_id)
        {
            bail!("No state selected in '{}'. Pass one explicitly.", variant.name);
        }
        return Ok(selected(selection.state_id.as_ref(), "state")?.to_string());
    };

    variant
        .state(key)
        .or_else(|| variant.state_by_name(key))
        .map(|s| s.id.clone())
        .ok_or_else(|| DsError::StateNotFound(key.to_string()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsforge_core::ComponentType;

    fn session() -> (Session, String) {
        let mut session = Session::new();
        let id = session.create_component(ComponentType::Button, "CTA").unwrap();
        (session, id)
    }

    #[test]
    fn test_component_by_name_or_id() {
        let (session, id) = session();
        assert_eq!(component_id(&session, Some("cta")).unwrap(), id);
        assert_eq!(component_id(&session, Some(&id)).unwrap(), id);
        assert_eq!(component_id(&session, None).unwrap(), id);
        assert!(component_id(&session, Some("nope")).is_err());
    }

    #[test]
    fn test_variant_and_state_by_name() {
        let (session, id) = session();
        assert_eq!(variant_id(&session, &id, Some("Ghost")).unwrap(), "ghost");
        assert_eq!(variant_id(&session, &id, None).unwrap(), "primary");
        assert_eq!(
            state_id(&session, &id, "ghost", Some("HOVER")).unwrap(),
            "ghost-hover"
        );
        assert!(state_id(&session, &id, "ghost", None).is_err());
    }

    #[test]
    fn test_selected_state_only_applies_to_its_component() {
        let mut session = Session::new();
        let a = session.create_component(ComponentType::Button, "A").unwrap();
        let b = session.create_component(ComponentType::Button, "B").unwrap();
        session.select_state(&a, "primary", "primary-hover").unwrap();

        assert_eq!(state_id(&session, &a, "primary", None).unwrap(), "primary-hover");
        assert!(state_id(&session, &b, "primary", None).is_err());
        assert_eq!(
            state_id(&session, &b, "primary", Some("hover")).unwrap(),
            "primary-hover"
        );
    }

    #[test]
    fn test_nothing_selected() {
        let session = Session::new();
        assert!(component_id(&session, None).is_err());
    }
}
