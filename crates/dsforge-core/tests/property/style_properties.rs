use dsforge_core::persist;
use dsforge_core::style::{resolve_style, PropertyKind, Spacing, TextAlign};
use dsforge_core::{
    ComponentType, EditOutcome, Session, StyleOverrides, StyleProperty, StyleRecord, StyleValue,
};
use proptest::prelude::*;
use tempfile::TempDir;

fn arb_value(property: StyleProperty) -> BoxedStrategy<StyleValue> {
    match property.kind() {
        PropertyKind::Text => "[a-z0-9#]{1,8}".prop_map(StyleValue::Text).boxed(),
        PropertyKind::Number => (0u32..=1000)
            .prop_map(|n| StyleValue::Number(n as f64 / 10.0))
            .boxed(),
        PropertyKind::Flag => any::<bool>().prop_map(StyleValue::Flag).boxed(),
        PropertyKind::Spacing => ("[0-9]{1,2}px", "[0-9]{1,2}px")
            .prop_map(|(x, y)| StyleValue::Spacing(Spacing::new(x, y)))
            .boxed(),
        PropertyKind::Align => prop_oneof![
            Just(TextAlign::Left),
            Just(TextAlign::Center),
            Just(TextAlign::Right),
            Just(TextAlign::Justify),
        ]
        .prop_map(StyleValue::Align)
        .boxed(),
    }
}

fn arb_overrides(max: usize) -> impl Strategy<Value = StyleOverrides> {
    proptest::sample::subsequence(StyleProperty::ALL.to_vec(), 0..=max).prop_flat_map(|props| {
        props
            .into_iter()
            .map(|p| arb_value(p).prop_map(move |v| (p, v)))
            .collect::<Vec<_>>()
            .prop_map(|entries| {
                let mut overrides = StyleOverrides::new();
                for (p, v) in entries {
                    overrides.insert(p, v).unwrap();
                }
                overrides
            })
    })
}

/// A session holding one button, with Primary/hover selected.
fn button_session() -> (Session, String) {
    let mut session = Session::new();
    let id = session.create_component(ComponentType::Button, "CTA").unwrap();
    session.select_state(&id, "primary", "primary-hover").unwrap();
    (session, id)
}

#[derive(Debug, Clone)]
enum Op {
    Edit(usize, usize, StyleOverrides),
    AddVariant(String),
    DuplicateVariant(usize),
    RemoveVariant(usize),
    AddState(usize, String),
    RemoveState(usize, usize),
    ResetState(usize, usize),
    Undo,
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => (0usize..8, 0usize..8, arb_overrides(4)).prop_map(|(v, s, o)| Op::Edit(v, s, o)),
        1 => "[A-Z][a-z]{2,6}".prop_map(Op::AddVariant),
        1 => (0usize..8).prop_map(Op::DuplicateVariant),
        2 => (0usize..8).prop_map(Op::RemoveVariant),
        1 => (0usize..8, "[a-z]{3,8}").prop_map(|(v, n)| Op::AddState(v, n)),
        2 => (0usize..8, 0usize..8).prop_map(|(v, s)| Op::RemoveState(v, s)),
        1 => (0usize..8, 0usize..8).prop_map(|(v, s)| Op::ResetState(v, s)),
        1 => Just(Op::Undo),
    ]
}

/// Ids of the variant/state at (wrapped) positions of the first component.
fn pick(session: &Session, v: usize, s: usize) -> Option<(String, String, String)> {
    let component = session.store().components.first()?;
    let variant = &component.variants[v % component.variants.len()];
    let state = &variant.states[s % variant.states.len()];
    Some((component.id.clone(), variant.id.clone(), state.id.clone()))
}

fn run(session: &mut Session, op: Op) {
    let Some((cid, vid, _)) = pick(session, 0, 0) else { return };
    // Errors are expected for some ops (last variant, default state, ...).
    match op {
        Op::Edit(v, s, changes) => {
            if let Some((cid, vid, sid)) = pick(session, v, s) {
                session.select_state(&cid, &vid, &sid).unwrap();
                session.apply_style_edit(&changes);
            }
        }
        Op::AddVariant(name) => {
            let _ = session.add_variant(&cid, &name, Some(vid.as_str()));
        }
        Op::DuplicateVariant(v) => {
            if let Some((cid, vid, _)) = pick(session, v, 0) {
                let _ = session.duplicate_variant(&cid, &vid);
            }
        }
        Op::RemoveVariant(v) => {
            if let Some((cid, vid, _)) = pick(session, v, 0) {
                let _ = session.remove_variant(&cid, &vid);
            }
        }
        Op::AddState(v, name) => {
            if let Some((cid, vid, _)) = pick(session, v, 0) {
                let _ = session.add_state(&cid, &vid, &name);
            }
        }
        Op::RemoveState(v, s) => {
            if let Some((cid, vid, sid)) = pick(session, v, s) {
                let _ = session.remove_state(&cid, &vid, &sid);
            }
        }
        Op::ResetState(v, s) => {
            if let Some((cid, vid, sid)) = pick(session, v, s) {
                let _ = session.reset_state_overrides(&cid, &vid, &sid);
            }
        }
        Op::Undo => {
            session.undo();
        }
    }
}

proptest! {
    #[test]
    fn default_state_resolves_to_base(base_edit in arb_overrides(8)) {
        let (mut session, id) = button_session();
        session.select_state(&id, "primary", "primary-default").unwrap();
        session.apply_style_edit(&base_edit);

        let component = session.store().component(&id).unwrap();
        for variant in &component.variants {
            let default = variant.default_state().unwrap();
            prop_assert_eq!(resolve_style(variant, default), variant.styles.clone());
        }
    }

    #[test]
    fn overlay_takes_override_else_base(overrides in arb_overrides(10)) {
        let (session, id) = button_session();
        let mut variant = session.store().component(&id).unwrap().variants[0].clone();
        variant.states[1].styles = overrides.clone();

        let resolved = resolve_style(&variant, &variant.states[1]);
        for property in StyleProperty::ALL {
            match overrides.get(property) {
                Some(value) => prop_assert_eq!(&resolved.get(property), value),
                None => prop_assert_eq!(resolved.get(property), variant.styles.get(property)),
            }
        }
    }

    #[test]
    fn state_overrides_are_minimal(edit in arb_overrides(8)) {
        let (mut session, id) = button_session();
        let before = session.resolved_style();

        let outcome = session.apply_style_edit(&edit);
        prop_assert!(matches!(outcome, EditOutcome::StateOverride { .. }), "expected StateOverride outcome");

        let edited = before.overlay(&edit);
        let variant = &session.store().component(&id).unwrap().variants[0];
        let hover = variant.state("primary-hover").unwrap();
        for property in StyleProperty::ALL {
            let differs = edited.get(property) != variant.styles.get(property);
            prop_assert_eq!(hover.styles.contains(property), differs, "property {}", property);
        }
    }

    #[test]
    fn base_edit_cascades_to_non_overriding_states(
        hover in arb_overrides(6),
        base_edit in arb_overrides(6),
    ) {
        let (mut session, id) = button_session();
        session.apply_style_edit(&hover);

        let before: Vec<StyleRecord> = {
            let variant = &session.store().component(&id).unwrap().variants[0];
            variant.states.iter().map(|s| resolve_style(variant, s)).collect()
        };

        session.select_state(&id, "primary", "primary-default").unwrap();
        session.apply_style_edit(&base_edit);

        let variant = &session.store().component(&id).unwrap().variants[0];
        for (state, old) in variant.states.iter().zip(&before).skip(1) {
            let now = resolve_style(variant, state);
            for (property, _) in base_edit.iter() {
                if state.styles.contains(property) {
                    prop_assert_eq!(now.get(property), old.get(property));
                } else {
                    prop_assert_eq!(now.get(property), variant.styles.get(property));
                }
            }
        }
    }

    #[test]
    fn invariants_hold_after_any_sequence(ops in proptest::collection::vec(arb_op(), 1..30)) {
        let (mut session, _) = button_session();
        for op in ops {
            run(&mut session, op);

            prop_assert!(session.store().check_invariants().is_empty());
            prop_assert!(session.selection().is_valid(session.store()));
            for component in &session.store().components {
                for variant in &component.variants {
                    for state in variant.states.iter().filter(|s| s.is_default()) {
                        prop_assert!(state.styles.is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn numbers_accepted_only_when_finite(n in any::<f64>()) {
        let value = StyleValue::Number(n);
        prop_assert_eq!(value.check(StyleProperty::Opacity).is_ok(), n.is_finite());
        prop_assert_eq!(StyleOverrides::new().with(StyleProperty::FontWeight, value).is_ok(), n.is_finite());
        prop_assert_eq!(
            StyleValue::parse_literal(StyleProperty::Opacity, &n.to_string()).is_ok(),
            n.is_finite()
        );
    }

    #[test]
    fn save_then_load_after_any_sequence(ops in proptest::collection::vec(arb_op(), 1..20)) {
        let (mut session, _) = button_session();
        for op in ops {
            run(&mut session, op);
        }

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("session.json");
        persist::save(&path, &session).unwrap();
        let loaded = persist::load(&path, session.history().limit()).unwrap();

        prop_assert_eq!(loaded.store(), session.store());
        prop_assert_eq!(loaded.selection(), session.selection());
        prop_assert_eq!(loaded.history().undo_depth(), session.history().undo_depth());
    }
}
