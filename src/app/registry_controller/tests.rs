use super::*;
use crate::core::InMemoryScene;

fn elements(ids: &[&str]) -> Vec<Element> {
    ids.iter().copied().map(Element::new).collect()
}

fn ids(selection: &[Element]) -> Vec<&str> {
    selection.iter().map(Element::as_str).collect()
}

#[test]
fn capture_without_label_uses_range_nickname() {
    let mut registry = SelectionRegistry::new();

    let captured = RegistryController::new(&mut registry)
        .capture("", elements(&["a", "b", "c"]))
        .expect("Capture sollte klappen");

    assert_eq!(captured.nickname, "a : c");
    assert_eq!(captured.delta, Some(ListDelta::Append("a : c".into())));
    assert_eq!(registry.get("a : c").unwrap().len(), 3);
}

#[test]
fn capture_with_label_appends_range() {
    let mut registry = SelectionRegistry::new();

    let captured = RegistryController::new(&mut registry)
        .capture("Foo", elements(&["a", "b", "c"]))
        .unwrap();

    assert_eq!(captured.nickname, "Foo [a : c]");
}

#[test]
fn capture_uses_configured_separator() {
    let mut registry = SelectionRegistry::new();

    let captured = RegistryController::new(&mut registry)
        .with_separator(" - ")
        .capture("", elements(&["a", "b"]))
        .unwrap();

    assert_eq!(captured.nickname, "a - b");
}

#[test]
fn capture_of_empty_selection_is_rejected_without_mutation() {
    let mut registry = SelectionRegistry::new();

    let result = RegistryController::new(&mut registry).capture("Foo", Vec::new());

    assert_eq!(result, Err(RegistryError::EmptySelection));
    assert!(registry.is_empty());
}

#[test]
fn colliding_capture_overwrites_in_place_without_delta() {
    let mut registry = SelectionRegistry::new();
    let mut controller = RegistryController::new(&mut registry);
    controller.capture("Foo", elements(&["a", "c"])).unwrap();
    controller.capture("", elements(&["x", "y"])).unwrap();

    let captured = controller
        .capture("Foo", elements(&["a", "b", "c"]))
        .unwrap();

    assert_eq!(captured.nickname, "Foo [a : c]");
    assert_eq!(captured.delta, None);
    let keys: Vec<&str> = registry.keys_in_order().collect();
    assert_eq!(keys, vec!["Foo [a : c]", "x : y"]);
    assert_eq!(registry.get("Foo [a : c]").unwrap().len(), 3);
}

#[test]
fn discard_returns_prior_registry_position() {
    let mut registry = SelectionRegistry::new();
    let mut controller = RegistryController::new(&mut registry);
    for label in ["one", "two", "three"] {
        controller.capture(label, elements(&["a"])).unwrap();
    }

    let delta = controller.discard(Some("two [a : a]")).unwrap();

    assert_eq!(delta, ListDelta::RemoveAt(1));
    assert_eq!(registry.len(), 2);
}

#[test]
fn discard_without_selection_fails_with_no_selection() {
    let mut registry = SelectionRegistry::new();
    let mut controller = RegistryController::new(&mut registry);
    controller.capture("", elements(&["a"])).unwrap();

    let result = controller.discard(None);

    assert_eq!(result, Err(RegistryError::NoSelection));
    assert_eq!(registry.len(), 1);
}

#[test]
fn discard_of_unknown_nickname_is_not_found() {
    let mut registry = SelectionRegistry::new();

    let result = RegistryController::new(&mut registry).discard(Some("ghost"));

    assert_eq!(result, Err(RegistryError::not_found("ghost")));
}

#[test]
fn reapply_replace_sets_scene_to_snapshot_order() {
    let mut registry = SelectionRegistry::new();
    let mut scene = InMemoryScene::default();
    scene.set_selection(["q"]);

    let mut controller = RegistryController::new(&mut registry);
    let nickname = controller
        .capture("", elements(&["c", "a", "b"]))
        .unwrap()
        .nickname;
    controller
        .reapply(Some(&nickname), ReapplyMode::Replace, &mut scene)
        .unwrap();

    assert_eq!(ids(scene.selection()), vec!["c", "a", "b"]);
}

#[test]
fn reapply_without_selection_leaves_scene_untouched() {
    let mut registry = SelectionRegistry::new();
    let mut scene = InMemoryScene::default();
    scene.set_selection(["q"]);

    let result =
        RegistryController::new(&mut registry).reapply(None, ReapplyMode::Replace, &mut scene);

    assert_eq!(result, Err(RegistryError::NoSelection));
    assert_eq!(ids(scene.selection()), vec!["q"]);
}

#[test]
fn reapply_of_unknown_nickname_is_not_found() {
    let mut registry = SelectionRegistry::new();
    let mut scene = InMemoryScene::default();

    let result =
        RegistryController::new(&mut registry).reapply(Some("ghost"), ReapplyMode::Add, &mut scene);

    assert!(matches!(result, Err(RegistryError::NotFound { .. })));
}

#[test]
fn dispatch_routes_tagged_actions() {
    let mut registry = SelectionRegistry::new();
    let mut scene = InMemoryScene::default();
    scene.set_selection(["a", "b"]);
    let mut controller = RegistryController::new(&mut registry);

    let appended = controller
        .dispatch(
            SelectionAction::Capture {
                label: String::new(),
            },
            None,
            &mut scene,
        )
        .unwrap();
    assert_eq!(appended, Some(ListDelta::Append("a : b".into())));

    scene.clear_selection();
    let reapplied = controller
        .dispatch(
            SelectionAction::Reapply {
                mode: ReapplyMode::Add,
            },
            Some("a : b"),
            &mut scene,
        )
        .unwrap();
    assert_eq!(reapplied, None);
    assert_eq!(ids(scene.selection()), vec!["a", "b"]);

    let removed = controller
        .dispatch(SelectionAction::Discard, Some("a : b"), &mut scene)
        .unwrap();
    assert_eq!(removed, Some(ListDelta::RemoveAt(0)));
    assert!(registry.is_empty());
}
