//! Tests for component definitions

use std::sync::Arc;

use pac_domain::{Args, Component, Definition, RefTarget, Scope};

struct Plain;
impl Component for Plain {}

fn plain(_args: Args) -> pac_domain::Result<Arc<dyn Component>> {
    Ok(Arc::new(Plain))
}

#[test]
fn test_default_definition_has_no_target() {
    let definition = Definition::default();
    assert!(definition.target().is_none());
    assert_eq!(definition.scope(), Scope::Singleton);
}

#[test]
fn test_bare_function_is_a_factory() {
    let definition = Definition::new(plain);
    let component = definition.target().unwrap().create(Args::new()).unwrap();
    assert!(component.downcast_arc::<Plain>().is_ok());
}

#[test]
fn test_refs_keep_declaration_order() {
    let definition = Definition::new(plain)
        .with_ref("second", "b")
        .with_ref("first", ["x", "y"]);

    let keys: Vec<_> = definition.refs().keys().cloned().collect();
    assert_eq!(keys, vec!["second", "first"]);
    assert_eq!(
        definition.refs()["first"],
        RefTarget::List(vec!["x".into(), "y".into()])
    );
    assert_eq!(definition.refs()["first"].ids(), ["x", "y"]);
    assert_eq!(definition.refs()["second"].ids(), ["b"]);
}

#[test]
fn test_scope_and_events() {
    let definition = Definition::new(plain)
        .with_scope(Scope::Transient)
        .listening_to("app.ping")
        .with_arg("limit", 10);

    assert!(!definition.scope().is_cached());
    assert_eq!(definition.events(), ["app.ping"]);
    assert_eq!(definition.args().i64("limit").unwrap(), 10);
}

#[test]
fn test_ref_target_deserializes_untagged() {
    let single: RefTarget = serde_json::from_str("\"store\"").unwrap();
    let list: RefTarget = serde_json::from_str("[\"a\", \"b\"]").unwrap();

    assert_eq!(single, RefTarget::Single("store".into()));
    assert_eq!(list, RefTarget::List(vec!["a".into(), "b".into()]));
}
