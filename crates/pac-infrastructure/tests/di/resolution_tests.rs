//! Resolution Tests
//!
//! Scope caching, argument merging, parent fallback and cycle detection.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pac_domain::{ArgValue, Args, Component, Definition, Error, Result, Scope};
use pac_infrastructure::config::DuplicatePolicy;
use pac_infrastructure::{ComponentRepository, RepositoryOptions};

use super::support::{Captured, Num, captured, counted, num};

fn root() -> ComponentRepository {
    ComponentRepository::create("root", None).unwrap()
}

// ============================================================================
// Scope
// ============================================================================

#[test]
fn test_singleton_returns_identical_instance() {
    let repository = root();
    let built = Arc::new(AtomicUsize::new(0));
    repository
        .add_definition("service", counted(Arc::clone(&built)))
        .unwrap();

    let first = repository.get("service").unwrap();
    let second = repository.get("service").unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(built.load(Ordering::SeqCst), 1);
}

#[test]
fn test_transient_returns_fresh_instances() {
    let repository = root();
    let built = Arc::new(AtomicUsize::new(0));
    repository
        .add_definition(
            "request",
            counted(Arc::clone(&built)).with_scope(Scope::Transient),
        )
        .unwrap();

    let first = repository.get("request").unwrap();
    let second = repository.get("request").unwrap();

    assert!(!Arc::ptr_eq(&first, &second));
    assert_eq!(built.load(Ordering::SeqCst), 2);
}

#[test]
fn test_singleton_ignores_overrides_once_cached() {
    let repository = root();
    repository.add_definition("captured", captured()).unwrap();

    let first = repository
        .get_as_with::<Captured>("captured", &Args::new().with("x", 1))
        .unwrap();
    let second = repository
        .get_as_with::<Captured>("captured", &Args::new().with("x", 2))
        .unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(second.args.i64("x").unwrap(), 1);
}

// ============================================================================
// Argument merging
// ============================================================================

#[test]
fn test_override_beats_ref_beats_fixed_arg() {
    let repository = root();
    repository
        .add_definition("other", num(2))
        .unwrap()
        .add_definition(
            "target",
            captured()
                .with_arg("x", 1)
                .with_ref("x", "other")
                .with_scope(Scope::Transient),
        )
        .unwrap();

    let overridden = repository
        .get_as_with::<Captured>("target", &Args::new().with("x", 3))
        .unwrap();
    assert_eq!(overridden.args.i64("x").unwrap(), 3);

    let referenced = repository.get_as::<Captured>("target").unwrap();
    assert_eq!(referenced.args.component::<Num>("x").unwrap().0, 2);
}

#[test]
fn test_id_is_always_merged() {
    let repository = root();
    repository
        .add_definition("captured", captured().with_arg("id", "ignored"))
        .unwrap();

    let created = repository
        .get_as_with::<Captured>("captured", &Args::new().with("id", "also-ignored"))
        .unwrap();
    assert_eq!(created.args.str("id").unwrap(), "captured");
}

#[test]
fn test_list_refs_preserve_order() {
    let repository = root();
    repository
        .define_definitions([
            ("x", num(10)),
            ("y", num(20)),
            ("holder", captured().with_ref("items", ["x", "y"])),
        ])
        .unwrap();

    let holder = repository.get_as::<Captured>("holder").unwrap();
    let items = holder.args.components::<Num>("items").unwrap();
    assert_eq!(items.iter().map(|n| n.0).collect::<Vec<_>>(), vec![10, 20]);

    let x = repository.get_as::<Num>("x").unwrap();
    assert!(Arc::ptr_eq(&items[0], &x));
}

#[test]
fn test_merged_keys_follow_fixed_ref_override_order() {
    let repository = root();
    repository
        .define_definitions([
            ("dep", num(1)),
            (
                "captured",
                captured().with_arg("fixed", true).with_ref("dep", "dep"),
            ),
        ])
        .unwrap();

    let created = repository
        .get_as_with::<Captured>("captured", &Args::new().with("extra", "value"))
        .unwrap();
    assert_eq!(
        created.args.keys().collect::<Vec<_>>(),
        vec!["fixed", "dep", "extra", "id"]
    );
}

#[test]
fn test_factory_errors_propagate() {
    let repository = root();
    repository
        .add_definition(
            "fragile",
            Definition::new(|args: Args| -> Result<Arc<dyn Component>> {
                let port = args.i64("port")?;
                Ok(Arc::new(Num(port)))
            }),
        )
        .unwrap();

    let missing = repository.get("fragile").err().unwrap();
    assert!(matches!(missing, Error::MissingArgument { ref name } if name == "port"));
    assert!(repository.resolving().is_empty());

    let built = repository
        .get_as_with::<Num>("fragile", &Args::new().with("port", 8080))
        .unwrap();
    assert_eq!(built.0, 8080);
}

// ============================================================================
// Parent fallback
// ============================================================================

#[test]
fn test_child_falls_back_to_parent_instance() {
    let parent = root();
    parent.add_definition("shared", num(7)).unwrap();
    let child = ComponentRepository::create("child", Some(&parent)).unwrap();

    let from_child = child.get("shared").unwrap();
    let from_parent = parent.get("shared").unwrap();

    assert!(Arc::ptr_eq(&from_child, &from_parent));
    assert!(!child.contains("shared"));
}

#[test]
fn test_fallback_walks_the_whole_chain() {
    let top = root();
    top.add_definition("config", num(1)).unwrap();
    let middle = ComponentRepository::create("middle", Some(&top)).unwrap();
    let leaf = ComponentRepository::create("leaf", Some(&middle)).unwrap();

    assert_eq!(leaf.get_as::<Num>("config").unwrap().0, 1);
}

#[test]
fn test_local_definition_shadows_parent() {
    let parent = root();
    parent.add_definition("value", num(1)).unwrap();
    let child = ComponentRepository::create("child", Some(&parent)).unwrap();
    child.add_definition("value", num(2)).unwrap();

    assert_eq!(child.get_as::<Num>("value").unwrap().0, 2);
    assert_eq!(parent.get_as::<Num>("value").unwrap().0, 1);
}

#[test]
fn test_missing_component_is_not_found() {
    let repository = root();
    let err = repository.get("missing").err().unwrap();

    assert!(matches!(err, Error::ComponentNotFound { ref id } if id == "missing"));
    assert!(repository.resolving().is_empty());
}

#[test]
fn test_missing_component_in_chain_is_not_found() {
    let parent = root();
    let child = ComponentRepository::create("child", Some(&parent)).unwrap();

    assert!(child.get("missing").err().unwrap().is_not_found());
}

#[test]
fn test_dropped_parent_counts_as_no_parent() {
    let child = {
        let parent = root();
        parent.add_definition("shared", num(1)).unwrap();
        ComponentRepository::create("child", Some(&parent)).unwrap()
    };

    assert!(child.parent().is_none());
    assert!(child.get("shared").err().unwrap().is_not_found());
}

// ============================================================================
// Cycle detection
// ============================================================================

#[test]
fn test_direct_cycle_is_reported_with_route() {
    let repository = root();
    repository
        .define_definitions([
            ("A", captured().with_ref("b", "B")),
            ("B", captured().with_ref("a", "A")),
        ])
        .unwrap();

    let err = repository.get("A").err().unwrap();
    match err {
        Error::RecursiveReference { id, route } => {
            assert_eq!(id, "A");
            assert_eq!(route, vec!["A", "B"]);
        }
        other => panic!("Expected RecursiveReference, got {other:?}"),
    }
    assert!(repository.resolving().is_empty());
}

#[test]
fn test_cycle_through_list_ref() {
    let repository = root();
    repository
        .define_definitions([
            ("menu", captured().with_ref("items", ["home", "settings"])),
            ("home", num(1)),
            ("settings", captured().with_ref("back", "menu")),
        ])
        .unwrap();

    let err = repository.get("menu").err().unwrap();
    assert_eq!(err.route().unwrap().to_vec(), vec!["menu", "settings"]);
}

#[test]
fn test_repository_recovers_after_cycle() {
    let repository = root();
    repository
        .define_definitions([
            ("A", captured().with_ref("b", "B")),
            ("B", captured().with_ref("a", "A")),
            ("C", num(3)),
        ])
        .unwrap();

    assert!(repository.get("A").is_err());
    assert!(repository.get("B").is_err());
    assert_eq!(repository.get_as::<Num>("C").unwrap().0, 3);
}

#[test]
fn test_self_reference_is_a_cycle() {
    let repository = root();
    repository
        .add_definition("loop", captured().with_ref("me", "loop"))
        .unwrap();

    assert!(matches!(
        repository.get("loop"),
        Err(Error::RecursiveReference { .. })
    ));
}

// ============================================================================
// Registration
// ============================================================================

#[test]
fn test_definition_without_target_is_invalid() {
    let repository = root();
    let err = repository
        .add_definition("broken", Definition::default().with_arg("x", 1))
        .err()
        .unwrap();

    assert!(matches!(err, Error::InvalidDefinition { ref id, .. } if id == "broken"));
    assert!(!repository.contains("broken"));
}

#[test]
fn test_empty_ids_are_missing_arguments() {
    assert!(matches!(
        ComponentRepository::create("", None),
        Err(Error::MissingArgument { .. })
    ));

    let repository = root();
    assert!(matches!(
        repository.add_definition("", num(1)),
        Err(Error::MissingArgument { .. })
    ));
    assert!(matches!(
        repository.get(""),
        Err(Error::MissingArgument { .. })
    ));
}

#[test]
fn test_overwrite_replaces_definition() {
    let repository = root();
    repository
        .add_definition("value", num(1))
        .unwrap()
        .add_definition("value", num(2))
        .unwrap();

    assert_eq!(repository.get_as::<Num>("value").unwrap().0, 2);
    assert_eq!(repository.definition_ids(), vec!["value"]);
}

#[test]
fn test_overwrite_keeps_cached_singleton() {
    let repository = root();
    repository.add_definition("value", num(1)).unwrap();
    let before = repository.get_as::<Num>("value").unwrap();

    repository.add_definition("value", num(2)).unwrap();
    let after = repository.get_as::<Num>("value").unwrap();

    assert!(Arc::ptr_eq(&before, &after));
    assert_eq!(after.0, 1);
}

#[test]
fn test_strict_mode_rejects_duplicates() {
    let repository =
        ComponentRepository::with_options("strict", None, RepositoryOptions::strict()).unwrap();
    repository.add_definition("value", num(1)).unwrap();

    let err = repository.add_definition("value", num(2)).err().unwrap();
    assert!(matches!(err, Error::DuplicateDefinition { ref id } if id == "value"));
    assert_eq!(repository.get_as::<Num>("value").unwrap().0, 1);
}

#[test]
fn test_children_inherit_options() {
    let parent =
        ComponentRepository::with_options("strict", None, RepositoryOptions::strict()).unwrap();
    let child = ComponentRepository::create("child", Some(&parent)).unwrap();

    assert_eq!(child.options().duplicate_policy, DuplicatePolicy::Reject);
}

#[test]
fn test_typed_get_reports_mismatch() {
    let repository = root();
    repository.add_definition("value", num(1)).unwrap();

    let err = repository.get_as::<Captured>("value").err().unwrap();
    assert!(matches!(err, Error::TypeMismatch { ref id, .. } if id == "value"));
}

#[test]
fn test_weak_repository_as_argument() {
    let repository = root();
    repository
        .add_definition(
            "owner",
            captured().with_arg("repository", ArgValue::component(repository.downgrade())),
        )
        .unwrap();

    let owner = repository.get_as::<Captured>("owner").unwrap();
    let handle = owner
        .args
        .component::<pac_infrastructure::WeakRepository>("repository")
        .unwrap();
    assert_eq!(handle.upgrade().unwrap(), repository);
    assert_eq!(handle.id(), "root");
}
