//! Widget Tests

use std::sync::Arc;

use pac::{Args, ComponentRepository, Error, ListenerRef, PartKind, Scope, WeakRepository, Widget};
use serde_json::json;

use super::support::{Captured, Recorder, TracedControl, captured, entries, new_log, traced_control};

fn widget() -> Widget {
    Widget::create("search", None).unwrap()
}

#[test]
fn test_widget_repository_is_named_after_widget() {
    let root = ComponentRepository::create("root", None).unwrap();
    let search = Widget::create("search", Some(&root)).unwrap();

    assert_eq!(search.id(), "search");
    assert_eq!(search.repository().id(), "searchRepository");
    assert_eq!(search.repository().parent().unwrap(), root);
}

#[test]
fn test_empty_widget_id_is_rejected() {
    assert!(matches!(
        Widget::create("", None),
        Err(Error::MissingArgument { .. })
    ));
}

#[test]
fn test_parts_remember_their_kind() {
    let search = widget();
    let log = new_log();
    search
        .define_components([("model", captured()), ("view", captured())])
        .unwrap()
        .define_controls([("box", traced_control(&log))])
        .unwrap();

    assert_eq!(search.component_ids(), vec!["model", "view"]);
    assert_eq!(search.control_ids(), vec!["box"]);
    assert_eq!(search.kind_of("box"), Some(PartKind::Control));
    assert_eq!(search.kind_of("model"), Some(PartKind::Component));
    assert_eq!(search.kind_of("missing"), None);
}

#[test]
fn test_get_component_rejects_other_kinds() {
    let search = widget();
    let log = new_log();
    search
        .define_components([("model", captured())])
        .unwrap()
        .define_controls([("box", traced_control(&log))])
        .unwrap();

    let err = search.get_component("box", &Args::new()).err().unwrap();
    assert!(matches!(err, Error::InvalidDefinition { ref id, .. } if id == "box"));

    let err = search.get_control("model").err().unwrap();
    assert!(matches!(err, Error::InvalidDefinition { ref id, .. } if id == "model"));

    assert!(matches!(
        search.get_control("missing"),
        Err(Error::InvalidDefinition { .. })
    ));
}

#[test]
fn test_get_component_passes_arguments() {
    let search = widget();
    search
        .define_components([("query", captured().with_scope(Scope::Transient))])
        .unwrap();

    let component = search
        .get_component("query", &Args::new().with("text", "rust"))
        .unwrap();
    let query = component.downcast_arc::<Captured>().ok().unwrap();

    assert_eq!(query.args.str("text").unwrap(), "rust");
    assert_eq!(query.args.str("id").unwrap(), "query");
}

#[test]
fn test_controls_receive_widget_repository() {
    let search = widget();
    search.define_controls([("box", captured())]).unwrap();

    let control = search.get_control_as::<Captured>("box").unwrap();
    let handle = control.args.component::<WeakRepository>("widget").unwrap();

    assert_eq!(handle.id(), "searchRepository");
    assert_eq!(&handle.upgrade().unwrap(), search.repository());
}

#[test]
fn test_components_do_not_receive_widget_repository() {
    let search = widget();
    search.define_components([("model", captured())]).unwrap();

    let component = search.get_component("model", &Args::new()).unwrap();
    let model = component.downcast_arc::<Captured>().ok().unwrap();

    assert!(!model.args.contains_key("widget"));
}

#[test]
fn test_initialize_runs_controls_once_in_order() {
    let search = widget();
    let log = new_log();
    search
        .define_controls([
            ("first", traced_control(&log)),
            ("second", traced_control(&log)),
        ])
        .unwrap()
        .define_components([("model", captured())])
        .unwrap();

    assert!(!search.is_initialized());
    search.initialize().unwrap();
    search.initialize().unwrap();

    assert!(search.is_initialized());
    assert_eq!(entries(&log), vec!["init:first", "init:second"]);

    let first = search.get_control_as::<TracedControl>("first").unwrap();
    assert_eq!(first.id, "first");
}

#[test]
fn test_events_delegate_to_widget_repository() {
    let root = ComponentRepository::create("root", None).unwrap();
    let search = Widget::create("search", Some(&root)).unwrap();
    let log = new_log();
    let local = ListenerRef::direct(Recorder::shared("local", &log));
    search.add_event_ref("search.box.query.change", local.clone()).unwrap();
    root.add_event_ref("search.box.query.change", Recorder::shared("root", &log))
        .unwrap();

    search
        .raise_event("search.box.query.change", &json!(1))
        .unwrap();
    search
        .remove_event_ref("search.box.query.change", &local)
        .unwrap();
    search
        .raise_event("search.box.query.change", &json!(2))
        .unwrap();

    assert_eq!(
        entries(&log),
        vec![
            "local:search.box.query.change:1",
            "root:search.box.query.change:1",
            "root:search.box.query.change:2",
        ]
    );
}

#[test]
fn test_widget_definition_without_parent() {
    let host = ComponentRepository::create("host", None).unwrap();
    host.add_definition(
        "settings",
        Widget::definition(|widget: &Widget| {
            widget.define_components([("prefs", captured())])?;
            Ok(())
        }),
    )
    .unwrap();

    let settings = host.get_as::<Widget>("settings").unwrap();

    assert_eq!(settings.id(), "settings");
    assert!(settings.repository().parent().is_none());
    assert_eq!(settings.component_ids(), vec!["prefs"]);
}

#[test]
fn test_widget_definition_propagates_configure_errors() {
    let host = ComponentRepository::create("host", None).unwrap();
    host.add_definition(
        "broken",
        Widget::definition(|widget: &Widget| {
            widget.define_components([("", captured())])?;
            Ok(())
        }),
    )
    .unwrap();

    assert!(matches!(
        host.get("broken"),
        Err(Error::MissingArgument { .. })
    ));
    assert!(host.resolving().is_empty());
}

#[test]
fn test_widget_is_a_component() {
    let host = ComponentRepository::create("host", None).unwrap();
    let log = new_log();
    let configure_log = Arc::clone(&log);
    host.add_definition(
        "nested",
        Widget::definition(move |widget: &Widget| {
            widget.define_controls([("inner", traced_control(&configure_log))])?;
            Ok(())
        }),
    )
    .unwrap();

    host.get("nested").unwrap().initialize().unwrap();

    assert_eq!(entries(&log), vec!["init:inner"]);
    assert!(host.get_as::<Widget>("nested").unwrap().is_initialized());
}
