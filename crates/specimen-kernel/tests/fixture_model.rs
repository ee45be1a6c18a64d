//! Default engine against the shared type model

use pretty_assertions::assert_eq;
use specimen_kernel::{Fixture, Request, Specimen};
use specimen_test_utils::{init_tracing, Model};

#[test]
fn widget_uses_modest_constructor_and_inherited_members() {
    init_tracing();
    let model = Model::new();
    let fixture = Fixture::new();

    let widget = fixture.create(&model.widget).unwrap();
    let instance = widget.as_object().unwrap();

    assert_eq!(instance.ty(), &model.widget);
    assert_eq!(instance.arguments().len(), 1);
    assert!(instance.argument("name").unwrap().as_text().unwrap().starts_with("name"));
    assert!(instance.property("id").unwrap().as_int().is_some());
    assert!(instance.property("label").is_some());
    assert!(instance.field("count").is_some());
}

#[test]
fn nested_constructor_arguments_are_resolved() {
    let model = Model::new();
    let fixture = Fixture::new();

    let assembly = fixture.create(&model.assembly).unwrap();
    let instance = assembly.as_object().unwrap();

    let nested = instance.argument("widget").unwrap().as_object().unwrap();
    assert_eq!(nested.ty(), &model.widget);
    assert!(instance.argument("count").unwrap().as_int().is_some());
}

#[test]
fn each_request_yields_a_new_instance() {
    let model = Model::new();
    let fixture = Fixture::new();

    let a = fixture.create(&model.widget).unwrap();
    let b = fixture.create(&model.widget).unwrap();
    assert!(!a.same_instance(&b));
}

#[test]
fn interface_requests_fail_without_customization() {
    let model = Model::new();
    let err = Fixture::new()
        .resolve(&Request::of_type(&model.comparable))
        .unwrap_err();
    assert!(err.is_no_specimen());
}

#[test]
fn model_assignability() {
    let model = Model::new();
    assert!(model.comparable.is_assignable_from(&model.widget));
    assert!(model.component.is_assignable_from(&model.widget));
    assert!(!model.widget.is_assignable_from(&model.gadget));
    assert_eq!(model.widget.base(), Some(&model.component));
    assert!(matches!(
        Fixture::new().create(&model.ints).unwrap(),
        Specimen::Array { .. }
    ));
}
