//! Projection scenarios over a flat schema with one nested child.

use serde_json::{Value, json};
use sylect_engine::{Field, Projector, QueryParams, Schema, SelectionContext};

fn schema() -> Schema {
    let child = Schema::new()
        .field(Field::new("first"))
        .field(Field::new("second"))
        .field(Field::new("third"));
    Schema::new()
        .field(Field::new("first"))
        .field(Field::new("second"))
        .field(Field::new("third"))
        .field(Field::nested("child", child))
}

fn source() -> Value {
    json!({
        "first": 1,
        "second": 2,
        "third": 3,
        "child": {"first": 1, "second": 2, "third": 3},
    })
}

fn project_with(context: &SelectionContext) -> Value {
    let schema = schema();
    Projector::new(&schema)
        .project(&source(), context)
        .expect("projection succeeds")
        .into_value()
}

#[test]
fn unrestricted_context_projects_every_field() {
    let value = project_with(&SelectionContext::unrestricted());
    assert_eq!(
        value,
        json!({
            "first": 1,
            "second": 2,
            "third": 3,
            "child": {"first": 1, "second": 2, "third": 3},
        })
    );
}

#[test]
fn output_keys_follow_declaration_order() {
    let schema = schema();
    let projection = Projector::new(&schema)
        .project(&source(), &SelectionContext::unrestricted())
        .expect("projection succeeds");
    let keys: Vec<&str> = projection.keys().collect();
    assert_eq!(keys, vec!["first", "second", "third", "child"]);
}

#[test]
fn select_narrows_to_named_fields() {
    let context = SelectionContext::new(vec!["second"], "");
    assert_eq!(project_with(&context), json!({"second": 2}));
}

#[test]
fn select_accepts_comma_delimited_text() {
    let context = SelectionContext::new("second,third", "");
    assert_eq!(project_with(&context), json!({"second": 2, "third": 3}));
}

#[test]
fn exclude_removes_fields_and_whole_subtrees() {
    let context = SelectionContext::new("", vec!["second", "child"]);
    assert_eq!(project_with(&context), json!({"first": 1, "third": 3}));
}

#[test]
fn nested_select_filters_inside_the_child() {
    let context = SelectionContext::new(vec!["child.first", "child.second"], "");
    assert_eq!(
        project_with(&context),
        json!({"child": {"first": 1, "second": 2}})
    );
}

#[test]
fn nested_exclude_keeps_top_level_siblings() {
    let context = SelectionContext::new("", vec!["child.first", "child.second"]);
    assert_eq!(
        project_with(&context),
        json!({
            "first": 1,
            "second": 2,
            "third": 3,
            "child": {"third": 3},
        })
    );
}

#[test]
fn excluding_every_child_leaf_leaves_an_empty_object() {
    let context = SelectionContext::new("", "child.first,child.second,child.third");
    assert_eq!(
        project_with(&context),
        json!({"first": 1, "second": 2, "third": 3, "child": {}})
    );
}

#[test]
fn select_and_exclude_compose_with_exclude_winning() {
    let context = SelectionContext::new(vec!["first", "second"], vec!["second"]);
    assert_eq!(project_with(&context), json!({"first": 1}));
}

#[test]
fn query_params_drive_the_context() {
    let params = QueryParams::parse("select=first,child.third");
    let context = SelectionContext::from_query(&params);
    assert_eq!(
        project_with(&context),
        json!({"first": 1, "child": {"third": 3}})
    );
}

#[test]
fn skipped_fields_leave_no_metadata_but_stay_declared() {
    let schema = schema();
    let context = SelectionContext::new(vec!["second"], "");
    let projection = Projector::new(&schema)
        .project(&source(), &context)
        .expect("projection succeeds");

    let visited: Vec<&str> = projection.fields().iter().map(|meta| meta.name.as_str()).collect();
    assert_eq!(visited, vec!["second"]);

    // Declared fields are untouched by selection.
    assert_eq!(schema.fields().len(), 4);
    assert!(schema.field_named("third").is_some());
}
