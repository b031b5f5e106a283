use super::*;
use crate::interface::TypeResolver;
use crate::object::TypeTest;
use crate::registry::Schema;
use crate::types::Identifier;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

fn named() -> InterfaceType {
    InterfaceType::new("named", "Named")
}

fn has_field(field: &str) -> TypeTest {
    TypeTest::HasField(field.to_string())
}

fn schema_with(interface: InterfaceType, objects: Vec<ObjectType>) -> Schema {
    let mut types = vec![SchemaType::Interface(interface)];
    types.extend(objects.into_iter().map(SchemaType::Object));
    Schema::from_types(types)
}

fn resolve_name(schema: &Schema, interface: &Identifier, value: Value) -> Option<String> {
    let interface = schema.interface(interface).unwrap();
    let ctx = ExecutionContext::new(schema);
    resolve(interface, &value, &ctx)
        .unwrap()
        .map(|object| object.name.clone())
}

#[test]
fn test_type_tests_pick_the_matching_implementor() {
    let schema = schema_with(
        named(),
        vec![
            ObjectType::new("person", "Person")
                .implementing("named")
                .with_type_test(has_field("age")),
            ObjectType::new("business", "Business")
                .implementing("named")
                .with_type_test(has_field("employee_count")),
        ],
    );

    assert_eq!(
        resolve_name(&schema, &"named".into(), json!({"name": "Ann", "age": 3})),
        Some("Person".to_string())
    );
    assert_eq!(
        resolve_name(&schema, &"named".into(), json!({"name": "Acme", "employee_count": 9})),
        Some("Business".to_string())
    );
}

#[test]
fn test_first_matching_implementor_wins() {
    let schema = schema_with(
        named(),
        vec![
            ObjectType::new("person", "Person")
                .implementing("named")
                .with_type_test(has_field("name")),
            ObjectType::new("business", "Business")
                .implementing("named")
                .with_type_test(has_field("name")),
        ],
    );

    for _ in 0..10 {
        assert_eq!(
            resolve_name(&schema, &"named".into(), json!({"name": "x"})),
            Some("Person".to_string())
        );
    }
}

#[test]
fn test_implementor_without_type_test_is_skipped() {
    let schema = schema_with(
        named(),
        vec![
            ObjectType::new("business", "Business").implementing("named"),
            ObjectType::new("person", "Person")
                .implementing("named")
                .with_type_test(has_field("name")),
        ],
    );

    assert_eq!(
        resolve_name(&schema, &"named".into(), json!({"name": "x"})),
        Some("Person".to_string())
    );
}

#[test]
fn test_no_matching_implementor_is_unknown() {
    let schema = schema_with(
        named(),
        vec![
            ObjectType::new("person", "Person")
                .implementing("named")
                .with_type_test(has_field("age")),
        ],
    );

    assert_eq!(resolve_name(&schema, &"named".into(), json!({"name": "x"})), None);
}

#[test]
fn test_only_declared_implementors_are_considered() {
    let schema = schema_with(
        named(),
        vec![ObjectType::new("rock", "Rock").with_type_test(has_field("name"))],
    );

    assert_eq!(resolve_name(&schema, &"named".into(), json!({"name": "x"})), None);
}

#[test]
fn test_custom_resolver_result_is_looked_up() {
    let interface = named().with_resolver(TypeResolver::custom(|value, _| {
        if value.get("age").is_some() {
            Resolution::Type("person".into())
        } else {
            Resolution::NoMatch
        }
    }));
    let schema = schema_with(
        interface,
        vec![
            ObjectType::new("business", "Business")
                .implementing("named")
                .with_type_test(has_field("age")),
            ObjectType::new("person", "Person").implementing("named"),
        ],
    );

    assert_eq!(
        resolve_name(&schema, &"named".into(), json!({"age": 1})),
        Some("Person".to_string())
    );
}

#[test]
fn test_custom_resolver_no_match_ignores_type_tests() {
    let interface = named().with_resolver(TypeResolver::custom(|_, _| Resolution::NoMatch));
    let schema = schema_with(
        interface,
        vec![
            ObjectType::new("person", "Person")
                .implementing("named")
                .with_type_test(TypeTest::custom(|_| true)),
        ],
    );

    assert_eq!(resolve_name(&schema, &"named".into(), json!({"name": "x"})), None);
}

#[test]
fn test_custom_resolver_receives_context() {
    let interface = named().with_resolver(TypeResolver::custom(|_, ctx| {
        match ctx.schema.lookup_type(&"person".into()) {
            Some(_) if ctx.path == ["search".to_string(), "0".to_string()] => {
                Resolution::Type("person".into())
            }
            _ => Resolution::NoMatch,
        }
    }));
    let schema = schema_with(
        interface,
        vec![ObjectType::new("person", "Person").implementing("named")],
    );
    let interface = schema.interface(&"named".into()).unwrap();
    let path = vec!["search".to_string(), "0".to_string()];

    let ctx = ExecutionContext::new(&schema).at(&path);
    let resolved = resolve(interface, &json!({}), &ctx).unwrap();
    assert_eq!(resolved.map(|o| o.name.as_str()), Some("Person"));

    let ctx = ExecutionContext::new(&schema);
    assert!(resolve(interface, &json!({}), &ctx).unwrap().is_none());
}

#[test]
fn test_resolution_is_not_cached() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let interface = named().with_resolver(TypeResolver::custom(move |_, _| {
        counter.fetch_add(1, Ordering::SeqCst);
        Resolution::Type("person".into())
    }));
    let schema = schema_with(
        interface,
        vec![ObjectType::new("person", "Person").implementing("named")],
    );

    for _ in 0..3 {
        resolve_name(&schema, &"named".into(), json!({}));
    }
    assert_eq!(calls.load(Ordering::SeqCst), 3);
}

#[test]
fn test_by_field_resolver() {
    let schema = schema_with(
        named().with_resolver(TypeResolver::by_field("__typename")),
        vec![
            ObjectType::new("person", "Person").implementing("named"),
            ObjectType::new("business", "Business").implementing("named"),
        ],
    );

    assert_eq!(
        resolve_name(&schema, &"named".into(), json!({"__typename": "business"})),
        Some("Business".to_string())
    );
    assert_eq!(resolve_name(&schema, &"named".into(), json!({"name": "x"})), None);
    assert_eq!(
        resolve_name(&schema, &"named".into(), json!({"__typename": 7})),
        None
    );
}

#[test]
fn test_resolver_returning_unknown_type_is_an_error() {
    let schema = schema_with(
        named().with_resolver(TypeResolver::custom(|_, _| Resolution::Type("ghost".into()))),
        vec![],
    );
    let interface = schema.interface(&"named".into()).unwrap();
    let ctx = ExecutionContext::new(&schema);

    let err = resolve(interface, &json!({}), &ctx).unwrap_err();
    assert_eq!(
        err,
        ResolveError::UnknownType {
            interface: "Named".to_string(),
            identifier: "ghost".into(),
        }
    );
}

#[test]
fn test_resolver_returning_interface_is_an_error() {
    let schema = schema_with(
        named().with_resolver(TypeResolver::custom(|_, _| Resolution::Type("named".into()))),
        vec![],
    );
    let interface = schema.interface(&"named".into()).unwrap();
    let ctx = ExecutionContext::new(&schema);

    let err = resolve(interface, &json!({}), &ctx).unwrap_err();
    assert!(matches!(err, ResolveError::NotAnObject { .. }));
    assert!(err.to_string().contains("not an object type"));
}

#[test]
fn test_concurrent_resolution_shares_schema() {
    let schema = Arc::new(schema_with(
        named(),
        vec![
            ObjectType::new("person", "Person")
                .implementing("named")
                .with_type_test(has_field("age")),
            ObjectType::new("business", "Business")
                .implementing("named")
                .with_type_test(has_field("employee_count")),
        ],
    ));

    std::thread::scope(|scope| {
        for i in 0..8 {
            let schema = schema.clone();
            scope.spawn(move || {
                let value = if i % 2 == 0 {
                    json!({"age": i})
                } else {
                    json!({"employee_count": i})
                };
                let expected = if i % 2 == 0 { "Person" } else { "Business" };
                assert_eq!(
                    resolve_name(&schema, &"named".into(), value),
                    Some(expected.to_string())
                );
            });
        }
    });
}
