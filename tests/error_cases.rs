mod common;

use common::{User, init_logger};

use json_projection::{ArrayProjection, HashProjection, Node, ProjectionError};

#[test]
fn unknown_field_aborts_the_serialization() {
    init_logger();

    let foo = User::new("Foo", 1);

    let mut g = HashProjection::new(&foo, &["Id"]);
    g.method("Salary");

    let result = g.serialize();

    assert!(matches!(
        result,
        Err(ProjectionError::MemberNotFound(token)) if token == "Salary"
    ));
}

#[test]
fn unknown_accessor_aborts_the_serialization() {
    init_logger();

    let foo = User::new("Foo", 1);

    let g = HashProjection::new(&foo, &["Salary()"]);

    // The reported token keeps the call marker the caller wrote.
    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::MemberNotFound(token)) if token == "Salary()"
    ));
}

#[test]
fn field_token_does_not_reach_accessors() {
    init_logger();

    let foo = User::new("Foo", 1);

    // `Upper` exists only as an accessor; without the marker it is a miss.
    let g = HashProjection::new(&foo, &["Upper"]);

    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::MemberNotFound(token)) if token == "Upper"
    ));
}

#[test]
fn scalar_member_under_an_array_spec_is_not_iterable() {
    init_logger();

    let foo = User::new("Foo", 1);

    let mut g = HashProjection::new(&foo, &[]);
    g.array("Name", &["City"]);

    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::NotIterable(token)) if token == "Name"
    ));
}

#[test]
fn scalar_member_under_a_hash_spec_is_not_an_object() {
    init_logger();

    let foo = User::new("Foo", 1);

    let mut g = HashProjection::new(&foo, &[]);
    g.hash("Name", &["City"]);

    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::NotAnObject(token)) if token == "Name"
    ));
}

#[test]
fn nested_member_in_value_position_is_not_a_value() {
    init_logger();

    let mut foo = User::new("Foo", 1);
    foo.supervisor = Some(Box::new(User::new("Boss", 2)));

    let mut g = HashProjection::new(&foo, &[]);
    g.method("Supervisor");

    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::NotAValue(token)) if token == "Supervisor"
    ));
}

#[test]
fn collection_member_in_value_position_is_not_a_value() {
    init_logger();

    let foo = User::new("Foo", 1);

    let mut g = HashProjection::new(&foo, &[]);
    g.alias("where", "Addresses");

    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::NotAValue(token)) if token == "Addresses"
    ));
}

#[test]
fn recursion_past_the_depth_limit_is_rejected() {
    init_logger();

    let mut bar = User::new("Bar", 2);
    bar.supervisor = Some(Box::new(User::new("Wadus", 3)));
    let mut foo = User::new("Foo", 1);
    foo.supervisor = Some(Box::new(bar));

    let mut g = HashProjection::new(&foo, &["Id"]);
    g.hash("Supervisor", &["Id"]).hash("Supervisor", &["Id"]);
    g.max_depth(1);

    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::DepthExceeded(limit)) if limit == 1
    ));
}

#[test]
fn recursion_within_the_depth_limit_succeeds() {
    init_logger();

    let mut bar = User::new("Bar", 2);
    bar.supervisor = Some(Box::new(User::new("Wadus", 3)));
    let mut foo = User::new("Foo", 1);
    foo.supervisor = Some(Box::new(bar));

    let mut g = HashProjection::new(&foo, &["Id"]);
    g.hash("Supervisor", &["Id"]).hash("Supervisor", &["Id"]);
    g.max_depth(2);

    assert_eq!(
        String::from_utf8(g.serialize().unwrap()).unwrap(),
        r#"{"id":1,"supervisor":{"id":2,"supervisor":{"id":3}}}"#
    );
}

#[test]
fn depth_limit_applies_to_array_elements() {
    init_logger();

    let mut foo = User::new("Foo", 1);
    foo.supervisor = Some(Box::new(User::new("Boss", 2)));

    let users = [foo];
    let mut g = ArrayProjection::new(&users, &["Id"]);
    g.hash("Supervisor", &["Id"]);
    g.max_depth(0);

    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::DepthExceeded(limit)) if limit == 0
    ));
}

#[test]
fn errors_inside_nested_specs_surface_to_the_caller() {
    init_logger();

    let mut foo = User::new("Foo", 1);
    foo.supervisor = Some(Box::new(User::new("Boss", 2)));

    let mut g = HashProjection::new(&foo, &["Id"]);
    g.hash("Supervisor", &["Badge"]);

    assert!(matches!(
        g.serialize(),
        Err(ProjectionError::MemberNotFound(token)) if token == "Badge"
    ));
}
