//! A self-referential record reached through every kind of container.

use std::collections::HashMap;

use formbind::{Form, from_values};
use formbind_testhelpers::form_values;

#[derive(Form, Debug, Default, PartialEq)]
struct Crazy {
    pub a: Option<Box<Crazy>>,
    pub b: Option<Box<Crazy>>,
    pub value: i64,
    pub slice: Vec<i64>,
    pub map: HashMap<String, Crazy>,
}

#[test]
fn deep_composition() {
    formbind_testhelpers::setup();

    let crazy: Crazy = from_values(&form_values! {
        "a[b][b][a][value]" => "1",
        "b[a][a][slice][]" => ["3", "1", "4"],
        "b[map][hello][a][value]" => "8",
        "a[value]" => "2",
        "a[slice][]" => ["9", "1", "1"],
        "value" => "42",
    })
    .unwrap();

    let a = crazy.a.as_deref().unwrap();
    let abb = a.b.as_deref().unwrap().b.as_deref().unwrap();
    assert_eq!(abb.a.as_deref().unwrap().value, 1);
    assert_eq!(a.value, 2);
    assert_eq!(crazy.value, 42);

    let hello = &crazy.b.as_deref().unwrap().map["hello"];
    assert_eq!(hello.a.as_deref().unwrap().value, 8);

    // siblings along the way are never allocated
    assert!(abb.b.is_none());
    assert!(a.b.as_deref().unwrap().a.is_none());
    assert!(a.a.is_none());

    assert!(crazy.slice.is_empty());
    assert!(crazy.map.is_empty());

    let bab = crazy.b.as_deref().unwrap().a.as_deref().unwrap().a.as_deref().unwrap();
    assert_eq!(bab.slice, [3, 1, 4]);
    assert_eq!(a.slice, [9, 1, 1]);
}

#[test]
fn errors_carry_the_whole_path() {
    formbind_testhelpers::setup();

    let err = from_values::<Crazy>(&form_values! { "a[b][map][k][nope]" => "1" }).unwrap_err();
    insta::assert_snapshot!(err, @"key `a[b][map][k][nope]`: unknown field `nope` in Crazy (full key `a[b][map][k][nope]`), expected one of: a, b, value, slice, map");

    let err = from_values::<Crazy>(&form_values! { "a[slice][]" => ["1", "x"] }).unwrap_err();
    assert_eq!(err.key(), Some("a[slice][1]"));
}
