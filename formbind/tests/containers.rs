use std::collections::{BTreeMap, HashMap, VecDeque};
use std::sync::Arc;

use formbind::{DecodeErrorKind, Form, SyntaxErrorKind, decode_into, from_values};
use formbind_testhelpers::{IPanic, form_values};

#[derive(Form, Debug, Default, PartialEq)]
struct Sub {
    pub a: i32,
    pub b: i32,
}

#[derive(Form, Debug, Default, PartialEq)]
struct Containers {
    pub map: HashMap<String, i32>,
    pub sorted: BTreeMap<Arc<str>, Vec<u8>>,
    pub list: Vec<i32>,
    pub queue: VecDeque<String>,
    pub sub: Sub,
    pub maybe_sub: Option<Sub>,
    pub maybe_int: Option<i32>,
    pub boxed: Box<u16>,
    pub twice: Option<Option<i32>>,
    pub deep: Option<Box<Option<Box<i32>>>>,
    pub subs: HashMap<String, Sub>,
    pub maybe_map: Option<HashMap<String, bool>>,
    pub maybe_list: Option<Vec<String>>,
}

#[test]
fn maps_collect_entries() -> Result<(), IPanic> {
    formbind_testhelpers::setup();

    let decoded: Containers = from_values(&form_values! {
        "map[one]" => "1",
        "map[two]" => "2",
        "map[three]" => "3",
        "sorted[x][]" => ["1", "2"],
        "subs[first][b]" => "7",
        "subs[first][a]" => "6",
        "maybe_map[on]" => "on",
    })?;

    let expected: HashMap<String, i32> =
        [("one", 1), ("two", 2), ("three", 3)].map(|(k, v)| (k.to_string(), v)).into();
    assert_eq!(decoded.map, expected);
    assert_eq!(decoded.sorted[&Arc::<str>::from("x")], [1, 2]);
    assert_eq!(decoded.subs["first"], Sub { a: 6, b: 7 });
    assert!(decoded.maybe_map.unwrap()["on"]);
    Ok(())
}

#[test]
fn map_entries_are_updated_in_place() -> Result<(), IPanic> {
    formbind_testhelpers::setup();

    let mut target = Containers::default();
    target.subs.insert("k".into(), Sub { a: 1, b: 2 });
    decode_into(&form_values! { "subs[k][b]" => "20" }, &mut target)?;
    assert_eq!(target.subs["k"], Sub { a: 1, b: 20 });
    Ok(())
}

#[test]
fn map_errors() {
    formbind_testhelpers::setup();

    let mut target = Containers::default();

    let err = decode_into(&form_values! { "map[]" => "7" }, &mut target).unwrap_err();
    insta::assert_snapshot!(err, @"key `map`: empty map key in `[]`");
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Syntax {
            kind: SyntaxErrorKind::EmptyMapKey,
            ..
        }
    ));

    let err = decode_into(&form_values! { "map" => "llama" }, &mut target).unwrap_err();
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Syntax {
            kind: SyntaxErrorKind::MissingOpeningBracket,
            ..
        }
    ));

    let err = decode_into(&form_values! { "map[" => "llama" }, &mut target).unwrap_err();
    insta::assert_snapshot!(err, @"key `map`: missing `]` after `[`");

    let err = decode_into(&form_values! { "map[a]b" => "1" }, &mut target).unwrap_err();
    assert_eq!(err.code(), "form::nesting");
    assert_eq!(err.key(), Some("map[a]"));

    assert!(target.map.is_empty());
}

#[test]
fn lists_replace_their_content() {
    formbind_testhelpers::setup();

    let mut target = Containers {
        list: vec![1, 1, 1, 1, 1],
        ..Containers::default()
    };
    decode_into(
        &form_values! {
            "list[]" => ["3", "1", "4"],
            "queue[]" => ["a", "b"],
            "maybe_list[]" => ["x"],
        },
        &mut target,
    )
    .unwrap();

    assert_eq!(target.list, [3, 1, 4]);
    assert_eq!(target.queue, ["a", "b"]);
    assert_eq!(target.maybe_list.as_deref(), Some(&["x".to_string()][..]));
}

#[test]
fn list_errors() {
    formbind_testhelpers::setup();

    let mut target = Containers::default();

    for key in ["list", "list[llama]", "list[][]"] {
        let err = decode_into(&form_values! { key => "1" }, &mut target).unwrap_err();
        assert_eq!(err.code(), "form::nesting", "{key}");
        assert_eq!(err.key(), Some("list"));
    }

    let err = decode_into(&form_values! { "list[" => "1" }, &mut target).unwrap_err();
    assert_eq!(err.code(), "form::nesting");

    let err = decode_into(&form_values! { "list[]" => ["1", "two"] }, &mut target).unwrap_err();
    insta::assert_snapshot!(err, @r#"key `list[1]`: invalid value "two" for i32: invalid digit found in string"#);
}

#[test]
fn records_nest() {
    formbind_testhelpers::setup();

    let mut target = Containers::default();
    decode_into(&form_values! { "sub[a]" => "1" }, &mut target).unwrap();
    assert_eq!(target.sub, Sub { a: 1, b: 0 });

    decode_into(&form_values! { "sub[a]" => "4", "sub[b]" => "2" }, &mut target).unwrap();
    assert_eq!(target.sub, Sub { a: 4, b: 2 });
}

#[test]
fn record_errors() {
    formbind_testhelpers::setup();

    let mut target = Containers::default();

    let err = decode_into(&form_values! { "sub" => "llama" }, &mut target).unwrap_err();
    assert_eq!(err.code(), "form::syntax");

    let err = decode_into(&form_values! { "sub[" => "llama" }, &mut target).unwrap_err();
    assert_eq!(err.code(), "form::syntax");

    let err = decode_into(&form_values! { "sub[]" => "llama" }, &mut target).unwrap_err();
    assert_eq!(err.code(), "form::key");

    let err = decode_into(&form_values! { "sub[c][d]" => "llama" }, &mut target).unwrap_err();
    insta::assert_snapshot!(err, @"key `sub[c]`: unknown field `c` in Sub (full key `sub[c][d]`), expected one of: a, b");
    let DecodeErrorKind::Key { field, full_key, expected } = err.kind() else {
        panic!("expected a key error, got {err:?}");
    };
    assert_eq!(field, "c");
    assert_eq!(full_key, "sub[c][d]");
    assert_eq!(expected, &["a", "b"]);
}

#[test]
fn indirection_allocates() {
    formbind_testhelpers::setup();

    let decoded: Containers = from_values(&form_values! {
        "maybe_sub[b]" => "2",
        "maybe_int" => "5",
        "boxed" => "6",
        "twice" => "7",
        "deep" => "8",
    })
    .unwrap();

    assert_eq!(decoded.maybe_sub, Some(Sub { a: 0, b: 2 }));
    assert_eq!(decoded.maybe_int, Some(5));
    assert_eq!(*decoded.boxed, 6);
    assert_eq!(decoded.twice, Some(Some(7)));
    assert_eq!(decoded.deep, Some(Box::new(Some(Box::new(8)))));
}

#[test]
fn untouched_options_stay_empty() {
    formbind_testhelpers::setup();

    let decoded: Containers = from_values(&form_values! { "maybe_int" => "1" }).unwrap();
    assert_eq!(decoded.maybe_sub, None);
    assert_eq!(decoded.twice, None);
    assert_eq!(decoded.deep, None);
    assert_eq!(decoded.maybe_map, None);
}
