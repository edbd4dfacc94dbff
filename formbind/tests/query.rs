use std::collections::HashMap;

use formbind::{Decoder, Form, FormValues, ShapeCache, from_str};
use formbind_testhelpers::IPanic;

#[derive(Form, Debug, Default, PartialEq)]
struct Search {
    pub q: String,
    pub page: Option<u32>,
    pub tags: Vec<String>,
    pub filter: HashMap<String, String>,
}

#[test]
fn decodes_a_query_string() -> Result<(), IPanic> {
    formbind_testhelpers::setup();

    let search: Search =
        from_str("?q=hello+world&page=3&tags%5B%5D=a%26b&tags[]=c&filter[lang]=en&filter[sort]=")?;

    assert_eq!(search.q, "hello world");
    assert_eq!(search.page, Some(3));
    assert_eq!(search.tags, ["a&b", "c"]);
    assert_eq!(search.filter["lang"], "en");
    assert_eq!(search.filter["sort"], "");
    Ok(())
}

#[test]
fn empty_query_yields_the_zero_value() {
    formbind_testhelpers::setup();

    let search: Search = from_str("").unwrap();
    assert_eq!(search, Search::default());
}

#[test]
fn decode_errors_surface_through_from_str() {
    formbind_testhelpers::setup();

    let err = from_str::<Search>("page=-1").unwrap_err();
    assert_eq!(err.code(), "form::value");
    assert_eq!(err.key(), Some("page"));

    let err = from_str::<Search>("tags=a").unwrap_err();
    assert_eq!(err.code(), "form::nesting");
    assert!(err.to_string().ends_with(" cannot be nested into, got ``"), "{err}");
}

#[test]
fn values_built_by_hand() -> Result<(), IPanic> {
    formbind_testhelpers::setup();

    let mut values = FormValues::new();
    values.append("tags[]", "x");
    values.append("tags[]", "y");
    values.extend([("q", "rust")]);

    let cache = ShapeCache::new();
    let mut search = Search::default();
    Decoder::new(&cache).decode_into(&values, &mut search)?;

    assert_eq!(search.q, "rust");
    assert_eq!(search.tags, ["x", "y"]);
    assert_eq!(Decoder::new(&cache).cache().len(), 1);
    Ok(())
}
