use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use formbind::{DecodeError, DecodeErrorKind, Form, FormValues, from_values};
use formbind_testhelpers::form_values;

#[derive(Form, Debug, Default, PartialEq)]
#[form(default)]
struct Scalars {
    pub flag: bool,
    pub small: i8,
    pub int: i64,
    pub big: i128,
    pub size: usize,
    pub byte: u8,
    pub unsigned: u64,
    pub single: f32,
    pub double: f64,
    pub text: String,
    pub boxed: Box<str>,
    pub letter: char,
    pub ip: Option<IpAddr>,
    pub addr: Option<SocketAddr>,
    pub path: PathBuf,
}

fn decode(values: FormValues) -> Result<Scalars, DecodeError> {
    from_values(&values)
}

fn decode_one(key: &str, value: &str) -> Result<Scalars, DecodeError> {
    decode(form_values! { key => value })
}

#[test]
fn every_scalar_round_trips() {
    formbind_testhelpers::setup();

    let decoded = decode(form_values! {
        "flag" => "on",
        "small" => "-128",
        "int" => "-9001",
        "big" => "170141183460469231731687303715884105727",
        "size" => "42",
        "byte" => "255",
        "unsigned" => "18446744073709551615",
        "single" => "1.5",
        "double" => "-9.000001",
        "text" => "This is the world's best string",
        "boxed" => "llama",
        "letter" => "é",
        "ip" => "::1",
        "addr" => "127.0.0.1:8080",
        "path" => "/tmp/x",
    })
    .unwrap();

    assert_eq!(
        decoded,
        Scalars {
            flag: true,
            small: i8::MIN,
            int: -9001,
            big: i128::MAX,
            size: 42,
            byte: u8::MAX,
            unsigned: u64::MAX,
            single: 1.5,
            double: -9.000001,
            text: "This is the world's best string".to_string(),
            boxed: "llama".into(),
            letter: 'é',
            ip: Some(IpAddr::V6(std::net::Ipv6Addr::LOCALHOST)),
            addr: Some(SocketAddr::from((Ipv4Addr::LOCALHOST, 8080))),
            path: PathBuf::from("/tmp/x"),
        }
    );
}

#[test]
fn bool_literals() {
    formbind_testhelpers::setup();

    for (literal, expected) in [
        ("true", true),
        ("1", true),
        ("on", true),
        ("false", false),
        ("0", false),
        ("", false),
    ] {
        let mut target = Scalars {
            flag: !expected,
            ..Scalars::default()
        };
        formbind::decode_into(&form_values! { "flag" => literal }, &mut target).unwrap();
        assert_eq!(target.flag, expected, "{literal:?}");
    }

    for literal in ["llama", "TRUE", "yes", "off"] {
        let err = decode_one("flag", literal).unwrap_err();
        assert_eq!(err.code(), "form::value", "{literal:?}");
        assert!(std::error::Error::source(&err).is_none());
    }
}

#[test]
fn integer_errors() {
    formbind_testhelpers::setup();

    for (key, value) in [
        ("int", "llama"),
        ("int", "4.2"),
        ("size", "-42"),
        ("small", "128"),
        ("byte", "256"),
        ("unsigned", "18446744073709551616"),
    ] {
        let err = decode_one(key, value).unwrap_err();
        assert_eq!(err.code(), "form::value", "{key}={value}");
        assert_eq!(err.key(), Some(key));
        assert!(std::error::Error::source(&err).is_some(), "{key}={value}");
    }

    let err = decode_one("small", "128").unwrap_err();
    insta::assert_snapshot!(err, @r#"key `small`: invalid value "128" for i8: number out of range for target type"#);
}

#[test]
fn unsigned_literals_take_no_sign() {
    formbind_testhelpers::setup();

    for (key, value) in [("byte", "+5"), ("unsigned", "+0"), ("size", "-0")] {
        let err = decode_one(key, value).unwrap_err();
        assert_eq!(err.code(), "form::value", "{key}={value}");
        assert_eq!(err.key(), Some(key));
    }

    // signed targets still take an explicit plus
    assert_eq!(decode_one("int", "+5").unwrap().int, 5);
}

#[test]
fn float_range() {
    formbind_testhelpers::setup();

    let err = decode_one("single", "1e39").unwrap_err();
    insta::assert_snapshot!(err, @r#"key `single`: invalid value "1e39" for f32: number out of range for target type"#);

    let err = decode_one("double", "1e400").unwrap_err();
    assert_eq!(err.code(), "form::value");

    let decoded = decode(form_values! { "single" => "-inf", "double" => "NaN" }).unwrap();
    assert_eq!(decoded.single, f32::NEG_INFINITY);
    assert!(decoded.double.is_nan());
}

#[test]
fn single_precision_rounds_once() {
    formbind_testhelpers::setup();

    // just above the midpoint between 1.0 and the next f32; going through
    // f64 first would land exactly on the midpoint and round down to 1.0
    let decoded = decode_one("single", "1.00000005960464477539062500001").unwrap();
    assert_eq!(decoded.single, f32::from_bits(1.0f32.to_bits() + 1));

    let decoded = decode_one("single", "3.4028235e38").unwrap();
    assert_eq!(decoded.single, f32::MAX);
}

#[test]
fn text_decoders_report_their_cause() {
    formbind_testhelpers::setup();

    let err = decode_one("ip", "llama").unwrap_err();
    assert_eq!(err.code(), "form::value");
    assert_eq!(err.key(), Some("ip"));
    let DecodeErrorKind::Value { value, cause } = err.kind() else {
        panic!("expected a value error, got {err:?}");
    };
    assert_eq!(value, "llama");
    assert!(cause.is_some());

    let err = decode_one("letter", "ab").unwrap_err();
    assert_eq!(err.code(), "form::value");
}

#[test]
fn leaves_take_one_value_and_no_nesting() {
    formbind_testhelpers::setup();

    for field in ["flag", "int", "double", "text", "ip"] {
        let err = decode_one(&format!("{field}[]"), "1").unwrap_err();
        assert_eq!(err.code(), "form::nesting", "{field}");
        assert_eq!(err.key(), Some(field));

        let err = decode_one(&format!("{field}[nested]"), "1").unwrap_err();
        assert_eq!(err.code(), "form::nesting", "{field}");

        let err = decode(form_values! { field => ["1", "1"] }).unwrap_err();
        assert_eq!(err.code(), "form::singleton", "{field}");
    }

    let err = decode_one("text[a][b]", "x").unwrap_err();
    insta::assert_snapshot!(err, @"key `text`: String cannot be nested into, got `[a][b]`");

    let err = decode(form_values! { "text" => [] }).unwrap_err();
    insta::assert_snapshot!(err, @"key `text`: String takes exactly one value, got 0");
}

#[test]
fn option_scalars_stay_none_when_absent() {
    formbind_testhelpers::setup();

    let decoded = decode(form_values! { "ip" => "10.0.0.1" }).unwrap();
    assert_eq!(decoded.ip, Some(IpAddr::V4(Ipv4Addr::new(10, 0, 0, 1))));
    assert_eq!(decoded.addr, None);
}
