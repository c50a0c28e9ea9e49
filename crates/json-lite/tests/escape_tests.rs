//! String escaping on output and verbatim escape storage on input.
//!
//! The serializer's escape scheme is custom: five named escapes plus `\xHH`
//! for every other non-printable or non-ASCII byte. The parser does not
//! decode any escape, so a serialized string that needed escaping comes back
//! holding the escape pairs themselves.

use json_lite::format::escape_str;
use json_lite::{parse, serialize, Value};

#[test]
fn quote_backslash_newline_sequence() {
    let original = Value::from("\"\\\n");
    let text = serialize(&original);
    assert_eq!(text, r#""\"\\\n""#);

    // Reparsing keeps the escape pairs: six bytes, not the original three.
    let reparsed = parse(&text).unwrap();
    assert_eq!(reparsed.as_str().unwrap(), r#"\"\\\n"#);
    assert_eq!(reparsed.as_str().unwrap().len(), 6);
    assert_ne!(reparsed, original);
}

#[test]
fn tab_and_carriage_return() {
    assert_eq!(serialize(&Value::from("a\tb\rc")), r#""a\tb\rc""#);
}

#[test]
fn control_bytes_use_uppercase_hex() {
    assert_eq!(serialize(&Value::from("\u{0}\u{1f}")), r#""\x00\x1F""#);
    assert_eq!(serialize(&Value::from("\u{7f}")), r#""\x7F""#);
}

#[test]
fn non_ascii_is_escaped_per_byte() {
    assert_eq!(serialize(&Value::from("\u{e9}")), r#""\xC3\xA9""#);
    assert_eq!(escape_str("\u{4f60}"), r"\xE4\xBD\xA0");
}

#[test]
fn printable_ascii_boundaries() {
    assert_eq!(escape_str(" "), " ");
    assert_eq!(escape_str("~"), "~");
    assert_eq!(escape_str("'"), "'");
    assert_eq!(escape_str("/"), "/");
}

#[test]
fn parsed_escapes_stay_raw() {
    let v = parse(r#""John\t \"Smith""#).unwrap();
    assert_eq!(v.as_str().unwrap(), r#"John\t \"Smith"#);
}

#[test]
fn unicode_escape_is_not_decoded() {
    let v = parse(r#""\u00e9""#).unwrap();
    assert_eq!(v.as_str().unwrap(), r"\u00e9");
}

#[test]
fn raw_escape_pairs_are_escaped_again_on_output() {
    let v = parse(r#""a\nb""#).unwrap();
    assert_eq!(serialize(&v), r#""a\\nb""#);
}

#[test]
fn literal_control_bytes_in_input_are_kept() {
    let v = parse("\"tab\there\"").unwrap();
    assert_eq!(v.as_str().unwrap(), "tab\there");
    assert_eq!(serialize(&v), r#""tab\there""#);
}
