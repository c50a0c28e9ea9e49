use json_lite::{serialize, to_writer, Map, Value};

fn object(pairs: Vec<(&str, Value)>) -> Value {
    pairs.into_iter().collect()
}

// ============================================================================
// Scalars
// ============================================================================

#[test]
fn serialize_null() {
    assert_eq!(serialize(&Value::Null), "null");
}

#[test]
fn serialize_bools() {
    assert_eq!(serialize(&Value::Bool(true)), "true");
    assert_eq!(serialize(&Value::Bool(false)), "false");
}

#[test]
fn serialize_ints() {
    assert_eq!(serialize(&Value::Int(0)), "0");
    assert_eq!(serialize(&Value::Int(123)), "123");
    assert_eq!(serialize(&Value::Int(-5)), "-5");
    assert_eq!(serialize(&Value::Int(i32::MIN)), "-2147483648");
}

#[test]
fn serialize_floats() {
    assert_eq!(serialize(&Value::Float(95.7)), "95.7");
    assert_eq!(serialize(&Value::Float(-0.25)), "-0.25");
    assert_eq!(serialize(&Value::Float(1.0)), "1.0");
    assert_eq!(serialize(&Value::Float(1.0e10)), "10000000000.0");
}

#[test]
fn float_output_reparses_as_float() {
    let text = serialize(&Value::Float(7.0));
    assert!(json_lite::parse(&text).unwrap().is_float());
}

#[test]
fn serialize_plain_string() {
    assert_eq!(serialize(&Value::from("hello")), r#""hello""#);
}

// ============================================================================
// Containers
// ============================================================================

#[test]
fn serialize_empty_array() {
    assert_eq!(serialize(&Value::array()), "[]");
}

#[test]
fn serialize_empty_object() {
    assert_eq!(serialize(&Value::object()), "{}");
}

#[test]
fn serialize_mixed_array() {
    let v = Value::Array(vec![
        Value::Int(123),
        Value::from("vec"),
        Value::Float(0.5),
        Value::Null,
        Value::Bool(true),
    ]);
    assert_eq!(serialize(&v), r#"[123,"vec",0.5,null,true]"#);
}

#[test]
fn object_follows_insertion_order() {
    let v = object(vec![
        ("test1", Value::Int(1)),
        ("test3", Value::Float(0.75)),
        ("test2", Value::from("hello")),
    ]);
    assert_eq!(serialize(&v), r#"{"test1":1,"test3":0.75,"test2":"hello"}"#);
}

#[test]
fn overwritten_key_keeps_first_position() {
    let mut map = Map::new();
    map.insert("a", Value::Int(1));
    map.insert("b", Value::Int(2));
    map.insert("a", Value::Int(3));
    assert_eq!(serialize(&Value::Object(map)), r#"{"a":3,"b":2}"#);
}

#[test]
fn deeply_nested_structure() {
    let inner = object(vec![("k", Value::from("v"))]);
    let v = object(vec![(
        "outer",
        Value::Array(vec![Value::Array(vec![inner]), Value::array()]),
    )]);
    assert_eq!(serialize(&v), r#"{"outer":[[{"k":"v"}],[]]}"#);
}

// ============================================================================
// Sinks
// ============================================================================

#[test]
fn display_is_canonical() {
    let v = object(vec![("n", Value::Null)]);
    assert_eq!(format!("{v}"), r#"{"n":null}"#);
}

#[test]
fn io_writer_receives_same_bytes() {
    let v = object(vec![("list", Value::Array(vec![Value::Int(1)]))]);
    let mut out = Vec::new();
    to_writer(&v, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), serialize(&v));
}

#[test]
fn fmt_writer_receives_same_text() {
    let v = Value::Array(vec![Value::from("a\nb")]);
    let mut out = String::from("prefix:");
    json_lite::write_value(&v, &mut out).unwrap();
    assert_eq!(out, r#"prefix:["a\nb"]"#);
}
