use fail_chain::{FieldValue, Fields};

#[test]
fn insert_keeps_order_and_replaces_in_place() {
    let mut fields = Fields::new();
    assert_eq!(fields.insert("a", 1), None);
    assert_eq!(fields.insert("b", "two"), None);
    assert_eq!(fields.insert("a", 3), Some(FieldValue::Int(1)));

    let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["a", "b"]);
    assert_eq!(fields.get("a"), Some(&FieldValue::Int(3)));
}

#[test]
fn lookups_on_empty_fields() {
    let fields = Fields::default();

    assert!(fields.is_empty());
    assert!(!fields.contains_key("missing"));
    assert_eq!(fields.get("missing"), None);
    assert_eq!(fields.to_string(), "");
}

#[test]
fn values_convert_from_primitives() {
    assert_eq!(FieldValue::from(true), FieldValue::Bool(true));
    assert_eq!(FieldValue::from(-3i32), FieldValue::Int(-3));
    assert_eq!(FieldValue::from(3usize), FieldValue::UInt(3));
    assert_eq!(FieldValue::from(1.5f32), FieldValue::Float(1.5));
    assert_eq!(FieldValue::from(String::from("s")), FieldValue::Str("s".into()));
}

#[test]
fn display_joins_pairs() {
    let fields: Fields = [("user", FieldValue::from("kim")), ("age", FieldValue::from(30u8))]
        .into_iter()
        .collect();

    assert_eq!(fields.to_string(), "user=kim age=30");
    assert_eq!(fields.len(), 2);
}
