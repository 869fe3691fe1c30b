//! SQL literal rendering and value classification

use chrono::{TimeZone, Utc};
use rstest::rstest;
use serde_json::json;
use tabledef::render::{SqlValue, convert_array_to_sql, escape, kind_of};
use tabledef::schema::Kind;

#[rstest]
#[case::plain_string(SqlValue::from("hello"), "'hello'")]
#[case::embedded_quote(SqlValue::from("a'b"), "'a'b'")]
#[case::integer(SqlValue::from(7i64), "7")]
#[case::negative_float(SqlValue::from(-0.5f64), "-0.5")]
#[case::boolean(SqlValue::from(false), "false")]
#[case::bigint(SqlValue::BigInt(9_007_199_254_740_993), "9007199254740993")]
#[case::object(SqlValue::from(json!({"name": "o'neil", "n": [1, 2]})), r#"'{"name":"o'neil","n":[1,2]}'"#)]
#[case::object_key_order(SqlValue::from(json!({"zeta": 1, "mid": {"b": 2, "a": 1}, "alpha": 3})), r#"'{"zeta":1,"mid":{"b":2,"a":1},"alpha":3}'"#)]
fn test_escape(#[case] value: SqlValue, #[case] expected: &str) {
    assert_eq!(escape(&value), expected);
}

#[test]
fn test_escape_epoch() {
    let epoch = Utc.timestamp_opt(0, 0).unwrap();
    assert_eq!(
        escape(&SqlValue::Date(epoch)),
        "'Thu, 01 Jan 1970 00:00:00 GMT'"
    );
}

#[test]
fn test_array_literals() {
    assert_eq!(
        convert_array_to_sql(&[SqlValue::from(1i64), SqlValue::from(2i64), SqlValue::from(3i64)]),
        "ARRAY[1, 2, 3]"
    );
    assert_eq!(convert_array_to_sql(&[]), "ARRAY[]");

    let mixed = vec![
        SqlValue::from("x"),
        SqlValue::Null,
        SqlValue::from(json!({"k": true})),
    ];
    assert_eq!(
        convert_array_to_sql(&mixed),
        r#"ARRAY['x', NULL, '{"k":true}']"#
    );
}

#[rstest]
#[case::integer(json!(10), Kind::Number)]
#[case::whole_float(json!(10.0), Kind::Number)]
#[case::fraction(json!(10.5), Kind::Float)]
#[case::huge_unsigned(json!(u64::MAX), Kind::BigInt)]
#[case::string(json!("10"), Kind::String)]
#[case::boolean(json!(true), Kind::Boolean)]
#[case::null(json!(null), Kind::Null)]
#[case::array(json!([1, "a"]), Kind::Array)]
#[case::object(json!({"a": 1}), Kind::Object)]
fn test_kind_of_json(#[case] value: serde_json::Value, #[case] expected: Kind) {
    assert_eq!(kind_of(&SqlValue::from(value)), expected);
}

#[test]
fn test_kind_of_date() {
    let date = Utc.with_ymd_and_hms(2020, 2, 29, 12, 0, 0).unwrap();
    assert_eq!(kind_of(&date.into()), Kind::Date);
}

#[test]
fn test_inferred_kind_is_declarable() {
    for value in [json!(1), json!(1.5), json!("s"), json!(true), json!({})] {
        assert!(kind_of(&SqlValue::from(value)).is_column_type());
    }
    assert!(!kind_of(&SqlValue::from(json!([]))).is_column_type());
}
