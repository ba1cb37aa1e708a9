use crate::parse_sprint_id;

#[test]
fn test_parse_sprint_id_accepts_digits() {
    assert_eq!(parse_sprint_id("1").unwrap(), 1);
    assert_eq!(parse_sprint_id("0011").unwrap(), 11);
    assert_eq!(parse_sprint_id("0").unwrap(), 0);
}

#[test]
fn test_parse_sprint_id_rejects_non_digits() {
    for raw in ["", "abc", "-1", "+1", " 1", "1.5", "1e3", "１"] {
        assert!(parse_sprint_id(raw).is_err(), "accepted {:?}", raw);
    }
}

#[test]
fn test_parse_sprint_id_rejects_overflow() {
    assert!(parse_sprint_id("9223372036854775808").is_err());
    assert_eq!(parse_sprint_id("9223372036854775807").unwrap(), i64::MAX);
}
