use super::*;
use time::macros::datetime;

#[test]
fn display_timestamp_uses_johannesburg_offset() {
    let at = datetime!(2024-05-03 12:05:09 UTC);
    assert_eq!(display_timestamp(at).unwrap(), "2024/05/03, 14:05:09");
}

#[test]
fn display_timestamp_rolls_over_midnight() {
    let at = datetime!(2024-12-31 23:30:00 UTC);
    assert_eq!(display_timestamp(at).unwrap(), "2025/01/01, 01:30:00");
}

#[test]
fn file_timestamp_is_utc_without_colons() {
    let at = datetime!(2024-05-03 14:05:09 +2);
    let stamp = file_timestamp(at).unwrap();
    assert_eq!(stamp, "2024-05-03T12-05-09");
    assert!(!stamp.contains(':'));
}
