use super::*;

fn filled() -> FormValues {
    FormValues::new()
        .with(NAME, "Sipho")
        .with(EMAIL, "sipho@example.com")
        .with(MESSAGE, "Love the beanies")
}

#[test]
fn all_fields_present_is_accepted() {
    let verdict = check(&filled());
    assert_eq!(verdict, HomeContactVerdict::Accepted);
    assert_eq!(verdict.alert_text(), "Thank you for your message! We will get back to you soon.");
    assert!(verdict.resets_form());
}

#[test]
fn any_missing_field_is_incomplete() {
    for id in [NAME, EMAIL, MESSAGE] {
        let mut values = filled();
        values.set(id, "");
        let verdict = check(&values);
        assert_eq!(verdict, HomeContactVerdict::Incomplete, "{id}");
        assert_eq!(verdict.alert_text(), "Please fill in all required fields.");
        assert!(!verdict.resets_form());
    }
}

#[test]
fn email_format_is_not_checked() {
    let mut values = filled();
    values.set(EMAIL, "not-an-email");
    assert_eq!(check(&values), HomeContactVerdict::Accepted);
}
