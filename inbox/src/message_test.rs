use super::*;

const TS: &str = "10/19/2026, 9:30:00 AM";

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_accepts_simple_and_dotted_addresses() {
    assert!(is_valid_email("a@b.com"));
    assert!(is_valid_email("user.name@sub.domain.co"));
}

#[test]
fn email_rejects_missing_parts() {
    assert!(!is_valid_email("noatsign"));
    assert!(!is_valid_email("a@b"));
    assert!(!is_valid_email("@b.com"));
    assert!(!is_valid_email("a@"));
}

#[test]
fn email_rejects_whitespace_and_double_at() {
    assert!(!is_valid_email("a b@c.com"));
    assert!(!is_valid_email("a@b@c.com"));
    assert!(!is_valid_email("a@b .com"));
}

#[test]
fn email_domain_needs_text_around_a_dot() {
    assert!(!is_valid_email("a@.com"));
    assert!(!is_valid_email("a@b."));
    assert!(is_valid_email("a@b.c."));
}

// =============================================================
// Message::from_fields
// =============================================================

#[test]
fn from_fields_trims_and_stamps() {
    let fields = FormFields::new("  Jo ", " jo@x.com\n", "\thi  ");
    let msg = Message::from_fields(&fields, TS).unwrap();
    assert_eq!(msg.name, "Jo");
    assert_eq!(msg.email, "jo@x.com");
    assert_eq!(msg.body, "hi");
    assert_eq!(msg.submitted_at, TS);
}

#[test]
fn from_fields_rejects_any_blank_field() {
    let cases = [
        FormFields::new("", "jo@x.com", "hi"),
        FormFields::new("Jo", "", "hi"),
        FormFields::new("Jo", "jo@x.com", ""),
        FormFields::new("   ", "jo@x.com", "hi"),
        FormFields::new("Jo", " \t ", "hi"),
        FormFields::new("Jo", "jo@x.com", "\n\n"),
        FormFields::default(),
    ];
    for fields in cases {
        assert_eq!(Message::from_fields(&fields, TS), Err(ValidationError::MissingField), "{fields:?}");
    }
}

#[test]
fn from_fields_missing_field_wins_over_bad_email() {
    let fields = FormFields::new("", "not-an-email", "hi");
    assert_eq!(Message::from_fields(&fields, TS), Err(ValidationError::MissingField));
}

#[test]
fn from_fields_rejects_bad_email() {
    let fields = FormFields::new("Jo", "jo@x", "hi");
    assert_eq!(Message::from_fields(&fields, TS), Err(ValidationError::InvalidEmail));
}

#[test]
fn validation_messages_match_user_copy() {
    assert_eq!(ValidationError::MissingField.to_string(), "Please fill in all fields.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email address.");
}

// =============================================================
// Wire format
// =============================================================

#[test]
fn message_serializes_with_legacy_keys() {
    let msg = Message::from_fields(&FormFields::new("Jo", "jo@x.com", "hi"), TS).unwrap();
    let value = serde_json::to_value(&msg).unwrap();
    assert_eq!(
        value,
        serde_json::json!({ "name": "Jo", "email": "jo@x.com", "message": "hi", "date": TS })
    );
}

// =============================================================
// Zero-width and non-breaking whitespace
// =============================================================

#[test]
fn from_fields_treats_bom_and_nbsp_as_blank() {
    for name in ["\u{FEFF}", "\u{00A0} ", " \u{FEFF}\u{00A0}\t"] {
        let fields = FormFields::new(name, "a@b.com", "hi");
        assert_eq!(Message::from_fields(&fields, TS), Err(ValidationError::MissingField), "{name:?}");
    }
}

#[test]
fn from_fields_strips_surrounding_bom() {
    let fields = FormFields::new("\u{FEFF}Jo\u{FEFF}", "\u{FEFF}jo@x.com", "hi\u{FEFF}");
    let msg = Message::from_fields(&fields, TS).unwrap();
    assert_eq!(msg.name, "Jo");
    assert_eq!(msg.email, "jo@x.com");
    assert_eq!(msg.body, "hi");
}

#[test]
fn email_rejects_embedded_bom() {
    assert!(!is_valid_email("a\u{FEFF}b@c.com"));
    assert!(!is_valid_email("ab@c\u{FEFF}d.com"));
    let fields = FormFields::new("Jo", "a\u{FEFF}b@c.com", "hi");
    assert_eq!(Message::from_fields(&fields, TS), Err(ValidationError::InvalidEmail));
}
