use super::*;

#[test]
fn validate_registration_accepts_and_trims() {
    assert_eq!(
        validate_registration(" Ann ", " ann@example.com ", "password1", "password1"),
        Ok(Registration {
            name: "Ann".to_owned(),
            email: "ann@example.com".to_owned(),
            password: "password1".to_owned(),
        })
    );
}

#[test]
fn validate_registration_requires_every_field() {
    assert_eq!(validate_registration("", "a@b.com", "password1", "password1"), Err(MISSING_FIELDS));
    assert_eq!(validate_registration("Ann", "  ", "password1", "password1"), Err(MISSING_FIELDS));
    assert_eq!(validate_registration("Ann", "a@b.com", "", "password1"), Err(MISSING_FIELDS));
    assert_eq!(validate_registration("Ann", "a@b.com", "password1", ""), Err(MISSING_FIELDS));
}

#[test]
fn validate_registration_rejects_malformed_email() {
    assert_eq!(validate_registration("Ann", "ann", "password1", "password1"), Err(BAD_EMAIL));
}

#[test]
fn validate_registration_enforces_minimum_length() {
    assert_eq!(validate_registration("Ann", "a@b.com", "short", "short"), Err(SHORT_PASSWORD));
    assert!(validate_registration("Ann", "a@b.com", "exactly8", "exactly8").is_ok());
}

#[test]
fn validate_registration_counts_characters_not_bytes() {
    // Seven multi-byte characters stay under the limit.
    assert_eq!(validate_registration("Ann", "a@b.com", "ééééééé", "ééééééé"), Err(SHORT_PASSWORD));
}

#[test]
fn validate_registration_requires_matching_confirmation() {
    assert_eq!(
        validate_registration("Ann", "a@b.com", "password1", "password2"),
        Err(PASSWORD_MISMATCH)
    );
}
