use super::*;

fn alice(admin: bool) -> UserProfile {
    UserProfile {
        id: 7,
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        admin,
    }
}

// =============================================================
// Session lifecycle
// =============================================================

#[test]
fn session_default_is_logged_out_and_empty() {
    let session = Session::default();
    assert!(!session.logged_in);
    assert_eq!(session.user, UserProfile::default());
    assert!(!session.is_admin());
}

#[test]
fn sign_in_replaces_profile_wholesale() {
    let mut session = Session::signed_in(alice(true));
    let bob = UserProfile {
        id: 8,
        name: "Bob".to_owned(),
        email: "bob@example.com".to_owned(),
        admin: false,
    };
    session.sign_in(bob.clone());
    assert!(session.logged_in);
    assert_eq!(session.user, bob);
    assert!(!session.is_admin());
}

#[test]
fn sign_out_clears_everything() {
    let mut session = Session::signed_in(alice(true));
    session.sign_out();
    assert_eq!(session, Session::default());
}

#[test]
fn sign_out_when_already_logged_out_is_noop() {
    let mut session = Session::default();
    session.sign_out();
    assert_eq!(session, Session::default());
}

#[test]
fn is_admin_requires_login() {
    let session = Session { logged_in: false, user: alice(true) };
    assert!(!session.is_admin());
    assert!(Session::signed_in(alice(true)).is_admin());
}

// =============================================================
// UserProfile wire format
// =============================================================

#[test]
fn profile_deserializes_verification_payload() {
    let raw = r#"{"user_id": 3, "name": "Cara", "email": "cara@example.com", "admin": 1}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.id, 3);
    assert_eq!(profile.name, "Cara");
    assert!(profile.admin);
}

#[test]
fn profile_accepts_plain_id_and_bool_flag() {
    let raw = r#"{"id": 4, "name": "Dan", "email": "dan@example.com", "admin": false}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.id, 4);
    assert!(!profile.admin);
}

#[test]
fn profile_missing_admin_defaults_false() {
    let raw = r#"{"id": 5, "name": "Eve", "email": "eve@example.com"}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert!(!profile.admin);
}

#[test]
fn profile_null_admin_defaults_false() {
    let raw = r#"{"user_id": 9, "name": "Finn", "email": "finn@example.com", "admin": null}"#;
    let profile: UserProfile = serde_json::from_str(raw).unwrap();
    assert_eq!(profile.id, 9);
    assert!(!profile.admin);
}

#[test]
fn profile_rejects_out_of_range_flag() {
    let raw = r#"{"id": 5, "name": "Eve", "email": "eve@example.com", "admin": 2}"#;
    assert!(serde_json::from_str::<UserProfile>(raw).is_err());
}

#[test]
fn profile_rejects_string_flag() {
    let raw = r#"{"id": 5, "name": "Eve", "email": "eve@example.com", "admin": "yes"}"#;
    assert!(serde_json::from_str::<UserProfile>(raw).is_err());
}
