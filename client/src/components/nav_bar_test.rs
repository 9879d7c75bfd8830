use super::*;
use crate::state::session::UserProfile;

fn signed_in(admin: bool) -> Session {
    Session::signed_in(UserProfile {
        id: 1,
        name: "Ann".to_owned(),
        email: "ann@example.com".to_owned(),
        admin,
    })
}

#[test]
fn logged_out_sees_sign_in_and_register() {
    assert_eq!(visible_links(&Session::default()), vec![RouteName::Login, RouteName::New]);
}

#[test]
fn member_sees_member_routes_only() {
    assert_eq!(
        visible_links(&signed_in(false)),
        vec![RouteName::Home, RouteName::Upload, RouteName::Receipt, RouteName::Profile]
    );
}

#[test]
fn admin_also_sees_admin_routes() {
    assert_eq!(
        visible_links(&signed_in(true)),
        vec![
            RouteName::Home,
            RouteName::Upload,
            RouteName::Receipt,
            RouteName::Profile,
            RouteName::Admin,
            RouteName::AdminDash,
        ]
    );
}

#[test]
fn every_route_has_a_label() {
    for def in &ROUTES {
        assert!(!link_label(def.name).is_empty());
    }
}
