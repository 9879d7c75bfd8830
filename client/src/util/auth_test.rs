use super::*;

#[test]
fn redirect_path_is_none_when_allowed() {
    assert_eq!(redirect_path(Decision::Allow), None);
}

#[test]
fn redirect_path_uses_table_path() {
    assert_eq!(redirect_path(Decision::Redirect(RouteName::Login)), Some("/login"));
    assert_eq!(redirect_path(Decision::Redirect(RouteName::Home)), Some("/"));
}

#[test]
fn redirect_options_replace_history() {
    assert!(redirect_options().replace);
}

#[test]
fn logged_out_session_maps_to_login_path() {
    let decision = guard::evaluate(&Session::default(), RouteName::Profile);
    assert_eq!(redirect_path(decision), Some("/login"));
}

// =============================================================
// install_route_guard
// =============================================================

mod effect {
    use std::sync::{Arc, Mutex};

    use any_spawner::Executor;
    use leptos::prelude::*;
    use leptos_router::NavigateOptions;
    use tokio::task::LocalSet;

    use crate::routes::RouteName;
    use crate::state::session::{Session, UserProfile};
    use crate::util::auth::install_route_guard;

    type Calls = Arc<Mutex<Vec<(String, bool)>>>;

    fn recorder(calls: &Calls) -> impl Fn(&str, NavigateOptions) + Clone + 'static {
        let calls = Arc::clone(calls);
        move |path: &str, options: NavigateOptions| {
            calls.lock().unwrap().push((path.to_owned(), options.replace));
        }
    }

    fn member() -> Session {
        Session::signed_in(UserProfile {
            id: 1,
            name: "Mia".to_owned(),
            email: "mia@example.com".to_owned(),
            admin: false,
        })
    }

    #[tokio::test]
    async fn sign_out_redirects_to_login_with_replace() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let calls = Calls::default();
                let session = RwSignal::new(member());
                install_route_guard(session, RouteName::Profile, recorder(&calls));

                Executor::tick().await;
                assert!(calls.lock().unwrap().is_empty());

                session.update(Session::sign_out);
                Executor::tick().await;
                assert_eq!(*calls.lock().unwrap(), vec![("/login".to_owned(), true)]);
            })
            .await;
    }

    #[tokio::test]
    async fn sign_in_on_register_route_redirects_home() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let calls = Calls::default();
                let session = RwSignal::new(Session::default());
                install_route_guard(session, RouteName::New, recorder(&calls));

                Executor::tick().await;
                assert!(calls.lock().unwrap().is_empty());

                session.update(|s| s.sign_in(member().user));
                Executor::tick().await;
                assert_eq!(*calls.lock().unwrap(), vec![("/".to_owned(), true)]);
            })
            .await;
    }

    #[tokio::test]
    async fn initial_run_redirects_logged_out_session() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let calls = Calls::default();
                let session = RwSignal::new(Session::default());
                install_route_guard(session, RouteName::AdminDash, recorder(&calls));

                Executor::tick().await;
                assert_eq!(*calls.lock().unwrap(), vec![("/login".to_owned(), true)]);
            })
            .await;
    }
}
