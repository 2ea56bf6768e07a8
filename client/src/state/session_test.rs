use std::sync::Arc;

use leptos::reactive::owner::Owner;

use super::*;
use crate::components::route_guard::guard_state;
use crate::guard::{GuardOutcome, GuardPolicy, LOGIN_PATH, evaluate};
use crate::session::{MemoryStorage, Profile};

fn mounted() -> (Owner, SessionService, RwSignal<Option<Session>>) {
    let service = SessionService::new(Arc::new(MemoryStorage::new()));
    let owner = Owner::new();
    let session = owner.with(|| {
        provide_context(service.clone());
        use_session()
    });
    (owner, service, session)
}

fn authenticated(session: RwSignal<Option<Session>>) -> Option<bool> {
    session.with_untracked(|s| s.as_ref().map(Session::is_authenticated))
}

#[test]
fn signal_follows_sign_in_and_sign_out() {
    let (owner, service, session) = mounted();
    owner.with(|| {
        service.sign_in("abc", &Profile::default()).unwrap();
        assert_eq!(authenticated(session), Some(true));

        service.sign_out();
        assert_eq!(authenticated(session), Some(false));
    });
}

#[test]
fn protected_guard_tracks_the_signal() {
    let (owner, service, session) = mounted();
    owner.with(|| {
        let outcome = || session.with_untracked(|s| evaluate(GuardPolicy::protected(), guard_state(s.as_ref())));

        service.sign_in("abc", &Profile::default()).unwrap();
        assert_eq!(outcome(), GuardOutcome::Render);

        service.sign_out();
        assert_eq!(outcome(), GuardOutcome::Redirect(LOGIN_PATH));
    });
}

#[test]
fn cleanup_releases_the_subscription() {
    let (owner, service, _session) = mounted();
    assert_eq!(service.channel().subscriber_count(), 1);

    owner.cleanup();
    assert_eq!(service.channel().subscriber_count(), 0);

    service.sign_in("abc", &Profile::default()).unwrap();
    assert!(service.is_authenticated());
}
