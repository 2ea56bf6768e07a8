use super::*;
use crate::guard::LOGIN_PATH;

#[test]
fn redirects_replace_history() {
    assert!(redirect_options().replace);
}

#[test]
fn unread_session_is_unknown() {
    assert_eq!(guard_state(None), GuardState::Unknown);
    assert_eq!(evaluate(GuardPolicy::protected(), guard_state(None)), GuardOutcome::Loading);
}

#[test]
fn read_session_resolves() {
    let signed_out = Session::default();
    assert_eq!(guard_state(Some(&signed_out)), GuardState::Resolved { authenticated: false });
    assert_eq!(
        evaluate(GuardPolicy::protected(), guard_state(Some(&signed_out))),
        GuardOutcome::Redirect(LOGIN_PATH)
    );

    let signed_in = Session { token: Some("abc".to_owned()), profile: None };
    assert_eq!(guard_state(Some(&signed_in)), GuardState::Resolved { authenticated: true });
}
