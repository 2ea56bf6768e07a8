use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::guard::{GuardOutcome, GuardPolicy, GuardState, LOGIN_PATH, evaluate};
use crate::net::types::AuthResponse;
use crate::session::identity::display_name;
use crate::session::model::ProfileMetadata;
use crate::session::storage::MemoryStorage;

fn service() -> (SessionService, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (SessionService::new(storage.clone()), storage)
}

fn counter(service: &SessionService) -> (Arc<AtomicUsize>, Subscription) {
    let count = Arc::new(AtomicUsize::new(0));
    let seen = count.clone();
    let sub = service.subscribe(move || {
        seen.fetch_add(1, Ordering::SeqCst);
    });
    (count, sub)
}

/// Storage that rejects every write.
struct ReadOnlyStorage;

impl SessionStorage for ReadOnlyStorage {
    fn get(&self, _key: &str) -> Option<String> {
        None
    }

    fn set(&self, key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() })
    }

    fn remove(&self, _key: &str) {}
}

// =============================================================
// Sign in / sign out
// =============================================================

#[test]
fn sign_in_persists_then_notifies_once() {
    let (service, _) = service();
    let (count, _sub) = counter(&service);
    service.sign_in("abc", &Profile::default()).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert_eq!(service.bearer().as_deref(), Some("abc"));
    assert!(service.is_authenticated());
}

#[test]
fn listener_sees_new_session_during_notification() {
    let (service, _) = service();
    let observed = Arc::new(Mutex::new(None));
    let reader = service.clone();
    let slot = observed.clone();
    let _sub = service.subscribe(move || {
        *slot.lock().unwrap() = Some(reader.is_authenticated());
    });
    service.sign_in("abc", &Profile::default()).unwrap();
    assert_eq!(*observed.lock().unwrap(), Some(true));
    service.sign_out();
    assert_eq!(*observed.lock().unwrap(), Some(false));
}

#[test]
fn sign_out_clears_and_notifies() {
    let (service, storage) = service();
    service.sign_in("abc", &Profile::default()).unwrap();
    let (count, _sub) = counter(&service);
    service.sign_out();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!service.is_authenticated());
    assert!(storage.is_empty());
}

#[test]
fn failed_write_still_notifies() {
    let service = SessionService::new(Arc::new(ReadOnlyStorage));
    let (count, _sub) = counter(&service);
    let result = service.sign_in("abc", &Profile::default());
    assert!(matches!(result, Err(StorageError::Write { .. })));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!service.is_authenticated());
}

#[test]
fn refresh_profile_keeps_token() {
    let (service, _) = service();
    service.sign_in("abc", &Profile::default()).unwrap();
    let (count, _sub) = counter(&service);
    let renamed = Profile {
        user_metadata: ProfileMetadata { full_name: Some("Pat Doe".to_owned()), ..ProfileMetadata::default() },
        ..Profile::default()
    };
    service.refresh_profile(&renamed).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    let session = service.snapshot();
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(session.profile, Some(renamed));
}

#[test]
fn clones_share_store_and_channel() {
    let (service, _) = service();
    let other = service.clone();
    let (count, _sub) = counter(&other);
    service.sign_in("abc", &Profile::default()).unwrap();
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(other.is_authenticated());
}

// =============================================================
// Guards driven by the channel
// =============================================================

fn track_guard(service: &SessionService, policy: GuardPolicy) -> (Arc<Mutex<GuardOutcome>>, Subscription) {
    let outcome = Arc::new(Mutex::new(evaluate(policy, GuardState::from_session(&service.snapshot()))));
    let slot = outcome.clone();
    let reader = service.clone();
    let sub = service.subscribe(move || {
        *slot.lock().unwrap() = evaluate(policy, GuardState::from_session(&reader.snapshot()));
    });
    (outcome, sub)
}

#[test]
fn guards_toggle_on_login_and_logout() {
    let (service, _) = service();
    let (protected, _p) = track_guard(&service, GuardPolicy::protected());
    let (guest, _g) = track_guard(&service, GuardPolicy::guest());
    assert_eq!(*protected.lock().unwrap(), GuardOutcome::Redirect(LOGIN_PATH));
    assert_eq!(*guest.lock().unwrap(), GuardOutcome::Render);

    service.sign_in("abc", &Profile::default()).unwrap();
    assert_eq!(*protected.lock().unwrap(), GuardOutcome::Render);
    assert_eq!(*guest.lock().unwrap(), GuardOutcome::Redirect("/dashboard"));

    service.sign_out();
    assert_eq!(*protected.lock().unwrap(), GuardOutcome::Redirect(LOGIN_PATH));
    assert_eq!(*guest.lock().unwrap(), GuardOutcome::Render);
}

#[test]
fn successful_login_flows_to_header_and_guard() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"user":{"id":"u-1","email":"a@b.com","user_metadata":{}},"access_token":"abc","message":"ok"}"#,
    )
    .unwrap();
    let (service, _) = service();
    service.sign_in(&resp.access_token, &resp.user).unwrap();

    let session = service.snapshot();
    assert_eq!(session.token.as_deref(), Some("abc"));
    assert_eq!(session.profile.as_ref(), Some(&resp.user));
    assert_eq!(display_name(session.profile.as_ref()), "a");
    assert_eq!(
        evaluate(GuardPolicy::protected(), GuardState::from_session(&session)),
        GuardOutcome::Render
    );
}

#[test]
fn profile_without_token_is_redirected() {
    let (service, storage) = service();
    storage.set(crate::session::store::PROFILE_KEY, r#"{"id":"u-1","email":"a@b.com"}"#).unwrap();
    let session = service.snapshot();
    assert!(session.profile.is_some());
    assert_eq!(
        evaluate(GuardPolicy::protected(), GuardState::from_session(&session)),
        GuardOutcome::Redirect(LOGIN_PATH)
    );
}

#[test]
fn sign_in_with_blank_token_fails_and_stays_signed_out() {
    let (service, storage) = service();
    let (count, _sub) = counter(&service);
    assert_eq!(service.sign_in("", &Profile::default()), Err(StorageError::EmptyToken));
    assert_eq!(count.load(Ordering::SeqCst), 1);
    assert!(!service.is_authenticated());
    assert!(storage.is_empty());
}
