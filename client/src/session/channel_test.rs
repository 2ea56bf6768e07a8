use super::*;
use std::sync::atomic::AtomicUsize;

fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_cb = hits.clone();
    (hits, move || {
        hits_cb.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn subscriber_receives_exactly_one_signal_per_notify() {
    let channel = AuthChannel::new();
    let (hits, cb) = counter();
    let _sub = channel.subscribe(cb);
    channel.notify();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    channel.notify();
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[test]
fn every_subscriber_receives_every_signal() {
    let channel = AuthChannel::new();
    let (header_hits, header_cb) = counter();
    let (guard_hits, guard_cb) = counter();
    let _header = channel.subscribe(header_cb);
    let _guard = channel.subscribe(guard_cb);
    channel.notify();
    assert_eq!(header_hits.load(Ordering::SeqCst), 1);
    assert_eq!(guard_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn late_subscriber_gets_nothing_retroactively() {
    let channel = AuthChannel::new();
    channel.notify();
    let (hits, cb) = counter();
    let _sub = channel.subscribe(cb);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn dropping_subscription_unsubscribes() {
    let channel = AuthChannel::new();
    let (hits, cb) = counter();
    let sub = channel.subscribe(cb);
    assert_eq!(channel.subscriber_count(), 1);
    drop(sub);
    assert_eq!(channel.subscriber_count(), 0);
    channel.notify();
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[test]
fn clones_share_one_registry() {
    let channel = AuthChannel::new();
    let other = channel.clone();
    let (hits, cb) = counter();
    let _sub = channel.subscribe(cb);
    other.notify();
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[test]
fn subscription_outliving_channel_drops_cleanly() {
    let channel = AuthChannel::new();
    let (_, cb) = counter();
    let sub = channel.subscribe(cb);
    drop(channel);
    drop(sub);
}

#[test]
fn listener_can_subscribe_during_dispatch_without_deadlock() {
    let channel = AuthChannel::new();
    let (late_hits, late_cb) = counter();
    let late_cb = Arc::new(late_cb);
    let spawned: Arc<Mutex<Vec<Subscription>>> = Arc::new(Mutex::new(Vec::new()));

    let channel_inner = channel.clone();
    let spawned_inner = spawned.clone();
    let _sub = channel.subscribe(move || {
        let cb = late_cb.clone();
        let sub = channel_inner.subscribe(move || cb());
        spawned_inner.lock().unwrap().push(sub);
    });

    channel.notify();
    assert_eq!(late_hits.load(Ordering::SeqCst), 0);
    channel.notify();
    assert_eq!(late_hits.load(Ordering::SeqCst), 1);
}

#[test]
fn listener_removed_mid_dispatch_is_skipped() {
    let channel = AuthChannel::new();
    let (victim_hits, victim_cb) = counter();
    let victim: Arc<Mutex<Option<Subscription>>> = Arc::new(Mutex::new(None));

    let victim_slot = victim.clone();
    let _killer = channel.subscribe(move || {
        victim_slot.lock().unwrap().take();
    });
    *victim.lock().unwrap() = Some(channel.subscribe(victim_cb));

    channel.notify();
    assert_eq!(victim_hits.load(Ordering::SeqCst), 0);
    assert_eq!(channel.subscriber_count(), 1);
}
