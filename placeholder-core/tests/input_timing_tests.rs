use std::time::{Duration, Instant};

use placeholder_core::{Debouncer, NotificationSink, Toasts};

#[test]
fn debouncer_releases_last_value_after_quiet_window() {
    let start = Instant::now();
    let mut debounce = Debouncer::new(Duration::from_millis(300));
    assert_eq!(debounce.poll(start), None);

    debounce.push(10u32, start);
    debounce.push(20u32, start + Duration::from_millis(100));
    debounce.push(30u32, start + Duration::from_millis(200));

    // Window restarts on every push
    assert_eq!(debounce.poll(start + Duration::from_millis(400)), None);
    assert_eq!(
        debounce.remaining(start + Duration::from_millis(400)),
        Some(Duration::from_millis(100))
    );
    assert_eq!(debounce.poll(start + Duration::from_millis(500)), Some(30));

    // Released once
    assert!(!debounce.is_pending());
    assert_eq!(debounce.poll(start + Duration::from_secs(5)), None);
}

#[test]
fn debouncer_flush_releases_pending_value_immediately() {
    let start = Instant::now();
    let mut debounce = Debouncer::new(Duration::from_millis(300));
    assert_eq!(debounce.flush(), None);

    debounce.push(42u32, start);
    assert_eq!(debounce.flush(), Some(42));
    // Nothing left for the window to release later
    assert_eq!(debounce.poll(start + Duration::from_secs(1)), None);
}

#[test]
fn toasts_expire_after_display_duration() {
    let start = Instant::now();
    let mut toasts = Toasts::new(Duration::from_millis(5000));
    toasts.push_at("Failed to fetch posts", start);
    toasts.push_at("Failed to fetch photos", start + Duration::from_secs(2));

    toasts.prune(start + Duration::from_millis(4999));
    assert_eq!(toasts.len(), 2);

    toasts.prune(start + Duration::from_millis(5000));
    let left: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(left, vec!["Failed to fetch photos"]);

    toasts.prune(start + Duration::from_secs(8));
    assert!(toasts.is_empty());
}

#[test]
fn toasts_can_be_dismissed_and_used_as_sink() {
    let mut toasts = Toasts::new(Duration::from_secs(5));
    toasts.notify_error("Failed to fetch albums");
    toasts.notify_error("Failed to fetch comments");
    assert!(toasts.iter().all(|t| t.title == "Error"));

    toasts.dismiss(0);
    toasts.dismiss(9);
    let left: Vec<&str> = toasts.iter().map(|t| t.message.as_str()).collect();
    assert_eq!(left, vec!["Failed to fetch comments"]);
}
