//! End-to-end scenarios for the subscribe page with a paused tokio clock.

use std::time::Duration;

use solodev_core::notification::{self, SUBSCRIBED_MESSAGE};
use solodev_core::{DismissReason, SubscribePage, AUTO_HIDE_DURATION};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn subscribe_then_auto_hide_after_six_seconds() {
    let mut page = SubscribePage::new();
    page.edit("a@b.com");

    let ticket = page.submit().expect("non-empty email is accepted");
    assert_eq!(page.form().email(), "");
    assert!(page.notification().is_visible());
    assert_eq!(page.notification().message(), SUBSCRIBED_MESSAGE);

    let started = Instant::now();
    let ticket = notification::wait(ticket).await;
    assert!(started.elapsed() >= Duration::from_secs(6));

    assert!(page.expire(ticket));
    assert!(!page.notification().is_visible());
}

#[tokio::test(start_paused = true)]
async fn still_visible_before_timeout() {
    let mut page = SubscribePage::new();
    page.edit("a@b.com");
    let ticket = page.submit().expect("accepted");

    let early = tokio::time::timeout(AUTO_HIDE_DURATION - Duration::from_millis(1), notification::wait(ticket)).await;
    assert!(early.is_err());
    assert!(page.notification().is_visible());
}

#[tokio::test]
async fn empty_submit_shows_helper_text() {
    let mut page = SubscribePage::new();

    assert!(page.submit().is_none());
    assert_eq!(page.form().email(), "");
    assert_eq!(page.form().helper_text().as_deref(), Some("Email is required"));
    assert!(!page.notification().is_visible());
}

#[tokio::test(start_paused = true)]
async fn manual_dismiss_beats_timer() {
    let mut page = SubscribePage::new();
    page.edit("a@b.com");
    let ticket = page.submit().expect("accepted");

    tokio::time::advance(Duration::from_secs(2)).await;
    assert!(page.dismiss(DismissReason::CloseButton));

    let ticket = notification::wait(ticket).await;
    assert!(!page.expire(ticket));
    assert!(!page.notification().is_visible());
    // Dismissing again changes nothing
    assert!(!page.dismiss(DismissReason::CloseButton));
}

#[tokio::test(start_paused = true)]
async fn second_subscribe_restarts_timer() {
    let mut page = SubscribePage::new();
    page.edit("a@b.com");
    let first = page.submit().expect("accepted");

    tokio::time::advance(Duration::from_secs(4)).await;
    page.edit("c@d.com");
    let second = page.submit().expect("accepted");

    let first = notification::wait(first).await;
    assert!(!page.expire(first));
    assert!(page.notification().is_visible());

    let second = notification::wait(second).await;
    assert!(page.expire(second));
    assert!(!page.notification().is_visible());
}

#[tokio::test(start_paused = true)]
async fn hover_pauses_and_leave_resumes() {
    let mut page = SubscribePage::new();
    page.edit("a@b.com");
    let ticket = page.submit().expect("accepted");

    page.pause();
    let ticket = notification::wait(ticket).await;
    assert!(!page.expire(ticket));
    assert!(page.notification().is_visible());

    let resumed = page.resume().expect("resumes while visible");
    let started = Instant::now();
    let resumed = notification::wait(resumed).await;
    assert!(started.elapsed() >= Duration::from_secs(3));
    assert!(page.expire(resumed));
}
