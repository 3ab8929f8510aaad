use popup_client::status::{StatusClass, StatusLine};
use popup_client::ui::render_status;
use std::time::Duration;
use tokio::time::sleep;

#[tokio::test]
async fn scheduled_hide_clears_the_status() {
    let status = StatusLine::new();
    status.show("Saved", StatusClass::Success).await;
    status.schedule_hide(Duration::from_millis(40)).await;

    sleep(Duration::from_millis(120)).await;

    let snapshot = status.snapshot().await;
    assert!(!snapshot.visible);
    assert!(snapshot.text.is_empty());
    assert_eq!(snapshot.class, None);
}

#[tokio::test]
async fn newer_status_cancels_a_pending_hide() {
    let status = StatusLine::new();
    status.show("first", StatusClass::Success).await;
    status.schedule_hide(Duration::from_millis(60)).await;

    sleep(Duration::from_millis(10)).await;
    status.show("second", StatusClass::Error).await;

    sleep(Duration::from_millis(150)).await;

    let snapshot = status.snapshot().await;
    assert!(snapshot.visible);
    assert_eq!(snapshot.text, "second");
    assert_eq!(snapshot.class, Some(StatusClass::Error));
}

#[tokio::test]
async fn rescheduling_replaces_the_previous_timer() {
    let status = StatusLine::new();
    status.show("pending", StatusClass::Success).await;
    status.schedule_hide(Duration::from_millis(30)).await;
    status.schedule_hide(Duration::from_millis(250)).await;

    sleep(Duration::from_millis(120)).await;
    assert!(status.snapshot().await.visible);

    sleep(Duration::from_millis(200)).await;
    assert!(!status.snapshot().await.visible);
}

#[tokio::test]
async fn render_uses_the_class_name() {
    let status = StatusLine::new();
    status.show("Read 5 messages", StatusClass::Success).await;
    assert_eq!(
        render_status(&status.snapshot().await),
        "[success] Read 5 messages"
    );

    status.show("Error: no messages", StatusClass::Error).await;
    assert_eq!(
        render_status(&status.snapshot().await),
        "[error] Error: no messages"
    );

    status.schedule_hide(Duration::from_millis(10)).await;
    sleep(Duration::from_millis(60)).await;
    assert_eq!(render_status(&status.snapshot().await), "");
}
