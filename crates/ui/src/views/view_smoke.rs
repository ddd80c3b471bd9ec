use storage::codec;
use storage::repository::{InMemoryRepository, PatternVisibilityRepository, ProgressRepository};

use super::test_harness::setup_questions_harness;

#[tokio::test(flavor = "current_thread")]
async fn questions_view_renders_all_rows() {
    let mut harness = setup_questions_harness(InMemoryRepository::new()).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Contains Duplicate"), "missing row in {html}");
    assert!(html.contains("Missing Number"), "missing row in {html}");
    assert!(
        html.contains("First Missing Positive"),
        "missing row in {html}"
    );
    assert!(
        html.contains("Done: Easy 0"),
        "missing tally line in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn patterns_visible_by_default() {
    // `showPatterns` absent means visible: no placeholder anywhere.
    let mut harness = setup_questions_harness(InMemoryRepository::new()).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Arrays"), "missing pattern text in {html}");
    assert!(!html.contains("***"), "unexpected mask in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn hidden_patterns_are_masked_except_done_rows() {
    let repo = InMemoryRepository::new();
    repo.save_show_patterns(false).await.expect("seed flag");
    repo.save_checked(&[true, false, false])
        .await
        .expect("seed checked");

    let mut harness = setup_questions_harness(repo).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    // Unfinished rows are masked; the done row keeps its real tags.
    assert!(html.contains("***"), "missing mask in {html}");
    assert!(html.contains("Arrays"), "missing unmasked tag in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn stale_checked_is_reconciled_at_startup() {
    // Two persisted flags against a three-question dataset.
    let repo = InMemoryRepository::new();
    repo.save_checked(&[true, false]).await.expect("seed checked");

    let mut harness = setup_questions_harness(repo).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    let html = harness.render();
    assert!(html.contains("Done: Easy 1"), "missing tally in {html}");

    // The resized sequence was written back during load.
    assert_eq!(
        harness
            .repo
            .get_raw(codec::CHECKED_KEY)
            .expect("read raw")
            .as_deref(),
        Some("[true,false,false]")
    );
}

#[tokio::test(flavor = "current_thread")]
async fn premium_rows_carry_lock_marker() {
    let mut harness = setup_questions_harness(InMemoryRepository::new()).await;
    harness.rebuild();
    harness.drive_async().await;
    harness.drive_async().await;

    // Only the premium hard question renders the lock.
    let html = harness.render();
    assert_eq!(
        html.matches("\u{1F512}").count(),
        1,
        "expected one lock in {html}"
    );
}
