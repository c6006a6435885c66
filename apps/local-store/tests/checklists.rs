mod common;

use common::{date, TestContext};
use pretty_assertions::assert_eq;
use std::collections::{BTreeMap, BTreeSet};
use tracker_core::TodoType;

#[tokio::test]
async fn todo_markers_are_row_presence() {
    let ctx = TestContext::new().await;
    let todos = &ctx.services.todos;
    let day = date(2024, 1, 3);

    assert!(todos.set_checked(day, TodoType::Algorithm, true).await);
    assert!(todos.set_checked(day, TodoType::Algorithm, true).await);
    assert!(todos.set_checked(day, TodoType::Reading, true).await);
    assert!(todos.set_checked(day, TodoType::Health, false).await);

    assert_eq!(
        todos.list_for_date(day).await,
        BTreeSet::from([TodoType::Algorithm, TodoType::Reading])
    );
    assert_eq!(todos.list().await.len(), 2);

    assert!(todos.set_checked(day, TodoType::Reading, false).await);
    assert!(!todos.is_checked(day, TodoType::Reading).await);
    assert_eq!(todos.list_dates(TodoType::Algorithm).await, vec![day]);
}

#[tokio::test]
async fn goal_checklist_survives_reopen() {
    let ctx = TestContext::new().await;
    let goals = &ctx.services.goals;

    let checklist = BTreeMap::from([
        ("rust-book".to_string(), true),
        ("tokio-tutorial".to_string(), false),
        ("sqlite-internals".to_string(), true),
    ]);
    assert!(goals.replace_all(&checklist).await);
    assert!(goals.set_checked("tokio-tutorial", true).await);

    let reopened = ctx.reopen().await;
    let stored = reopened.goals.list().await;
    assert_eq!(
        stored,
        BTreeMap::from([
            ("rust-book".to_string(), true),
            ("sqlite-internals".to_string(), true),
            ("tokio-tutorial".to_string(), true),
        ])
    );
}

#[tokio::test]
async fn memos_list_newest_first() {
    let ctx = TestContext::new().await;
    let memos = &ctx.services.memos;

    let first = memos.upsert(None, "first").await.unwrap();
    let second = memos.upsert(None, "second").await.unwrap();
    memos.upsert(Some(first.id), "first, edited").await.unwrap();

    let listed: Vec<_> = memos.list().await.into_iter().map(|m| m.id).collect();
    assert_eq!(listed, vec![second.id, first.id]);
}
