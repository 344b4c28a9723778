//! Batch dispatch through `TurnController`

mod common;

use common::{OsCall, RecordingOs, RecordingReporter, test_context};
use operate_core::action::{Action, ClickPoint, Directive, decode_batch};
use operate_core::turn::TurnController;
use std::sync::Arc;

fn setup() -> (Arc<RecordingOs>, Arc<RecordingReporter>, operate_core::OperateContext) {
    let os = Arc::new(RecordingOs::default());
    let reporter = Arc::new(RecordingReporter::default());
    let context = test_context(os.clone(), reporter.clone());
    (os, reporter, context)
}

#[tokio::test]
async fn test_click_batch_continues() {
    let (os, reporter, context) = setup();
    let actions =
        decode_batch(r#"[{"operation": "click", "x": 10, "y": 20, "thought": "focus window"}]"#)
            .unwrap();

    let directive = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap();

    assert_eq!(directive, Directive::Continue);
    assert_eq!(os.calls(), vec![OsCall::Mouse(ClickPoint::new(10.0, 20.0))]);
    assert_eq!(reporter.events(), vec!["action:click"]);
}

#[tokio::test]
async fn test_write_then_done() {
    let (os, reporter, context) = setup();
    let actions = decode_batch(
        r#"[{"operation": "write", "content": "hello"},
            {"operation": "done", "summary": "typed hello"}]"#,
    )
    .unwrap();

    let directive = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap();

    assert_eq!(directive, Directive::Done);
    assert_eq!(os.calls(), vec![OsCall::Write("hello".to_string())]);
    assert_eq!(
        reporter.events(),
        vec!["action:write", "completed:typed hello"]
    );
}

#[tokio::test]
async fn test_unknown_operation_stops_batch() {
    let (os, reporter, context) = setup();
    let actions = decode_batch(
        r#"[{"operation": "press", "keys": ["enter"]},
            {"operation": "bogus"},
            {"operation": "write", "content": "never"}]"#,
    )
    .unwrap();

    let directive = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap();

    assert_eq!(directive, Directive::Stop);
    assert_eq!(os.calls(), vec![OsCall::Press(vec!["enter".to_string()])]);
    assert_eq!(reporter.events(), vec!["action:press", "unknown:bogus"]);
}

#[tokio::test]
async fn test_every_action_dispatched_once_in_order() {
    let (os, _reporter, context) = setup();
    let actions = vec![
        Action::write("a"),
        Action::press(["ctrl", "l"]),
        Action::click(0.5, 0.25),
        Action::write("b"),
    ];

    let directive = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap();

    assert_eq!(directive, Directive::Continue);
    assert_eq!(
        os.calls(),
        vec![
            OsCall::Write("a".to_string()),
            OsCall::Press(vec!["ctrl".to_string(), "l".to_string()]),
            OsCall::Mouse(ClickPoint::new(0.5, 0.25)),
            OsCall::Write("b".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_done_skips_remaining_actions() {
    let (os, _reporter, context) = setup();
    let actions = vec![
        Action::done("finished early"),
        Action::write("never"),
        Action::click(1.0, 1.0),
    ];

    let directive = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap();

    assert_eq!(directive, Directive::Done);
    assert!(os.calls().is_empty());
}

#[tokio::test]
async fn test_empty_batch_continues() {
    let (os, reporter, context) = setup();

    let directive = TurnController::new(&context, "gpt-4o")
        .run_turn(&[])
        .await
        .unwrap();

    assert_eq!(directive, Directive::Continue);
    assert!(os.calls().is_empty());
    assert!(reporter.events().is_empty());
}

#[tokio::test]
async fn test_os_failure_keeps_earlier_actions_applied() {
    let os = Arc::new(RecordingOs::failing_writes());
    let reporter = Arc::new(RecordingReporter::default());
    let context = test_context(os.clone(), reporter.clone());
    let actions = vec![
        Action::press(["enter"]),
        Action::write("fails"),
        Action::press(["tab"]),
    ];

    let err = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "OPERATE_AUTOMATION");
    assert_eq!(os.calls(), vec![OsCall::Press(vec!["enter".to_string()])]);
}

#[tokio::test]
async fn test_malformed_entry_after_done_is_never_reached() {
    let (os, reporter, context) = setup();
    let actions = decode_batch(
        r#"[{"operation": "done", "summary": "ok"},
            {"operation": "write"}]"#,
    )
    .unwrap();

    let directive = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap();

    assert_eq!(directive, Directive::Done);
    assert!(os.calls().is_empty());
    assert_eq!(reporter.events(), vec!["completed:ok"]);
}

#[tokio::test]
async fn test_malformed_entry_after_unknown_is_never_reached() {
    let (os, reporter, context) = setup();
    let actions = decode_batch(
        r#"[{"operation": "press", "keys": ["enter"]},
            {"operation": "bogus"},
            {"operation": "click"}]"#,
    )
    .unwrap();

    let directive = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap();

    assert_eq!(directive, Directive::Stop);
    assert_eq!(os.calls(), vec![OsCall::Press(vec!["enter".to_string()])]);
    assert_eq!(reporter.events(), vec!["action:press", "unknown:bogus"]);
}

#[tokio::test]
async fn test_reaching_malformed_entry_is_a_fault() {
    let (os, _reporter, context) = setup();
    let actions = decode_batch(
        r#"[{"operation": "press", "keys": ["enter"]},
            {"operation": "click", "y": 4},
            {"operation": "write", "content": "never"}]"#,
    )
    .unwrap();

    let err = TurnController::new(&context, "gpt-4o")
        .run_turn(&actions)
        .await
        .unwrap_err();

    assert_eq!(err.error_code(), "OPERATE_ACTION_DECODE");
    assert!(err.to_string().contains("`x`"));
    assert_eq!(os.calls(), vec![OsCall::Press(vec!["enter".to_string()])]);
}
