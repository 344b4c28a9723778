//! Objective lifecycle through `SessionLoop`

mod common;

use common::{
    OsCall, QueuedObjectives, RecordingOs, RecordingReporter, ScriptedModel, continue_batch,
    test_context,
};
use operate_core::action::{Action, decode_batch};
use operate_core::error::OperateError;
use operate_core::model::{ModelRouter, SessionToken};
use operate_core::session::{SessionExit, SessionLoop};
use operate_core::Config;
use std::sync::Arc;

fn setup() -> (Arc<RecordingOs>, Arc<RecordingReporter>, operate_core::OperateContext) {
    let os = Arc::new(RecordingOs::default());
    let reporter = Arc::new(RecordingReporter::default());
    let context = test_context(os.clone(), reporter.clone());
    (os, reporter, context)
}

#[tokio::test]
async fn test_loop_cap_halts_after_eleven_continue_turns() {
    let (os, reporter, context) = setup();
    let model = ScriptedModel::new((0..20).map(|_| continue_batch()));
    let objectives = QueuedObjectives::default();

    let exit = SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .run("open the browser".to_string())
        .await;

    assert!(matches!(exit, SessionExit::LoopCapReached { loop_count: 11 }));
    assert_eq!(model.queries().len(), 11);
    assert_eq!(os.calls().len(), 11);
    assert!(reporter.errors().is_empty());
}

#[tokio::test]
async fn test_state_persists_across_continue_turns() {
    let (_os, _reporter, context) = setup();
    let model = ScriptedModel::new([
        continue_batch(),
        continue_batch(),
        Ok(vec![Action::new(operate_core::ActionKind::Unknown {
            operation: "scroll".to_string(),
            payload: serde_json::json!({"operation": "scroll"}),
        })]),
    ]);
    let objectives = QueuedObjectives::default();

    let exit = SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .run("open the browser".to_string())
        .await;

    assert!(matches!(exit, SessionExit::Stopped));
    let queries = model.queries();
    assert_eq!(queries.len(), 3);

    assert_eq!(queries[0].session_token, None);
    assert_eq!(queries[1].session_token, Some(SessionToken::new("tok-1")));
    assert_eq!(queries[2].session_token, Some(SessionToken::new("tok-2")));

    assert_eq!(queries[0].conversation_len, 1);
    assert_eq!(queries[1].conversation_len, 3);
    assert_eq!(queries[2].conversation_len, 5);
}

#[tokio::test]
async fn test_done_starts_a_fresh_objective() {
    let (os, reporter, context) = setup();
    let model = ScriptedModel::new([
        continue_batch(),
        Ok(vec![Action::write("hello"), Action::done("typed hello")]),
        continue_batch(),
        Ok(vec![Action::new(operate_core::ActionKind::Unknown {
            operation: "bogus".to_string(),
            payload: serde_json::json!({"operation": "bogus"}),
        })]),
    ]);
    let objectives = QueuedObjectives::new(["close the editor"]);

    let exit = SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .run("write hello".to_string())
        .await;

    assert!(matches!(exit, SessionExit::Stopped));
    let queries = model.queries();
    assert_eq!(queries.len(), 4);

    assert_eq!(queries[1].objective, "write hello");
    assert_eq!(queries[1].conversation_len, 3);

    assert_eq!(queries[2].objective, "close the editor");
    assert_eq!(queries[2].session_token, None);
    assert_eq!(queries[2].conversation_len, 1);
    assert!(queries[2].system_prompt.contains("close the editor"));
    assert!(!queries[2].system_prompt.contains("write hello"));

    assert_eq!(queries[3].session_token, Some(SessionToken::new("tok-3")));
    assert!(os.calls().contains(&OsCall::Write("hello".to_string())));
    assert!(
        reporter
            .events()
            .contains(&"completed:typed hello".to_string())
    );
}

#[tokio::test]
async fn test_loop_count_resets_with_new_objective() {
    let (_os, reporter, context) = setup();
    let mut batches: Vec<_> = (0..8).map(|_| continue_batch()).collect();
    batches.push(Ok(vec![Action::done("first")]));
    batches.extend((0..20).map(|_| continue_batch()));
    let model = ScriptedModel::new(batches);
    let objectives = QueuedObjectives::new(["second objective"]);

    let exit = SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .run("first objective".to_string())
        .await;

    assert!(matches!(exit, SessionExit::LoopCapReached { loop_count: 11 }));
    // 9 queries for the first objective, 11 for the second
    assert_eq!(model.queries().len(), 20);
    assert!(reporter.errors().is_empty());
}

#[tokio::test]
async fn test_model_error_ends_loop() {
    let (os, reporter, context) = setup();
    let model = ScriptedModel::new([
        continue_batch(),
        Err(OperateError::http_status("upstream unavailable", 503)),
        continue_batch(),
    ]);
    let objectives = QueuedObjectives::default();

    let exit = SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .run("open mail".to_string())
        .await;

    assert!(exit.is_failure());
    assert_eq!(model.queries().len(), 2);
    assert_eq!(os.calls().len(), 1);
    assert_eq!(reporter.errors(), vec!["error:OPERATE_HTTP"]);
}

#[tokio::test]
async fn test_os_error_ends_loop() {
    let os = Arc::new(RecordingOs::failing_writes());
    let reporter = Arc::new(RecordingReporter::default());
    let context = test_context(os.clone(), reporter.clone());
    let model = ScriptedModel::new([Ok(vec![Action::write("hello")]), continue_batch()]);
    let objectives = QueuedObjectives::default();

    let exit = SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .run("open mail".to_string())
        .await;

    assert_eq!(exit.error().unwrap().error_code(), "OPERATE_AUTOMATION");
    assert_eq!(model.queries().len(), 1);
    assert_eq!(reporter.errors(), vec!["error:OPERATE_AUTOMATION"]);
}

#[tokio::test]
async fn test_objective_source_failure_after_done() {
    let (_os, reporter, context) = setup();
    let model = ScriptedModel::new([Ok(vec![Action::done("all set")])]);
    let objectives = QueuedObjectives::default();

    let exit = SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .run("open mail".to_string())
        .await;

    assert_eq!(exit.error().unwrap().error_code(), "OPERATE_OBJECTIVE");
    assert_eq!(reporter.errors(), vec!["error:OPERATE_OBJECTIVE"]);
}

#[tokio::test]
async fn test_unsupported_model_is_fatal() {
    let (os, reporter, context) = setup();
    let router = ModelRouter::new(&Config::default()).unwrap();
    let objectives = QueuedObjectives::default();

    let exit = SessionLoop::new(&context, &router, &objectives, "gpt-9")
        .run("open mail".to_string())
        .await;

    assert!(exit.error().unwrap().is_unsupported_model());
    assert!(os.calls().is_empty());
    assert_eq!(reporter.errors(), vec!["error:OPERATE_UNSUPPORTED_MODEL"]);
    assert_eq!(
        reporter.events().last().map(String::as_str),
        Some("exit:failed: Model not recognized: gpt-9")
    );
}

#[tokio::test]
async fn test_custom_prompt_replaces_default() {
    let (_os, _reporter, context) = setup();
    let model = ScriptedModel::new([Ok(vec![Action::new(operate_core::ActionKind::Unknown {
        operation: "x".to_string(),
        payload: serde_json::Value::Null,
    })])]);
    let objectives = QueuedObjectives::default();

    SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .with_custom_prompt(Some("Be brief. Goal: {objective}"))
        .run("open mail".to_string())
        .await;

    assert_eq!(model.queries()[0].system_prompt, "Be brief. Goal: open mail");
}

#[tokio::test]
async fn test_malformed_entry_after_done_still_hands_off() {
    let (_os, reporter, context) = setup();
    let model = ScriptedModel::new([
        decode_batch(r#"[{"operation": "done", "summary": "ok"}, {"operation": "write"}]"#),
        decode_batch(r#"[{"operation": "bogus"}]"#),
    ]);
    let objectives = QueuedObjectives::new(["next objective"]);

    let exit = SessionLoop::new(&context, &model, &objectives, "gpt-4o")
        .run("first objective".to_string())
        .await;

    assert!(matches!(exit, SessionExit::Stopped));
    let queries = model.queries();
    assert_eq!(queries.len(), 2);
    assert_eq!(queries[1].objective, "next objective");
    assert!(reporter.errors().is_empty());
}
