//! End-to-end: typed input → registry → runner → envelope → decoded state.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use pretty_assertions::assert_eq;
use rstest::rstest;
use safeact_action::prelude::*;
use safeact_action::RemoteAction;
use safeact_validator::prelude::*;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Serialize, Deserialize)]
struct Credentials {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Session {
    user: String,
}

fn login_runner(
    calls: Arc<AtomicUsize>,
) -> ActionRunner<ObjectSchema<Credentials>, impl ActionHandler<Input = Credentials, Output = Session>>
{
    ActionRunner::new(
        "login",
        ObjectSchema::<Credentials>::new()
            .field(
                "email",
                StringField::new()
                    .required()
                    .rule(email().with_message("Invalid email")),
            )
            .field("password", StringField::new().required()),
        handler_fn(move |creds: Credentials| {
            let calls = Arc::clone(&calls);
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                if creds.password == "hunter22" {
                    ActionState::success(Session { user: creds.email }, "Login success!")
                } else {
                    ActionState::domain_error("Invalid login credentials", "Login error!")
                }
            }
        }),
    )
}

#[tokio::test]
async fn empty_email_is_rejected_before_handler() {
    let calls = Arc::new(AtomicUsize::new(0));
    let runner = login_runner(Arc::clone(&calls));

    let envelope = ActionEnvelope::from(runner.run(&json!({"email": "", "password": "x"})).await);

    assert_eq!(
        serde_json::to_value(&envelope).unwrap(),
        json!({
            "type": "error",
            "success": false,
            "statusCode": 400,
            "message": "Bad request",
            "fieldErrors": {"email": ["Required"]}
        })
    );
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[rstest]
#[case(json!({}))]
#[case(json!({"email": "nope", "password": "x"}))]
#[case(json!({"email": "a@b.co"}))]
#[case(json!([]))]
#[tokio::test]
async fn invalid_inputs_never_reach_handler(#[case] input: Value) {
    let calls = Arc::new(AtomicUsize::new(0));
    let runner = login_runner(Arc::clone(&calls));

    let first = runner.run(&input).await;
    let second = runner.run(&input).await;

    assert!(!first.is_success());
    assert_eq!(first.status(), StatusCode::BAD_REQUEST);
    assert_eq!(first.field_errors(), second.field_errors());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn domain_failure_has_error_and_no_data() {
    let runner = login_runner(Arc::new(AtomicUsize::new(0)));
    let state = runner
        .run(&json!({"email": "a@b.co", "password": "wrong"}))
        .await;

    assert_eq!(state.error(), Some("Invalid login credentials"));
    assert!(state.data().is_none());
    assert!(state.field_errors().is_none());
}

#[tokio::test]
async fn typed_call_through_registry_and_remote() {
    let mut registry = ActionRegistry::new();
    registry.register("login", login_runner(Arc::new(AtomicUsize::new(0))));

    let remote: Typed<_, Credentials> =
        Typed::new(RemoteAction::<_, Session>::new(Arc::new(registry), "login"));

    let state = remote
        .call(Credentials {
            email: "a@b.co".into(),
            password: "hunter22".into(),
        })
        .await
        .unwrap();

    assert_eq!(
        state,
        ActionState::success(
            Session {
                user: "a@b.co".into()
            },
            "Login success!"
        )
    );
}
