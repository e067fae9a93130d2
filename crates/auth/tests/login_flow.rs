//! Login and signup driven from a client controller through the registry.

use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use safeact_action::{ActionKind, ActionRegistry, RemoteAction, StatusCode, Typed};
use safeact_auth::{
    AuthError, AuthProvider, AuthResponse, Credentials, LOGIN_ACTION, SIGNUP_ACTION, Session, User,
    login_action, signup_action,
};
use safeact_client::{ActionController, Settlement};
use secrecy::{ExposeSecret, SecretString};

/// Knows one account; refuses everything else.
struct SingleUser;

fn session() -> Session {
    Session {
        access_token: "access".into(),
        refresh_token: Some("refresh".into()),
        expires_in: 3600,
        token_type: "bearer".into(),
    }
}

#[async_trait]
impl AuthProvider for SingleUser {
    async fn sign_in_with_password(
        &self,
        email: String,
        password: SecretString,
    ) -> Result<AuthResponse, AuthError> {
        if email == "a@b.co" && password.expose_secret() == "hunter22" {
            Ok(AuthResponse {
                user: Some(User {
                    id: "u1".into(),
                    email: Some(email),
                }),
                session: Some(session()),
            })
        } else {
            Err(AuthError::rejected("Invalid login credentials"))
        }
    }

    async fn sign_up(
        &self,
        email: String,
        _password: SecretString,
    ) -> Result<AuthResponse, AuthError> {
        if email == "a@b.co" {
            return Err(AuthError::rejected("User already registered"));
        }
        Ok(AuthResponse {
            user: Some(User {
                id: "u2".into(),
                email: Some(email),
            }),
            session: None,
        })
    }
}

type Remote = Typed<RemoteAction<Arc<ActionRegistry>, AuthResponse>, Credentials>;

fn remote(name: &str) -> Remote {
    let mut registry = ActionRegistry::new();
    registry.register(LOGIN_ACTION, login_action(SingleUser));
    registry.register(SIGNUP_ACTION, signup_action(SingleUser));
    Typed::new(RemoteAction::new(Arc::new(registry), name))
}

#[tokio::test]
async fn login_success_reaches_controller_state() {
    let controller = ActionController::new(remote(LOGIN_ACTION));

    let settlement = controller
        .execute(Credentials::new("a@b.co", "hunter22"))
        .await;

    let response = match settlement {
        Settlement::Success(response) => response,
        other => panic!("expected success, got {other:?}"),
    };
    assert_eq!(response.session, Some(session()));

    let state = controller.state();
    assert_eq!(state.message.as_deref(), Some("Login success!"));
    assert_eq!(state.status_code, Some(StatusCode::OK));
    assert!(state.is_success);
    assert!(!state.is_loading());
}

#[tokio::test]
async fn empty_form_shows_required_on_both_fields() {
    let controller = ActionController::new(remote(LOGIN_ACTION));

    let settlement = controller.execute(Credentials::new("", "")).await;
    assert!(matches!(settlement, Settlement::Invalid(_)));

    let state = controller.state();
    let errors = state.field_errors.expect("field errors");
    assert_eq!(errors.get("email"), Some(&["Required".to_owned()][..]));
    assert_eq!(errors.get("password"), Some(&["Required".to_owned()][..]));
    assert_eq!(state.status_code, Some(StatusCode::BAD_REQUEST));
    assert_eq!(state.message.as_deref(), Some("Bad request"));
    assert_eq!(state.error, None);
}

#[tokio::test]
async fn wrong_password_is_login_error() {
    let controller = ActionController::new(remote(LOGIN_ACTION));

    let settlement = controller
        .execute(Credentials::new("a@b.co", "wrong"))
        .await;
    assert_eq!(
        settlement,
        Settlement::Failed("Invalid login credentials".to_owned())
    );

    let state = controller.state();
    assert_eq!(state.kind, Some(ActionKind::Error));
    assert_eq!(state.message.as_deref(), Some("Login error!"));
    assert!(!state.is_success);
}

#[tokio::test]
async fn signup_flows() {
    let controller = ActionController::new(remote(SIGNUP_ACTION));

    let settlement = controller
        .execute(Credentials::new("new@b.co", "longenough"))
        .await;
    assert!(settlement.is_success());
    assert_eq!(
        controller.state().message.as_deref(),
        Some("Signup success!")
    );

    let settlement = controller
        .execute(Credentials::new("a@b.co", "longenough"))
        .await;
    assert_eq!(
        settlement,
        Settlement::Failed("User already registered".to_owned())
    );
    assert_eq!(controller.state().message.as_deref(), Some("Signup error!"));
}
