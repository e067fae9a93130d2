//! Login and signup handlers and the runners that wrap them.

use async_trait::async_trait;
use safeact_action::{ActionHandler, ActionRunner, ActionState};
use safeact_validator::schema::ObjectSchema;

use crate::error::AuthError;
use crate::form::{LoginForm, SignupForm, login_schema, signup_schema};
use crate::provider::{AuthProvider, AuthResponse};

/// Registry name of the login action.
pub const LOGIN_ACTION: &str = "login";
/// Registry name of the signup action.
pub const SIGNUP_ACTION: &str = "signup";

/// Message of a successful login.
pub const LOGIN_SUCCESS: &str = "Login success!";
/// Message of a failed login.
pub const LOGIN_ERROR: &str = "Login error!";
/// Message of a successful signup.
pub const SIGNUP_SUCCESS: &str = "Signup success!";
/// Message of a failed signup.
pub const SIGNUP_ERROR: &str = "Signup error!";

/// Error text when the provider accepts a login but opens no session.
pub const NO_SESSION_ERROR: &str = "No session was returned";

/// Runner type returned by [`login_action`].
pub type LoginAction<P> = ActionRunner<ObjectSchema<LoginForm>, LoginHandler<P>>;
/// Runner type returned by [`signup_action`].
pub type SignupAction<P> = ActionRunner<ObjectSchema<SignupForm>, SignupHandler<P>>;

/// Signs a user in. Succeeds only when the provider opens a session.
#[derive(Debug)]
pub struct LoginHandler<P> {
    provider: P,
}

impl<P> LoginHandler<P> {
    /// Uses `provider` for sign-in.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: AuthProvider> ActionHandler for LoginHandler<P> {
    type Input = LoginForm;
    type Output = AuthResponse;

    async fn handle(&self, form: LoginForm) -> ActionState<AuthResponse> {
        match self
            .provider
            .sign_in_with_password(form.email, form.password)
            .await
        {
            Ok(response) if response.has_session() => ActionState::success(response, LOGIN_SUCCESS),
            Ok(_) => ActionState::domain_error(NO_SESSION_ERROR, LOGIN_ERROR),
            Err(err) => provider_failure(&err, LOGIN_ERROR),
        }
    }
}

/// Registers a user. A response without a session still counts as success.
#[derive(Debug)]
pub struct SignupHandler<P> {
    provider: P,
}

impl<P> SignupHandler<P> {
    /// Uses `provider` for sign-up.
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: AuthProvider> ActionHandler for SignupHandler<P> {
    type Input = SignupForm;
    type Output = AuthResponse;

    async fn handle(&self, form: SignupForm) -> ActionState<AuthResponse> {
        match self.provider.sign_up(form.email, form.password).await {
            Ok(response) => ActionState::success(response, SIGNUP_SUCCESS),
            Err(err) => provider_failure(&err, SIGNUP_ERROR),
        }
    }
}

fn provider_failure(err: &AuthError, message: &str) -> ActionState<AuthResponse> {
    if err.is_retryable() {
        tracing::warn!(error = %err, "auth provider unavailable");
    } else {
        tracing::debug!(error = %err, "auth provider rejected request");
    }
    ActionState::domain_error_with_status(err.to_string(), message, err.status())
}

/// Login action: [`login_schema`] in front of a [`LoginHandler`].
pub fn login_action<P: AuthProvider>(provider: P) -> LoginAction<P> {
    ActionRunner::new(LOGIN_ACTION, login_schema(), LoginHandler::new(provider))
}

/// Signup action: [`signup_schema`] in front of a [`SignupHandler`].
pub fn signup_action<P: AuthProvider>(provider: P) -> SignupAction<P> {
    ActionRunner::new(SIGNUP_ACTION, signup_schema(), SignupHandler::new(provider))
}
