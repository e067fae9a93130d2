//! The auth backend seam.

use std::sync::Arc;

use async_trait::async_trait;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::AuthError;

/// Account returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Provider-assigned identifier.
    pub id: String,
    /// Email on record, if the provider shares it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// An authenticated session.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Token used to renew the session.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    /// Lifetime of `access_token` in seconds.
    pub expires_in: u64,
    /// Token scheme, usually `bearer`.
    pub token_type: String,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "[REDACTED]"))
            .field("expires_in", &self.expires_in)
            .field("token_type", &self.token_type)
            .finish()
    }
}

/// What the provider hands back for a sign-in or sign-up.
///
/// Either half may be missing: a sign-up that needs email confirmation
/// yields a user without a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// The account, if known.
    pub user: Option<User>,
    /// The session, if one was opened.
    pub session: Option<Session>,
}

impl AuthResponse {
    /// Returns `true` when a session was opened.
    pub fn has_session(&self) -> bool {
        self.session.is_some()
    }
}

/// Remote authentication service.
///
/// Implementations wrap a concrete backend. Errors are reported as values;
/// the actions turn them into domain errors.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Signs in with email and password.
    async fn sign_in_with_password(
        &self,
        email: String,
        password: SecretString,
    ) -> Result<AuthResponse, AuthError>;

    /// Registers a new account.
    async fn sign_up(
        &self,
        email: String,
        password: SecretString,
    ) -> Result<AuthResponse, AuthError>;
}

#[async_trait]
impl<P> AuthProvider for Arc<P>
where
    P: AuthProvider + ?Sized,
{
    async fn sign_in_with_password(
        &self,
        email: String,
        password: SecretString,
    ) -> Result<AuthResponse, AuthError> {
        (**self).sign_in_with_password(email, password).await
    }

    async fn sign_up(
        &self,
        email: String,
        password: SecretString,
    ) -> Result<AuthResponse, AuthError> {
        (**self).sign_up(email, password).await
    }
}
