//! Auth actions: talk to the backend, then update the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call these from `spawn_local` tasks with an `HttpApi` and the
//! session signal. Every remote failure is converted to [`AuthError`] here;
//! the session is written only after a complete success reply, so a
//! rejected or failed call leaves it exactly as it was.
//!
//! The identity applied to the session is the `user` object from the reply
//! body. Token claims are never decoded for authorization.

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

use crate::net::api::{ApiError, AuthApi};
use crate::net::types::{
    AuthResponse, ForgotPasswordRequest, LoginRequest, RegisterRequest, ResetPasswordRequest,
};
use crate::state::session::{Credentials, SessionSink};

pub const LOGIN_REJECTED: &str = "Invalid email or password";
pub const REGISTER_REJECTED: &str = "Registration failed";
pub const RESET_REJECTED: &str = "Password reset failed";
pub const FORGOT_REJECTED: &str = "Request failed";
pub const MIN_PASSWORD_LEN: usize = 6;

/// Why an auth action did not complete.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// Form input failed local checks; nothing was sent.
    #[error("{0}")]
    InvalidInput(String),

    /// The exchange with the backend did not complete.
    #[error("network error: {0}")]
    Network(String),

    /// The backend refused the credentials or the registration.
    #[error("{0}")]
    Rejected(String),
}

impl AuthError {
    /// Text suitable for a form notice.
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidInput(msg) | Self::Rejected(msg) => msg.clone(),
            Self::Network(_) => "Something went wrong. Please try again.".to_owned(),
        }
    }
}

impl From<ApiError> for AuthError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Rejected(msg) => Self::Rejected(msg),
            other => Self::Network(other.to_string()),
        }
    }
}

/// Registration form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub contact: String,
}

/// Result of completing a password reset.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The reply carried a full identity; the user is now signed in.
    SignedIn(Credentials),
    /// The password changed but the reply had no identity; sign in again.
    PasswordChanged,
}

/// Check login input. The email is trimmed; the password is sent verbatim but
/// must not be blank.
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] if either field is empty.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, AuthError> {
    let email = email.trim();
    if email.is_empty() || password.trim().is_empty() {
        return Err(AuthError::InvalidInput("Enter both email and password.".to_owned()));
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Check registration input.
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] if a field is empty or the password is
/// shorter than [`MIN_PASSWORD_LEN`].
pub fn validate_registration(form: &RegistrationForm) -> Result<RegisterRequest, AuthError> {
    let name = form.name.trim();
    let email = form.email.trim();
    let contact = form.contact.trim();
    if name.is_empty() || email.is_empty() || contact.is_empty() || form.password.trim().is_empty() {
        return Err(AuthError::InvalidInput("Fill in every field.".to_owned()));
    }
    check_password_length(&form.password)?;
    Ok(RegisterRequest {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        contact: contact.to_owned(),
    })
}

/// Check a new password and its confirmation.
///
/// # Errors
///
/// Returns [`AuthError::InvalidInput`] if they differ or the password is too short.
pub fn validate_new_password(password: &str, confirm: &str) -> Result<ResetPasswordRequest, AuthError> {
    if password != confirm {
        return Err(AuthError::InvalidInput("Passwords do not match!".to_owned()));
    }
    check_password_length(password)?;
    Ok(ResetPasswordRequest { password: password.to_owned() })
}

fn check_password_length(password: &str) -> Result<(), AuthError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(AuthError::InvalidInput(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }
    Ok(())
}

/// Sign in with email and password.
///
/// # Errors
///
/// Returns [`AuthError`] on invalid input, transport failure, or rejection.
/// The session is untouched in every error case.
pub async fn login<A, K>(api: &A, session: &K, email: &str, password: &str) -> Result<Credentials, AuthError>
where
    A: AuthApi,
    K: SessionSink + ?Sized,
{
    let request = validate_login(email, password)?;
    let reply = api.login(&request).await.inspect_err(|e| log::warn!("login request failed: {e}"))?;
    let credentials = accept(reply, LOGIN_REJECTED)?;
    session.apply_login(credentials.token.clone(), credentials.identity.clone());
    log::debug!("signed in as {}", credentials.identity.id);
    Ok(credentials)
}

/// Create an account. A successful registration signs the new user in.
///
/// # Errors
///
/// Returns [`AuthError`] on invalid input, transport failure, or rejection
/// (for example a duplicate email). The session is untouched on error.
pub async fn register<A, K>(api: &A, session: &K, form: &RegistrationForm) -> Result<Credentials, AuthError>
where
    A: AuthApi,
    K: SessionSink + ?Sized,
{
    let request = validate_registration(form)?;
    let reply = api.register(&request).await.inspect_err(|e| log::warn!("register request failed: {e}"))?;
    let credentials = accept(reply, REGISTER_REJECTED)?;
    session.apply_login(credentials.token.clone(), credentials.identity.clone());
    log::debug!("registered and signed in as {}", credentials.identity.id);
    Ok(credentials)
}

/// Ask the backend to start a password reset for `email`.
///
/// Returns the reset token when the backend echoes it (development servers).
///
/// # Errors
///
/// Returns [`AuthError`] on empty input, transport failure, or rejection.
pub async fn request_password_reset<A: AuthApi>(api: &A, email: &str) -> Result<Option<String>, AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::InvalidInput("Enter your email first.".to_owned()));
    }
    let reply = api.forgot_password(&ForgotPasswordRequest { email: email.to_owned() }).await?;
    if !reply.success {
        return Err(AuthError::Rejected(reply.message.unwrap_or_else(|| FORGOT_REJECTED.to_owned())));
    }
    Ok(reply.reset_token.filter(|t| !t.is_empty()))
}

/// Set a new password using an emailed reset token.
///
/// # Errors
///
/// Returns [`AuthError`] on mismatched/short passwords, a missing reset
/// token, transport failure, or rejection.
pub async fn reset_password<A, K>(
    api: &A,
    session: &K,
    reset_token: &str,
    password: &str,
    confirm: &str,
) -> Result<ResetOutcome, AuthError>
where
    A: AuthApi,
    K: SessionSink + ?Sized,
{
    if reset_token.trim().is_empty() {
        return Err(AuthError::InvalidInput("Invalid reset link".to_owned()));
    }
    let request = validate_new_password(password, confirm)?;
    let reply = api.reset_password(reset_token.trim(), &request).await?;
    if !reply.success {
        return Err(AuthError::Rejected(reply.message.unwrap_or_else(|| RESET_REJECTED.to_owned())));
    }
    if reply.user.is_none() {
        return Ok(ResetOutcome::PasswordChanged);
    }
    let credentials = accept(reply, RESET_REJECTED)?;
    session.apply_login(credentials.token.clone(), credentials.identity.clone());
    Ok(ResetOutcome::SignedIn(credentials))
}

/// Turn a reply into credentials, or the matching error.
fn accept(reply: AuthResponse, fallback: &str) -> Result<Credentials, AuthError> {
    if !reply.success {
        let message = reply.message.filter(|m| !m.trim().is_empty()).unwrap_or_else(|| fallback.to_owned());
        return Err(AuthError::Rejected(message));
    }
    let token = reply
        .token
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AuthError::Network("success reply without token".to_owned()))?;
    let identity = reply.user.ok_or_else(|| AuthError::Network("success reply without user".to_owned()))?;
    Ok(Credentials { token, identity })
}
