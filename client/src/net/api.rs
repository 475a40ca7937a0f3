//! REST client for the property backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`ApiError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, 5xx statuses, and undecodable success bodies surface
//! as `ApiError`. A 4xx reply is a rejection, not an error: it is folded into
//! the endpoint's response type with the server's `message` when one exists.
//! Auth actions rely on this split to tell `NetworkError` from `AuthRejected`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use serde::de::DeserializeOwned;

#[cfg(any(test, feature = "hydrate"))]
use super::types::Envelope;
use super::types::{
    AuthResponse, ForgotPasswordRequest, ForgotPasswordResponse, LoginRequest, Property, RegisterRequest,
    ResetPasswordRequest,
};
use crate::config;

/// Failure talking to the backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),

    /// The server answered with a status that carries no usable body.
    #[error("server responded with status {0}")]
    Status(u16),

    /// A success status arrived with a body that does not decode.
    #[error("response parse failed: {0}")]
    Decode(String),

    /// The server declined the request and said why.
    #[error("{0}")]
    Rejected(String),

    /// HTTP is not available in this build (server-side rendering).
    #[error("not available on server")]
    Unavailable,
}

/// The auth endpoints the session core depends on.
///
/// Implemented by [`HttpApi`] in the browser and by scripted mocks in tests.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `POST /auth/login`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when no usable reply was received.
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/register`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when no usable reply was received.
    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError>;

    /// `POST /auth/forgotpassword`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when no usable reply was received.
    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<ForgotPasswordResponse, ApiError>;

    /// `PUT /auth/resetpassword/{reset_token}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when no usable reply was received.
    async fn reset_password(&self, reset_token: &str, request: &ResetPasswordRequest)
    -> Result<AuthResponse, ApiError>;
}

/// HTTP implementation rooted at the configured API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpApi {
    base_url: String,
}

impl Default for HttpApi {
    fn default() -> Self {
        Self::new(config::api_base_url())
    }
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    fn url(&self, path: &str) -> String {
        config::endpoint(&self.base_url, path)
    }

    /// `GET /properties`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the listing is rejected.
    pub async fn fetch_properties(&self) -> Result<Vec<Property>, ApiError> {
        self.get_data(&self.url("/properties")).await
    }

    /// `GET /properties/search?…` with a query built by `PropertyFilters`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the search is rejected.
    pub async fn search_properties(&self, query: &str) -> Result<Vec<Property>, ApiError> {
        self.get_data(&search_url(&self.base_url, query)).await
    }

    /// `GET /properties/{id}`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the property is missing.
    pub async fn fetch_property(&self, id: &str) -> Result<Property, ApiError> {
        self.get_data(&property_url(&self.base_url, id)).await
    }

    /// `DELETE /properties/{id}` with the session's bearer token.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server refuses.
    pub async fn delete_property(&self, token: &str, id: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::delete(&property_url(&self.base_url, id))
                .header("Authorization", &bearer(token))
                .build();
            let (status, body) = read_reply(request).await?;
            classify_ack(status, &body, "Failed to delete property. You may not own it.")
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id);
            Err(ApiError::Unavailable)
        }
    }

    /// Create (`POST /properties`) or update (`PUT /properties/{id}`) a
    /// listing from multipart form fields.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] if the request fails or the server refuses.
    pub async fn save_property(&self, token: &str, id: Option<&str>, fields: &[(String, String)]) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
            for (name, value) in fields {
                form.append_with_str(name, value)
                    .map_err(|_| ApiError::Transport(format!("could not encode field {name}")))?;
            }
            let builder = match id {
                Some(id) => gloo_net::http::Request::put(&property_url(&self.base_url, id)),
                None => gloo_net::http::Request::post(&self.url("/properties")),
            };
            let request = builder.header("Authorization", &bearer(token)).body(form);
            let (status, body) = read_reply(request).await?;
            classify_ack(status, &body, "Failed to save property. Please check required fields.")
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, id, fields);
            Err(ApiError::Unavailable)
        }
    }

    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let request = gloo_net::http::Request::get(url).build();
            let (status, body) = read_reply(request).await?;
            classify_envelope(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = url;
            Err(ApiError::Unavailable)
        }
    }
}

impl AuthApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.url("/auth/login")).json(request);
            send_classified(req, AuthResponse::rejected).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.url("/auth/register")).json(request);
            send_classified(req, AuthResponse::rejected).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<ForgotPasswordResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::post(&self.url("/auth/forgotpassword")).json(request);
            send_classified(req, |message| ForgotPasswordResponse { success: false, message, reset_token: None }).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Unavailable)
        }
    }

    async fn reset_password(
        &self,
        reset_token: &str,
        request: &ResetPasswordRequest,
    ) -> Result<AuthResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let req = gloo_net::http::Request::put(&reset_password_url(&self.base_url, reset_token)).json(request);
            send_classified(req, AuthResponse::rejected).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (reset_token, request);
            Err(ApiError::Unavailable)
        }
    }
}

#[cfg(feature = "hydrate")]
async fn read_reply(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<(u16, String), ApiError> {
    let resp = request
        .map_err(|e| ApiError::Transport(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
async fn send_classified<T: DeserializeOwned>(
    request: Result<gloo_net::http::Request, gloo_net::Error>,
    rejected: impl FnOnce(Option<String>) -> T,
) -> Result<T, ApiError> {
    let (status, body) = read_reply(request).await?;
    classify_reply(status, &body, rejected)
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

fn property_url(base: &str, id: &str) -> String {
    config::endpoint(base, &format!("/properties/{}", urlencoding::encode(id)))
}

fn search_url(base: &str, query: &str) -> String {
    let path = config::endpoint(base, "/properties/search");
    if query.is_empty() { path } else { format!("{path}?{query}") }
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_password_url(base: &str, reset_token: &str) -> String {
    config::endpoint(base, &format!("/auth/resetpassword/{}", urlencoding::encode(reset_token)))
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
}

#[cfg(any(test, feature = "hydrate"))]
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Sort a raw reply into a decoded body, a rejection, or an error.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_reply<T: DeserializeOwned>(
    status: u16,
    body: &str,
    rejected: impl FnOnce(Option<String>) -> T,
) -> Result<T, ApiError> {
    match status {
        200..=299 => serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string())),
        400..=499 => Ok(rejected(error_message(body))),
        _ => Err(ApiError::Status(status)),
    }
}

/// Unwrap a `{success, data}` reply.
#[cfg(any(test, feature = "hydrate"))]
fn classify_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match status {
        200..=299 => {
            let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
            match (envelope.success, envelope.data) {
                (true, Some(data)) => Ok(data),
                _ => Err(ApiError::Rejected(envelope.message.unwrap_or_else(|| "Not found".to_owned()))),
            }
        }
        400..=499 => Err(ApiError::Rejected(
            error_message(body).unwrap_or_else(|| format!("request failed: {status}")),
        )),
        _ => Err(ApiError::Status(status)),
    }
}

/// Accept a mutation reply. A 2xx body only counts as a refusal when it
/// explicitly says `success: false`.
#[cfg(any(test, feature = "hydrate"))]
fn classify_ack(status: u16, body: &str, fallback: &str) -> Result<(), ApiError> {
    match status {
        200..=299 => match serde_json::from_str::<Envelope<serde_json::Value>>(body) {
            Ok(envelope) if !envelope.success => {
                Err(ApiError::Rejected(envelope.message.unwrap_or_else(|| fallback.to_owned())))
            }
            _ => Ok(()),
        },
        400..=499 => Err(ApiError::Rejected(error_message(body).unwrap_or_else(|| fallback.to_owned()))),
        _ => Err(ApiError::Status(status)),
    }
}
