//! REST helpers for the auth endpoints.
//!
//! Browser (`csr`): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning an error, since these calls only make
//! sense against the API origin.
//!
//! ERROR HANDLING
//! ==============
//! Callers get display-ready `String` errors so forms can show them directly.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::AppConfig;
use crate::session::Session;
#[cfg(feature = "csr")]
use super::types::{ApiMessage, Credentials, LoginResponse, Registration};

#[cfg(not(feature = "csr"))]
pub(crate) const UNAVAILABLE: &str = "not available outside the browser";

#[cfg(any(test, feature = "csr"))]
fn login_endpoint(config: &AppConfig) -> String {
    config.endpoint("login")
}

#[cfg(any(test, feature = "csr"))]
fn register_endpoint(config: &AppConfig) -> String {
    config.endpoint("register")
}

#[cfg(any(test, feature = "csr"))]
fn logout_endpoint(config: &AppConfig) -> String {
    config.endpoint("logout")
}

#[cfg(feature = "csr")]
async fn failure(resp: gloo_net::http::Response, action: &str) -> String {
    let status = resp.status();
    resp.json::<ApiMessage>()
        .await
        .unwrap_or_default()
        .failure_text(action, status)
}

/// Authenticate with `POST {api}/login` and return the session triple.
///
/// # Errors
///
/// Returns an error string if the request fails, credentials are rejected,
/// or the response carries no usable user id.
pub async fn login(config: &AppConfig, email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&login_endpoint(config))
            .json(&Credentials { email, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "login").await);
        }
        let body: LoginResponse = resp.json().await.map_err(|e| e.to_string())?;
        body.into_session()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, email, password);
        Err(UNAVAILABLE.to_owned())
    }
}

/// Create an account with `POST {api}/register`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server refuses the
/// registration (missing fields, email already in use).
pub async fn register(config: &AppConfig, name: &str, email: &str, password: &str) -> Result<(), String> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(&register_endpoint(config))
            .json(&Registration { name, email, password })
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(failure(resp, "registration").await);
        }
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, name, email, password);
        Err(UNAVAILABLE.to_owned())
    }
}

/// End the server-side session with `POST {api}/logout`. Best effort.
pub async fn logout(config: &AppConfig) {
    #[cfg(feature = "csr")]
    {
        match gloo_net::http::Request::post(&logout_endpoint(config)).send().await {
            Ok(resp) if !resp.ok() => log::debug!("server logout returned {}", resp.status()),
            Ok(_) => {}
            Err(e) => log::warn!("server logout failed: {e}"),
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
}
