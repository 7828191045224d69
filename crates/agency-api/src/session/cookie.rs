//! [`SessionStore`] over axum-extra's `SignedCookieJar`.
//!
//! The session and any pending flash messages live in two HMAC-signed
//! cookies. A cookie whose signature or payload does not check out is
//! treated as absent.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::{IntoResponseParts, ResponseParts};
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::{Cookie, SameSite};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use agency_core::{FlashMessage, Session, SessionStore};

use super::codec;
use crate::state::AppState;

/// Name of the cookie holding the session.
pub const SESSION_COOKIE: &str = "agency_session";
/// Name of the cookie holding queued flash messages.
pub const FLASH_COOKIE: &str = "agency_flash";

/// Per-request session handle.
///
/// Extract it in a handler, mutate it, and return it as part of the
/// response so the cookie changes reach the client.
#[derive(Debug, Clone)]
pub struct CookieSessionStore {
    jar: SignedCookieJar,
    secure: bool,
}

impl CookieSessionStore {
    /// Wraps a signed jar.
    pub fn new(jar: SignedCookieJar, secure: bool) -> Self {
        Self { jar, secure }
    }

    /// Queues a message for the next rendered page.
    pub fn push_flash(&mut self, message: FlashMessage) {
        let mut queued = self.take_flashes();
        queued.push(message);
        self.write(FLASH_COOKIE, &queued);
    }

    /// Returns and discards all queued flash messages.
    pub fn take_flashes(&mut self) -> Vec<FlashMessage> {
        if self.jar.get(FLASH_COOKIE).is_none() {
            return Vec::new();
        }
        let queued = self.read(FLASH_COOKIE).unwrap_or_default();
        self.remove(FLASH_COOKIE);
        queued
    }

    fn read<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let cookie = self.jar.get(name)?;
        match codec::decode(cookie.value()) {
            Ok(value) => Some(value),
            Err(e) => {
                debug!(cookie = name, error = %e, "Ignoring undecodable cookie");
                None
            }
        }
    }

    fn write<T: Serialize>(&mut self, name: &'static str, value: &T) {
        let encoded = match codec::encode(value) {
            Ok(encoded) => encoded,
            Err(e) => {
                error!(cookie = name, error = %e, "Failed to encode cookie");
                return;
            }
        };

        let cookie = Cookie::build((name, encoded))
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .secure(self.secure);
        self.jar = self.jar.clone().add(cookie);
    }

    fn remove(&mut self, name: &'static str) {
        self.jar = self.jar.clone().remove(Cookie::build(name).path("/"));
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self) -> Option<Session> {
        self.read(SESSION_COOKIE)
    }

    fn set(&mut self, session: Session) {
        self.write(SESSION_COOKIE, &session);
    }

    fn clear(&mut self) {
        self.remove(SESSION_COOKIE);
    }
}

impl FromRequestParts<AppState> for CookieSessionStore {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar: SignedCookieJar = SignedCookieJar::from_request_parts(parts, state).await?;
        Ok(Self::new(jar, state.secure_cookies()))
    }
}

impl IntoResponseParts for CookieSessionStore {
    type Error = Infallible;

    fn into_response_parts(self, res: ResponseParts) -> Result<ResponseParts, Self::Error> {
        self.jar.into_response_parts(res)
    }
}
