//! Session handling seam for the storefront's auth provider.
//!
//! The catalog itself is anonymous; sessions only matter for the sign-in and
//! sign-out routes. The provider is abstracted behind [`SessionProvider`] and
//! cookies travel through a [`CookieStore`], so no particular auth backend is
//! baked in.
//!
//! # What this module does NOT handle:
//! - Talking to an auth backend (implementors of [`SessionProvider`] do)
//! - Interpreting session contents; [`Session`] is opaque here
//!
//! # Invariants
//! - Every route outcome is a `303 See Other` redirect; auth failures are
//!   logged and never surfaced as errors
//! - Outgoing cookies default to `path=/` unless the provider set a path

use std::fmt;

use secrecy::SecretString;
use thiserror::Error;
use tracing::{debug, warn};

/// Where the callback route sends the user after a failed sign-in.
pub const AUTH_ERROR_PATH: &str = "/auth/error";

/// Default landing path.
pub const HOME_PATH: &str = "/";

/// Response headers the renderer passes through from provider responses.
const FORWARDED_RESPONSE_HEADERS: &[&str] = &["content-range", "x-supabase-api-version"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieOptions {
    pub path: Option<String>,
    pub max_age: Option<i64>,
    pub http_only: Option<bool>,
    pub secure: Option<bool>,
    pub same_site: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub options: CookieOptions,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            options: CookieOptions::default(),
        }
    }
}

/// Read and write access to the cookies of one request.
pub trait CookieStore {
    fn get_all(&self) -> Vec<Cookie>;
    fn set_all(&mut self, cookies: Vec<Cookie>);
}

/// Cookie relay for a single request/response pair.
#[derive(Debug, Clone, Default)]
pub struct RequestCookies {
    incoming: Vec<Cookie>,
    outgoing: Vec<Cookie>,
}

impl RequestCookies {
    pub fn new(incoming: Vec<Cookie>) -> Self {
        Self {
            incoming,
            outgoing: Vec::new(),
        }
    }

    /// Cookies to attach to the response.
    pub fn outgoing(&self) -> &[Cookie] {
        &self.outgoing
    }
}

impl CookieStore for RequestCookies {
    fn get_all(&self) -> Vec<Cookie> {
        self.incoming.clone()
    }

    fn set_all(&mut self, cookies: Vec<Cookie>) {
        for mut cookie in cookies {
            if cookie.options.path.is_none() {
                cookie.options.path = Some(HOME_PATH.to_string());
            }
            self.outgoing.push(cookie);
        }
    }
}

/// Authenticated session as issued by the provider.
#[derive(Clone)]
pub struct Session {
    pub user_id: String,
    pub email: Option<String>,
    pub access_token: SecretString,
    /// Unix timestamp, seconds.
    pub expires_at: Option<u64>,
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("user_id", &self.user_id)
            .field("email", &self.email)
            .field("access_token", &"<redacted>")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Code exchange failed: {0}")]
    Exchange(String),

    #[error("Sign out failed: {0}")]
    SignOut(String),

    #[error("Session lookup failed: {0}")]
    Session(String),
}

/// Narrow view of an auth backend.
#[allow(async_fn_in_trait)]
pub trait SessionProvider {
    fn get_all_cookies(&self) -> Vec<Cookie>;

    fn set_cookies(&mut self, cookies: Vec<Cookie>);

    /// Current session, refreshed by the provider if needed.
    async fn get_session(&mut self) -> Result<Option<Session>, AuthError>;

    async fn exchange_code_for_session(&mut self, code: &str) -> Result<Session, AuthError>;

    async fn sign_out(&mut self) -> Result<(), AuthError>;
}

/// A `303 See Other` redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    pub status: u16,
    pub location: String,
}

impl Redirect {
    pub fn see_other(location: impl Into<String>) -> Self {
        Self {
            status: 303,
            location: location.into(),
        }
    }
}

/// OAuth callback: exchange `code` for a session, then go to `next`.
///
/// A missing or empty code, or a failed exchange, redirects to [`AUTH_ERROR_PATH`].
pub async fn auth_callback<P: SessionProvider>(
    provider: &mut P,
    code: Option<&str>,
    next: Option<&str>,
) -> Redirect {
    let Some(code) = code.filter(|c| !c.is_empty()) else {
        debug!("Auth callback without code");
        return Redirect::see_other(AUTH_ERROR_PATH);
    };

    match provider.exchange_code_for_session(code).await {
        Ok(session) => {
            debug!(user_id = %session.user_id, "Signed in");
            Redirect::see_other(next.unwrap_or(HOME_PATH))
        }
        Err(e) => {
            warn!(error = %e, "Auth code exchange failed");
            Redirect::see_other(AUTH_ERROR_PATH)
        }
    }
}

/// Sign out and go home. A provider failure is logged only.
pub async fn logout<P: SessionProvider>(provider: &mut P) -> Redirect {
    if let Err(e) = provider.sign_out().await {
        warn!(error = %e, "Sign out failed");
    }
    Redirect::see_other(HOME_PATH)
}

/// Whether a provider response header is passed through to the client.
pub fn is_forwarded_response_header(name: &str) -> bool {
    FORWARDED_RESPONSE_HEADERS
        .iter()
        .any(|h| h.eq_ignore_ascii_case(name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_all_defaults_path() {
        let mut store = RequestCookies::default();
        let mut scoped = Cookie::new("b", "2");
        scoped.options.path = Some("/account".to_string());
        store.set_all(vec![Cookie::new("a", "1"), scoped]);

        let paths: Vec<Option<&str>> = store
            .outgoing()
            .iter()
            .map(|c| c.options.path.as_deref())
            .collect();
        assert_eq!(paths, vec![Some("/"), Some("/account")]);
    }

    #[test]
    fn test_get_all_returns_incoming() {
        let store = RequestCookies::new(vec![Cookie::new("sb-token", "abc")]);
        assert_eq!(store.get_all(), vec![Cookie::new("sb-token", "abc")]);
        assert!(store.outgoing().is_empty());
    }

    #[test]
    fn test_forwarded_headers() {
        assert!(is_forwarded_response_header("content-range"));
        assert!(is_forwarded_response_header("X-Supabase-Api-Version"));
        assert!(!is_forwarded_response_header("set-cookie"));
        assert!(!is_forwarded_response_header("content-type"));
    }

    #[test]
    fn test_session_debug_redacts_token() {
        let session = Session {
            user_id: "u1".to_string(),
            email: None,
            access_token: SecretString::new("super-secret".to_string().into()),
            expires_at: None,
        };
        let debug = format!("{:?}", session);
        assert!(!debug.contains("super-secret"));
    }
}
