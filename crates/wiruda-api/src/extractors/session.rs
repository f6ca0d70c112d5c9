//! Session extractor
//!
//! Resolves the caller's profile from a bearer token or the session cookie.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, HeaderMap},
};
use axum_extra::{
    extract::CookieJar,
    headers::{authorization::Bearer, Authorization, HeaderMapExt},
};
use wiruda_core::entities::Profile;
use wiruda_service::services::SessionService;

use crate::response::ApiError;
use crate::state::AppState;

/// Cookie carrying the access token for browser sessions
pub const SESSION_COOKIE: &str = "wiruda_session";

/// Access token from `Authorization: Bearer`, falling back to the session cookie
pub fn session_token(headers: &HeaderMap) -> Option<String> {
    if let Some(Authorization(bearer)) = headers.typed_get::<Authorization<Bearer>>() {
        return Some(bearer.token().to_string());
    }

    CookieJar::from_headers(headers)
        .get(SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}

/// The caller's profile, or `None` for anonymous requests
///
/// Never rejects for a missing or stale token: access decisions belong
/// to the services, which receive the profile explicitly.
#[derive(Debug, Clone)]
pub struct CurrentProfile(pub Option<Profile>);

impl CurrentProfile {
    pub fn profile(&self) -> Option<&Profile> {
        self.0.as_ref()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for CurrentProfile
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = session_token(&parts.headers);
        let app_state = AppState::from_ref(state);

        let profile = SessionService::new(app_state.service_context())
            .resolve(token.as_deref())
            .await?;

        Ok(Self(profile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    #[test]
    fn test_bearer_token_wins_over_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer from-header"));
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("wiruda_session=from-cookie"),
        );

        assert_eq!(session_token(&headers).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_cookie_token() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("theme=dark; wiruda_session=abc.def"),
        );

        assert_eq!(session_token(&headers).as_deref(), Some("abc.def"));
    }

    #[test]
    fn test_no_token() {
        let mut headers = HeaderMap::new();
        assert_eq!(session_token(&headers), None);

        headers.insert(header::COOKIE, HeaderValue::from_static("wiruda_session="));
        assert_eq!(session_token(&headers), None);
    }
}
