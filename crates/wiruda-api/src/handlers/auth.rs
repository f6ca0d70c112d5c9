//! Authentication handlers
//!
//! Endpoints for member registration, login, logout, and token refresh.
//! Login also sets the session cookie so browser navigation passes the
//! route gate.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use wiruda_service::dto::{
    LoginRequest, LoginResponse, RefreshTokenRequest, RegisterRequest, RegisterResponse,
    TokenResponse,
};
use wiruda_service::services::AuthService;

use crate::extractors::{JsonBody, SESSION_COOKIE};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Register a new member (starts in `pending`)
///
/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<RegisterRequest>,
) -> ApiResult<Created<Json<RegisterResponse>>> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;
    Ok(Created(Json(response)))
}

/// Login with email and password
///
/// POST /auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(request): JsonBody<LoginRequest>,
) -> ApiResult<(CookieJar, Json<LoginResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;

    let secure = state.config().app.env.is_production();
    let jar = jar.add(session_cookie(response.access_token.clone(), secure));

    Ok((jar, Json(response)))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
    JsonBody(request): JsonBody<RefreshTokenRequest>,
) -> ApiResult<(CookieJar, Json<TokenResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh(request).await?;

    // Only browser sessions carry the cookie; keep it in step with the new token
    let jar = if jar.get(SESSION_COOKIE).is_some() {
        let secure = state.config().app.env.is_production();
        jar.add(session_cookie(response.access_token.clone(), secure))
    } else {
        jar
    };

    Ok((jar, Json(response)))
}

/// Logout. Tokens are stateless, so this only clears the session cookie.
///
/// POST /auth/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, NoContent) {
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/"));
    (jar, NoContent)
}
