//! Route gate
//!
//! Runs before any handler. State-changing requests must come from a
//! trusted origin, and browser navigation into the admin area or the
//! devotion editor is redirected when the session does not qualify.

use axum::{
    body::Body,
    extract::{Request, State},
    http::{header, HeaderMap, Method, StatusCode, Uri},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use tracing::{debug, warn};
use url::{form_urlencoded, Url};
use wiruda_core::entities::{MemberRole, Profile, ProfileStatus};
use wiruda_core::policy::{require_approved_status, require_role, Denial};
use wiruda_service::services::SessionService;

use crate::extractors::session_token;
use crate::response::ApiError;
use crate::state::AppState;

/// Body of the cross-origin rejection
pub const FORBIDDEN_ORIGIN_BODY: &str = "Forbidden";

/// Destination for members who are not approved yet
pub const PENDING_NOTICE_PATH: &str = "/?notice=pending";

/// Pages that need more than an anonymous visitor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtectedArea {
    Admin,
    DevotionWrite,
}

impl ProtectedArea {
    /// Classify a request path
    pub fn from_path(path: &str) -> Option<Self> {
        if path == "/admin" || path.starts_with("/admin/") {
            Some(Self::Admin)
        } else if path == "/devotion/write" || path.starts_with("/devotion/write/") {
            Some(Self::DevotionWrite)
        } else {
            None
        }
    }

    /// Where to send the visitor instead, or `None` to let the request through
    pub fn redirect_for(self, profile: Option<&Profile>, path_and_query: &str) -> Option<String> {
        let decision = match self {
            Self::Admin => require_role(profile, MemberRole::Admin).map(|_| ()),
            Self::DevotionWrite => {
                require_approved_status(profile, &[ProfileStatus::Approved]).map(|_| ())
            }
        };

        match (self, decision) {
            (_, Ok(())) => None,
            (_, Err(Denial::Unauthenticated)) => Some(login_redirect(path_and_query)),
            (Self::Admin, Err(Denial::Forbidden)) => Some("/".to_string()),
            (Self::DevotionWrite, Err(Denial::Forbidden)) => Some(PENDING_NOTICE_PATH.to_string()),
        }
    }
}

/// `/login?redirectTo=<path>`
pub fn login_redirect(path_and_query: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(path_and_query.as_bytes()).collect();
    format!("/login?redirectTo={encoded}")
}

fn is_safe_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

/// Serialized origin of a URL, if it has one
fn origin_of(raw: &str) -> Option<(String, Url)> {
    let url = Url::parse(raw.trim()).ok()?;
    let origin = url.origin();
    origin
        .is_tuple()
        .then(|| (origin.ascii_serialization(), url))
}

/// Whether the `Origin` (or, failing that, `Referer`) header names a trusted origin
///
/// Trusted means one of the configured origins, or the host the request
/// itself was sent to: the `Host` header, or the URI authority on HTTP/2.
pub fn origin_allowed(headers: &HeaderMap, uri: &Uri, trusted: &[String]) -> bool {
    let Some(raw) = headers
        .get(header::ORIGIN)
        .or_else(|| headers.get(header::REFERER))
        .and_then(|value| value.to_str().ok())
    else {
        return false;
    };

    let Some((origin, url)) = origin_of(raw) else {
        return false;
    };

    let configured = trusted
        .iter()
        .filter_map(|candidate| origin_of(candidate))
        .any(|(candidate, _)| candidate == origin);
    if configured {
        return true;
    }

    let Some(host) = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
    else {
        return false;
    };
    let Some(origin_host) = url.host_str() else {
        return false;
    };
    let authority = match url.port() {
        Some(port) => format!("{origin_host}:{port}"),
        None => origin_host.to_string(),
    };

    authority.eq_ignore_ascii_case(host.trim())
}

/// The route gate middleware
pub async fn route_gate(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();

    if !is_safe_method(&method) {
        let trusted = state.config().site.trusted_origins();
        if !origin_allowed(request.headers(), request.uri(), &trusted) {
            warn!(
                method = %method,
                path = %request.uri().path(),
                "Rejected state-changing request from untrusted origin"
            );
            return (StatusCode::FORBIDDEN, FORBIDDEN_ORIGIN_BODY).into_response();
        }
    }

    let navigation = matches!(method, Method::GET | Method::HEAD);
    if let Some(area) = ProtectedArea::from_path(request.uri().path()).filter(|_| navigation) {
        let token = session_token(request.headers());
        let profile = match SessionService::new(state.service_context())
            .resolve(token.as_deref())
            .await
        {
            Ok(profile) => profile,
            Err(e) => return ApiError::from(e).into_response(),
        };

        let path_and_query = request
            .uri()
            .path_and_query()
            .map_or_else(|| request.uri().path().to_string(), ToString::to_string);

        if let Some(target) = area.redirect_for(profile.as_ref(), &path_and_query) {
            debug!(area = ?area, target = %target, "Redirecting protected navigation");
            return Redirect::to(&target).into_response();
        }
    }

    next.run(request).await
}
