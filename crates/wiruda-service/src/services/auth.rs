//! Authentication service
//!
//! Handles member registration, login and token refresh. Tokens are
//! stateless; logout only clears the client's session cookie.

use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;
use validator::Validate;
use wiruda_common::auth::{hash_password, validate_password_strength, verify_password};
use wiruda_common::AppError;
use wiruda_core::entities::{Credential, Profile};
use wiruda_core::policy::is_admin;
use wiruda_core::DomainError;

use crate::dto::requests::non_blank;
use crate::dto::{
    LoginRequest, LoginResponse, ProfileResponse, RefreshTokenRequest, RegisterRequest,
    RegisterResponse, TokenResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Where a freshly registered member continues
pub const REGISTERED_NEXT: &str = "/login?registered=1";

/// Landing page for members still awaiting approval
pub const PENDING_NOTICE: &str = "/?notice=pending";

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new member. The profile starts as a pending member.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<RegisterResponse> {
        request.validate()?;
        validate_password_strength(&request.password)?;

        let email = request.email.trim().to_lowercase();
        if self.ctx.credential_repo().email_exists(&email).await? {
            return Err(ServiceError::conflict("Email already registered"));
        }

        let password_hash = hash_password(&request.password)?;

        let user_id = Uuid::new_v4();
        let credential = Credential::new(user_id, email, password_hash);
        let profile = Profile::new(
            user_id,
            request.full_name.trim().to_string(),
            non_blank(request.phone.as_deref()),
            Some(request.join_reason.trim().to_string()),
        );

        self.ctx
            .credential_repo()
            .create(&credential, &profile)
            .await?;

        info!(user_id = %user_id, "Member registered, awaiting approval");

        Ok(RegisterResponse {
            profile: ProfileResponse::from(profile),
            next: REGISTERED_NEXT.to_string(),
        })
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        request.validate()?;

        let credential = self
            .ctx
            .credential_repo()
            .find_by_email(request.email.trim())
            .await?
            .ok_or_else(|| {
                warn!("Login failed: unknown email");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !verify_password(&request.password, &credential.password_hash)? {
            warn!(user_id = %credential.user_id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        let mut profile = self
            .ctx
            .profile_repo()
            .find_by_id(credential.user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %credential.user_id, "Login failed: credential without profile");
                ServiceError::internal("profile missing for credential")
            })?;

        if profile.is_blocked() {
            warn!(user_id = %profile.id, "Login refused: account blocked");
            return Err(DomainError::AccountBlocked.into());
        }

        let now = Utc::now();
        match self.ctx.profile_repo().touch_last_login(profile.id, now).await {
            Ok(()) => profile.last_login_at = Some(now),
            Err(e) => warn!(user_id = %profile.id, error = %e, "Failed to record last login"),
        }

        let tokens = self.ctx.jwt_service().issue_pair(profile.id)?;

        let redirect_to = if !profile.is_approved() && !is_admin(profile.role) {
            PENDING_NOTICE.to_string()
        } else {
            sanitize_redirect(request.redirect_to.as_deref())
        };

        info!(user_id = %profile.id, status = %profile.status, "Member logged in");

        Ok(LoginResponse {
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            token_type: tokens.token_type,
            expires_in: tokens.expires_in,
            profile: ProfileResponse::from(profile),
            redirect_to,
        })
    }

    /// Exchange a refresh token for a new token pair
    #[instrument(skip(self, request))]
    pub async fn refresh(&self, request: RefreshTokenRequest) -> ServiceResult<TokenResponse> {
        let tokens = self
            .ctx
            .jwt_service()
            .refresh(&request.refresh_token)?;
        Ok(TokenResponse::from(tokens))
    }
}

/// Local post-login destination.
///
/// Only same-site absolute paths are honoured, and never the auth pages
/// themselves. Anything else lands on `/`.
pub fn sanitize_redirect(requested: Option<&str>) -> String {
    let Some(path) = requested.map(str::trim).filter(|p| !p.is_empty()) else {
        return "/".to_string();
    };

    let bare = path.split(['?', '#']).next().unwrap_or_default();
    let allowed = path.starts_with('/')
        && !path.starts_with("//")
        && !path.starts_with("/http")
        && !path.starts_with("/\\")
        && !matches!(bare, "/login" | "/register");

    if allowed {
        path.to_string()
    } else {
        "/".to_string()
    }
}
