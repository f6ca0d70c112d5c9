//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    account, admin, auth, devotions, exports, health, prayers, settings, support,
};
use crate::state::AppState;

/// Create the main router. Unmatched paths fall through to a JSON 404,
/// which keeps page navigation under the route gate.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        .fallback(crate::handlers::not_found)
}

/// Health check routes (kept outside rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(public_routes())
        .merge(devotion_routes())
        .merge(prayer_routes())
        .nest("/admin", admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// Account, settings and the support form
fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/account",
            get(account::get_account).patch(account::update_account),
        )
        .route("/settings", get(settings::get_settings))
        .route("/support", post(support::submit_inquiry))
}

fn devotion_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/devotions",
            get(devotions::list_devotions).post(devotions::create_devotion),
        )
        .route(
            "/devotions/:id",
            get(devotions::get_devotion)
                .put(devotions::update_devotion)
                .delete(devotions::delete_devotion),
        )
}

fn prayer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/prayers",
            get(prayers::list_prayers).post(prayers::create_prayer),
        )
        .route(
            "/prayers/:id",
            get(prayers::get_prayer)
                .put(prayers::update_prayer)
                .delete(prayers::delete_prayer),
        )
        .route("/prayers/:id/reactions", post(prayers::react_to_prayer))
}

/// Admin routes. Each handler's service enforces the admin role.
fn admin_routes() -> Router<AppState> {
    Router::new()
        // Dashboard
        .route("/overview", get(admin::overview))
        .route("/metrics/devotions", get(admin::devotion_metrics))
        .route("/metrics/devotions/monthly", get(admin::devotion_monthly))
        .route("/metrics/prayers", get(admin::prayer_metrics))
        .route("/metrics/supporters/monthly", get(admin::supporter_monthly))
        // Moderation
        .route("/devotions/:id", delete(devotions::delete_devotion))
        .route("/prayers/:id", delete(prayers::delete_prayer))
        .route("/prayers/:id/answered", patch(prayers::set_prayer_answered))
        // Members
        .route("/members", get(admin::list_members))
        .route("/members/:id/status", patch(admin::update_member_status))
        .route("/members/:id/role", patch(admin::update_member_role))
        // Supporters
        .route(
            "/supporters",
            get(admin::list_supporters).post(admin::save_supporter),
        )
        .route("/supporters/:id", delete(admin::delete_supporter))
        // Inquiries
        .route("/inquiries", get(admin::list_inquiries))
        .route("/inquiries/:id/status", patch(admin::update_inquiry_status))
        // Settings
        .route("/settings", put(settings::update_settings))
        // CSV exports
        .route("/exports/devotions", get(exports::export_devotions))
        .route("/exports/supporters", get(exports::export_supporters))
}
