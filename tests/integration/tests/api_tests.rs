//! API Integration Tests
//!
//! These tests require:
//! - Running PostgreSQL instance
//! - Environment variable: DATABASE_URL
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{assert_json, assert_status, check_test_env, fixtures::*, TestServer};
use reqwest::{header, StatusCode};
use serde_json::{json, Value};
use wiruda_core::entities::{MemberRole, ProfileStatus};

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["checks"]["database"], "healthy");
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_creates_pending_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .expect("Request failed");
    let body: RegisterResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(body.profile.status, "pending");
    assert_eq!(body.profile.role, "member");
}

#[tokio::test]
async fn test_register_duplicate_email() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_password_mismatch() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password_confirm = "Different123!".to_string();

    let response = server
        .post("/api/v1/auth/register", &request)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_login_pending_member_redirects_to_notice() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    let response = server
        .post("/api/v1/auth/register", &register)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let mut login = LoginRequest::from_register(&register);
    login.redirect_to = Some("/devotion/write".to_string());
    let response = server
        .post("/api/v1/auth/login", &login)
        .await
        .expect("Request failed");

    let cookie = response.headers()[header::SET_COOKIE]
        .to_str()
        .unwrap()
        .to_string();
    assert!(cookie.starts_with("wiruda_session="));
    assert!(cookie.contains("HttpOnly"));

    let body: LoginResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.redirect_to, "/?notice=pending");
    assert!(!body.access_token.is_empty());
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let register = RegisterRequest::unique();
    server
        .post("/api/v1/auth/register", &register)
        .await
        .expect("Request failed");

    let mut login = LoginRequest::from_register(&register);
    login.password = "WrongPass123!".to_string();
    let response = server
        .post("/api/v1/auth/login", &login)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();
}

#[tokio::test]
async fn test_account_requires_session() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/api/v1/account").await.expect("Request failed");
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let member = server.approved_member().await.unwrap();
    let response = server
        .get_auth("/api/v1/account", &member.token)
        .await
        .expect("Request failed");
    let body: ProfileResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.id, member.id);
    assert_eq!(body.status, "approved");
}

// ============================================================================
// Devotion Tests
// ============================================================================

#[tokio::test]
async fn test_pending_member_cannot_publish_devotion() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pending = server
        .member(ProfileStatus::Pending, MemberRole::Member)
        .await
        .unwrap();

    let response = server
        .post_auth("/api/v1/devotions", &pending.token, &DevotionRequest::unique())
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    // An invalid body is still a denial, not a validation error
    let mut invalid = DevotionRequest::unique();
    invalid.title = String::new();
    invalid.body = "짧음".to_string();
    let response = server
        .post_auth("/api/v1/devotions", &pending.token, &invalid)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let mut invalid = PrayerRequest::unique();
    invalid.content = String::new();
    let response = server
        .post_auth("/api/v1/prayers", &pending.token, &invalid)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_devotion_lifecycle() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.approved_member().await.unwrap();
    let reader = server.approved_member().await.unwrap();

    // Create
    let request = DevotionRequest::unique();
    let response = server
        .post_auth("/api/v1/devotions", &author.token, &request)
        .await
        .expect("Request failed");
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/devotions/{}", created.id);

    // Script tags are stripped on save
    let response = server.get(&path).await.expect("Request failed");
    let devotion: DevotionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(devotion.title, request.title);
    assert!(!devotion.body.contains("<script"));
    assert_eq!(devotion.views, 0);

    // A signed-in reader is counted once
    for _ in 0..2 {
        let response = server
            .get_auth(&path, &reader.token)
            .await
            .expect("Request failed");
        assert_status(response, StatusCode::OK).await.unwrap();
    }
    let response = server.get(&path).await.expect("Request failed");
    let devotion: DevotionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(devotion.views, 1);

    // Listed
    let response = server
        .get("/api/v1/devotions?pageSize=50")
        .await
        .expect("Request failed");
    let page: Page<DevotionListItem> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(page.items.iter().any(|item| item.id == created.id));

    // Only the author may edit
    let mut update = DevotionRequest::unique();
    update.title = "수정된 묵상 제목".to_string();
    let response = server
        .put_auth(&path, &reader.token, &update)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth(&path, &author.token, &update)
        .await
        .expect("Request failed");
    let devotion: DevotionResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(devotion.title, "수정된 묵상 제목");

    // Delete
    let response = server
        .delete_auth(&path, &author.token)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();

    let response = server.get(&path).await.expect("Request failed");
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Prayer Tests
// ============================================================================

#[tokio::test]
async fn test_repeated_amen_counts_once() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.approved_member().await.unwrap();
    let supporter = server.approved_member().await.unwrap();

    let response = server
        .post_auth("/api/v1/prayers", &author.token, &PrayerRequest::unique())
        .await
        .expect("Request failed");
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let reactions_path = format!("/api/v1/prayers/{}/reactions", created.id);

    for _ in 0..2 {
        let response = server
            .post_auth(&reactions_path, &supporter.token, &ReactionRequest::amen())
            .await
            .expect("Request failed");
        let body: ReactionResponse = assert_json(response, StatusCode::OK).await.unwrap();
        assert_eq!(body.prayer_id, created.id);
        assert_eq!(body.reactions.amen, 1);
        assert_eq!(body.reactions.together, 0);
    }

    let response = server
        .get(&format!("/api/v1/prayers/{}", created.id))
        .await
        .expect("Request failed");
    let prayer: PrayerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(prayer.author_id, author.id);
    assert_eq!(prayer.reactions.amen, 1);
}

#[tokio::test]
async fn test_blocked_member_cannot_react() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.approved_member().await.unwrap();
    let blocked = server.approved_member().await.unwrap();

    let response = server
        .post_auth("/api/v1/prayers", &author.token, &PrayerRequest::unique())
        .await
        .expect("Request failed");
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    // Blocked after signing in; the next request sees the new status
    server
        .set_status(blocked.id, ProfileStatus::Blocked)
        .await
        .unwrap();

    let response = server
        .post_auth(
            &format!("/api/v1/prayers/{}/reactions", created.id),
            &blocked.token,
            &ReactionRequest::amen(),
        )
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_admin_marks_prayer_answered() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let author = server.approved_member().await.unwrap();
    let admin = server.admin().await.unwrap();

    let response = server
        .post_auth("/api/v1/prayers", &author.token, &PrayerRequest::unique())
        .await
        .expect("Request failed");
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    let path = format!("/api/v1/admin/prayers/{}/answered", created.id);

    let response = server
        .patch_auth(&path, &author.token, &json!({ "is_answered": true }))
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .patch_auth(&path, &admin.token, &json!({ "is_answered": true }))
        .await
        .expect("Request failed");
    let prayer: PrayerResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(prayer.is_answered);
}

// ============================================================================
// Admin Tests
// ============================================================================

#[tokio::test]
async fn test_admin_overview_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .get("/api/v1/admin/overview")
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::UNAUTHORIZED).await.unwrap();

    let member = server.approved_member().await.unwrap();
    let response = server
        .get_auth("/api/v1/admin/overview", &member.token)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let admin = server.admin().await.unwrap();
    let response = server
        .get_auth("/api/v1/admin/overview", &admin.token)
        .await
        .expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(body["members"]["admins"].as_i64().unwrap() >= 1);
    assert!(body["recent_devotions"].as_array().unwrap().len() <= 5);
}

#[tokio::test]
async fn test_admin_approves_member() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin().await.unwrap();
    let pending = server
        .member(ProfileStatus::Pending, MemberRole::Member)
        .await
        .unwrap();

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/members/{}/status", pending.id),
            &admin.token,
            &json!({ "status": "approved" }),
        )
        .await
        .expect("Request failed");
    let body: Value = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body["status"], "approved");
    assert!(!body["approved_at"].is_null());

    // The approval takes effect on the next request
    let response = server
        .post_auth("/api/v1/devotions", &pending.token, &DevotionRequest::unique())
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

#[tokio::test]
async fn test_devotion_export_is_csv() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin().await.unwrap();
    let response = server
        .post_auth("/api/v1/devotions", &admin.token, &DevotionRequest::unique())
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/exports/devotions", &admin.token)
        .await
        .expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let headers = response.headers().clone();
    assert!(headers[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    assert!(headers[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .starts_with("attachment; filename=\"devotions-"));

    let csv = response.text().await.unwrap();
    assert!(csv.starts_with('\u{feff}'));
    assert!(csv.contains("\r\n"));
}

#[tokio::test]
async fn test_export_requires_admin() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let member = server.approved_member().await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/exports/supporters", &member.token)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_export_inverted_range() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin().await.unwrap();

    let response = server
        .get_auth(
            "/api/v1/admin/exports/supporters?startDate=2024-03-01&endDate=2024-02-01",
            &admin.token,
        )
        .await
        .expect("Request failed");
    assert!(response.headers().get(header::CONTENT_DISPOSITION).is_none());
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_supporter_upsert_and_delete() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin().await.unwrap();
    let name = format!("후원자{}", &unique_suffix()[..8]);

    let mut request = SupporterRequest {
        id: None,
        name: name.clone(),
        amount: 50_000,
        supported_on: "2024-05-01".to_string(),
        memo: None,
    };
    let response = server
        .post_auth("/api/v1/admin/supporters", &admin.token, &request)
        .await
        .expect("Request failed");
    let saved: SupporterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(saved.amount, 50_000);

    // Same id updates in place
    request.id = Some(saved.id);
    request.amount = 70_000;
    let response = server
        .post_auth("/api/v1/admin/supporters", &admin.token, &request)
        .await
        .expect("Request failed");
    let updated: SupporterResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(updated.id, saved.id);
    assert_eq!(updated.amount, 70_000);

    let response = server
        .get_auth(
            &format!("/api/v1/admin/supporters?q={name}"),
            &admin.token,
        )
        .await
        .expect("Request failed");
    let listed: Vec<SupporterResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, name);

    let response = server
        .delete_auth(
            &format!("/api/v1/admin/supporters/{}", saved.id),
            &admin.token,
        )
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::NO_CONTENT).await.unwrap();
}

#[tokio::test]
async fn test_supporter_negative_amount_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin().await.unwrap();

    let request = SupporterRequest {
        id: None,
        name: "음수 후원".to_string(),
        amount: -1,
        supported_on: "2024-05-01".to_string(),
        memo: None,
    };
    let response = server
        .post_auth("/api/v1/admin/supporters", &admin.token, &request)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

// ============================================================================
// Support and Settings Tests
// ============================================================================

#[tokio::test]
async fn test_inquiry_submit_and_resolve() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin().await.unwrap();

    let response = server
        .post("/api/v1/support", &InquiryRequest::unique())
        .await
        .expect("Request failed");
    let created: CreatedResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server
        .get_auth("/api/v1/admin/inquiries?status=pending", &admin.token)
        .await
        .expect("Request failed");
    let pending: Vec<InquiryResponse> = assert_json(response, StatusCode::OK).await.unwrap();
    let inquiry = pending
        .iter()
        .find(|inquiry| inquiry.id == created.id)
        .expect("Inquiry not listed");
    assert_eq!(inquiry.name, "김문의");
    assert!(inquiry.responded_at.is_none());

    let response = server
        .patch_auth(
            &format!("/api/v1/admin/inquiries/{}/status", created.id),
            &admin.token,
            &json!({ "status": "resolved" }),
        )
        .await
        .expect("Request failed");
    let resolved: InquiryResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(resolved.status, "resolved");
    assert!(resolved.responded_at.is_some());
}

#[tokio::test]
async fn test_inquiry_short_message_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = InquiryRequest::unique();
    request.message = "  짧음  ".to_string();

    let response = server
        .post("/api/v1/support", &request)
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::BAD_REQUEST).await.unwrap();
}

#[tokio::test]
async fn test_settings_update_is_public() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let admin = server.admin().await.unwrap();
    let member = server.approved_member().await.unwrap();

    let response = server
        .put_auth("/api/v1/admin/settings", &member.token, &SettingsRequest::sample())
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();

    let response = server
        .put_auth("/api/v1/admin/settings", &admin.token, &SettingsRequest::sample())
        .await
        .expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/v1/settings").await.expect("Request failed");
    let settings: SettingsResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(settings.verse_ref, "요한복음 3:16");
    assert_eq!(settings.contact_email, "hello@wiruda.app");
}

// ============================================================================
// Route Gate Tests
// ============================================================================

#[tokio::test]
async fn test_untrusted_origin_write_rejected() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let response = server
        .client
        .post(format!("{}/api/v1/support", server.base_url()))
        .header(header::ORIGIN, "https://evil.example")
        .json(&InquiryRequest::unique())
        .send()
        .await
        .expect("Request failed");

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(response.text().await.unwrap(), "Forbidden");
}

#[tokio::test]
async fn test_member_admin_navigation_redirects_home() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let member = server.approved_member().await.unwrap();

    let response = server
        .get_with_cookie("/admin", &member.token)
        .await
        .expect("Request failed");
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/");
}

#[tokio::test]
async fn test_pending_member_write_page_redirects_to_notice() {
    if !check_test_env() {
        return;
    }

    let server = TestServer::start().await.expect("Failed to start server");
    let pending = server
        .member(ProfileStatus::Pending, MemberRole::Member)
        .await
        .unwrap();

    let response = server
        .get_with_cookie("/devotion/write", &pending.token)
        .await
        .expect("Request failed");
    assert!(response.status().is_redirection());
    assert_eq!(response.headers()[header::LOCATION], "/?notice=pending");
}
