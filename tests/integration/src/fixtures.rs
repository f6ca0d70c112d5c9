//! Test fixtures and data generators
//!
//! Provides reusable request bodies and typed views of the responses the
//! tests inspect.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    format!(
        "{}{}",
        COUNTER.fetch_add(1, Ordering::SeqCst),
        Uuid::new_v4().simple()
    )
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub password_confirm: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub join_reason: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            email: format!("member{suffix}@example.com"),
            password: "TestPass123!".to_string(),
            password_confirm: "TestPass123!".to_string(),
            full_name: "테스트 성도".to_string(),
            phone: Some("010-1234-5678".to_string()),
            join_reason: "함께 기도하고 싶어서 가입합니다.".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub redirect_to: Option<String>,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
            redirect_to: None,
        }
    }
}

/// Profile as returned by the API
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: Uuid,
    pub full_name: String,
    pub role: String,
    pub status: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterResponse {
    pub profile: ProfileResponse,
    pub next: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub profile: ProfileResponse,
    pub redirect_to: String,
}

#[derive(Debug, Deserialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

/// Devotion create/update body
#[derive(Debug, Serialize)]
pub struct DevotionRequest {
    pub title: String,
    pub scripture_ref: String,
    pub scripture_text: String,
    pub body: String,
    pub image_url: Option<String>,
}

impl DevotionRequest {
    pub fn unique() -> Self {
        Self {
            title: format!("아침 묵상 {}", unique_suffix()),
            scripture_ref: "시편 23:1".to_string(),
            scripture_text: "여호와는 나의 목자시니 내게 부족함이 없으리로다".to_string(),
            body: "<p>오늘도 주님의 인도하심을 믿으며 하루를 시작합니다. 작은 일에도 감사하는 마음을 잃지 않기를 기도합니다.</p><script>alert(1)</script>".to_string(),
            image_url: None,
        }
    }
}

/// Prayer create/update body
#[derive(Debug, Serialize)]
pub struct PrayerRequest {
    pub content: String,
    pub image_url: Option<String>,
}

impl PrayerRequest {
    pub fn unique() -> Self {
        Self {
            content: format!("가족의 건강을 위해 기도 부탁드립니다 {}", unique_suffix()),
            image_url: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReactionRequest {
    pub reaction_type: String,
}

impl ReactionRequest {
    pub fn amen() -> Self {
        Self {
            reaction_type: "amen".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ReactionCounts {
    pub amen: i64,
    pub together: i64,
}

#[derive(Debug, Deserialize)]
pub struct ReactionResponse {
    pub prayer_id: Uuid,
    pub reactions: ReactionCounts,
}

#[derive(Debug, Deserialize)]
pub struct PrayerResponse {
    pub id: Uuid,
    pub author_id: Uuid,
    pub is_answered: bool,
    pub reactions: ReactionCounts,
}

#[derive(Debug, Deserialize)]
pub struct DevotionResponse {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub views: i64,
}

#[derive(Debug, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Deserialize)]
pub struct DevotionListItem {
    pub id: Uuid,
    pub title: String,
}

/// Support form body
#[derive(Debug, Serialize)]
pub struct InquiryRequest {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: String,
}

impl InquiryRequest {
    pub fn unique() -> Self {
        Self {
            name: "  김문의  ".to_string(),
            email: format!("ask{}@example.com", unique_suffix()),
            phone: None,
            message: "예배 시간과 장소를 알고 싶습니다.".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct InquiryResponse {
    pub id: Uuid,
    pub name: String,
    pub status: String,
    pub responded_at: Option<String>,
}

/// Supporter upsert body
#[derive(Debug, Serialize)]
pub struct SupporterRequest {
    pub id: Option<Uuid>,
    pub name: String,
    pub amount: i64,
    pub supported_on: String,
    pub memo: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SupporterResponse {
    pub id: Uuid,
    pub name: String,
    pub amount: i64,
}

/// Site settings body
#[derive(Debug, Serialize)]
pub struct SettingsRequest {
    pub verse_ref: String,
    pub verse_text: String,
    pub main_prayer: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_note: String,
}

impl SettingsRequest {
    pub fn sample() -> Self {
        Self {
            verse_ref: "요한복음 3:16".to_string(),
            verse_text: "하나님이 세상을 이처럼 사랑하사".to_string(),
            main_prayer: "이웃을 위해 기도합니다".to_string(),
            contact_email: "hello@wiruda.app".to_string(),
            contact_phone: "02-123-4567".to_string(),
            contact_note: "평일 오전에 연락 주세요".to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct SettingsResponse {
    pub verse_ref: String,
    pub contact_email: String,
}
