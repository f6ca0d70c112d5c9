//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use wiruda_common::content::{excerpt, strip_tags, truncate_chars, EXCERPT_LENGTH};
use wiruda_common::TokenPair;
use wiruda_core::entities::{
    AuthorInfo, DevotionDetail, DevotionSummary, Inquiry, MemberListing, PrayerDetail,
    PrayerSummary, Profile, SiteSettings, Supporter, ANONYMOUS_AUTHOR,
};
use wiruda_core::value_objects::Page;

use super::responses::{
    AuthorResponse, DevotionListItem, DevotionResponse, InquiryResponse, MemberResponse,
    PageResponse, PrayerListItem, PrayerResponse, ProfileResponse, RecentDevotion, RecentPrayer,
    RecentSupporter, SettingsResponse, SupporterResponse, TokenResponse,
};

/// Author display name with the anonymous fallback
fn display_name(name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(ANONYMOUS_AUTHOR)
        .to_string()
}

impl<T, U: From<T>> From<Page<T>> for PageResponse<U> {
    fn from(page: Page<T>) -> Self {
        Self {
            total: page.total,
            page: page.page,
            page_size: page.page_size,
            items: page.items.into_iter().map(U::from).collect(),
        }
    }
}

// ============================================================================
// Profile Mappers
// ============================================================================

impl From<&Profile> for ProfileResponse {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            full_name: profile.full_name.clone(),
            phone: profile.phone.clone(),
            join_reason: profile.join_reason.clone(),
            role: profile.role,
            status: profile.status,
            created_at: profile.created_at,
            approved_at: profile.approved_at,
            last_login_at: profile.last_login_at,
        }
    }
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self::from(&profile)
    }
}

impl From<MemberListing> for MemberResponse {
    fn from(listing: MemberListing) -> Self {
        Self {
            profile: ProfileResponse::from(&listing.profile),
            email: listing.email,
        }
    }
}

impl From<AuthorInfo> for AuthorResponse {
    fn from(author: AuthorInfo) -> Self {
        Self {
            id: author.id,
            full_name: author.full_name,
            role: author.role,
            status: author.status,
        }
    }
}

impl From<TokenPair> for TokenResponse {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
            token_type: pair.token_type,
            expires_in: pair.expires_in,
        }
    }
}

// ============================================================================
// Content Mappers
// ============================================================================

impl From<DevotionSummary> for DevotionListItem {
    fn from(summary: DevotionSummary) -> Self {
        Self {
            excerpt: truncate_chars(&strip_tags(&summary.body), EXCERPT_LENGTH),
            author_name: display_name(summary.author_name.as_deref()),
            id: summary.id,
            title: summary.title,
            scripture_ref: summary.scripture_ref,
            image_url: summary.image_url,
            views: summary.views,
            published_at: summary.published_at,
        }
    }
}

impl From<DevotionSummary> for RecentDevotion {
    fn from(summary: DevotionSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            published_at: summary.published_at,
        }
    }
}

impl From<DevotionDetail> for DevotionResponse {
    fn from(detail: DevotionDetail) -> Self {
        let devotion = detail.devotion;
        Self {
            author_name: display_name(detail.author.as_ref().map(|a| a.full_name.as_str())),
            author: detail.author.map(AuthorResponse::from),
            id: devotion.id,
            author_id: devotion.author_id,
            title: devotion.title,
            scripture_ref: devotion.scripture_ref,
            scripture_text: devotion.scripture_text,
            body: devotion.body,
            image_url: devotion.image_url,
            views: devotion.views,
            published_at: devotion.published_at,
            updated_at: devotion.updated_at,
        }
    }
}

impl From<PrayerSummary> for PrayerListItem {
    fn from(summary: PrayerSummary) -> Self {
        let prayer = summary.prayer;
        Self {
            excerpt: excerpt(&prayer.content),
            author_name: display_name(summary.author_name.as_deref()),
            reactions: summary.reactions,
            id: prayer.id,
            author_id: prayer.author_id,
            image_url: prayer.image_url,
            is_answered: prayer.is_answered,
            answered_at: prayer.answered_at,
            created_at: prayer.created_at,
        }
    }
}

impl From<PrayerSummary> for RecentPrayer {
    fn from(summary: PrayerSummary) -> Self {
        Self {
            id: summary.prayer.id,
            created_at: summary.prayer.created_at,
            is_answered: summary.prayer.is_answered,
        }
    }
}

impl From<PrayerDetail> for PrayerResponse {
    fn from(detail: PrayerDetail) -> Self {
        let prayer = detail.prayer;
        Self {
            author_name: display_name(detail.author.as_ref().map(|a| a.full_name.as_str())),
            author: detail.author.map(AuthorResponse::from),
            reactions: detail.reactions,
            id: prayer.id,
            author_id: prayer.author_id,
            content: prayer.content,
            image_url: prayer.image_url,
            is_answered: prayer.is_answered,
            answered_at: prayer.answered_at,
            created_at: prayer.created_at,
            updated_at: prayer.updated_at,
        }
    }
}

// ============================================================================
// Admin-managed Row Mappers
// ============================================================================

impl From<Supporter> for SupporterResponse {
    fn from(supporter: Supporter) -> Self {
        Self {
            id: supporter.id,
            name: supporter.name,
            amount: supporter.amount,
            supported_on: supporter.supported_on,
            memo: supporter.memo,
            created_at: supporter.created_at,
            updated_at: supporter.updated_at,
        }
    }
}

impl From<Supporter> for RecentSupporter {
    fn from(supporter: Supporter) -> Self {
        Self {
            id: supporter.id,
            name: supporter.name,
            amount: supporter.amount,
            supported_on: supporter.supported_on,
        }
    }
}

impl From<Inquiry> for InquiryResponse {
    fn from(inquiry: Inquiry) -> Self {
        Self {
            id: inquiry.id,
            name: inquiry.name,
            email: inquiry.email,
            phone: inquiry.phone,
            message: inquiry.message,
            status: inquiry.status,
            responded_at: inquiry.responded_at,
            created_at: inquiry.created_at,
        }
    }
}

impl From<SiteSettings> for SettingsResponse {
    fn from(settings: SiteSettings) -> Self {
        Self {
            id: settings.id,
            verse_ref: settings.verse_ref,
            verse_text: settings.verse_text,
            main_prayer: settings.main_prayer,
            contact_email: settings.contact_email,
            contact_phone: settings.contact_phone,
            contact_note: settings.contact_note,
            updated_at: settings.updated_at,
        }
    }
}
