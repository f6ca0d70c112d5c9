//! In-memory repositories and storage for service tests

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use wiruda_common::JwtService;
use wiruda_core::entities::{
    AuthorInfo, Credential, Devotion, DevotionActivity, DevotionChanges, DevotionDetail,
    DevotionExportRow, DevotionFilter, DevotionMetricRow, DevotionSummary, Inquiry, InquiryStatus,
    MemberFilter, MemberListing, MemberRole, NewDevotion, NewInquiry, NewPrayer, Prayer,
    PrayerChanges, PrayerDetail, PrayerFilter, PrayerSummary, Profile, ProfileDetails,
    ProfileStatus, Reaction, ReactionCounts, ReactionType, SettingsChanges, SiteSettings,
    Supporter, SupporterDraft, SupporterFilter, SupporterTotals,
};
use wiruda_core::error::DomainError;
use wiruda_core::traits::{
    CredentialRepository, DevotionRepository, ImageStorage, InquiryRepository, PrayerRepository,
    ProfileRepository, ReactionRepository, RepoResult, SettingsRepository, SupporterRepository,
};
use wiruda_core::value_objects::{Page, PageRequest};

use super::context::{ServiceContext, ServiceContextBuilder};

pub const TEST_BUCKET: &str = "bucket";
pub const TEST_SECRET: &str = "test-secret-key-for-service-tests";

/// Public URL of an object in the test bucket
pub fn image_url(path: &str) -> String {
    format!("https://cdn.wiruda.app/{TEST_BUCKET}/public/{path}")
}

fn matches(haystack: &str, needle: Option<&str>) -> bool {
    needle.map_or(true, |n| haystack.to_lowercase().contains(&n.to_lowercase()))
}

fn offline() -> DomainError {
    DomainError::DatabaseError("store offline".to_string())
}

/// One in-memory store implementing every repository trait
#[derive(Default)]
pub struct FakeStore {
    profiles: Mutex<HashMap<Uuid, Profile>>,
    credentials: Mutex<Vec<Credential>>,
    devotions: Mutex<Vec<Devotion>>,
    views: Mutex<HashSet<(Uuid, Uuid)>>,
    prayers: Mutex<Vec<Prayer>>,
    reactions: Mutex<HashSet<(Uuid, Uuid, ReactionType)>>,
    supporters: Mutex<Vec<Supporter>>,
    inquiries: Mutex<Vec<Inquiry>>,
    settings: Mutex<Option<SiteSettings>>,
    /// Makes every count query fail
    pub fail_counts: AtomicBool,
    /// Makes every write fail
    pub fail_writes: AtomicBool,
    /// Makes post detail reads fail
    pub fail_details: AtomicBool,
    /// Number of list/export queries issued
    pub queries: Mutex<usize>,
}

impl FakeStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn insert_profile(&self, role: MemberRole, status: ProfileStatus) -> Profile {
        let id = Uuid::new_v4();
        let mut profile = Profile::new(id, format!("멤버 {}", &id.to_string()[..4]), None, None);
        profile.role = role;
        profile.apply_status(status, Utc::now());
        self.profiles.lock().unwrap().insert(id, profile.clone());
        profile
    }

    pub fn profile(&self, id: Uuid) -> Option<Profile> {
        self.profiles.lock().unwrap().get(&id).cloned()
    }

    pub fn devotion_count(&self) -> usize {
        self.devotions.lock().unwrap().len()
    }

    pub fn prayer_count(&self) -> usize {
        self.prayers.lock().unwrap().len()
    }

    pub fn reaction_count(&self) -> usize {
        self.reactions.lock().unwrap().len()
    }

    pub fn set_published_at(&self, id: Uuid, at: DateTime<Utc>) {
        if let Some(d) = self.devotions.lock().unwrap().iter_mut().find(|d| d.id == id) {
            d.published_at = at;
        }
    }

    fn count_guard(&self) -> RepoResult<()> {
        if self.fail_counts.load(Ordering::SeqCst) {
            Err(offline())
        } else {
            Ok(())
        }
    }

    fn write_guard(&self) -> RepoResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(offline())
        } else {
            Ok(())
        }
    }

    fn detail_guard(&self) -> RepoResult<()> {
        if self.fail_details.load(Ordering::SeqCst) {
            Err(offline())
        } else {
            Ok(())
        }
    }

    fn bump_queries(&self) {
        *self.queries.lock().unwrap() += 1;
    }

    fn author(&self, id: Uuid) -> Option<AuthorInfo> {
        self.profile(id).map(|p| AuthorInfo {
            id: p.id,
            full_name: p.full_name,
            role: p.role,
            status: p.status,
        })
    }

    fn summary(&self, d: &Devotion) -> DevotionSummary {
        DevotionSummary {
            id: d.id,
            title: d.title.clone(),
            scripture_ref: d.scripture_ref.clone(),
            body: d.body.clone(),
            image_url: d.image_url.clone(),
            views: d.views,
            published_at: d.published_at,
            author_name: self.author(d.author_id).map(|a| a.full_name),
        }
    }

    fn counts(&self, prayer_id: Uuid) -> ReactionCounts {
        ReactionCounts::from_pairs(
            self.reactions
                .lock()
                .unwrap()
                .iter()
                .filter(|(p, _, _)| *p == prayer_id)
                .map(|(_, _, kind)| (*kind, 1)),
        )
    }

    fn prayer_summary(&self, p: &Prayer) -> PrayerSummary {
        PrayerSummary {
            prayer: p.clone(),
            author_name: self.author(p.author_id).map(|a| a.full_name),
            reactions: self.counts(p.id),
        }
    }

    fn filtered_devotions(&self, filter: &DevotionFilter) -> Vec<Devotion> {
        let mut rows: Vec<Devotion> = self
            .devotions
            .lock()
            .unwrap()
            .iter()
            .filter(|d| {
                let search = filter.search.as_deref();
                (matches(&d.title, search) || matches(&d.scripture_ref, search))
                    && filter.published.contains(d.published_at.date_naive())
                    && filter.has_image.has_image().map_or(true, |h| h == d.has_image())
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.published_at.cmp(&a.published_at));
        rows
    }
}

// ============================================================================
// Profiles / Credentials
// ============================================================================

#[async_trait]
impl ProfileRepository for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Profile>> {
        Ok(self.profile(id))
    }

    async fn update_details(&self, id: Uuid, details: &ProfileDetails) -> RepoResult<Profile> {
        self.write_guard()?;
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles.get_mut(&id).ok_or(DomainError::ProfileNotFound(id))?;
        profile.full_name.clone_from(&details.full_name);
        profile.phone.clone_from(&details.phone);
        profile.join_reason = Some(details.join_reason.clone());
        profile.updated_at = Utc::now();
        Ok(profile.clone())
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: ProfileStatus,
        approved_at: Option<DateTime<Utc>>,
    ) -> RepoResult<()> {
        self.write_guard()?;
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles.get_mut(&id).ok_or(DomainError::ProfileNotFound(id))?;
        profile.status = status;
        profile.approved_at = approved_at;
        Ok(())
    }

    async fn update_role(&self, id: Uuid, role: MemberRole) -> RepoResult<()> {
        self.write_guard()?;
        let mut profiles = self.profiles.lock().unwrap();
        let profile = profiles.get_mut(&id).ok_or(DomainError::ProfileNotFound(id))?;
        profile.role = role;
        Ok(())
    }

    async fn touch_last_login(&self, id: Uuid, at: DateTime<Utc>) -> RepoResult<()> {
        self.write_guard()?;
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(&id) {
            profile.last_login_at = Some(at);
        }
        Ok(())
    }

    async fn list(&self, filter: &MemberFilter) -> RepoResult<Vec<MemberListing>> {
        let credentials = self.credentials.lock().unwrap();
        let mut rows: Vec<MemberListing> = self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| {
                let search = filter.search.as_deref();
                (matches(&p.full_name, search)
                    || matches(p.join_reason.as_deref().unwrap_or_default(), search))
                    && filter.status.map_or(true, |s| s == p.status)
            })
            .map(|p| MemberListing {
                profile: p.clone(),
                email: credentials
                    .iter()
                    .find(|c| c.user_id == p.id)
                    .map(|c| c.email.clone()),
            })
            .collect();
        rows.sort_by(|a, b| b.profile.created_at.cmp(&a.profile.created_at));
        Ok(rows)
    }

    async fn count_all(&self) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(self.profiles.lock().unwrap().len() as i64)
    }

    async fn count_by_status(&self, status: ProfileStatus) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.status == status)
            .count() as i64)
    }

    async fn count_by_role(&self, role: MemberRole) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .values()
            .filter(|p| p.role == role)
            .count() as i64)
    }
}

#[async_trait]
impl CredentialRepository for FakeStore {
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<Credential>> {
        let email = email.to_lowercase();
        Ok(self
            .credentials
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.email == email)
            .cloned())
    }

    async fn email_exists(&self, email: &str) -> RepoResult<bool> {
        Ok(self.find_by_email(email).await?.is_some())
    }

    async fn create(&self, credential: &Credential, profile: &Profile) -> RepoResult<()> {
        self.write_guard()?;
        if self.email_exists(&credential.email).await? {
            return Err(DomainError::EmailAlreadyExists);
        }
        self.profiles
            .lock()
            .unwrap()
            .insert(profile.id, profile.clone());
        self.credentials.lock().unwrap().push(credential.clone());
        Ok(())
    }
}

// ============================================================================
// Devotions
// ============================================================================

#[async_trait]
impl DevotionRepository for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Devotion>> {
        Ok(self
            .devotions
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.id == id)
            .cloned())
    }

    async fn find_detail(&self, id: Uuid) -> RepoResult<Option<DevotionDetail>> {
        self.detail_guard()?;
        Ok(DevotionRepository::find_by_id(self, id)
            .await?
            .map(|devotion| DevotionDetail {
                author: self.author(devotion.author_id),
                devotion,
            }))
    }

    async fn list(
        &self,
        filter: &DevotionFilter,
        page: PageRequest,
    ) -> RepoResult<Page<DevotionSummary>> {
        self.bump_queries();
        let rows = self.filtered_devotions(filter);
        let total = rows.len() as i64;
        let items = rows
            .iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .map(|d| self.summary(d))
            .collect();
        Ok(Page::new(items, total, page))
    }

    async fn list_for_export(&self, filter: &DevotionFilter) -> RepoResult<Vec<DevotionExportRow>> {
        self.bump_queries();
        Ok(self
            .filtered_devotions(filter)
            .iter()
            .map(|d| DevotionExportRow {
                id: d.id,
                title: d.title.clone(),
                scripture_ref: d.scripture_ref.clone(),
                published_at: d.published_at,
                author_name: self.author(d.author_id).map(|a| a.full_name),
                views: d.views,
                has_image: d.has_image(),
            })
            .collect())
    }

    async fn create(&self, devotion: &NewDevotion) -> RepoResult<Devotion> {
        self.write_guard()?;
        let now = Utc::now();
        let row = Devotion {
            id: Uuid::new_v4(),
            author_id: devotion.author_id,
            title: devotion.title.clone(),
            scripture_ref: devotion.scripture_ref.clone(),
            scripture_text: devotion.scripture_text.clone(),
            body: devotion.body.clone(),
            image_url: devotion.image_url.clone(),
            views: 0,
            published_at: now,
            updated_at: now,
        };
        self.devotions.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: Uuid, changes: &DevotionChanges) -> RepoResult<Devotion> {
        self.write_guard()?;
        let mut devotions = self.devotions.lock().unwrap();
        let row = devotions
            .iter_mut()
            .find(|d| d.id == id)
            .ok_or(DomainError::DevotionNotFound(id))?;
        row.title.clone_from(&changes.title);
        row.scripture_ref.clone_from(&changes.scripture_ref);
        row.scripture_text.clone_from(&changes.scripture_text);
        row.body.clone_from(&changes.body);
        row.image_url.clone_from(&changes.image_url);
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.write_guard()?;
        let mut devotions = self.devotions.lock().unwrap();
        let before = devotions.len();
        devotions.retain(|d| d.id != id);
        if devotions.len() == before {
            return Err(DomainError::DevotionNotFound(id));
        }
        Ok(())
    }

    async fn record_view(&self, devotion_id: Uuid, viewer_id: Uuid) -> RepoResult<bool> {
        self.write_guard()?;
        let inserted = self.views.lock().unwrap().insert((devotion_id, viewer_id));
        if inserted {
            if let Some(d) = self
                .devotions
                .lock()
                .unwrap()
                .iter_mut()
                .find(|d| d.id == devotion_id)
            {
                d.views += 1;
            }
        }
        Ok(inserted)
    }

    async fn count_all(&self) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(self.devotion_count() as i64)
    }

    async fn count_since(&self, since: DateTime<Utc>) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(self
            .devotions
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.published_at >= since)
            .count() as i64)
    }

    async fn count_with_image(&self) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(self
            .devotions
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.has_image())
            .count() as i64)
    }

    async fn metric_rows(&self) -> RepoResult<Vec<DevotionMetricRow>> {
        self.count_guard()?;
        Ok(self
            .devotions
            .lock()
            .unwrap()
            .iter()
            .map(|d| DevotionMetricRow {
                id: d.id,
                title: d.title.clone(),
                views: d.views,
                published_at: d.published_at,
                author_id: d.author_id,
            })
            .collect())
    }

    async fn activity_since(&self, since: DateTime<Utc>) -> RepoResult<Vec<DevotionActivity>> {
        self.count_guard()?;
        Ok(self
            .devotions
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.published_at >= since)
            .map(|d| DevotionActivity {
                published_at: d.published_at,
                views: d.views,
            })
            .collect())
    }

    async fn recent(&self, limit: i64) -> RepoResult<Vec<DevotionSummary>> {
        Ok(self
            .filtered_devotions(&DevotionFilter::default())
            .iter()
            .take(limit as usize)
            .map(|d| self.summary(d))
            .collect())
    }
}

// ============================================================================
// Prayers / Reactions
// ============================================================================

#[async_trait]
impl PrayerRepository for FakeStore {
    async fn find_by_id(&self, id: Uuid) -> RepoResult<Option<Prayer>> {
        Ok(self
            .prayers
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn find_detail(&self, id: Uuid) -> RepoResult<Option<PrayerDetail>> {
        self.detail_guard()?;
        Ok(PrayerRepository::find_by_id(self, id)
            .await?
            .map(|prayer| PrayerDetail {
                author: self.author(prayer.author_id),
                reactions: self.counts(prayer.id),
                prayer,
            }))
    }

    async fn list(
        &self,
        filter: &PrayerFilter,
        page: PageRequest,
    ) -> RepoResult<Page<PrayerSummary>> {
        let mut rows: Vec<PrayerSummary> = self
            .prayers
            .lock()
            .unwrap()
            .iter()
            .map(|p| self.prayer_summary(p))
            .filter(|s| {
                let search = filter.search.as_deref();
                (matches(&s.prayer.content, search)
                    || matches(s.author_name.as_deref().unwrap_or_default(), search))
                    && filter
                        .status
                        .answered()
                        .map_or(true, |a| a == s.prayer.is_answered)
            })
            .collect();
        rows.sort_by(|a, b| b.prayer.created_at.cmp(&a.prayer.created_at));
        let total = rows.len() as i64;
        let items = rows
            .into_iter()
            .skip(page.offset() as usize)
            .take(page.limit() as usize)
            .collect();
        Ok(Page::new(items, total, page))
    }

    async fn create(&self, prayer: &NewPrayer) -> RepoResult<Prayer> {
        self.write_guard()?;
        let now = Utc::now();
        let row = Prayer {
            id: Uuid::new_v4(),
            author_id: prayer.author_id,
            content: prayer.content.clone(),
            image_url: prayer.image_url.clone(),
            is_answered: false,
            answered_at: None,
            created_at: now,
            updated_at: now,
        };
        self.prayers.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn update(&self, id: Uuid, changes: &PrayerChanges) -> RepoResult<Prayer> {
        self.write_guard()?;
        let mut prayers = self.prayers.lock().unwrap();
        let row = prayers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PrayerNotFound(id))?;
        row.content.clone_from(&changes.content);
        row.image_url.clone_from(&changes.image_url);
        row.updated_at = Utc::now();
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.write_guard()?;
        let mut prayers = self.prayers.lock().unwrap();
        let before = prayers.len();
        prayers.retain(|p| p.id != id);
        if prayers.len() == before {
            return Err(DomainError::PrayerNotFound(id));
        }
        Ok(())
    }

    async fn set_answered(
        &self,
        id: Uuid,
        answered: bool,
        answered_at: Option<DateTime<Utc>>,
    ) -> RepoResult<Prayer> {
        self.write_guard()?;
        let mut prayers = self.prayers.lock().unwrap();
        let row = prayers
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(DomainError::PrayerNotFound(id))?;
        row.is_answered = answered;
        row.answered_at = answered_at;
        Ok(row.clone())
    }

    async fn count_all(&self) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(self.prayer_count() as i64)
    }

    async fn count_answered(&self) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(self
            .prayers
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.is_answered)
            .count() as i64)
    }

    async fn recent(&self, limit: i64) -> RepoResult<Vec<PrayerSummary>> {
        let page = PrayerRepository::list(
            self,
            &PrayerFilter::default(),
            PageRequest::new(Some(1), Some(limit as u32)),
        )
        .await?;
        Ok(page.items)
    }
}

#[async_trait]
impl ReactionRepository for FakeStore {
    async fn create(&self, reaction: &Reaction) -> RepoResult<()> {
        self.write_guard()?;
        let inserted = self.reactions.lock().unwrap().insert((
            reaction.prayer_id,
            reaction.member_id,
            reaction.reaction_type,
        ));
        if inserted {
            Ok(())
        } else {
            Err(DomainError::ReactionAlreadyExists)
        }
    }

    async fn counts_for_prayer(&self, prayer_id: Uuid) -> RepoResult<ReactionCounts> {
        Ok(self.counts(prayer_id))
    }
}

// ============================================================================
// Supporters / Inquiries / Settings
// ============================================================================

#[async_trait]
impl SupporterRepository for FakeStore {
    async fn list(&self, filter: &SupporterFilter) -> RepoResult<Vec<Supporter>> {
        self.bump_queries();
        let mut rows: Vec<Supporter> = self
            .supporters
            .lock()
            .unwrap()
            .iter()
            .filter(|s| {
                let search = filter.search.as_deref();
                let amount = s.amount as f64;
                (matches(&s.name, search)
                    || matches(s.memo.as_deref().unwrap_or_default(), search))
                    && filter.supported.contains(s.supported_on)
                    && filter.min_amount.map_or(true, |min| amount >= min)
                    && filter.max_amount.map_or(true, |max| amount <= max)
            })
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.supported_on
                .cmp(&a.supported_on)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn upsert(&self, draft: &SupporterDraft) -> RepoResult<Supporter> {
        self.write_guard()?;
        let mut supporters = self.supporters.lock().unwrap();
        let now = Utc::now();
        if let Some(id) = draft.id {
            let row = supporters
                .iter_mut()
                .find(|s| s.id == id)
                .ok_or(DomainError::SupporterNotFound(id))?;
            row.name.clone_from(&draft.name);
            row.amount = draft.amount;
            row.supported_on = draft.supported_on;
            row.memo.clone_from(&draft.memo);
            row.updated_at = now;
            return Ok(row.clone());
        }
        let row = Supporter {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            amount: draft.amount,
            supported_on: draft.supported_on,
            memo: draft.memo.clone(),
            created_at: now,
            updated_at: now,
        };
        supporters.push(row.clone());
        Ok(row)
    }

    async fn delete(&self, id: Uuid) -> RepoResult<()> {
        self.write_guard()?;
        let mut supporters = self.supporters.lock().unwrap();
        let before = supporters.len();
        supporters.retain(|s| s.id != id);
        if supporters.len() == before {
            return Err(DomainError::SupporterNotFound(id));
        }
        Ok(())
    }

    async fn totals(&self) -> RepoResult<SupporterTotals> {
        self.count_guard()?;
        let supporters = self.supporters.lock().unwrap();
        Ok(SupporterTotals {
            count: supporters.len() as i64,
            amount: supporters.iter().map(|s| s.amount).sum(),
        })
    }

    async fn recent(&self, limit: i64) -> RepoResult<Vec<Supporter>> {
        let rows = SupporterRepository::list(self, &SupporterFilter::default()).await?;
        Ok(rows.into_iter().take(limit as usize).collect())
    }

    async fn supported_since(&self, since: NaiveDate) -> RepoResult<Vec<Supporter>> {
        self.count_guard()?;
        Ok(self
            .supporters
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.supported_on >= since)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl InquiryRepository for FakeStore {
    async fn create(&self, inquiry: &NewInquiry) -> RepoResult<Inquiry> {
        self.write_guard()?;
        let now = Utc::now();
        let row = Inquiry {
            id: Uuid::new_v4(),
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            message: inquiry.message.clone(),
            status: InquiryStatus::Pending,
            responded_at: None,
            created_at: now,
            updated_at: now,
        };
        self.inquiries.lock().unwrap().push(row.clone());
        Ok(row)
    }

    async fn list(&self, status: Option<InquiryStatus>) -> RepoResult<Vec<Inquiry>> {
        let mut rows: Vec<Inquiry> = self
            .inquiries
            .lock()
            .unwrap()
            .iter()
            .filter(|i| status.map_or(true, |s| s == i.status))
            .cloned()
            .collect();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: InquiryStatus,
        responded_at: Option<DateTime<Utc>>,
    ) -> RepoResult<Inquiry> {
        self.write_guard()?;
        let mut inquiries = self.inquiries.lock().unwrap();
        let row = inquiries
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or(DomainError::InquiryNotFound(id))?;
        row.status = status;
        row.responded_at = responded_at;
        Ok(row.clone())
    }

    async fn count_by_status(&self, status: InquiryStatus) -> RepoResult<i64> {
        self.count_guard()?;
        Ok(InquiryRepository::list(self, Some(status)).await?.len() as i64)
    }
}

#[async_trait]
impl SettingsRepository for FakeStore {
    async fn current(&self) -> RepoResult<Option<SiteSettings>> {
        Ok(self.settings.lock().unwrap().clone())
    }

    async fn save(&self, changes: &SettingsChanges) -> RepoResult<SiteSettings> {
        self.write_guard()?;
        let mut settings = self.settings.lock().unwrap();
        let now = Utc::now();
        let (id, created_at) = settings
            .as_ref()
            .map_or((Uuid::new_v4(), now), |s| (s.id, s.created_at));
        let row = SiteSettings {
            id,
            verse_ref: changes.verse_ref.clone(),
            verse_text: changes.verse_text.clone(),
            main_prayer: changes.main_prayer.clone(),
            contact_email: changes.contact_email.clone(),
            contact_phone: changes.contact_phone.clone(),
            contact_note: changes.contact_note.clone(),
            created_at,
            updated_at: now,
        };
        *settings = Some(row.clone());
        Ok(row)
    }
}

// ============================================================================
// Storage
// ============================================================================

/// Records every removal request
#[derive(Default)]
pub struct RecordingStorage {
    removed: Mutex<Vec<(String, String)>>,
    pub fail: AtomicBool,
}

impl RecordingStorage {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn removed(&self) -> Vec<(String, String)> {
        self.removed.lock().unwrap().clone()
    }
}

#[async_trait]
impl ImageStorage for RecordingStorage {
    async fn remove(&self, bucket: &str, path: &str) -> RepoResult<()> {
        self.removed
            .lock()
            .unwrap()
            .push((bucket.to_string(), path.to_string()));
        if self.fail.load(Ordering::SeqCst) {
            Err(DomainError::StorageError("storage unavailable".to_string()))
        } else {
            Ok(())
        }
    }
}

/// Service context wired to the fakes
pub fn context(store: &Arc<FakeStore>, storage: &Arc<RecordingStorage>) -> ServiceContext {
    ServiceContextBuilder::new()
        .profile_repo(store.clone())
        .credential_repo(store.clone())
        .devotion_repo(store.clone())
        .prayer_repo(store.clone())
        .reaction_repo(store.clone())
        .supporter_repo(store.clone())
        .inquiry_repo(store.clone())
        .settings_repo(store.clone())
        .image_storage(storage.clone())
        .storage_bucket(TEST_BUCKET)
        .jwt_service(Arc::new(JwtService::new(TEST_SECRET, 900, 604_800)))
        .build()
        .unwrap()
}
