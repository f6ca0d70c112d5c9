//! Admin aggregation views
//!
//! Read-only dashboard figures. Independent queries run concurrently and
//! each metric degrades on its own: a failed query yields zero or empty for
//! that metric and a warning in the log.

use std::collections::{BTreeMap, HashSet};
use std::future::Future;

use chrono::{Duration, NaiveTime, Utc};
use tracing::{instrument, warn};
use wiruda_core::entities::{
    DevotionActivity, DevotionMetricRow, InquiryStatus, MemberRole, Profile, ProfileStatus,
    Supporter,
};
use wiruda_core::policy::require_role;
use wiruda_core::traits::RepoResult;
use wiruda_core::value_objects::MonthKey;

use crate::dto::{
    DevotionMetricsResponse, DevotionMonthBucket, MemberCounts, OverviewResponse,
    PrayerMetricsResponse, SupporterMonthBucket, TopDevotion,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Months shown when the caller gives none
pub const DEFAULT_MONTHS: u32 = 6;

/// Longest lookback window
pub const MAX_MONTHS: u32 = 24;

/// Items in each "recent" list of the overview
const RECENT_LIMIT: i64 = 5;

/// Await one metric query, falling back to the default value on failure
async fn metric<T, F>(name: &'static str, query: F) -> T
where
    T: Default,
    F: Future<Output = RepoResult<T>>,
{
    match query.await {
        Ok(value) => value,
        Err(e) => {
            warn!(metric = name, error = %e, "Metric query failed, reporting empty value");
            T::default()
        }
    }
}

/// Clamp a requested window to 1..=24 months, 6 by default
pub fn month_window(months: Option<u32>) -> u32 {
    months.unwrap_or(DEFAULT_MONTHS).clamp(1, MAX_MONTHS)
}

fn month_label(key: MonthKey) -> String {
    format!("{}년 {:02}월", key.year, key.month)
}

/// Group devotion activity by calendar month, newest month first
pub fn devotion_month_buckets(
    activity: &[DevotionActivity],
    months: u32,
) -> Vec<DevotionMonthBucket> {
    let mut buckets: BTreeMap<MonthKey, (i64, i64)> = BTreeMap::new();
    for row in activity {
        let entry = buckets.entry(MonthKey::of(&row.published_at)).or_default();
        entry.0 += 1;
        entry.1 += row.views;
    }

    buckets
        .into_iter()
        .rev()
        .take(months as usize)
        .map(|(key, (count, views))| DevotionMonthBucket {
            month: key.to_string(),
            label: month_label(key),
            count,
            views,
        })
        .collect()
}

/// Group supporter records by the month they were supported in, newest first
pub fn supporter_month_buckets(rows: &[Supporter], months: u32) -> Vec<SupporterMonthBucket> {
    let mut buckets: BTreeMap<MonthKey, (i64, i64)> = BTreeMap::new();
    for row in rows {
        let entry = buckets.entry(MonthKey::of(&row.supported_on)).or_default();
        entry.0 += 1;
        entry.1 += row.amount;
    }

    buckets
        .into_iter()
        .rev()
        .take(months as usize)
        .map(|(key, (count, amount))| SupporterMonthBucket {
            month: key.to_string(),
            label: month_label(key),
            count,
            amount,
        })
        .collect()
}

/// Total views, distinct authors and the most viewed devotion.
///
/// Ties on views go to the most recently published devotion.
pub fn summarize_views(rows: &[DevotionMetricRow]) -> (i64, i64, Option<TopDevotion>) {
    let total_views = rows.iter().map(|r| r.views).sum();
    let authors: HashSet<_> = rows.iter().map(|r| r.author_id).collect();
    let top = rows
        .iter()
        .max_by_key(|r| (r.views, r.published_at))
        .map(|r| TopDevotion {
            id: r.id,
            title: r.title.clone(),
            views: r.views,
        });
    (total_views, authors.len() as i64, top)
}

/// Admin aggregation service
pub struct AggregationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AggregationService<'a> {
    /// Create a new AggregationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Dashboard overview
    #[instrument(skip(self, caller))]
    pub async fn overview(&self, caller: Option<&Profile>) -> ServiceResult<OverviewResponse> {
        require_role(caller, MemberRole::Admin)?;

        let profiles = self.ctx.profile_repo();
        let devotions = self.ctx.devotion_repo();
        let prayers = self.ctx.prayer_repo();
        let supporters = self.ctx.supporter_repo();

        let (
            total,
            approved,
            pending,
            rejected,
            blocked,
            admins,
            total_devotions,
            total_prayers,
            answered_prayers,
            supporter_totals,
            pending_inquiries,
            recent_devotions,
            recent_prayers,
            recent_supporters,
        ) = tokio::join!(
            metric("members.total", profiles.count_all()),
            metric("members.approved", profiles.count_by_status(ProfileStatus::Approved)),
            metric("members.pending", profiles.count_by_status(ProfileStatus::Pending)),
            metric("members.rejected", profiles.count_by_status(ProfileStatus::Rejected)),
            metric("members.blocked", profiles.count_by_status(ProfileStatus::Blocked)),
            metric("members.admins", profiles.count_by_role(MemberRole::Admin)),
            metric("devotions.total", devotions.count_all()),
            metric("prayers.total", prayers.count_all()),
            metric("prayers.answered", prayers.count_answered()),
            metric("supporters.totals", supporters.totals()),
            metric(
                "inquiries.pending",
                self.ctx.inquiry_repo().count_by_status(InquiryStatus::Pending)
            ),
            metric("devotions.recent", devotions.recent(RECENT_LIMIT)),
            metric("prayers.recent", prayers.recent(RECENT_LIMIT)),
            metric("supporters.recent", supporters.recent(RECENT_LIMIT)),
        );

        Ok(OverviewResponse {
            members: MemberCounts {
                total,
                approved,
                pending,
                rejected,
                blocked,
                admins,
            },
            total_devotions,
            total_prayers,
            answered_prayers,
            total_supporters: supporter_totals.count,
            supporter_amount: supporter_totals.amount,
            pending_inquiries,
            recent_devotions: recent_devotions.into_iter().map(Into::into).collect(),
            recent_prayers: recent_prayers.into_iter().map(Into::into).collect(),
            recent_supporters: recent_supporters.into_iter().map(Into::into).collect(),
        })
    }

    /// Devotion totals, views and the top devotion
    #[instrument(skip(self, caller))]
    pub async fn devotion_metrics(
        &self,
        caller: Option<&Profile>,
    ) -> ServiceResult<DevotionMetricsResponse> {
        require_role(caller, MemberRole::Admin)?;

        let devotions = self.ctx.devotion_repo();
        let since = Utc::now() - Duration::days(30);

        let (total, last_30_days, with_image, rows) = tokio::join!(
            metric("devotions.total", devotions.count_all()),
            metric("devotions.last_30_days", devotions.count_since(since)),
            metric("devotions.with_image", devotions.count_with_image()),
            metric("devotions.views", devotions.metric_rows()),
        );
        let (total_views, unique_authors, top) = summarize_views(&rows);

        Ok(DevotionMetricsResponse {
            total,
            last_30_days,
            with_image,
            total_views,
            unique_authors,
            top,
        })
    }

    /// Devotion count and views per month
    #[instrument(skip(self, caller))]
    pub async fn devotion_monthly(
        &self,
        caller: Option<&Profile>,
        months: Option<u32>,
    ) -> ServiceResult<Vec<DevotionMonthBucket>> {
        require_role(caller, MemberRole::Admin)?;

        let months = month_window(months);
        let since = MonthKey::window_start(Utc::now().date_naive(), months);
        let since = since.and_time(NaiveTime::MIN).and_utc();

        let activity = metric(
            "devotions.monthly",
            self.ctx.devotion_repo().activity_since(since),
        )
        .await;
        Ok(devotion_month_buckets(&activity, months))
    }

    /// Answered and pending prayer counts
    #[instrument(skip(self, caller))]
    pub async fn prayer_metrics(
        &self,
        caller: Option<&Profile>,
    ) -> ServiceResult<PrayerMetricsResponse> {
        require_role(caller, MemberRole::Admin)?;

        let prayers = self.ctx.prayer_repo();
        let (total, answered) = tokio::join!(
            metric("prayers.total", prayers.count_all()),
            metric("prayers.answered", prayers.count_answered()),
        );

        Ok(PrayerMetricsResponse {
            total,
            answered,
            pending: (total - answered).max(0),
        })
    }

    /// Supporter count and amount per month
    #[instrument(skip(self, caller))]
    pub async fn supporter_monthly(
        &self,
        caller: Option<&Profile>,
        months: Option<u32>,
    ) -> ServiceResult<Vec<SupporterMonthBucket>> {
        require_role(caller, MemberRole::Admin)?;

        let months = month_window(months);
        let since = MonthKey::window_start(Utc::now().date_naive(), months);

        let rows = metric(
            "supporters.monthly",
            self.ctx.supporter_repo().supported_since(since),
        )
        .await;
        Ok(supporter_month_buckets(&rows, months))
    }
}
