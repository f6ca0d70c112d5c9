//! Devotion and prayer model -> entity mappers

use wiruda_core::entities::{
    Devotion, DevotionActivity, DevotionDetail, DevotionExportRow, DevotionMetricRow,
    DevotionSummary, Prayer, PrayerDetail, PrayerSummary, ReactionCounts,
};

use super::profile::author_from_columns;
use crate::models::{
    DevotionActivityModel, DevotionDetailModel, DevotionExportModel, DevotionMetricModel,
    DevotionModel, DevotionSummaryModel, PrayerModel, PrayerRowModel, ReactionCountModel,
};

impl From<DevotionModel> for Devotion {
    fn from(model: DevotionModel) -> Self {
        Devotion {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            scripture_ref: model.scripture_ref,
            scripture_text: model.scripture_text,
            body: model.body,
            image_url: model.image_url,
            views: model.views,
            published_at: model.published_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<DevotionDetailModel> for DevotionDetail {
    fn from(model: DevotionDetailModel) -> Self {
        let author = author_from_columns(
            model.devotion.author_id,
            model.author_full_name,
            model.author_role.as_deref(),
            model.author_status.as_deref(),
        );
        DevotionDetail {
            devotion: model.devotion.into(),
            author,
        }
    }
}

impl From<DevotionSummaryModel> for DevotionSummary {
    fn from(model: DevotionSummaryModel) -> Self {
        DevotionSummary {
            id: model.id,
            title: model.title,
            scripture_ref: model.scripture_ref,
            body: model.body,
            image_url: model.image_url,
            views: model.views,
            published_at: model.published_at,
            author_name: model.author_name,
        }
    }
}

impl From<DevotionExportModel> for DevotionExportRow {
    fn from(model: DevotionExportModel) -> Self {
        DevotionExportRow {
            id: model.id,
            title: model.title,
            scripture_ref: model.scripture_ref,
            published_at: model.published_at,
            author_name: model.author_name,
            views: model.views,
            has_image: model.has_image,
        }
    }
}

impl From<DevotionMetricModel> for DevotionMetricRow {
    fn from(model: DevotionMetricModel) -> Self {
        DevotionMetricRow {
            id: model.id,
            title: model.title,
            views: model.views,
            published_at: model.published_at,
            author_id: model.author_id,
        }
    }
}

impl From<DevotionActivityModel> for DevotionActivity {
    fn from(model: DevotionActivityModel) -> Self {
        DevotionActivity {
            published_at: model.published_at,
            views: model.views,
        }
    }
}

impl From<PrayerModel> for Prayer {
    fn from(model: PrayerModel) -> Self {
        Prayer {
            id: model.id,
            author_id: model.author_id,
            content: model.content,
            image_url: model.image_url,
            is_answered: model.is_answered,
            answered_at: model.answered_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<ReactionCountModel> for ReactionCounts {
    fn from(model: ReactionCountModel) -> Self {
        ReactionCounts {
            amen: model.amen_count,
            together: model.together_count,
        }
    }
}

impl From<PrayerRowModel> for PrayerDetail {
    fn from(model: PrayerRowModel) -> Self {
        let author = author_from_columns(
            model.prayer.author_id,
            model.author_full_name,
            model.author_role.as_deref(),
            model.author_status.as_deref(),
        );
        PrayerDetail {
            prayer: model.prayer.into(),
            author,
            reactions: ReactionCounts {
                amen: model.amen_count,
                together: model.together_count,
            },
        }
    }
}

impl From<PrayerRowModel> for PrayerSummary {
    fn from(model: PrayerRowModel) -> Self {
        PrayerSummary {
            prayer: model.prayer.into(),
            author_name: model.author_full_name,
            reactions: ReactionCounts {
                amen: model.amen_count,
                together: model.together_count,
            },
        }
    }
}
