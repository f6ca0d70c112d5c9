//! Supporter, inquiry and settings model -> entity mappers

use wiruda_core::entities::{Inquiry, SiteSettings, Supporter, SupporterTotals};

use crate::models::{InquiryModel, SiteSettingsModel, SupporterModel, SupporterTotalsModel};

impl From<SupporterModel> for Supporter {
    fn from(model: SupporterModel) -> Self {
        Supporter {
            id: model.id,
            name: model.name,
            amount: model.amount,
            supported_on: model.supported_on,
            memo: model.memo,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<SupporterTotalsModel> for SupporterTotals {
    fn from(model: SupporterTotalsModel) -> Self {
        SupporterTotals {
            count: model.count,
            amount: model.amount,
        }
    }
}

impl From<InquiryModel> for Inquiry {
    fn from(model: InquiryModel) -> Self {
        Inquiry {
            id: model.id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            message: model.message,
            status: model.status.parse().unwrap_or_default(),
            responded_at: model.responded_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

impl From<SiteSettingsModel> for SiteSettings {
    fn from(model: SiteSettingsModel) -> Self {
        SiteSettings {
            id: model.id,
            verse_ref: model.verse_ref,
            verse_text: model.verse_text,
            main_prayer: model.main_prayer,
            contact_email: model.contact_email,
            contact_phone: model.contact_phone,
            contact_note: model.contact_note,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
