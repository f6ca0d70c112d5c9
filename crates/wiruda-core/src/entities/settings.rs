//! Site settings - the single row of editable site copy and contact details

use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    pub id: Uuid,
    pub verse_ref: String,
    pub verse_text: String,
    pub main_prayer: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_note: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsChanges {
    pub verse_ref: String,
    pub verse_text: String,
    pub main_prayer: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub contact_note: String,
}
