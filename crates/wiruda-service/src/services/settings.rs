//! Site settings: public read, admin update

use tracing::{info, instrument};
use validator::Validate;
use wiruda_core::entities::{MemberRole, Profile, SettingsChanges};
use wiruda_core::policy::require_role;

use crate::dto::{SettingsRequest, SettingsResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct SettingsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> SettingsService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Current settings, `None` before an admin has saved any
    #[instrument(skip(self))]
    pub async fn get(&self) -> ServiceResult<Option<SettingsResponse>> {
        let current = self.ctx.settings_repo().current().await?;
        Ok(current.map(SettingsResponse::from))
    }

    #[instrument(skip(self, caller, request))]
    pub async fn update(
        &self,
        caller: Option<&Profile>,
        request: SettingsRequest,
    ) -> ServiceResult<SettingsResponse> {
        let admin = require_role(caller, MemberRole::Admin)?;
        request.validate()?;

        let changes = SettingsChanges {
            verse_ref: request.verse_ref.trim().to_string(),
            verse_text: request.verse_text.trim().to_string(),
            main_prayer: request.main_prayer.trim().to_string(),
            contact_email: request.contact_email.trim().to_string(),
            contact_phone: request.contact_phone.trim().to_string(),
            contact_note: request.contact_note.trim().to_string(),
        };
        let saved = self.ctx.settings_repo().save(&changes).await?;

        info!(settings_id = %saved.id, admin_id = %admin.id, "Site settings saved");
        Ok(SettingsResponse::from(saved))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::fakes::{context, FakeStore, RecordingStorage};
    use wiruda_core::entities::ProfileStatus;

    fn request(verse_ref: &str) -> SettingsRequest {
        SettingsRequest {
            verse_ref: verse_ref.to_string(),
            verse_text: "수고하고 무거운 짐 진 자들아 다 내게로 오라".to_string(),
            main_prayer: "서로를 위해 기도하는 공동체".to_string(),
            contact_email: "hello@wiruda.app".to_string(),
            contact_phone: String::new(),
            contact_note: String::new(),
        }
    }

    #[tokio::test]
    async fn test_save_reuses_single_row() {
        let store = FakeStore::new();
        let ctx = context(&store, &RecordingStorage::new());
        let admin = store.insert_profile(MemberRole::Admin, ProfileStatus::Approved);
        let service = SettingsService::new(&ctx);

        assert!(service.get().await.unwrap().is_none());

        let first = service.update(Some(&admin), request("마태복음 11:28")).await.unwrap();
        let second = service.update(Some(&admin), request("요한복음 3:16")).await.unwrap();

        assert_eq!(first.id, second.id);
        assert_eq!(service.get().await.unwrap().unwrap().verse_ref, "요한복음 3:16");
    }

    #[tokio::test]
    async fn test_update_is_admin_only() {
        let store = FakeStore::new();
        let ctx = context(&store, &RecordingStorage::new());
        let member = store.insert_profile(MemberRole::Member, ProfileStatus::Approved);

        let err = SettingsService::new(&ctx)
            .update(Some(&member), request("마태복음 11:28"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 403);
    }

    #[tokio::test]
    async fn test_update_validates_email() {
        let store = FakeStore::new();
        let ctx = context(&store, &RecordingStorage::new());
        let admin = store.insert_profile(MemberRole::Admin, ProfileStatus::Approved);
        let mut invalid = request("마태복음 11:28");
        invalid.contact_email = "not-an-email".to_string();

        let err = SettingsService::new(&ctx)
            .update(Some(&admin), invalid)
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
    }
}
