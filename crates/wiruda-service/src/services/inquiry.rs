//! Support inquiries
//!
//! Anyone may send an inquiry; only admins read and resolve them.

use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;
use validator::Validate;
use wiruda_core::entities::{MemberRole, NewInquiry, Profile};
use wiruda_core::policy::require_role;

use crate::dto::{
    CreatedResponse, InquiryQuery, InquiryRequest, InquiryResponse, InquiryStatusRequest,
};

use super::context::ServiceContext;
use super::error::ServiceResult;

pub struct InquiryService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> InquiryService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Public contact form submission
    #[instrument(skip(self, request))]
    pub async fn submit(&self, request: InquiryRequest) -> ServiceResult<CreatedResponse> {
        let request = request.normalized();
        request.validate()?;

        let inquiry = NewInquiry {
            name: request.name,
            email: request.email,
            phone: request.phone,
            message: request.message,
        };
        let created = self.ctx.inquiry_repo().create(&inquiry).await?;

        info!(inquiry_id = %created.id, "Inquiry received");
        Ok(CreatedResponse { id: created.id })
    }

    #[instrument(skip(self, caller))]
    pub async fn list(
        &self,
        caller: Option<&Profile>,
        query: InquiryQuery,
    ) -> ServiceResult<Vec<InquiryResponse>> {
        require_role(caller, MemberRole::Admin)?;

        let rows = self.ctx.inquiry_repo().list(query.status).await?;
        Ok(rows.into_iter().map(InquiryResponse::from).collect())
    }

    /// `responded_at` is stamped when resolved and cleared when reopened
    #[instrument(skip(self, caller))]
    pub async fn update_status(
        &self,
        caller: Option<&Profile>,
        inquiry_id: Uuid,
        request: InquiryStatusRequest,
    ) -> ServiceResult<InquiryResponse> {
        let admin = require_role(caller, MemberRole::Admin)?;

        let responded_at = request.status.responded_at(Utc::now());
        let updated = self
            .ctx
            .inquiry_repo()
            .update_status(inquiry_id, request.status, responded_at)
            .await?;

        info!(
            inquiry_id = %inquiry_id,
            admin_id = %admin.id,
            status = %request.status,
            "Inquiry status changed"
        );
        Ok(InquiryResponse::from(updated))
    }
}
