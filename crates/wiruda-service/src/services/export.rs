//! CSV exports for the admin console
//!
//! Output is UTF-8 with a byte-order mark so spreadsheet tools pick the
//! right encoding. Rows end with CRLF and every cell is quoted.

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{info, instrument};
use wiruda_core::entities::{DevotionExportRow, MemberRole, Profile, Supporter};
use wiruda_core::policy::require_role;

use crate::dto::{DevotionQuery, SupporterQuery};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Body text for an export rejected because of an inverted date range
pub const INVALID_RANGE_MESSAGE: &str = "날짜 범위가 올바르지 않습니다.";

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";

const DEVOTION_HEADER: [&str; 7] = [
    "ID",
    "제목",
    "성경 구절",
    "게시일",
    "작성자",
    "조회수",
    "이미지 여부",
];

const SUPPORTER_HEADER: [&str; 5] = ["이름", "금액", "후원일", "메모", "등록일"];

/// A finished CSV download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub filename: String,
    pub body: String,
}

impl CsvExport {
    fn dated(prefix: &str, body: String) -> Self {
        Self {
            filename: format!("{prefix}-{}.csv", Utc::now().format("%Y-%m-%d")),
            body,
        }
    }

    /// `Content-Disposition` value for the download
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename=\"{}\"", self.filename)
    }
}

/// Quote a cell, doubling embedded quotes
fn quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

/// Assemble a CSV document from a header and rows
pub fn to_csv<I>(header: &[&str], rows: I) -> String
where
    I: IntoIterator<Item = Vec<String>>,
{
    let header = header.iter().map(|h| quote(h)).collect::<Vec<_>>().join(",");
    let lines = std::iter::once(header).chain(
        rows.into_iter()
            .map(|row| row.iter().map(|c| quote(c)).collect::<Vec<_>>().join(",")),
    );
    format!("\u{feff}{}", lines.collect::<Vec<_>>().join("\r\n"))
}

fn timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn devotion_row(row: DevotionExportRow) -> Vec<String> {
    vec![
        row.id.to_string(),
        row.title,
        row.scripture_ref,
        timestamp(row.published_at),
        row.author_name.unwrap_or_default(),
        row.views.to_string(),
        if row.has_image { "Y" } else { "N" }.to_string(),
    ]
}

fn supporter_row(row: Supporter) -> Vec<String> {
    vec![
        row.name,
        row.amount.to_string(),
        row.supported_on.format("%Y-%m-%d").to_string(),
        row.memo.unwrap_or_default(),
        timestamp(row.created_at),
    ]
}

/// Admin CSV export service
pub struct ExportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ExportService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Devotions matching the list filters. The date range is checked
    /// before any query runs.
    #[instrument(skip(self, caller, query))]
    pub async fn devotions(
        &self,
        caller: Option<&Profile>,
        query: &DevotionQuery,
    ) -> ServiceResult<CsvExport> {
        require_role(caller, MemberRole::Admin)?;
        let filter = query.filter()?;

        let rows = self.ctx.devotion_repo().list_for_export(&filter).await?;
        info!(rows = rows.len(), "Devotion export generated");

        Ok(CsvExport::dated(
            "devotions",
            to_csv(&DEVOTION_HEADER, rows.into_iter().map(devotion_row)),
        ))
    }

    /// Supporters matching the list filters
    #[instrument(skip(self, caller, query))]
    pub async fn supporters(
        &self,
        caller: Option<&Profile>,
        query: &SupporterQuery,
    ) -> ServiceResult<CsvExport> {
        require_role(caller, MemberRole::Admin)?;
        let filter = query.filter()?;

        let rows = self.ctx.supporter_repo().list(&filter).await?;
        info!(rows = rows.len(), "Supporter export generated");

        Ok(CsvExport::dated(
            "supporters",
            to_csv(&SUPPORTER_HEADER, rows.into_iter().map(supporter_row)),
        ))
    }
}
