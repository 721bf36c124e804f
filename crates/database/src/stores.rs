//! Store interfaces, one per entity.
//!
//! Handlers and actions depend on these traits only, so the Postgres stores
//! and the in-memory store are interchangeable.

use crate::error::DbError;
use async_trait::async_trait;
use core_types::{
    CompaniesTableRow, CompanyField, InvestmentChanges, InvestmentForm, InvestmentsTableRow,
    LatestInvestmentRow, NewInvestment, Profit, StatusTotals, total_pages,
};
use uuid::Uuid;

#[async_trait]
pub trait InvestmentStore: Send + Sync {
    /// One page (`ITEMS_PER_PAGE` rows) of investments whose company name,
    /// ticker, amount, date or status contains `query`, newest first.
    /// A page past the end yields an empty vector.
    async fn fetch_filtered(&self, query: &str, page: u32) -> Result<Vec<InvestmentsTableRow>, DbError>;

    /// Number of investments matching `query`.
    async fn count_filtered(&self, query: &str) -> Result<i64, DbError>;

    /// Number of listing pages for `query`.
    async fn fetch_pages(&self, query: &str) -> Result<u32, DbError> {
        Ok(total_pages(self.count_filtered(query).await?))
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<InvestmentForm>, DbError>;

    /// The `limit` most recent investments.
    async fn fetch_latest(&self, limit: i64) -> Result<Vec<LatestInvestmentRow>, DbError>;

    async fn count_all(&self) -> Result<i64, DbError>;

    /// Amount totals per status. Zero when there are no rows.
    async fn status_totals(&self) -> Result<StatusTotals, DbError>;

    async fn insert(&self, investment: &NewInvestment) -> Result<Uuid, DbError>;

    /// Returns the number of rows changed.
    async fn update(&self, id: Uuid, changes: &InvestmentChanges) -> Result<u64, DbError>;

    /// Returns the number of rows removed.
    async fn delete(&self, id: Uuid) -> Result<u64, DbError>;
}

#[async_trait]
pub trait CompanyStore: Send + Sync {
    /// Every company, by name, for the form picklists.
    async fn fetch_all(&self) -> Result<Vec<CompanyField>, DbError>;

    /// Companies whose name or ticker contains `query`, with investment
    /// count and per-status totals, by name.
    async fn fetch_filtered(&self, query: &str) -> Result<Vec<CompaniesTableRow>, DbError>;

    async fn count_all(&self) -> Result<i64, DbError>;
}

#[async_trait]
pub trait ProfitStore: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Profit>, DbError>;
}
