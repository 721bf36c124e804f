//! An in-process store with the same query semantics as the Postgres stores.
//!
//! Backs `serve --in-memory` and the tests of every crate above this one.

use crate::error::DbError;
use crate::filter::contains_ci;
use crate::stores::{CompanyStore, InvestmentStore, ProfitStore};
use async_trait::async_trait;
use core_types::{
    CompaniesTableRow, Company, CompanyField, Investment, InvestmentChanges, InvestmentForm,
    InvestmentStatus, InvestmentsTableRow, LatestInvestmentRow, NewInvestment, Profit,
    StatusTotals, ITEMS_PER_PAGE, MONTHS, page_offset,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
struct MemoryState {
    companies: Vec<Company>,
    investments: Vec<Investment>,
    profit: Vec<Profit>,
}

impl MemoryState {
    fn company(&self, id: Uuid) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    fn require_company(&self, id: Uuid) -> Result<(), DbError> {
        match self.company(id) {
            Some(_) => Ok(()),
            None => Err(DbError::ConstraintViolation(format!(
                "investments.company_id {id} references no company"
            ))),
        }
    }

    /// Investments joined with their company, newest first.
    fn joined(&self) -> Vec<(&Investment, &Company)> {
        let mut rows: Vec<_> = self
            .investments
            .iter()
            .filter_map(|inv| self.company(inv.company_id).map(|c| (inv, c)))
            .collect();
        rows.sort_by(|a, b| b.0.date.cmp(&a.0.date));
        rows
    }

    fn matching(&self, query: &str) -> Vec<(&Investment, &Company)> {
        let needle = query.to_lowercase();
        self.joined()
            .into_iter()
            .filter(|(inv, company)| {
                contains_ci(&company.name, &needle)
                    || contains_ci(&company.ticker, &needle)
                    || contains_ci(&inv.amount.to_string(), &needle)
                    || contains_ci(&inv.date.to_string(), &needle)
                    || contains_ci(inv.status.as_str(), &needle)
            })
            .collect()
    }
}

// Mirrors the `::BIGINT` cast of the SQL aggregates, which errors instead of wrapping.
fn checked_total<'a>(
    mut investments: impl Iterator<Item = &'a Investment>,
    status: InvestmentStatus,
) -> Result<i64, DbError> {
    investments
        .try_fold(0i64, |acc, inv| acc.checked_add(inv.amount))
        .ok_or(DbError::AggregateOverflow(status.as_str()))
}

/// Cloning shares the underlying data.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from existing rows. Investments must reference one of `companies`.
    pub fn with_data(
        companies: Vec<Company>,
        investments: Vec<Investment>,
        profit: Vec<Profit>,
    ) -> Result<Self, DbError> {
        let state = MemoryState { companies, investments, profit };
        for investment in &state.investments {
            state.require_company(investment.company_id)?;
        }
        Ok(Self { state: Arc::new(RwLock::new(state)) })
    }
}

#[async_trait]
impl InvestmentStore for MemoryStore {
    async fn fetch_filtered(&self, query: &str, page: u32) -> Result<Vec<InvestmentsTableRow>, DbError> {
        let state = self.state.read().await;
        let offset = usize::try_from(page_offset(page)).unwrap_or(usize::MAX);
        let rows = state
            .matching(query)
            .into_iter()
            .skip(offset)
            .take(ITEMS_PER_PAGE as usize)
            .map(|(inv, company)| InvestmentsTableRow {
                id: inv.id,
                company_id: inv.company_id,
                name: company.name.clone(),
                ticker: company.ticker.clone(),
                image_url: company.image_url.clone(),
                date: inv.date,
                amount: inv.amount,
                status: inv.status,
            })
            .collect();
        Ok(rows)
    }

    async fn count_filtered(&self, query: &str) -> Result<i64, DbError> {
        let state = self.state.read().await;
        Ok(state.matching(query).len() as i64)
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<InvestmentForm>, DbError> {
        let state = self.state.read().await;
        Ok(state
            .investments
            .iter()
            .find(|inv| inv.id == id)
            .cloned()
            .map(InvestmentForm::from))
    }

    async fn fetch_latest(&self, limit: i64) -> Result<Vec<LatestInvestmentRow>, DbError> {
        let state = self.state.read().await;
        let limit = usize::try_from(limit).unwrap_or(0);
        Ok(state
            .joined()
            .into_iter()
            .take(limit)
            .map(|(inv, company)| LatestInvestmentRow {
                id: inv.id,
                name: company.name.clone(),
                image_url: company.image_url.clone(),
                ticker: company.ticker.clone(),
                amount: inv.amount,
            })
            .collect())
    }

    async fn count_all(&self) -> Result<i64, DbError> {
        Ok(self.state.read().await.investments.len() as i64)
    }

    async fn status_totals(&self) -> Result<StatusTotals, DbError> {
        let state = self.state.read().await;
        let sum = |status: InvestmentStatus| {
            checked_total(state.investments.iter().filter(|inv| inv.status == status), status)
        };
        Ok(StatusTotals {
            paid: sum(InvestmentStatus::Paid)?,
            pending: sum(InvestmentStatus::Pending)?,
        })
    }

    async fn insert(&self, investment: &NewInvestment) -> Result<Uuid, DbError> {
        let mut state = self.state.write().await;
        state.require_company(investment.company_id)?;
        let id = Uuid::new_v4();
        state.investments.push(Investment {
            id,
            company_id: investment.company_id,
            amount: investment.amount,
            date: investment.date,
            status: investment.status,
        });
        Ok(id)
    }

    async fn update(&self, id: Uuid, changes: &InvestmentChanges) -> Result<u64, DbError> {
        let mut state = self.state.write().await;
        state.require_company(changes.company_id)?;
        match state.investments.iter_mut().find(|inv| inv.id == id) {
            Some(inv) => {
                inv.company_id = changes.company_id;
                inv.amount = changes.amount;
                inv.status = changes.status;
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DbError> {
        let mut state = self.state.write().await;
        let before = state.investments.len();
        state.investments.retain(|inv| inv.id != id);
        Ok((before - state.investments.len()) as u64)
    }
}

#[async_trait]
impl CompanyStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<CompanyField>, DbError> {
        let state = self.state.read().await;
        let mut companies: Vec<_> = state
            .companies
            .iter()
            .map(|c| CompanyField { id: c.id, name: c.name.clone() })
            .collect();
        companies.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(companies)
    }

    async fn fetch_filtered(&self, query: &str) -> Result<Vec<CompaniesTableRow>, DbError> {
        let state = self.state.read().await;
        let needle = query.to_lowercase();
        let mut rows: Vec<_> = state
            .companies
            .iter()
            .filter(|c| contains_ci(&c.name, &needle) || contains_ci(&c.ticker, &needle))
            .map(|c| {
                let own: Vec<_> = state.investments.iter().filter(|inv| inv.company_id == c.id).collect();
                let total = |status: InvestmentStatus| {
                    checked_total(own.iter().copied().filter(|inv| inv.status == status), status)
                };
                Ok(CompaniesTableRow {
                    id: c.id,
                    name: c.name.clone(),
                    ticker: c.ticker.clone(),
                    image_url: c.image_url.clone(),
                    total_investments: own.len() as i64,
                    total_pending: total(InvestmentStatus::Pending)?,
                    total_paid: total(InvestmentStatus::Paid)?,
                })
            })
            .collect::<Result<_, DbError>>()?;
        rows.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(rows)
    }

    async fn count_all(&self) -> Result<i64, DbError> {
        Ok(self.state.read().await.companies.len() as i64)
    }
}

#[async_trait]
impl ProfitStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Profit>, DbError> {
        let mut months = self.state.read().await.profit.clone();
        months.sort_by_key(|p| p.month_index().unwrap_or(MONTHS.len()));
        Ok(months)
    }
}
