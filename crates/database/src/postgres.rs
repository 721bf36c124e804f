//! Postgres implementations of the store traits.
//!
//! Each store is a newtype over the shared `PgPool`. All SQL is
//! runtime-checked (`sqlx::query_as`, not `sqlx::query_as!`) so building the
//! crate does not need a live database.

use crate::error::DbError;
use crate::filter::like_pattern;
use crate::stores::{CompanyStore, InvestmentStore, ProfitStore};
use async_trait::async_trait;
use core_types::{
    CompaniesTableRow, CompanyField, Investment, InvestmentChanges, InvestmentForm,
    InvestmentsTableRow, LatestInvestmentRow, NewInvestment, Profit, StatusTotals, ITEMS_PER_PAGE,
    page_offset,
};
use sqlx::PgPool;
use uuid::Uuid;

// The predicate shared by the listing query and its count. `$1` is a `like_pattern`.
const INVESTMENT_FILTER: &str = r#"
    companies.name ILIKE $1 OR
    companies.ticker ILIKE $1 OR
    investments.amount::text ILIKE $1 OR
    investments.date::text ILIKE $1 OR
    investments.status ILIKE $1
"#;

// `numeric_value_out_of_range`: a NUMERIC sum failed its `::BIGINT` cast.
fn aggregate_error(err: sqlx::Error, what: &'static str) -> DbError {
    let out_of_range = matches!(&err, sqlx::Error::Database(db) if db.code().as_deref() == Some("22003"));
    if out_of_range {
        DbError::AggregateOverflow(what)
    } else {
        DbError::QueryError(err)
    }
}

/// All Postgres stores over one pool.
#[derive(Debug, Clone)]
pub struct PgStores {
    pub investments: PgInvestmentStore,
    pub companies: PgCompanyStore,
    pub profit: PgProfitStore,
}

impl PgStores {
    pub fn new(pool: PgPool) -> Self {
        Self {
            investments: PgInvestmentStore::new(pool.clone()),
            companies: PgCompanyStore::new(pool.clone()),
            profit: PgProfitStore::new(pool),
        }
    }
}

// ── PgInvestmentStore ─────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PgInvestmentStore {
    pool: PgPool,
}

impl PgInvestmentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl InvestmentStore for PgInvestmentStore {
    async fn fetch_filtered(&self, query: &str, page: u32) -> Result<Vec<InvestmentsTableRow>, DbError> {
        let sql = format!(
            r#"
            SELECT
                investments.id,
                investments.company_id,
                investments.amount,
                investments.date,
                investments.status,
                companies.name,
                companies.ticker,
                companies.image_url
            FROM investments
            JOIN companies ON investments.company_id = companies.id
            WHERE {INVESTMENT_FILTER}
            ORDER BY investments.date DESC
            LIMIT $2 OFFSET $3
            "#
        );
        let rows = sqlx::query_as::<_, InvestmentsTableRow>(&sql)
            .bind(like_pattern(query))
            .bind(ITEMS_PER_PAGE)
            .bind(page_offset(page))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn count_filtered(&self, query: &str) -> Result<i64, DbError> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM investments
            JOIN companies ON investments.company_id = companies.id
            WHERE {INVESTMENT_FILTER}
            "#
        );
        let count = sqlx::query_scalar::<_, i64>(&sql)
            .bind(like_pattern(query))
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<InvestmentForm>, DbError> {
        let investment = sqlx::query_as::<_, Investment>(
            "SELECT id, company_id, amount, date, status FROM investments WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(investment.map(InvestmentForm::from))
    }

    async fn fetch_latest(&self, limit: i64) -> Result<Vec<LatestInvestmentRow>, DbError> {
        let rows = sqlx::query_as::<_, LatestInvestmentRow>(
            r#"
            SELECT investments.id, companies.name, companies.image_url, companies.ticker, investments.amount
            FROM investments
            JOIN companies ON investments.company_id = companies.id
            ORDER BY investments.date DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn count_all(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM investments")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn status_totals(&self) -> Result<StatusTotals, DbError> {
        // SUM over BIGINT is NUMERIC in Postgres; cast back and default empty tables to 0.
        let totals = sqlx::query_as::<_, StatusTotals>(
            r#"
            SELECT
                COALESCE(SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END), 0)::BIGINT AS paid,
                COALESCE(SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END), 0)::BIGINT AS pending
            FROM investments
            "#,
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| aggregate_error(e, "investment"))?;
        Ok(totals)
    }

    async fn insert(&self, investment: &NewInvestment) -> Result<Uuid, DbError> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO investments (company_id, amount, status, date)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(investment.company_id)
        .bind(investment.amount)
        .bind(investment.status.as_str())
        .bind(investment.date)
        .fetch_one(&self.pool)
        .await?;
        Ok(id)
    }

    async fn update(&self, id: Uuid, changes: &InvestmentChanges) -> Result<u64, DbError> {
        let result = sqlx::query(
            r#"
            UPDATE investments
            SET company_id = $1, amount = $2, status = $3
            WHERE id = $4
            "#,
        )
        .bind(changes.company_id)
        .bind(changes.amount)
        .bind(changes.status.as_str())
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, id: Uuid) -> Result<u64, DbError> {
        let result = sqlx::query("DELETE FROM investments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected())
    }
}

// ── PgCompanyStore ────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PgCompanyStore {
    pool: PgPool,
}

impl PgCompanyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CompanyStore for PgCompanyStore {
    async fn fetch_all(&self) -> Result<Vec<CompanyField>, DbError> {
        let companies = sqlx::query_as::<_, CompanyField>(
            "SELECT id, name FROM companies ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(companies)
    }

    async fn fetch_filtered(&self, query: &str) -> Result<Vec<CompaniesTableRow>, DbError> {
        let rows = sqlx::query_as::<_, CompaniesTableRow>(
            r#"
            SELECT
                companies.id,
                companies.name,
                companies.ticker,
                companies.image_url,
                COUNT(investments.id) AS total_investments,
                COALESCE(SUM(CASE WHEN investments.status = 'pending' THEN investments.amount ELSE 0 END), 0)::BIGINT AS total_pending,
                COALESCE(SUM(CASE WHEN investments.status = 'paid' THEN investments.amount ELSE 0 END), 0)::BIGINT AS total_paid
            FROM companies
            LEFT JOIN investments ON companies.id = investments.company_id
            WHERE
                companies.name ILIKE $1 OR
                companies.ticker ILIKE $1
            GROUP BY companies.id, companies.name, companies.ticker, companies.image_url
            ORDER BY companies.name ASC
            "#,
        )
        .bind(like_pattern(query))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| aggregate_error(e, "company"))?;
        Ok(rows)
    }

    async fn count_all(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM companies")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}

// ── PgProfitStore ─────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct PgProfitStore {
    pool: PgPool,
}

impl PgProfitStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfitStore for PgProfitStore {
    async fn fetch_all(&self) -> Result<Vec<Profit>, DbError> {
        // Calendar order; labels outside Jan..Dec sort last.
        let rows = sqlx::query_as::<_, Profit>(
            r#"
            SELECT month, revenue
            FROM profit
            ORDER BY array_position(
                ARRAY['jan','feb','mar','apr','may','jun','jul','aug','sep','oct','nov','dec'],
                lower(month)::text
            ) NULLS LAST, month
            "#,
        )
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
