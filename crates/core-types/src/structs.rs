use crate::enums::InvestmentStatus;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An investable entity with a ticker symbol. Read-only from this application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    pub ticker: String,
    pub image_url: String,
}

/// Largest amount a single investment may hold, in cents ($10 billion).
///
/// Low enough that per-status sums over any realistic table stay inside `i64`.
pub const MAX_INVESTMENT_CENTS: i64 = 1_000_000_000_000;

/// Month labels of the profit report, in calendar order.
pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// A monetary position in a company. `amount` is always integer cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Investment {
    pub id: Uuid,
    pub company_id: Uuid,
    pub amount: i64,
    pub date: NaiveDate,
    #[sqlx(try_from = "String")]
    pub status: InvestmentStatus,
}

/// A validated investment ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInvestment {
    pub company_id: Uuid,
    pub amount: i64,
    pub status: InvestmentStatus,
    pub date: NaiveDate,
}

/// The mutable columns of an existing investment. The date is never changed by an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvestmentChanges {
    pub company_id: Uuid,
    pub amount: i64,
    pub status: InvestmentStatus,
}

/// One row of the monthly profit report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Profit {
    pub month: String,
    pub revenue: i64,
}

impl Profit {
    /// Zero-based calendar position of `month`; `None` for an unknown label.
    pub fn month_index(&self) -> Option<usize> {
        MONTHS.iter().position(|m| m.eq_ignore_ascii_case(&self.month))
    }
}

/// A row of the paginated investments listing, joined with its company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct InvestmentsTableRow {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub ticker: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub amount: i64,
    #[sqlx(try_from = "String")]
    pub status: InvestmentStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct LatestInvestmentRow {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub ticker: String,
    pub amount: i64,
}

/// A company with the totals of the investments made in it, in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CompaniesTableRow {
    pub id: Uuid,
    pub name: String,
    pub ticker: String,
    pub image_url: String,
    pub total_investments: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}

/// Entry of the company picklist on the investment forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CompanyField {
    pub id: Uuid,
    pub name: String,
}

/// Prefill for the edit form. `amount` is in dollars, not cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvestmentForm {
    pub id: Uuid,
    pub company_id: Uuid,
    pub amount: Decimal,
    pub status: InvestmentStatus,
}

impl From<Investment> for InvestmentForm {
    fn from(investment: Investment) -> Self {
        Self {
            id: investment.id,
            company_id: investment.company_id,
            amount: Decimal::new(investment.amount, 2),
            status: investment.status,
        }
    }
}

/// The raw figures behind the dashboard summary cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetrics {
    pub number_of_investments: i64,
    pub number_of_companies: i64,
    pub total_paid: i64,
    pub total_pending: i64,
}

/// Sums of investment amounts grouped by status, in cents.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StatusTotals {
    pub paid: i64,
    pub pending: i64,
}
