//! JSON view models. Amounts and dates arrive here raw and leave formatted.

use chrono::NaiveDate;
use core_types::{
    CardMetrics, CompaniesTableRow, CompanyField, InvestmentForm, InvestmentStatus,
    InvestmentsTableRow, LatestInvestmentRow, Profit,
};
use formatting::{Locale, PageLink, YAxis, format_currency, format_date_to_local};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct InvestmentView {
    pub id: Uuid,
    pub company_id: Uuid,
    pub name: String,
    pub ticker: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub display_date: String,
    pub amount: i64,
    pub display_amount: String,
    pub status: InvestmentStatus,
}

impl InvestmentView {
    pub fn new(row: InvestmentsTableRow, locale: Locale) -> Self {
        Self {
            display_date: format_date_to_local(row.date, locale),
            display_amount: format_currency(row.amount),
            id: row.id,
            company_id: row.company_id,
            name: row.name,
            ticker: row.ticker,
            image_url: row.image_url,
            date: row.date,
            amount: row.amount,
            status: row.status,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InvestmentsPage {
    pub query: String,
    pub current_page: u32,
    pub total_pages: u32,
    pub pagination: Vec<PageLink>,
    pub investments: Vec<InvestmentView>,
}

#[derive(Debug, Serialize)]
pub struct CardsView {
    pub number_of_investments: i64,
    pub number_of_companies: i64,
    pub total_paid_investments: String,
    pub total_pending_investments: String,
}

impl From<CardMetrics> for CardsView {
    fn from(cards: CardMetrics) -> Self {
        Self {
            number_of_investments: cards.number_of_investments,
            number_of_companies: cards.number_of_companies,
            total_paid_investments: format_currency(cards.total_paid),
            total_pending_investments: format_currency(cards.total_pending),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LatestInvestmentView {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub ticker: String,
    pub amount: String,
}

impl From<LatestInvestmentRow> for LatestInvestmentView {
    fn from(row: LatestInvestmentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image_url: row.image_url,
            ticker: row.ticker,
            amount: format_currency(row.amount),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RevenueChart {
    pub months: Vec<Profit>,
    pub y_axis: YAxis,
}

#[derive(Debug, Serialize)]
pub struct Overview {
    pub cards: CardsView,
    pub revenue: RevenueChart,
    pub latest_investments: Vec<LatestInvestmentView>,
}

#[derive(Debug, Serialize)]
pub struct CompanyView {
    pub id: Uuid,
    pub name: String,
    pub ticker: String,
    pub image_url: String,
    pub total_investments: i64,
    pub total_pending: String,
    pub total_paid: String,
}

impl From<CompaniesTableRow> for CompanyView {
    fn from(row: CompaniesTableRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            ticker: row.ticker,
            image_url: row.image_url,
            total_investments: row.total_investments,
            total_pending: format_currency(row.total_pending),
            total_paid: format_currency(row.total_paid),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateInvestmentPage {
    pub companies: Vec<CompanyField>,
}

#[derive(Debug, Serialize)]
pub struct EditInvestmentPage {
    pub investment: InvestmentForm,
    pub companies: Vec<CompanyField>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_are_formatted_as_currency() {
        let cards = CardsView::from(CardMetrics {
            number_of_investments: 3,
            number_of_companies: 2,
            total_paid: 150_000,
            total_pending: 0,
        });
        assert_eq!(cards.total_paid_investments, "$1,500.00");
        assert_eq!(cards.total_pending_investments, "$0.00");
    }

    #[test]
    fn investment_rows_carry_display_strings() {
        let row = InvestmentsTableRow {
            id: Uuid::new_v4(),
            company_id: Uuid::new_v4(),
            name: "Apple Inc.".into(),
            ticker: "AAPL".into(),
            image_url: "/companies/aapl.png".into(),
            date: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
            amount: 150_000,
            status: InvestmentStatus::Paid,
        };
        let view = InvestmentView::new(row, Locale::EnUs);
        assert_eq!(view.display_date, "Aug 15, 2024");
        assert_eq!(view.display_amount, "$1,500.00");
    }
}
