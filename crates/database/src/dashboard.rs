use crate::error::DbError;
use crate::stores::{CompanyStore, InvestmentStore};
use core_types::CardMetrics;

/// Assembles the summary card figures.
///
/// The three aggregates are independent and issued concurrently. The first
/// error aborts the request.
pub async fn fetch_card_data(
    investments: &dyn InvestmentStore,
    companies: &dyn CompanyStore,
) -> Result<CardMetrics, DbError> {
    let (number_of_investments, number_of_companies, totals) = tokio::try_join!(
        investments.count_all(),
        companies.count_all(),
        investments.status_totals()
    )?;

    Ok(CardMetrics {
        number_of_investments,
        number_of_companies,
        total_paid: totals.paid,
        total_pending: totals.pending,
    })
}
