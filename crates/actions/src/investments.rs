use crate::error::ActionError;
use crate::revalidate::{INVESTMENTS_PATH, Redirect, Revalidator};
use crate::schema::{InvestmentFormInput, validate};
use crate::state::FormState;
use chrono::Utc;
use core_types::{InvestmentChanges, NewInvestment};
use database::InvestmentStore;
use uuid::Uuid;

/// Validates a new investment, inserts it dated today and redirects to the listing.
pub async fn create_investment(
    store: &dyn InvestmentStore,
    revalidator: &dyn Revalidator,
    input: &InvestmentFormInput,
) -> Result<Redirect, ActionError> {
    let valid = validate(input).map_err(|errors| {
        ActionError::Validation(FormState::invalid(errors, "Missing Fields. Failed to Create Investment."))
    })?;

    let investment = NewInvestment {
        company_id: valid.company_id,
        amount: valid.amount,
        status: valid.status,
        date: Utc::now().date_naive(),
    };

    let id = store.insert(&investment).await.map_err(|source| {
        tracing::error!(error = ?source, "Failed to create investment.");
        ActionError::Database {
            state: FormState::failed("Database Error: Failed to Create Investment."),
            source,
        }
    })?;
    tracing::info!(%id, company_id = %investment.company_id, "Investment created.");

    revalidator.revalidate_path(INVESTMENTS_PATH);
    Ok(Redirect::to(INVESTMENTS_PATH))
}

/// Validates the edited fields and writes them over investment `id`.
///
/// An `id` that matches no row is not an error; the caller is still redirected.
pub async fn update_investment(
    store: &dyn InvestmentStore,
    revalidator: &dyn Revalidator,
    id: Uuid,
    input: &InvestmentFormInput,
) -> Result<Redirect, ActionError> {
    let valid = validate(input).map_err(|errors| {
        ActionError::Validation(FormState::invalid(errors, "Missing Fields. Failed to Update Investment."))
    })?;

    let changes = InvestmentChanges {
        company_id: valid.company_id,
        amount: valid.amount,
        status: valid.status,
    };

    let updated = store.update(id, &changes).await.map_err(|source| {
        tracing::error!(%id, error = ?source, "Failed to update investment.");
        ActionError::Database {
            state: FormState::failed("Database Error: Failed to Update Investment."),
            source,
        }
    })?;
    if updated == 0 {
        tracing::warn!(%id, "Update matched no investment.");
    }

    revalidator.revalidate_path(INVESTMENTS_PATH);
    Ok(Redirect::to(INVESTMENTS_PATH))
}

/// Removes investment `id` unconditionally.
pub async fn delete_investment(
    store: &dyn InvestmentStore,
    revalidator: &dyn Revalidator,
    id: Uuid,
) -> Result<(), ActionError> {
    let deleted = store.delete(id).await.map_err(|source| {
        tracing::error!(%id, error = ?source, "Failed to delete investment.");
        ActionError::Database {
            state: FormState::failed("Database Error: Failed to Delete Investment."),
            source,
        }
    })?;
    tracing::info!(%id, deleted, "Investment deleted.");

    revalidator.revalidate_path(INVESTMENTS_PATH);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Field;
    use chrono::NaiveDate;
    use core_types::{Company, Investment, InvestmentStatus};
    use database::MemoryStore;
    use rust_decimal_macros::dec;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingRevalidator {
        paths: Mutex<Vec<String>>,
    }

    impl Revalidator for RecordingRevalidator {
        fn revalidate_path(&self, path: &str) {
            self.paths.lock().unwrap().push(path.to_string());
        }
    }

    impl RecordingRevalidator {
        fn paths(&self) -> Vec<String> {
            self.paths.lock().unwrap().clone()
        }
    }

    fn company() -> Company {
        Company {
            id: Uuid::new_v4(),
            name: "Alphabet".into(),
            ticker: "GOOGL".into(),
            image_url: "/companies/googl.png".into(),
        }
    }

    fn form(company_id: Uuid, amount: &str, status: &str) -> InvestmentFormInput {
        InvestmentFormInput {
            company_id: Some(company_id.to_string()),
            amount: Some(amount.to_string()),
            status: Some(status.to_string()),
        }
    }

    #[tokio::test]
    async fn create_stores_cents_dated_today_and_revalidates() {
        let company = company();
        let store = MemoryStore::with_data(vec![company.clone()], vec![], vec![]).unwrap();
        let revalidator = RecordingRevalidator::default();

        let before = Utc::now().date_naive();
        let redirect = create_investment(&store, &revalidator, &form(company.id, "1500.50", "pending"))
            .await
            .unwrap();
        let after = Utc::now().date_naive();

        assert_eq!(redirect.location, INVESTMENTS_PATH);
        assert_eq!(revalidator.paths(), vec![INVESTMENTS_PATH.to_string()]);

        let rows = database::InvestmentStore::fetch_filtered(&store, "", 1).await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].amount, 150_050);
        assert_eq!(rows[0].status, InvestmentStatus::Pending);
        assert!(rows[0].date >= before && rows[0].date <= after);
    }

    #[tokio::test]
    async fn invalid_create_touches_nothing() {
        let company = company();
        let store = MemoryStore::with_data(vec![company.clone()], vec![], vec![]).unwrap();
        let revalidator = RecordingRevalidator::default();

        let err = create_investment(&store, &revalidator, &form(company.id, "0", "sold"))
            .await
            .unwrap_err();

        let ActionError::Validation(state) = err else {
            panic!("expected a validation error");
        };
        assert_eq!(state.message, "Missing Fields. Failed to Create Investment.");
        assert!(!state.errors.get(Field::Amount).is_empty());
        assert!(!state.errors.get(Field::Status).is_empty());
        assert_eq!(store.count_filtered("").await.unwrap(), 0);
        assert!(revalidator.paths().is_empty());
    }

    #[tokio::test]
    async fn oversized_amounts_never_reach_the_card_totals() {
        let company = company();
        let store = MemoryStore::with_data(vec![company.clone()], vec![], vec![]).unwrap();
        let revalidator = RecordingRevalidator::default();

        for _ in 0..2 {
            let err = create_investment(&store, &revalidator, &form(company.id, "90000000000000000", "paid"))
                .await
                .unwrap_err();
            assert_eq!(err.state().errors.get(Field::Amount), [crate::schema::AMOUNT_TOO_LARGE]);
        }

        let cards = database::fetch_card_data(&store, &store).await.unwrap();
        assert_eq!(cards.number_of_investments, 0);
        assert_eq!(cards.total_paid, 0);
    }

    #[tokio::test]
    async fn store_failure_becomes_a_database_error() {
        // No companies, so the foreign key check fails.
        let store = MemoryStore::new();
        let revalidator = RecordingRevalidator::default();

        let err = create_investment(&store, &revalidator, &form(Uuid::new_v4(), "10", "paid"))
            .await
            .unwrap_err();

        assert!(matches!(err, ActionError::Database { .. }));
        assert_eq!(err.state().message, "Database Error: Failed to Create Investment.");
        assert!(revalidator.paths().is_empty());
    }

    #[tokio::test]
    async fn update_rewrites_amount_company_and_status() {
        let first = company();
        let second = Company { id: Uuid::new_v4(), name: "Meta".into(), ..company() };
        let id = Uuid::new_v4();
        let existing = Investment {
            id,
            company_id: first.id,
            amount: 100,
            date: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
            status: InvestmentStatus::Pending,
        };
        let store = MemoryStore::with_data(vec![first, second.clone()], vec![existing], vec![]).unwrap();
        let revalidator = RecordingRevalidator::default();

        update_investment(&store, &revalidator, id, &form(second.id, "42.10", "paid"))
            .await
            .unwrap();

        let updated = store.fetch_by_id(id).await.unwrap().unwrap();
        assert_eq!(updated.company_id, second.id);
        assert_eq!(updated.amount, dec!(42.10));
        assert_eq!(updated.status, InvestmentStatus::Paid);
        assert_eq!(revalidator.paths().len(), 1);
    }

    #[tokio::test]
    async fn invalid_update_reports_update_message() {
        let store = MemoryStore::new();
        let revalidator = RecordingRevalidator::default();

        let err = update_investment(&store, &revalidator, Uuid::new_v4(), &InvestmentFormInput::default())
            .await
            .unwrap_err();
        assert_eq!(err.state().message, "Missing Fields. Failed to Update Investment.");
        assert!(revalidator.paths().is_empty());
    }

    #[tokio::test]
    async fn delete_then_fetch_returns_nothing() {
        let company = company();
        let id = Uuid::new_v4();
        let existing = Investment {
            id,
            company_id: company.id,
            amount: 5_000,
            date: NaiveDate::from_ymd_opt(2024, 8, 15).unwrap(),
            status: InvestmentStatus::Paid,
        };
        let store = MemoryStore::with_data(vec![company], vec![existing], vec![]).unwrap();
        let revalidator = RecordingRevalidator::default();

        delete_investment(&store, &revalidator, id).await.unwrap();

        assert!(store.fetch_by_id(id).await.unwrap().is_none());
        assert_eq!(revalidator.paths(), vec![INVESTMENTS_PATH.to_string()]);
    }
}
