//! # Investment Form Actions
//!
//! The mutation side of the dashboard. Each action validates the raw form
//! submission, performs one insert, update or delete through an
//! `InvestmentStore`, invalidates the cached investment views and tells the
//! caller where to redirect.
//!
//! Validation failures never reach the store. Store failures are logged and
//! reported with a generic message.

pub mod error;
pub mod investments;
pub mod revalidate;
pub mod schema;
pub mod state;

pub use error::ActionError;
pub use investments::{create_investment, delete_investment, update_investment};
pub use revalidate::{INVESTMENTS_PATH, Redirect, Revalidator};
pub use schema::{InvestmentFormInput, ValidatedInvestment, dollars_to_cents, validate};
pub use state::{Field, FieldErrors, FormState};
