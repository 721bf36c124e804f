//! The investment form schema.

use crate::state::{Field, FieldErrors};
use core_types::{InvestmentStatus, MAX_INVESTMENT_CENTS};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::str::FromStr;
use uuid::Uuid;

pub const COMPANY_REQUIRED: &str = "Please select a company.";
pub const AMOUNT_NOT_POSITIVE: &str = "Please enter an amount greater than $0.";
pub const AMOUNT_NOT_A_NUMBER: &str = "Please enter a valid amount.";
pub const AMOUNT_TOO_LARGE: &str = "Please enter a smaller amount.";
pub const STATUS_REQUIRED: &str = "Please select an investment status.";

/// A form submission exactly as received. Missing fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvestmentFormInput {
    pub company_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

/// A submission that passed the schema. `amount` is in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedInvestment {
    pub company_id: Uuid,
    pub amount: i64,
    pub status: InvestmentStatus,
}

/// Checks every field and collects all messages rather than stopping at the first.
pub fn validate(input: &InvestmentFormInput) -> Result<ValidatedInvestment, FieldErrors> {
    let mut errors = FieldErrors::default();

    let company_id = non_blank(&input.company_id).and_then(|raw| Uuid::parse_str(raw).ok());
    if company_id.is_none() {
        errors.push(Field::CompanyId, COMPANY_REQUIRED);
    }

    let amount = match parse_amount(non_blank(&input.amount)) {
        Ok(cents) => Some(cents),
        Err(message) => {
            errors.push(Field::Amount, message);
            None
        }
    };

    let status = input.status.as_deref().and_then(|raw| InvestmentStatus::from_str(raw).ok());
    if status.is_none() {
        errors.push(Field::Status, STATUS_REQUIRED);
    }

    match (company_id, amount, status) {
        (Some(company_id), Some(amount), Some(status)) => Ok(ValidatedInvestment { company_id, amount, status }),
        _ => Err(errors),
    }
}

/// Converts dollars to integer cents, `round(dollars × 100)` with halves away
/// from zero. `None` when the result does not fit in an `i64`.
pub fn dollars_to_cents(dollars: Decimal) -> Option<i64> {
    dollars
        .checked_mul(Decimal::ONE_HUNDRED)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// A missing amount counts as zero.
fn parse_amount(raw: Option<&str>) -> Result<i64, &'static str> {
    let Some(raw) = raw else {
        return Err(AMOUNT_NOT_POSITIVE);
    };
    let dollars = Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|_| AMOUNT_NOT_A_NUMBER)?;
    if dollars <= Decimal::ZERO {
        return Err(AMOUNT_NOT_POSITIVE);
    }
    match dollars_to_cents(dollars) {
        Some(0) => Err(AMOUNT_NOT_POSITIVE),
        Some(cents) if cents <= MAX_INVESTMENT_CENTS => Ok(cents),
        _ => Err(AMOUNT_TOO_LARGE),
    }
}
