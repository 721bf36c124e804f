use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settlement state of an investment. Stored as lowercase text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    Pending,
    Paid,
}

impl InvestmentStatus {
    pub const ALL: [InvestmentStatus; 2] = [InvestmentStatus::Pending, InvestmentStatus::Paid];

    /// The exact text stored in the `investments.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvestmentStatus::Pending => "pending",
            InvestmentStatus::Paid => "paid",
        }
    }
}

impl fmt::Display for InvestmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvestmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(InvestmentStatus::Pending),
            "paid" => Ok(InvestmentStatus::Paid),
            other => Err(CoreError::InvalidInput("status".to_string(), other.to_string())),
        }
    }
}

// Lets `sqlx::FromRow` decode the text column via `#[sqlx(try_from = "String")]`.
impl TryFrom<String> for InvestmentStatus {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Priority of a savings goal on the goals page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalPriority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GoalCategory {
    Savings,
    Investment,
    Debt,
    Emergency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_only_the_two_stored_values() {
        assert_eq!("pending".parse::<InvestmentStatus>().unwrap(), InvestmentStatus::Pending);
        assert_eq!("paid".parse::<InvestmentStatus>().unwrap(), InvestmentStatus::Paid);
        assert!("Paid".parse::<InvestmentStatus>().is_err());
        assert!("overdue".parse::<InvestmentStatus>().is_err());
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&InvestmentStatus::Pending).unwrap();
        assert_eq!(json, "\"pending\"");
    }
}
