//! Planning structures shown on the goals, budget and portfolio pages.
//!
//! None of these are persisted. Amounts are whole dollars.

use crate::enums::{GoalCategory, GoalPriority, InsightKind};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialGoal {
    pub id: String,
    pub name: String,
    pub target_amount: i64,
    pub current_amount: i64,
    pub target_date: NaiveDate,
    pub category: GoalCategory,
    pub priority: GoalPriority,
}

/// Figures derived from a goal for a given day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    /// Percentage of the target reached. May exceed 100.
    pub progress_pct: f64,
    pub remaining: i64,
    pub days_until_target: i64,
}

impl FinancialGoal {
    pub fn progress(&self, today: NaiveDate) -> GoalProgress {
        let progress_pct = if self.target_amount == 0 {
            0.0
        } else {
            self.current_amount as f64 / self.target_amount as f64 * 100.0
        };
        GoalProgress {
            progress_pct,
            remaining: self.target_amount - self.current_amount,
            days_until_target: (self.target_date - today).num_days(),
        }
    }
}

/// One category line of the monthly budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetCategory {
    pub category: String,
    pub budgeted: i64,
    pub spent: i64,
    pub icon: String,
}

impl BudgetCategory {
    /// Negative when the category is over budget.
    pub fn remaining(&self) -> i64 {
        self.budgeted - self.spent
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BudgetSummary {
    pub total_budgeted: i64,
    pub total_spent: i64,
    pub total_remaining: i64,
}

impl BudgetSummary {
    pub fn from_categories(categories: &[BudgetCategory]) -> Self {
        let total_budgeted: i64 = categories.iter().map(|c| c.budgeted).sum();
        let total_spent: i64 = categories.iter().map(|c| c.spent).sum();
        Self {
            total_budgeted,
            total_spent,
            total_remaining: total_budgeted - total_spent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetAllocation {
    pub category: String,
    pub amount: i64,
    pub percentage: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioPerformance {
    pub total_value: i64,
    pub total_gain: i64,
    pub percentage_gain: f64,
    pub monthly_change: f64,
    pub top_performer: String,
    pub top_gain: f64,
    pub worst_performer: String,
    pub worst_loss: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioInsight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub value: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn goal_progress_counts_days_to_target() {
        let goal = FinancialGoal {
            id: "1".into(),
            name: "Emergency Fund".into(),
            target_amount: 15_000,
            current_amount: 12_000,
            target_date: date(2024, 12, 31),
            category: GoalCategory::Emergency,
            priority: GoalPriority::High,
        };
        let progress = goal.progress(date(2024, 12, 1));
        assert_eq!(progress.progress_pct, 80.0);
        assert_eq!(progress.remaining, 3_000);
        assert_eq!(progress.days_until_target, 30);
    }

    #[test]
    fn budget_summary_allows_overspending() {
        let categories = vec![
            BudgetCategory { category: "Housing".into(), budgeted: 2000, spent: 1850, icon: "H".into() },
            BudgetCategory { category: "Shopping".into(), budgeted: 400, spent: 520, icon: "S".into() },
        ];
        assert_eq!(categories[1].remaining(), -120);
        let summary = BudgetSummary::from_categories(&categories);
        assert_eq!(summary.total_budgeted, 2400);
        assert_eq!(summary.total_spent, 2370);
        assert_eq!(summary.total_remaining, 30);
    }
}
