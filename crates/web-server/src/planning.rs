//! Goals, budget and portfolio pages. Their data is a fixed dataset bundled
//! with the server; only the derived figures are computed per request.

use chrono::NaiveDate;
use core_types::planning::{
    AssetAllocation, BudgetCategory, BudgetSummary, FinancialGoal, GoalProgress,
    PortfolioInsight, PortfolioPerformance,
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct PlanningData {
    pub goals: Vec<FinancialGoal>,
    pub budget: Vec<BudgetCategory>,
    pub portfolio: PortfolioData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioData {
    pub allocation: Vec<AssetAllocation>,
    pub performance: PortfolioPerformance,
    pub insights: Vec<PortfolioInsight>,
}

impl PlanningData {
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(include_str!("../data/planning.json"))
    }
}

#[derive(Debug, Serialize)]
pub struct GoalView<'a> {
    #[serde(flatten)]
    pub goal: &'a FinancialGoal,
    #[serde(flatten)]
    pub progress: GoalProgress,
}

#[derive(Debug, Serialize)]
pub struct BudgetLine<'a> {
    #[serde(flatten)]
    pub category: &'a BudgetCategory,
    pub remaining: i64,
}

#[derive(Debug, Serialize)]
pub struct BudgetView<'a> {
    pub categories: Vec<BudgetLine<'a>>,
    pub summary: BudgetSummary,
}

#[derive(Debug, Serialize)]
pub struct PortfolioView<'a> {
    #[serde(flatten)]
    pub portfolio: &'a PortfolioData,
    pub total_allocated: i64,
}

pub fn goals_view(data: &PlanningData, today: NaiveDate) -> Vec<GoalView<'_>> {
    data.goals
        .iter()
        .map(|goal| GoalView { goal, progress: goal.progress(today) })
        .collect()
}

pub fn budget_view(data: &PlanningData) -> BudgetView<'_> {
    BudgetView {
        categories: data
            .budget
            .iter()
            .map(|category| BudgetLine { category, remaining: category.remaining() })
            .collect(),
        summary: BudgetSummary::from_categories(&data.budget),
    }
}

pub fn portfolio_view(data: &PlanningData) -> PortfolioView<'_> {
    PortfolioView {
        portfolio: &data.portfolio,
        total_allocated: data.portfolio.allocation.iter().map(|a| a.amount).sum(),
    }
}
