pub mod enums;
pub mod error;
pub mod pagination;
pub mod planning;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use enums::{GoalCategory, GoalPriority, InsightKind, InvestmentStatus};
pub use error::CoreError;
pub use pagination::{ITEMS_PER_PAGE, page_offset, parse_page, total_pages};
pub use structs::{
    MAX_INVESTMENT_CENTS, MONTHS,
    CardMetrics, CompaniesTableRow, Company, CompanyField, Investment, InvestmentChanges,
    InvestmentForm, InvestmentsTableRow, LatestInvestmentRow, NewInvestment, Profit, StatusTotals,
};
