use crate::planning::{budget_view, goals_view, portfolio_view};
use crate::views::{
    CompanyView, CreateInvestmentPage, EditInvestmentPage, InvestmentView, InvestmentsPage,
    LatestInvestmentView, Overview, RevenueChart,
};
use crate::{AppState, error::AppError};
use actions::INVESTMENTS_PATH;
use axum::{
    Json,
    extract::{Path, Query, State},
};
use chrono::Utc;
use core_types::parse_page;
use database::fetch_card_data;
use formatting::{generate_pagination, generate_y_axis};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Rows on the overview's latest-investments panel.
const LATEST_INVESTMENTS: i64 = 5;

#[derive(Debug, Deserialize)]
pub struct ListingParams {
    #[serde(default)]
    pub query: String,
    /// Kept as text so a malformed page falls back to page 1 instead of a 400.
    pub page: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}

/// # GET /dashboard
/// Summary cards, revenue chart and latest investments, fetched concurrently.
pub async fn get_overview(State(state): State<Arc<AppState>>) -> Result<Json<Overview>, AppError> {
    let (cards, months, latest) = tokio::try_join!(
        fetch_card_data(state.investments.as_ref(), state.companies.as_ref()),
        state.profit.fetch_all(),
        state.investments.fetch_latest(LATEST_INVESTMENTS),
    )?;

    let y_axis = generate_y_axis(&months);
    Ok(Json(Overview {
        cards: cards.into(),
        revenue: RevenueChart { months, y_axis },
        latest_investments: latest.into_iter().map(LatestInvestmentView::from).collect(),
    }))
}

/// # GET /dashboard/investments?query=&page=
/// One page of the filtered listing. Served from the view cache until a
/// mutation revalidates it.
pub async fn get_investments(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListingParams>,
) -> Result<Json<Value>, AppError> {
    let page = parse_page(params.page.as_deref());
    let key = format!("{INVESTMENTS_PATH}?query={}&page={page}", params.query);
    if let Some(view) = state.views.get(&key) {
        return Ok(Json(view));
    }

    let generation = state.views.generation();
    let (rows, total_pages) = tokio::try_join!(
        state.investments.fetch_filtered(&params.query, page),
        state.investments.fetch_pages(&params.query),
    )?;

    let view = serde_json::to_value(InvestmentsPage {
        pagination: generate_pagination(page, total_pages),
        investments: rows.into_iter().map(|row| InvestmentView::new(row, state.locale)).collect(),
        query: params.query,
        current_page: page,
        total_pages,
    })?;
    state.views.insert_if_current(key, view.clone(), generation);
    Ok(Json(view))
}

/// # GET /dashboard/investments/create
pub async fn get_create_investment(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CreateInvestmentPage>, AppError> {
    let companies = state.companies.fetch_all().await?;
    Ok(Json(CreateInvestmentPage { companies }))
}

/// # GET /dashboard/investments/:id/edit
pub async fn get_edit_investment(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<EditInvestmentPage>, AppError> {
    let (investment, companies) = tokio::try_join!(
        state.investments.fetch_by_id(id),
        state.companies.fetch_all(),
    )?;
    let investment = investment.ok_or_else(|| AppError::NotFound(format!("Investment {id} not found")))?;
    Ok(Json(EditInvestmentPage { investment, companies }))
}

/// # GET /dashboard/companies?query=
pub async fn get_companies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<CompanyView>>, AppError> {
    let rows = state.companies.fetch_filtered(&params.query).await?;
    Ok(Json(rows.into_iter().map(CompanyView::from).collect()))
}

/// # GET /dashboard/goals
pub async fn get_goals(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let goals = goals_view(&state.planning, Utc::now().date_naive());
    Ok(Json(serde_json::json!({ "goals": serde_json::to_value(goals)? })))
}

/// # GET /dashboard/budget
pub async fn get_budget(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    Ok(Json(serde_json::to_value(budget_view(&state.planning))?))
}

/// # GET /dashboard/portfolio
pub async fn get_portfolio(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    Ok(Json(serde_json::to_value(portfolio_view(&state.planning))?))
}
