//! Form submission endpoints. Each one forwards to an investment action and
//! answers with a `303 See Other` to the listing on success.

use crate::{AppState, error::AppError};
use actions::{INVESTMENTS_PATH, InvestmentFormInput};
use axum::{
    Form,
    extract::{Path, State},
    response::Redirect,
};
use std::sync::Arc;
use uuid::Uuid;

/// # POST /dashboard/investments
pub async fn submit_create(
    State(state): State<Arc<AppState>>,
    Form(input): Form<InvestmentFormInput>,
) -> Result<Redirect, AppError> {
    let redirect = actions::create_investment(state.investments.as_ref(), &state.views, &input).await?;
    Ok(Redirect::to(redirect.location))
}

/// # POST /dashboard/investments/:id/edit
pub async fn submit_update(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
    Form(input): Form<InvestmentFormInput>,
) -> Result<Redirect, AppError> {
    let redirect = actions::update_investment(state.investments.as_ref(), &state.views, id, &input).await?;
    Ok(Redirect::to(redirect.location))
}

/// # POST /dashboard/investments/:id/delete
pub async fn submit_delete(
    Path(id): Path<Uuid>,
    State(state): State<Arc<AppState>>,
) -> Result<Redirect, AppError> {
    actions::delete_investment(state.investments.as_ref(), &state.views, id).await?;
    Ok(Redirect::to(INVESTMENTS_PATH))
}
