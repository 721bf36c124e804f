use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use database::{CompanyStore, InvestmentStore, MemoryStore, PgStores, ProfitStore};
use formatting::Locale;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowHeaders, AllowOrigin, Any, CorsLayer, ExposeHeaders},
    trace::TraceLayer,
};

pub mod cache;
pub mod error;
pub mod forms;
pub mod handlers;
pub mod planning;
pub mod views;

pub use cache::ViewCache;
pub use planning::PlanningData;

/// Form bodies are small; anything beyond this is rejected before parsing.
const MAX_BODY_BYTES: usize = 64 * 1024;

/// The shared application state that all handlers can access.
#[derive(Clone)]
pub struct AppState {
    pub investments: Arc<dyn InvestmentStore>,
    pub companies: Arc<dyn CompanyStore>,
    pub profit: Arc<dyn ProfitStore>,
    pub views: ViewCache,
    pub locale: Locale,
    pub planning: Arc<PlanningData>,
}

impl AppState {
    /// State backed by PostgreSQL.
    pub fn postgres(stores: PgStores, locale: Locale, planning: PlanningData) -> Self {
        Self {
            investments: Arc::new(stores.investments),
            companies: Arc::new(stores.companies),
            profit: Arc::new(stores.profit),
            views: ViewCache::new(),
            locale,
            planning: Arc::new(planning),
        }
    }

    /// State backed by an in-process store. Every trait object shares the same data.
    pub fn in_memory(store: MemoryStore, locale: Locale, planning: PlanningData) -> Self {
        Self {
            investments: Arc::new(store.clone()),
            companies: Arc::new(store.clone()),
            profit: Arc::new(store),
            views: ViewCache::new(),
            locale,
            planning: Arc::new(planning),
        }
    }
}

/// Builds the dashboard router with CORS, request tracing and a body limit.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::any())
        .allow_methods(Any)
        .allow_headers(AllowHeaders::any())
        .expose_headers(ExposeHeaders::any());

    Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .route("/dashboard", get(handlers::get_overview))
        .route(
            "/dashboard/investments",
            get(handlers::get_investments).post(forms::submit_create),
        )
        .route("/dashboard/investments/create", get(handlers::get_create_investment))
        .route(
            "/dashboard/investments/:id/edit",
            get(handlers::get_edit_investment).post(forms::submit_update),
        )
        .route("/dashboard/investments/:id/delete", post(forms::submit_delete))
        .route("/dashboard/companies", get(handlers::get_companies))
        .route("/dashboard/goals", get(handlers::get_goals))
        .route("/dashboard/budget", get(handlers::get_budget))
        .route("/dashboard/portfolio", get(handlers::get_portfolio))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

/// Serves the dashboard on `addr` until Ctrl-C.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = build_router(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web server listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Web server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for the shutdown signal.");
    }
}
