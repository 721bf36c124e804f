//! # Dashboard Database Crate
//!
//! This crate is the data-access layer of the dashboard. It hides all SQL
//! behind one store trait per entity.
//!
//! ## Architectural Principles
//!
//! - **Adapter:** Store traits (`InvestmentStore`, `CompanyStore`, `ProfitStore`)
//!   form the interface; `PgStores` implements them over PostgreSQL and
//!   `MemoryStore` implements them in process.
//! - **Runtime-checked SQL:** Queries are parameterized `sqlx::query_as` calls,
//!   so the crate builds without a database.
//! - **Asynchronous & Pooled:** One `PgPool` is shared by every store.
//!
//! ## Public API
//!
//! - `connect` / `run_migrations`: pool creation and schema migrations.
//! - `fetch_card_data`: concurrent aggregate reads for the summary cards.
//! - `DbError`: the error type returned by every store.

pub mod connection;
pub mod dashboard;
pub mod error;
pub mod filter;
pub mod memory;
pub mod postgres;
pub mod stores;

// Re-export the key components to create a clean, public-facing API.
pub use connection::{connect, run_migrations};
pub use dashboard::fetch_card_data;
pub use error::DbError;
pub use memory::MemoryStore;
pub use postgres::{PgCompanyStore, PgInvestmentStore, PgProfitStore, PgStores};
pub use stores::{CompanyStore, InvestmentStore, ProfitStore};
