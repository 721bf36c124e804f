use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load configuration for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    #[error("Constraint violated: {0}")]
    ConstraintViolation(String),

    #[error("Sum of {0} investments does not fit in 64-bit cents")]
    AggregateOverflow(&'static str),
}
