//! Shared `PostgreSQL` connection pool and schema bootstrap.

use diesel::connection::SimpleConnection;
use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};
use thiserror::Error;

/// `PostgreSQL` connection pool shared by the project and task adapters.
pub type PgPool = Pool<ConnectionManager<PgConnection>>;

/// SQL creating the project and task tables.
pub const CREATE_SCHEMA_SQL: &str =
    include_str!("../migrations/2026-10-01-000000_create_projects_and_tasks/up.sql");

/// Errors raised while preparing the database.
#[derive(Debug, Error)]
pub enum PersistenceSetupError {
    /// The pool could not be built or a connection could not be checked out.
    #[error("connection pool error: {0}")]
    Pool(#[from] PoolError),
    /// Applying the schema failed.
    #[error("schema setup failed: {0}")]
    Schema(#[from] diesel::result::Error),
}

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`PersistenceSetupError::Pool`] when the initial connections
/// cannot be established.
pub fn build_pool(database_url: &str, max_size: u32) -> Result<PgPool, PersistenceSetupError> {
    let manager = ConnectionManager::<PgConnection>::new(database_url);
    Ok(Pool::builder().max_size(max_size).build(manager)?)
}

/// Creates the tables if they do not exist yet.
///
/// This is a blocking operation; call it before the server starts or from
/// `spawn_blocking`.
///
/// # Errors
///
/// Returns [`PersistenceSetupError`] when no connection is available or the
/// SQL fails.
pub fn apply_schema(pool: &PgPool) -> Result<(), PersistenceSetupError> {
    let mut connection = pool.get()?;
    connection.batch_execute(CREATE_SCHEMA_SQL)?;
    log::info!("database schema is up to date");
    Ok(())
}
