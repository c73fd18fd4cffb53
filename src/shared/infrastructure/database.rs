use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::{LogContext, TimedOperation};
use crate::{log_debug, log_info};
use diesel::connection::{AnsiTransactionManager, TransactionManager};
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// A single SQLite connection, opened once per top-level operation and held
/// until the `Database` is dropped.
pub struct Database {
    conn: Mutex<SqliteConnection>,
    location: String,
}

impl std::fmt::Debug for Database {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database")
            .field("location", &self.location)
            .finish()
    }
}

impl Database {
    pub fn open(path: &Path) -> AppResult<Self> {
        let location = path.to_string_lossy().into_owned();

        let conn = SqliteConnection::establish(&location).map_err(|e| {
            log_debug!("Failed to open database at {}: {}", location, e);
            AppError::from(e)
        })?;

        log_debug!("Opened database at {}", location);

        Ok(Self {
            conn: Mutex::new(conn),
            location,
        })
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    /// Create the `animes` table if it does not exist yet. Safe to call on
    /// every start, including against databases created by older versions
    /// of the tool.
    pub fn ensure_schema(&self) -> AppResult<()> {
        let mut conn = self.connection()?;

        let applied = conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
            AppError::DatabaseError(format!("Failed to create schema: {}", e))
        })?;

        if applied.is_empty() {
            log_debug!("Schema at {} is up to date", self.location);
        } else {
            log_info!(
                "Applied {} schema migration(s) to {}",
                applied.len(),
                self.location
            );
        }

        Ok(())
    }

    pub fn connection(&self) -> AppResult<MutexGuard<'_, SqliteConnection>> {
        self.conn
            .lock()
            .map_err(|_| AppError::DatabaseError("Database connection lock poisoned".to_string()))
    }

    /// Start the transaction that holds every write of a check run
    pub fn begin(&self) -> AppResult<()> {
        let timer = TimedOperation::start();
        let mut conn = self.connection()?;
        <AnsiTransactionManager as TransactionManager<SqliteConnection>>::begin_transaction(
            &mut *conn,
        )?;
        LogContext::db_operation("begin", "animes", Some(timer.elapsed_ms()));
        Ok(())
    }

    pub fn commit(&self) -> AppResult<()> {
        let timer = TimedOperation::start();
        let mut conn = self.connection()?;
        <AnsiTransactionManager as TransactionManager<SqliteConnection>>::commit_transaction(
            &mut *conn,
        )?;
        LogContext::db_operation("commit", "animes", Some(timer.elapsed_ms()));
        Ok(())
    }

    pub fn rollback(&self) -> AppResult<()> {
        let timer = TimedOperation::start();
        let mut conn = self.connection()?;
        <AnsiTransactionManager as TransactionManager<SqliteConnection>>::rollback_transaction(
            &mut *conn,
        )?;
        LogContext::db_operation("rollback", "animes", Some(timer.elapsed_ms()));
        Ok(())
    }
}
