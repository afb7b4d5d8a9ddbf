use std::sync::Arc;

use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection, DbErr};
use time::Duration;
use tower_sessions::{Expiry, Session};
use tower_sessions_sqlx_store::SqliteStore;

use crate::error::TestError;

/// Isolated environment for a single test.
///
/// Holds an in-memory SQLite database and, for dashboard tests, a session stored in
/// that same database. Both are created on first use and live as long as the context.
#[derive(Default)]
pub struct TestContext {
    /// In-memory database, `None` until [`TestContext::database`] is called.
    pub db: Option<DatabaseConnection>,
    /// Session backed by [`SqliteStore`], `None` until [`TestContext::session`] is called.
    pub session: Option<Session>,
}

impl TestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the database connection, connecting on first call.
    pub async fn database(&mut self) -> Result<&DatabaseConnection, TestError> {
        if self.db.is_none() {
            self.db = Some(Database::connect("sqlite::memory:").await?);
        }

        self.db
            .as_ref()
            .ok_or_else(|| DbErr::Custom("database not initialized".to_string()).into())
    }

    /// Executes the CREATE TABLE statements in order.
    ///
    /// Usually called by `TestBuilder::build()` rather than by tests directly.
    pub async fn with_tables(&mut self, stmts: Vec<TableCreateStatement>) -> Result<(), TestError> {
        let db = self.database().await?;

        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Returns the session, creating the session table and a fresh session on first call.
    ///
    /// The session expires after 7 days of inactivity, matching the dashboard.
    pub async fn session(&mut self) -> Result<&Session, TestError> {
        if self.session.is_none() {
            let pool = self.database().await?.get_sqlite_connection_pool().clone();
            let store = SqliteStore::new(pool);

            store
                .migrate()
                .await
                .map_err(|e| DbErr::Custom(e.to_string()))?;

            self.session = Some(Session::new(
                None,
                Arc::new(store),
                Some(Expiry::OnInactivity(Duration::days(7))),
            ));
        }

        self.session
            .as_ref()
            .ok_or_else(|| DbErr::Custom("session not initialized".to_string()).into())
    }

    /// Returns both the database and the session, initializing whichever is missing.
    ///
    /// Avoids holding two mutable borrows when a test needs both, as the auth guard
    /// tests do.
    pub async fn db_and_session(&mut self) -> Result<(&DatabaseConnection, &Session), TestError> {
        self.session().await?;

        match (&self.db, &self.session) {
            (Some(db), Some(session)) => Ok((db, session)),
            _ => Err(DbErr::Custom("test context not initialized".to_string()).into()),
        }
    }
}
