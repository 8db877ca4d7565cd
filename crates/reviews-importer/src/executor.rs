//! Statement execution
//!
//! The runner talks to the database through `StatementExecutor`, so it can
//! be driven by an in-memory recorder in tests.

use async_trait::async_trait;
use reviews_db::PgPool;
use tracing::{debug, instrument};

use crate::error::ImportError;

/// Executes one SQL statement at a time
#[async_trait]
pub trait StatementExecutor: Send + Sync {
    /// Run `statement`, returning the number of rows affected
    async fn execute(&self, statement: &str) -> Result<u64, ImportError>;
}

/// PostgreSQL executor using the simple-query protocol, so DDL and `COPY`
/// statements run as written
#[derive(Clone)]
pub struct PgStatementExecutor {
    pool: PgPool,
}

impl PgStatementExecutor {
    /// Create a new PgStatementExecutor
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StatementExecutor for PgStatementExecutor {
    #[instrument(skip_all)]
    async fn execute(&self, statement: &str) -> Result<u64, ImportError> {
        let result = sqlx::raw_sql(statement).execute(&self.pool).await?;
        debug!(rows = result.rows_affected(), "Statement executed");
        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_executor_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgStatementExecutor>();
    }
}
