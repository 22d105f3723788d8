mod builder;
mod pool;

pub use builder::Builder;
pub use pool::*;

use crate::{
    driver::{Execute, Query, Transaction},
    schema::{Model, Registry},
    Error, Record, Result,
};

use rowmap_core::stmt::{Row, Value};
use rowmap_sql::{Serializer, Statement};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Shared state between all `Db` clones.
#[derive(Debug)]
pub(crate) struct Shared {
    pub(crate) registry: Registry,
    pub(crate) pool: Pool,

    /// Session autocommit of pooled connections
    pub(crate) autocommit: bool,
}

/// A database handle: the registered models and a pool of connections.
///
/// Cloning is cheap; all clones share the same pool.
#[derive(Debug, Clone)]
pub struct Db {
    shared: Arc<Shared>,
}

impl Db {
    pub fn builder() -> Builder {
        Builder::default()
    }

    pub fn schema(&self) -> &Registry {
        &self.shared.registry
    }

    /// Metadata of a registered model.
    pub fn model(&self, name: &str) -> Result<Arc<Model>> {
        self.shared.registry.model(name)
    }

    /// A new, empty record of a registered model.
    pub fn record(&self, name: &str) -> Result<Record> {
        Ok(Record::new(self.model(name)?))
    }

    /// Runs a statement that returns rows.
    ///
    /// `size` caps the number of rows fetched; `None` fetches all of them.
    pub async fn select(
        &self,
        sql: &str,
        args: Vec<Value>,
        size: Option<usize>,
    ) -> Result<Vec<Row>> {
        info!(args = args.len(), "SQL: {sql}");

        let mut connection = self.shared.pool.get().await?;
        let response = connection
            .exec(
                Query {
                    sql: sql.to_string(),
                    args,
                    size,
                }
                .into(),
            )
            .await?;

        let mut rows = response.rows.into_values()?;
        if let Some(size) = size {
            rows.truncate(size);
        }

        debug!("rows returned: {}", rows.len());
        Ok(rows)
    }

    /// Runs a statement that modifies rows, returning the affected-row count.
    ///
    /// With `autocommit` false the statement runs inside its own transaction.
    /// Any failure rolls the transaction back and is returned as a query
    /// execution error wrapping the original cause.
    pub async fn execute(&self, sql: &str, args: Vec<Value>, autocommit: bool) -> Result<u64> {
        info!(args = args.len(), "SQL: {sql}");

        let mut connection = self.shared.pool.get().await?;

        if !autocommit {
            connection
                .exec(Transaction::Start.into())
                .await
                .map_err(|err| err.context(Error::query_execution(sql)))?;
        }

        // A session without autocommit needs an explicit commit either way
        let transactional = !autocommit || !self.shared.autocommit;

        match execute_on(&mut connection, sql, args, transactional).await {
            Ok(count) => Ok(count),
            Err(err) => {
                if transactional {
                    if let Err(rollback) = connection.exec(Transaction::Rollback.into()).await {
                        // The session may still be inside the transaction
                        warn!("rollback failed, discarding connection: {rollback}");
                        connection.discard();
                    }
                }

                Err(err.context(Error::query_execution(sql)))
            }
        }
    }

    /// Creates the table of every registered model that does not exist yet.
    pub async fn push_schema(&self) -> Result<()> {
        for model in self.shared.registry.models() {
            let sql = Serializer::new(model).serialize_template(&Statement::create_table());
            self.execute(&sql, vec![], true).await?;
        }

        Ok(())
    }

    /// Drops and recreates the table of every registered model.
    pub async fn reset_db(&self) -> Result<()> {
        for model in self.shared.registry.models() {
            let serializer = Serializer::new(model);

            for stmt in [Statement::drop_table_if_exists(), Statement::create_table()] {
                let sql = serializer.serialize_template(&stmt);
                self.execute(&sql, vec![], true).await?;
            }
        }

        Ok(())
    }

    /// Closes the pool. Any later call that needs a connection fails with a
    /// pool-not-initialized error.
    pub fn close(&self) {
        info!("close database connection pool");
        self.shared.pool.close();
    }

    pub fn is_closed(&self) -> bool {
        self.shared.pool.is_closed()
    }

    pub fn status(&self) -> Status {
        self.shared.pool.status()
    }
}

async fn execute_on(
    connection: &mut PoolConnection,
    sql: &str,
    args: Vec<Value>,
    commit: bool,
) -> Result<u64> {
    let response = connection
        .exec(
            Execute {
                sql: sql.to_string(),
                args,
            }
            .into(),
        )
        .await?;

    let count = response.rows.into_count()?;

    if commit {
        connection.exec(Transaction::Commit.into()).await?;
    }

    Ok(count)
}
