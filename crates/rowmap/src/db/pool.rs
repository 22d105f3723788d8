//! Connection pooling for database connections.

use std::ops::{Deref, DerefMut};

use deadpool::managed::{self, PoolError};
pub use deadpool::managed::Status;
use rowmap_core::{
    driver::{Connection, Driver},
    Config, Error,
};
use tracing::info;

/// A connection pool that manages database connections.
#[derive(Debug)]
pub struct Pool {
    inner: managed::Pool<Manager>,
}

impl Pool {
    /// Creates a new connection pool from the given driver.
    ///
    /// `config.min_size` connections are opened before this returns.
    pub async fn new(driver: impl Driver, config: &Config) -> crate::Result<Self> {
        info!("create database connection pool...");

        let max_size = match driver.max_connections() {
            Some(max_connections) => config.max_size.min(max_connections),
            None => config.max_size,
        };

        let inner = managed::Pool::builder(Manager {
            driver: Box::new(driver),
        })
        .runtime(deadpool::Runtime::Tokio1)
        .max_size(max_size)
        .build()
        .map_err(Error::connection_pool)?;

        let pool = Self { inner };
        pool.warm(config.min_size.min(max_size)).await?;
        Ok(pool)
    }

    /// Opens `count` connections and returns them to the pool.
    async fn warm(&self, count: usize) -> crate::Result<()> {
        let mut connections = Vec::with_capacity(count);

        for _ in 0..count {
            connections.push(self.get().await?);
        }

        Ok(())
    }

    /// Retrieves a connection from the pool.
    pub async fn get(&self) -> crate::Result<PoolConnection> {
        let connection = self.inner.get().await.map_err(pool_error)?;
        Ok(PoolConnection { inner: connection })
    }

    /// Closes the pool. Waiting and future calls to [`Pool::get`] fail.
    pub fn close(&self) {
        self.inner.close();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.is_closed()
    }

    pub fn status(&self) -> Status {
        self.inner.status()
    }
}

fn pool_error(err: PoolError<Error>) -> Error {
    match err {
        PoolError::Closed => Error::pool_not_initialized(),
        PoolError::Backend(err) => err,
        err => Error::connection_pool(err),
    }
}

#[derive(Debug)]
struct Manager {
    driver: Box<dyn Driver>,
}

impl managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = Error;

    async fn create(&self) -> Result<Self::Type, Self::Error> {
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _obj: &mut Self::Type,
        _metrics: &managed::Metrics,
    ) -> managed::RecycleResult<Self::Error> {
        Ok(())
    }
}

/// A connection retrieved from a pool.
///
/// When dropped, the connection is returned to the pool for reuse.
pub struct PoolConnection {
    inner: managed::Object<Manager>,
}

impl PoolConnection {
    /// Removes the connection from the pool and closes it. The pool opens a
    /// new one the next time it needs it.
    pub fn discard(self) {
        drop(managed::Object::take(self.inner));
    }
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
