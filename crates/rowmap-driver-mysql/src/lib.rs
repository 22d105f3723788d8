mod value;
pub(crate) use value::Value;

use mysql_async::{prelude::Queryable, Conn, Opts, OptsBuilder, Params};
use rowmap_core::{
    async_trait,
    driver::{
        operation::{Execute, Query},
        Driver, Operation, Response,
    },
    stmt::{self, Row},
    Config, Error, Result,
};

#[derive(Debug)]
pub struct MySQL {
    opts: Opts,
}

impl MySQL {
    pub fn new(config: &Config) -> Result<Self> {
        config.validate()?;

        if config.charset.is_empty()
            || !config
                .charset
                .chars()
                .all(|ch| ch.is_ascii_alphanumeric() || ch == '_')
        {
            return Err(Error::invalid_config(format!(
                "invalid charset `{}`",
                config.charset
            )));
        }

        let opts = OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .tcp_port(config.port)
            .user(config.user.clone())
            .pass(Some(config.password.clone()))
            .db_name(config.database.clone())
            // Report matched rows, not changed rows, so that an update
            // writing identical values still counts as one row.
            .client_found_rows(true)
            .init(vec![
                format!("SET NAMES {}", config.charset),
                format!("SET autocommit={}", u8::from(config.autocommit)),
            ]);

        Ok(Self { opts: opts.into() })
    }

    /// Creates a driver from a `mysql://` connection URL.
    pub fn from_url(url: &str) -> Result<Self> {
        Self::new(&Config::from_url(url)?)
    }
}

#[async_trait]
impl Driver for MySQL {
    async fn connect(&self) -> Result<Box<dyn rowmap_core::driver::Connection>> {
        let conn = Conn::new(self.opts.clone()).await.map_err(Error::driver)?;
        Ok(Box::new(Connection::new(conn)))
    }
}

#[derive(Debug)]
pub struct Connection {
    conn: Conn,
}

impl Connection {
    pub fn new(conn: Conn) -> Self {
        Self { conn }
    }

    async fn query(&mut self, op: Query) -> Result<Vec<Row>> {
        let mut result = self
            .conn
            .exec_iter(op.sql, params(&op.args))
            .await
            .map_err(Error::driver)?;

        let mut rows = vec![];

        while op.size.map_or(true, |size| rows.len() < size) {
            let Some(mut row) = result.next().await.map_err(Error::driver)? else {
                break;
            };

            let columns = row.columns();
            let mut values = Row::new();

            for (i, column) in columns.iter().enumerate() {
                let value = row
                    .take::<mysql_async::Value, _>(i)
                    .unwrap_or(mysql_async::Value::NULL);
                values.insert(
                    column.name_str().into_owned(),
                    Value::from_sql(value, column).into_inner(),
                );
            }

            rows.push(values);
        }

        // Release whatever the size limit left unread
        result.drop_result().await.map_err(Error::driver)?;

        Ok(rows)
    }

    async fn execute(&mut self, op: Execute) -> Result<u64> {
        let result = self
            .conn
            .exec_iter(op.sql, params(&op.args))
            .await
            .map_err(Error::driver)?;

        let count = result.affected_rows();
        result.drop_result().await.map_err(Error::driver)?;

        Ok(count)
    }
}

#[async_trait]
impl rowmap_core::driver::Connection for Connection {
    async fn exec(&mut self, op: Operation) -> Result<Response> {
        match op {
            Operation::Query(op) => Ok(Response::values(self.query(op).await?)),
            Operation::Execute(op) => Ok(Response::count(self.execute(op).await?)),
            Operation::Transaction(op) => {
                self.conn
                    .query_drop(op.as_sql())
                    .await
                    .map_err(Error::driver)?;
                Ok(Response::count(0))
            }
        }
    }
}

fn params(args: &[stmt::Value]) -> Params {
    if args.is_empty() {
        return Params::Empty;
    }

    Params::Positional(
        args.iter()
            .map(|arg| Value::from(arg.clone()).to_mysql())
            .collect(),
    )
}
