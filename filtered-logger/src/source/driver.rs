//! The row-logging driver: query a row source and log one redacted line per row.

use std::io::Write;

use super::{config::DbConfig, row::LogRow, row::UserRow};
use crate::{
    error::{Error, Result},
    format::Level,
    logger::RedactingLogger,
};

/// Query for every logged column of the `users` table.
pub const USERS_QUERY: &str =
    "SELECT name, email, phone, ssn, password, ip, last_login, user_agent FROM users;";

/// A tabular data source, typically a database cursor.
///
/// Implementations wrap a concrete client. Errors are surfaced unchanged by
/// [`log_rows`].
pub trait RowSource {
    type Row: LogRow;
    type Error: std::error::Error + Send + Sync + 'static;
    type Rows<'a>: Iterator<Item = Result<Self::Row, Self::Error>>
    where
        Self: 'a;

    /// Executes `sql` and returns the resulting rows.
    fn query(&mut self, sql: &str) -> Result<Self::Rows<'_>, Self::Error>;
}

/// Opens a [`RowSource`] from connection settings.
pub trait Connect {
    type Source: RowSource;
    type Error: std::error::Error + Send + Sync + 'static;

    fn connect(&self, config: &DbConfig) -> Result<Self::Source, Self::Error>;
}

/// `SELECT <columns> FROM <table>;` over the columns of `R`.
pub fn select_query<R: LogRow>(table: &str) -> String {
    format!("SELECT {} FROM {table};", R::COLUMNS.join(", "))
}

/// Logs every row of `table` at `INFO` and returns the number of rows logged.
///
/// The first source or sink error aborts the run.
pub fn log_rows<S, W>(source: &mut S, table: &str, logger: &RedactingLogger<W>) -> Result<usize>
where
    S: RowSource,
    W: Write,
{
    let sql = select_query::<S::Row>(table);
    tracing::debug!(%table, "querying row source");

    let rows = source.query(&sql).map_err(Error::from_source)?;
    let mut logged = 0;
    for row in rows {
        let row = row.map_err(Error::from_source)?;
        logger.log(Level::Info, &row.log_message())?;
        logged += 1;
    }

    tracing::info!(%table, rows = logged, "logged rows");
    Ok(logged)
}

/// Logs the `users` table.
pub fn log_users<S, W>(source: &mut S, logger: &RedactingLogger<W>) -> Result<usize>
where
    S: RowSource<Row = UserRow>,
    W: Write,
{
    log_rows(source, "users", logger)
}

/// Connects with `config` and logs the `users` table.
pub fn run<C, W>(connector: &C, config: &DbConfig, logger: &RedactingLogger<W>) -> Result<usize>
where
    C: Connect,
    C::Source: RowSource<Row = UserRow>,
    W: Write,
{
    tracing::debug!(host = %config.host, database = ?config.database, "connecting to row source");
    let mut source = connector.connect(config).map_err(Error::from_source)?;
    log_users(&mut source, logger)
}
