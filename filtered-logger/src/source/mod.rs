//! The row-logging pipeline around an external tabular data source.
//!
//! - **`config`**: [`DbConfig`], connection settings read from the environment.
//! - **`row`**: [`LogRow`], rows rendered as `key=value;` messages, and
//!   [`UserRow`].
//! - **`driver`**: [`RowSource`], [`Connect`] and [`log_rows`], which logs one
//!   redacted line per row.
//!
//! No database client ships with this crate; implement [`RowSource`] and
//! [`Connect`] over the client of your choice.

mod config;
mod driver;
mod row;

pub use config::{DATABASE_VAR, DbConfig, HOST_VAR, PASSWORD_VAR, USERNAME_VAR};
pub use driver::{Connect, RowSource, USERS_QUERY, log_rows, log_users, run, select_query};
pub use row::{LogRow, RowMessage, UserRow};
