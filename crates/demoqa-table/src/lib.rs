//! # demoqa-table
//!
//! Read/reconcile layer over a live, asynchronously-updating table widget.
//! Translates rendered rows into structured records, locates rows by
//! contained text, and provides idempotent read operations that poll until
//! the UI settles instead of reading mid-transition state.
//!
//! The crate is driver-agnostic: anything that can snapshot the rendered
//! rows implements [`TableSource`], so the same reader runs against a real
//! browser page or an in-memory fake in tests.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use demoqa_table::{ColumnMap, RowPredicate, TableSource, TableStateReader};
//!
//! # async fn example(source: impl TableSource) -> demoqa_table::Result<()> {
//! let table = TableStateReader::new(source, ColumnMap::web_table());
//!
//! // Wait for an add to settle, then read the new record back.
//! table.await_row_count(4, 5000).await?;
//! let email = table
//!     .cell_value(&RowPredicate::new().field("First Name", "John"), "Email")
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod columns;
mod predicate;
mod reader;
mod record;
mod source;

pub mod poll;

pub use columns::ColumnMap;
pub use predicate::RowPredicate;
pub use reader::{is_data_bearing, RowMatch, TableStateReader};
pub use record::TableRecord;
pub use source::TableSource;

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while reading or reconciling table state.
///
/// `UnknownColumn`, `RowNotFound` and `AmbiguousRow` signal caller bugs and
/// are never retried. `Timeout` is a test failure carrying the last value a
/// poll observed. Driver failures propagate unchanged as `Driver`.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown column: {0}")]
    UnknownColumn(String),

    #[error("no row matching {0}")]
    RowNotFound(String),

    #[error("ambiguous row query {query}: {matches} rows match")]
    AmbiguousRow { query: String, matches: usize },

    #[error("timed out after {timeout_ms}ms waiting for {what}: expected {expected}, last observed {last_observed}")]
    Timeout {
        what: String,
        expected: String,
        last_observed: String,
        timeout_ms: u64,
    },

    #[error("driver error: {0}")]
    Driver(String),
}
