use tracing::trace;

use crate::columns::ColumnMap;
use crate::poll::{self, DEFAULT_POLL_INTERVAL_MS};
use crate::predicate::RowPredicate;
use crate::record::TableRecord;
use crate::source::TableSource;
use crate::{Error, Result};

/// A row is data-bearing iff at least one cell has non-whitespace content.
///
/// Permissive on purpose: the widget renders a fixed number of row slots
/// regardless of how many records exist, so structurally-present but
/// textually-empty rows must not count as records.
pub fn is_data_bearing(cells: &[String]) -> bool {
    cells.iter().any(|c| c.chars().any(|ch| !ch.is_whitespace()))
}

/// A matched row: its index in the snapshot plus its cell texts.
#[derive(Debug, Clone)]
pub struct RowMatch {
    pub index: usize,
    pub cells: Vec<String>,
}

/// Read/reconcile layer over a live table widget.
///
/// Every operation re-queries the source; nothing is cached. Operations that
/// observe the result of a UI mutation come in `await_*` form and poll until
/// the rendering settles or the timeout budget runs out.
pub struct TableStateReader<S: TableSource> {
    source: S,
    columns: ColumnMap,
    poll_interval_ms: u64,
}

impl<S: TableSource> TableStateReader<S> {
    pub fn new(source: S, columns: ColumnMap) -> Self {
        Self {
            source,
            columns,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }

    /// Override the poll interval (milliseconds) used by `await_*` methods.
    pub fn with_poll_interval(mut self, interval_ms: u64) -> Self {
        self.poll_interval_ms = interval_ms;
        self
    }

    /// The column map this reader was built with.
    pub fn columns(&self) -> &ColumnMap {
        &self.columns
    }

    /// 1-based position of a column by display name.
    pub fn column_index(&self, name: &str) -> Result<usize> {
        self.columns.index(name)
    }

    /// Count of data-bearing rows, evaluated fresh on every call.
    pub async fn count_data_rows(&self) -> Result<usize> {
        let rows = self.source.rows().await?;
        let count = rows.iter().filter(|cells| is_data_bearing(cells)).count();
        trace!("count_data_rows: {} of {} rendered rows", count, rows.len());
        Ok(count)
    }

    /// All data-bearing rows matching the predicate, in on-screen order.
    /// An empty result is a valid outcome ("no such row yet/anymore").
    pub async fn find_rows_matching(&self, predicate: &RowPredicate) -> Result<Vec<RowMatch>> {
        let rows = self.source.rows().await?;
        let mut matches = Vec::new();
        for (index, cells) in rows.into_iter().enumerate() {
            if !is_data_bearing(&cells) {
                continue;
            }
            if predicate.matches(&self.columns, &cells)? {
                matches.push(RowMatch { index, cells });
            }
        }
        Ok(matches)
    }

    /// The named column's cell in the single row matching the predicate,
    /// trimmed. Zero matches is `RowNotFound`, several is `AmbiguousRow`;
    /// callers that tolerate multiplicity use [`find_rows_matching`].
    ///
    /// [`find_rows_matching`]: Self::find_rows_matching
    pub async fn cell_value(&self, predicate: &RowPredicate, column: &str) -> Result<String> {
        let pos = self.columns.index(column)?;
        let matches = self.find_rows_matching(predicate).await?;
        let row = match matches.as_slice() {
            [] => return Err(Error::RowNotFound(predicate.to_string())),
            [row] => row,
            many => {
                return Err(Error::AmbiguousRow {
                    query: predicate.to_string(),
                    matches: many.len(),
                })
            }
        };
        Ok(row
            .cells
            .get(pos - 1)
            .map(|c| c.trim().to_string())
            .unwrap_or_default())
    }

    /// Structured records for every data-bearing row, in on-screen order.
    pub async fn extract_records(&self) -> Result<Vec<TableRecord>> {
        let rows = self.source.rows().await?;
        rows.iter()
            .filter(|cells| is_data_bearing(cells))
            .map(|cells| TableRecord::from_cells(&self.columns, cells))
            .collect()
    }

    /// Poll until the data-bearing row count equals `expected`. On timeout
    /// the error reports the expected and last observed counts.
    pub async fn await_row_count(&self, expected: usize, timeout_ms: u64) -> Result<()> {
        let reader = self;
        poll::until_value_eq(
            "data row count",
            &expected,
            timeout_ms,
            self.poll_interval_ms,
            move || async move { reader.count_data_rows().await },
        )
        .await
    }

    /// Poll until at least one row matches the predicate.
    pub async fn await_match(&self, predicate: &RowPredicate, timeout_ms: u64) -> Result<()> {
        let what = format!("row matching {predicate}");
        let reader = self;
        poll::until(&what, timeout_ms, self.poll_interval_ms, move || {
            async move { Ok(!reader.find_rows_matching(predicate).await?.is_empty()) }
        })
        .await
    }

    /// Poll until no row matches the predicate (e.g. after a delete).
    pub async fn await_no_match(&self, predicate: &RowPredicate, timeout_ms: u64) -> Result<()> {
        let what = format!("no row matching {predicate}");
        let reader = self;
        poll::until(&what, timeout_ms, self.poll_interval_ms, move || {
            async move { Ok(reader.find_rows_matching(predicate).await?.is_empty()) }
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    /// In-memory table with the same shape the live widget renders:
    /// real rows first, then empty placeholder slots.
    #[derive(Clone, Default)]
    struct FakeTable {
        rows: Arc<Mutex<Vec<Vec<String>>>>,
    }

    #[async_trait]
    impl TableSource for FakeTable {
        async fn rows(&self) -> Result<Vec<Vec<String>>> {
            Ok(self.rows.lock().unwrap().clone())
        }
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    fn placeholder() -> Vec<String> {
        row(&[" ", "\u{a0}", "", "", "", ""])
    }

    fn seeded() -> FakeTable {
        let table = FakeTable::default();
        {
            let mut rows = table.rows.lock().unwrap();
            rows.push(row(&["Cierra", "Vega", "39", "cierra@example.com", "10000", "Insurance"]));
            rows.push(row(&["Alden", "Cantrell", "45", "alden@example.com", "12000", "Compliance"]));
            rows.push(row(&["Kierra", "Gentry", "29", "kierra@example.com", "2000", "Legal"]));
            // The widget always renders a fixed number of row slots.
            for _ in 0..7 {
                rows.push(placeholder());
            }
        }
        table
    }

    fn reader(table: &FakeTable) -> TableStateReader<FakeTable> {
        TableStateReader::new(table.clone(), ColumnMap::web_table()).with_poll_interval(10)
    }

    #[tokio::test]
    async fn count_ignores_placeholder_rows() {
        let table = seeded();
        assert_eq!(reader(&table).count_data_rows().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn count_reflects_mutations_without_caching() {
        let table = seeded();
        let reader = reader(&table);
        assert_eq!(reader.count_data_rows().await.unwrap(), 3);

        table.rows.lock().unwrap().insert(
            3,
            row(&["John", "Doe", "30", "john@x.com", "1000", "QA"]),
        );
        assert_eq!(reader.count_data_rows().await.unwrap(), 4);

        table.rows.lock().unwrap().remove(0);
        assert_eq!(reader.count_data_rows().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn find_rows_matching_returns_all_matches_in_order() {
        let table = seeded();
        table
            .rows
            .lock()
            .unwrap()
            .insert(3, row(&["Cierra", "Stone", "22", "stone@example.com", "500", "QA"]));
        let reader = reader(&table);

        let matches = reader
            .find_rows_matching(&RowPredicate::column_contains("First Name", "Cierra"))
            .await
            .unwrap();
        assert_eq!(matches.len(), 2);
        assert!(matches[0].index < matches[1].index);

        let none = reader
            .find_rows_matching(&RowPredicate::column_contains("First Name", "Zelda"))
            .await
            .unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn multi_column_predicate_narrows_matches() {
        let table = seeded();
        table
            .rows
            .lock()
            .unwrap()
            .insert(3, row(&["Cierra", "Stone", "22", "stone@example.com", "500", "QA"]));
        let reader = reader(&table);

        let matches = reader
            .find_rows_matching(
                &RowPredicate::new()
                    .field("First Name", "Cierra")
                    .field("Department", "Insurance"),
            )
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].cells[1], "Vega");
    }

    #[tokio::test]
    async fn cell_value_requires_exactly_one_match() {
        let table = seeded();
        let reader = reader(&table);

        let salary = reader
            .cell_value(&RowPredicate::column_contains("First Name", "Alden"), "Salary")
            .await
            .unwrap();
        assert_eq!(salary, "12000");

        let err = reader
            .cell_value(&RowPredicate::column_contains("First Name", "Zelda"), "Salary")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::RowNotFound(_)));

        // "rra" hits both Cierra and Kierra.
        let err = reader
            .cell_value(&RowPredicate::column_contains("First Name", "rra"), "Salary")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::AmbiguousRow { matches: 2, .. }));
    }

    #[tokio::test]
    async fn cell_value_rejects_unknown_columns_before_matching() {
        let table = seeded();
        let err = reader(&table)
            .cell_value(&RowPredicate::column_contains("First Name", "Alden"), "Phone")
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnknownColumn(_)));
    }

    #[tokio::test]
    async fn extract_records_follows_screen_order_and_skips_placeholders() {
        let table = seeded();
        let records = reader(&table).extract_records().await.unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].first_name, "Cierra");
        assert_eq!(records[1].first_name, "Alden");
        assert_eq!(records[2].first_name, "Kierra");
    }

    #[tokio::test]
    async fn inserted_record_round_trips_field_for_field() {
        let table = seeded();
        let reader = reader(&table);
        table.rows.lock().unwrap().insert(
            3,
            row(&["John", "Doe", "30", "john@x.com", "1000", "QA"]),
        );

        let expected = TableRecord {
            first_name: "John".to_string(),
            last_name: "Doe".to_string(),
            email: "john@x.com".to_string(),
            age: "30".to_string(),
            salary: "1000".to_string(),
            department: "QA".to_string(),
        };

        let records = reader.extract_records().await.unwrap();
        let matching: Vec<_> = records.iter().filter(|r| **r == expected).collect();
        assert_eq!(matching.len(), 1);
    }

    #[tokio::test]
    async fn await_row_count_settles_after_delayed_mutation() {
        let table = seeded();
        let reader = reader(&table);

        let rows = table.rows.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(60)).await;
            rows.lock()
                .unwrap()
                .insert(3, row(&["John", "Doe", "30", "john@x.com", "1000", "QA"]));
        });

        reader.await_row_count(4, 2000).await.unwrap();
        assert_eq!(reader.count_data_rows().await.unwrap(), 4);
    }

    #[tokio::test]
    async fn await_row_count_timeout_reports_both_counts() {
        let table = seeded();
        let err = reader(&table).await_row_count(0, 50).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("expected 0"), "message: {message}");
        assert!(message.contains("last observed 3"), "message: {message}");
    }

    #[tokio::test]
    async fn await_no_match_settles_after_delayed_delete() {
        let table = seeded();
        let reader = reader(&table);
        let pred = RowPredicate::column_contains("Email", "alden@example.com");

        // Present before deletion.
        assert_eq!(reader.find_rows_matching(&pred).await.unwrap().len(), 1);

        let rows = table.rows.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(60)).await;
            rows.lock().unwrap().remove(1);
        });

        reader.await_no_match(&pred, 2000).await.unwrap();
        assert!(reader.find_rows_matching(&pred).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn await_match_times_out_when_row_never_appears() {
        let table = seeded();
        let err = reader(&table)
            .await_match(&RowPredicate::column_contains("Email", "nobody@x.com"), 50)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Timeout { .. }));
        assert!(err.to_string().contains("nobody@x.com"));
    }

    #[test]
    fn data_bearing_check_is_permissive_about_whitespace() {
        assert!(is_data_bearing(&row(&["", "", "x", ""])));
        assert!(!is_data_bearing(&row(&["", "  ", "\t", "\u{a0}"])));
        assert!(!is_data_bearing(&[]));
    }
}
