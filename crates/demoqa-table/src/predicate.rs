use std::fmt;

use crate::columns::ColumnMap;
use crate::Result;

/// Content match over named columns.
///
/// A row matches iff every named column's cell text contains the expected
/// substring. Used to locate rows for click targets, existence checks and
/// multi-field assertions.
#[derive(Debug, Clone, Default)]
pub struct RowPredicate {
    fields: Vec<(String, String)>,
}

impl RowPredicate {
    /// Empty predicate. Matches every data-bearing row until narrowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `column`'s cell to contain `expected`.
    pub fn field(mut self, column: impl Into<String>, expected: impl Into<String>) -> Self {
        self.fields.push((column.into(), expected.into()));
        self
    }

    /// Shorthand for a single-column predicate.
    pub fn column_contains(column: impl Into<String>, expected: impl Into<String>) -> Self {
        Self::new().field(column, expected)
    }

    /// Number of column constraints.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the predicate has no constraints.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Evaluate against one row's cells. Unknown column names error out
    /// immediately rather than silently failing the match.
    pub fn matches(&self, columns: &ColumnMap, cells: &[String]) -> Result<bool> {
        for (column, expected) in &self.fields {
            let pos = columns.index(column)?;
            let cell = cells.get(pos - 1).map(|c| c.trim()).unwrap_or("");
            if !cell.contains(expected.as_str()) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl fmt::Display for RowPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fields.is_empty() {
            return f.write_str("(any row)");
        }
        for (i, (column, expected)) in self.fields.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{column}~\"{expected}\"")?;
        }
        Ok(())
    }
}
