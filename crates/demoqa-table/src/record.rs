use serde::{Deserialize, Serialize};

use crate::columns::ColumnMap;
use crate::Result;

/// One table row as a structured record.
///
/// A snapshot of live UI state, valid only at the instant of extraction —
/// never cached, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: String,
    pub salary: String,
    pub department: String,
}

impl TableRecord {
    /// Build a record from one row's cells using the column map.
    /// Cell text is trimmed; cells past the end of a short row read as empty.
    pub fn from_cells(columns: &ColumnMap, cells: &[String]) -> Result<Self> {
        let field = |name: &str| -> Result<String> {
            let pos = columns.index(name)?;
            Ok(cells
                .get(pos - 1)
                .map(|c| c.trim().to_string())
                .unwrap_or_default())
        };

        Ok(Self {
            first_name: field("First Name")?,
            last_name: field("Last Name")?,
            email: field("Email")?,
            age: field("Age")?,
            salary: field("Salary")?,
            department: field("Department")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn builds_record_by_column_position_not_field_order() {
        // On-screen order: First, Last, Age, Email, Salary, Department.
        let columns = ColumnMap::web_table();
        let cells = row(&["John", "Doe", "30", "john@x.com", "1000", "QA"]);
        let record = TableRecord::from_cells(&columns, &cells).unwrap();

        assert_eq!(record.first_name, "John");
        assert_eq!(record.last_name, "Doe");
        assert_eq!(record.age, "30");
        assert_eq!(record.email, "john@x.com");
        assert_eq!(record.salary, "1000");
        assert_eq!(record.department, "QA");
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let columns = ColumnMap::web_table();
        let cells = row(&[" John ", "Doe\n", "30", " john@x.com ", "1000", "QA "]);
        let record = TableRecord::from_cells(&columns, &cells).unwrap();
        assert_eq!(record.first_name, "John");
        assert_eq!(record.email, "john@x.com");
        assert_eq!(record.department, "QA");
    }

    #[test]
    fn short_rows_yield_empty_fields() {
        let columns = ColumnMap::web_table();
        let record = TableRecord::from_cells(&columns, &row(&["John", "Doe"])).unwrap();
        assert_eq!(record.first_name, "John");
        assert_eq!(record.email, "");
        assert_eq!(record.department, "");
    }

    #[test]
    fn incomplete_column_map_is_a_caller_bug() {
        let columns = ColumnMap::new(["First Name", "Last Name"]);
        let result = TableRecord::from_cells(&columns, &row(&["John", "Doe"]));
        assert!(matches!(result, Err(Error::UnknownColumn(_))));
    }
}
