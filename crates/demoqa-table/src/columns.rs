use crate::{Error, Result};

/// Mapping from column display name to 1-based column position.
///
/// Fixed at construction. Name-keyed rather than positional so callers can
/// say "Email" regardless of rendering order; if the widget reorders its
/// columns only this map needs updating.
#[derive(Debug, Clone)]
pub struct ColumnMap {
    entries: Vec<(String, usize)>,
}

impl ColumnMap {
    /// Build a map from column names in on-screen order (positions 1..=n).
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| (name.into(), i + 1))
            .collect();
        Self { entries }
    }

    /// The standard demoqa web-table layout.
    pub fn web_table() -> Self {
        Self::new([
            "First Name",
            "Last Name",
            "Age",
            "Email",
            "Salary",
            "Department",
        ])
    }

    /// Look up the 1-based position of a column by display name.
    pub fn index(&self, name: &str) -> Result<usize> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, pos)| *pos)
            .ok_or_else(|| Error::UnknownColumn(name.to_string()))
    }

    /// Column names in position order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of mapped columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map has no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn web_table_positions() {
        let map = ColumnMap::web_table();
        assert_eq!(map.index("First Name").unwrap(), 1);
        assert_eq!(map.index("Last Name").unwrap(), 2);
        assert_eq!(map.index("Age").unwrap(), 3);
        assert_eq!(map.index("Email").unwrap(), 4);
        assert_eq!(map.index("Salary").unwrap(), 5);
        assert_eq!(map.index("Department").unwrap(), 6);
        assert_eq!(map.len(), 6);
    }

    #[test]
    fn index_is_stable_across_calls() {
        let map = ColumnMap::web_table();
        let first = map.index("Email").unwrap();
        for _ in 0..10 {
            assert_eq!(map.index("Email").unwrap(), first);
        }
    }

    #[test]
    fn unknown_column_errors() {
        let map = ColumnMap::web_table();
        let err = map.index("Phone").unwrap_err();
        assert!(matches!(err, Error::UnknownColumn(ref name) if name == "Phone"));
        assert!(err.to_string().contains("Phone"));
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let map = ColumnMap::web_table();
        assert!(map.index("email").is_err());
    }

    #[test]
    fn names_follow_position_order() {
        let map = ColumnMap::new(["A", "B", "C"]);
        let names: Vec<&str> = map.names().collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(map.index("C").unwrap(), 3);
    }
}
