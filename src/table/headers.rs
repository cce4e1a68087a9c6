//! Header set computation across heterogeneous rows

use indexmap::IndexSet;

use super::Row;

/// Ordered, deduplicated column names.
///
/// Each row in a report may carry its own key set, e.g.
///
/// ```text
/// [ { "header1": "data1", "header2": "data2" },
///   { "header1": "data3", "header3": "data4" } ]
/// ```
///
/// so the final header has to be the union of every key, in the order each
/// key was first seen: `header1, header2, header3`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderSet {
    names: IndexSet<String>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Union of all keys across `rows`, first occurrence wins.
    pub fn from_rows(rows: &[Row]) -> Self {
        let mut headers = Self::new();
        for row in rows {
            headers.extend_from_row(row);
        }
        tracing::debug!(columns = headers.len(), rows = rows.len(), "Computed header set");
        headers
    }

    pub fn extend_from_row(&mut self, row: &Row) {
        for key in row.keys() {
            if !self.names.contains(key) {
                self.names.insert(key.clone());
            }
        }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for HeaderSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
