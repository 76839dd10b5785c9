/// Destination columns, in the order they are written.
pub const OUTPUT_COLUMNS: [&str; 12] = [
    "ID",
    "Title",
    "Folder",
    "Emoji",
    "Priority",
    "Tags",
    "Owner",
    "Description",
    "Examples",
    "Labels",
    "Url",
    "Matched",
];

/// Columns an export must carry for a conversion to start.
pub const DEFAULT_REQUIRED_COLUMNS: [&str; 3] = ["Title", "Key", "Suite"];

/// One exported test case: column name to value, in header order.
///
/// A short CSV line yields a record without its trailing columns, so lookups
/// distinguish an absent column (`None`) from an empty cell (`Some("")`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    pub fields: Vec<(String, String)>,
}

impl Record {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// Value of a column that must be present and hold something besides whitespace.
    pub fn non_blank(&self, column: &str) -> Option<&str> {
        self.get(column).filter(|v| !v.trim().is_empty())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

/// Parsed export: header row plus data rows in file order.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub records: Vec<Record>,
}

/// One row of the import file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputRow {
    pub id: Option<String>,
    pub title: String,
    pub folder: String,
    pub emoji: String,
    pub priority: String,
    pub tags: String,
    pub owner: String,
    pub description: String,
    pub examples: String,
    pub labels: String,
    pub url: String,
    pub matched: String,
}

impl OutputRow {
    /// Cell values lined up with [`OUTPUT_COLUMNS`]. A missing ID is written empty.
    pub fn values(&self) -> [&str; 12] {
        [
            self.id.as_deref().unwrap_or_default(),
            self.title.as_str(),
            self.folder.as_str(),
            self.emoji.as_str(),
            self.priority.as_str(),
            self.tags.as_str(),
            self.owner.as_str(),
            self.description.as_str(),
            self.examples.as_str(),
            self.labels.as_str(),
            self.url.as_str(),
            self.matched.as_str(),
        ]
    }
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub rows: Vec<OutputRow>,
    pub csv_output: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_lookup() {
        let record: Record = [("Title", "Login"), ("Key", "")].into_iter().collect();

        assert_eq!(record.get("Title"), Some("Login"));
        assert_eq!(record.get("Key"), Some(""));
        assert_eq!(record.get("Suite"), None);
        assert_eq!(record.non_blank("Key"), None);
    }

    #[test]
    fn test_output_row_values_follow_column_order() {
        let row = OutputRow {
            id: Some("T00000001".to_string()),
            title: "Login".to_string(),
            folder: "Auth".to_string(),
            priority: "high".to_string(),
            description: "desc".to_string(),
            ..Default::default()
        };

        let values = row.values();
        assert_eq!(values.len(), OUTPUT_COLUMNS.len());
        assert_eq!(values[0], "T00000001");
        assert_eq!(values[2], "Auth");
        assert_eq!(values[4], "high");
        assert_eq!(values[7], "desc");
        assert_eq!(values[3], "");
    }

    #[test]
    fn test_missing_id_written_empty() {
        let row = OutputRow::default();
        assert_eq!(row.values()[0], "");
    }
}
