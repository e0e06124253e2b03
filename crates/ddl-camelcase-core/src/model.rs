//! In-memory reconstruction of the tables found in a DDL dump.

use std::collections::HashMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single `CREATE TABLE` block.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
pub struct TableDescriptor {
    /// Table name with any surrounding quotes removed.
    #[serde(skip)]
    pub name: String,
    /// Schema qualifier from the header, if one was written.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    /// Column names in declaration order. Quoted columns keep their quotes.
    pub columns: Vec<String>,
    /// Raw `CONSTRAINT` lines, trimmed.
    pub constraints: Vec<String>,
    /// Raw index definitions. Index statements are not recognized, so this stays empty.
    pub indices: Vec<String>,
}

impl TableDescriptor {
    pub fn new(name: impl Into<String>, schema: Option<String>) -> Self {
        Self {
            name: name.into(),
            schema,
            ..Self::default()
        }
    }
}

/// Ordered mapping from table name to [`TableDescriptor`].
///
/// Iteration follows the first appearance of each name in the source text.
/// Inserting a name that is already present replaces its descriptor but
/// keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaModel {
    tables: Vec<TableDescriptor>,
    index: HashMap<String, usize>,
}

impl SchemaModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, table: TableDescriptor) {
        match self.index.get(&table.name) {
            Some(&pos) => self.tables[pos] = table,
            None => {
                self.index.insert(table.name.clone(), self.tables.len());
                self.tables.push(table);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&TableDescriptor> {
        self.index.get(name).map(|&pos| &self.tables[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TableDescriptor> {
        self.tables.iter()
    }

    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|t| t.name.as_str())
    }
}

impl<'a> IntoIterator for &'a SchemaModel {
    type Item = &'a TableDescriptor;
    type IntoIter = std::slice::Iter<'a, TableDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Serializes as a JSON object keyed by table name, in model order.
impl Serialize for SchemaModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.tables.len()))?;
        for table in &self.tables {
            map.serialize_entry(&table.name, table)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_insert_preserves_first_appearance_order() {
        let mut model = SchemaModel::new();
        model.insert(TableDescriptor::new("b", None));
        model.insert(TableDescriptor::new("a", None));
        model.insert(TableDescriptor::new("c", None));
        assert_eq!(model.table_names().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn test_reinsert_replaces_in_place() {
        let mut model = SchemaModel::new();
        let mut first = TableDescriptor::new("a", None);
        first.columns.push("old_col".to_string());
        model.insert(first);
        model.insert(TableDescriptor::new("b", None));
        model.insert(TableDescriptor::new("a", None));

        assert_eq!(model.len(), 2);
        assert_eq!(model.table_names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(model.get("a").unwrap().columns.is_empty());
    }

    #[test]
    fn test_serialize_keyed_by_name() {
        let mut model = SchemaModel::new();
        let mut table = TableDescriptor::new("hotel_bookings", Some("public".to_string()));
        table.columns.push("room_type_id".to_string());
        model.insert(table);
        model.insert(TableDescriptor::new("hotels", None));

        let value = serde_json::to_value(&model).unwrap();
        assert_eq!(
            value,
            json!({
                "hotel_bookings": {
                    "schema": "public",
                    "columns": ["room_type_id"],
                    "constraints": [],
                    "indices": []
                },
                "hotels": {
                    "columns": [],
                    "constraints": [],
                    "indices": []
                }
            })
        );
    }
}
