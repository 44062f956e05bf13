//! Inputs accepted by `Table::add`

use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{json_kind, TableError};

use super::cell::CellValue;
use super::row::Row;

/// A plain record: field name to value, in insertion order.
///
/// Only fields named by a declared column are read when the record is added
/// to a table.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record(IndexMap<String, CellValue>);

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<CellValue>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder form of [`Record::insert`]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<CellValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn get(&self, field: &str) -> Option<&CellValue> {
        self.0.get(field)
    }

    /// Whether the field is present, whatever its value (null included)
    pub fn contains_key(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<V: Into<CellValue>> From<IndexMap<String, V>> for Record {
    fn from(map: IndexMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V: Into<CellValue>> From<HashMap<String, V>> for Record {
    fn from(map: HashMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V: Into<CellValue>> From<BTreeMap<String, V>> for Record {
    fn from(map: BTreeMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<Value> for Record {
    type Error = TableError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(TableError::NotARecord {
                kind: json_kind(&other),
            }),
        }
    }
}

/// One input to `Table::add`
#[derive(Debug, Clone)]
pub enum RowInput {
    /// A pre-built row, appended as-is
    Row(Row),
    /// A record whose declared fields become cells
    Record(Record),
}

impl From<Row> for RowInput {
    fn from(row: Row) -> Self {
        RowInput::Row(row)
    }
}

impl From<Record> for RowInput {
    fn from(record: Record) -> Self {
        RowInput::Record(record)
    }
}

impl From<Map<String, Value>> for RowInput {
    fn from(map: Map<String, Value>) -> Self {
        RowInput::Record(map.into())
    }
}

/// Non-object values carry no fields and become empty records.
impl From<Value> for RowInput {
    fn from(value: Value) -> Self {
        match Record::try_from(value) {
            Ok(record) => RowInput::Record(record),
            Err(e) => {
                debug!(error = %e, "treating value as an empty record");
                RowInput::Record(Record::new())
            }
        }
    }
}
