//! Column definitions and the inputs accepted when registering them

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;

use crate::error::{json_kind, Result, TableError};

use super::cell::{Cell, CellValue};
use super::table::TableRef;

/// Caller-supplied conversion from a raw value to a cell
#[derive(Clone)]
pub struct CellFactory(Arc<dyn Fn(CellValue) -> Cell + Send + Sync>);

impl CellFactory {
    /// Wrap a conversion function
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(CellValue) -> Cell + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Build a cell from a raw value
    pub fn call(&self, value: CellValue) -> Cell {
        (self.0)(value)
    }
}

impl fmt::Debug for CellFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellFactory(..)")
    }
}

impl<F> From<F> for CellFactory
where
    F: Fn(CellValue) -> Cell + Send + Sync + 'static,
{
    fn from(f: F) -> Self {
        Self::new(f)
    }
}

/// Plain description of a column's fields.
///
/// `table` and `cell` are never read from JSON; `table` is always replaced
/// when the column is registered.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ColumnDescriptor {
    #[serde(skip)]
    pub table: Option<TableRef>,
    pub name: Option<String>,
    pub object_name: Option<String>,
    pub title: Option<String>,
    #[serde(skip)]
    pub cell: Option<CellFactory>,
}

impl ColumnDescriptor {
    /// Descriptor with only a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Set the object name qualifier
    pub fn with_object_name(mut self, object_name: impl Into<String>) -> Self {
        self.object_name = Some(object_name.into());
        self
    }

    /// Set the display title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the cell factory
    pub fn with_cell(mut self, cell: impl Into<CellFactory>) -> Self {
        self.cell = Some(cell.into());
        self
    }

    /// Read a descriptor from a JSON object (`name`, `objectName`, `title`)
    pub fn from_json(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(TableError::UnsupportedColumn {
                kind: json_kind(&value),
            });
        }
        Ok(serde_json::from_value(value)?)
    }
}

/// A column of a table
#[derive(Debug, Clone, Default)]
pub struct Column {
    table: Option<TableRef>,
    name: Option<String>,
    object_name: Option<String>,
    title: Option<String>,
    cell: Option<CellFactory>,
}

impl Column {
    /// Create a column from a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    /// Create a column whose cells are built by `cell`
    pub fn with_cell(name: impl Into<String>, cell: impl Into<CellFactory>) -> Self {
        Self {
            name: Some(name.into()),
            cell: Some(cell.into()),
            ..Default::default()
        }
    }

    /// Create a column qualified by an object name, with an optional cell factory
    pub fn qualified(
        name: impl Into<String>,
        object_name: impl Into<String>,
        cell: Option<CellFactory>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            object_name: Some(object_name.into()),
            cell,
            ..Default::default()
        }
    }

    /// Create a column copying every field of a descriptor
    pub fn from_descriptor(descriptor: ColumnDescriptor) -> Self {
        Self {
            table: descriptor.table,
            name: descriptor.name,
            object_name: descriptor.object_name,
            title: descriptor.title,
            cell: descriptor.cell,
        }
    }

    /// Handle of the owning table, once registered
    pub fn table(&self) -> Option<&TableRef> {
        self.table.as_ref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn object_name(&self) -> Option<&str> {
        self.object_name.as_deref()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn cell(&self) -> Option<&CellFactory> {
        self.cell.as_ref()
    }

    /// Qualified identifier.
    ///
    /// `object_name.name` when an object name is set, else `table.name` when
    /// the owning table is named, else the bare name. Empty qualifiers count
    /// as unset. `None` for an unnamed column.
    pub fn id(&self) -> Option<String> {
        let name = self.name.as_deref()?;

        if let Some(object_name) = self.object_name.as_deref().filter(|s| !s.is_empty()) {
            return Some(format!("{}.{}", object_name, name));
        }

        if let Some(table_name) = self
            .table
            .as_ref()
            .and_then(|t| t.name())
            .filter(|s| !s.is_empty())
        {
            return Some(format!("{}.{}", table_name, name));
        }

        Some(name.to_string())
    }

    pub(crate) fn bind(&mut self, table: TableRef) {
        self.table = Some(table);
    }
}

/// First column whose name equals `name` exactly
pub(crate) fn find_column<'a>(columns: &'a [Column], name: &str) -> Option<&'a Column> {
    columns.iter().find(|c| c.name() == Some(name))
}

impl From<ColumnDescriptor> for Column {
    fn from(descriptor: ColumnDescriptor) -> Self {
        Self::from_descriptor(descriptor)
    }
}

/// One input to `Table::add_columns`
#[derive(Debug)]
pub enum ColumnSpec {
    /// A bare column name
    Name(String),
    /// A ready-made column, registered as-is
    Column(Column),
    /// A descriptor, copied into a new column
    Descriptor(ColumnDescriptor),
    /// A JSON object that could not be read as a descriptor
    Invalid(serde_json::Error),
    /// Anything else; skipped
    Unsupported(&'static str),
}

impl ColumnSpec {
    /// Turn the input into a column, or explain why it cannot be one
    pub fn into_column(self) -> Result<Column> {
        match self {
            ColumnSpec::Name(name) => Ok(Column::new(name)),
            ColumnSpec::Column(column) => Ok(column),
            ColumnSpec::Descriptor(descriptor) => Ok(Column::from_descriptor(descriptor)),
            ColumnSpec::Invalid(e) => Err(TableError::InvalidDescriptor(e)),
            ColumnSpec::Unsupported(kind) => Err(TableError::UnsupportedColumn { kind }),
        }
    }
}

impl From<&str> for ColumnSpec {
    fn from(name: &str) -> Self {
        ColumnSpec::Name(name.to_string())
    }
}

impl From<String> for ColumnSpec {
    fn from(name: String) -> Self {
        ColumnSpec::Name(name)
    }
}

impl From<Column> for ColumnSpec {
    fn from(column: Column) -> Self {
        ColumnSpec::Column(column)
    }
}

impl From<ColumnDescriptor> for ColumnSpec {
    fn from(descriptor: ColumnDescriptor) -> Self {
        ColumnSpec::Descriptor(descriptor)
    }
}

impl From<Value> for ColumnSpec {
    fn from(value: Value) -> Self {
        match value {
            Value::String(name) => ColumnSpec::Name(name),
            Value::Object(_) => match ColumnDescriptor::from_json(value) {
                Ok(descriptor) => ColumnSpec::Descriptor(descriptor),
                Err(TableError::InvalidDescriptor(e)) => ColumnSpec::Invalid(e),
                Err(_) => ColumnSpec::Unsupported("object"),
            },
            other => ColumnSpec::Unsupported(json_kind(&other)),
        }
    }
}
