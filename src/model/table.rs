//! Tables: registered columns plus the rows built against them

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indexmap::IndexSet;
use tracing::{debug, trace, warn};

use crate::config::{DuplicateColumns, TableConfig};
use crate::error::{Result, TableError};

use super::cell::CellValue;
use super::record::{Record, RowInput};
use super::row::{BoundRow, Row};
use super::schema::{find_column, Column, ColumnSpec};

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(u64);

impl TableId {
    fn next() -> Self {
        TableId(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Non-owning handle from a column or row back to its table.
///
/// Carries the table's identity and its (immutable) name; it never keeps the
/// table alive. Two handles are equal when they name the same table.
#[derive(Debug, Clone)]
pub struct TableRef {
    id: TableId,
    name: Option<Arc<str>>,
}

impl TableRef {
    pub fn id(&self) -> TableId {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

impl PartialEq for TableRef {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TableRef {}

impl fmt::Display for TableRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{}#{}", name, self.id.0),
            None => write!(f, "#{}", self.id.0),
        }
    }
}

/// A table containing columns and rows
#[derive(Debug)]
pub struct Table {
    table_ref: TableRef,
    config: TableConfig,
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Default for Table {
    fn default() -> Self {
        Self::new()
    }
}

impl Table {
    /// Create an empty, unnamed table
    pub fn new() -> Self {
        Self::with_config(TableConfig::default())
    }

    /// Create an empty table with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self::with_config(TableConfig::new().with_name(name))
    }

    /// Create an empty table from a configuration
    pub fn with_config(config: TableConfig) -> Self {
        let table_ref = TableRef {
            id: TableId::next(),
            name: config.name.as_deref().map(Arc::from),
        };
        Self {
            table_ref,
            config,
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.table_ref.name()
    }

    pub fn id(&self) -> TableId {
        self.table_ref.id
    }

    /// Handle that columns and rows of this table point back with
    pub fn table_ref(&self) -> &TableRef {
        &self.table_ref
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Column definitions, in registration order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All rows, in insertion order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Register columns given as names, columns, or descriptors, in any mix.
    ///
    /// Each accepted column is bound to this table and appended. Inputs that
    /// cannot become a column are skipped, as are repeated names when the
    /// table rejects duplicates.
    pub fn add_columns<I>(&mut self, columns: I)
    where
        I: IntoIterator,
        I::Item: Into<ColumnSpec>,
    {
        for spec in columns {
            let spec: ColumnSpec = spec.into();
            let column = match spec.into_column() {
                Ok(column) => column,
                Err(e) => {
                    debug!(table = %self.table_ref, error = %e, "skipping column input");
                    continue;
                }
            };

            if self.is_rejected_duplicate(&column) {
                warn!(
                    table = %self.table_ref,
                    column = column.name().unwrap_or_default(),
                    "skipping duplicate column"
                );
                continue;
            }

            self.register(column);
        }
    }

    /// Register columns, failing on the first input that cannot be used.
    ///
    /// Nothing is registered unless every input is accepted.
    pub fn try_add_columns<I>(&mut self, columns: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<ColumnSpec>,
    {
        let reject = self.config.duplicate_columns == DuplicateColumns::Reject;
        let mut seen: IndexSet<String> = if reject {
            self.columns
                .iter()
                .filter_map(|c| c.name().map(str::to_string))
                .collect()
        } else {
            IndexSet::new()
        };

        let mut batch = Vec::new();
        for spec in columns {
            let spec: ColumnSpec = spec.into();
            let column = spec.into_column()?;
            if reject {
                if let Some(name) = column.name() {
                    if !seen.insert(name.to_string()) {
                        return Err(TableError::DuplicateColumn {
                            name: name.to_string(),
                        });
                    }
                }
            }
            batch.push(column);
        }

        for column in batch {
            self.register(column);
        }
        Ok(())
    }

    fn register(&mut self, mut column: Column) {
        column.bind(self.table_ref.clone());
        trace!(table = %self.table_ref, column = ?column.name(), "registered column");
        self.columns.push(column);
    }

    fn is_rejected_duplicate(&self, column: &Column) -> bool {
        self.config.duplicate_columns == DuplicateColumns::Reject
            && column
                .name()
                .is_some_and(|name| self.get_column(name).is_some())
    }

    /// First column whose name equals `name` (case-sensitive)
    pub fn get_column(&self, name: &str) -> Option<&Column> {
        find_column(&self.columns, name)
    }

    /// Get column index by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == Some(name))
    }

    /// Add rows from pre-built rows or records.
    ///
    /// A record yields a new row bound to this table holding one cell per
    /// declared column whose name is a field of the record. A pre-built row
    /// is appended unchanged and keeps whatever table it was bound to.
    pub fn add<I>(&mut self, rows: I)
    where
        I: IntoIterator,
        I::Item: Into<RowInput>,
    {
        for input in rows {
            self.add_row(input);
        }
    }

    /// Add a single row or record
    pub fn add_row(&mut self, input: impl Into<RowInput>) {
        let input: RowInput = input.into();
        let row = match input {
            RowInput::Row(row) => {
                if !row.is_bound_to(&self.table_ref) {
                    debug!(table = %self.table_ref, "appending row without rebinding");
                }
                row
            }
            RowInput::Record(record) => self.row_from_record(&record),
        };
        self.rows.push(row);
    }

    fn row_from_record(&self, record: &Record) -> Row {
        let mut row = Row::bound_to(self.table_ref.clone());
        for column in &self.columns {
            let Some(name) = column.name() else {
                continue;
            };
            if let Some(value) = record.get(name) {
                row.add_resolved(
                    Some(self.columns.as_slice()),
                    name.to_string(),
                    value.clone(),
                    None,
                );
            }
        }
        row
    }

    /// Store a cell in `row`, through this table's cell factories when the
    /// row is bound to this table.
    pub fn add_cell(
        &self,
        row: &mut Row,
        column_name: impl Into<String>,
        value: impl Into<CellValue>,
        display_value: Option<String>,
    ) {
        let columns = if row.is_bound_to(&self.table_ref) {
            Some(self.columns.as_slice())
        } else {
            None
        };
        row.add_resolved(columns, column_name.into(), value.into(), display_value);
    }

    /// Mutable access to a held row, able to resolve cell factories
    pub fn row_mut(&mut self, index: usize) -> Option<BoundRow<'_>> {
        let Table {
            table_ref,
            columns,
            rows,
            ..
        } = self;
        let row = rows.get_mut(index)?;
        Some(BoundRow {
            row,
            table: &*table_ref,
            columns: columns.as_slice(),
        })
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }
}
