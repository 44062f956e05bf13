//! Rows: cells keyed by column name

use std::ops::Deref;

use indexmap::IndexMap;
use tracing::trace;

use super::cell::{Cell, CellValue};
use super::schema::{find_column, Column};
use super::table::TableRef;

/// A row in a table.
///
/// Cells are keyed by column name. A repeated name replaces the earlier cell
/// but keeps its position, so iteration follows the order in which names were
/// first added, not the table's column order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    table: Option<TableRef>,
    column_to_cell: IndexMap<String, Cell>,
}

impl Row {
    /// Create a free-standing row
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty row bound to a table
    pub fn bound_to(table: TableRef) -> Self {
        Self {
            table: Some(table),
            column_to_cell: IndexMap::new(),
        }
    }

    /// Handle of the table this row was built for
    pub fn table(&self) -> Option<&TableRef> {
        self.table.as_ref()
    }

    /// Cells in first-insertion order of their column names
    pub fn cells(&self) -> Vec<&Cell> {
        self.column_to_cell.values().collect()
    }

    /// Get the cell stored for a column name
    pub fn get(&self, column_name: &str) -> Option<&Cell> {
        self.column_to_cell.get(column_name)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.column_to_cell.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.column_to_cell.len()
    }

    pub fn is_empty(&self) -> bool {
        self.column_to_cell.is_empty()
    }

    /// Store a plain cell for `column_name`.
    ///
    /// No table is consulted here, so no cell factory applies. Use
    /// `Table::add_cell` or `Table::row_mut` to build cells through the
    /// owning table's columns.
    pub fn add(
        &mut self,
        column_name: impl Into<String>,
        value: impl Into<CellValue>,
        display_value: Option<String>,
    ) {
        self.add_resolved(None, column_name.into(), value.into(), display_value);
    }

    /// Store a cell for `column_name`, built by the matching column's factory
    /// when `columns` has one.
    ///
    /// A factory-built cell always takes `display_value`, even when it is
    /// `None`.
    pub(crate) fn add_resolved(
        &mut self,
        columns: Option<&[Column]>,
        column_name: String,
        value: CellValue,
        display_value: Option<String>,
    ) {
        let factory = columns
            .and_then(|columns| find_column(columns, &column_name))
            .and_then(Column::cell);

        let cell = match factory {
            Some(factory) => {
                let mut cell = factory.call(value);
                cell.display_value = display_value;
                cell
            }
            None => Cell::with_display(value, display_value),
        };

        self.column_to_cell.insert(column_name, cell);
    }

    /// Whether this row is bound to the given table
    pub(crate) fn is_bound_to(&self, table: &TableRef) -> bool {
        self.table.as_ref() == Some(table)
    }
}

/// Mutable access to a row held by a table, with the table's columns at hand
/// for cell factory lookup.
#[derive(Debug)]
pub struct BoundRow<'a> {
    pub(crate) row: &'a mut Row,
    pub(crate) table: &'a TableRef,
    pub(crate) columns: &'a [Column],
}

impl BoundRow<'_> {
    /// Store a cell for `column_name`.
    ///
    /// Factories are resolved only when the row belongs to this table; a row
    /// that was appended pre-built from elsewhere gets plain cells.
    pub fn add(
        &mut self,
        column_name: impl Into<String>,
        value: impl Into<CellValue>,
        display_value: Option<String>,
    ) {
        let columns = if self.row.is_bound_to(self.table) {
            Some(self.columns)
        } else {
            trace!(table = %self.table, "row bound elsewhere; no factory lookup");
            None
        };
        self.row
            .add_resolved(columns, column_name.into(), value.into(), display_value);
    }
}

impl Deref for BoundRow<'_> {
    type Target = Row;

    fn deref(&self) -> &Row {
        &*self.row
    }
}
