//! Data model: tables, columns, rows, and cells

mod cell;
mod record;
mod row;
mod schema;
mod table;

pub use cell::{Cell, CellValue};
pub use record::{Record, RowInput};
pub use row::{BoundRow, Row};
pub use schema::{CellFactory, Column, ColumnDescriptor, ColumnSpec};
pub use table::{Table, TableId, TableRef};
