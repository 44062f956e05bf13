//! tabula - In-memory tables of columns, rows, and cells
//!
//! Columns are declared by name, by descriptor, or as ready-made [`Column`]s.
//! Rows are added either pre-built or from plain records, in which case only
//! the fields named by declared columns become cells, optionally built by a
//! column's cell factory.

pub mod config;
pub mod error;
pub mod model;

pub use config::{DuplicateColumns, TableConfig};
pub use error::{Result, TableError};
pub use model::{
    BoundRow, Cell, CellFactory, CellValue, Column, ColumnDescriptor, ColumnSpec, Record, Row,
    RowInput, Table, TableId, TableRef,
};
