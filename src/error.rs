//! Error types for the opt-in strict entry points

/// Errors raised by the fallible `try_*` APIs.
///
/// The lenient API (`Table::add_columns`, `Table::add`) never produces these;
/// it skips what it cannot use.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// A column with this name is already registered and duplicates are rejected.
    #[error("Duplicate column: {name}")]
    DuplicateColumn {
        /// The offending column name.
        name: String,
    },

    /// The column input was neither a name, a column, nor a descriptor.
    #[error("Unsupported column input: {kind}")]
    UnsupportedColumn {
        /// Kind of value that was passed.
        kind: &'static str,
    },

    /// A JSON descriptor object could not be read.
    #[error("Invalid column descriptor: {0}")]
    InvalidDescriptor(#[from] serde_json::Error),

    /// A JSON value used as a record was not an object.
    #[error("Expected a record object, got {kind}")]
    NotARecord {
        /// Kind of value that was passed.
        kind: &'static str,
    },
}

/// Result alias for fallible table operations.
pub type Result<T> = std::result::Result<T, TableError>;

/// Name of a JSON value's kind, for error messages and log fields.
pub(crate) fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
