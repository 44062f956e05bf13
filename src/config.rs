//! Configuration for table construction

/// How a table treats a column whose name is already registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateColumns {
    /// Register it anyway; lookups return the first match
    #[default]
    Allow,
    /// Refuse it: skipped by `add_columns`, an error from `try_add_columns`
    Reject,
}

impl std::str::FromStr for DuplicateColumns {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "allow" => Ok(DuplicateColumns::Allow),
            "reject" => Ok(DuplicateColumns::Reject),
            _ => Err(format!("Unknown duplicate column policy: {}", s)),
        }
    }
}

/// Configuration for a table
#[derive(Debug, Clone, Default)]
pub struct TableConfig {
    /// Table name, used when composing column ids
    pub name: Option<String>,
    /// Policy for repeated column names
    pub duplicate_columns: DuplicateColumns,
}

impl TableConfig {
    /// Create a default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table name
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the duplicate column policy
    pub fn with_duplicate_columns(mut self, policy: DuplicateColumns) -> Self {
        self.duplicate_columns = policy;
        self
    }
}
