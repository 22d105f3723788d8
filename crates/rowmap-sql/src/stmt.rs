mod drop_table;
pub use drop_table::DropTable;

mod filter;
pub use filter::Filter;

mod limit;
pub use limit::Limit;

mod select;
pub use select::{Returning, Select};

/// A statement against a single model's table.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert,
    Update,
    Delete,
    CreateTable,
    DropTable(DropTable),
}

impl Statement {
    /// Insert every field, non-key fields first and the key last.
    pub fn insert() -> Self {
        Self::Insert
    }

    /// Update every non-key field, by primary key.
    pub fn update() -> Self {
        Self::Update
    }

    /// Delete by primary key.
    pub fn delete() -> Self {
        Self::Delete
    }

    pub fn create_table() -> Self {
        Self::CreateTable
    }

    pub fn drop_table() -> Self {
        Self::DropTable(DropTable { if_exists: false })
    }

    pub fn drop_table_if_exists() -> Self {
        Self::DropTable(DropTable { if_exists: true })
    }
}

impl From<Select> for Statement {
    fn from(value: Select) -> Self {
        Self::Select(value)
    }
}
