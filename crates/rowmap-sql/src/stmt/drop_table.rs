#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropTable {
    /// Whether or not to add an `if exists` clause.
    pub if_exists: bool,
}
