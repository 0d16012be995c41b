//! Defines common, reusable AST nodes for building statements.

use model::core::table::TableReference;

/// A possibly qualified table name as it appears in a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRef {
    pub catalog: Option<String>,
    pub schema: Option<String>,
    pub name: String,
}

impl From<&TableReference> for TableRef {
    fn from(table: &TableReference) -> Self {
        Self {
            catalog: Some(table.catalog.clone()),
            schema: Some(table.namespace.clone()),
            name: table.name.clone(),
        }
    }
}
