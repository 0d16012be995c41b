use serde::{Deserialize, Serialize};

/// One physical column of the target table, as reported by the catalog at
/// introspection time. Ordering is the catalog's ordinal ordering and is
/// only meaningful within a single invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    pub declared_type: String,
}

impl ColumnDescriptor {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
        }
    }
}
