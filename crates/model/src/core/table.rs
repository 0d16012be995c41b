use serde::{Deserialize, Serialize};
use std::fmt;

/// A fully resolved `(catalog, namespace, name)` table triple.
///
/// Produced once by the reference resolver and immutable afterwards; the
/// catalog segment is always present because a partially qualified input
/// has it filled in from the ambient execution context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableReference {
    pub catalog: String,
    pub namespace: String,
    pub name: String,
}

impl TableReference {
    pub fn new(
        catalog: impl Into<String>,
        namespace: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            catalog: catalog.into(),
            namespace: namespace.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for TableReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.catalog, self.namespace, self.name)
    }
}
