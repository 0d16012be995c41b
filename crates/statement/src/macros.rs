#[macro_export]
macro_rules! table_ref {
    ($name:expr) => {
        $crate::ast::common::TableRef {
            catalog: None,
            schema: None,
            name: $name.to_string(),
        }
    };
    ($schema:expr, $name:expr) => {
        $crate::ast::common::TableRef {
            catalog: None,
            schema: Some($schema.to_string()),
            name: $name.to_string(),
        }
    };
    ($catalog:expr, $schema:expr, $name:expr) => {
        $crate::ast::common::TableRef {
            catalog: Some($catalog.to_string()),
            schema: Some($schema.to_string()),
            name: $name.to_string(),
        }
    };
}
