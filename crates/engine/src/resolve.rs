use model::core::{context::AmbientContext, table::TableReference};
use tracing::warn;

/// Splits a dotted identifier into a `(catalog, namespace, name)` triple.
///
/// Three segments map directly; two take the catalog from the ambient
/// context. Anything else is passed through permissively rather than
/// rejected here: one segment yields an empty namespace, and segments
/// beyond the third are folded into the name. The mismatch then surfaces
/// at introspection or execution time.
pub fn resolve(input: &str, ambient: &AmbientContext) -> TableReference {
    let segments: Vec<&str> = input.split('.').collect();

    match segments.as_slice() {
        [catalog, namespace, name] => TableReference::new(*catalog, *namespace, *name),
        [namespace, name] => {
            TableReference::new(ambient.current_catalog.clone(), *namespace, *name)
        }
        [name] => {
            warn!("Table reference '{input}' has no namespace; deferring the failure to the store");
            TableReference::new(ambient.current_catalog.clone(), "", *name)
        }
        [catalog, namespace, rest @ ..] => {
            warn!("Table reference '{input}' has more than three segments; folding the rest into the name");
            TableReference::new(*catalog, *namespace, rest.join("."))
        }
        [] => TableReference::new(ambient.current_catalog.clone(), "", ""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ambient() -> AmbientContext {
        AmbientContext::new("proj")
    }

    #[test]
    fn test_three_segments_map_directly() {
        let table = resolve("other.ds.staging_orders", &ambient());
        assert_eq!(table, TableReference::new("other", "ds", "staging_orders"));
    }

    #[test]
    fn test_two_segments_take_ambient_catalog() {
        let table = resolve("ds.staging_orders", &ambient());
        assert_eq!(table, TableReference::new("proj", "ds", "staging_orders"));
    }

    #[test]
    fn test_single_segment_passes_through_with_empty_namespace() {
        let table = resolve("staging_orders", &ambient());
        assert_eq!(table, TableReference::new("proj", "", "staging_orders"));
    }

    #[test]
    fn test_extra_segments_fold_into_name() {
        let table = resolve("proj.ds.orders.partition", &ambient());
        assert_eq!(table, TableReference::new("proj", "ds", "orders.partition"));
    }
}
