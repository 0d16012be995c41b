use crate::error::MergeError;

/// Fail-fast checks on the raw invocation. Runs before any external call
/// and has no side effects; identifier well-formedness is deliberately left
/// to the resolver and the store.
pub fn validate(target: &str, source: &str, keys: &[String]) -> Result<(), MergeError> {
    if target.trim().is_empty() {
        return Err(MergeError::InvalidInput(
            "target table must not be empty".to_string(),
        ));
    }
    if source.trim().is_empty() {
        return Err(MergeError::InvalidInput(
            "source table must not be empty".to_string(),
        ));
    }
    if keys.is_empty() {
        return Err(MergeError::InvalidInput(
            "at least one key column is required".to_string(),
        ));
    }
    Ok(())
}
