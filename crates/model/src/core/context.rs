use serde::{Deserialize, Serialize};

/// The caller's ambient execution context.
///
/// Carries the current catalog used to complete partially qualified table
/// references, so resolution stays a pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbientContext {
    pub current_catalog: String,
}

impl AmbientContext {
    pub fn new(current_catalog: impl Into<String>) -> Self {
        Self {
            current_catalog: current_catalog.into(),
        }
    }
}
