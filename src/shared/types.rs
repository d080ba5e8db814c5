use serde::{Deserialize, Serialize};

/// Envelope for list responses: wraps a sequence under a single `data` field
/// so the transport layer can serialize `{ "data": [...] }` without reshaping.
/// Carries no behavior.
#[derive(Debug, Serialize, Deserialize)]
pub struct WrapperDto<T> {
    pub data: Vec<T>,
}

impl<T> WrapperDto<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}
