//! Datastore model: the whole persisted document.

use serde::{Deserialize, Serialize};

use super::GatePassRequest;

/// The root document holding every gate-pass request in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Datastore {
    pub requests: Vec<GatePassRequest>,
}

impl Datastore {
    /// Find a request by id.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut GatePassRequest> {
        self.requests.iter_mut().find(|r| r.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.requests.iter().any(|r| r.id == id)
    }
}
