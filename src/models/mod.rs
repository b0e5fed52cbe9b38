//! Data models for the gate-pass service.
//!
//! Field names are camelCase on the wire and in the storage document.

mod datastore;
mod gate_pass;

pub use datastore::*;
pub use gate_pass::*;
