//! Testing infrastructure for onebridge integration tests.
//!
//! - `fixtures`: sample webhook payloads, built in code or loaded from disk
//! - `assertions`: checks on serialized normalized events

pub mod assertions;
pub mod fixtures;

pub use fixtures::SampleFiles;
