//! Normalized event schema.
//!
//! Platform adapters translate their webhook payloads into [`NormalizedEvent`]
//! values. The schema follows the OneBot-12 event contract: a common envelope
//! (`id`, `time`, `type`, `detail_type`, `sub_type`, `self`) plus category fields
//! and a namespaced extension map for data the standard cannot express.

pub mod event;
mod util;

pub use event::*;
pub use util::*;
