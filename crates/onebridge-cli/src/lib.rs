// NOTE: onebridge Architecture Rationale
//
// Why one payload per invocation (not a server)?
// - Webhook receivers already exist in every bot framework; the missing piece is the mapping
// - A filter-style binary composes with any receiver (`curl | onebridge convert`)
// - Trade-off: no batching, but conversion is cheap and stateless
//
// Why keep the raw payload inside every event?
// - Platform schemas evolve without notice
// - Consumers can recover anything the mapping dropped without a second source
//
// Why stdout for events and stderr for logs?
// - stdout must stay valid JSON so it can be piped into other tools

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::run;
