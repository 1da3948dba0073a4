pub mod classify;
pub mod config;
pub mod convert;
pub mod providers;
