//! Logger setup for binaries and tests.
//!
//! The engine only speaks the `log` facade. Targets follow the module tree:
//! `strata_engine::layer` logs layer edits at `debug`, and
//! `strata_engine::compose` logs swallowed draw failures at `warn` and
//! per-flush statistics at `trace`.

mod init;

pub use init::{init_logging, LoggingConfig, COMPOSE_TARGET};
