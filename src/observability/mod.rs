//! Observability subsystem.
//!
//! Configuration loading emits `tracing` events; the binary installs the
//! subscriber that formats them.

pub mod logging;
