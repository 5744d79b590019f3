//! Briscola test support utilities
//!
//! Shared helpers for the workspace's test binaries: currently the unified
//! logging bootstrap used by unit and integration tests.

pub mod logging;
