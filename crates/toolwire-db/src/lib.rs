//! `SQLite` storage adapter for toolwire.
//!
//! The connection registry is persisted as a single JSON value in a
//! key/value table, keyed by [`toolwire_core::MCP_CONFIG_KEY`].

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod setup;

// Re-export factory for convenient access
pub use factory::CoreFactory;

pub use repositories::SqliteMcpConfigRepository;

pub use setup::{open_database, setup_database};
#[cfg(any(test, feature = "test-utils"))]
pub use setup::setup_test_database;

// libsqlite3-sys is linked for its `bundled` feature only
use libsqlite3_sys as _;
