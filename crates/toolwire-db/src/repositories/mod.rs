//! `SQLite` repository implementations.

mod sqlite_mcp_config_repository;

pub use sqlite_mcp_config_repository::SqliteMcpConfigRepository;
