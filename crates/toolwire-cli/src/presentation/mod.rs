//! Terminal rendering for registry data.

mod tables;

pub use tables::{
    format_stats, print_diagnostics, print_registry_table, print_separator, truncate_string,
};
