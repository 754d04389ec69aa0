//! CarryStation application layer: the AI stylist, configuration, logging and
//! the shared application context used by the CLI.

pub mod config;
pub mod context;
pub mod observability;
pub mod stylist;
