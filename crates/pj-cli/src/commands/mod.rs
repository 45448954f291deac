//! CLI subcommand implementations.

pub mod add;
pub mod delete;
pub mod export;
pub mod list;
pub mod owners;
pub mod summary;
pub mod update;
pub mod util;
