// Handlers for the CLI subcommands. main.rs only parses and dispatches.

pub mod quantity;
pub mod report;
