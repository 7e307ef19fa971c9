//! flightcalc CLI library.
//!
//! Argument definitions and output helpers shared by the `flightcalc` binary
//! and its tests.

pub mod args;
pub mod output;

pub use args::GlobalOptions;
pub use output::OutputFormat;
