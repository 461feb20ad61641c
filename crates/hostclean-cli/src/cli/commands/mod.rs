//! CLI command handlers.

mod clean;

pub use clean::{run_clean, CleanJob};
