//! airhop CLI library.
//!
//! Terminal styling and output formatting shared by the `airhop-cli`
//! subcommands.

pub mod output;
pub mod terminal;
