//! Command-line interface support for the `hgraph` binary.

pub mod commands;
