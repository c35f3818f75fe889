//! Runtime moniker parsing.
//!
//! A moniker is a compound identifier of the shape
//! `<prefix>-<family>[-<os>-<arch>].<version-suffix>` naming an execution
//! engine (and optionally the platform it targets) plus a version.

mod parser;

pub use parser::{RuntimeFamily, RuntimeMoniker};

pub(crate) use parser::split_head;
