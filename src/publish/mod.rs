//! Publish-pipeline orchestration around the dependency-resolution host.
//!
//! Everything here is plumbing: the host does the actual resolution work,
//! this module just assembles requests from moniker-derived facts and holds
//! on to what the host returns.

mod context;
mod host;

pub use context::DependencyContext;
pub use host::{HostRequest, HostSession, LibraryDescription, ResolutionHost};

#[cfg(test)]
pub use host::MockResolutionHost;
