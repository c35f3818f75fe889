//! Target framework model and selection.
//!
//! Candidate frameworks are supplied by the caller; this module only
//! compares, filters, and picks among them.

mod descriptor;
mod selector;
mod version;

pub use descriptor::FrameworkDescriptor;
pub use selector::{
    CompatibilityOracle, FrameworkSelector, LEGACY_FRAMEWORK_IDENTIFIER, LEGACY_VERSION_CEILING,
    core_framework,
};
pub use version::FrameworkVersion;
