//! Runtime identifier mapping.
//!
//! Maps a runtime moniker to the canonical platform tokens used to pick
//! runtime-specific assets out of packages.

mod identifier;
mod mapper;

pub use identifier::PlatformIdentifier;
pub use mapper::{
    OSX_VERSION_TOKEN, UBUNTU_VERSION_TOKEN, WINDOWS_VERSION_TOKEN, runtime_identifiers,
};
