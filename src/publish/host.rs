use std::path::PathBuf;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::framework::FrameworkDescriptor;
use crate::platform::PlatformIdentifier;

/// A package the host resolved for the requested framework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryDescription {
    pub name: String,
    pub version: String,
}

/// Inputs for one host resolution pass.
#[derive(Debug, Clone)]
pub struct HostRequest {
    pub project_dir: PathBuf,
    pub target_framework: FrameworkDescriptor,
    pub runtime_identifiers: Vec<PlatformIdentifier>,
}

/// What the host resolved: the library set and where packages live on disk.
#[derive(Debug, Clone)]
pub struct HostSession {
    pub libraries: Vec<LibraryDescription>,
    pub packages_directory: PathBuf,
}

/// The external dependency-resolution host.
///
/// Loading the project model, walking the dependency graph, and computing
/// the packages directory all happen behind this trait.
#[cfg_attr(test, mockall::automock)]
pub trait ResolutionHost: Send + Sync {
    fn initialize(&self, request: &HostRequest) -> Result<HostSession>;
}
