use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use crate::framework::FrameworkDescriptor;
use crate::platform::PlatformIdentifier;

use super::{HostRequest, HostSession, LibraryDescription, ResolutionHost};

/// Resolved facts for publishing one runtime target.
///
/// Built once per (framework, runtime identifiers) pair by asking the host
/// to resolve the project; holds no decision logic of its own.
#[derive(Debug)]
pub struct DependencyContext {
    pub target_framework: FrameworkDescriptor,
    pub runtime_identifiers: Vec<PlatformIdentifier>,
    pub libraries: Vec<LibraryDescription>,
    pub packages_directory: PathBuf,
}

impl DependencyContext {
    pub fn new(
        host: &dyn ResolutionHost,
        project_dir: impl Into<PathBuf>,
        target_framework: FrameworkDescriptor,
        runtime_identifiers: Vec<PlatformIdentifier>,
    ) -> Result<Self> {
        let request = HostRequest {
            project_dir: project_dir.into(),
            target_framework: target_framework.clone(),
            runtime_identifiers: runtime_identifiers.clone(),
        };

        let HostSession {
            libraries,
            packages_directory,
        } = host
            .initialize(&request)
            .with_context(|| format!("Failed to resolve dependencies for {target_framework}"))?;

        debug!(
            framework = %target_framework,
            libraries = libraries.len(),
            "dependency context ready"
        );

        Ok(Self {
            target_framework,
            runtime_identifiers,
            libraries,
            packages_directory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::core_framework;
    use crate::publish::MockResolutionHost;

    fn session() -> HostSession {
        HostSession {
            libraries: vec![LibraryDescription {
                name: "Serilog".into(),
                version: "1.5.14".into(),
            }],
            packages_directory: PathBuf::from("/home/user/.packages"),
        }
    }

    #[test]
    fn test_new_captures_host_results() {
        // --- Setup ---
        let mut host = MockResolutionHost::new();
        host.expect_initialize()
            .withf(|request| {
                request.project_dir == PathBuf::from("/src/app")
                    && request.target_framework == core_framework()
                    && request.runtime_identifiers == [PlatformIdentifier::new("win7-x64")]
            })
            .returning(|_| Ok(session()));

        // --- Execute ---
        let context = DependencyContext::new(
            &host,
            "/src/app",
            core_framework(),
            vec![PlatformIdentifier::new("win7-x64")],
        )
        .unwrap();

        // --- Verify ---
        assert_eq!(context.target_framework, core_framework());
        assert_eq!(context.runtime_identifiers, [PlatformIdentifier::new("win7-x64")]);
        assert_eq!(context.libraries, session().libraries);
        assert_eq!(context.packages_directory, PathBuf::from("/home/user/.packages"));
    }

    #[test]
    fn test_new_propagates_host_failures() {
        let mut host = MockResolutionHost::new();
        host.expect_initialize()
            .returning(|_| Err(anyhow::anyhow!("project.json not found")));

        let result = DependencyContext::new(&host, "/src/app", core_framework(), Vec::new());

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to resolve dependencies for DNXCore/5.0"));
        assert!(message.contains("project.json not found"));
    }
}
