use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::FrameworkVersion;

/// A candidate target framework supplied by the caller.
///
/// Identifiers compare case-sensitively; the versioning library that feeds
/// us candidates is expected to have canonicalized them already.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameworkDescriptor {
    pub identifier: String,
    pub version: FrameworkVersion,
}

impl FrameworkDescriptor {
    pub fn new(identifier: impl Into<String>, version: FrameworkVersion) -> Self {
        Self {
            identifier: identifier.into(),
            version,
        }
    }
}

impl fmt::Display for FrameworkDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.identifier, self.version)
    }
}

impl FromStr for FrameworkDescriptor {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((identifier, version)) = s.split_once('/') else {
            anyhow::bail!("Invalid framework format. Expected 'IDENTIFIER/VERSION'.")
        };
        if identifier.is_empty() {
            anyhow::bail!("Invalid framework format. Expected 'IDENTIFIER/VERSION'.")
        }
        Ok(FrameworkDescriptor {
            identifier: identifier.to_string(),
            version: version.parse()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let fx: FrameworkDescriptor = "DNX/4.5.1".parse().unwrap();
        assert_eq!(fx.identifier, "DNX");
        assert_eq!(fx.version, FrameworkVersion::with_build(4, 5, 1, 0));
    }

    #[test]
    fn test_from_str_rejects_missing_slash() {
        assert!("DNX4.5".parse::<FrameworkDescriptor>().is_err());
        assert!("/4.5".parse::<FrameworkDescriptor>().is_err());
    }

    #[test]
    fn test_display() {
        let fx = FrameworkDescriptor::new("DNXCore", FrameworkVersion::new(5, 0));
        assert_eq!(fx.to_string(), "DNXCore/5.0");
    }
}
