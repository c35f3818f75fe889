use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical OS-version-plus-architecture token used to select
/// runtime-specific package assets (e.g. `win7-x64`).
///
/// Opaque to this crate; downstream asset selection interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlatformIdentifier(String);

impl PlatformIdentifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlatformIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for PlatformIdentifier {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_str_eq() {
        let id = PlatformIdentifier::new("win7-x64");
        assert_eq!(id.to_string(), "win7-x64");
        assert_eq!(id, "win7-x64");
    }

    #[test]
    fn test_serde_transparent() {
        let id = PlatformIdentifier::new("osx.10.10-x64");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"osx.10.10-x64\"");
    }
}
