use std::fmt;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A numeric framework version with up to four dot-separated parts.
///
/// Parts that are not written compare as zero, so `4.6` equals `4.6.0`.
/// Ordering is lexicographic over the four parts, which gives the standard
/// total order on versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameworkVersion {
    parts: [u64; 4],
}

impl FrameworkVersion {
    pub const fn new(major: u64, minor: u64) -> Self {
        Self {
            parts: [major, minor, 0, 0],
        }
    }

    pub const fn with_build(major: u64, minor: u64, build: u64, revision: u64) -> Self {
        Self {
            parts: [major, minor, build, revision],
        }
    }
}

impl FromStr for FrameworkVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = [0u64; 4];
        let mut count = 0;
        for piece in s.split('.') {
            if count == parts.len() {
                anyhow::bail!("Version {:?} has more than four parts", s);
            }
            parts[count] = piece
                .parse()
                .with_context(|| format!("Invalid version part {:?} in {:?}", piece, s))?;
            count += 1;
        }
        Ok(Self { parts })
    }
}

impl fmt::Display for FrameworkVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Trailing zero parts are elided, but always show major.minor.
        let shown = self
            .parts
            .iter()
            .rposition(|&p| p != 0)
            .map_or(2, |i| (i + 1).max(2));
        let mut first = true;
        for part in &self.parts[..shown] {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{part}")?;
            first = false;
        }
        Ok(())
    }
}

impl Serialize for FrameworkVersion {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for FrameworkVersion {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
