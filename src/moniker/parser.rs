use std::fmt;

use serde::{Deserialize, Serialize};

/// Execution-engine family named by a runtime moniker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeFamily {
    /// Mono-flavored legacy CLR, named without os/arch (`x-mono.<v>`)
    Mono,
    /// Legacy full CLR (`clr` or `mono` in the long moniker form)
    Clr,
    /// CoreCLR-style engine
    CoreClr,
    /// A family token this tool does not know; treated as "no decision"
    Unrecognized,
}

impl fmt::Display for RuntimeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RuntimeFamily::Mono => "mono",
            RuntimeFamily::Clr => "clr",
            RuntimeFamily::CoreClr => "coreclr",
            RuntimeFamily::Unrecognized => "unrecognized",
        };
        f.write_str(name)
    }
}

/// A parsed runtime moniker.
///
/// `os` and `arch` are set only when the moniker spelled them out in its
/// four-segment form; the short `Mono` form never carries them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeMoniker {
    pub family: RuntimeFamily,
    pub os: Option<String>,
    pub arch: Option<String>,
}

impl RuntimeMoniker {
    /// Parse a moniker string, returning `None` for structurally malformed
    /// input (no version suffix, too few segments, or a short form whose
    /// engine is not `mono`).
    ///
    /// An unknown family token in the long form is not a structural error:
    /// it parses as [`RuntimeFamily::Unrecognized`] so that callers probing
    /// many candidate monikers can treat it as "not applicable here".
    pub fn parse(moniker: &str) -> Option<Self> {
        let segments = split_head(moniker)?;

        if segments.len() == 2 {
            // The short form is reserved for Mono, which implies its own
            // platform set. CLR needs os/arch to mean anything, so `x-clr.v`
            // stays invalid. Keep this asymmetry.
            if !segments[1].eq_ignore_ascii_case("mono") {
                return None;
            }
            return Some(RuntimeMoniker {
                family: RuntimeFamily::Mono,
                os: None,
                arch: None,
            });
        }

        let family = match segments[1].to_ascii_lowercase().as_str() {
            "mono" | "clr" => RuntimeFamily::Clr,
            "coreclr" => RuntimeFamily::CoreClr,
            _ => RuntimeFamily::Unrecognized,
        };

        let (os, arch) = if segments.len() == 4 {
            // Arch is an opaque token and passes through verbatim.
            (Some(segments[2].to_string()), Some(segments[3].to_string()))
        } else {
            (None, None)
        };

        Some(RuntimeMoniker { family, os, arch })
    }
}

/// Split a moniker into its head segments, discarding the version suffix.
///
/// The head is everything before the first `.`; it splits on `-` into at
/// most four segments. Returns `None` when there is no version suffix or
/// fewer than two head segments.
pub(crate) fn split_head(moniker: &str) -> Option<Vec<&str>> {
    let (head, _version) = moniker.split_once('.')?;
    let segments: Vec<&str> = head.splitn(4, '-').collect();
    if segments.len() < 2 {
        return None;
    }
    Some(segments)
}
