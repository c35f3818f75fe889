use tracing::debug;

use crate::moniker::split_head;

use super::PlatformIdentifier;

/// Reference OS-version token emitted for `darwin` monikers.
pub const OSX_VERSION_TOKEN: &str = "osx.10.10";

/// Reference OS-version token emitted for `linux` monikers.
pub const UBUNTU_VERSION_TOKEN: &str = "ubuntu.14.04";

/// Reference OS-version token emitted for `win` monikers.
pub const WINDOWS_VERSION_TOKEN: &str = "win7";

/// Architectures covered by the fixed Mono identifier set.
const MONO_ARCHS: [&str; 2] = ["x86", "x64"];

/// The runtime identifiers a moniker's assets should be selected with.
///
/// The family is derived from the raw moniker here, not from a parsed
/// [`RuntimeMoniker`](crate::moniker::RuntimeMoniker): a spelled-out mono
/// moniker such as `x-mono-win-x64.v` parses as CLR for framework selection
/// but still gets the fixed Mono platform set. Mono implies its reference
/// platforms regardless of what the moniker claims.
///
/// Unknown or malformed input yields an empty set; callers probe many
/// monikers and treat emptiness as "not applicable here".
pub fn runtime_identifiers(moniker: &str) -> Vec<PlatformIdentifier> {
    let identifiers = identifiers_for(moniker);
    debug!(moniker, count = identifiers.len(), "runtime identifiers");
    identifiers
}

fn identifiers_for(moniker: &str) -> Vec<PlatformIdentifier> {
    let Some(segments) = split_head(moniker) else {
        return Vec::new();
    };

    if segments[1].eq_ignore_ascii_case("mono") {
        return [OSX_VERSION_TOKEN, UBUNTU_VERSION_TOKEN]
            .iter()
            .flat_map(|os| {
                MONO_ARCHS
                    .iter()
                    .map(move |arch| PlatformIdentifier::new(format!("{os}-{arch}")))
            })
            .collect();
    }

    if segments.len() != 4 {
        return Vec::new();
    }

    // Unknown engine families never map to a platform.
    if !matches!(
        segments[1].to_ascii_lowercase().as_str(),
        "clr" | "coreclr"
    ) {
        return Vec::new();
    }

    let arch = segments[3];
    let os_token = match segments[2].to_ascii_lowercase().as_str() {
        "darwin" => OSX_VERSION_TOKEN,
        "linux" => UBUNTU_VERSION_TOKEN,
        "win" => WINDOWS_VERSION_TOKEN,
        _ => return Vec::new(),
    };

    vec![PlatformIdentifier::new(format!("{os_token}-{arch}"))]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(moniker: &str) -> Vec<String> {
        runtime_identifiers(moniker)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test_log::test]
    fn test_mono_fixed_set() {
        assert_eq!(
            tokens("dnx-mono.1.0.0"),
            vec![
                "osx.10.10-x86",
                "osx.10.10-x64",
                "ubuntu.14.04-x86",
                "ubuntu.14.04-x64",
            ]
        );
    }

    #[test]
    fn test_mono_fixed_set_is_case_insensitive() {
        assert_eq!(tokens("dnx-Mono.1.0.0"), tokens("dnx-mono.1.0.0"));
    }

    #[test]
    fn test_mono_long_form_still_gets_fixed_set() {
        // The spelled-out form carries os/arch, but mono ignores them.
        assert_eq!(tokens("dnx-mono-win-x64.1.0.0"), tokens("dnx-mono.1.0.0"));
    }

    #[test]
    fn test_darwin() {
        assert_eq!(tokens("dnx-clr-darwin-x64.1.0.0"), vec!["osx.10.10-x64"]);
    }

    #[test]
    fn test_linux() {
        assert_eq!(tokens("dnx-clr-linux-x86.1.0.0"), vec!["ubuntu.14.04-x86"]);
    }

    #[test]
    fn test_windows() {
        assert_eq!(tokens("dnx-clr-win-x64.1.0.0"), vec!["win7-x64"]);
        assert_eq!(tokens("dnx-coreclr-WIN-x64.1.0.0"), vec!["win7-x64"]);
    }

    #[test]
    fn test_arch_passes_through_verbatim() {
        assert_eq!(tokens("dnx-clr-win-ARM64.1.0.0"), vec!["win7-ARM64"]);
    }

    #[test]
    fn test_unknown_os() {
        assert!(tokens("dnx-clr-freebsd-x64.1.0.0").is_empty());
    }

    #[test]
    fn test_unknown_family_is_empty() {
        assert!(tokens("dnx-jvm-linux-x64.1.0.0").is_empty());
    }

    #[test]
    fn test_three_segment_head_is_empty() {
        assert!(tokens("dnx-clr-win.1.0.0").is_empty());
    }

    #[test]
    fn test_malformed_monikers_are_empty() {
        assert!(tokens("dnx-clr-win-x64").is_empty()); // no version suffix
        assert!(tokens("dnx.1.0.0").is_empty()); // single head segment
        assert!(tokens("").is_empty());
    }
}
