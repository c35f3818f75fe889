use tracing::debug;

use crate::moniker::{RuntimeFamily, RuntimeMoniker};

use super::{FrameworkDescriptor, FrameworkVersion};

/// Identifier of the legacy full-CLR framework family.
pub const LEGACY_FRAMEWORK_IDENTIFIER: &str = "DNX";

/// Highest legacy framework version a CLR or Mono runtime can load.
pub const LEGACY_VERSION_CEILING: FrameworkVersion = FrameworkVersion::new(4, 6);

/// The one framework a CoreCLR runtime resolves to.
pub fn core_framework() -> FrameworkDescriptor {
    FrameworkDescriptor::new("DNXCore", FrameworkVersion::new(5, 0))
}

/// Decides whether one framework is usable where another is required.
///
/// Supplied by an external versioning library; the selector only consumes
/// its verdicts.
#[cfg_attr(test, mockall::automock)]
pub trait CompatibilityOracle: Send + Sync {
    fn is_compatible(
        &self,
        reference: &FrameworkDescriptor,
        candidate: &FrameworkDescriptor,
    ) -> bool;
}

/// Framework selection - pure functions picking a framework for a runtime.
///
/// All methods are stateless; "no match" is `None`, never an error.
pub struct FrameworkSelector;

impl FrameworkSelector {
    /// Pick the framework the given runtime should target.
    ///
    /// - `Mono`/`Clr`: the highest-versioned candidate with the legacy
    ///   identifier and a version at or below [`LEGACY_VERSION_CEILING`].
    /// - `CoreClr`: the first candidate exactly equal to [`core_framework`].
    /// - `Unrecognized`: `None`.
    pub fn select<'a>(
        moniker: &RuntimeMoniker,
        candidates: &'a [FrameworkDescriptor],
    ) -> Option<&'a FrameworkDescriptor> {
        Self::select_from(moniker.family, candidates.iter())
    }

    /// Like [`select`](Self::select), but first drops candidates the oracle
    /// reports incompatible with `reference`.
    pub fn select_compatible<'a>(
        moniker: &RuntimeMoniker,
        candidates: &'a [FrameworkDescriptor],
        reference: &FrameworkDescriptor,
        oracle: &dyn CompatibilityOracle,
    ) -> Option<&'a FrameworkDescriptor> {
        Self::select_from(
            moniker.family,
            candidates
                .iter()
                .filter(|fx| oracle.is_compatible(reference, fx)),
        )
    }

    fn select_from<'a>(
        family: RuntimeFamily,
        mut candidates: impl Iterator<Item = &'a FrameworkDescriptor>,
    ) -> Option<&'a FrameworkDescriptor> {
        let selected = match family {
            RuntimeFamily::Mono | RuntimeFamily::Clr => candidates
                .filter(|fx| {
                    fx.identifier == LEGACY_FRAMEWORK_IDENTIFIER
                        && fx.version <= LEGACY_VERSION_CEILING
                })
                .max_by_key(|fx| fx.version),
            RuntimeFamily::CoreClr => {
                let core = core_framework();
                candidates.find(|fx| **fx == core)
            }
            RuntimeFamily::Unrecognized => None,
        };
        debug!(%family, selected = ?selected.map(ToString::to_string), "framework selection");
        selected
    }
}
