//! Shared host-bundle models for browser runtime composition.

use std::rc::Rc;

use crate::{DisguisedTabService, NoopDisguisedTabService};

/// Stable host strategy selected for the current build/runtime composition path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed runtime composition.
    Browser,
    /// Headless composition with no-op adapters (native builds and tests).
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected host service bundle injected into the desktop runtime.
///
/// Environment-specific adapter selection happens before this bundle reaches `desktop_runtime`.
#[derive(Clone)]
pub struct HostServices {
    /// Disguised-tab opening service.
    pub disguised_tabs: Rc<dyn DisguisedTabService>,
    /// Stable strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Builds a headless bundle backed by no-op adapters.
    pub fn headless() -> Self {
        Self {
            disguised_tabs: Rc::new(NoopDisguisedTabService),
            host_strategy: HostStrategy::Headless,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::DisguisedTabSpec;

    #[test]
    fn headless_bundle_accepts_disguised_tabs_silently() {
        let services = HostServices::headless();
        assert_eq!(services.host_strategy.as_str(), "headless");

        let spec = DisguisedTabSpec::for_address("https://example.com").expect("spec");
        assert_eq!(block_on(services.disguised_tabs.open_disguised(&spec)), Ok(()));
    }
}
