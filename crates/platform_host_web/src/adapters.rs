use std::rc::Rc;

use platform_host::{
    DisguisedTabFuture, DisguisedTabService, DisguisedTabSpec, HostServices, HostStrategy,
    NoopDisguisedTabService,
};

use crate::WebDisguisedTabService;

/// Returns the compile-time selected host strategy for the active build.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(feature = "desktop-host-stub")]
    {
        HostStrategy::Headless
    }

    #[cfg(not(feature = "desktop-host-stub"))]
    {
        HostStrategy::Browser
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Adapter enum that erases the concrete disguised-tab backend behind [`DisguisedTabService`].
#[derive(Debug, Clone, Copy)]
pub enum DisguisedTabServiceAdapter {
    /// Browser-backed popup adapter.
    Browser(WebDisguisedTabService),
    /// No-op fallback for headless builds.
    Headless(NoopDisguisedTabService),
}

impl DisguisedTabService for DisguisedTabServiceAdapter {
    fn open_disguised<'a>(
        &'a self,
        spec: &'a DisguisedTabSpec,
    ) -> DisguisedTabFuture<'a, Result<(), String>> {
        match self {
            Self::Browser(service) => service.open_disguised(spec),
            Self::Headless(service) => service.open_disguised(spec),
        }
    }
}

/// Builds the disguised-tab adapter for the selected host strategy.
pub fn disguised_tab_service() -> DisguisedTabServiceAdapter {
    match selected_host_strategy() {
        HostStrategy::Browser => DisguisedTabServiceAdapter::Browser(WebDisguisedTabService),
        HostStrategy::Headless => DisguisedTabServiceAdapter::Headless(NoopDisguisedTabService),
    }
}

/// Builds the full host service bundle injected into the desktop runtime.
pub fn build_host_services() -> HostServices {
    HostServices {
        disguised_tabs: Rc::new(disguised_tab_service()),
        host_strategy: selected_host_strategy(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "desktop-host-stub"))]
    #[test]
    fn default_build_selects_browser_adapters() {
        assert_eq!(selected_host_strategy(), HostStrategy::Browser);
        assert_eq!(host_strategy_name(), "browser");
        assert!(matches!(
            disguised_tab_service(),
            DisguisedTabServiceAdapter::Browser(_)
        ));
        assert_eq!(build_host_services().host_strategy, HostStrategy::Browser);
    }
}
