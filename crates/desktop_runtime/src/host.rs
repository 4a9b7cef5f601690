//! Host-side runtime helpers for executing reducer effects.
//!
//! Effects leave the pure reducer here: route changes go to the navigation callback supplied by
//! the entry layer, and disguised tabs go to the injected [`DisguisedTabService`].

use std::rc::Rc;

use leptos::{logging, spawn_local, Callable, Callback};
use platform_host::{DisguisedTabService, DisguisedTabSpec, HostServices};

use crate::{model::ShellRoute, reducer::RuntimeEffect};

#[derive(Clone)]
/// Host service bundle for desktop runtime side effects.
pub struct DesktopHostContext {
    disguised_tabs: Rc<dyn DisguisedTabService>,
    navigate: Callback<ShellRoute>,
    host_strategy_name: &'static str,
}

impl DesktopHostContext {
    /// Wraps injected host services and the router callback.
    pub fn new(services: HostServices, navigate: Callback<ShellRoute>) -> Self {
        Self {
            disguised_tabs: services.disguised_tabs,
            navigate,
            host_strategy_name: services.host_strategy.as_str(),
        }
    }

    /// Returns the stable name of the selected host strategy.
    pub fn host_strategy_name(&self) -> &'static str {
        self.host_strategy_name
    }

    /// Executes a single [`RuntimeEffect`] emitted by the reducer.
    pub fn run_runtime_effect(&self, effect: RuntimeEffect) {
        match effect {
            RuntimeEffect::Navigate(route) => self.navigate.call(route),
            RuntimeEffect::OpenDisguisedTab { address } => {
                let service = self.disguised_tabs.clone();
                spawn_local(async move {
                    if let Err(err) = open_disguised_tab(service.as_ref(), &address).await {
                        logging::warn!("disguised tab failed: {err}");
                    }
                });
            }
        }
    }
}

/// Builds the disguised-tab document for `address` and asks the host to open it.
///
/// A blank address is a no-op.
pub async fn open_disguised_tab(
    service: &dyn DisguisedTabService,
    address: &str,
) -> Result<(), String> {
    let Some(spec) = DisguisedTabSpec::for_address(address) else {
        return Ok(());
    };
    service.open_disguised(&spec).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use platform_host::{MemoryDisguisedTabService, CONTENT_FRAME_SANDBOX, DISGUISED_TAB_TITLE};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn disguised_tab_targets_resolved_address() {
        let service = MemoryDisguisedTabService::default();
        block_on(open_disguised_tab(&service, "https://example.com")).expect("open");

        let opened = service.opened();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].frame_src, "https://example.com");
        assert_eq!(opened[0].title, DISGUISED_TAB_TITLE);
        assert_eq!(opened[0].frame_sandbox, CONTENT_FRAME_SANDBOX);
    }

    #[test]
    fn blank_address_opens_nothing() {
        let service = MemoryDisguisedTabService::default();
        block_on(open_disguised_tab(&service, "  ")).expect("noop");
        assert!(service.opened().is_empty());
    }
}
