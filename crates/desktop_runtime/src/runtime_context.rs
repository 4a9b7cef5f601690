//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived reducer container, the runtime effect queue, and the service
//! bundle handed to mounted apps. UI composition stays in [`crate::components`].

use desktop_app_contract::{AppCommand, AppServices};
use leptos::*;
use platform_host::HostServices;

use crate::{
    effect_executor,
    host::DesktopHostContext,
    model::{DesktopState, InteractionState, ShellRoute},
    reducer::{reduce_desktop, DesktopAction, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading desktop runtime state and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Host service bundle for executing runtime side effects.
    pub host: StoredValue<DesktopHostContext>,
    /// Reactive desktop state signal.
    pub state: RwSignal<DesktopState>,
    /// Reactive pointer/drag interaction state signal.
    pub interaction: RwSignal<InteractionState>,
    /// Queue of runtime effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
    /// Services injected into every mounted app.
    pub app_services: AppServices,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }
}

fn build_app_services(
    state: RwSignal<DesktopState>,
    dispatch: Callback<DesktopAction>,
) -> AppServices {
    let sender = Callback::new(move |command: AppCommand| {
        dispatch.call(DesktopAction::HandleAppCommand(command));
    });
    let mode = create_memo(move |_| state.with(|desktop| desktop.theme.mode));
    let accent = create_memo(move |_| state.with(|desktop| desktop.theme.accent));
    AppServices::new(sender, mode.into(), accent.into())
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    host_services: HostServices,
    /// Router hook used when the shell leaves the desktop.
    #[prop(into)]
    navigate: Callback<ShellRoute>,
    children: Children,
) -> impl IntoView {
    let host = store_value(DesktopHostContext::new(host_services, navigate));
    let state = create_rw_signal(DesktopState::default());
    let interaction = create_rw_signal(InteractionState::default());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut desktop = state.get_untracked();
        let mut ui = interaction.get_untracked();

        match reduce_desktop(&mut desktop, &mut ui, action) {
            Ok(new_effects) => {
                if state.with_untracked(|previous| *previous != desktop) {
                    state.set(desktop);
                }
                if interaction.with_untracked(|previous| *previous != ui) {
                    interaction.set(ui);
                }
                if !new_effects.is_empty() {
                    effects.update(|queue| queue.extend(new_effects));
                }
            }
            Err(err) => logging::warn!("desktop reducer error: {err}"),
        }
    });

    let runtime = DesktopRuntimeContext {
        host,
        state,
        interaction,
        effects,
        dispatch,
        app_services: build_app_services(state, dispatch),
    };

    provide_context(runtime);
    logging::log!(
        "desktop runtime started (host strategy: {})",
        host.with_value(DesktopHostContext::host_strategy_name)
    );

    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}
