//! Desktop runtime: window lifecycle state, drag tracking, reducer, and shell components.
//!
//! State lives in [`DesktopState`] and only changes through [`reduce_desktop`]. The Leptos
//! layer ([`DesktopProvider`], [`DesktopShell`]) dispatches actions and executes the
//! [`RuntimeEffect`] values the reducer returns.

pub mod apps;
pub mod catalog;
pub mod components;
pub mod drag;
mod effect_executor;
pub mod host;
pub mod model;
pub mod reducer;
mod runtime_context;
pub mod window_manager;

pub use catalog::{app_catalog, AppManifestEntry, WindowDefaults};
pub use components::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext, DesktopShell};
pub use drag::{DragController, DragSession};
pub use host::DesktopHostContext;
pub use model::*;
pub use reducer::{reduce_desktop, DesktopAction, ReducerError, RuntimeEffect};
