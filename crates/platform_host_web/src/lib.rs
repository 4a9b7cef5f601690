//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate is the concrete browser-side host wiring layer. Off `wasm32` the web adapters
//! compile but report themselves as unsupported, so the runtime can still be unit tested natively.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Compile-time host-strategy selection and concrete adapter factories for runtime wiring.
pub mod adapters;
pub mod disguised_tab;

pub use adapters::{
    build_host_services, disguised_tab_service, host_strategy_name, selected_host_strategy,
    DisguisedTabServiceAdapter,
};
pub use disguised_tab::WebDisguisedTabService;
