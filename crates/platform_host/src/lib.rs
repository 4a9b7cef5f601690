//! Typed host-domain contracts shared by the desktop runtime and browser adapters.
//!
//! This crate is the API-first boundary for platform services: clock reads and the
//! disguised-tab escape hatch. Concrete browser adapters live in `platform_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod disguised_tab;
pub mod host;
pub mod time;

pub use disguised_tab::{
    DisguisedTabFuture, DisguisedTabService, DisguisedTabSpec, MemoryDisguisedTabService,
    NoopDisguisedTabService, CONTENT_FRAME_SANDBOX, DISGUISED_TAB_TITLE,
};
pub use host::{HostServices, HostStrategy};
pub use time::ClockSnapshot;
