//! Disguised-tab host-service contracts.
//!
//! A disguised tab is a fresh top-level browsing context that shows nothing but one borderless
//! content frame pointed at a resolved address, under a neutral title.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

use serde::{Deserialize, Serialize};

/// Object-safe boxed future used by [`DisguisedTabService`].
pub type DisguisedTabFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Sandbox policy applied to every embedded content frame.
///
/// Scripts, same-origin access, forms, popups, and modal dialogs are allowed; top-level
/// navigation is not.
pub const CONTENT_FRAME_SANDBOX: &str =
    "allow-scripts allow-same-origin allow-forms allow-popups allow-modals";

/// Document title used for disguised tabs.
pub const DISGUISED_TAB_TITLE: &str = "about:blank";

/// Inline style removing page chrome from the disguised document.
pub const DISGUISED_PAGE_STYLE: &str =
    "margin:0;padding:0;width:100%;height:100%;overflow:hidden;";

/// Inline style making the frame fill the disguised document.
pub const DISGUISED_FRAME_STYLE: &str =
    "display:block;width:100%;height:100%;border:none;margin:0;padding:0;";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Description of the minimal document a host builds for a disguised tab.
pub struct DisguisedTabSpec {
    /// Neutral document title.
    pub title: String,
    /// Fully-qualified address loaded by the content frame.
    pub frame_src: String,
    /// Sandbox attribute value for the content frame.
    pub frame_sandbox: String,
    /// Inline style for the document root and body.
    pub page_style: String,
    /// Inline style for the content frame.
    pub frame_style: String,
}

impl DisguisedTabSpec {
    /// Builds the tab description for a resolved address, or `None` when there is nothing to show.
    pub fn for_address(address: &str) -> Option<Self> {
        let address = address.trim();
        if address.is_empty() {
            return None;
        }
        Some(Self {
            title: DISGUISED_TAB_TITLE.to_string(),
            frame_src: address.to_string(),
            frame_sandbox: CONTENT_FRAME_SANDBOX.to_string(),
            page_style: DISGUISED_PAGE_STYLE.to_string(),
            frame_style: DISGUISED_FRAME_STYLE.to_string(),
        })
    }
}

/// Host service for opening disguised tabs outside the desktop shell.
pub trait DisguisedTabService {
    /// Opens a new top-level browsing context described by `spec`.
    fn open_disguised<'a>(
        &'a self,
        spec: &'a DisguisedTabSpec,
    ) -> DisguisedTabFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op disguised-tab service for unsupported targets.
pub struct NoopDisguisedTabService;

impl DisguisedTabService for NoopDisguisedTabService {
    fn open_disguised<'a>(
        &'a self,
        _spec: &'a DisguisedTabSpec,
    ) -> DisguisedTabFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory disguised-tab service that records every opened tab.
pub struct MemoryDisguisedTabService {
    opened: Rc<RefCell<Vec<DisguisedTabSpec>>>,
}

impl MemoryDisguisedTabService {
    /// Returns the tabs opened so far, oldest first.
    pub fn opened(&self) -> Vec<DisguisedTabSpec> {
        self.opened.borrow().clone()
    }
}

impl DisguisedTabService for MemoryDisguisedTabService {
    fn open_disguised<'a>(
        &'a self,
        spec: &'a DisguisedTabSpec,
    ) -> DisguisedTabFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.opened.borrow_mut().push(spec.clone());
            Ok(())
        })
    }
}
