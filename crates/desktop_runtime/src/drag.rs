//! Single-session pointer drag tracking for window title bars.

use crate::model::{AppId, PointerOffset, PointerPosition, WindowPosition, WindowRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// An in-progress title-bar drag.
pub struct DragSession {
    pub app_id: AppId,
    /// Pointer position minus window origin, captured at press time.
    pub grab_offset: PointerOffset,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Holds at most one drag session for the whole desktop.
pub struct DragController {
    session: Option<DragSession>,
}

impl DragController {
    /// Starts dragging `window` from `pointer`.
    ///
    /// Fullscreen and closed windows cannot be dragged; the call is ignored and any existing
    /// session is kept. Otherwise the new session replaces whatever was active.
    pub fn begin(&mut self, window: &WindowRecord, pointer: PointerPosition) -> bool {
        if window.is_fullscreen || !window.is_open {
            return false;
        }
        self.session = Some(DragSession {
            app_id: window.app_id,
            grab_offset: window.position.offset_to(pointer),
        });
        true
    }

    /// Returns the window origin that follows `pointer`, or `None` with no active session.
    pub fn pointer_moved(&self, pointer: PointerPosition) -> Option<(AppId, WindowPosition)> {
        self.session.map(|session| {
            (
                session.app_id,
                WindowPosition::anchored_at(pointer, session.grab_offset),
            )
        })
    }

    /// Ends the active session, if any.
    pub fn end(&mut self) -> Option<DragSession> {
        self.session.take()
    }

    /// Ends the active session only when it belongs to `app_id`.
    pub fn end_for(&mut self, app_id: AppId) -> bool {
        if self.active_app() == Some(app_id) {
            self.session = None;
            return true;
        }
        false
    }

    pub fn active_app(&self) -> Option<AppId> {
        self.session.map(|session| session.app_id)
    }

    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
