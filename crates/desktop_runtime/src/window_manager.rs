//! Window lifecycle transitions used by the desktop reducer.
//!
//! Each helper returns `true` when it changed state. Records are never created or removed, so
//! every transition is a field update on the app's registry slot.

use crate::model::{AppId, DesktopState, InteractionState, WindowPosition};

/// Shows the window. Reopening restores its last position and fullscreen flag.
pub fn open_window(state: &mut DesktopState, app_id: AppId) -> bool {
    let record = state.windows.get_mut(app_id);
    if record.is_open {
        return false;
    }
    record.is_open = true;
    true
}

/// Hides the window and ends a drag it owns. Position and fullscreen flag are retained.
pub fn close_window(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    app_id: AppId,
) -> bool {
    interaction.drag.end_for(app_id);
    let record = state.windows.get_mut(app_id);
    if !record.is_open {
        return false;
    }
    record.is_open = false;
    true
}

/// Flips between the floating and docked frame. Position is untouched.
pub fn toggle_fullscreen(state: &mut DesktopState, app_id: AppId) -> bool {
    let record = state.windows.get_mut(app_id);
    record.is_fullscreen = !record.is_fullscreen;
    true
}

/// Overwrites the stored position of a windowed window.
pub fn move_window(state: &mut DesktopState, app_id: AppId, position: WindowPosition) -> bool {
    let record = state.windows.get_mut(app_id);
    if record.is_fullscreen || record.position == position {
        return false;
    }
    record.position = position;
    true
}
