use desktop_app_contract::{AccentColor, ThemeMode};
use serde::{Deserialize, Serialize};

use crate::{catalog, drag::DragController};

/// Height reserved for the taskbar at the bottom of the desktop.
pub const TASKBAR_HEIGHT_PX: i32 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppId {
    Settings,
    Files,
    Browser,
}

impl AppId {
    /// Every built-in app in launcher order.
    pub const ALL: [Self; 3] = [Self::Settings, Self::Files, Self::Browser];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Settings => "settings",
            Self::Files => "files",
            Self::Browser => "browser",
        }
    }

    /// Maps a launch-request id to an app. Matching is exact.
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|app_id| app_id.as_str() == raw)
    }

    /// Index of this app's record in the window registry.
    pub const fn slot(self) -> usize {
        match self {
            Self::Settings => 0,
            Self::Files => 1,
            Self::Browser => 2,
        }
    }

    pub fn title(self) -> &'static str {
        catalog::manifest(self).display_name.as_str()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerOffset {
    pub dx: i32,
    pub dy: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    /// Offset from this origin to `pointer`.
    pub fn offset_to(self, pointer: PointerPosition) -> PointerOffset {
        PointerOffset {
            dx: pointer.x - self.x,
            dy: pointer.y - self.y,
        }
    }

    /// Origin that keeps `offset` between the window and `pointer`.
    pub fn anchored_at(pointer: PointerPosition, offset: PointerOffset) -> Self {
        Self {
            x: pointer.x - offset.dx,
            y: pointer.y - offset.dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WindowSize {
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Where a window renders.
pub enum WindowFrame {
    /// At its stored position with its fixed size.
    Floating(WindowRect),
    /// Pinned to the viewport origin, full width, above the taskbar.
    Docked,
}

impl WindowFrame {
    /// Resolves the frame against a concrete viewport.
    pub fn resolve(self, viewport: WindowSize) -> WindowRect {
        match self {
            Self::Floating(rect) => rect,
            Self::Docked => WindowRect {
                x: 0,
                y: 0,
                w: viewport.w,
                h: (viewport.h - TASKBAR_HEIGHT_PX).max(0),
            },
        }
    }

    /// Inline positioning style for the window element.
    pub fn css(self) -> String {
        match self {
            Self::Floating(rect) => format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;",
                rect.x, rect.y, rect.w, rect.h
            ),
            Self::Docked => {
                format!("left:0;top:0;width:100%;height:calc(100% - {TASKBAR_HEIGHT_PX}px);")
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Persistent per-app window record. Closing hides it; nothing is destroyed.
pub struct WindowRecord {
    pub app_id: AppId,
    pub is_open: bool,
    pub is_fullscreen: bool,
    pub position: WindowPosition,
    pub size: WindowSize,
}

impl WindowRecord {
    /// A closed, windowed record at the manifest's default geometry.
    pub fn closed(app_id: AppId) -> Self {
        let defaults = catalog::manifest(app_id).window_defaults;
        Self {
            app_id,
            is_open: false,
            is_fullscreen: false,
            position: defaults.position(),
            size: defaults.size(),
        }
    }

    pub fn frame(&self) -> WindowFrame {
        if self.is_fullscreen {
            WindowFrame::Docked
        } else {
            WindowFrame::Floating(WindowRect {
                x: self.position.x,
                y: self.position.y,
                w: self.size.w,
                h: self.size.h,
            })
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Fixed registry holding exactly one window record per built-in app.
pub struct WindowRegistry {
    records: [WindowRecord; 3],
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self {
            records: AppId::ALL.map(WindowRecord::closed),
        }
    }
}

impl WindowRegistry {
    pub fn get(&self, app_id: AppId) -> &WindowRecord {
        &self.records[app_id.slot()]
    }

    pub fn get_mut(&mut self, app_id: AppId) -> &mut WindowRecord {
        &mut self.records[app_id.slot()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &WindowRecord> {
        self.records.iter()
    }

    /// Apps whose window is currently open, in launcher order.
    pub fn open_apps(&self) -> Vec<AppId> {
        self.records
            .iter()
            .filter(|record| record.is_open)
            .map(|record| record.app_id)
            .collect()
    }

    pub fn is_open(&self, app_id: AppId) -> bool {
        self.get(app_id).is_open
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Top-level routes the shell can leave the desktop for.
pub enum ShellRoute {
    /// Boot splash.
    Splash,
    /// Lock/login screen.
    Startup,
    /// The desktop itself.
    Desktop,
}

impl ShellRoute {
    pub const fn path(self) -> &'static str {
        match self {
            Self::Splash => "/",
            Self::Startup => "/startup",
            Self::Desktop => "/desktop",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopTheme {
    pub mode: ThemeMode,
    pub accent: AccentColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DesktopState {
    pub windows: WindowRegistry,
    pub theme: DesktopTheme,
    pub app_drawer_open: bool,
    pub power_menu_open: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Transient pointer interaction state, kept apart from [`DesktopState`] so drags do not
/// re-render every window.
pub struct InteractionState {
    pub drag: DragController,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_starts_closed_at_manifest_defaults() {
        let registry = WindowRegistry::default();
        assert!(registry.open_apps().is_empty());

        let settings = registry.get(AppId::Settings);
        assert_eq!(settings.position, WindowPosition { x: 100, y: 50 });
        assert_eq!(settings.size, WindowSize { w: 500, h: 400 });
        assert!(!settings.is_fullscreen);

        assert_eq!(
            registry.get(AppId::Files).position,
            WindowPosition { x: 150, y: 100 }
        );
        assert_eq!(
            registry.get(AppId::Browser).size,
            WindowSize { w: 800, h: 600 }
        );
    }

    #[test]
    fn app_ids_parse_exactly() {
        for app_id in AppId::ALL {
            assert_eq!(AppId::parse(app_id.as_str()), Some(app_id));
        }
        assert_eq!(AppId::parse("Settings"), None);
        assert_eq!(AppId::parse(" files"), None);
        assert_eq!(AppId::parse("terminal"), None);
    }

    #[test]
    fn docked_frame_spans_viewport_above_taskbar() {
        let mut record = WindowRecord::closed(AppId::Browser);
        record.is_fullscreen = true;
        let rect = record.frame().resolve(WindowSize { w: 1280, h: 720 });
        assert_eq!(
            rect,
            WindowRect {
                x: 0,
                y: 0,
                w: 1280,
                h: 672
            }
        );
        assert_eq!(
            record.frame().css(),
            "left:0;top:0;width:100%;height:calc(100% - 48px);"
        );
    }

    #[test]
    fn floating_frame_uses_position_and_fixed_size() {
        let record = WindowRecord::closed(AppId::Settings);
        assert_eq!(
            record.frame().css(),
            "left:100px;top:50px;width:500px;height:400px;"
        );
    }

    #[test]
    fn grab_offset_round_trips_through_anchor() {
        let origin = WindowPosition { x: 80, y: 30 };
        let grab = PointerPosition { x: 120, y: 45 };
        let offset = origin.offset_to(grab);
        assert_eq!(offset, PointerOffset { dx: 40, dy: 15 });

        let moved = WindowPosition::anchored_at(PointerPosition { x: 300, y: 200 }, offset);
        assert_eq!(moved, WindowPosition { x: 260, y: 185 });
    }
}
