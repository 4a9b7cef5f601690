//! Shared contract types between the desktop runtime and the apps it hosts.
//!
//! Apps never mutate shell state directly. They receive an [`AppMountContext`] with reactive
//! theme reads and service handles that send [`AppCommand`] values back to the runtime.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal, SignalGet, View};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Light or dark shell appearance.
pub enum ThemeMode {
    /// Dark surfaces with light text.
    #[default]
    Dark,
    /// Light surfaces with dark text.
    Light,
}

impl ThemeMode {
    /// Returns the stable token used in `data-theme` attributes.
    pub const fn css_id(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Returns the human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }

    /// Returns the derived color palette for this mode.
    pub const fn palette(self) -> ShellPalette {
        match self {
            Self::Dark => ShellPalette {
                desktop: "#0C111C",
                window: "#161B27",
                panel: "#1A202E",
                header: "#0C111C",
                input: "#2A3040",
                menu: "#1A202E",
                text: "white",
                muted: "#6D737B",
                border: "#2A3040",
                hover: "rgba(255,255,255,0.1)",
            },
            Self::Light => ShellPalette {
                desktop: "#E8ECF4",
                window: "#F0F4F8",
                panel: "#F3F4F6",
                header: "#E5E7EB",
                input: "#FFFFFF",
                menu: "#FFFFFF",
                text: "#0C111C",
                muted: "#6B7280",
                border: "#D1D5DB",
                hover: "rgba(0,0,0,0.1)",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// CSS colors derived from a [`ThemeMode`].
pub struct ShellPalette {
    /// Desktop and taskbar background.
    pub desktop: &'static str,
    /// Default window background.
    pub window: &'static str,
    /// Browser content panel background.
    pub panel: &'static str,
    /// Window header and toolbar background.
    pub header: &'static str,
    /// Text input background.
    pub input: &'static str,
    /// Popover menu background.
    pub menu: &'static str,
    /// Primary text color.
    pub text: &'static str,
    /// Secondary text color.
    pub muted: &'static str,
    /// Border color.
    pub border: &'static str,
    /// Hover and active-item highlight.
    pub hover: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Accent colors offered by the settings app.
pub enum AccentColor {
    /// `#7AD0BD`
    #[default]
    Teal,
    /// `#5B9BD5`
    Blue,
    /// `#9B7AD0`
    Purple,
    /// `#D07A9B`
    Pink,
    /// `#D0A07A`
    Orange,
    /// `#7AD07A`
    Green,
}

impl AccentColor {
    /// Every accent in picker order.
    pub const ALL: [Self; 6] = [
        Self::Teal,
        Self::Blue,
        Self::Purple,
        Self::Pink,
        Self::Orange,
        Self::Green,
    ];

    /// Returns the display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Teal => "Teal",
            Self::Blue => "Blue",
            Self::Purple => "Purple",
            Self::Pink => "Pink",
            Self::Orange => "Orange",
            Self::Green => "Green",
        }
    }

    /// Returns the CSS hex value.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Teal => "#7AD0BD",
            Self::Blue => "#5B9BD5",
            Self::Purple => "#9B7AD0",
            Self::Pink => "#D07A9B",
            Self::Orange => "#D0A07A",
            Self::Green => "#7AD07A",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Commands emitted by app services to the desktop runtime.
pub enum AppCommand {
    /// Switch the shell between dark and light.
    SetThemeMode {
        /// New appearance.
        mode: ThemeMode,
    },
    /// Change the shell accent color.
    SetAccentColor {
        /// New accent.
        accent: AccentColor,
    },
    /// Open a resolved address in a disguised top-level tab.
    OpenDisguisedTab {
        /// Fully-qualified address.
        address: String,
    },
}

#[derive(Clone, Copy)]
/// Theme reads and appearance controls.
pub struct ThemeService {
    sender: Callback<AppCommand>,
    /// Current appearance.
    pub mode: Signal<ThemeMode>,
    /// Current accent color.
    pub accent: Signal<AccentColor>,
}

impl ThemeService {
    /// Requests an appearance change.
    pub fn set_mode(&self, mode: ThemeMode) {
        self.sender.call(AppCommand::SetThemeMode { mode });
    }

    /// Requests an accent change.
    pub fn set_accent(&self, accent: AccentColor) {
        self.sender.call(AppCommand::SetAccentColor { accent });
    }

    /// Returns the palette for the current appearance (tracked).
    pub fn palette(&self) -> ShellPalette {
        self.mode.get().palette()
    }
}

#[derive(Clone, Copy)]
/// Escape hatches that leave the desktop shell.
pub struct BrowsingService {
    sender: Callback<AppCommand>,
}

impl BrowsingService {
    /// Requests a disguised tab for `address`.
    pub fn open_disguised(&self, address: impl Into<String>) {
        self.sender.call(AppCommand::OpenDisguisedTab {
            address: address.into(),
        });
    }
}

#[derive(Clone, Copy)]
/// Service bundle injected into every mounted app.
pub struct AppServices {
    /// Theme reads and controls.
    pub theme: ThemeService,
    /// Disguised-tab requests.
    pub browsing: BrowsingService,
}

impl AppServices {
    /// Creates service handles from the runtime command callback and theme reads.
    pub fn new(
        sender: Callback<AppCommand>,
        mode: Signal<ThemeMode>,
        accent: Signal<AccentColor>,
    ) -> Self {
        Self {
            theme: ThemeService {
                sender,
                mode,
                accent,
            },
            browsing: BrowsingService { sender },
        }
    }
}

#[derive(Clone, Copy)]
/// Context passed to an app when its window body mounts.
pub struct AppMountContext {
    /// Stable app id from the runtime catalog.
    pub app_id: &'static str,
    /// Runtime service bundle.
    pub services: AppServices,
}

/// Static app mount function used by the runtime registry.
pub type AppMountFn = fn(AppMountContext) -> View;

#[derive(Debug, Clone, Copy)]
/// Mounted app module descriptor used by the runtime app registry.
pub struct AppModule {
    mount_fn: AppMountFn,
}

impl AppModule {
    /// Creates a module from a mount function.
    pub const fn new(mount_fn: AppMountFn) -> Self {
        Self { mount_fn }
    }

    /// Mounts the app view with a runtime-provided context.
    pub fn mount(self, context: AppMountContext) -> View {
        (self.mount_fn)(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accent_palette_is_ordered_with_teal_default() {
        assert_eq!(AccentColor::default(), AccentColor::Teal);
        assert_eq!(AccentColor::ALL[0].hex(), "#7AD0BD");
        assert_eq!(AccentColor::ALL.len(), 6);
        let mut hexes = AccentColor::ALL.map(AccentColor::hex).to_vec();
        hexes.sort_unstable();
        hexes.dedup();
        assert_eq!(hexes.len(), 6);
    }

    #[test]
    fn theme_modes_produce_contrasting_palettes() {
        let dark = ThemeMode::Dark.palette();
        let light = ThemeMode::Light.palette();
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(dark.text, "white");
        assert_eq!(light.text, dark.desktop);
        assert_ne!(dark.window, light.window);
    }

    #[test]
    fn theme_types_serialize_as_kebab_tokens() {
        assert_eq!(
            serde_json::to_string(&ThemeMode::Light).expect("serialize"),
            "\"light\""
        );
        let accent: AccentColor = serde_json::from_str("\"purple\"").expect("deserialize");
        assert_eq!(accent, AccentColor::Purple);
    }
}
