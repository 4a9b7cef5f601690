//! App manifest catalog generated at build time from each app's `app.manifest.toml`.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::model::{AppId, WindowPosition, WindowSize};

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Initial window geometry declared by an app manifest.
pub struct WindowDefaults {
    /// Window width in CSS pixels.
    pub width: i32,
    /// Window height in CSS pixels.
    pub height: i32,
    /// Initial left offset.
    pub x: i32,
    /// Initial top offset.
    pub y: i32,
}

impl WindowDefaults {
    /// Returns the declared window size.
    pub const fn size(self) -> WindowSize {
        WindowSize {
            w: self.width,
            h: self.height,
        }
    }

    /// Returns the declared initial position.
    pub const fn position(self) -> WindowPosition {
        WindowPosition {
            x: self.x,
            y: self.y,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Display metadata for one built-in app.
pub struct AppManifestEntry {
    /// Manifest schema version.
    pub schema_version: u32,
    /// Stable app id used by launch requests.
    pub app_id: String,
    /// Title shown in window chrome, the launcher, and desktop icons.
    pub display_name: String,
    /// App version string.
    pub version: String,
    /// Contract version the app was built against.
    pub runtime_contract_version: String,
    /// Icon token rendered by the shell.
    pub icon: String,
    /// Whether at most one window exists for the app.
    pub single_instance: bool,
    /// Whether the app appears in the app drawer and pinned taskbar buttons.
    pub show_in_launcher: bool,
    /// Whether the app has a desktop icon.
    pub show_on_desktop: bool,
    /// Initial window geometry.
    pub window_defaults: WindowDefaults,
}

/// Parses a manifest catalog JSON document.
pub fn parse_catalog(json: &str) -> Result<Vec<AppManifestEntry>, serde_json::Error> {
    serde_json::from_str(json)
}

/// Returns the build-time catalog, sorted by app id.
pub fn app_catalog() -> &'static [AppManifestEntry] {
    static CATALOG: OnceLock<Vec<AppManifestEntry>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        parse_catalog(APP_MANIFEST_CATALOG_JSON).expect("build script emits a valid catalog")
    })
}

/// Returns the manifest for a built-in app.
pub fn manifest(app_id: AppId) -> &'static AppManifestEntry {
    app_catalog()
        .iter()
        .find(|entry| entry.app_id == app_id.as_str())
        .expect("build script validates one manifest per built-in app")
}

/// Returns catalog entries shown in the app drawer, in launcher order.
pub fn launcher_apps() -> Vec<AppId> {
    AppId::ALL
        .into_iter()
        .filter(|app_id| manifest(*app_id).show_in_launcher)
        .collect()
}

/// Returns catalog entries with desktop icons, in launcher order.
pub fn desktop_icon_apps() -> Vec<AppId> {
    AppId::ALL
        .into_iter()
        .filter(|app_id| manifest(*app_id).show_on_desktop)
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn generated_catalog_covers_every_builtin_app() {
        let ids = app_catalog()
            .iter()
            .map(|entry| entry.app_id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["browser", "files", "settings"]);
        for app_id in AppId::ALL {
            assert_eq!(AppId::parse(&manifest(app_id).app_id), Some(app_id));
        }
    }

    #[test]
    fn manifests_declare_window_geometry() {
        assert_eq!(
            manifest(AppId::Settings).window_defaults,
            WindowDefaults {
                width: 500,
                height: 400,
                x: 100,
                y: 50
            }
        );
        assert_eq!(
            manifest(AppId::Files).window_defaults.size(),
            WindowSize { w: 600, h: 450 }
        );
        assert_eq!(
            manifest(AppId::Browser).window_defaults.position(),
            WindowPosition { x: 80, y: 30 }
        );
    }

    #[test]
    fn launcher_lists_apps_in_pinned_order() {
        assert_eq!(
            launcher_apps(),
            vec![AppId::Settings, AppId::Files, AppId::Browser]
        );
        assert_eq!(desktop_icon_apps().len(), 3);
    }

    #[test]
    fn parse_catalog_rejects_missing_fields() {
        let err = parse_catalog(r#"[{"app_id":"browser"}]"#).unwrap_err();
        assert!(err.to_string().contains("missing field"));
    }
}
