use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

const MANIFEST_SCHEMA_VERSION: u32 = 1;
const BUILTIN_APPS: [&str; 3] = ["browser", "files", "settings"];

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: i32,
    height: i32,
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    version: String,
    runtime_contract_version: String,
    icon: String,
    single_instance: bool,
    show_in_launcher: bool,
    show_on_desktop: bool,
    window_defaults: WindowDefaults,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    BUILTIN_APPS
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn validate(path: &Path, dir_name: &str, manifest: &AppManifest) {
    if manifest.schema_version != MANIFEST_SCHEMA_VERSION {
        panic!(
            "manifest schema mismatch in {}: expected {MANIFEST_SCHEMA_VERSION} found {}",
            path.display(),
            manifest.schema_version
        );
    }
    if !manifest.runtime_contract_version.starts_with("2.") {
        panic!(
            "runtime contract mismatch in {}: expected 2.x found {}",
            path.display(),
            manifest.runtime_contract_version
        );
    }
    if manifest.app_id != dir_name {
        panic!(
            "app id mismatch in {}: directory is `{dir_name}` but manifest says `{}`",
            path.display(),
            manifest.app_id
        );
    }
    if !manifest.single_instance {
        panic!(
            "{} must be single-instance: windows are keyed by app id",
            path.display()
        );
    }
    let defaults = &manifest.window_defaults;
    if defaults.width <= 0 || defaults.height <= 0 {
        panic!(
            "window defaults in {} must have a positive size, found {}x{}",
            path.display(),
            defaults.width,
            defaults.height
        );
    }
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();

    for (name, path) in BUILTIN_APPS.iter().zip(app_manifest_paths(&crate_root)) {
        println!("cargo:rerun-if-changed={}", path.display());
        let raw = fs::read_to_string(&path)
            .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
        let manifest: AppManifest = toml::from_str(&raw)
            .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
        validate(&path, name, &manifest);
        manifests.push(manifest);
    }

    manifests.sort_by(|a, b| a.app_id.cmp(&b.app_id));
    let json = serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("app_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
