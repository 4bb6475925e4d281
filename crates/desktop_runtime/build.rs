use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowDefaults {
    width: f64,
    height: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AppManifest {
    schema_version: u32,
    app_id: String,
    display_name: String,
    icon: String,
    launch_ids: Vec<String>,
    window_defaults: WindowDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellConfigFile {
    schema_version: u32,
    min_window_width: f64,
    min_window_height: f64,
    taskbar_height: f64,
    titlebar_drag_allowance: f64,
    cascade_step: f64,
    initial_z_index: u32,
}

fn app_manifest_paths(root: &Path) -> Vec<PathBuf> {
    ["this_pc"]
        .iter()
        .map(|name| {
            root.join("..")
                .join("apps")
                .join(name)
                .join("app.manifest.toml")
        })
        .collect()
}

fn read_toml<T: for<'de> Deserialize<'de>>(path: &Path) -> T {
    println!("cargo:rerun-if-changed={}", path.display());
    let raw = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    toml::from_str(&raw).unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()))
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let mut manifests = Vec::<AppManifest>::new();

    for path in app_manifest_paths(&crate_root) {
        let manifest: AppManifest = read_toml(&path);
        if manifest.schema_version != 1 {
            panic!(
                "manifest schema mismatch in {}: expected 1 found {}",
                path.display(),
                manifest.schema_version
            );
        }
        if manifest.launch_ids.is_empty() {
            panic!("manifest {} declares no launch ids", path.display());
        }
        manifests.push(manifest);
    }
    manifests.sort_by(|a, b| a.app_id.cmp(&b.app_id));

    let config_path = crate_root.join("shell.config.toml");
    let config: ShellConfigFile = read_toml(&config_path);
    if config.schema_version != 1 {
        panic!(
            "shell config schema mismatch in {}: expected 1 found {}",
            config_path.display(),
            config.schema_version
        );
    }

    let catalog_json =
        serde_json::to_string_pretty(&manifests).expect("serialize app manifest catalog");
    let config_json = serde_json::to_string_pretty(&config).expect("serialize shell config");
    let generated = format!(
        "/// Build-time generated app manifest catalog JSON.\n\
pub const APP_MANIFEST_CATALOG_JSON: &str = r##\"{}\"##;\n\
/// Build-time generated shell layout configuration JSON.\n\
pub const SHELL_CONFIG_JSON: &str = r##\"{}\"##;\n",
        catalog_json, config_json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_catalog_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
