use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct Extent {
    width: i32,
    height: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct Placement {
    origin: Point,
    stagger_step: i32,
    stagger_wrap: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct WindowManagerConfigFile {
    schema_version: u32,
    z_index_base: u32,
    title_bar_height: i32,
    taskbar_height: i32,
    min_visible: i32,
    icon_stagger_ms: u32,
    placement: Placement,
    default_size: Extent,
    min_size: Extent,
}

fn validate(config: &WindowManagerConfigFile) -> Result<(), String> {
    if config.schema_version != 1 {
        return Err(format!(
            "schema mismatch: expected 1 found {}",
            config.schema_version
        ));
    }
    if config.min_size.width <= 0 || config.min_size.height <= 0 {
        return Err("min_size must be positive".to_string());
    }
    if config.min_size.height <= config.title_bar_height {
        return Err("min_size.height must leave room below the title bar".to_string());
    }
    if config.default_size.width < config.min_size.width
        || config.default_size.height < config.min_size.height
    {
        return Err("default_size must not be below min_size".to_string());
    }
    if config.placement.stagger_wrap == 0 {
        return Err("placement.stagger_wrap must be at least 1".to_string());
    }
    Ok(())
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("config").join("window_manager.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: WindowManagerConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if let Err(reason) = validate(&config) {
        panic!("invalid window manager config in {}: {reason}", path.display());
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize window manager config");
    let generated = format!(
        "/// Build-time embedded window manager configuration JSON.\n\
pub const WINDOW_MANAGER_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("window_manager_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
