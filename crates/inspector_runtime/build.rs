use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct AutocompleteSection {
    min_chars: usize,
    debounce_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TableSection {
    sort_delay_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct BannerSection {
    dismiss_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct InspectorConfigFile {
    schema_version: u32,
    api_base: String,
    autocomplete: AutocompleteSection,
    table: TableSection,
    banner: BannerSection,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("inspector.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: InspectorConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));
    if config.schema_version != 1 {
        panic!(
            "config schema mismatch in {}: expected 1 found {}",
            path.display(),
            config.schema_version
        );
    }
    if config.autocomplete.min_chars == 0 {
        panic!("autocomplete.min_chars must be at least 1 in {}", path.display());
    }
    for (name, value) in [
        ("autocomplete.debounce_ms", config.autocomplete.debounce_ms),
        ("table.sort_delay_ms", config.table.sort_delay_ms),
        ("banner.dismiss_ms", config.banner.dismiss_ms),
    ] {
        if value == 0 {
            panic!("{name} must be positive in {}", path.display());
        }
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize inspector config");
    let generated = format!(
        "/// Build-time generated inspector configuration JSON.\n\
pub const INSPECTOR_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("inspector_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
