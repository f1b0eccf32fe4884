use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ApiSection {
    base_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct FramesSection {
    login_src: String,
    register_src: String,
    game_src: String,
    #[serde(default)]
    allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TimingSection {
    transition_delay_ms: u32,
    post_message_delay_ms: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct SessionSection {
    cookie_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct OAuthSection {
    authorize_url: String,
    client_id: String,
    redirect_uri: String,
    access_type: String,
    response_type: String,
    prompt: String,
    scopes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ShellConfigFile {
    schema_version: u32,
    api: ApiSection,
    frames: FramesSection,
    timing: TimingSection,
    session: SessionSection,
    oauth: OAuthSection,
}

fn main() {
    let crate_root = PathBuf::from(std::env::var("CARGO_MANIFEST_DIR").expect("manifest dir"));
    let path = crate_root.join("shell.config.toml");
    println!("cargo:rerun-if-changed={}", path.display());

    let raw = fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("failed to read {}: {err}", path.display()));
    let config: ShellConfigFile = toml::from_str(&raw)
        .unwrap_or_else(|err| panic!("failed to parse {}: {err}", path.display()));

    if config.schema_version != 1 {
        panic!(
            "shell config schema mismatch in {}: expected 1 found {}",
            path.display(),
            config.schema_version
        );
    }
    let base_url = config.api.base_url.trim();
    if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
        panic!(
            "shell config api.base_url in {} must be an absolute http(s) url, found `{base_url}`",
            path.display()
        );
    }
    if config.session.cookie_name.trim().is_empty() {
        panic!("shell config session.cookie_name in {} is empty", path.display());
    }

    let json = serde_json::to_string_pretty(&config).expect("serialize shell config");
    let generated = format!(
        "/// Build-time generated shell configuration JSON.\n\
pub const SHELL_CONFIG_JSON: &str = r##\"{}\"##;\n",
        json
    );

    let out_dir = PathBuf::from(std::env::var("OUT_DIR").expect("OUT_DIR"));
    let out_file = out_dir.join("shell_config_generated.rs");
    fs::write(&out_file, generated)
        .unwrap_or_else(|err| panic!("failed to write {}: {err}", out_file.display()));
}
