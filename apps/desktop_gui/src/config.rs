use std::{fs, io, path::Path};

use anyhow::Context;
use serde::Deserialize;

pub const DEFAULT_CONFIG_PATH: &str = "rebuild.toml";

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub window_title: String,
    pub window_width: f32,
    pub window_height: f32,
    pub log_filter: String,
    pub show_hint: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_title: "Re:Build | The State of Software".into(),
            window_width: 1280.0,
            window_height: 800.0,
            log_filter: "info".into(),
            show_hint: true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    window_title: Option<String>,
    window_width: Option<f32>,
    window_height: Option<f32>,
    log_filter: Option<String>,
    show_hint: Option<bool>,
}

/// Defaults, then `path` if it exists, then `APP__*` environment overrides.
pub fn load_settings(path: &Path) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    match fs::read_to_string(path) {
        Ok(raw) => {
            let file_cfg: FileSettings = toml::from_str(&raw)
                .with_context(|| format!("failed to parse config file '{}'", path.display()))?;
            apply_file_settings(&mut settings, file_cfg);
        }
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => {
            return Err(err)
                .with_context(|| format!("failed to read config file '{}'", path.display()));
        }
    }

    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    Ok(settings)
}

fn apply_file_settings(settings: &mut Settings, file_cfg: FileSettings) {
    if let Some(v) = file_cfg.window_title {
        settings.window_title = v;
    }
    if let Some(v) = file_cfg.window_width {
        match window_extent(v) {
            Some(width) => settings.window_width = width,
            None => tracing::warn!(value = v, "ignoring invalid window_width in config file"),
        }
    }
    if let Some(v) = file_cfg.window_height {
        match window_extent(v) {
            Some(height) => settings.window_height = height,
            None => tracing::warn!(value = v, "ignoring invalid window_height in config file"),
        }
    }
    if let Some(v) = file_cfg.log_filter {
        settings.log_filter = v;
    }
    if let Some(v) = file_cfg.show_hint {
        settings.show_hint = v;
    }
}

fn apply_env_overrides(settings: &mut Settings, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(v) = lookup("APP__WINDOW_TITLE") {
        settings.window_title = v;
    }
    if let Some(v) = lookup("APP__WINDOW_WIDTH") {
        match v.trim().parse::<f32>().ok().and_then(window_extent) {
            Some(width) => settings.window_width = width,
            None => tracing::warn!(value = %v, "ignoring invalid APP__WINDOW_WIDTH"),
        }
    }
    if let Some(v) = lookup("APP__WINDOW_HEIGHT") {
        match v.trim().parse::<f32>().ok().and_then(window_extent) {
            Some(height) => settings.window_height = height,
            None => tracing::warn!(value = %v, "ignoring invalid APP__WINDOW_HEIGHT"),
        }
    }
    if let Some(v) = lookup("APP__LOG_FILTER") {
        settings.log_filter = v;
    }
    if let Some(v) = lookup("APP__SHOW_HINT") {
        match parse_flag(&v) {
            Some(flag) => settings.show_hint = flag,
            None => tracing::warn!(value = %v, "ignoring invalid APP__SHOW_HINT"),
        }
    }
}

/// Window sizes must be finite and positive.
fn window_extent(v: f32) -> Option<f32> {
    (v.is_finite() && v > 0.0).then_some(v)
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// `--log-filter`, then `RUST_LOG`, then the settings value.
pub fn resolve_log_filter(
    cli: Option<&str>,
    rust_log: Option<&str>,
    settings: &Settings,
) -> String {
    fn non_blank(filter: &str) -> Option<&str> {
        let filter = filter.trim();
        (!filter.is_empty()).then_some(filter)
    }

    cli.and_then(non_blank)
        .or_else(|| rust_log.and_then(non_blank))
        .unwrap_or(settings.log_filter.as_str())
        .to_string()
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
