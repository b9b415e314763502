use super::*;

use std::collections::HashMap;

fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn missing_file_yields_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.toml");

    let settings = load_settings(&path).expect("missing file is not an error");
    assert_eq!(settings.window_width, Settings::default().window_width);
    assert_eq!(settings.window_height, Settings::default().window_height);

    let mut untouched = Settings::default();
    apply_env_overrides(&mut untouched, env_from(&[]));
    assert_eq!(untouched, Settings::default());
}

#[test]
fn file_values_override_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rebuild.toml");
    fs::write(
        &path,
        "window_title = \"Kiosk\"\nwindow_width = 1024.0\nshow_hint = false\n",
    )
    .expect("write config");

    let raw = fs::read_to_string(&path).expect("read config");
    let file_cfg: FileSettings = toml::from_str(&raw).expect("parse config");
    let mut settings = Settings::default();
    apply_file_settings(&mut settings, file_cfg);

    assert_eq!(settings.window_title, "Kiosk");
    assert_eq!(settings.window_width, 1024.0);
    assert_eq!(settings.window_height, 800.0);
    assert!(!settings.show_hint);
    assert_eq!(settings.log_filter, "info");
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rebuild.toml");
    fs::write(&path, "window_width = \"wide\"\n").expect("write config");

    let err = load_settings(&path).expect_err("should fail");
    assert!(err.to_string().contains("failed to parse config file"));
}

#[test]
fn unknown_keys_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rebuild.toml");
    fs::write(&path, "initial_mode = \"target\"\n").expect("write config");

    assert!(load_settings(&path).is_err());
}

#[test]
fn env_overrides_win_over_file_values() {
    let mut settings = Settings::default();
    apply_file_settings(
        &mut settings,
        FileSettings {
            window_title: Some("From file".into()),
            log_filter: Some("debug".into()),
            ..FileSettings::default()
        },
    );

    apply_env_overrides(
        &mut settings,
        env_from(&[
            ("APP__WINDOW_TITLE", "From env"),
            ("APP__WINDOW_HEIGHT", "640"),
            ("APP__SHOW_HINT", "off"),
        ]),
    );

    assert_eq!(settings.window_title, "From env");
    assert_eq!(settings.window_height, 640.0);
    assert_eq!(settings.log_filter, "debug");
    assert!(!settings.show_hint);
}

#[test]
fn invalid_env_values_are_ignored() {
    let mut settings = Settings::default();
    apply_env_overrides(
        &mut settings,
        env_from(&[
            ("APP__WINDOW_WIDTH", "huge"),
            ("APP__SHOW_HINT", "maybe"),
        ]),
    );
    assert_eq!(settings, Settings::default());
}

#[test]
fn log_filter_precedence() {
    let settings = Settings {
        log_filter: "warn".into(),
        ..Settings::default()
    };

    assert_eq!(
        resolve_log_filter(Some("trace"), Some("debug"), &settings),
        "trace"
    );
    assert_eq!(resolve_log_filter(None, Some("debug"), &settings), "debug");
    assert_eq!(resolve_log_filter(None, None, &settings), "warn");
    assert_eq!(resolve_log_filter(Some("  "), None, &settings), "warn");
    assert_eq!(
        resolve_log_filter(Some("  "), Some("debug"), &settings),
        "debug"
    );
    assert_eq!(resolve_log_filter(None, Some(" "), &settings), "warn");
}

#[test]
fn non_positive_or_nan_env_window_sizes_are_ignored() {
    for (width, height) in [("NaN", "-5"), ("0", "0.0"), ("-1280", "inf")] {
        let mut settings = Settings::default();
        apply_env_overrides(
            &mut settings,
            env_from(&[("APP__WINDOW_WIDTH", width), ("APP__WINDOW_HEIGHT", height)]),
        );
        assert_eq!(settings.window_width, 1280.0, "width {width}");
        assert_eq!(settings.window_height, 800.0, "height {height}");
    }
}

#[test]
fn non_positive_file_window_sizes_are_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("rebuild.toml");
    fs::write(&path, "window_width = 0.0\nwindow_height = -100.0\n").expect("write config");

    let raw = fs::read_to_string(&path).expect("read config");
    let file_cfg: FileSettings = toml::from_str(&raw).expect("parse config");
    let mut settings = Settings::default();
    apply_file_settings(&mut settings, file_cfg);

    assert_eq!(settings.window_width, 1280.0);
    assert_eq!(settings.window_height, 800.0);

    let mut nan = Settings::default();
    apply_file_settings(
        &mut nan,
        FileSettings {
            window_width: Some(f32::NAN),
            window_height: Some(900.0),
            ..FileSettings::default()
        },
    );
    assert_eq!(nan.window_width, 1280.0);
    assert_eq!(nan.window_height, 900.0);
}
