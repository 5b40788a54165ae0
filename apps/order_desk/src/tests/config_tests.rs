use super::*;

use std::{
    env, fs,
    time::{SystemTime, UNIX_EPOCH},
};

fn temp_config(contents: &str) -> std::path::PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock")
        .as_nanos();
    let path = env::temp_dir().join(format!("order_desk_test_{suffix}.toml"));
    fs::write(&path, contents).expect("write config");
    path
}

#[test]
fn defaults_point_at_local_services_and_env_overrides_them() {
    let settings = load_settings(None).expect("defaults");
    assert_eq!(settings, Settings::default());
    let endpoints = settings.endpoints().expect("endpoints");
    assert_eq!(endpoints.timeout, Duration::from_secs(10));
    assert_eq!(settings.banner_dismiss(), Duration::from_secs(3));

    env::set_var("APP__REQUEST_TIMEOUT_SECS", "25");
    env::set_var("APP__BANNER_DISMISS_MS", "750");
    let settings = load_settings(None);
    env::remove_var("APP__REQUEST_TIMEOUT_SECS");
    env::remove_var("APP__BANNER_DISMISS_MS");

    let settings = settings.expect("env settings");
    assert_eq!(settings.request_timeout_secs, 25);
    assert_eq!(settings.banner_dismiss(), Duration::from_millis(750));
    assert_eq!(settings.order_status_url, DEFAULT_ORDER_STATUS_URL);
}

#[test]
fn file_values_override_defaults() {
    let path = temp_config(
        r#"
order_status_url = "http://status.internal:8091/api/order-status/all"
progress_stage_ms = 500
poll_secs = 15
"#,
    );

    let settings = load_settings(Some(path.as_path())).expect("file settings");
    fs::remove_file(&path).expect("cleanup");

    assert_eq!(
        settings.order_status_url,
        "http://status.internal:8091/api/order-status/all"
    );
    assert_eq!(settings.progress_stage(), Duration::from_millis(500));
    assert_eq!(settings.poll_secs, Some(15));
    assert_eq!(settings.orders_url, DEFAULT_ORDERS_URL);
}

#[test]
fn explicit_missing_file_is_an_error() {
    let missing = env::temp_dir().join("order_desk_missing_config.toml");
    assert!(load_settings(Some(missing.as_path())).is_err());
}

#[test]
fn malformed_endpoint_is_reported() {
    let settings = Settings {
        orders_url: "::not-a-url::".to_string(),
        ..Settings::default()
    };
    let err = settings.endpoints().expect_err("must fail");
    assert!(format!("{err:#}").contains("not-a-url"));
}
