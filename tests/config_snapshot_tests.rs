mod common;

use std::time::Duration;

use dashboard_rs::core::Viewport;
use dashboard_rs::dashboard::{
    DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1, DashboardConfig, DashboardSnapshot, Lifecycle,
    REVENUE_MOUNT,
};
use dashboard_rs::DashboardError;

use common::null_dashboard;

#[test]
fn empty_json_yields_defaults() {
    let config = DashboardConfig::from_json_str("{}").expect("config");
    assert_eq!(config, DashboardConfig::default());
    assert_eq!(config.setup_delay(), Duration::from_millis(1_000));
    assert_eq!(config.chart_viewport, Viewport::new(480, 300));
    assert_eq!(config.initial_counters.total_users, 3_520_000);
    assert_eq!(config.user_name, "William Andre");
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let config = DashboardConfig::from_json_str(
        r#"{ "setup_delay_ms": 250, "user_name": "Dana", "chart_viewport": { "width": 640, "height": 360 } }"#,
    )
    .expect("config");
    assert_eq!(config.setup_delay_ms, 250);
    assert_eq!(config.user_name, "Dana");
    assert_eq!(config.chart_viewport, Viewport::new(640, 360));
    assert_eq!(config.title, "ULO REPORT");
}

#[test]
fn config_round_trips_through_pretty_json() {
    let config = DashboardConfig::default().with_setup_delay(Duration::from_millis(42));
    let json = config.to_json_pretty().expect("json");
    assert_eq!(DashboardConfig::from_json_str(&json).expect("parse"), config);
}

#[test]
fn invalid_configs_are_rejected() {
    let zero_viewport = r#"{ "chart_viewport": { "width": 0, "height": 300 } }"#;
    assert!(matches!(
        DashboardConfig::from_json_str(zero_viewport),
        Err(DashboardError::InvalidConfig(_))
    ));

    let reversed = r#"{ "date_range_start": "2025-12-31", "date_range_end": "2025-01-01" }"#;
    assert!(matches!(
        DashboardConfig::from_json_str(reversed),
        Err(DashboardError::InvalidConfig(_))
    ));

    let blank_title = r#"{ "title": "  " }"#;
    assert!(DashboardConfig::from_json_str(blank_title).is_err());

    assert!(DashboardConfig::from_json_str("not json").is_err());
}

#[test]
fn date_range_label_uses_indonesian_month_abbreviations() {
    let mut config = DashboardConfig::default();
    assert_eq!(config.date_range_label(), "02 OKT 2024 - 03 OKT 2024");

    config.date_range_start = chrono::NaiveDate::from_ymd_opt(2024, 3, 5).expect("date");
    assert_eq!(config.date_range_label(), "05 MAR 2024 - 03 OKT 2024");
    config.date_range_start = chrono::NaiveDate::from_ymd_opt(2024, 8, 17).expect("date");
    assert_eq!(config.date_range_label(), "17 AGU 2024 - 03 OKT 2024");
}

#[tokio::test(start_paused = true)]
async fn snapshot_contract_round_trips() {
    let dashboard = null_dashboard();
    dashboard.mount().expect("mount");
    dashboard.settled().await.expect("settled");

    let snapshot = dashboard.snapshot();
    assert_eq!(snapshot.lifecycle, Lifecycle::Mounted);
    assert_eq!(snapshot.generation, 1);
    assert!(!snapshot.loading);
    assert_eq!(snapshot.chart_stats.constructed, 4);
    assert_eq!(snapshot.mounts.len(), 4);
    let revenue = snapshot.mounts.get(REVENUE_MOUNT).expect("revenue mount");
    assert!(revenue.populated);
    assert!(revenue.attached);
    assert_eq!(revenue.populate_count, 1);

    let json = snapshot.to_json_contract_v1_pretty().expect("contract");
    assert!(json.contains("\"schema_version\": 1"));
    let restored = DashboardSnapshot::from_json_compat_str(&json).expect("restore");
    assert_eq!(restored, snapshot);

    let bare = serde_json::to_string(&snapshot).expect("bare");
    assert_eq!(
        DashboardSnapshot::from_json_compat_str(&bare).expect("bare restore"),
        snapshot
    );
}

#[test]
fn snapshot_with_unknown_schema_version_is_rejected() {
    let snapshot = null_dashboard().snapshot();
    let json = snapshot
        .to_json_contract_v1_pretty()
        .expect("contract")
        .replace(
            &format!("\"schema_version\": {DASHBOARD_SNAPSHOT_JSON_SCHEMA_V1}"),
            "\"schema_version\": 99",
        );
    assert!(matches!(
        DashboardSnapshot::from_json_compat_str(&json),
        Err(DashboardError::InvalidData(_))
    ));
}
