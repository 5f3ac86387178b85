use taskbar::core::view::{compose, Icon, IndicatorKind};
use taskbar::core::{apply_update, parse_update_str, Config, Severity, Snapshot};

fn snapshot_from(json: &str) -> Snapshot {
    apply_update(&Snapshot::default(), &parse_update_str(json).unwrap())
}

#[test]
fn test_high_cpu_is_error() {
    let snapshot = snapshot_from(r#"{"cpu": {"usage": 95}}"#);
    let view = compose(&snapshot, &Config::default());

    let cpu = view.indicator(IndicatorKind::Cpu).unwrap();
    assert_eq!(cpu.severity, Severity::Error);
    assert_eq!(cpu.label.as_deref(), Some("95%"));
    assert!(!cpu.disabled);
}

#[test]
fn test_low_battery_discharging() {
    let snapshot = snapshot_from(
        r#"{"battery": {"chargePercent": 5, "healthPercent": 100, "isCharging": false, "timeTillEmpty": 900}}"#,
    );
    let view = compose(&snapshot, &Config::default());

    let battery = view.indicator(IndicatorKind::Battery).unwrap();
    assert_eq!(battery.severity, Severity::Error);
    let title = battery.title.as_deref().unwrap();
    assert!(title.contains("Time til Empty"));
    assert!(!title.contains("Time til Full"));
    assert!(title.starts_with("Health: 100%"));
}

#[test]
fn test_low_health_raises_battery_severity() {
    let snapshot = snapshot_from(
        r#"{"battery": {"chargePercent": 100, "healthPercent": 20, "isCharging": true}}"#,
    );
    let view = compose(&snapshot, &Config::default());
    assert_eq!(
        view.indicator(IndicatorKind::Battery).unwrap().severity,
        Severity::Warning
    );
}

#[test]
fn test_missing_health_is_not_an_alarm() {
    let snapshot = snapshot_from(r#"{"battery": {"chargePercent": 80, "isCharging": false}}"#);
    let view = compose(&snapshot, &Config::default());

    let battery = view.indicator(IndicatorKind::Battery).unwrap();
    assert_eq!(battery.severity, Severity::Normal);
    assert_eq!(battery.icon, Some(Icon::BatteryMedium));
    assert_eq!(battery.label.as_deref(), Some("80%"));
    assert!(!battery.disabled);
    assert!(battery.title.is_none());
}

#[test]
fn test_null_fields_keep_the_rest_of_the_payload() {
    let snapshot = snapshot_from(
        r#"{"battery": {"chargePercent": 80, "healthPercent": null}, "cpu": {"usage": null, "vendor": "AMD"}}"#,
    );
    let view = compose(&snapshot, &Config::default());

    let battery = view.indicator(IndicatorKind::Battery).unwrap();
    assert!(!battery.disabled);
    assert_eq!(battery.severity, Severity::Normal);
    assert_eq!(battery.icon, Some(Icon::BatteryMedium));

    let cpu = view.indicator(IndicatorKind::Cpu).unwrap();
    assert!(!cpu.disabled);
    assert_eq!(cpu.title.as_deref(), Some("Vendor: AMD"));
}

#[test]
fn test_memory_title_uses_decimal_gigabytes() {
    let snapshot = snapshot_from(
        r#"{"memory": {"usage": 71, "freeMemory": 5000000000, "totalMemory": 17179869184}}"#,
    );
    let view = compose(&snapshot, &Config::default());

    let memory = view.indicator(IndicatorKind::Memory).unwrap();
    assert_eq!(memory.title.as_deref(), Some("5 / 17GB"));
    assert_eq!(memory.severity, Severity::Warning);
}

#[test]
fn test_tray_selection_end_to_end() {
    let snapshot = snapshot_from(
        r#"{"systray": {"icons": [
            {"id": "1", "tooltip": "GlazeWM status"},
            {"id": "2", "tooltip": "Unrelated App"},
            {"id": "3", "tooltip": "GlobalProtect: disconnected"}
        ]}}"#,
    );
    let view = compose(&snapshot, &Config::default());

    let tray = view.tray.unwrap();
    let ids: Vec<&str> = tray.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert!(!tray[0].error);
    assert!(tray[1].error);
}

#[test]
fn test_custom_thresholds_from_config() {
    let snapshot = snapshot_from(r#"{"cpu": {"usage": 65}}"#);
    let mut config = Config::default();
    config.set_value("warning_limit", "60").unwrap();

    let view = compose(&snapshot, &config);
    assert_eq!(
        view.indicator(IndicatorKind::Cpu).unwrap().severity,
        Severity::Warning
    );
}

#[test]
fn test_partial_updates_accumulate() {
    let first = snapshot_from(r#"{"cpu": {"usage": 10}, "weather": {"celsiusTemp": 21.4}}"#);
    let second = apply_update(
        &first,
        &parse_update_str(r#"{"cpu": {"usage": 92}, "unknown": 1}"#).unwrap(),
    );
    let view = compose(&second, &Config::default());

    assert_eq!(
        view.indicator(IndicatorKind::Cpu).unwrap().severity,
        Severity::Error
    );
    assert_eq!(
        view.indicator(IndicatorKind::Weather)
            .unwrap()
            .label
            .as_deref(),
        Some("21°C")
    );
    assert!(view.indicator(IndicatorKind::Memory).unwrap().disabled);
}
