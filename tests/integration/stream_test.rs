use taskbar::core::runtime::drive;
use taskbar::core::view::{compose, IndicatorKind};
use taskbar::core::{Config, Severity};

const UPDATES: &[u8] = b"{\"cpu\": {\"usage\": 20}}
{\"network\": {\"defaultGateway\": {\"ssid\": \"home\", \"signalStrength\": 65}}}
this line is not json
{\"cpu\": {\"usage\": 93}, \"glazewm\": {\"currentWorkspaces\": [{\"name\": \"1\", \"hasFocus\": true}]}}
";

#[tokio::test]
async fn test_stream_drives_final_view() {
    let config = Config::default();
    let mut rendered = Vec::new();

    let snapshot = drive(UPDATES, |snapshot| {
        rendered.push(compose(snapshot, &config));
    })
    .await;

    assert!(!rendered.is_empty());
    let last = rendered.last().unwrap();
    assert_eq!(
        last.indicator(IndicatorKind::Cpu).unwrap().severity,
        Severity::Error
    );
    assert_eq!(
        last.indicator(IndicatorKind::Network)
            .unwrap()
            .label
            .as_deref(),
        Some("home")
    );
    assert_eq!(last.workspaces.len(), 1);
    assert_eq!(compose(&snapshot, &config), *last);
}

#[tokio::test]
async fn test_stream_never_clears_reported_subsystems() {
    let input: &'static [u8] = b"{\"memory\": {\"usage\": 30}}\n{\"memory\": null}\n";
    let snapshot = drive(input, |_| {}).await;
    assert_eq!(snapshot.memory.unwrap().usage, 30.0);
}
