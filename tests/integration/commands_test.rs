use taskbar::commands::exec::{parse_action, ExecAction};
use taskbar::commands::render::load_snapshot;
use taskbar::core::view::compose;
use taskbar::core::{Config, JsonLineSink, CommandSink, WmCommand};
use taskbar::ui::{render_bar, RenderStyle};

#[test]
fn test_workspace_buttons_map_to_exec_actions() {
    let snapshot = load_snapshot(
        r#"{"glazewm": {"currentWorkspaces": [{"name": "dev", "hasFocus": true}, {"name": "chat"}]}}"#,
    )
    .unwrap();
    let view = compose(&snapshot, &Config::default());

    for button in &view.workspaces {
        let action = parse_action("focus", Some(&button.label)).unwrap();
        assert_eq!(action, ExecAction::Wm(button.command.clone()));
    }
}

#[test]
fn test_view_commands_through_json_sink() {
    let snapshot = load_snapshot(
        r#"{"glazewm": {"tilingDirection": "horizontal", "bindingModes": [{"name": "resize", "displayName": "Resize"}]}}"#,
    )
    .unwrap();
    let view = compose(&snapshot, &Config::default());

    let mut sink = JsonLineSink::new(Vec::new());
    for command in view.commands() {
        sink.run_command(command).unwrap();
    }
    let output = String::from_utf8(sink.into_inner()).unwrap();

    assert_eq!(
        output,
        "{\"type\":\"runCommand\",\"command\":\"toggle-tiling-direction\"}\n\
         {\"type\":\"runCommand\",\"command\":\"wm-disable-binding-mode --name resize\"}\n"
    );
    assert_eq!(view.binding_modes[0].label, "Resize");
    assert_eq!(
        view.binding_modes[0].command,
        WmCommand::DisableBindingMode("resize".to_string())
    );
}

#[test]
fn test_render_plain_line() {
    let snapshot = load_snapshot(
        r#"{"date": {"formatted": "Wed 5 Mar 18:02"}, "cpu": {"usage": 12.4}, "weather": {"celsiusTemp": -3.5}}"#,
    )
    .unwrap();
    let line = render_bar(&compose(&snapshot, &Config::default()), RenderStyle::Plain);

    assert_eq!(
        line,
        "Wed 5 Mar 18:02 | wifi✗ - mem - cpu 12% bat! - ☁ -3°C"
    );
}
