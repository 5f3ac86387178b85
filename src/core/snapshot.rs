//! Latest known provider values and the update merge.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use super::providers::*;
use crate::error::{Result, TaskbarError};

/// The fixed set of monitored subsystems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    GlazeWm,
    Date,
    Audio,
    Cpu,
    Battery,
    Memory,
    Weather,
    Media,
    Systray,
    Network,
}

impl Subsystem {
    pub const ALL: [Subsystem; 10] = [
        Subsystem::GlazeWm,
        Subsystem::Date,
        Subsystem::Audio,
        Subsystem::Cpu,
        Subsystem::Battery,
        Subsystem::Memory,
        Subsystem::Weather,
        Subsystem::Media,
        Subsystem::Systray,
        Subsystem::Network,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Subsystem::GlazeWm => "glazewm",
            Subsystem::Date => "date",
            Subsystem::Audio => "audio",
            Subsystem::Cpu => "cpu",
            Subsystem::Battery => "battery",
            Subsystem::Memory => "memory",
            Subsystem::Weather => "weather",
            Subsystem::Media => "media",
            Subsystem::Systray => "systray",
            Subsystem::Network => "network",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Subsystem {
    type Err = TaskbarError;

    fn from_str(s: &str) -> Result<Self> {
        Subsystem::ALL
            .iter()
            .copied()
            .find(|subsystem| subsystem.key() == s)
            .ok_or_else(|| TaskbarError::unknown_key(format!("subsystem '{}'", s)))
    }
}

/// Latest value per subsystem; `None` until the provider first reports.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub glazewm: Option<GlazeWmOutput>,
    pub date: Option<DateOutput>,
    pub audio: Option<AudioOutput>,
    pub cpu: Option<CpuOutput>,
    pub battery: Option<BatteryOutput>,
    pub memory: Option<MemoryOutput>,
    pub weather: Option<WeatherOutput>,
    pub media: Option<MediaOutput>,
    pub systray: Option<SystrayOutput>,
    pub network: Option<NetworkOutput>,
}

impl Snapshot {
    pub fn has(&self, subsystem: Subsystem) -> bool {
        match subsystem {
            Subsystem::GlazeWm => self.glazewm.is_some(),
            Subsystem::Date => self.date.is_some(),
            Subsystem::Audio => self.audio.is_some(),
            Subsystem::Cpu => self.cpu.is_some(),
            Subsystem::Battery => self.battery.is_some(),
            Subsystem::Memory => self.memory.is_some(),
            Subsystem::Weather => self.weather.is_some(),
            Subsystem::Media => self.media.is_some(),
            Subsystem::Systray => self.systray.is_some(),
            Subsystem::Network => self.network.is_some(),
        }
    }

    /// Subsystems that have reported at least once.
    pub fn present(&self) -> Vec<Subsystem> {
        Subsystem::ALL
            .iter()
            .copied()
            .filter(|s| self.has(*s))
            .collect()
    }

    /// Merge an update into this snapshot in place.
    pub fn apply(&mut self, update: &SnapshotUpdate) {
        // Each provider value is replaced wholesale, never merged field by field.
        fn replace<T: Clone>(slot: &mut Option<T>, incoming: &Option<T>) {
            if let Some(value) = incoming {
                *slot = Some(value.clone());
            }
        }

        replace(&mut self.glazewm, &update.glazewm);
        replace(&mut self.date, &update.date);
        replace(&mut self.audio, &update.audio);
        replace(&mut self.cpu, &update.cpu);
        replace(&mut self.battery, &update.battery);
        replace(&mut self.memory, &update.memory);
        replace(&mut self.weather, &update.weather);
        replace(&mut self.media, &update.media);
        replace(&mut self.systray, &update.systray);
        replace(&mut self.network, &update.network);
    }
}

/// A partial snapshot as delivered by the provider channel.
///
/// Same shape as [`Snapshot`], but `None` means "not part of this update".
pub type SnapshotUpdate = Snapshot;

/// Pure merge: values present in `update` win, everything else is retained.
pub fn apply_update(current: &Snapshot, update: &SnapshotUpdate) -> Snapshot {
    let mut next = current.clone();
    next.apply(update);
    next
}

/// Decode an update object leniently.
///
/// Unknown keys are ignored, and a subsystem whose payload is `null` or fails
/// to decode is left out of the update. Inside a payload, `null` fields read
/// as absent. Only a non-object root is an error.
pub fn parse_update(value: Value) -> Result<SnapshotUpdate> {
    let Value::Object(map) = value else {
        return Err(TaskbarError::invalid_update(format!(
            "expected a JSON object, got {}",
            json_kind(&value)
        )));
    };

    let mut update = SnapshotUpdate::default();
    for (key, payload) in map {
        let subsystem = match key.parse::<Subsystem>() {
            Ok(subsystem) => subsystem,
            Err(_) => {
                log::debug!("Ignoring unknown subsystem '{}'", key);
                continue;
            }
        };
        if payload.is_null() {
            continue;
        }

        match subsystem {
            Subsystem::GlazeWm => update.glazewm = decode(subsystem, payload),
            Subsystem::Date => update.date = decode(subsystem, payload),
            Subsystem::Audio => update.audio = decode(subsystem, payload),
            Subsystem::Cpu => update.cpu = decode(subsystem, payload),
            Subsystem::Battery => update.battery = decode(subsystem, payload),
            Subsystem::Memory => update.memory = decode(subsystem, payload),
            Subsystem::Weather => update.weather = decode(subsystem, payload),
            Subsystem::Media => update.media = decode(subsystem, payload),
            Subsystem::Systray => update.systray = decode(subsystem, payload),
            Subsystem::Network => update.network = decode(subsystem, payload),
        }
    }

    Ok(update)
}

/// Decode one line of the update stream.
pub fn parse_update_str(line: &str) -> Result<SnapshotUpdate> {
    let value: Value = serde_json::from_str(line)?;
    parse_update(value)
}

fn decode<T: DeserializeOwned>(subsystem: Subsystem, payload: Value) -> Option<T> {
    match serde_json::from_value(strip_nulls(payload)) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Skipping malformed {} payload: {}", subsystem, e);
            None
        }
    }
}

/// Drop `null` members and elements so serde defaults apply to them.
fn strip_nulls(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .filter(|(_, v)| !v.is_null())
                .map(|(k, v)| (k, strip_nulls(v)))
                .collect(),
        ),
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter(|v| !v.is_null())
                .map(strip_nulls)
                .collect(),
        ),
        other => other,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cpu(usage: f64) -> CpuOutput {
        CpuOutput {
            usage,
            ..Default::default()
        }
    }

    #[test]
    fn test_subsystem_keys_roundtrip() {
        for subsystem in Subsystem::ALL {
            assert_eq!(subsystem.key().parse::<Subsystem>().unwrap(), subsystem);
        }
        assert!("gpu".parse::<Subsystem>().is_err());
    }

    #[test]
    fn test_apply_update_retains_absent_keys() {
        let current = Snapshot {
            cpu: Some(cpu(10.0)),
            memory: Some(MemoryOutput {
                usage: 40.0,
                ..Default::default()
            }),
            ..Default::default()
        };
        let update = SnapshotUpdate {
            cpu: Some(cpu(55.0)),
            ..Default::default()
        };

        let next = apply_update(&current, &update);
        assert_eq!(next.cpu, Some(cpu(55.0)));
        assert_eq!(next.memory, current.memory);
        // input untouched
        assert_eq!(current.cpu, Some(cpu(10.0)));
    }

    #[test]
    fn test_apply_update_replaces_wholesale() {
        let current = Snapshot {
            cpu: Some(CpuOutput {
                usage: 10.0,
                vendor: Some("AMD".to_string()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let update = SnapshotUpdate {
            cpu: Some(cpu(20.0)),
            ..Default::default()
        };

        let next = apply_update(&current, &update);
        assert_eq!(next.cpu.unwrap().vendor, None);
    }

    #[test]
    fn test_apply_empty_update_is_noop() {
        let current = Snapshot {
            cpu: Some(cpu(10.0)),
            ..Default::default()
        };
        assert_eq!(apply_update(&current, &SnapshotUpdate::default()), current);
    }

    #[test]
    fn test_apply_update_idempotent() {
        let current = Snapshot {
            cpu: Some(cpu(10.0)),
            ..Default::default()
        };
        let update = SnapshotUpdate {
            cpu: Some(cpu(80.0)),
            weather: Some(WeatherOutput {
                celsius_temp: 12.0,
                ..Default::default()
            }),
            ..Default::default()
        };

        let once = apply_update(&current, &update);
        let twice = apply_update(&once, &update);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_update_ignores_unknown_and_null() {
        let update = parse_update(json!({
            "cpu": {"usage": 12.5},
            "gpu": {"usage": 99},
            "memory": null
        }))
        .unwrap();

        assert_eq!(update.cpu.as_ref().unwrap().usage, 12.5);
        assert!(update.memory.is_none());
        assert_eq!(update.present(), vec![Subsystem::Cpu]);
    }

    #[test]
    fn test_parse_update_skips_malformed_subsystem() {
        let update = parse_update(json!({
            "cpu": {"usage": "very busy"},
            "battery": {"chargePercent": 80}
        }))
        .unwrap();

        assert!(update.cpu.is_none());
        assert_eq!(update.battery.unwrap().charge_percent, Some(80.0));
    }

    #[test]
    fn test_parse_update_keeps_payload_with_null_fields() {
        let update = parse_update(json!({
            "cpu": {"usage": null, "vendor": "AMD"},
            "battery": {"chargePercent": 80, "healthPercent": null, "isCharging": null},
            "systray": {"icons": [null, {"id": "zebar", "tooltip": null}]}
        }))
        .unwrap();

        let cpu = update.cpu.unwrap();
        assert_eq!(cpu.usage, 0.0);
        assert_eq!(cpu.vendor.as_deref(), Some("AMD"));

        let battery = update.battery.unwrap();
        assert_eq!(battery.charge_percent, Some(80.0));
        assert_eq!(battery.health_percent, None);
        assert!(!battery.is_charging);

        let icons = update.systray.unwrap().icons;
        assert_eq!(icons.len(), 1);
        assert_eq!(icons[0].tooltip, "");
    }

    #[test]
    fn test_parse_update_rejects_non_object() {
        let err = parse_update(json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, TaskbarError::InvalidUpdate(_)));
    }

    #[test]
    fn test_null_never_clears_a_subsystem() {
        let current = Snapshot {
            cpu: Some(cpu(10.0)),
            ..Default::default()
        };
        let update = parse_update_str(r#"{"cpu": null}"#).unwrap();
        assert_eq!(apply_update(&current, &update).cpu, Some(cpu(10.0)));
    }
}
