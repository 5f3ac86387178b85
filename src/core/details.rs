//! Multi-line detail summaries used as indicator tooltips.
//!
//! A field key may carry a unit suffix after a colon: `"frequency:Hz"` renders
//! as `frequency: 3400Hz`.

use super::format::format_rounded;
use super::providers::{BatteryOutput, CpuOutput};

#[derive(Debug, Clone, PartialEq)]
pub enum DetailValue {
    Number(f64),
    Text(String),
}

impl DetailValue {
    /// Zero, NaN, infinities and empty text are treated as "no value".
    fn is_renderable(&self) -> bool {
        match self {
            DetailValue::Number(n) => n.is_finite() && *n != 0.0,
            DetailValue::Text(s) => !s.is_empty(),
        }
    }

    fn render(&self) -> String {
        match self {
            DetailValue::Number(n) => format_rounded(*n),
            DetailValue::Text(s) => s.clone(),
        }
    }
}

impl From<f64> for DetailValue {
    fn from(value: f64) -> Self {
        DetailValue::Number(value)
    }
}

impl From<u32> for DetailValue {
    fn from(value: u32) -> Self {
        DetailValue::Number(value as f64)
    }
}

impl From<String> for DetailValue {
    fn from(value: String) -> Self {
        DetailValue::Text(value)
    }
}

impl From<&str> for DetailValue {
    fn from(value: &str) -> Self {
        DetailValue::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailField {
    pub key: String,
    pub value: Option<DetailValue>,
}

impl DetailField {
    pub fn new<K, V>(key: K, value: Option<V>) -> Self
    where
        K: Into<String>,
        V: Into<DetailValue>,
    {
        Self {
            key: key.into(),
            value: value.map(Into::into),
        }
    }

    /// Label and optional unit suffix.
    pub fn split_key(&self) -> (&str, Option<&str>) {
        let mut parts = self.key.split(':');
        let label = parts.next().unwrap_or_default();
        let suffix = parts.next().filter(|s| !s.is_empty());
        (label, suffix)
    }

    fn render(&self) -> Option<String> {
        let value = self.value.as_ref().filter(|v| v.is_renderable())?;
        let (label, suffix) = self.split_key();
        if label.is_empty() {
            return None;
        }
        Some(format!(
            "{}: {}{}",
            label,
            value.render(),
            suffix.unwrap_or_default()
        ))
    }
}

/// Render fields in order, one line each, skipping empty ones.
pub fn format_details(fields: &[DetailField]) -> String {
    fields
        .iter()
        .filter_map(DetailField::render)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn cpu_details(cpu: &CpuOutput) -> Vec<DetailField> {
    vec![
        DetailField::new("frequency:Hz", cpu.frequency),
        DetailField::new("Logical Cores", cpu.logical_core_count),
        DetailField::new("Physical Cores", cpu.physical_core_count),
        DetailField::new("Vendor", cpu.vendor.clone()),
    ]
}

/// Battery fields; the time estimate depends on the charging state.
pub fn battery_details(battery: &BatteryOutput) -> Vec<DetailField> {
    let mut fields = vec![
        DetailField::new("Health:%", battery.health_percent),
        DetailField::new("Power Use", battery.power_consumption),
        DetailField::new("Voltage", battery.voltage),
    ];
    if battery.is_charging {
        fields.push(DetailField::new("Time til Full", battery.time_till_full));
    } else {
        fields.push(DetailField::new("Time til Empty", battery.time_till_empty));
    }
    fields
}
