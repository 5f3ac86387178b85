//! Severity tiers for percentage metrics.
//!
//! Usage-style metrics (CPU, memory) are compared directly against the limits.
//! Capacity-style metrics (battery charge and health, network signal) are
//! inverted first, so a low value is what gets flagged.

use serde::{Deserialize, Serialize};

pub const WARNING_LIMIT: f64 = 70.0;
pub const ERROR_LIMIT: f64 = 90.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Normal,
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Normal => "normal",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Warning/error cutoffs, both exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub warning: f64,
    pub error: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            warning: WARNING_LIMIT,
            error: ERROR_LIMIT,
        }
    }
}

impl Thresholds {
    pub fn new(warning: f64, error: f64) -> Self {
        Self { warning, error }
    }

    /// Classify a usage percentage. NaN never crosses a limit.
    pub fn classify(&self, value: f64) -> Severity {
        if value > self.error {
            Severity::Error
        } else if value > self.warning {
            Severity::Warning
        } else {
            Severity::Normal
        }
    }

    /// Classify a capacity percentage, where low values are degraded.
    pub fn classify_inverted(&self, value: f64) -> Severity {
        self.classify(100.0 - value)
    }
}

/// Classify against the default 70/90 limits.
pub fn classify(value: f64) -> Severity {
    Thresholds::default().classify(value)
}

/// Inverted classification against the default limits.
pub fn classify_inverted(value: f64) -> Severity {
    Thresholds::default().classify_inverted(value)
}
