// Core business logic module

pub mod config;
pub mod details;
pub mod format;
pub mod providers;
pub mod runtime;
pub mod severity;
pub mod snapshot;
pub mod tray;
pub mod view;
pub mod wm_command;

// Re-export commonly used items
pub use config::Config;
pub use details::{battery_details, cpu_details, format_details, DetailField, DetailValue};
pub use severity::{classify, classify_inverted, Severity, Thresholds, ERROR_LIMIT, WARNING_LIMIT};
pub use snapshot::{apply_update, parse_update, parse_update_str, Snapshot, SnapshotUpdate, Subsystem};
pub use tray::{has_connection_error, select_tray_icons, DEFAULT_ALLOW_LIST};
pub use view::{compose, BarView, Icon, Indicator, IndicatorKind};
pub use wm_command::{CommandSink, JsonLineSink, OutboundMessage, ProcessSink, TrayAction, WmCommand};
