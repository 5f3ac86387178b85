//! System tray allow-list filtering.
//!
//! Tooltip text is owned by third-party applications, so matching stays a
//! case-insensitive substring test and the first matching allow-list entry
//! decides the rank.

use super::providers::TrayIcon;

pub const DEFAULT_ALLOW_LIST: [&str; 3] = ["zebar", "glaze", "globalprotect"];

pub fn default_allow_list() -> Vec<String> {
    DEFAULT_ALLOW_LIST.iter().map(|s| s.to_string()).collect()
}

/// Index of the first allow-list entry contained in the tooltip.
pub fn match_rank<S: AsRef<str>>(tooltip: &str, allow_list: &[S]) -> Option<usize> {
    let tooltip = tooltip.to_lowercase();
    allow_list
        .iter()
        .position(|entry| tooltip.contains(&entry.as_ref().to_lowercase()))
}

/// Keep allow-listed icons, ordered by rank. Equal ranks keep input order.
pub fn select_tray_icons<S: AsRef<str>>(icons: &[TrayIcon], allow_list: &[S]) -> Vec<TrayIcon> {
    let mut ranked: Vec<(usize, &TrayIcon)> = icons
        .iter()
        .filter_map(|icon| match_rank(&icon.tooltip, allow_list).map(|rank| (rank, icon)))
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|(rank, _)| *rank);
    ranked.into_iter().map(|(_, icon)| icon.clone()).collect()
}

/// A VPN client reporting a dropped connection.
pub fn has_connection_error(tooltip: &str) -> bool {
    let tooltip = tooltip.to_lowercase();
    tooltip.contains("globalprotect") && tooltip.contains("disconnected")
}
