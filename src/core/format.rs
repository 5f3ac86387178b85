//! Number formatting shared by the detail formatter and the view composer.

/// Decimal gigabyte, as the memory provider reports bytes.
pub const GIGABYTES: f64 = 1_000_000_000.0;

/// Round half up, so 55.5 becomes 56 and -0.5 becomes 0.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = (value + 0.5).floor();
    // avoid printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Render a rounded number without a fractional part.
pub fn format_rounded(value: f64) -> String {
    format!("{}", round_half_up(value))
}

pub fn format_percent(value: f64) -> String {
    format!("{}%", format_rounded(value))
}

/// Bytes to whole decimal gigabytes, without unit.
pub fn format_gigabytes(bytes: u64) -> String {
    format_rounded(bytes as f64 / GIGABYTES)
}

/// Memory tooltip in the form `free / totalGB`.
pub fn format_memory_title(free_bytes: u64, total_bytes: u64) -> String {
    format!(
        "{} / {}GB",
        format_gigabytes(free_bytes),
        format_gigabytes(total_bytes)
    )
}
