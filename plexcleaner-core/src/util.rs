/// Bytes to gigabytes (GiB), as Plex reports library sizes.
pub const BYTES_TO_GB: f64 = 1.0 / 1_073_741_824.0;

/// Format a byte count with three decimals of gigabytes (e.g., "1.500 gigabyte").
pub fn format_gigabytes(bytes: u64) -> String {
    format!("{:0.3} gigabyte", bytes as f64 * BYTES_TO_GB)
}

/// Format a byte count with fractional KB/MB/GB (e.g., "1.5 KB", "2.3 GB").
pub fn format_bytes_approx(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}

#[cfg(test)]
#[path = "tests/util_tests.rs"]
mod tests;
