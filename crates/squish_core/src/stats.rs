//! Byte-size accounting for minification results.
//!
//! Sizes are UTF-8 byte lengths, not character counts. Floating point is
//! only used at the display-formatting boundary.

/// Number of decimal places used by [`format_bytes`] and summaries unless
/// configured otherwise.
pub const DEFAULT_DECIMALS: usize = 2;

/// Size comparison between an original buffer and its minified form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeReport {
    pub original_bytes: u64,
    pub minified_bytes: u64,
}

impl SizeReport {
    /// Bytes saved; negative when the "minified" form grew.
    pub fn reduction(&self) -> i64 {
        self.original_bytes as i64 - self.minified_bytes as i64
    }

    /// Reduction as a percentage of the original size.
    pub fn percentage(&self) -> f64 {
        self.reduction() as f64 / self.original_bytes as f64 * 100.0
    }

    /// One-line summary for the stats display, percentage to two decimals.
    pub fn summary(&self, decimals: usize) -> String {
        let saved_abs = format_bytes(self.reduction().unsigned_abs(), decimals);
        let saved = if self.reduction() < 0 {
            format!("-{saved_abs}")
        } else {
            saved_abs
        };

        format!(
            "Original: {} | Minified: {} | Saved: {} ({:.2}%)",
            format_bytes(self.original_bytes, decimals),
            format_bytes(self.minified_bytes, decimals),
            saved,
            self.percentage(),
        )
    }
}

/// Compute a size report from two text buffers.
///
/// Returns `None` when the original buffer is empty: the percentage would
/// divide by zero and the report would be meaningless.
pub fn compute_stats(original: &str, minified: &str) -> Option<SizeReport> {
    if original.is_empty() {
        return None;
    }

    Some(SizeReport {
        original_bytes: original.len() as u64,
        minified_bytes: minified.len() as u64,
    })
}

/// Format a byte count into a human-readable string.
///
/// Binary units (1024) labelled with common short forms. The unit table
/// ends at GB; anything larger renders as a large GB value. Trailing zeros
/// after the decimal point are stripped, so 1536 bytes at two decimals is
/// "1.5 KB", not "1.50 KB".
pub fn format_bytes(bytes: u64, decimals: usize) -> String {
    const UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];
    const STEP: f64 = 1024.0;

    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= STEP && unit < UNITS.len() - 1 {
        value /= STEP;
        unit += 1;
    }

    let mut formatted = format!("{value:.decimals$}");
    if formatted.contains('.') {
        formatted = formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string();
    }

    format!("{} {}", formatted, UNITS[unit])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_zero() {
        assert_eq!(format_bytes(0, 2), "0 Bytes");
    }

    #[test]
    fn format_exact_and_fractional_units() {
        assert_eq!(format_bytes(1024, 2), "1 KB");
        assert_eq!(format_bytes(1536, 2), "1.5 KB");
        assert_eq!(format_bytes(512, 2), "512 Bytes");
        assert_eq!(format_bytes(1024 * 1024, 2), "1 MB");
    }

    #[test]
    fn format_clamps_beyond_gb() {
        // 2 TB has no TB entry; renders in GB.
        assert_eq!(format_bytes(2 * 1024 * 1024 * 1024 * 1024, 2), "2048 GB");
    }

    #[test]
    fn scaled_value_stays_in_unit_range() {
        for bytes in [1u64, 1023, 1024, 1025, 1536, 1 << 20, (1 << 30) - 1, 1 << 30] {
            let formatted = format_bytes(bytes, 2);
            let (value, unit) = formatted.split_once(' ').unwrap();
            let value: f64 = value.parse().unwrap();
            // The scaled value is in [1, 1024); display rounding can land
            // exactly on the boundary ((1 << 30) - 1 renders as "1024 MB").
            assert!((1.0..=1024.0).contains(&value), "bytes = {bytes} -> {formatted}");
            assert!(["Bytes", "KB", "MB", "GB"].contains(&unit), "bytes = {bytes}");
        }
    }

    #[test]
    fn empty_original_yields_no_report() {
        assert_eq!(compute_stats("", "anything"), None);
    }

    #[test]
    fn reduction_and_percentage() {
        let report = compute_stats(&"a".repeat(100), &"b".repeat(40)).unwrap();
        assert_eq!(report.reduction(), 60);
        assert_eq!(format!("{:.2}", report.percentage()), "60.00");
        assert!(report.summary(2).contains("(60.00%)"));
    }

    #[test]
    fn growth_is_reported_as_negative() {
        let report = compute_stats("ab", "abcd").unwrap();
        assert_eq!(report.reduction(), -2);
        assert!(report.summary(2).contains("-2 Bytes"));
    }

    #[test]
    fn sizes_use_utf8_bytes_not_chars() {
        // "é" is two bytes in UTF-8.
        let report = compute_stats("é", "e").unwrap();
        assert_eq!(report.original_bytes, 2);
        assert_eq!(report.minified_bytes, 1);
    }
}
