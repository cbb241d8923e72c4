//! Human-readable quantities for menu rows

const PREFIXES: [&str; 6] = ["", "k", "M", "G", "T", "P"];

/// Placeholder for values the probe tool did not report
pub const NOT_AVAILABLE: &str = "N/A";

/// Scale `value` by powers of 1000 and attach `unit`, e.g. `44100, "Hz"` -> "44.1 kHz".
/// At most two decimals are kept, trailing zeros dropped.
pub fn quantity(value: Option<f64>, unit: &str) -> String {
    let Some(mut value) = value.filter(|v| v.is_finite()) else {
        return NOT_AVAILABLE.into();
    };

    let mut prefix = 0;
    while value.abs() >= 1000.0 && prefix < PREFIXES.len() - 1 {
        value /= 1000.0;
        prefix += 1;
    }

    // Rounding can push 999.996 up to "1000.00"; step to the next prefix instead.
    if (value * 100.0).round().abs() >= 100_000.0 && prefix < PREFIXES.len() - 1 {
        value /= 1000.0;
        prefix += 1;
    }

    format!("{} {}{}", trim_number(value), PREFIXES[prefix], unit)
}

/// Bitrates come from the probe tool in kbit/s
pub fn bitrate(kbps: Option<f64>) -> String {
    quantity(kbps.map(|k| k * 1000.0), "b/s")
}

pub fn bytes(size: Option<u64>) -> String {
    quantity(size.map(|s| s as f64), "B")
}

/// Plain number without unit, "N/A" when absent (e.g. fps)
pub fn number(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => trim_number(v),
        None => NOT_AVAILABLE.into(),
    }
}

fn trim_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" { "0".into() } else { text.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_scaling() {
        assert_eq!(quantity(Some(44100.0), "Hz"), "44.1 kHz");
        assert_eq!(quantity(Some(3_456_789.0), "B"), "3.46 MB");
        assert_eq!(quantity(Some(512.0), "B"), "512 B");
        assert_eq!(quantity(Some(0.0), "Hz"), "0 Hz");
        assert_eq!(quantity(Some(999_999.0), "B"), "1 MB");
    }

    #[test]
    fn test_absent_values() {
        assert_eq!(quantity(None, "Hz"), "N/A");
        assert_eq!(bytes(None), "N/A");
        assert_eq!(bitrate(None), "N/A");
        assert_eq!(number(None), "N/A");
        assert_eq!(quantity(Some(f64::NAN), "B"), "N/A");
    }

    #[test]
    fn test_bitrate_and_number() {
        assert_eq!(bitrate(Some(129.47)), "129.47 kb/s");
        assert_eq!(bitrate(Some(4400.0)), "4.4 Mb/s");
        assert_eq!(bytes(Some(1_500_000_000)), "1.5 GB");
        assert_eq!(number(Some(30.0)), "30");
        assert_eq!(number(Some(29.97)), "29.97");
    }
}
