//! Human-readable formatting helpers.

const BAR_WIDTH: f32 = 25.0;

const INFO_UNITS: &[&str] = &["bytes", "KiB", "MiB", "GiB", "TiB"];

/// Renders a one-line progress bar for `progress` in `0.0..=1.0`.
///
/// Out-of-range values are clamped and NaN counts as no progress. The line
/// ends with `\r` so repeated prints overwrite each other.
///
/// ```
/// assert_eq!(room_common::progress_bar(0.5), "[=============>             ] 50.0%\r");
/// ```
pub fn progress_bar(progress: f32) -> String {
    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };

    let done = (BAR_WIDTH * progress).round() as usize;
    let left = (BAR_WIDTH * (1.0 - progress)).round() as usize;
    let percent = (1000.0 * progress).round() / 10.0;

    format!("[{}>{}] {:.1}%\r", "=".repeat(done), " ".repeat(left), percent)
}

/// Formats a byte count in binary units, dividing by 1024 while the value
/// exceeds 1024. The remainder is truncated and TiB is the largest unit.
///
/// ```
/// assert_eq!(room_common::optimal_info_unit(134_217_728), "128 MiB");
/// ```
pub fn optimal_info_unit(bytes: u64) -> String {
    let mut value = bytes;
    let mut unit = 0;
    while value > 1024 && unit + 1 < INFO_UNITS.len() {
        value /= 1024;
        unit += 1;
    }
    let label = INFO_UNITS.get(unit).copied().unwrap_or("bytes");
    format!("{value} {label}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_progress_bar_empty_and_full() {
        assert_eq!(progress_bar(0.0), format!("[>{}] 0.0%\r", " ".repeat(25)));
        assert_eq!(progress_bar(1.0), format!("[{}>] 100.0%\r", "=".repeat(25)));
    }

    #[test]
    fn test_progress_bar_rounds_percent_to_one_decimal() {
        assert!(progress_bar(1.0 / 3.0).ends_with("] 33.3%\r"));
        assert!(progress_bar(0.1234).ends_with("] 12.3%\r"));
    }

    #[test]
    fn test_progress_bar_clamps_out_of_range() {
        assert_eq!(progress_bar(-0.5), progress_bar(0.0));
        assert_eq!(progress_bar(7.0), progress_bar(1.0));
        assert_eq!(progress_bar(f32::NAN), progress_bar(0.0));
    }

    #[test]
    fn test_info_unit_examples() {
        assert_eq!(optimal_info_unit(0), "0 bytes");
        assert_eq!(optimal_info_unit(1023), "1023 bytes");
        assert_eq!(optimal_info_unit(1024), "1024 bytes");
        assert_eq!(optimal_info_unit(1025), "1 KiB");
        assert_eq!(optimal_info_unit(134_217_728), "128 MiB");
        assert_eq!(optimal_info_unit(5 * 1024 * 1024 * 1024 + 1), "5 GiB");
    }

    #[test]
    fn test_info_unit_stops_at_largest_unit() {
        assert_eq!(optimal_info_unit(1u64 << 50), "1024 TiB");
        assert_eq!(optimal_info_unit(u64::MAX), "16777215 TiB");
    }

    proptest! {
        #[test]
        fn progress_bar_has_fixed_shape(p in 0.0f32..=1.0) {
            let bar = progress_bar(p);
            prop_assert!(bar.starts_with('['));
            prop_assert!(bar.ends_with("%\r"));
            let inner = bar.split(']').next().unwrap_or_default();
            let cells = inner.chars().count() - 1;
            prop_assert!((25..=27).contains(&cells));
        }
    }
}
