//! Rendering of measured pass durations
//!
//! The report is two blocks of two lines each, matching the fixed
//! output contract: the filter pair first, then the map pair, every
//! duration in seconds with exactly four digits after the decimal
//! point.

use crate::timing::PassTimings;

/// Format the benchmark report for stdout.
pub fn format_report(timings: &PassTimings) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "filter: {:.4} s\nlist compre: {:.4} s\n",
        timings.filter_lazy.as_secs_f64(),
        timings.filter_eager.as_secs_f64()
    ));
    output.push_str(&format!(
        "map: {:.4} s\nlist compre: {:.4} s\n",
        timings.map_lazy.as_secs_f64(),
        timings.map_eager.as_secs_f64()
    ));
    output
}
