//! Wall-clock timing for benchmark passes

use std::time::{Duration, Instant};

/// Run `f` to completion and measure the wall-clock time it takes.
///
/// Each call captures its own start/end timestamp pair, so no two
/// passes share a measurement boundary.
pub fn time_pass<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}

/// Measured durations for the four passes, in the order they ran.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassTimings {
    pub filter_lazy: Duration,
    pub filter_eager: Duration,
    pub map_lazy: Duration,
    pub map_eager: Duration,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_pass_returns_value_and_duration() {
        let (value, elapsed) = time_pass(|| (0u64..100).sum::<u64>());
        assert_eq!(value, 4_950);
        // Instant::elapsed is non-negative by construction; sanity-check
        // the measurement is a plausible wall-clock reading.
        assert!(elapsed < Duration::from_secs(5));
    }
}
