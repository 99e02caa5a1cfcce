//! Wall-clock instrumentation for labeled operations.

use std::time::{Duration, Instant};

/// Run `f`, log "`label` took ..." at debug level, and return its result with the elapsed time.
pub fn timed<T>(label: &str, f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let out = f();
    let elapsed = start.elapsed();
    log::debug!("{label} took {elapsed:?}");
    (out, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timed_returns_result() {
        let (value, elapsed) = timed("sum", || (1..=10).sum::<u32>());
        assert_eq!(value, 55);
        assert!(elapsed < Duration::from_secs(5));
    }

    #[test]
    fn test_timed_measures_sleep() {
        let ((), elapsed) = timed("sleep", || std::thread::sleep(Duration::from_millis(5)));
        assert!(elapsed >= Duration::from_millis(5));
    }
}
