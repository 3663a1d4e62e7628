//! Wall-clock timing of a single callable

use std::time::Instant;

/// Invoke `f` exactly once and measure wall-clock time around the
/// invocation only, not around construction of anything `f` captured.
///
/// Returns the callable's value together with the elapsed time in
/// seconds. Nothing is caught or retried; whatever `f` returns reaches
/// the caller unmodified, and a panic inside `f` unwinds as usual.
pub fn time_call<T>(f: impl FnOnce() -> T) -> (T, f64) {
    let start = Instant::now();
    let value = f();
    let elapsed = start.elapsed().as_secs_f64();
    (value, elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_value_passes_through_unmodified() {
        let (value, elapsed) = time_call(|| 7 * 6);
        assert_eq!(value, 42);
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_sleep_measured_within_tolerance() {
        let (_, elapsed) = time_call(|| thread::sleep(Duration::from_millis(100)));
        // sleep guarantees at-least semantics; the upper bound is loose
        // to tolerate scheduler noise on shared runners
        assert!(elapsed >= 0.095, "measured {elapsed}s for a 100ms sleep");
        assert!(elapsed < 0.3, "measured {elapsed}s for a 100ms sleep");
    }

    #[test]
    fn test_result_callable_passes_errors_through() {
        let (outcome, _) = time_call(|| -> Result<(), String> { Err("boom".to_string()) });
        assert_eq!(outcome.unwrap_err(), "boom");
    }
}
