//! Lightweight timing helpers for ad-hoc measurements outside criterion.

use std::time::{Duration, Instant};

/// Runs `op` `iterations` times against `input` and returns the total time.
pub fn time_op<T, R, F>(iterations: usize, input: &T, mut op: F) -> Duration
where
    T: ?Sized,
    F: FnMut(&T) -> R,
{
    let start = Instant::now();

    for _ in 0..iterations {
        std::hint::black_box(op(std::hint::black_box(input)));
    }

    start.elapsed()
}

/// Returns throughput in bytes per second for `bytes` processed in `elapsed`.
#[must_use]
pub fn bytes_per_second(bytes: usize, elapsed: Duration) -> f64 {
    let secs = elapsed.as_secs_f64();
    if secs == 0.0 {
        return f64::INFINITY;
    }
    bytes as f64 / secs
}
