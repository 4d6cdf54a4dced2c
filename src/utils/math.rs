//! Numeric helpers

/// Tolerance absorbing float noise in `(stop - start) / step`
const ARANGE_EPS: f64 = 1e-9;

/// Number of samples in the half-open range `[start, stop)` with `step`
pub fn arange_len(start: f64, stop: f64, step: f64) -> usize {
    if !(step > 0.0) || !(stop > start) {
        return 0;
    }
    ((stop - start) / step - ARANGE_EPS).ceil().max(0.0) as usize
}

/// Evenly spaced values over the half-open range `[start, stop)`
///
/// Values are computed as `start + i * step` so error does not
/// accumulate along the range. The endpoint is never included.
pub fn arange(start: f64, stop: f64, step: f64) -> Vec<f64> {
    (0..arange_len(start, stop, step))
        .map(|i| start + i as f64 * step)
        .collect()
}
