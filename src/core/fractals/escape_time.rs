use crate::core::data::complex::Complex;
use std::ops::ControlFlow;

/// Escape radius of the quadratic iteration.
pub const ESCAPE_RADIUS: f64 = 2.0;

/// Iterates `z <- z * z + c` from `z0` and returns the 0-based step at which
/// `|z|` first exceeds [`ESCAPE_RADIUS`], or `limit - 1` if it never does.
///
/// The result is always in `0..limit` for a non-zero `limit`.
#[must_use]
pub fn iterate(z0: Complex, c: Complex, limit: u32) -> u32 {
    let result = (0..limit).try_fold(z0, |z, step| {
        let next = z * z + c;

        if next.magnitude() > ESCAPE_RADIUS {
            ControlFlow::Break(step)
        } else {
            ControlFlow::Continue(next)
        }
    });

    match result {
        ControlFlow::Break(step) => step,
        ControlFlow::Continue(_) => limit.saturating_sub(1),
    }
}
