mod gridding;
mod mode;
mod planner;

use crate::config::{C, F};

pub(crate) fn max_abs_diff<'a>(
    a: impl IntoIterator<Item = &'a C>,
    b: impl IntoIterator<Item = &'a C>,
) -> F {
    a.into_iter()
        .zip(b)
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, F::max)
}

pub(crate) fn assert_close(actual: F, expected: F, tol: F) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected}, got {actual} (tol {tol})"
    );
}
