use crate::AhError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, AhError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(AhError::NonFinite { what, value: v })
    }
}

/// Evenly spaced samples over `[start, stop]`, both endpoints included.
///
/// Sample `i` is `start + i * step` with `step = (stop - start) / (n - 1)`,
/// and the last sample is pinned to `stop` so the grid closes exactly.
/// `n == 1` yields `[start]`, `n == 0` an empty vector.
pub fn linspace(start: Real, stop: Real, n: usize) -> Vec<Real> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as Real;
            let mut grid: Vec<Real> = (0..n).map(|i| start + i as Real * step).collect();
            grid[n - 1] = stop;
            grid
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn linspace_closes_on_both_endpoints() {
        let grid = linspace(0.0, 120.0, 100);
        assert_eq!(grid.len(), 100);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[99], 120.0);
    }

    #[test]
    fn linspace_degenerate_sizes() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 7.0, 1), vec![3.0]);
        assert_eq!(linspace(0.0, 0.0, 5), vec![0.0; 5]);
    }
}
