use crate::StError;

/// Absolute + relative tolerance pair for float comparison.
///
/// Two values agree when they differ by at most `abs`, or by at most `rel`
/// of the larger magnitude. The absolute leg handles values near zero where
/// a relative bound collapses.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Tolerances {
    /// Preset for comparing resolved or round-tripped property values.
    ///
    /// Working-unit properties accumulate only float rounding through the
    /// conversion and interpolation laws, so the preset sits well below the
    /// least significant printed digit of any steam-table value and well
    /// above accumulated rounding.
    pub const fn property() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-12,
        }
    }

    pub fn nearly_equal(self, a: f64, b: f64) -> bool {
        let diff = (a - b).abs();
        diff <= self.abs || diff <= self.rel * a.abs().max(b.abs())
    }
}

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, StError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(StError::NonFinite { what, value: v })
    }
}
