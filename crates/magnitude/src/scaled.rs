use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Regime {
    #[display("metric")]
    Metric,
    #[display("scientific")]
    Scientific,
}

/// A magnitude reduced to a short display value and a scale suffix.
///
/// `display_value × 10^exponent` approximates `original` to within one
/// single-precision conversion. In the metric regime `display_value` lies in
/// `[0, 1000]`; in the scientific regime it lies in `(1, 10]`.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scaled {
    #[serde_as(as = "DisplayFromStr")]
    original: BigUint,
    display_value: f32,
    suffix: Arc<str>,
    exponent: usize,
}

impl Scaled {
    pub(crate) fn new(
        original: BigUint,
        display_value: f32,
        suffix: Arc<str>,
        exponent: usize,
    ) -> Self {
        Self {
            original,
            display_value,
            suffix,
            exponent,
        }
    }

    pub fn original(&self) -> &BigUint {
        &self.original
    }

    pub fn display_value(&self) -> f32 {
        self.display_value
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    pub fn exponent(&self) -> usize {
        self.exponent
    }

    pub fn regime(&self) -> Regime {
        if self.exponent > MAX_METRIC_EXPONENT {
            Regime::Scientific
        } else {
            Regime::Metric
        }
    }

    /// `display_value × 10^exponent` as a float. Overflows to infinity past
    /// `f64::MAX`.
    pub fn approximation(&self) -> f64 {
        f64::from(self.display_value)
            * 10f64.powi(i32::try_from(self.exponent).unwrap_or(i32::MAX))
    }
}
