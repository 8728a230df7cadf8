use super::*;

const GROUP: u32 = 1000;

/// Thousands-groups are stripped while the remainder exceeds this.
const STRIP_THRESHOLD: u32 = GROUP * GROUP;

/// Scales `value` using the process-wide exponent cache.
pub fn scale(value: &BigUint) -> Scaled {
    ExponentCache::global().scale(value)
}

impl ExponentCache {
    /// Scales `value`, growing this cache if the result needs a scientific
    /// suffix it does not hold yet.
    pub fn scale(&self, value: &BigUint) -> Scaled {
        let threshold = BigUint::from(STRIP_THRESHOLD);

        let mut remaining = value.clone();
        let mut exponent = 0;

        while remaining > threshold {
            remaining /= GROUP;
            exponent += 3;
        }

        let remaining = remaining
            .to_u32()
            .expect("remainder is at most one million");

        let mut base = if remaining > GROUP {
            exponent += 3;
            remaining as f32 / GROUP as f32
        } else {
            remaining as f32
        };

        if exponent <= MAX_METRIC_EXPONENT {
            return Scaled::new(value.clone(), base, metric_suffix(exponent).into(), exponent);
        }

        while base > 10.0 {
            base /= 10.0;
            exponent += 1;
        }

        self.ensure(exponent);

        Scaled::new(value.clone(), base, self.lookup(exponent), exponent)
    }
}
