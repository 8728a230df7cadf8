use {super::*, crate::error::*, num_bigint::Sign};

/// A non-negative integer quantity to be scaled.
///
/// Parses from plain decimal digits, optionally grouped with `_` or `,`, and
/// from scientific shorthand such as `1e27` or `2.5e6` as long as the result
/// is a whole number.
#[derive(
    Debug,
    Clone,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    SerializeDisplay,
    DeserializeFromStr,
)]
pub struct Magnitude(BigUint);

impl Magnitude {
    /// Largest exponent accepted when parsing scientific shorthand.
    pub const MAX_EXPONENT: u32 = 1_000_000;

    pub fn new(value: BigUint) -> Self {
        Self(value)
    }

    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }

    pub fn into_inner(self) -> BigUint {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn pow(&self, exponent: u32) -> Self {
        Self(self.0.pow(exponent))
    }

    pub fn scaled(&self) -> Scaled {
        scale(&self.0)
    }
}

impl Display for Magnitude {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Magnitude {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();

        ensure!(!input.is_empty(), EmptySnafu);
        ensure!(!input.starts_with('-'), NegativeMagnitudeSnafu { input });

        let unsigned = input.strip_prefix('+').unwrap_or(input);

        let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => {
                let exponent = exponent
                    .strip_prefix('+')
                    .unwrap_or(exponent)
                    .parse::<u32>()
                    .context(InvalidExponentSnafu { input })?;

                ensure!(
                    exponent <= Self::MAX_EXPONENT,
                    ExponentTooLargeSnafu { exponent }
                );

                (mantissa, exponent)
            }
            None => (unsigned, 0),
        };

        let (integer, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

        let integer = digits(integer);
        let fraction = digits(fraction);
        let fraction = fraction.trim_end_matches('0');

        ensure!(
            !integer.is_empty() || !fraction.is_empty(),
            InvalidDigitsSnafu { input }
        );
        ensure!(
            integer
                .bytes()
                .chain(fraction.bytes())
                .all(|b| b.is_ascii_digit()),
            InvalidDigitsSnafu { input }
        );

        let shift = u32::try_from(fraction.len())
            .ok()
            .and_then(|len| exponent.checked_sub(len))
            .context(InexactExponentSnafu { input })?;

        let value = BigUint::parse_bytes(format!("{integer}{fraction}").as_bytes(), 10)
            .context(InvalidDigitsSnafu { input })?;

        Ok(Self(value * BigUint::from(10u32).pow(shift)))
    }
}

fn digits(s: &str) -> String {
    s.chars().filter(|c| !matches!(c, '_' | ',')).collect()
}

impl From<BigUint> for Magnitude {
    fn from(value: BigUint) -> Self {
        Self(value)
    }
}

impl From<u64> for Magnitude {
    fn from(value: u64) -> Self {
        Self(value.into())
    }
}

impl From<u128> for Magnitude {
    fn from(value: u128) -> Self {
        Self(value.into())
    }
}

impl From<Magnitude> for BigUint {
    fn from(magnitude: Magnitude) -> Self {
        magnitude.0
    }
}

impl TryFrom<BigInt> for Magnitude {
    type Error = Error;

    fn try_from(value: BigInt) -> Result<Self, Self::Error> {
        if value.sign() == Sign::Minus {
            return NegativeMagnitudeSnafu {
                input: value.to_string(),
            }
            .fail();
        }

        Ok(Self(value.into_parts().1))
    }
}

impl TryFrom<i64> for Magnitude {
    type Error = Error;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::try_from(BigInt::from(value))
    }
}
