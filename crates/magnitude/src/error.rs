use super::*;

pub type Result<T = (), E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("empty magnitude"))]
    Empty,

    #[snafu(display("magnitude `{input}` is negative"))]
    NegativeMagnitude { input: String },

    #[snafu(display("magnitude `{input}` is not a decimal integer"))]
    InvalidDigits { input: String },

    #[snafu(display("invalid exponent in `{input}`: {source}"))]
    InvalidExponent {
        input: String,
        source: ParseIntError,
    },

    #[snafu(display("magnitude `{input}` has more fractional digits than its exponent covers"))]
    InexactExponent { input: String },

    #[snafu(display("exponent {exponent} exceeds maximum of {}", Magnitude::MAX_EXPONENT))]
    ExponentTooLarge { exponent: u32 },
}
