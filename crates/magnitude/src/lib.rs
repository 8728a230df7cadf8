use {
    derive_more::Display,
    num_traits::{ToPrimitive, Zero},
    parking_lot::RwLock,
    serde::{Deserialize, Serialize},
    serde_with::{DeserializeFromStr, DisplayFromStr, SerializeDisplay, serde_as},
    snafu::{OptionExt, ResultExt, Snafu, ensure},
    std::{
        fmt::{self, Display, Formatter},
        num::ParseIntError,
        str::FromStr,
        sync::{Arc, LazyLock},
    },
    tracing::debug,
};

pub use {
    error::{Error, Result},
    exponent_cache::{ExponentCache, GROWTH_STEP, INITIAL_EXPONENTS},
    magnitude::Magnitude,
    metric::{
        MAX_METRIC_EXPONENT, METRIC_SUFFIXES, get as metric_get, metric_suffix, metric_suffixes,
    },
    num_bigint::{BigInt, BigUint},
    resolver::scale,
    scaled::{Regime, Scaled},
};

mod error;
mod exponent_cache;
mod magnitude;
mod metric;
mod resolver;
mod scaled;
