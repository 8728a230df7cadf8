use {
    super::*,
    magnitude::{MAX_METRIC_EXPONENT, metric_suffixes},
};

const MAX_EXTENDED: usize = 1_000_000;

#[derive(Debug, Parser)]
pub struct Suffixes {
    #[arg(
        long,
        default_value_t = 0,
        help = "List the first <EXTENDED> scientific suffixes past the metric range."
    )]
    extended: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Output {
    pub metric: Vec<MetricSuffix>,
    pub extended: Vec<String>,
    pub cached: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSuffix {
    pub exponent: usize,
    pub suffix: String,
}

impl Suffixes {
    pub fn run(self) -> Result {
        println!(
            "{}",
            serde_json::to_string_pretty(&self.output(ExponentCache::global())?)?
        );
        Ok(())
    }

    fn output(&self, cache: &ExponentCache) -> Result<Output> {
        ensure!(
            self.extended <= MAX_EXTENDED,
            "--extended {} exceeds maximum of {MAX_EXTENDED}",
            self.extended
        );

        let extended = cache
            .range(MAX_METRIC_EXPONENT + 1, self.extended)
            .iter()
            .map(ToString::to_string)
            .collect();

        Ok(Output {
            metric: metric_suffixes()
                .map(|(exponent, suffix)| MetricSuffix {
                    exponent,
                    suffix: suffix.into(),
                })
                .collect(),
            extended,
            cached: cache.len(),
        })
    }
}
