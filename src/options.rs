use super::*;

#[derive(Clone, Default, Debug, Parser)]
pub struct Options {
    #[arg(long, help = "Load configuration from <CONFIG>.")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Load configuration from <CONFIG_DIR>/postfix.toml.")]
    pub config_dir: Option<PathBuf>,

    #[arg(long, help = "Render <PRECISION> decimal places. [default: 2]")]
    pub precision: Option<usize>,

    #[arg(long, help = "Strip trailing zeros from rendered values.")]
    pub trim: bool,

    #[arg(
        long,
        allow_hyphen_values = true,
        help = "Put <SEPARATOR> between value and suffix. [default: \" \"]"
    )]
    pub separator: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let opts = Options::default();
        assert!(opts.config.is_none());
        assert!(opts.precision.is_none());
        assert!(!opts.trim);
        assert!(opts.separator.is_none());
    }

    #[test]
    fn parse_precision() {
        let opts = Options::try_parse_from(["postfix", "--precision", "4"]).unwrap();
        assert_eq!(opts.precision, Some(4));
    }

    #[test]
    fn negative_precision_is_rejected() {
        assert!(Options::try_parse_from(["postfix", "--precision", "-1"]).is_err());
    }

    #[test]
    fn parse_trim_flag() {
        let opts = Options::try_parse_from(["postfix", "--trim"]).unwrap();
        assert!(opts.trim);
    }

    #[test]
    fn parse_separator() {
        let opts = Options::try_parse_from(["postfix", "--separator", "-"]).unwrap();
        assert_eq!(opts.separator, Some("-".into()));

        let opts = Options::try_parse_from(["postfix", "--separator", ""]).unwrap();
        assert_eq!(opts.separator, Some(String::new()));
    }

    #[test]
    fn parse_config_paths() {
        let opts = Options::try_parse_from([
            "postfix",
            "--config",
            "/etc/postfix.toml",
            "--config-dir",
            "/etc/postfix",
        ])
        .unwrap();
        assert_eq!(opts.config, Some(PathBuf::from("/etc/postfix.toml")));
        assert_eq!(opts.config_dir, Some(PathBuf::from("/etc/postfix")));
    }
}
