use {super::*, crate::options::Options};

pub const DEFAULT_PRECISION: usize = 2;
pub const DEFAULT_SEPARATOR: &str = " ";
pub const MAX_PRECISION: usize = 9;

/// TOML config file structure
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub precision: Option<usize>,
    pub trim: Option<bool>,
    pub separator: Option<String>,
}

/// Unified settings struct with all resolved configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Settings {
    pub config: Option<PathBuf>,
    pub config_dir: Option<PathBuf>,
    pub precision: Option<usize>,
    pub trim: Option<bool>,
    pub separator: Option<String>,
}

impl Settings {
    /// Load settings from all sources with proper priority
    pub fn load(options: Options) -> Result<Self> {
        let mut env = BTreeMap::<String, String>::new();

        for (var, value) in std::env::vars_os() {
            let Some(var) = var.to_str() else {
                continue;
            };

            let Some(key) = var.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            env.insert(
                key.into(),
                value.into_string().map_err(|value| {
                    anyhow!(
                        "environment variable `{var}` not valid unicode: `{}`",
                        value.to_string_lossy()
                    )
                })?,
            );
        }

        Self::merge(options, env)
    }

    /// Merge all configuration sources
    pub fn merge(options: Options, env: BTreeMap<String, String>) -> Result<Self> {
        // Start with CLI options (highest priority)
        let settings = Self::from_options(&options);

        // Merge with environment variables
        let settings = settings.or(Self::from_env(&env)?);

        // Load and merge config file
        let config = match Self::find_config_path(&settings) {
            Some(config_path) => {
                debug!("Loading config from {}", config_path.display());

                toml::from_str(&fs::read_to_string(&config_path).with_context(|| {
                    format!("failed to open config file `{}`", config_path.display())
                })?)
                .with_context(|| {
                    format!(
                        "failed to deserialize config file `{}`",
                        config_path.display()
                    )
                })?
            }
            None => Config::default(),
        };

        let settings = settings.or(Self::from_config(&config));

        // Apply defaults
        let settings = settings.or_defaults();

        settings.validate()?;

        Ok(settings)
    }

    fn find_config_path(settings: &Self) -> Option<PathBuf> {
        // 1. Explicit --config flag
        if let Some(path) = &settings.config {
            return Some(path.clone());
        }

        // 2. --config-dir/postfix.toml
        if let Some(dir) = &settings.config_dir {
            let path = dir.join(CONFIG_FILE_NAME);
            if path.exists() {
                return Some(path);
            }
        }

        // 3. XDG config dir (~/.config/postfix/postfix.toml)
        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("postfix").join(CONFIG_FILE_NAME);
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    pub fn from_options(options: &Options) -> Self {
        Self {
            config: options.config.clone(),
            config_dir: options.config_dir.clone(),
            precision: options.precision,
            trim: options.trim.then_some(true),
            separator: options.separator.clone(),
        }
    }

    pub fn from_env(env: &BTreeMap<String, String>) -> Result<Self> {
        let get_bool = |key: &str| {
            env.get(key)
                .map(|value| !value.is_empty() && value != "0" && value.to_lowercase() != "false")
        };

        let get_path = |key: &str| env.get(key).map(PathBuf::from);

        let get_usize = |key: &str| -> Result<Option<usize>> {
            env.get(key)
                .map(|int| int.parse::<usize>())
                .transpose()
                .with_context(|| {
                    format!("failed to parse environment variable {ENV_PREFIX}{key} as usize")
                })
        };

        Ok(Self {
            config: get_path("CONFIG"),
            config_dir: get_path("CONFIG_DIR"),
            precision: get_usize("PRECISION")?,
            trim: get_bool("TRIM"),
            separator: env.get("SEPARATOR").cloned(),
        })
    }

    pub fn from_config(config: &Config) -> Self {
        Self {
            precision: config.precision,
            trim: config.trim,
            separator: config.separator.clone(),
            ..Default::default()
        }
    }

    fn or(self, other: Self) -> Self {
        Self {
            config: self.config.or(other.config),
            config_dir: self.config_dir.or(other.config_dir),
            precision: self.precision.or(other.precision),
            trim: self.trim.or(other.trim),
            separator: self.separator.or(other.separator),
        }
    }

    fn or_defaults(self) -> Self {
        Self {
            precision: self.precision.or(Some(DEFAULT_PRECISION)),
            trim: self.trim.or(Some(false)),
            separator: self.separator.or(Some(DEFAULT_SEPARATOR.into())),
            ..self
        }
    }

    fn validate(&self) -> Result {
        ensure!(
            self.precision() <= MAX_PRECISION,
            "precision {} exceeds maximum of {MAX_PRECISION}",
            self.precision()
        );

        Ok(())
    }

    pub fn precision(&self) -> usize {
        self.precision.unwrap_or(DEFAULT_PRECISION)
    }

    pub fn trim(&self) -> bool {
        self.trim.unwrap_or_default()
    }

    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    pub fn render(&self) -> Render {
        Render {
            precision: self.precision(),
            trim: self.trim(),
            separator: self.separator().into(),
        }
    }
}
