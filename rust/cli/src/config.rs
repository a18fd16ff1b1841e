//! Layered configuration: defaults, then the TOML file named by `HOG_CONFIG`,
//! then `HOG_*` environment variables, then command-line flags.

use hog_ai::create_strategy;
use hog_ai::harness::{DEFAULT_SAMPLES, ExperimentConfig, ExperimentToggles};
use hog_engine::rules::{GOAL_SCORE, Rules};
use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub seed: Option<u64>,
    pub num_samples: usize,
    pub goal: u32,
    pub piggy_back: bool,
    pub baseline: String,
    pub experiments: ExperimentToggles,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            num_samples: DEFAULT_SAMPLES,
            goal: GOAL_SCORE,
            piggy_back: false,
            baseline: "always_roll(5)".into(),
            experiments: ExperimentToggles::default(),
        }
    }
}

impl Config {
    pub fn rules(&self) -> Rules {
        Rules {
            goal: self.goal,
            piggy_back: self.piggy_back,
        }
    }

    pub fn experiment_config(&self) -> ExperimentConfig {
        ExperimentConfig {
            num_samples: self.num_samples,
            rules: self.rules(),
            baseline: self.baseline.clone(),
            toggles: self.experiments,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    Default,
    File,
    Env,
    Cli,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigSources {
    pub seed: ValueSource,
    pub num_samples: ValueSource,
    pub goal: ValueSource,
    pub piggy_back: ValueSource,
    pub baseline: ValueSource,
    pub experiments: ValueSource,
}

impl Default for ConfigSources {
    fn default() -> Self {
        Self {
            seed: ValueSource::Default,
            num_samples: ValueSource::Default,
            goal: ValueSource::Default,
            piggy_back: ValueSource::Default,
            baseline: ValueSource::Default,
            experiments: ValueSource::Default,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

impl ConfigResolved {
    /// Applies command-line overrides on top of the loaded layers and
    /// validates the result again.
    pub fn apply_cli(
        &mut self,
        seed: Option<u64>,
        samples: Option<usize>,
    ) -> Result<(), ConfigError> {
        if let Some(v) = seed {
            self.config.seed = Some(v);
            self.sources.seed = ValueSource::Cli;
        }
        if let Some(v) = samples {
            self.config.num_samples = v;
            self.sources.num_samples = ValueSource::Cli;
        }
        validate(&self.config)
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("{0}")]
    Invalid(String),
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var("HOG_CONFIG")
        && !path.is_empty()
    {
        tracing::debug!(%path, "reading config file");
        let s = fs::read_to_string(path)?;
        let f: FileConfig = toml::from_str(&s)?;
        if let Some(v) = f.seed {
            cfg.seed = Some(v);
            sources.seed = ValueSource::File;
        }
        if let Some(v) = f.num_samples {
            cfg.num_samples = v;
            sources.num_samples = ValueSource::File;
        }
        if let Some(v) = f.goal {
            cfg.goal = v;
            sources.goal = ValueSource::File;
        }
        if let Some(v) = f.piggy_back {
            cfg.piggy_back = v;
            sources.piggy_back = ValueSource::File;
        }
        if let Some(v) = f.baseline {
            cfg.baseline = v;
            sources.baseline = ValueSource::File;
        }
        if let Some(v) = f.experiments {
            cfg.experiments = v;
            sources.experiments = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var("HOG_SEED")
        && !seed.is_empty()
    {
        cfg.seed = Some(
            seed.parse()
                .map_err(|_| ConfigError::Invalid(format!("Invalid seed: {seed}")))?,
        );
        sources.seed = ValueSource::Env;
    }
    if let Ok(samples) = std::env::var("HOG_SAMPLES")
        && !samples.is_empty()
    {
        cfg.num_samples = samples
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid samples: {samples}")))?;
        sources.num_samples = ValueSource::Env;
    }
    if let Ok(goal) = std::env::var("HOG_GOAL")
        && !goal.is_empty()
    {
        cfg.goal = goal
            .parse()
            .map_err(|_| ConfigError::Invalid(format!("Invalid goal: {goal}")))?;
        sources.goal = ValueSource::Env;
    }
    if let Ok(piggy) = std::env::var("HOG_PIGGY_BACK")
        && !piggy.is_empty()
    {
        cfg.piggy_back = parse_bool(&piggy)
            .ok_or_else(|| ConfigError::Invalid(format!("Invalid piggy_back: {piggy}")))?;
        sources.piggy_back = ValueSource::Env;
    }
    if let Ok(baseline) = std::env::var("HOG_BASELINE")
        && !baseline.is_empty()
    {
        cfg.baseline = baseline;
        sources.baseline = ValueSource::Env;
    }

    validate(&cfg)?;
    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

#[derive(Debug, Deserialize)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
    #[serde(default)]
    num_samples: Option<usize>,
    #[serde(default)]
    goal: Option<u32>,
    #[serde(default)]
    piggy_back: Option<bool>,
    #[serde(default)]
    baseline: Option<String>,
    #[serde(default)]
    experiments: Option<ExperimentToggles>,
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.goal == 0 {
        return Err(ConfigError::Invalid("goal must be >= 1".into()));
    }
    if cfg.num_samples == 0 {
        return Err(ConfigError::Invalid("num_samples must be >= 1".into()));
    }
    if create_strategy(&cfg.baseline).is_err() {
        return Err(ConfigError::Invalid(format!(
            "unknown baseline strategy: {}",
            cfg.baseline
        )));
    }
    Ok(())
}

fn parse_bool(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" => Some(false),
        _ => None,
    }
}
