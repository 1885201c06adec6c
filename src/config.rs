use crate::consts::{DEFAULT_LAYER, DEFAULT_MAX_ONE_HAND_SIZE};
use crate::error::{ChordError, ChordResult};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub decompose: DecomposeParams,
    #[command(flatten)]
    pub costs: TypingCosts,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecomposeParams {
    /// Characters enumerated per batch before the rest is deferred.
    #[arg(long, default_value_t = DEFAULT_MAX_ONE_HAND_SIZE)]
    pub max_one_hand_size: usize,
    #[arg(long, default_value_t = DEFAULT_LAYER)]
    pub default_layer: usize,
}

impl Default for DecomposeParams {
    fn default() -> Self {
        Self {
            max_one_hand_size: DEFAULT_MAX_ONE_HAND_SIZE,
            default_layer: DEFAULT_LAYER,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TypingCosts {
    #[arg(long, default_value_t = 120.0)]
    pub accord_ms: f32,
    #[arg(long, default_value_t = 20.0)]
    pub extra_key_ms: f32,
    // Subtracted when an accord is on the other hand than the previous one.
    #[arg(long, default_value_t = 35.0)]
    pub alternation_bonus_ms: f32,
}

impl Default for TypingCosts {
    fn default() -> Self {
        Self {
            accord_ms: 120.0,
            extra_key_ms: 20.0,
            alternation_bonus_ms: 35.0,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ChordResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        config.validate()?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Overrides values that were given explicitly on the command line.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(decompose.max_one_hand_size);
        update_if_present!(decompose.default_layer);

        update_if_present!(costs.accord_ms);
        update_if_present!(costs.extra_key_ms);
        update_if_present!(costs.alternation_bonus_ms);
    }

    pub fn validate(&self) -> ChordResult<()> {
        if self.decompose.max_one_hand_size == 0 {
            return Err(ChordError::Config(
                "max_one_hand_size must be at least 1".into(),
            ));
        }

        let costs = [
            ("accord_ms", self.costs.accord_ms),
            ("extra_key_ms", self.costs.extra_key_ms),
            ("alternation_bonus_ms", self.costs.alternation_bonus_ms),
        ];
        for (name, value) in costs {
            if !value.is_finite() || value < 0.0 {
                return Err(ChordError::Config(format!(
                    "{} must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }
}
