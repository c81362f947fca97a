use crate::error::{Error, Result};
use crate::models::ScoringWeights;
use std::env;

pub const SKILL_WEIGHT_VAR: &str = "RESUMEMATCH_SKILL_WEIGHT";
pub const TEXT_WEIGHT_VAR: &str = "RESUMEMATCH_TEXT_WEIGHT";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub skill_weight: f64,
    pub text_weight: f64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = ScoringWeights::default();

        let skill_weight = parse_weight(SKILL_WEIGHT_VAR, env::var(SKILL_WEIGHT_VAR).ok())?
            .unwrap_or(defaults.skill_weight);

        let text_weight = parse_weight(TEXT_WEIGHT_VAR, env::var(TEXT_WEIGHT_VAR).ok())?
            .unwrap_or(defaults.text_weight);

        Ok(Self {
            skill_weight,
            text_weight,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        let weights = ScoringWeights::default();
        Self {
            skill_weight: weights.skill_weight,
            text_weight: weights.text_weight,
        }
    }
}

impl From<&Config> for ScoringWeights {
    fn from(config: &Config) -> Self {
        Self {
            skill_weight: config.skill_weight,
            text_weight: config.text_weight,
        }
    }
}

fn parse_weight(key: &str, raw: Option<String>) -> Result<Option<f64>> {
    let Some(raw) = raw else {
        return Ok(None);
    };

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("{} must be a number, got '{}'", key, raw)))?;

    if !value.is_finite() {
        return Err(Error::Config(format!("{} must be finite, got '{}'", key, raw)));
    }

    Ok(Some(value))
}

/// Validates a weight passed on the command line, same rules as the env vars.
pub fn parse_weight_arg(raw: &str) -> std::result::Result<f64, String> {
    parse_weight("weight", Some(raw.to_string()))
        .map_err(|e| e.to_string())?
        .ok_or_else(|| "weight is required".to_string())
}
