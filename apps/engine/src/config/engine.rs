use std::env;
use std::str::FromStr;

use crate::domain::rules::{DEFAULT_LOSING_SCORE, DEFAULT_WINNING_SCORE};
use crate::error::EngineError;

pub const WINNING_SCORE_VAR: &str = "BIDWHIST_WINNING_SCORE";
pub const LOSING_SCORE_VAR: &str = "BIDWHIST_LOSING_SCORE";
pub const MAX_CASCADE_STEPS_VAR: &str = "BIDWHIST_MAX_CASCADE_STEPS";
pub const SEED_VAR: &str = "BIDWHIST_SEED";

/// Guard on automatic steps run inside a single action. A hand is about
/// sixty steps and every hand moves a score by at least four.
pub const DEFAULT_MAX_CASCADE_STEPS: usize = 10_000;

/// Engine-wide settings shared by every game a service hosts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub winning_score: i32,
    pub losing_score: i32,
    pub max_cascade_steps: usize,
    /// Base seed for new games; None draws a fresh seed per game.
    pub game_seed: Option<i64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            winning_score: DEFAULT_WINNING_SCORE,
            losing_score: DEFAULT_LOSING_SCORE,
            max_cascade_steps: DEFAULT_MAX_CASCADE_STEPS,
            game_seed: None,
        }
    }
}

impl EngineConfig {
    /// Read overrides from the process environment.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from any name → value source; unset names keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let config = Self {
            winning_score: parse_or(&lookup, WINNING_SCORE_VAR, defaults.winning_score)?,
            losing_score: parse_or(&lookup, LOSING_SCORE_VAR, defaults.losing_score)?,
            max_cascade_steps: parse_or(
                &lookup,
                MAX_CASCADE_STEPS_VAR,
                defaults.max_cascade_steps,
            )?,
            game_seed: match lookup(SEED_VAR) {
                Some(raw) => Some(parse_var(SEED_VAR, &raw)?),
                None => None,
            },
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.winning_score <= 0 {
            return Err(EngineError::config(format!(
                "winning score must be positive, got {}",
                self.winning_score
            )));
        }
        if self.losing_score >= 0 {
            return Err(EngineError::config(format!(
                "losing score must be negative, got {}",
                self.losing_score
            )));
        }
        if self.max_cascade_steps == 0 {
            return Err(EngineError::config("max cascade steps must be at least 1"));
        }
        Ok(())
    }
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> Result<T, EngineError>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => parse_var(name, &raw),
        None => Ok(default),
    }
}

fn parse_var<T: FromStr>(name: &str, raw: &str) -> Result<T, EngineError> {
    raw.trim()
        .parse()
        .map_err(|_| EngineError::config(format!("Environment variable '{name}' has invalid value '{raw}'")))
}
