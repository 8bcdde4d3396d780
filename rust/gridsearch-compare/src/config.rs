use std::env;
use std::str::FromStr;

use gridsearch_core::{BeamParams, GridOptions};

use crate::errors::CompareError;

pub const DEFAULT_WIDTH: usize = 40;
pub const DEFAULT_HEIGHT: usize = 40;
pub const DEFAULT_OBSTACLE_DENSITY: f64 = 0.35;

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub grid: GridOptions,
    pub beam: BeamParams,
    pub log_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            grid: GridOptions {
                width: DEFAULT_WIDTH,
                height: DEFAULT_HEIGHT,
                obstacle_density: DEFAULT_OBSTACLE_DENSITY,
                seed: None,
            },
            beam: BeamParams::default(),
            log_json: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, CompareError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build from `GRIDSEARCH_*` settings returned by `lookup`; unset names
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CompareError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();
        if let Some(v) = parse(&lookup, "GRIDSEARCH_WIDTH")? { cfg.grid.width = v; }
        if let Some(v) = parse(&lookup, "GRIDSEARCH_HEIGHT")? { cfg.grid.height = v; }
        if let Some(v) = parse(&lookup, "GRIDSEARCH_DENSITY")? { cfg.grid.obstacle_density = v; }
        if let Some(v) = parse(&lookup, "GRIDSEARCH_SEED")? { cfg.grid.seed = Some(v); }
        if let Some(v) = parse(&lookup, "GRIDSEARCH_BEAM_WIDTH")? { cfg.beam.beam_width = v; }
        if let Some(v) = parse_flag(&lookup, "GRIDSEARCH_ADAPTIVE")? { cfg.beam.adaptive = v; }
        if let Some(v) = parse_flag(&lookup, "GRIDSEARCH_LOG_JSON")? { cfg.log_json = v; }
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), CompareError> {
        self.grid.validate()?;
        self.beam.validate()?;
        Ok(())
    }
}

fn parse<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, CompareError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| CompareError::InvalidSetting { name, value: raw }),
    }
}

fn parse_flag<F>(lookup: &F, name: &'static str) -> Result<Option<bool>, CompareError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup(name) else { return Ok(None) };
    let normalized = raw.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Ok(Some(true)),
        "0" | "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(CompareError::InvalidSetting { name, value: raw }),
    }
}
