//! Runtime configuration, read from `BLOCKFALL_*` environment variables.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use thiserror::Error;

use crate::types::{
    PieceKind, Rotation, DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_TICK_MS,
    MAX_BOARD_SIZE, MIN_BOARD_SIZE,
};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var}: expected a number, got {value:?}")]
    NotANumber { var: &'static str, value: String },
    #[error("{var}: {value} is outside {min}..={max}")]
    OutOfRange {
        var: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
    #[error("BLOCKFALL_RANDOMIZER: unknown randomizer {0:?} (expected \"uniform\" or \"bag\")")]
    UnknownRandomizer(String),
    #[error("BLOCKFALL_LOG_LEVEL: unknown level {0:?}")]
    UnknownLogLevel(String),
    #[error("BLOCKFALL_SPAWN_SCRIPT: bad entry {0:?} (expected kind[:rotation], e.g. \"t:east\")")]
    BadSpawnScript(String),
}

/// How spawned pieces are chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    /// Any kind in any rotation, uniformly.
    #[default]
    Uniform,
    /// Kinds from a shuffled bag of seven.
    Bag,
}

impl Randomizer {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "uniform" => Some(Randomizer::Uniform),
            "bag" | "7bag" => Some(Randomizer::Bag),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub width: u8,
    pub height: u8,
    pub tick: Duration,
    pub seed: u32,
    pub randomizer: Randomizer,
    /// Fixed spawn cycle; replaces the randomizer when set.
    pub spawn_script: Option<Vec<(PieceKind, Rotation)>>,
    pub exit_on_game_over: bool,
    pub log_path: Option<String>,
    pub log_level: log::LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            tick: Duration::from_millis(DEFAULT_TICK_MS as u64),
            seed: time_seed(),
            randomizer: Randomizer::Uniform,
            spawn_script: None,
            exit_on_game_over: false,
            log_path: None,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl Config {
    /// Read the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let mut config = Self::default();

        if let Some(v) = get("BLOCKFALL_WIDTH") {
            config.width = parse_bounded(
                "BLOCKFALL_WIDTH",
                &v,
                MIN_BOARD_SIZE as u32,
                MAX_BOARD_SIZE as u32,
            )? as u8;
        }
        if let Some(v) = get("BLOCKFALL_HEIGHT") {
            config.height = parse_bounded(
                "BLOCKFALL_HEIGHT",
                &v,
                MIN_BOARD_SIZE as u32,
                MAX_BOARD_SIZE as u32,
            )? as u8;
        }
        if let Some(v) = get("BLOCKFALL_TICK_MS") {
            let ms = parse_bounded("BLOCKFALL_TICK_MS", &v, 1, 60_000)?;
            config.tick = Duration::from_millis(ms as u64);
        }
        if let Some(v) = get("BLOCKFALL_SEED") {
            config.seed = parse_u32("BLOCKFALL_SEED", &v)?;
        }
        if let Some(v) = get("BLOCKFALL_RANDOMIZER") {
            config.randomizer =
                Randomizer::from_str(&v).ok_or(ConfigError::UnknownRandomizer(v))?;
        }
        if let Some(v) = get("BLOCKFALL_SPAWN_SCRIPT") {
            config.spawn_script = Some(parse_spawn_script(&v)?);
        }
        if let Some(v) = get("BLOCKFALL_EXIT_ON_GAME_OVER") {
            config.exit_on_game_over = v == "1" || v.eq_ignore_ascii_case("true");
        }
        config.log_path = get("BLOCKFALL_LOG_PATH");
        if let Some(v) = get("BLOCKFALL_LOG_LEVEL") {
            config.log_level = v.parse().map_err(|_| ConfigError::UnknownLogLevel(v))?;
        }

        Ok(config)
    }
}

fn parse_u32(var: &'static str, value: &str) -> Result<u32, ConfigError> {
    value.parse().map_err(|_| ConfigError::NotANumber {
        var,
        value: value.to_string(),
    })
}

fn parse_bounded(var: &'static str, value: &str, min: u32, max: u32) -> Result<u32, ConfigError> {
    let n = parse_u32(var, value)?;
    if (min..=max).contains(&n) {
        Ok(n)
    } else {
        Err(ConfigError::OutOfRange {
            var,
            value: n,
            min,
            max,
        })
    }
}

/// Parse `kind[:rotation]` entries separated by commas, e.g. `"t:east, i, o:s"`.
/// A missing rotation means north.
pub fn parse_spawn_script(value: &str) -> Result<Vec<(PieceKind, Rotation)>, ConfigError> {
    let bad = |entry: &str| ConfigError::BadSpawnScript(entry.to_string());
    let script = value
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            let (kind, rotation) = match entry.split_once(':') {
                Some((kind, rotation)) => (kind.trim(), Some(rotation.trim())),
                None => (entry, None),
            };
            let kind = PieceKind::from_str(kind).ok_or_else(|| bad(entry))?;
            let rotation = match rotation {
                Some(r) => Rotation::from_str(r).ok_or_else(|| bad(entry))?,
                None => Rotation::North,
            };
            Ok((kind, rotation))
        })
        .collect::<Result<Vec<_>, _>>()?;
    if script.is_empty() {
        return Err(bad(value));
    }
    Ok(script)
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
