use crate::consts;
use crate::game::Board;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(deny_unknown_fields)]
pub(crate) struct Config {
    /// Board geometry & game speed
    #[serde(default)]
    pub(crate) board: BoardConfig,

    /// Settings about data files
    #[serde(default)]
    pub(crate) files: FileConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join(consts::APP_DIR_NAME).join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist and
    /// `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read, if the file's contents
    /// could not be deserialized, or if a setting is out of range.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        content.parse()
    }

    fn validate(self) -> Result<Config, ConfigError> {
        let BoardConfig {
            width,
            height,
            tile_size,
            tick_ms,
        } = self.board;
        if width < 3 {
            return Err(ConfigError::invalid("board.width", "must be at least 3"));
        }
        if height < 3 {
            return Err(ConfigError::invalid("board.height", "must be at least 3"));
        }
        if tile_size < 1 {
            return Err(ConfigError::invalid(
                "board.tile-size",
                "must be at least 1",
            ));
        }
        if tick_ms < 1 {
            return Err(ConfigError::invalid("board.tick-ms", "must be at least 1"));
        }
        Ok(self)
    }

    pub(crate) fn board(&self) -> Board {
        Board::new(self.board.width, self.board.height)
    }

    pub(crate) fn tile_size(&self) -> u16 {
        self.board.tile_size
    }

    pub(crate) fn tick_period(&self) -> Duration {
        Duration::from_millis(self.board.tick_ms)
    }

    /// Return the path of the leaderboard file: the file given in the
    /// configuration or, if that is not set, a file in `data_dir`
    pub(crate) fn highscores_file(&self, data_dir: &Path) -> PathBuf {
        self.files
            .highscores_file
            .clone()
            .unwrap_or_else(|| data_dir.join(consts::HIGHSCORES_FILE_NAME))
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Config, ConfigError> {
        toml::from_str::<Config>(s)?.validate()
    }
}

/// Return the default directory for the leaderboard & log file
pub(crate) fn default_data_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_local_dir()
        .map(|p| p.join(consts::APP_DIR_NAME))
        .ok_or(ConfigError::NoPath)
}

#[derive(Clone, Copy, Deserialize, Debug, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct BoardConfig {
    /// Board width in cells
    width: u16,

    /// Board height in cells
    height: u16,

    /// Number of terminal columns each cell is drawn across
    tile_size: u16,

    /// Milliseconds per tick
    tick_ms: u64,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            width: 30,
            height: 20,
            tile_size: 2,
            tick_ms: 120,
        }
    }
}

#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub(crate) struct FileConfig {
    /// Path at which the leaderboard is stored
    highscores_file: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration or data directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid value for {key}: {reason}")]
    Invalid {
        key: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, reason: &'static str) -> ConfigError {
        ConfigError::Invalid { key, reason }
    }
}
