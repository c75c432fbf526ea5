//! Run configuration, read from a TOML file.

use std::env;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

/// The environment variable naming an explicit configuration file.
pub const CONFIG_ENV: &str = "POKEDEX_CONFIG";

/// The configuration file looked for in the working directory.
pub const LOCAL_CONFIG: &str = "pokedex.toml";

/// Every knob of a run. Each section, and each field within it, may be omitted.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
  /// Where and how to reach PokéAPI.
  pub api: ApiConfig,
  /// Which ids to fetch and how fast.
  pub fetch: FetchConfig,
  /// Where the two phases read and write.
  pub output: OutputConfig,
}

/// Remote API settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
  /// The base URL all requests are made against.
  pub base_url: String,
  /// Per-request timeout, in seconds.
  pub timeout: u64,
}

impl ApiConfig {
  /// Returns the per-request timeout.
  pub fn timeout(&self) -> Duration {
    Duration::from_secs(self.timeout)
  }
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: "https://pokeapi.co/api/v2".to_string(),
      timeout: 30,
    }
  }
}

/// Fetch phase settings.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FetchConfig {
  /// The last id to fetch; ids run from 1 up to and including this.
  pub limit: u32,
  /// The pause between consecutive ids, in milliseconds.
  pub delay_ms: u64,
}

impl FetchConfig {
  /// Returns the pause between consecutive ids.
  pub fn delay(&self) -> Duration {
    Duration::from_millis(self.delay_ms)
  }
}

impl Default for FetchConfig {
  fn default() -> Self {
    Self {
      limit: 1025,
      delay_ms: 100,
    }
  }
}

/// Output file locations.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
  /// The JSON document written by the fetch phase.
  pub document: PathBuf,
  /// The CSV table written by the flatten phase.
  pub table: PathBuf,
}

impl Default for OutputConfig {
  fn default() -> Self {
    Self {
      document: PathBuf::from("complete_pokedex.json"),
      table: PathBuf::from("pokemon_gen9.csv"),
    }
  }
}

/// A configuration loading error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
  /// The configuration file could not be read.
  #[error("failed to read {}: {}", .path.display(), .source)]
  Io {
    /// The file being read.
    path: PathBuf,
    /// The underlying error.
    source: io::Error,
  },

  /// The configuration file is not valid TOML for a [`Config`].
  #[error(transparent)]
  Parse(#[from] toml::de::Error),
}

impl Config {
  /// Loads the configuration for this run.
  ///
  /// The first file found wins: `$POKEDEX_CONFIG`, then `./pokedex.toml`, then
  /// `pokedex/config.toml` under the user's configuration directory. With no
  /// file at all, every setting takes its default.
  pub fn load() -> Result<Self, Error> {
    match Self::locate() {
      Some(path) => {
        tracing::info!("Loading configuration from {}", path.display());
        Self::from_path(&path)
      }
      None => {
        tracing::debug!("No configuration file found, using defaults");
        Ok(Self::default())
      }
    }
  }

  /// Returns the configuration file [`Config::load()`] would read, if any.
  pub fn locate() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
      return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(LOCAL_CONFIG);
    if local.exists() {
      return Some(local);
    }

    let mut user = dirs::config_dir()?;
    user.push("pokedex");
    user.push("config.toml");
    if user.exists() {
      Some(user)
    } else {
      None
    }
  }

  /// Reads the configuration from the TOML file at `path`.
  pub fn from_path(path: &Path) -> Result<Self, Error> {
    let text = fs::read_to_string(path).map_err(|source| Error::Io {
      path: path.to_path_buf(),
      source,
    })?;
    Self::from_toml(&text)
  }

  /// Parses the configuration from TOML text.
  pub fn from_toml(text: &str) -> Result<Self, Error> {
    Ok(toml::from_str(text)?)
  }
}
