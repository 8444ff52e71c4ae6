use carousel_core::CarouselLayout;
use derive_more::{AsRef, Deref, Display, From, Into};
use directories::ProjectDirs;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use palette::{Srgb, Srgba};
use serde::{Deserialize, Serialize};
use serde_with::{DeserializeFromStr, SerializeDisplay};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use strum::{Display as StrumDisplay, EnumString};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, StrumDisplay)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum NamedColor {
    Purple,
    Blue,
    Green,
    Orange,
    Yellow,
    Red,
}

impl NamedColor {
    pub fn rgb(&self) -> Srgb<u8> {
        match self {
            Self::Purple => Srgb::new(175, 82, 222),
            Self::Blue => Srgb::new(0, 122, 255),
            Self::Green => Srgb::new(52, 199, 89),
            Self::Orange => Srgb::new(255, 149, 0),
            Self::Yellow => Srgb::new(255, 204, 0),
            Self::Red => Srgb::new(255, 59, 48),
        }
    }
}

/// Card background, written either as a color name or `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, DeserializeFromStr, SerializeDisplay)]
pub struct CardColor(Srgb<u8>);

#[derive(Error, Debug)]
#[error("'{0}' is neither a known color name nor a #rrggbb value")]
pub struct ColorParseError(String);

impl FromStr for CardColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NamedColor::from_str(s)
            .map(|named| named.rgb())
            .or_else(|_| Srgb::from_str(s))
            .map(Self)
            .map_err(|_| ColorParseError(s.to_string()))
    }
}

impl fmt::Display for CardColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = self.0.into_components();
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl From<NamedColor> for CardColor {
    fn from(named: NamedColor) -> Self {
        Self(named.rgb())
    }
}

impl CardColor {
    pub fn to_srgba(self) -> Srgba<f64> {
        let (r, g, b) = self.0.into_format::<f64>().into_components();
        Srgba::new(r, g, b, 1.0)
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct CardTitle(String);

impl CardTitle {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CardConfig {
    pub title: CardTitle,
    pub color: CardColor,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub layout: CarouselLayout,
    #[serde(default = "sample_cards")]
    pub cards: Vec<CardConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            layout: CarouselLayout::default(),
            cards: sample_cards(),
        }
    }
}

fn sample_cards() -> Vec<CardConfig> {
    use NamedColor::*;

    [Purple, Blue, Green, Orange, Yellow, Red, Purple]
        .into_iter()
        .enumerate()
        .map(|(i, color)| CardConfig {
            title: CardTitle::new(format!("testing {i}")),
            color: color.into(),
        })
        .collect()
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("Config at {0} lists no cards")]
    NoCards(PathBuf),
    #[error("Notify error: {0}")]
    Notify(#[from] notify::Error),
}

pub fn resolve_config_path(explicit: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let proj_dirs = ProjectDirs::from("org", "carousel", "carousel")
        .ok_or(ConfigError::ConfigDirNotFound)?;
    Ok(proj_dirs.config_dir().join("config.toml"))
}

/// `CAROUSEL_LAYOUT__SPACING=8` overrides `layout.spacing`.
fn environment() -> config::Environment {
    config::Environment::with_prefix("CAROUSEL")
        .prefix_separator("_")
        .separator("__")
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    load_config_with(path, environment())
}

fn load_config_with(path: &Path, env: config::Environment) -> Result<Config, ConfigError> {
    let s = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(env)
        .build()?;

    let config: Config = s.try_deserialize()?;
    if config.cards.is_empty() {
        return Err(ConfigError::NoCards(path.to_path_buf()));
    }
    Ok(config)
}

pub fn load_or_default(path: &Path) -> Config {
    load_or_default_with(path, environment())
}

fn load_or_default_with(path: &Path, env: config::Environment) -> Config {
    if !path.exists() {
        log::info!("No config at {}, using sample cards", path.display());
    }

    load_config_with(path, env).unwrap_or_else(|e| {
        log::warn!("{e}, falling back to sample cards");
        Config::default()
    })
}

pub fn write_default_config(path: &Path) -> std::io::Result<PathBuf> {
    if let Some(parent) = path.parent() {
        fs_err::create_dir_all(parent)?;
    }
    if !path.exists() {
        fs_err::write(path, DEFAULT_CONFIG)?;
    }
    Ok(path.to_path_buf())
}

const DEFAULT_CONFIG: &str = include_str!("default_config.toml");

use crate::events::AppEvent;
use async_channel::Sender;

pub async fn run_async_watcher(config_path: PathBuf, tx: Sender<AppEvent>) {
    let config_dir = match config_path.parent() {
        Some(p) => p.to_path_buf(),
        None => return,
    };

    if let Err(e) = fs_err::create_dir_all(&config_dir) {
        log::error!("Failed to create config directory for watching: {}", e);
        return;
    }

    let (bridge_tx, bridge_rx) = async_channel::unbounded();

    let mut watcher = match RecommendedWatcher::new(
        move |res| {
            let _ = bridge_tx.send_blocking(res);
        },
        notify::Config::default(),
    ) {
        Ok(w) => w,
        Err(e) => {
            log::error!("Failed to create watcher: {}", ConfigError::from(e));
            return;
        }
    };

    if let Err(e) = watcher.watch(&config_dir, RecursiveMode::NonRecursive) {
        log::error!("Failed to watch config directory: {}", e);
        return;
    }

    while let Ok(res) = bridge_rx.recv().await {
        match res {
            Ok(event) => {
                let meaningful_event = matches!(
                    event.kind,
                    EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
                );

                if meaningful_event
                    && event.paths.iter().any(|p| p == &config_path)
                    && tx.send(AppEvent::ConfigReload).await.is_err()
                {
                    break;
                }
            }
            Err(e) => log::error!("Watch error: {}", e),
        }
    }
}
