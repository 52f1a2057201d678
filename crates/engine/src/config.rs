//! Demo configuration loaded from environment variables.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::Context;
use forgeworks_domain::{CharacterClass, DataKind, FurnitureLine, FurniturePiece, Loadout};

pub const CHARACTER_CLASS_VAR: &str = "FORGEWORKS_CHARACTER_CLASS";
pub const CHARACTER_NAME_VAR: &str = "FORGEWORKS_CHARACTER_NAME";
pub const DATA_KIND_VAR: &str = "FORGEWORKS_DATA_KIND";
pub const DATA_CONTENT_VAR: &str = "FORGEWORKS_DATA_CONTENT";
pub const FURNITURE_LINE_VAR: &str = "FORGEWORKS_FURNITURE_LINE";
pub const FURNITURE_PIECE_VAR: &str = "FORGEWORKS_FURNITURE_PIECE";
pub const LOADOUT_VAR: &str = "FORGEWORKS_LOADOUT";
pub const GAME_CHARACTER_NAME_VAR: &str = "FORGEWORKS_GAME_CHARACTER_NAME";

/// Which family each demo step uses, and the inputs it is given.
///
/// The defaults reproduce the reference run: a warrior named "Warrior", audio
/// data, a modern wood chair, and a mage with a staff named "Mage".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub character_class: CharacterClass,
    pub character_name: String,
    pub data_kind: DataKind,
    pub data_content: String,
    pub furniture_line: FurnitureLine,
    pub furniture_piece: FurniturePiece,
    pub loadout: Loadout,
    pub game_character_name: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            character_class: CharacterClass::Warrior,
            character_name: "Warrior".to_string(),
            data_kind: DataKind::Audio,
            data_content: "Audio data".to_string(),
            furniture_line: FurnitureLine::ModernWood,
            furniture_piece: FurniturePiece::Chair,
            loadout: Loadout::MageStaff,
            game_character_name: "Mage".to_string(),
        }
    }
}

impl DemoConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup, falling back to defaults
    /// for unset or blank keys.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Ok(Self {
            character_class: parse_or(
                get(CHARACTER_CLASS_VAR),
                CHARACTER_CLASS_VAR,
                defaults.character_class,
            )?,
            character_name: get(CHARACTER_NAME_VAR).unwrap_or(defaults.character_name),
            data_kind: parse_or(get(DATA_KIND_VAR), DATA_KIND_VAR, defaults.data_kind)?,
            data_content: get(DATA_CONTENT_VAR).unwrap_or(defaults.data_content),
            furniture_line: parse_or(
                get(FURNITURE_LINE_VAR),
                FURNITURE_LINE_VAR,
                defaults.furniture_line,
            )?,
            furniture_piece: parse_or(
                get(FURNITURE_PIECE_VAR),
                FURNITURE_PIECE_VAR,
                defaults.furniture_piece,
            )?,
            loadout: parse_or(get(LOADOUT_VAR), LOADOUT_VAR, defaults.loadout)?,
            game_character_name: get(GAME_CHARACTER_NAME_VAR)
                .unwrap_or(defaults.game_character_name),
        })
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Invalid value for {key}")),
        None => Ok(default),
    }
}

/// Load `.env.local` then `.env` from `dir` into the process environment.
///
/// Missing files are skipped. Files that fail to load are returned with their
/// error so the caller can report them once logging is up.
pub fn load_dotenv_files(dir: &Path) -> Vec<(PathBuf, dotenvy::Error)> {
    [".env.local", ".env"]
        .into_iter()
        .map(|filename| dir.join(filename))
        .filter(|path| path.exists())
        .filter_map(|path| match dotenvy::from_path(&path) {
            Ok(()) => None,
            Err(err) => Some((path, err)),
        })
        .collect()
}
