use std::path::Path;

use serde::{Deserialize, Deserializer};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, Seat, EMPTY_SYMBOL};

/// Name and token for one seat.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub token: char,
}

impl PlayerConfig {
    /// The built-in player for a seat.
    pub fn for_seat(seat: Seat) -> Self {
        let player = &Player::default_pair()[seat.index()];
        PlayerConfig {
            name: player.name().to_string(),
            token: player.token(),
        }
    }

    pub fn to_player(&self) -> Player {
        Player::new(self.name.clone(), self.token)
    }
}

/// A `[player_*]` table as written; missing keys fall back to the seat's
/// built-in player.
#[derive(Deserialize)]
struct PlayerSection {
    name: Option<String>,
    token: Option<char>,
}

impl PlayerSection {
    fn resolve(self, seat: Seat) -> PlayerConfig {
        let base = PlayerConfig::for_seat(seat);
        PlayerConfig {
            name: self.name.unwrap_or(base.name),
            token: self.token.unwrap_or(base.token),
        }
    }
}

fn player_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PlayerConfig, D::Error> {
    Ok(PlayerSection::deserialize(deserializer)?.resolve(Seat::One))
}

fn player_two<'de, D: Deserializer<'de>>(deserializer: D) -> Result<PlayerConfig, D::Error> {
    Ok(PlayerSection::deserialize(deserializer)?.resolve(Seat::Two))
}

/// How boards are printed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Highlight with terminal colors instead of brackets
    pub color: bool,
    /// Print the point-id key next to the grid
    pub show_key: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            color: true,
            show_key: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(deserialize_with = "player_one")]
    pub player_one: PlayerConfig,
    #[serde(deserialize_with = "player_two")]
    pub player_two: PlayerConfig,
    pub display: DisplayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            player_one: PlayerConfig::for_seat(Seat::One),
            player_two: PlayerConfig::for_seat(Seat::Two),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, player) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{seat}.name must not be empty"
                )));
            }
            if player.token.is_whitespace() || player.token.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{seat}.token must be a visible character"
                )));
            }
            if player.token == EMPTY_SYMBOL {
                return Err(ConfigError::Validation(format!(
                    "{seat}.token must not be '{EMPTY_SYMBOL}' (empty cell symbol)"
                )));
            }
        }

        if self.player_one.token == self.player_two.token {
            return Err(ConfigError::Validation(
                "player_one.token and player_two.token must differ".into(),
            ));
        }

        Ok(())
    }

    /// The two configured players, seat One first.
    pub fn players(&self) -> [Player; 2] {
        [self.player_one.to_player(), self.player_two.to_player()]
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.players(), Player::default_pair());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
[display]
color = false
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert!(!config.display.color);
        assert!(config.display.show_key);
        assert_eq!(config.player_one.name, "Player One");
        assert_eq!(config.player_two.token, 'O');
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_player_section_keeps_seat_defaults() {
        let config: AppConfig = toml::from_str("[player_one]\nname = \"Ada\"\n").unwrap();
        assert_eq!(config.player_one, PlayerConfig { name: "Ada".into(), token: 'X' });
        assert_eq!(config.player_two, PlayerConfig::for_seat(Seat::Two));

        let config: AppConfig = toml::from_str("[player_two]\ntoken = \"*\"\n").unwrap();
        assert_eq!(config.player_two.name, "Player Two");
        assert_eq!(config.player_two.token, '*');
        config.validate().unwrap();
    }

    #[test]
    fn test_validation_rejects_same_tokens() {
        let mut config = AppConfig::default();
        config.player_two.token = 'X';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_symbol_token() {
        let mut config = AppConfig::default();
        config.player_one.token = '.';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_blank_token() {
        let mut config = AppConfig::default();
        config.player_one.token = ' ';
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_rejects_empty_name() {
        let mut config = AppConfig::default();
        config.player_two.name = "   ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = AppConfig::load_or_default(Path::new("nonexistent_config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("test_config.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
[player_one]
name = "Ada"
token = "A"
"#
        )
        .unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.players()[0], Player::new("Ada", 'A'));
        assert_eq!(config.player_two, AppConfig::default().player_two);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[player_two]\nname = \"Bob\"\ntoken = \"X\"\n").unwrap();
        assert!(matches!(
            AppConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = AppConfig::default_toml();
        let config: AppConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
