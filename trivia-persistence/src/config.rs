use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::env;
use std::str::FromStr;

use trivia_core::{
    AchievementTables, DEFAULT_MAX_ACHIEVEMENTS_LENGTH, DEFAULT_ROUND_HISTORY_LIMIT, GameConfig,
    MilestoneTables, SeasonCalendar,
};

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub database_url: String,
    pub round_history_limit: usize,
    pub max_achievements_length: usize,
    /// Optional JSON file replacing the built-in achievement tables.
    pub achievement_tables_path: Option<String>,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://trivia.db?mode=rwc".to_string()),
            round_history_limit: parse_var("ROUND_HISTORY_LIMIT", DEFAULT_ROUND_HISTORY_LIMIT)?,
            max_achievements_length: parse_var(
                "MAX_ACHIEVEMENTS_LENGTH",
                DEFAULT_MAX_ACHIEVEMENTS_LENGTH,
            )?,
            achievement_tables_path: env::var("ACHIEVEMENT_TABLES_PATH").ok(),
        })
    }

    /// Engine configuration with seasons as of `date`.
    pub fn game_config(&self, date: NaiveDate) -> Result<GameConfig> {
        let tables = match &self.achievement_tables_path {
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read achievement tables from {}", path))?;
                serde_json::from_str::<AchievementTables>(&raw)
                    .with_context(|| format!("Invalid achievement tables in {}", path))?
            }
            None => AchievementTables::standard(),
        };

        Ok(GameConfig::new(
            tables,
            SeasonCalendar::for_date(date),
            MilestoneTables::default(),
        )
        .with_max_achievements_length(self.max_achievements_length)
        .with_round_history_limit(self.round_history_limit))
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            round_history_limit: DEFAULT_ROUND_HISTORY_LIMIT,
            max_achievements_length: DEFAULT_MAX_ACHIEVEMENTS_LENGTH,
            achievement_tables_path: None,
        }
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("Invalid {}: {}", name, value)),
        Err(_) => Ok(default),
    }
}
