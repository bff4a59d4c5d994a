//! Конфигурация симуляции (RON)
//!
//! Все секции `#[serde(default)]` — в файле можно указать только то,
//! что отличается от дефолтов:
//!
//! ```ron
//! (
//!     combat: (attack_damage: 25.0),
//!     enemy: (health: 50.0),
//! )
//! ```

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Ошибка загрузки конфига
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
}

/// Корневой конфиг (resource)
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub combat: CombatConfig,
    pub enemy: EnemyConfig,
    pub scenario: ScenarioConfig,
}

impl SimulationConfig {
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_ron_str(&source)
    }
}

/// Параметры атаки игрока
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Урон одного попадания
    pub attack_damage: f32,

    /// Длина луча (None = бесконечный луч)
    pub max_ray_distance: Option<f32>,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            attack_damage: 10.0,
            max_ray_distance: None,
        }
    }
}

impl CombatConfig {
    /// Без лимита: `f32::MAX` (spatial query не принимает бесконечность)
    pub fn ray_length(&self) -> f32 {
        self.max_ray_distance.unwrap_or(f32::MAX)
    }
}

/// Параметры врагов
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnemyConfig {
    pub health: f32,
    /// Радиус circle коллайдера
    pub radius: f32,
}

impl Default for EnemyConfig {
    fn default() -> Self {
        Self {
            health: 30.0,
            radius: 0.5,
        }
    }
}

/// Scripted headless сценарий
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub seed: u64,
    pub enemy_count: usize,
    pub spawn_radius: f32,
    /// Атака каждые N кадров
    pub attack_interval: u32,
    pub max_ticks: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_count: 5,
            spawn_radius: 6.0,
            attack_interval: 10,
            max_ticks: 1000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        let config = SimulationConfig::from_ron_str("()").unwrap();
        assert_eq!(config, SimulationConfig::default());
        assert_eq!(config.combat.attack_damage, 10.0);
        assert_eq!(config.combat.ray_length(), f32::MAX);
    }

    #[test]
    fn test_partial_override() {
        let config = SimulationConfig::from_ron_str(
            "(combat: (attack_damage: 25.0, max_ray_distance: Some(8.0)), enemy: (health: 50.0))",
        )
        .unwrap();

        assert_eq!(config.combat.attack_damage, 25.0);
        assert_eq!(config.combat.ray_length(), 8.0);
        assert_eq!(config.enemy.health, 50.0);
        // Не указанные поля — дефолты
        assert_eq!(config.enemy.radius, 0.5);
        assert_eq!(config.scenario, ScenarioConfig::default());
    }

    #[test]
    fn test_parse_error() {
        let result = SimulationConfig::from_ron_str("(combat: (attack_damage: \"ten\"))");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = SimulationConfig::load("definitely/not/here.ron");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
