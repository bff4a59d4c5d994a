//! RAYSTRIKE Simulation Core
//!
//! ECS-симуляция на Bevy 0.16: input → attack raycast → health/removal.
//! Коллайдеры и raycast — avian2d.
//!
//! Порядок внутри кадра (FrameSet):
//! - PreUpdate / avian PhysicsSet — Transform → Position, spatial query pipeline
//! - PreUpdate / Sample — device events буферизуются в InputSampler
//! - Update / до Act — новые тела получают Position, pipeline пересобирается
//! - Update / Act — attack_on_edge читает edge и пускает луч
//! - Update / React — apply_damage, despawn_removed
//! - Last / FrameEnd — attack edge сбрасывается
//!
//! set → consume → clear, никогда не переставляется.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

pub mod combat;
pub mod components;
pub mod config;
pub mod input;
pub mod logger;
pub mod physics;
pub mod scenario;

pub use combat::{
    AttackOutcome, AttackResolved, CombatPlugin, DamageDealt, DamageRequest, EntityRemoved,
};
pub use components::*;
pub use config::{CombatConfig, ConfigError, EnemyConfig, ScenarioConfig, SimulationConfig};
pub use input::{InputEvent, InputSampler, PlayerInputPlugin, ScreenProjection};
pub use physics::{cast_attack_ray, RayHit, SimulationPhysicsPlugin};
pub use scenario::{ScenarioPlugin, ScriptedAttacker};

/// Фазы кадра
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// PreUpdate: device events → InputSampler
    Sample,
    /// Update: потребители attack edge
    Act,
    /// Update: реакция на урон
    React,
    /// Last: граница конца кадра
    FrameEnd,
}

/// Главный plugin симуляции (объединяет все подсистемы)
#[derive(Default)]
pub struct SimulationPlugin {
    pub config: SimulationConfig,
}

impl SimulationPlugin {
    pub fn with_config(config: SimulationConfig) -> Self {
        Self { config }
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .configure_sets(Update, (FrameSet::Act, FrameSet::React).chain())
            .add_plugins((SimulationPhysicsPlugin, PlayerInputPlugin, CombatPlugin));
    }
}

/// Детерминистичный RNG resource (seeded)
#[derive(Resource)]
pub struct DeterministicRng {
    pub rng: ChaCha8Rng,
    pub seed: u64,
}

impl DeterministicRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// TransformPlugin нужен avian'у (GlobalTransform → Position).
/// После добавления plugin'ов вызвать `app.finish()` + `app.cleanup()`.
pub fn create_headless_app(seed: u64) -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins((MinimalPlugins, TransformPlugin))
        .insert_resource(DeterministicRng::new(seed));

    app
}

/// Snapshot мира для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
