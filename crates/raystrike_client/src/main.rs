use bevy::prelude::*;
use raystrike_simulation::{logger, physics, scenario, SimulationConfig, SimulationPlugin};

mod camera;
mod input_bridge;
mod logger_bridge;
mod rendering;

use camera::CameraPlugin;
use input_bridge::InputBridgePlugin;
use rendering::{NeedsVisual, RenderingSyncPlugin};

/// Пиксели: 1 world unit = 1 px при scale 1.0
const ENEMY_RADIUS: f32 = 16.0;

fn main() {
    logger::set_logger(Box::new(logger_bridge::BevyLogger));
    logger::set_log_level(logger::LogLevel::Info);

    let config = std::env::args()
        .nth(1)
        .map(|path| {
            SimulationConfig::load(&path).unwrap_or_else(|err| {
                logger::log_warning(&format!("{}; falling back to defaults", err));
                client_defaults()
            })
        })
        .unwrap_or_else(client_defaults);

    App::new()
        // Bevy defaults (rendering, input, time, etc.)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "RAYSTRIKE".to_string(),
                resolution: (1280., 720.).into(),
                ..default()
            }),
            ..default()
        }))
        // Simulation (headless ECS logic)
        .add_plugins(SimulationPlugin::with_config(config))
        // Device binding + camera projection
        .add_plugins((InputBridgePlugin, CameraPlugin))
        // Rendering sync (simulation → visuals)
        .add_plugins(RenderingSyncPlugin)
        .add_systems(Startup, setup_scene)
        .run();
}

/// Дефолты в пикселях (headless сценарий работает в метрах)
fn client_defaults() -> SimulationConfig {
    let mut config = SimulationConfig::default();
    config.enemy.radius = ENEMY_RADIUS;
    config.scenario.spawn_radius = 300.0;
    config
}

/// Camera, игрок в центре, кольцо врагов
fn setup_scene(mut commands: Commands, config: Res<SimulationConfig>) {
    commands.spawn(Camera2d);

    commands.spawn((
        scenario::player_bundle(Vec2::ZERO, &config),
        physics::circle_body(ENEMY_RADIUS),
        NeedsVisual,
    ));

    let mut rng = raystrike_simulation::DeterministicRng::new(config.scenario.seed);
    let positions = scenario::enemy_ring_positions(
        &mut rng,
        config.scenario.enemy_count,
        config.scenario.spawn_radius,
    );

    for position in positions {
        commands.spawn((scenario::enemy_bundle(position, &config), NeedsVisual));
    }
}
