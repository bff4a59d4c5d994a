//! Headless симуляция RAYSTRIKE
//!
//! Запускает Bevy App без рендера: scripted attacker против кольца врагов.
//!
//! Использование: `raystrike_simulation [config.ron]`
//! Уровень логов: `RAYSTRIKE_LOG=info|debug|warn|error`

use bevy::prelude::*;
use raystrike_simulation::{
    create_headless_app, logger, scenario, Enemy, EntityRemoved, ScenarioPlugin,
    ScriptedAttacker, SimulationConfig, SimulationPlugin,
};

fn main() {
    logger::init_logger();

    if let Some(level) = std::env::var("RAYSTRIKE_LOG")
        .ok()
        .and_then(|value| logger::LogLevel::parse(&value))
    {
        logger::set_log_level(level);
    }

    let config = match std::env::args().nth(1) {
        Some(path) => match SimulationConfig::load(&path) {
            Ok(config) => {
                logger::log_info(&format!("Loaded config from {}", path));
                config
            }
            Err(err) => {
                logger::log_warning(&format!("{}; falling back to defaults", err));
                SimulationConfig::default()
            }
        },
        None => SimulationConfig::default(),
    };

    let seed = config.scenario.seed;
    let max_ticks = config.scenario.max_ticks;
    logger::log_info(&format!("Starting RAYSTRIKE headless simulation (seed: {})", seed));

    let mut app = create_headless_app(seed);
    app.add_plugins((SimulationPlugin::with_config(config), ScenarioPlugin));
    app.finish();
    app.cleanup();
    scenario::spawn_scenario(app.world_mut());

    let mut removed_total = 0usize;

    for tick in 0..max_ticks {
        app.update();

        {
            let events = app.world().resource::<Events<EntityRemoved>>();
            // Только события этого кадра (буфер живёт два update)
            removed_total += events.iter_current_update_events().count();
        }

        let alive = app
            .world_mut()
            .query_filtered::<(), With<Enemy>>()
            .iter(app.world())
            .count();

        if tick % 100 == 0 {
            logger::log_info(&format!("Tick {}: {} enemies alive", tick, alive));
        }

        if alive == 0 {
            logger::log_info(&format!("All enemies removed at tick {}", tick));
            break;
        }
    }

    let survivors = app
        .world_mut()
        .query_filtered::<(), With<Enemy>>()
        .iter(app.world())
        .count();
    if survivors > 0 {
        logger::log_warning(&format!(
            "max_ticks ({}) reached with {} enemies still alive",
            max_ticks, survivors
        ));
    }

    let attacks = app.world().resource::<ScriptedAttacker>().attacks_issued;
    logger::log_info(&format!(
        "Simulation complete: {} attacks, {} enemies removed",
        attacks, removed_total
    ));
}
