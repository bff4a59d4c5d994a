use bevy::math::Isometry2d;
use bevy::prelude::*;
use raystrike_simulation::{AttackOutcome, AttackResolved, Enemy, Health, Player};

/// Визуализация поверх симуляции: спрайты, health bars, лучи атак
pub struct RenderingSyncPlugin;

impl Plugin for RenderingSyncPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RecentAttacks>().add_systems(
            Update,
            (
                spawn_visuals_for_new_entities,
                collect_attacks,
                draw_health_bars,
                draw_attack_rays,
            )
                .chain(),
        );
    }
}

/// Marker: simulation entity needs visual representation
#[derive(Component)]
pub struct NeedsVisual;

/// Сколько кадров держим луч на экране
const RAY_LIFETIME_FRAMES: u32 = 12;

#[derive(Resource, Default)]
struct RecentAttacks {
    rays: Vec<(AttackResolved, u32)>,
}

/// Спрайт прямо на simulation entity: despawn цели убирает и визуал
fn spawn_visuals_for_new_entities(
    mut commands: Commands,
    query: Query<(Entity, Has<Player>, Has<Enemy>), With<NeedsVisual>>,
) {
    for (entity, is_player, is_enemy) in query.iter() {
        let color = if is_player {
            Color::srgb(0.2, 0.5, 0.9)
        } else if is_enemy {
            Color::srgb(0.85, 0.25, 0.2)
        } else {
            Color::srgb(0.5, 0.5, 0.5)
        };

        commands
            .entity(entity)
            .remove::<NeedsVisual>()
            .insert(Sprite::from_color(color, Vec2::splat(32.0)));
    }
}

fn collect_attacks(mut events: EventReader<AttackResolved>, mut recent: ResMut<RecentAttacks>) {
    recent.rays.retain_mut(|(_, age)| {
        *age += 1;
        *age < RAY_LIFETIME_FRAMES
    });
    recent.rays.extend(events.read().map(|event| (*event, 0)));
}

fn draw_health_bars(query: Query<(&Health, &Transform)>, mut gizmos: Gizmos) {
    const BAR_WIDTH: f32 = 36.0;
    const BAR_HEIGHT: f32 = 4.0;

    for (health, transform) in query.iter() {
        let fraction = health.fraction();
        let position = transform.translation.truncate() + Vec2::new(0.0, 26.0);

        gizmos.rect_2d(
            Isometry2d::from_translation(position),
            Vec2::new(BAR_WIDTH, BAR_HEIGHT),
            Color::srgb(0.8, 0.2, 0.2),
        );

        if fraction > 0.0 {
            let fg_position = position - Vec2::X * (BAR_WIDTH * (1.0 - fraction) * 0.5);
            gizmos.rect_2d(
                Isometry2d::from_translation(fg_position),
                Vec2::new(BAR_WIDTH * fraction, BAR_HEIGHT),
                Color::srgb(0.2, 0.8, 0.2),
            );
        }
    }
}

fn draw_attack_rays(recent: Res<RecentAttacks>, mut gizmos: Gizmos) {
    const MISS_LENGTH: f32 = 2000.0;

    for (attack, _) in recent.rays.iter() {
        let Some(direction) = attack.direction else {
            continue;
        };

        let end = attack
            .impact
            .unwrap_or(attack.origin + direction * MISS_LENGTH);

        let color = match attack.outcome {
            AttackOutcome::Hit(_) => Color::srgb(1.0, 0.9, 0.2),
            AttackOutcome::NotDamageable(_) => Color::srgb(0.6, 0.6, 0.6),
            AttackOutcome::Missed | AttackOutcome::Skipped => Color::srgb(0.4, 0.4, 0.8),
        };

        gizmos.line_2d(attack.origin, end, color);
    }
}
