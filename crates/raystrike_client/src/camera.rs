use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use raystrike_simulation::{FrameSet, ScreenProjection};

/// Каждый кадр копирует параметры 2D камеры в `ScreenProjection`
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreUpdate, sync_screen_projection.before(FrameSet::Sample));
    }
}

/// Camera2d + ScalingMode::WindowSize: 1 world unit = `scale` пикселей⁻¹
fn sync_screen_projection(
    cameras: Query<(&GlobalTransform, &Projection), With<Camera2d>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    mut projection: ResMut<ScreenProjection>,
) {
    let Ok((transform, camera_projection)) = cameras.single() else {
        return;
    };
    let Ok(window) = windows.single() else {
        return;
    };

    let scale = match camera_projection {
        Projection::Orthographic(ortho) => ortho.scale,
        _ => 1.0,
    };

    let next = ScreenProjection::Orthographic {
        center: transform.translation().truncate(),
        viewport_size: window.size(),
        scale,
    };

    // Не дёргаем change detection без нужды
    if *projection != next {
        *projection = next;
    }
}
