mod components;
mod resources;
mod systems;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::{EguiPlugin, EguiPrimaryContextPass};

use crate::resources::{SimConfig, WindowExtents};
use crate::systems::*;

fn main() -> AppExit {
    let config = SimConfig::default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bouncy Ball".into(),
                resolution: WindowResolution::new(config.window_width, config.window_height),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(config.background_color))
        .insert_resource(WindowExtents {
            size: Vec2::new(config.window_width as f32, config.window_height as f32),
        })
        .insert_resource(config)
        .add_systems(Startup, setup_scene)
        .add_systems(
            Update,
            // One physics step per rendered frame, strictly in this order.
            (
                refresh_window_extents,
                integrate_motion,
                resolve_wall_collisions,
                record_trail,
                sync_ball_transform,
                sync_trail_dots,
            )
                .chain(),
        )
        .add_systems(EguiPrimaryContextPass, diagnostics_overlay)
        .run()
}
