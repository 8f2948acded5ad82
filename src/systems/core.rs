use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::*;
use crate::resources::*;

/// Z layer of the ball mesh; trail dots stack strictly below it.
const BALL_Z: f32 = 1.0;
/// Z spacing between consecutive trail dots, newest on top.
const TRAIL_DOT_Z_STEP: f32 = 1e-3;

/// Converts a window-space point (origin top-left, +y down) into bevy
/// world space (origin at window center, +y up).
pub fn window_to_world(point: Vec2, extents: Vec2) -> Vec2 {
    Vec2::new(point.x - extents.x / 2.0, extents.y / 2.0 - point.y)
}

/// Spawns the camera, the ball, and the pooled trail presentation entities.
pub fn setup_scene(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    config: Res<SimConfig>,
) {
    commands.spawn(Camera2d);

    commands.spawn((
        Mesh2d(meshes.add(Circle::new(config.ball_radius))),
        MeshMaterial2d(materials.add(ColorMaterial::from(config.ball_color))),
        Transform::from_translation(Vec3::new(0.0, 0.0, BALL_Z)),
        Ball,
        Position(config.initial_position),
        Velocity(config.initial_velocity),
        Acceleration(config.initial_acceleration),
        Radius(config.ball_radius),
        Trail::bounded(config.trail_max_length),
    ));

    if !config.trail_enabled {
        return;
    }

    // One presentation entity per possible trail entry. Each gets its own
    // material so its alpha can fade independently.
    let dot_mesh = meshes.add(Circle::new(1.0));
    for slot in 0..config.trail_max_length {
        commands.spawn((
            Mesh2d(dot_mesh.clone()),
            MeshMaterial2d(materials.add(ColorMaterial::from(config.trail_color))),
            Transform::default(),
            Visibility::Hidden,
            TrailDot { slot },
        ));
    }
}

/// Copies the live window size into `WindowExtents`. Runs first in the
/// tick so the physics never acts on a stale size after a resize.
pub fn refresh_window_extents(
    window: Query<&Window, With<PrimaryWindow>>,
    mut extents: ResMut<WindowExtents>,
) {
    if let Ok(window) = window.single() {
        extents.size = Vec2::new(window.width(), window.height());
    }
}

/// Advances the ball by one tick: gravity, truncated displacement, then
/// acceleration and its optional decay.
///
/// The displacement is `velocity.trunc()`, not `velocity`: sub-pixel
/// velocity moves nothing, which is what lets the ball visibly settle.
/// Acceleration is added after the displacement, so it only affects the
/// next tick's motion.
pub fn integrate_motion(
    mut query: Query<(&mut Position, &mut Velocity, &mut Acceleration), With<Ball>>,
    config: Res<SimConfig>,
) {
    for (mut pos, mut vel, mut acc) in &mut query {
        vel.y += config.gravity;
        pos.0 += vel.trunc();
        vel.0 += acc.0;
        if let Some(decay) = config.acceleration_decay {
            acc.0 *= decay;
        }
    }
}

/// Reflects one axis off a wall: clamp the center back inside, then
/// negate and damp both velocity and acceleration on that axis.
fn bounce_axis(center: &mut f32, velocity: &mut f32, accel: &mut f32, radius: f32, extent: f32, damping: f32) {
    if *center - radius < 0.0 {
        *center = radius;
        *velocity = -*velocity * damping;
        *accel = -*accel * damping;
    } else if *center + radius > extent {
        *center = extent - radius;
        *velocity = -*velocity * damping;
        *accel = -*accel * damping;
    }
}

/// Resolves wall collisions in the same tick as the displacement.
/// Axes are independent; a corner hit bounces both in one call.
/// Afterward the ball is always fully contained in the window.
pub fn resolve_wall_collisions(
    mut query: Query<(&mut Position, &mut Velocity, &mut Acceleration, &Radius), With<Ball>>,
    extents: Res<WindowExtents>,
    config: Res<SimConfig>,
) {
    for (mut pos, mut vel, mut acc, radius) in &mut query {
        bounce_axis(
            &mut pos.x,
            &mut vel.x,
            &mut acc.x,
            radius.0,
            extents.size.x,
            config.damping,
        );
        bounce_axis(
            &mut pos.y,
            &mut vel.y,
            &mut acc.y,
            radius.0,
            extents.size.y,
            config.damping,
        );
    }
}

/// Snapshots the ball's post-step position into the trail buffer.
pub fn record_trail(
    mut query: Query<(&Position, &mut Trail), With<Ball>>,
    config: Res<SimConfig>,
) {
    if !config.trail_enabled {
        return;
    }

    for (pos, mut trail) in &mut query {
        trail.push(TrailEntry {
            position: pos.0,
            radius: config.trail_start_radius,
            color: config.trail_color,
        });
    }
}

/// Mirrors the ball's window-space position into its render transform.
pub fn sync_ball_transform(
    mut query: Query<(&Position, &mut Transform), With<Ball>>,
    extents: Res<WindowExtents>,
) {
    for (pos, mut transform) in &mut query {
        transform.translation = window_to_world(pos.0, extents.size).extend(BALL_Z);
    }
}

/// Feeds the decayed trail projection into the pooled dot entities:
/// position and scale from the faded shape, alpha into the dot's own
/// material, z so newer dots paint over older ones (and the ball over
/// all of them). Slots past the current trail length stay hidden.
pub fn sync_trail_dots(
    trail_query: Query<&Trail, With<Ball>>,
    mut dots: Query<(
        &TrailDot,
        &mut Transform,
        &mut Visibility,
        &MeshMaterial2d<ColorMaterial>,
    )>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    extents: Res<WindowExtents>,
) {
    let Ok(trail) = trail_query.single() else {
        return;
    };
    let shapes: Vec<TrailEntry> = trail.decayed_shapes().collect();

    for (dot, mut transform, mut visibility, material_handle) in &mut dots {
        match shapes.get(dot.slot) {
            Some(shape) => {
                let z = (dot.slot + 1) as f32 * TRAIL_DOT_Z_STEP;
                transform.translation = window_to_world(shape.position, extents.size).extend(z);
                transform.scale = Vec3::splat(shape.radius);
                if let Some(material) = materials.get_mut(&material_handle.0) {
                    material.color = shape.color;
                }
                *visibility = Visibility::Visible;
            }
            None => {
                *visibility = Visibility::Hidden;
            }
        }
    }
}
