use bevy::prelude::*;

// --- Simulation Defaults ---
/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1000;
/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 1000;
/// Default ball radius.
pub const DEFAULT_BALL_RADIUS: f32 = 80.0;
/// Base radius of a freshly recorded trail entry.
pub const DEFAULT_TRAIL_START_RADIUS: f32 = 25.0;
/// Maximum stored trail entries.
pub const DEFAULT_TRAIL_MAX_LENGTH: usize = 100;
/// Downward acceleration added to velocity every tick.
pub const DEFAULT_GRAVITY: f32 = 0.2;
/// Velocity/acceleration scale factor on each wall bounce.
pub const DEFAULT_DAMPING: f32 = 0.95;
/// Per-tick geometric decay of the launch acceleration.
pub const DEFAULT_ACCELERATION_DECAY: f32 = 0.99;
/// Launch velocity in pixels per tick.
pub const DEFAULT_INITIAL_VELOCITY: Vec2 = Vec2::new(10.0, 5.0);
/// Launch acceleration in pixels per tick squared.
pub const DEFAULT_INITIAL_ACCELERATION: Vec2 = Vec2::new(0.1, 0.1);

/// All tunable simulation parameters, fixed at startup.
#[derive(Resource, Clone)]
pub struct SimConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub background_color: Color,
    pub ball_radius: f32,
    pub ball_color: Color,
    pub trail_enabled: bool,
    pub trail_start_radius: f32,
    pub trail_color: Color,
    pub trail_max_length: usize,
    pub gravity: f32,
    pub damping: f32,
    /// Per-tick geometric decay applied to acceleration; `None` leaves the
    /// acceleration untouched between bounces.
    pub acceleration_decay: Option<f32>,
    pub initial_position: Vec2,
    pub initial_velocity: Vec2,
    pub initial_acceleration: Vec2,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            background_color: Color::srgb_u8(16, 16, 16),
            ball_radius: DEFAULT_BALL_RADIUS,
            ball_color: Color::WHITE,
            trail_enabled: true,
            trail_start_radius: DEFAULT_TRAIL_START_RADIUS,
            trail_color: Color::srgba_u8(0, 255, 255, 100),
            trail_max_length: DEFAULT_TRAIL_MAX_LENGTH,
            gravity: DEFAULT_GRAVITY,
            damping: DEFAULT_DAMPING,
            acceleration_decay: Some(DEFAULT_ACCELERATION_DECAY),
            initial_position: Vec2::new(
                DEFAULT_WINDOW_WIDTH as f32 / 2.0,
                DEFAULT_WINDOW_HEIGHT as f32 / 2.0,
            ),
            initial_velocity: DEFAULT_INITIAL_VELOCITY,
            initial_acceleration: DEFAULT_INITIAL_ACCELERATION,
        }
    }
}

/// Live window extents in logical pixels, refreshed at the top of every
/// tick so a resize takes effect on the very next collision check.
#[derive(Resource, Clone, Copy)]
pub struct WindowExtents {
    pub size: Vec2,
}

impl Default for WindowExtents {
    fn default() -> Self {
        Self {
            size: Vec2::new(DEFAULT_WINDOW_WIDTH as f32, DEFAULT_WINDOW_HEIGHT as f32),
        }
    }
}
