use bevy::prelude::*;
use bevy_egui::EguiContexts;
use bevy_egui::egui;

use crate::components::{Ball, Position, Trail, Velocity};

/// Read-only diagnostics overlay. Deliberately has no controls: the
/// simulation takes no user input.
pub fn diagnostics_overlay(
    mut contexts: EguiContexts,
    query: Query<(&Position, &Velocity, &Trail), With<Ball>>,
    mut frames_rendered: Local<usize>,
) {
    // Skip the first few frames while egui settles.
    if *frames_rendered < 5 {
        *frames_rendered += 1;
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut() {
        egui::Window::new("Diagnostics")
            .default_pos(egui::pos2(10.0, 10.0))
            .resizable(false)
            .show(ctx, |ui| {
                if let Ok((pos, vel, trail)) = query.single() {
                    ui.label(format!("position: ({:.0}, {:.0})", pos.x, pos.y));
                    ui.label(format!(
                        "velocity: ({:+.2}, {:+.2}) px/frame",
                        vel.x, vel.y
                    ));
                    ui.label(format!("speed: {:.2} px/frame", vel.length()));
                    ui.label(format!("trail entries: {}", trail.len()));
                }
            });
    }
}
