use bevy::prelude::*;
use std::collections::VecDeque;

/// Position of the ball in window space (origin top-left, +y down).
#[derive(Component, Deref, DerefMut)]
pub struct Position(pub Vec2);

/// Per-frame velocity of the ball, in pixels per tick.
#[derive(Component, Deref, DerefMut)]
pub struct Velocity(pub Vec2);

/// Per-frame acceleration, added into velocity after each displacement.
#[derive(Component, Deref, DerefMut)]
pub struct Acceleration(pub Vec2);

/// Collision radius of the ball.
#[derive(Component, Deref, DerefMut)]
pub struct Radius(pub f32);

/// Marker for the single simulated ball.
#[derive(Component)]
pub struct Ball;

/// Marker for one pooled trail presentation entity. `slot` is the entry's
/// age index counted from the oldest entry (slot 0 = oldest).
#[derive(Component)]
pub struct TrailDot {
    pub slot: usize,
}

/// One frozen snapshot of the ball's position, taken once per tick.
/// Never aliases the live kinematic state.
#[derive(Clone, Copy, Debug)]
pub struct TrailEntry {
    pub position: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Bounded FIFO history of past ball positions.
#[derive(Component)]
pub struct Trail {
    entries: VecDeque<TrailEntry>,
    max_len: usize,
}

impl Trail {
    pub fn bounded(max_len: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_len),
            max_len,
        }
    }

    /// Appends a snapshot, evicting the oldest entry when full.
    pub fn push(&mut self, entry: TrailEntry) {
        self.entries.push_back(entry);
        if self.entries.len() > self.max_len {
            self.entries.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrailEntry> {
        self.entries.iter()
    }

    /// Read-only projection of the trail as drawable shapes, oldest first.
    ///
    /// An entry at rank `i` counted from the newest fades by
    /// `decay = 1 - i / len`: both its radius and its alpha channel are
    /// scaled by `decay`, on a fresh copy. Stored entries are never mutated.
    pub fn decayed_shapes(&self) -> impl Iterator<Item = TrailEntry> + '_ {
        let len = self.entries.len();
        self.entries.iter().enumerate().map(move |(age_index, entry)| {
            let rank_from_newest = len - age_index - 1;
            let decay = 1.0 - rank_from_newest as f32 / len as f32;
            TrailEntry {
                position: entry.position,
                radius: entry.radius * decay,
                color: entry.color.with_alpha(entry.color.alpha() * decay),
            }
        })
    }
}
