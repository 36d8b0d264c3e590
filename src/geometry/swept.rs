use glam::Vec2;

use super::{Aabb, CONTACT_SKIN, VELOCITY_EPSILON};

/// Result of sweeping one box against another over a single tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    /// Fraction of the tick's motion completed before first contact, in `[0, 1]`.
    pub time: f32,
    /// Axis-aligned contact normal facing against the approach, or zero on a miss.
    pub normal: Vec2,
}

impl Sweep {
    pub const MISS: Sweep = Sweep {
        time: 1.0,
        normal: Vec2::ZERO,
    };

    pub fn is_contact(&self) -> bool {
        self.normal != Vec2::ZERO
    }
}

/// Entry and exit gaps along one axis. `near` is the moving box's span,
/// `far` the stationary box's span, both as `(min, max)`.
fn axis_gaps(velocity: f32, near: (f32, f32), far: (f32, f32)) -> (f32, f32) {
    let (entry, exit) = if velocity > 0.0 {
        (far.0 - near.1, far.1 - near.0)
    } else {
        (far.1 - near.0, far.0 - near.1)
    };
    // A hair of overlap is a box resting on the surface, not inside it.
    if entry < 0.0 && entry > -CONTACT_SKIN {
        (0.0, exit)
    } else {
        (entry, exit)
    }
}

/// Gap distances turned into tick fractions. A still axis never starts
/// nor ends a contact, so it gets infinite bounds.
fn axis_times(entry_gap: f32, exit_gap: f32, velocity: f32) -> (f32, f32) {
    if velocity.abs() <= VELOCITY_EPSILON {
        (f32::NEG_INFINITY, f32::INFINITY)
    } else {
        (entry_gap / velocity, exit_gap / velocity)
    }
}

fn axis_normal(entry_gap: f32) -> f32 {
    if entry_gap < 0.0 {
        1.0
    } else {
        -1.0
    }
}

/// Swept AABB test of `moving` travelling by `velocity` against a
/// `stationary` box.
///
/// Works in inverse-velocity space: each axis yields the tick fraction at
/// which the boxes start and stop overlapping on it, and contact lasts from
/// the later entry to the earlier exit. The contact normal lies on the axis
/// that entered last; if both axes enter at the same time the y axis wins.
pub fn swept(moving: &Aabb, stationary: &Aabb, velocity: Vec2) -> Sweep {
    let (entry_gap_x, exit_gap_x) = axis_gaps(
        velocity.x,
        (moving.left(), moving.right()),
        (stationary.left(), stationary.right()),
    );
    let (entry_gap_y, exit_gap_y) = axis_gaps(
        velocity.y,
        (moving.top(), moving.bottom()),
        (stationary.top(), stationary.bottom()),
    );

    let (mut entry_x, exit_x) = axis_times(entry_gap_x, exit_gap_x, velocity.x);
    let (mut entry_y, exit_y) = axis_times(entry_gap_y, exit_gap_y, velocity.y);

    // Entering after the tick ends counts as not entering on that axis.
    if entry_x > 1.0 {
        entry_x = f32::NEG_INFINITY;
    }
    if entry_y > 1.0 {
        entry_y = f32::NEG_INFINITY;
    }

    let entry_time = entry_x.max(entry_y);
    let exit_time = exit_x.min(exit_y);

    if entry_time > exit_time || (entry_x < 0.0 && entry_y < 0.0) {
        return Sweep::MISS;
    }

    // An axis without a forward entry must already overlap, or the motion
    // only grazes past a corner.
    if entry_x < 0.0 && (moving.right() < stationary.left() || moving.left() > stationary.right())
    {
        return Sweep::MISS;
    }
    if entry_y < 0.0 && (moving.bottom() < stationary.top() || moving.top() > stationary.bottom())
    {
        return Sweep::MISS;
    }

    let mut normal = Vec2::new(axis_normal(entry_gap_x), axis_normal(entry_gap_y));
    if entry_x > entry_y {
        normal.y = 0.0;
    } else {
        normal.x = 0.0;
    }

    Sweep {
        time: entry_time,
        normal,
    }
}
