// Copyright 2026 the Vireo contributors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Wheel joint over arena-resolved bodies.

use super::arena::{BodyArena, BodyHandle};
use crate::math::Vec2;
use serde::{Deserialize, Serialize};

/// A wheel joint: constrains `body_b` to a suspension axis fixed in
/// `body_a`'s frame, with a spring along that axis.
///
/// The joint stores body *handles*, not references. Every query resolves
/// them through the arena and returns `None` when either body has been
/// destroyed; a dead joint is inert, never dangling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelJoint {
    body_a: BodyHandle,
    body_b: BodyHandle,
    local_anchor_a: Vec2,
    local_anchor_b: Vec2,
    axis: Vec2,
    /// Suspension spring frequency in hertz.
    pub frequency_hz: f32,
    /// Suspension damping ratio (1.0 = critically damped).
    pub damping_ratio: f32,
}

impl WheelJoint {
    /// Creates a wheel joint at the world-space `anchor` with suspension
    /// along `axis` (normalized internally; a zero axis falls back to +Y).
    ///
    /// Both handles must be live at creation time; the anchor is captured
    /// relative to each body's current position.
    pub fn new(
        arena: &BodyArena,
        body_a: BodyHandle,
        body_b: BodyHandle,
        anchor: Vec2,
        axis: Vec2,
    ) -> Option<Self> {
        let a = arena.get(body_a)?;
        let b = arena.get(body_b)?;
        let axis = axis.normalize();
        Some(Self {
            body_a,
            body_b,
            local_anchor_a: anchor - a.position,
            local_anchor_b: anchor - b.position,
            axis: if axis == Vec2::ZERO { Vec2::Y } else { axis },
            frequency_hz: 4.0,
            damping_ratio: 0.7,
        })
    }

    /// Handle of the frame body.
    pub fn body_a(&self) -> BodyHandle {
        self.body_a
    }

    /// Handle of the wheel body.
    pub fn body_b(&self) -> BodyHandle {
        self.body_b
    }

    /// The suspension axis in `body_a`'s frame (unit length).
    pub fn axis(&self) -> Vec2 {
        self.axis
    }

    /// World-space anchor on `body_a`, or `None` if the body is gone.
    pub fn anchor_a(&self, arena: &BodyArena) -> Option<Vec2> {
        Some(arena.get(self.body_a)?.position + self.local_anchor_a)
    }

    /// World-space anchor on `body_b`, or `None` if the body is gone.
    pub fn anchor_b(&self, arena: &BodyArena) -> Option<Vec2> {
        Some(arena.get(self.body_b)?.position + self.local_anchor_b)
    }

    /// Current suspension travel: the separation of the two anchors
    /// projected onto the axis. `None` if either body is gone.
    pub fn translation(&self, arena: &BodyArena) -> Option<f32> {
        let a = self.anchor_a(arena)?;
        let b = self.anchor_b(arena)?;
        Some((b - a).dot(self.axis))
    }

    /// Returns `true` when either body no longer resolves; an orphaned
    /// joint should be discarded by its owner.
    pub fn is_orphaned(&self, arena: &BodyArena) -> bool {
        !(arena.contains(self.body_a) && arena.contains(self.body_b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::Body;
    use approx::assert_relative_eq;

    fn car_setup() -> (BodyArena, BodyHandle, BodyHandle, WheelJoint) {
        let mut arena = BodyArena::new();
        let chassis = arena.insert(Body::dynamic_at(Vec2::new(0.0, 2.0)));
        let wheel = arena.insert(Body::dynamic_at(Vec2::new(0.0, 1.0)));
        let joint =
            WheelJoint::new(&arena, chassis, wheel, Vec2::new(0.0, 1.0), Vec2::Y).unwrap();
        (arena, chassis, wheel, joint)
    }

    #[test]
    fn creation_requires_live_bodies() {
        let mut arena = BodyArena::new();
        let a = arena.insert(Body::static_at(Vec2::ZERO));
        let b = arena.insert(Body::dynamic_at(Vec2::X));
        arena.remove(a);
        assert!(WheelJoint::new(&arena, a, b, Vec2::ZERO, Vec2::Y).is_none());
        assert!(WheelJoint::new(&arena, BodyHandle::INVALID, b, Vec2::ZERO, Vec2::Y).is_none());
    }

    #[test]
    fn anchors_track_body_positions() {
        let (mut arena, _chassis, wheel, joint) = car_setup();

        assert_eq!(joint.anchor_a(&arena), Some(Vec2::new(0.0, 1.0)));
        assert_eq!(joint.anchor_b(&arena), Some(Vec2::new(0.0, 1.0)));
        assert_relative_eq!(joint.translation(&arena).unwrap(), 0.0);

        // Compress the suspension by moving the wheel up.
        arena.get_mut(wheel).unwrap().position = Vec2::new(0.0, 1.25);
        assert_relative_eq!(joint.translation(&arena).unwrap(), 0.25);
    }

    #[test]
    fn destroyed_body_tombstones_the_joint() {
        let (mut arena, _chassis, wheel, joint) = car_setup();
        assert!(!joint.is_orphaned(&arena));

        arena.remove(wheel);
        assert!(joint.is_orphaned(&arena));
        assert!(joint.anchor_b(&arena).is_none());
        assert!(joint.translation(&arena).is_none());
        // The surviving body still resolves.
        assert!(joint.anchor_a(&arena).is_some());
    }

    #[test]
    fn axis_is_normalized() {
        let mut arena = BodyArena::new();
        let a = arena.insert(Body::static_at(Vec2::ZERO));
        let b = arena.insert(Body::dynamic_at(Vec2::X));
        let joint = WheelJoint::new(&arena, a, b, Vec2::ZERO, Vec2::new(0.0, 5.0)).unwrap();
        assert_relative_eq!(joint.axis().length(), 1.0, epsilon = crate::math::EPSILON);
    }
}
