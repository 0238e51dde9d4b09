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

//! The body arena: stable generational handles over rigid body storage.

use super::BodyType;
use crate::math::Vec2;
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// A stable handle to a body in a [`BodyArena`].
///
/// The generation counter distinguishes a handle to a removed body from a
/// handle to whatever later reuses the same slot: a stale handle resolves
/// to `None` forever.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode)]
pub struct BodyHandle {
    index: u32,
    generation: u32,
}

impl BodyHandle {
    /// A handle that never resolves.
    pub const INVALID: Self = Self {
        index: u32::MAX,
        generation: 0,
    };
}

/// A 2D rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Encode, Decode)]
pub struct Body {
    /// World-space position.
    pub position: Vec2,
    /// Linear velocity.
    pub linear_velocity: Vec2,
    /// Angular velocity in radians per second.
    pub angular_velocity: f32,
    /// Body type.
    pub body_type: BodyType,
}

impl Body {
    /// Creates a dynamic body at rest at `position`.
    pub fn dynamic_at(position: Vec2) -> Self {
        Self {
            position,
            linear_velocity: Vec2::ZERO,
            angular_velocity: 0.0,
            body_type: BodyType::Dynamic,
        }
    }

    /// Creates a static body at `position`.
    pub fn static_at(position: Vec2) -> Self {
        Self {
            body_type: BodyType::Static,
            ..Self::dynamic_at(position)
        }
    }
}

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    body: Option<Body>,
}

/// Generational arena of rigid bodies.
///
/// Removed slots are tombstoned (generation bumped) and recycled through a
/// free list, so handles stay `Copy` and never dangle.
#[derive(Debug, Default)]
pub struct BodyArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    len: usize,
}

impl BodyArena {
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a body and returns its stable handle.
    pub fn insert(&mut self, body: Body) -> BodyHandle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.body = Some(body);
            BodyHandle {
                index,
                generation: slot.generation,
            }
        } else {
            let index = self.slots.len() as u32;
            self.slots.push(Slot {
                generation: 0,
                body: Some(body),
            });
            BodyHandle {
                index,
                generation: 0,
            }
        }
    }

    /// Removes the body behind `handle`, returning it if the handle was
    /// live. The slot is tombstoned: the handle (and any copy of it) will
    /// never resolve again.
    pub fn remove(&mut self, handle: BodyHandle) -> Option<Body> {
        let slot = self.live_slot_mut(handle)?;
        let body = slot.body.take();
        slot.generation += 1;
        self.free.push(handle.index);
        self.len -= 1;
        body
    }

    /// Resolves a handle to its body, or `None` if the body was removed.
    pub fn get(&self, handle: BodyHandle) -> Option<&Body> {
        self.slots
            .get(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation)
            .and_then(|slot| slot.body.as_ref())
    }

    /// Mutable variant of [`get`](Self::get).
    pub fn get_mut(&mut self, handle: BodyHandle) -> Option<&mut Body> {
        self.live_slot_mut(handle)?.body.as_mut()
    }

    /// Returns `true` if `handle` still resolves to a live body.
    pub fn contains(&self, handle: BodyHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Number of live bodies.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the arena holds no live bodies.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn live_slot_mut(&mut self, handle: BodyHandle) -> Option<&mut Slot> {
        self.slots
            .get_mut(handle.index as usize)
            .filter(|slot| slot.generation == handle.generation && slot.body.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_resolve() {
        let mut arena = BodyArena::new();
        let handle = arena.insert(Body::dynamic_at(Vec2::new(1.0, 2.0)));

        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(handle).unwrap().position, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn stale_handle_never_resolves_again() {
        let mut arena = BodyArena::new();
        let handle = arena.insert(Body::dynamic_at(Vec2::ZERO));

        assert!(arena.remove(handle).is_some());
        assert!(arena.get(handle).is_none());
        assert!(!arena.contains(handle));

        // Slot reuse mints a fresh generation; the stale handle stays dead.
        let reused = arena.insert(Body::static_at(Vec2::ONE));
        assert!(arena.get(handle).is_none());
        assert!(arena.contains(reused));
        assert_ne!(handle, reused);
    }

    #[test]
    fn double_remove_is_a_no_op() {
        let mut arena = BodyArena::new();
        let handle = arena.insert(Body::dynamic_at(Vec2::ZERO));

        assert!(arena.remove(handle).is_some());
        assert!(arena.remove(handle).is_none());
        assert!(arena.is_empty());
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut arena = BodyArena::new();
        let handle = arena.insert(Body::dynamic_at(Vec2::ZERO));

        arena.get_mut(handle).unwrap().position = Vec2::new(3.0, 4.0);
        assert_eq!(arena.get(handle).unwrap().position, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn invalid_handle_resolves_to_none() {
        let arena = BodyArena::new();
        assert!(arena.get(BodyHandle::INVALID).is_none());
    }
}
