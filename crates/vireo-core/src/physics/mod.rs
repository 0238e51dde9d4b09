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

//! # 2D Physics Ownership Model
//!
//! Bodies live in an explicit [`BodyArena`] and are referenced everywhere
//! else by stable [`BodyHandle`]s, never by owning or weak references.
//! A joint holding a handle to a destroyed body resolves to `None` rather
//! than dangling; the solver that would consume these types lives in a
//! provider crate.

use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

pub mod arena;
pub mod joint;

pub use arena::{Body, BodyArena, BodyHandle};
pub use joint::WheelJoint;

/// Defines the type of a rigid body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Encode, Decode)]
pub enum BodyType {
    /// Responds to forces and collisions.
    Dynamic,
    /// Fixed in place, does not move.
    Static,
    /// Controlled by the user, not by forces.
    Kinematic,
}
