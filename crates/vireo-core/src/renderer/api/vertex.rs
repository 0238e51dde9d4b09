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

//! The vertex layout shared by all 2D batches.

use crate::math::Vec2;

/// The index element type of the 2D batch buffers.
///
/// Batches are indexed with 16-bit indices; accumulated per-frame index
/// counts use `u32` since a frame spans many batches.
pub type IndexType = u16;

/// One vertex of the 2D batch stream.
#[derive(Debug, Default, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
#[repr(C)]
pub struct Vertex2D {
    /// Position in render-target coordinates.
    pub position: Vec2,
    /// Texture coordinates.
    pub uv: Vec2,
    /// Straight-alpha vertex color.
    pub color: [f32; 4],
}

impl Vertex2D {
    /// Creates a vertex from its components.
    pub const fn new(position: Vec2, uv: Vec2, color: [f32; 4]) -> Self {
        Self {
            position,
            uv,
            color,
        }
    }
}
