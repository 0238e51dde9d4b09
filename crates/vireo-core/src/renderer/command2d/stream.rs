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

//! The read-only snapshot a backend consumes at flush time.

use super::command::{DrawCommand2D, Render2DCommand, MAX_SAMPLER_SLOTS};
use crate::renderer::api::pipeline::{BlendState, RasterizerState, SamplerState};
use crate::renderer::api::shader::{PixelShader, PixelShaderId, VertexShader, VertexShaderId};
use std::collections::HashMap;

/// Borrowed view of one frame's command list and resource arrays.
///
/// Produced by [`Render2DCommandManager::flush`]; every `index` carried by a
/// command is a valid position in the matching array of this snapshot. The
/// borrow keeps the manager immutable while a backend walks the stream; if
/// the backend reads asynchronously, the caller must fence the next
/// `reset()` behind that read.
///
/// [`Render2DCommandManager::flush`]: super::Render2DCommandManager::flush
#[derive(Debug)]
pub struct Render2DCommandStream<'a> {
    /// The ordered command list.
    pub commands: &'a [Render2DCommand],
    /// Draw descriptors referenced by `Draw` commands.
    pub draws: &'a [DrawCommand2D],
    /// Vertex counts referenced by `DrawNull` commands.
    pub null_draws: &'a [u32],
    /// Blend states referenced by `BlendState` commands.
    pub blend_states: &'a [BlendState],
    /// Rasterizer states referenced by `RasterizerState` commands.
    pub rasterizer_states: &'a [RasterizerState],
    /// Per-slot sampler states referenced by `PsSamplerState*` commands.
    pub ps_sampler_states: [&'a [SamplerState]; MAX_SAMPLER_SLOTS],
    /// Vertex shader ids referenced by `SetVs` commands.
    pub vertex_shaders: &'a [VertexShaderId],
    /// Pixel shader ids referenced by `SetPs` commands.
    pub pixel_shaders: &'a [PixelShaderId],
    /// Custom vertex shaders, resolvable by id at bind time.
    pub reserved_vertex_shaders: &'a HashMap<VertexShaderId, VertexShader>,
    /// Custom pixel shaders, resolvable by id at bind time.
    pub reserved_pixel_shaders: &'a HashMap<PixelShaderId, PixelShader>,
}

/// Per-frame counters over the accumulated command stream.
///
/// Cheap to compute and useful for asserting the batching behavior in
/// telemetry overlays: `draw_calls` stays flat while `indices` grows when
/// batching is doing its job.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Render2DStats {
    /// Total commands in the stream.
    pub commands: u32,
    /// `Draw` commands (one GPU draw each).
    pub draw_calls: u32,
    /// Total indices across all draw descriptors.
    pub indices: u32,
    /// Total placeholder vertices across all `DrawNull` commands.
    pub null_vertices: u32,
    /// State-change commands (blend, rasterizer, samplers, shaders).
    pub state_changes: u32,
}
