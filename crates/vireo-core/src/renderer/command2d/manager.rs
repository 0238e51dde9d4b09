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

//! The 2D render command manager.
//!
//! One manager exists per rendering context. Each frame it accumulates the
//! ordered command stream plus the per-kind resource arrays the commands
//! index into, deduplicating state sets against the currently active value
//! and merging contiguous draws into a single descriptor. `flush()` hands
//! the frame to a backend as a read-only snapshot; `reset()` starts the
//! next frame, carrying the last-known state forward as its baseline so no
//! redundant state-set command is ever re-emitted across a frame boundary.

use super::command::{DrawCommand2D, Render2DCommand, Render2DCommandKind, MAX_SAMPLER_SLOTS};
use super::stream::{Render2DCommandStream, Render2DStats};
use crate::renderer::api::pipeline::{BlendState, RasterizerState, SamplerState};
use crate::renderer::api::shader::{PixelShader, PixelShaderId, VertexShader, VertexShaderId};
use std::collections::HashMap;

/// Accumulates one frame of 2D draw and state-change operations.
///
/// Mutation is single-owner and single-threaded (the frame-building
/// thread). A backend that consumes [`flush`](Self::flush) asynchronously
/// must be fenced by the caller before the next [`reset`](Self::reset).
#[derive(Debug)]
pub struct Render2DCommandManager {
    // commands
    commands: Vec<Render2DCommand>,

    // resource arrays
    draws: Vec<DrawCommand2D>,
    null_draws: Vec<u32>,
    blend_states: Vec<BlendState>,
    rasterizer_states: Vec<RasterizerState>,
    ps_sampler_states: [Vec<SamplerState>; MAX_SAMPLER_SLOTS],
    vertex_shaders: Vec<VertexShaderId>,
    pixel_shaders: Vec<PixelShaderId>,

    // current state
    current_draw: DrawCommand2D,
    current_blend_state: BlendState,
    current_rasterizer_state: RasterizerState,
    current_ps_sampler_states: [SamplerState; MAX_SAMPLER_SLOTS],
    current_vs: VertexShaderId,
    current_ps: PixelShaderId,

    // reserved custom shaders, rebuilt every frame
    reserved_vertex_shaders: HashMap<VertexShaderId, VertexShader>,
    reserved_pixel_shaders: HashMap<PixelShaderId, PixelShader>,
}

impl Default for Render2DCommandManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Render2DCommandManager {
    /// Creates a manager seeded with the default 2D render state and an
    /// initial frame already begun (see [`reset`](Self::reset)).
    pub fn new() -> Self {
        let mut manager = Self {
            commands: Vec::new(),
            draws: Vec::new(),
            null_draws: Vec::new(),
            blend_states: Vec::new(),
            rasterizer_states: Vec::new(),
            ps_sampler_states: std::array::from_fn(|_| Vec::new()),
            vertex_shaders: Vec::new(),
            pixel_shaders: Vec::new(),
            current_draw: DrawCommand2D::default(),
            current_blend_state: BlendState::default(),
            current_rasterizer_state: RasterizerState::default(),
            current_ps_sampler_states: [SamplerState::default(); MAX_SAMPLER_SLOTS],
            current_vs: VertexShaderId::INVALID,
            current_ps: PixelShaderId::INVALID,
            reserved_vertex_shaders: HashMap::new(),
            reserved_pixel_shaders: HashMap::new(),
        };
        manager.reset();
        manager
    }

    /// Begins a new frame.
    ///
    /// Clears the command list and every resource array, then re-seeds
    /// each stateful array with a single element equal to the state active
    /// when the previous frame ended (the carry-over baseline). Custom
    /// shader reservations do not survive the boundary; they must be
    /// pushed again if still needed. No state-set commands are emitted for
    /// the carried baseline, only the pass-opening `SetBuffers`.
    pub fn reset(&mut self) {
        self.commands.clear();

        self.draws.clear();
        self.current_draw = DrawCommand2D::default();
        self.null_draws.clear();

        self.blend_states.clear();
        self.blend_states.push(self.current_blend_state);

        self.rasterizer_states.clear();
        self.rasterizer_states.push(self.current_rasterizer_state);

        for (slot, states) in self.ps_sampler_states.iter_mut().enumerate() {
            states.clear();
            states.push(self.current_ps_sampler_states[slot]);
        }

        self.vertex_shaders.clear();
        self.vertex_shaders.push(self.current_vs);

        self.pixel_shaders.clear();
        self.pixel_shaders.push(self.current_ps);

        self.reserved_vertex_shaders.clear();
        self.reserved_pixel_shaders.clear();

        // Every pass starts by binding the batch buffers.
        self.commands
            .push(Render2DCommand::new(Render2DCommandKind::SetBuffers, 0));
    }

    /// Hands the accumulated frame to the backend as a read-only snapshot.
    ///
    /// Does not mutate the manager; calling it twice yields the same
    /// stream. Clearing for the next frame is [`reset`](Self::reset)'s job.
    pub fn flush(&self) -> Render2DCommandStream<'_> {
        log::trace!(
            "Render2DCommandManager: flush with {} commands, {} draws, {} null draws",
            self.commands.len(),
            self.draws.len(),
            self.null_draws.len()
        );
        Render2DCommandStream {
            commands: &self.commands,
            draws: &self.draws,
            null_draws: &self.null_draws,
            blend_states: &self.blend_states,
            rasterizer_states: &self.rasterizer_states,
            ps_sampler_states: std::array::from_fn(|slot| self.ps_sampler_states[slot].as_slice()),
            vertex_shaders: &self.vertex_shaders,
            pixel_shaders: &self.pixel_shaders,
            reserved_vertex_shaders: &self.reserved_vertex_shaders,
            reserved_pixel_shaders: &self.reserved_pixel_shaders,
        }
    }

    /// Records an upload of the batch identified by `batch_index`.
    ///
    /// Never deduplicated: buffer contents differ on every call.
    pub fn push_update_buffers(&mut self, batch_index: u32) {
        self.commands.push(Render2DCommand::new(
            Render2DCommandKind::UpdateBuffers,
            batch_index,
        ));
    }

    /// Records an indexed draw of `index_count` indices.
    ///
    /// If the immediately previous command is also a draw, the count is
    /// folded into its descriptor instead of emitting a new command: a run
    /// of draws under unchanged state reaches the GPU as one draw call.
    pub fn push_draw(&mut self, index_count: u32) {
        if self.last_kind() == Some(Render2DCommandKind::Draw) {
            self.current_draw.index_count += index_count;
            if let Some(last) = self.draws.last_mut() {
                last.index_count = self.current_draw.index_count;
            }
        } else {
            self.current_draw = DrawCommand2D { index_count };
            self.commands.push(Render2DCommand::new(
                Render2DCommandKind::Draw,
                self.draws.len() as u32,
            ));
            self.draws.push(self.current_draw);
        }
    }

    /// Returns the draw descriptor a `Draw` command references.
    pub fn get_draw(&self, index: u32) -> DrawCommand2D {
        at(&self.draws, index)
    }

    /// Records a draw of `count` placeholder vertices (no index buffer),
    /// used by procedural full-screen passes. Batches exactly like
    /// [`push_draw`](Self::push_draw), but into the null-draw array.
    pub fn push_null_vertices(&mut self, count: u32) {
        if self.last_kind() == Some(Render2DCommandKind::DrawNull) {
            if let Some(last) = self.null_draws.last_mut() {
                *last += count;
            }
        } else {
            self.commands.push(Render2DCommand::new(
                Render2DCommandKind::DrawNull,
                self.null_draws.len() as u32,
            ));
            self.null_draws.push(count);
        }
    }

    /// Returns the vertex count a `DrawNull` command references.
    pub fn get_null_draw(&self, index: u32) -> u32 {
        at(&self.null_draws, index)
    }

    /// Requests the given blend state.
    ///
    /// A no-op when `state` equals the currently active blend state;
    /// otherwise appends the value and a command referencing it.
    pub fn push_blend_state(&mut self, state: BlendState) {
        if state == self.current_blend_state {
            return;
        }
        self.commands.push(Render2DCommand::new(
            Render2DCommandKind::BlendState,
            self.blend_states.len() as u32,
        ));
        self.blend_states.push(state);
        self.current_blend_state = state;
    }

    /// Returns the blend state a `BlendState` command references.
    pub fn get_blend_state(&self, index: u32) -> BlendState {
        at(&self.blend_states, index)
    }

    /// Returns the currently active blend state.
    pub fn current_blend_state(&self) -> BlendState {
        self.current_blend_state
    }

    /// Requests the given rasterizer state (deduplicated, like
    /// [`push_blend_state`](Self::push_blend_state)).
    pub fn push_rasterizer_state(&mut self, state: RasterizerState) {
        if state == self.current_rasterizer_state {
            return;
        }
        self.commands.push(Render2DCommand::new(
            Render2DCommandKind::RasterizerState,
            self.rasterizer_states.len() as u32,
        ));
        self.rasterizer_states.push(state);
        self.current_rasterizer_state = state;
    }

    /// Returns the rasterizer state a `RasterizerState` command references.
    pub fn get_rasterizer_state(&self, index: u32) -> RasterizerState {
        at(&self.rasterizer_states, index)
    }

    /// Returns the currently active rasterizer state.
    pub fn current_rasterizer_state(&self) -> RasterizerState {
        self.current_rasterizer_state
    }

    /// Requests the given sampler state on PS slot `slot` (deduplicated
    /// per slot).
    pub fn push_ps_sampler_state(&mut self, slot: usize, state: SamplerState) {
        debug_assert!(slot < MAX_SAMPLER_SLOTS, "sampler slot {slot} out of range");
        let slot = slot.min(MAX_SAMPLER_SLOTS - 1);
        if state == self.current_ps_sampler_states[slot] {
            return;
        }
        self.commands.push(Render2DCommand::new(
            Render2DCommandKind::ps_sampler_state(slot),
            self.ps_sampler_states[slot].len() as u32,
        ));
        self.ps_sampler_states[slot].push(state);
        self.current_ps_sampler_states[slot] = state;
    }

    /// Returns the sampler state a `PsSamplerState*` command references.
    pub fn get_ps_sampler_state(&self, slot: usize, index: u32) -> SamplerState {
        debug_assert!(slot < MAX_SAMPLER_SLOTS, "sampler slot {slot} out of range");
        at(&self.ps_sampler_states[slot.min(MAX_SAMPLER_SLOTS - 1)], index)
    }

    /// Returns the currently active sampler state on PS slot `slot`.
    pub fn current_ps_sampler_state(&self, slot: usize) -> SamplerState {
        debug_assert!(slot < MAX_SAMPLER_SLOTS, "sampler slot {slot} out of range");
        self.current_ps_sampler_states[slot.min(MAX_SAMPLER_SLOTS - 1)]
    }

    /// Requests a standard (engine built-in) vertex shader by id. The
    /// backend resolves standard shaders from the shader library alone.
    pub fn push_standard_vs(&mut self, id: VertexShaderId) {
        if id == self.current_vs {
            return;
        }
        self.commands.push(Render2DCommand::new(
            Render2DCommandKind::SetVs,
            self.vertex_shaders.len() as u32,
        ));
        self.vertex_shaders.push(id);
        self.current_vs = id;
    }

    /// Requests a custom vertex shader.
    ///
    /// The full handle is reserved for the backend before the dedup check:
    /// a shader carried over from the previous frame must be resolvable
    /// again even though no new command is emitted for it.
    pub fn push_custom_vs(&mut self, vs: &VertexShader) {
        let id = vs.id();
        self.reserved_vertex_shaders
            .entry(id)
            .or_insert_with(|| vs.clone());
        self.push_standard_vs(id);
    }

    /// Returns the vertex shader id a `SetVs` command references.
    pub fn get_vs(&self, index: u32) -> VertexShaderId {
        at(&self.vertex_shaders, index)
    }

    /// Returns the currently active vertex shader id.
    pub fn current_vs(&self) -> VertexShaderId {
        self.current_vs
    }

    /// Requests a standard (engine built-in) pixel shader by id.
    pub fn push_standard_ps(&mut self, id: PixelShaderId) {
        if id == self.current_ps {
            return;
        }
        self.commands.push(Render2DCommand::new(
            Render2DCommandKind::SetPs,
            self.pixel_shaders.len() as u32,
        ));
        self.pixel_shaders.push(id);
        self.current_ps = id;
    }

    /// Requests a custom pixel shader; see
    /// [`push_custom_vs`](Self::push_custom_vs) for the reservation rule.
    pub fn push_custom_ps(&mut self, ps: &PixelShader) {
        let id = ps.id();
        self.reserved_pixel_shaders
            .entry(id)
            .or_insert_with(|| ps.clone());
        self.push_standard_ps(id);
    }

    /// Returns the pixel shader id a `SetPs` command references.
    pub fn get_ps(&self, index: u32) -> PixelShaderId {
        at(&self.pixel_shaders, index)
    }

    /// Returns the currently active pixel shader id.
    pub fn current_ps(&self) -> PixelShaderId {
        self.current_ps
    }

    /// Returns the ordered command list accumulated so far.
    pub fn commands(&self) -> &[Render2DCommand] {
        &self.commands
    }

    /// Returns the reserved custom vertex shader for `id`, if any.
    pub fn reserved_vs(&self, id: VertexShaderId) -> Option<&VertexShader> {
        self.reserved_vertex_shaders.get(&id)
    }

    /// Returns the reserved custom pixel shader for `id`, if any.
    pub fn reserved_ps(&self, id: PixelShaderId) -> Option<&PixelShader> {
        self.reserved_pixel_shaders.get(&id)
    }

    /// Computes per-frame counters over the accumulated stream.
    pub fn stats(&self) -> Render2DStats {
        let mut stats = Render2DStats {
            commands: self.commands.len() as u32,
            ..Render2DStats::default()
        };
        for command in &self.commands {
            match command.kind {
                Render2DCommandKind::Draw => {
                    stats.draw_calls += 1;
                    stats.indices += at(&self.draws, command.index).index_count;
                }
                Render2DCommandKind::DrawNull => {
                    stats.null_vertices += at(&self.null_draws, command.index);
                }
                kind if kind.is_state_change() => {
                    stats.state_changes += 1;
                }
                _ => {}
            }
        }
        stats
    }

    fn last_kind(&self) -> Option<Render2DCommandKind> {
        self.commands.last().map(|command| command.kind)
    }
}

/// Indexed resource-array access. Indices come only from previously issued
/// commands, so an out-of-range index is a caller bug: asserted in debug
/// builds, clamped to the last element in release builds.
fn at<T: Copy>(buffer: &[T], index: u32) -> T {
    debug_assert!(
        (index as usize) < buffer.len(),
        "resource index {index} out of range ({} entries)",
        buffer.len()
    );
    buffer[(index as usize).min(buffer.len().saturating_sub(1))]
}
