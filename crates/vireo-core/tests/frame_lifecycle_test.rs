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

//! Integration tests driving the 2D command manager through full frames
//! with a replaying mock backend.

use vireo_core::asset::AssetUuid;
use vireo_core::renderer::{
    BlendState, PixelShaderId, RasterizerState, Render2DCommandKind, Render2DCommandManager,
    Render2DCommandStream, SamplerState, ShaderLibrary, VertexShaderId,
};

/// Replays a flushed stream the way a graphics backend would, tallying the
/// GPU work it would submit.
#[derive(Debug, Default, PartialEq, Eq)]
struct ReplayBackend {
    draw_calls: u32,
    indices_drawn: u32,
    null_vertices_drawn: u32,
    pipeline_rebinds: u32,
    unresolved_shaders: u32,
}

impl ReplayBackend {
    fn execute(&mut self, stream: &Render2DCommandStream<'_>, library: &ShaderLibrary) {
        for command in stream.commands {
            let index = command.index as usize;
            match command.kind {
                Render2DCommandKind::Null | Render2DCommandKind::SetBuffers => {}
                Render2DCommandKind::UpdateBuffers => {}
                Render2DCommandKind::Draw => {
                    self.draw_calls += 1;
                    self.indices_drawn += stream.draws[index].index_count;
                }
                Render2DCommandKind::DrawNull => {
                    self.null_vertices_drawn += stream.null_draws[index];
                }
                Render2DCommandKind::BlendState | Render2DCommandKind::RasterizerState => {
                    self.pipeline_rebinds += 1;
                }
                Render2DCommandKind::SetVs => {
                    self.pipeline_rebinds += 1;
                    let id = stream.vertex_shaders[index];
                    let known = stream.reserved_vertex_shaders.contains_key(&id)
                        || library.resolve_vs(id).is_ok();
                    if !known {
                        self.unresolved_shaders += 1;
                    }
                }
                Render2DCommandKind::SetPs => {
                    self.pipeline_rebinds += 1;
                    let id = stream.pixel_shaders[index];
                    let known = stream.reserved_pixel_shaders.contains_key(&id)
                        || library.resolve_ps(id).is_ok();
                    if !known {
                        self.unresolved_shaders += 1;
                    }
                }
                kind => {
                    if let Some(slot) = kind.sampler_slot() {
                        let _ = stream.ps_sampler_states[slot][index];
                        self.pipeline_rebinds += 1;
                    }
                }
            }
        }
    }
}

#[test]
fn sprite_frame_reaches_the_backend_as_a_handful_of_commands() {
    let mut library = ShaderLibrary::new();
    let sprite_vs = library.register_vs("sprite", "vs_main", AssetUuid::new());
    let sprite_ps = library.register_ps("sprite", "ps_main", AssetUuid::new());

    let mut manager = Render2DCommandManager::new();
    manager.push_update_buffers(0);
    manager.push_standard_vs(sprite_vs.id());
    manager.push_standard_ps(sprite_ps.id());
    manager.push_ps_sampler_state(0, SamplerState::REPEAT_NEAREST);

    // 1000 sprites, all under identical state.
    for _ in 0..1000 {
        manager.push_blend_state(BlendState::ALPHA);
        manager.push_draw(6);
    }

    let mut backend = ReplayBackend::default();
    backend.execute(&manager.flush(), &library);

    assert_eq!(backend.draw_calls, 1);
    assert_eq!(backend.indices_drawn, 6000);
    // vs + ps + sampler; the blend pushes all dedup against the default.
    assert_eq!(backend.pipeline_rebinds, 3);
    assert_eq!(backend.unresolved_shaders, 0);
}

#[test]
fn custom_shader_resolves_through_the_reserved_map_only() {
    let mut library = ShaderLibrary::new();
    let effect_ps = library.register_ps("vignette", "ps_main", AssetUuid::new());
    // The library forgets the shader; only the caller's handle keeps it alive.
    library.release_ps(effect_ps.id());
    assert!(library.resolve_ps(effect_ps.id()).is_err());

    let mut manager = Render2DCommandManager::new();
    manager.push_custom_ps(&effect_ps);
    manager.push_null_vertices(3);

    let mut backend = ReplayBackend::default();
    backend.execute(&manager.flush(), &library);

    assert_eq!(backend.unresolved_shaders, 0);
    assert_eq!(backend.null_vertices_drawn, 3);
}

#[test]
fn state_carries_across_frames_without_rebinds() {
    let mut library = ShaderLibrary::new();
    let vs = library.register_vs("shape", "vs_main", AssetUuid::new());
    let ps = library.register_ps("shape", "ps_main", AssetUuid::new());

    let mut manager = Render2DCommandManager::new();

    // Frame 1 configures the full pipeline.
    manager.push_standard_vs(vs.id());
    manager.push_standard_ps(ps.id());
    manager.push_blend_state(BlendState::ADDITIVE);
    manager.push_rasterizer_state(RasterizerState::WIREFRAME);
    manager.push_draw(30);

    let mut frame1 = ReplayBackend::default();
    frame1.execute(&manager.flush(), &library);
    assert_eq!(frame1.pipeline_rebinds, 4);

    // Frame 2 requests the identical state again: zero rebinds.
    manager.reset();
    manager.push_standard_vs(vs.id());
    manager.push_standard_ps(ps.id());
    manager.push_blend_state(BlendState::ADDITIVE);
    manager.push_rasterizer_state(RasterizerState::WIREFRAME);
    manager.push_draw(12);

    let mut frame2 = ReplayBackend::default();
    frame2.execute(&manager.flush(), &library);
    assert_eq!(frame2.pipeline_rebinds, 0);
    assert_eq!(frame2.draw_calls, 1);
    assert_eq!(frame2.indices_drawn, 12);

    // Carried state is still queryable between frames.
    assert_eq!(manager.current_blend_state(), BlendState::ADDITIVE);
    assert_eq!(manager.current_vs(), vs.id());
}

#[test]
fn interleaved_state_and_draws_produce_a_coherent_stream() {
    let library = ShaderLibrary::new();
    let mut manager = Render2DCommandManager::new();

    manager.push_standard_vs(VertexShaderId::from_raw(0));
    manager.push_standard_ps(PixelShaderId::from_raw(1));
    for layer in 0..8u32 {
        let blend = if layer % 2 == 0 {
            BlendState::ALPHA
        } else {
            BlendState::ADDITIVE
        };
        manager.push_blend_state(blend);
        for _ in 0..10 {
            manager.push_draw(6);
        }
    }

    let stats = manager.stats();
    // One draw call per layer; the first layer's ALPHA dedups against the
    // carried default, the other seven layers each rebind blend state.
    assert_eq!(stats.draw_calls, 8);
    assert_eq!(stats.indices, 8 * 10 * 6);
    assert_eq!(stats.state_changes, 7 + 2);

    let mut backend = ReplayBackend::default();
    backend.execute(&manager.flush(), &library);
    assert_eq!(backend.draw_calls, 8);
    assert_eq!(backend.indices_drawn, 480);
}
