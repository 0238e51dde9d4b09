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

//! Immutable render-state value objects.
//!
//! These are the values the 2D command manager deduplicates on: each type
//! is a plain `Copy` record with value equality, and each has the default
//! that seeds index 0 of its resource array at frame start.

use super::enums::*;
use bincode::{Decode, Encode};
use serde::{Deserialize, Serialize};

/// Describes the blend equation for one component group (color or alpha).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub struct BlendEquation {
    /// The blend factor for the source value (from the fragment shader).
    pub src_factor: BlendFactor,
    /// The blend factor for the destination value (already in the target).
    pub dst_factor: BlendFactor,
    /// The operation combining the two factored values.
    pub operation: BlendOperation,
}

/// The complete blend state for the 2D color target.
///
/// `Default` is standard premultiplied-style alpha blending, which is what
/// a fresh command manager carries at resource-array index 0.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub struct BlendState {
    /// Whether blending is enabled at all.
    pub enabled: bool,
    /// The blend equation for the RGB components.
    pub color: BlendEquation,
    /// The blend equation for the alpha component.
    pub alpha: BlendEquation,
    /// Bitmask of writable color channels (bit 0 = R .. bit 3 = A).
    pub write_mask: u8,
}

impl BlendState {
    /// All four color channels writable.
    pub const WRITE_ALL: u8 = 0b1111;

    /// Standard alpha blending: `src * srcAlpha + dst * (1 - srcAlpha)`.
    pub const ALPHA: Self = Self {
        enabled: true,
        color: BlendEquation {
            src_factor: BlendFactor::SrcAlpha,
            dst_factor: BlendFactor::OneMinusSrcAlpha,
            operation: BlendOperation::Add,
        },
        alpha: BlendEquation {
            src_factor: BlendFactor::One,
            dst_factor: BlendFactor::OneMinusSrcAlpha,
            operation: BlendOperation::Add,
        },
        write_mask: Self::WRITE_ALL,
    };

    /// Additive blending, used for glow/particle style passes.
    pub const ADDITIVE: Self = Self {
        enabled: true,
        color: BlendEquation {
            src_factor: BlendFactor::SrcAlpha,
            dst_factor: BlendFactor::One,
            operation: BlendOperation::Add,
        },
        alpha: BlendEquation {
            src_factor: BlendFactor::Zero,
            dst_factor: BlendFactor::One,
            operation: BlendOperation::Add,
        },
        write_mask: Self::WRITE_ALL,
    };

    /// Blending disabled; source overwrites the target.
    pub const OPAQUE: Self = Self {
        enabled: false,
        ..Self::ALPHA
    };
}

impl Default for BlendState {
    fn default() -> Self {
        Self::ALPHA
    }
}

/// The rasterizer state for the 2D pipeline.
///
/// `Default` is the 2D baseline: solid fill, no culling, scissor disabled.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub struct RasterizerState {
    /// The polygon rasterization mode.
    pub fill_mode: FillMode,
    /// The face culling mode. 2D geometry is generated with mixed winding,
    /// so the baseline culls nothing.
    pub cull_mode: CullMode,
    /// Whether the scissor rectangle is applied.
    pub scissor_enabled: bool,
    /// A constant depth bias, in hardware units.
    pub depth_bias: i32,
}

impl RasterizerState {
    /// The default state for 2D rendering.
    pub const DEFAULT_2D: Self = Self {
        fill_mode: FillMode::Solid,
        cull_mode: CullMode::None,
        scissor_enabled: false,
        depth_bias: 0,
    };

    /// Wireframe variant of [`DEFAULT_2D`](Self::DEFAULT_2D).
    pub const WIREFRAME: Self = Self {
        fill_mode: FillMode::Wireframe,
        ..Self::DEFAULT_2D
    };
}

impl Default for RasterizerState {
    fn default() -> Self {
        Self::DEFAULT_2D
    }
}

/// The sampler state for one pixel-shader texture slot.
///
/// Lod bounds are quantized to keep the type `Eq + Hash`, matching the
/// other state objects; sub-unit lod clamps are not meaningful for the 2D
/// sprite path.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Encode, Decode,
)]
pub struct SamplerState {
    /// The address mode along U.
    pub address_u: AddressMode,
    /// The address mode along V.
    pub address_v: AddressMode,
    /// Filtering for minification.
    pub min_filter: FilterMode,
    /// Filtering for magnification.
    pub mag_filter: FilterMode,
    /// Maximum anisotropy (1 = disabled).
    pub max_anisotropy: u8,
    /// Lowest mip level that may be sampled.
    pub min_lod: u8,
    /// Highest mip level that may be sampled.
    pub max_lod: u8,
}

impl SamplerState {
    /// Linear filtering, clamped addressing: the 2D default.
    pub const CLAMP_LINEAR: Self = Self {
        address_u: AddressMode::ClampToEdge,
        address_v: AddressMode::ClampToEdge,
        min_filter: FilterMode::Linear,
        mag_filter: FilterMode::Linear,
        max_anisotropy: 1,
        min_lod: 0,
        max_lod: u8::MAX,
    };

    /// Nearest filtering, repeat addressing, for pixel-art style content.
    pub const REPEAT_NEAREST: Self = Self {
        address_u: AddressMode::Repeat,
        address_v: AddressMode::Repeat,
        min_filter: FilterMode::Nearest,
        mag_filter: FilterMode::Nearest,
        ..Self::CLAMP_LINEAR
    };
}

impl Default for SamplerState {
    fn default() -> Self {
        Self::CLAMP_LINEAR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_named_constants() {
        assert_eq!(BlendState::default(), BlendState::ALPHA);
        assert_eq!(RasterizerState::default(), RasterizerState::DEFAULT_2D);
        assert_eq!(SamplerState::default(), SamplerState::CLAMP_LINEAR);
    }

    #[test]
    fn value_equality_is_field_wise() {
        let mut a = BlendState::ALPHA;
        assert_eq!(a, BlendState::ALPHA);
        a.write_mask = 0b0111;
        assert_ne!(a, BlendState::ALPHA);

        let mut r = RasterizerState::DEFAULT_2D;
        r.scissor_enabled = true;
        assert_ne!(r, RasterizerState::DEFAULT_2D);
    }

    #[test]
    fn opaque_disables_blending_but_keeps_equations() {
        assert!(!BlendState::OPAQUE.enabled);
        assert_eq!(BlendState::OPAQUE.color, BlendState::ALPHA.color);
    }

    #[test]
    fn blend_state_serde_round_trip() {
        let json = serde_json::to_string(&BlendState::ADDITIVE).unwrap();
        let back: BlendState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, BlendState::ADDITIVE);
    }
}
