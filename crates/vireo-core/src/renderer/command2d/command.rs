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

//! The tagged command records of the 2D command stream.

/// Number of pixel-shader sampler slots addressable by the command stream.
pub const MAX_SAMPLER_SLOTS: usize = 8;

/// The closed set of operations a 2D command stream can carry.
///
/// Kept as a flat tag (plus the `index` field of [`Render2DCommand`])
/// rather than a payload-carrying enum: the hot path appends and compares
/// tags, and the payloads live in per-kind resource arrays.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Render2DCommandKind {
    /// No operation.
    #[default]
    Null,
    /// Bind the batch vertex/index buffers.
    SetBuffers,
    /// Upload the batch identified by `index` to its GPU buffers.
    UpdateBuffers,
    /// Execute the draw descriptor at `index` in the draw array.
    Draw,
    /// Draw `null_draws[index]` placeholder vertices (procedural passes).
    DrawNull,
    /// Apply the blend state at `index`.
    BlendState,
    /// Apply the rasterizer state at `index`.
    RasterizerState,
    /// Apply the sampler state at `index` to PS slot 0.
    PsSamplerState0,
    /// Apply the sampler state at `index` to PS slot 1.
    PsSamplerState1,
    /// Apply the sampler state at `index` to PS slot 2.
    PsSamplerState2,
    /// Apply the sampler state at `index` to PS slot 3.
    PsSamplerState3,
    /// Apply the sampler state at `index` to PS slot 4.
    PsSamplerState4,
    /// Apply the sampler state at `index` to PS slot 5.
    PsSamplerState5,
    /// Apply the sampler state at `index` to PS slot 6.
    PsSamplerState6,
    /// Apply the sampler state at `index` to PS slot 7.
    PsSamplerState7,
    /// Bind the vertex shader id at `index`.
    SetVs,
    /// Bind the pixel shader id at `index`.
    SetPs,
}

impl Render2DCommandKind {
    /// Returns the sampler-state kind for a PS slot.
    ///
    /// `slot` must be below [`MAX_SAMPLER_SLOTS`]; out-of-range values are
    /// clamped to the last slot in release builds.
    pub fn ps_sampler_state(slot: usize) -> Self {
        debug_assert!(slot < MAX_SAMPLER_SLOTS, "sampler slot {slot} out of range");
        match slot {
            0 => Self::PsSamplerState0,
            1 => Self::PsSamplerState1,
            2 => Self::PsSamplerState2,
            3 => Self::PsSamplerState3,
            4 => Self::PsSamplerState4,
            5 => Self::PsSamplerState5,
            6 => Self::PsSamplerState6,
            _ => Self::PsSamplerState7,
        }
    }

    /// Returns the PS slot if this is a sampler-state kind.
    pub fn sampler_slot(self) -> Option<usize> {
        match self {
            Self::PsSamplerState0 => Some(0),
            Self::PsSamplerState1 => Some(1),
            Self::PsSamplerState2 => Some(2),
            Self::PsSamplerState3 => Some(3),
            Self::PsSamplerState4 => Some(4),
            Self::PsSamplerState5 => Some(5),
            Self::PsSamplerState6 => Some(6),
            Self::PsSamplerState7 => Some(7),
            _ => None,
        }
    }

    /// Returns `true` for kinds that change pipeline state (as opposed to
    /// draws and buffer traffic).
    pub fn is_state_change(self) -> bool {
        matches!(
            self,
            Self::BlendState | Self::RasterizerState | Self::SetVs | Self::SetPs
        ) || self.sampler_slot().is_some()
    }
}

/// One record of the command stream: an operation tag plus an index into
/// the resource array owned by that operation's kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Render2DCommand {
    /// The operation to perform.
    pub kind: Render2DCommandKind,
    /// Position in the kind's resource array (or the raw batch index for
    /// [`Render2DCommandKind::UpdateBuffers`]).
    pub index: u32,
}

impl Render2DCommand {
    /// Creates a command record.
    pub const fn new(kind: Render2DCommandKind, index: u32) -> Self {
        Self { kind, index }
    }
}

/// A draw descriptor: the number of batch indices one GPU draw consumes.
///
/// Consecutive draws under unchanged state accumulate into a single
/// descriptor, which is what keeps the draw-call count proportional to
/// state changes instead of push calls.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrawCommand2D {
    /// Number of indices to draw.
    pub index_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sampler_kind_round_trips_through_slot() {
        for slot in 0..MAX_SAMPLER_SLOTS {
            let kind = Render2DCommandKind::ps_sampler_state(slot);
            assert_eq!(kind.sampler_slot(), Some(slot));
        }
        assert_eq!(Render2DCommandKind::Draw.sampler_slot(), None);
    }

    #[test]
    fn state_change_classification() {
        assert!(Render2DCommandKind::BlendState.is_state_change());
        assert!(Render2DCommandKind::PsSamplerState5.is_state_change());
        assert!(Render2DCommandKind::SetPs.is_state_change());
        assert!(!Render2DCommandKind::Draw.is_state_change());
        assert!(!Render2DCommandKind::UpdateBuffers.is_state_change());
        assert!(!Render2DCommandKind::SetBuffers.is_state_change());
    }

    #[test]
    fn default_command_is_null() {
        let cmd = Render2DCommand::default();
        assert_eq!(cmd.kind, Render2DCommandKind::Null);
        assert_eq!(cmd.index, 0);
    }
}
