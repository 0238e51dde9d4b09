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

//! Shader identifiers, shared shader handles, and the shader library.
//!
//! The command manager only ever records [`VertexShaderId`] / [`PixelShaderId`]
//! values; the full [`VertexShader`] / [`PixelShader`] handles exist so that a
//! backend can resolve non-standard ("custom") shaders at flush time. The
//! [`ShaderLibrary`] is the reference-counted registry that owns registered
//! shader data and mints ids.

use crate::asset::{Asset, AssetHandle, AssetUuid};
use crate::renderer::error::ShaderError;
use std::collections::HashMap;

/// The pipeline stage a shader module runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex stage.
    Vertex,
    /// Pixel (fragment) stage.
    Pixel,
}

/// An opaque identifier for a vertex shader.
///
/// Totally ordered and hashable so it can key reserved-shader maps and be
/// compared for state deduplication. [`VertexShaderId::INVALID`] is the
/// distinguished sentinel carried by a fresh command manager before any
/// shader has been set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexShaderId(u32);

impl VertexShaderId {
    /// The sentinel value meaning "no shader".
    pub const INVALID: Self = Self(u32::MAX);

    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` unless this is the invalid sentinel.
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

/// An opaque identifier for a pixel shader. See [`VertexShaderId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PixelShaderId(u32);

impl PixelShaderId {
    /// The sentinel value meaning "no shader".
    pub const INVALID: Self = Self(u32::MAX);

    /// Creates an id from a raw value.
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw value.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns `true` unless this is the invalid sentinel.
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

/// The shared, immutable data behind a shader handle.
#[derive(Debug)]
pub struct ShaderModuleData {
    /// The stage this module runs in.
    pub stage: ShaderStage,
    /// The entry point symbol (e.g. `ps_main`).
    pub entry_point: String,
    /// A human-readable label for logs and debuggers.
    pub label: String,
    /// Identity of the source asset the module was built from.
    pub source: AssetUuid,
}

impl Asset for ShaderModuleData {}

/// A cheap-clone, reference-counted handle to a vertex shader.
///
/// Equality is by id: two handles to the same registered shader compare
/// equal regardless of which clone they are.
#[derive(Debug, Clone)]
pub struct VertexShader {
    id: VertexShaderId,
    data: AssetHandle<ShaderModuleData>,
}

impl VertexShader {
    /// Returns the shader's id.
    pub fn id(&self) -> VertexShaderId {
        self.id
    }

    /// Returns the shader's debug label.
    pub fn label(&self) -> &str {
        &self.data.label
    }

    /// Returns the entry point symbol.
    pub fn entry_point(&self) -> &str {
        &self.data.entry_point
    }

    /// Returns the identity of the source asset.
    pub fn source(&self) -> AssetUuid {
        self.data.source
    }
}

impl PartialEq for VertexShader {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for VertexShader {}

/// A cheap-clone, reference-counted handle to a pixel shader.
///
/// Equality is by id, as for [`VertexShader`].
#[derive(Debug, Clone)]
pub struct PixelShader {
    id: PixelShaderId,
    data: AssetHandle<ShaderModuleData>,
}

impl PixelShader {
    /// Returns the shader's id.
    pub fn id(&self) -> PixelShaderId {
        self.id
    }

    /// Returns the shader's debug label.
    pub fn label(&self) -> &str {
        &self.data.label
    }

    /// Returns the entry point symbol.
    pub fn entry_point(&self) -> &str {
        &self.data.entry_point
    }

    /// Returns the identity of the source asset.
    pub fn source(&self) -> AssetUuid {
        self.data.source
    }
}

impl PartialEq for PixelShader {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for PixelShader {}

/// The registry that owns registered shader data and mints shader ids.
///
/// A backend resolves *standard* shaders (engine built-ins registered at
/// startup) through this library by id alone. Custom shaders pushed through
/// the command manager travel with their handle in the reserved-shader maps
/// instead, so the library does not need to know about them at flush time.
#[derive(Debug, Default)]
pub struct ShaderLibrary {
    next_id: u32,
    vertex: HashMap<VertexShaderId, VertexShader>,
    pixel: HashMap<PixelShaderId, PixelShader>,
}

impl ShaderLibrary {
    /// Creates an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex shader and returns a handle to it.
    pub fn register_vs(
        &mut self,
        label: impl Into<String>,
        entry_point: impl Into<String>,
        source: AssetUuid,
    ) -> VertexShader {
        let id = VertexShaderId::from_raw(self.mint());
        let shader = VertexShader {
            id,
            data: AssetHandle::new(ShaderModuleData {
                stage: ShaderStage::Vertex,
                entry_point: entry_point.into(),
                label: label.into(),
                source,
            }),
        };
        log::debug!("ShaderLibrary: registered VS '{}' as {id:?}", shader.label());
        self.vertex.insert(id, shader.clone());
        shader
    }

    /// Registers a pixel shader and returns a handle to it.
    pub fn register_ps(
        &mut self,
        label: impl Into<String>,
        entry_point: impl Into<String>,
        source: AssetUuid,
    ) -> PixelShader {
        let id = PixelShaderId::from_raw(self.mint());
        let shader = PixelShader {
            id,
            data: AssetHandle::new(ShaderModuleData {
                stage: ShaderStage::Pixel,
                entry_point: entry_point.into(),
                label: label.into(),
                source,
            }),
        };
        log::debug!("ShaderLibrary: registered PS '{}' as {id:?}", shader.label());
        self.pixel.insert(id, shader.clone());
        shader
    }

    /// Resolves a vertex shader by id.
    pub fn resolve_vs(&self, id: VertexShaderId) -> Result<&VertexShader, ShaderError> {
        self.vertex
            .get(&id)
            .ok_or(ShaderError::VertexNotFound { id })
    }

    /// Resolves a pixel shader by id.
    pub fn resolve_ps(&self, id: PixelShaderId) -> Result<&PixelShader, ShaderError> {
        self.pixel.get(&id).ok_or(ShaderError::PixelNotFound { id })
    }

    /// Releases the library's reference to a vertex shader. Outstanding
    /// handles keep the data alive.
    pub fn release_vs(&mut self, id: VertexShaderId) {
        self.vertex.remove(&id);
    }

    /// Releases the library's reference to a pixel shader.
    pub fn release_ps(&mut self, id: PixelShaderId) {
        self.pixel.remove(&id);
    }

    fn mint(&mut self) -> u32 {
        let raw = self.next_id;
        debug_assert!(raw != u32::MAX, "shader id space exhausted");
        self.next_id += 1;
        raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_sentinel_is_not_valid() {
        assert!(!VertexShaderId::INVALID.is_valid());
        assert!(!PixelShaderId::INVALID.is_valid());
        assert!(VertexShaderId::from_raw(0).is_valid());
    }

    #[test]
    fn library_mints_distinct_ids() {
        let mut lib = ShaderLibrary::new();
        let a = lib.register_vs("sprite", "vs_main", AssetUuid::new());
        let b = lib.register_vs("shape", "vs_main", AssetUuid::new());
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn resolve_returns_registered_handle() {
        let mut lib = ShaderLibrary::new();
        let ps = lib.register_ps("grayscale", "ps_main", AssetUuid::new());

        let resolved = lib.resolve_ps(ps.id()).unwrap();
        assert_eq!(resolved, &ps);
        assert_eq!(resolved.label(), "grayscale");
    }

    #[test]
    fn resolve_unknown_id_errors() {
        let lib = ShaderLibrary::new();
        let err = lib.resolve_vs(VertexShaderId::from_raw(7)).unwrap_err();
        assert!(matches!(err, ShaderError::VertexNotFound { .. }));
    }

    #[test]
    fn release_drops_library_reference_only() {
        let mut lib = ShaderLibrary::new();
        let ps = lib.register_ps("outline", "ps_main", AssetUuid::new());
        let id = ps.id();

        lib.release_ps(id);
        assert!(lib.resolve_ps(id).is_err());
        // The outstanding handle still reads its data.
        assert_eq!(ps.entry_point(), "ps_main");
    }

    #[test]
    fn handle_equality_is_by_id() {
        let mut lib = ShaderLibrary::new();
        let a = lib.register_vs("sprite", "vs_main", AssetUuid::new());
        let b = a.clone();
        assert_eq!(a, b);
    }
}
