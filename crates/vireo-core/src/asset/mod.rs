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

//! Primitive types of the asset system.
//!
//! This module knows nothing about how assets are loaded or stored; it only
//! provides the shared-ownership mechanism ([`AssetHandle`]) and the stable
//! identity type ([`AssetUuid`]) that the rest of the engine references
//! assets by. Higher layers (a shader library, a texture cache) build on
//! these primitives.

mod handle;
mod uuid;

pub use handle::*;
pub use self::uuid::*;

/// A marker trait for types that can be managed by the asset system.
///
/// The supertraits enforce the guarantees background loading relies on:
/// `Send + Sync` so handles can cross threads, and `'static` so the data
/// can outlive any borrowed scope it was produced in.
pub trait Asset: Send + Sync + 'static {}
