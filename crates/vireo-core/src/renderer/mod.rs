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

//! The rendering layer of Vireo: value types, shader registry, and the 2D
//! command-buffering core.
//!
//! This crate deliberately stops at the command-stream boundary. Shader
//! compilation, GPU resource allocation, and execution of the flushed
//! stream belong to a concrete backend crate; everything here is the
//! backend-agnostic "what", not the "how".

pub mod api;
pub mod command2d;
pub mod error;

pub use self::api::*;
pub use self::command2d::{
    DrawCommand2D, Render2DCommand, Render2DCommandKind, Render2DCommandManager,
    Render2DCommandStream, Render2DStats, MAX_SAMPLER_SLOTS,
};
pub use self::error::ShaderError;
