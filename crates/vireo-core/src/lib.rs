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

//! # Vireo Core
//!
//! Foundational crate of the Vireo 2D engine: the frame command-buffering
//! core, the backend-agnostic rendering contracts, and the small set of
//! value types (states, handles, math) those contracts are written in.
//!
//! The heart of the crate is [`renderer::command2d::Render2DCommandManager`],
//! which batches a frame's draw and state-change operations into a compact
//! command stream for a graphics backend to execute.

#![warn(missing_docs)]

pub mod asset;
pub mod math;
pub mod physics;
pub mod platform;
pub mod renderer;
