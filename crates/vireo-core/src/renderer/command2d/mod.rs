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

//! 2D command buffering: the frame command stream and its manager.
//!
//! A frame is recorded as a flat list of `(kind, index)` commands over
//! per-kind resource arrays. Two mechanisms keep the stream compact:
//!
//! - **Dedup**: a state setter whose value equals the currently active one
//!   emits nothing.
//! - **Batching**: a draw pushed directly after another draw folds into the
//!   previous descriptor instead of emitting a second command.
//!
//! At a frame boundary, [`Render2DCommandManager::reset`] re-seeds every
//! stateful resource array with its last value (carry-over), so state is
//! continuous across frames without redundant commands.

pub mod command;
pub mod manager;
pub mod stream;

pub use command::{DrawCommand2D, Render2DCommand, Render2DCommandKind, MAX_SAMPLER_SLOTS};
pub use manager::Render2DCommandManager;
pub use stream::{Render2DCommandStream, Render2DStats};
