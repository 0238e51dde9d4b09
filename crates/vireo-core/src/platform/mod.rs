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

//! Abstractions over platform-specific services.
//!
//! Windowing and clipboard access are defined here as traits only; the
//! concrete OS integrations (winit, platform clipboards) live in a
//! provider crate and plug in behind these seams.

pub mod clipboard;
pub mod window;

pub use clipboard::Clipboard;
pub use window::{SharedWindowHandle, VireoWindow, WindowHandle};
