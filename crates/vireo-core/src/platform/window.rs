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

//! The windowing seam graphics backends attach to.

use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use std::sync::Arc;

/// Combines the raw-window-handle traits a graphics backend needs into a
/// single trait, so it can be used as a trait object.
pub trait WindowHandle: HasWindowHandle + HasDisplayHandle {}

impl<T: HasWindowHandle + HasDisplayHandle> WindowHandle for T {}

/// A shared, thread-safe window handle a backend can create a surface from.
pub type SharedWindowHandle = Arc<dyn WindowHandle + Send + Sync>;

/// The behavior the engine expects from a window, whatever windowing
/// library provides it.
pub trait VireoWindow: HasWindowHandle + HasDisplayHandle + Send + Sync {
    /// Physical size (width, height) of the drawable area in pixels.
    fn inner_size(&self) -> (u32, u32);

    /// The window's DPI scale factor.
    fn scale_factor(&self) -> f64;

    /// Schedules a redraw of the window contents.
    fn request_redraw(&self);

    /// Sets the window title.
    fn set_title(&self, title: &str);

    /// A shared handle suitable for surface creation on another thread.
    fn shared_handle(&self) -> SharedWindowHandle;

    /// A stable identifier distinguishing this window from its siblings.
    fn id(&self) -> u64;
}
