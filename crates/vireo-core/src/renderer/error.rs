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

//! Error types of the rendering subsystem.
//!
//! The 2D command manager itself has no recoverable errors: it treats bad
//! indices and invalid state as caller contract violations (debug asserts).
//! Errors here belong to the resource layers around it.

use crate::renderer::api::shader::{PixelShaderId, VertexShaderId};
use std::fmt;

/// An error resolving or managing a shader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// The requested vertex shader is not registered.
    VertexNotFound {
        /// The id that failed to resolve.
        id: VertexShaderId,
    },
    /// The requested pixel shader is not registered.
    PixelNotFound {
        /// The id that failed to resolve.
        id: PixelShaderId,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::VertexNotFound { id } => {
                write!(f, "Vertex shader not found for ID: {id:?}")
            }
            ShaderError::PixelNotFound { id } => {
                write!(f, "Pixel shader not found for ID: {id:?}")
            }
        }
    }
}

impl std::error::Error for ShaderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_id() {
        let err = ShaderError::PixelNotFound {
            id: PixelShaderId::from_raw(3),
        };
        let text = err.to_string();
        assert!(text.contains("Pixel shader"));
        assert!(text.contains('3'));
    }
}
