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

//! The clipboard service seam.

use anyhow::Result;
use std::path::PathBuf;

/// Read/write access to the system clipboard.
///
/// Writes are fallible because OS clipboards are shared mutable state that
/// other processes can lock or invalidate; reads degrade to `None`/empty
/// instead of erroring.
pub trait Clipboard: Send + Sync {
    /// Returns `true` if the clipboard content changed since the last
    /// read through this provider.
    fn has_changed(&self) -> bool;

    /// Current textual content, if the clipboard holds text.
    fn text(&self) -> Option<String>;

    /// Current file-path list, if the clipboard holds files.
    fn file_paths(&self) -> Vec<PathBuf>;

    /// Replaces the clipboard content with `text`.
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Clears the clipboard.
    fn clear(&mut self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    /// In-memory stand-in used by engine tests.
    #[derive(Default)]
    struct MemoryClipboard {
        text: Option<String>,
        dirty: bool,
    }

    impl Clipboard for MemoryClipboard {
        fn has_changed(&self) -> bool {
            self.dirty
        }

        fn text(&self) -> Option<String> {
            self.text.clone()
        }

        fn file_paths(&self) -> Vec<PathBuf> {
            Vec::new()
        }

        fn set_text(&mut self, text: &str) -> Result<()> {
            self.text = Some(text.to_owned());
            self.dirty = true;
            Ok(())
        }

        fn clear(&mut self) -> Result<()> {
            self.text = None;
            self.dirty = true;
            Ok(())
        }
    }

    #[test]
    fn set_then_read_round_trips() {
        let mut clipboard = MemoryClipboard::default();
        assert!(!clipboard.has_changed());
        assert_eq!(clipboard.text(), None);

        clipboard.set_text("hello").unwrap();
        assert!(clipboard.has_changed());
        assert_eq!(clipboard.text().as_deref(), Some("hello"));

        clipboard.clear().unwrap();
        assert_eq!(clipboard.text(), None);
    }
}
