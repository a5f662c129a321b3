//! Resolved resource handed back to callers.

use crate::error::ResourceError;
use std::io::Cursor;

/// A named textual artifact produced by a loader.
///
/// `name` is the loader's display name for where the content came from (a
/// file path, `bundled:<key>`, ...), not necessarily the name that was asked
/// for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    name: String,
    content: Vec<u8>,
}

impl Resource {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.content
    }

    /// Content as a `Read` stream.
    pub fn reader(&self) -> Cursor<&[u8]> {
        Cursor::new(self.content.as_slice())
    }

    /// Content as UTF-8 text. Invalid UTF-8 is reported as `LoadFailed`.
    pub fn to_text(&self) -> Result<&str, ResourceError> {
        std::str::from_utf8(&self.content).map_err(|e| ResourceError::LoadFailed {
            name: self.name.clone(),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
        })
    }

    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}
