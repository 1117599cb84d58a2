//! Title → filename mapping.
//!
//! Every page title must produce some valid output filename. Titles that are
//! already clean filesystem names are used as-is; anything else falls back to
//! a digest of the title, trading readability for a guaranteed-valid name.

use sha2::{Digest, Sha256};

/// Extension shared by every file in an export.
pub const RST_EXTENSION: &str = "rst";

/// Characters that disqualify a title from being used as a filename directly.
const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// How a page title was turned into a filename stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilenameStem {
    /// The title itself was usable as a filename.
    Literal(String),
    /// The title was not representable; a digest of it stands in.
    HashFallback(String),
}

impl FilenameStem {
    /// Deterministic mapping from a title to its filename stem.
    pub fn for_title(title: &str) -> Self {
        if is_filename_safe(title) {
            Self::Literal(title.to_string())
        } else {
            let digest = Sha256::digest(title.as_bytes());
            Self::HashFallback(format!("{digest:x}")[..16].to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Literal(stem) | Self::HashFallback(stem) => stem,
        }
    }
}

/// Map a page title to its output filename, extension included.
pub fn filename_for(title: &str) -> String {
    format!("{}.{}", FilenameStem::for_title(title).as_str(), RST_EXTENSION)
}

/// A title is usable as a filename stem when it is printable ASCII with none
/// of the reserved path characters, and is not a directory self-reference.
fn is_filename_safe(title: &str) -> bool {
    if title.is_empty() || title == "." || title == ".." {
        return false;
    }
    title
        .chars()
        .all(|c| c.is_ascii() && !c.is_ascii_control() && !RESERVED.contains(&c))
}
