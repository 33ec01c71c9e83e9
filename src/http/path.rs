//! Request path translation
//!
//! Maps a URL path onto the filesystem under the server root. The mapping is
//! purely lexical: `..` can never climb above the root, whatever the input.

use std::path::{Path, PathBuf};

/// A URL path mapped onto the filesystem
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub fs_path: PathBuf,
    /// The decoded URL path ended with `/`
    pub trailing_slash: bool,
}

/// Percent-decode a URL path; invalid UTF-8 is replaced rather than rejected
pub fn decode_path(url_path: &str) -> String {
    let bytes = urlencoding::decode_binary(url_path.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Translate a URL path (without query string) to a path under `root`
///
/// Empty and `.` segments are dropped, `..` removes the previous segment and
/// is ignored at the top, and segments carrying a backslash or NUL byte are
/// skipped entirely.
pub fn translate_path(root: &Path, url_path: &str) -> ResolvedPath {
    let decoded = decode_path(url_path);
    let trailing_slash = decoded.trim_end().ends_with('/');

    let mut segments: Vec<&str> = Vec::new();
    for segment in decoded.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            s if s.contains('\\') || s.contains('\0') => {}
            s => segments.push(s),
        }
    }

    let mut fs_path = root.to_path_buf();
    fs_path.extend(segments);

    ResolvedPath {
        fs_path,
        trailing_slash,
    }
}
