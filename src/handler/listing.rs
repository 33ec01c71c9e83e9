//! Directory listing module
//!
//! Generates the HTML index served for directories without an index file.

use crate::handler::router::RequestContext;
use crate::http::{self, path::decode_path, ResponseBody};
use hyper::Response;
use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::io;
use std::path::Path;
use tokio::fs;

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// File name as stored on disk, not necessarily UTF-8
    pub name: OsString,
    /// Directory, or symlink resolving to one
    pub is_dir: bool,
    pub is_symlink: bool,
}

impl ListingEntry {
    /// Text shown to the user; symlinks are marked with `@`
    fn display_name(&self) -> String {
        let name = self.name.to_string_lossy();
        if self.is_symlink {
            format!("{name}@")
        } else if self.is_dir {
            format!("{name}/")
        } else {
            name.into_owned()
        }
    }

    /// Relative link target, percent-encoded from the raw name bytes
    fn href(&self) -> String {
        let encoded = encode_name(&self.name);
        if self.is_dir {
            format!("{encoded}/")
        } else {
            encoded.into_owned()
        }
    }
}

#[cfg(unix)]
fn encode_name(name: &OsStr) -> Cow<'_, str> {
    use std::os::unix::ffi::OsStrExt;
    urlencoding::encode_binary(name.as_bytes())
}

#[cfg(not(unix))]
fn encode_name(name: &OsStr) -> Cow<'_, str> {
    Cow::Owned(urlencoding::encode(&name.to_string_lossy()).into_owned())
}

/// Serve a listing for `dir`, which has already been confined to the root
pub async fn serve_listing(
    ctx: &RequestContext<'_>,
    dir: &Path,
) -> io::Result<Response<ResponseBody>> {
    let entries = read_entries(dir).await?;
    let html = render_listing(&decode_path(ctx.path), &entries);
    Ok(http::build_html_response(html, ctx.is_head))
}

/// Read the immediate entries of a directory, sorted case-insensitively
pub async fn read_entries(dir: &Path) -> io::Result<Vec<ListingEntry>> {
    let mut reader = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = reader.next_entry().await? {
        let file_type = entry.file_type().await?;
        let is_symlink = file_type.is_symlink();
        let is_dir = if is_symlink {
            // Dangling links are listed as plain entries
            fs::metadata(entry.path()).await.is_ok_and(|m| m.is_dir())
        } else {
            file_type.is_dir()
        };

        entries.push(ListingEntry {
            name: entry.file_name(),
            is_dir,
            is_symlink,
        });
    }

    entries.sort_by_cached_key(|e| e.name.to_string_lossy().to_lowercase());
    Ok(entries)
}

/// Render the listing page for the decoded request path
pub fn render_listing(display_path: &str, entries: &[ListingEntry]) -> String {
    let title = format!("Directory listing for {}", http::escape_html(display_path));

    let mut html = String::with_capacity(256 + entries.len() * 64);
    html.push_str("<!DOCTYPE HTML>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{title}</title>\n</head>\n<body>\n<h1>{title}</h1>\n<hr>\n<ul>\n"));
    for entry in entries {
        html.push_str(&format!(
            "<li><a href=\"{}\">{}</a></li>\n",
            http::escape_html(&entry.href()),
            http::escape_html(&entry.display_name()),
        ));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    html
}
