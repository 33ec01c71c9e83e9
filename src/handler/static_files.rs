//! Static file serving module
//!
//! Resolves a request path under the root and answers with the file, the
//! directory's index file, a generated listing, or an error page.

use crate::config::AppState;
use crate::error::ServeError;
use crate::handler::listing;
use crate::handler::router::RequestContext;
use crate::http::{self, body, conditional, mime, ResponseBody};
use crate::logger;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve the target of a GET/HEAD request
pub async fn serve(ctx: &RequestContext<'_>, state: &AppState) -> Response<ResponseBody> {
    match resolve_and_serve(ctx, state).await {
        Ok(resp) => resp,
        Err(err) => {
            if let ServeError::Internal(e) = &err {
                logger::log_error(&format!("Failed to serve '{}': {e}", ctx.path));
            }
            http::build_error_response(err.status(), err.message(), ctx.is_head)
        }
    }
}

async fn resolve_and_serve(
    ctx: &RequestContext<'_>,
    state: &AppState,
) -> Result<Response<ResponseBody>, ServeError> {
    let resolved = http::translate_path(&state.root, ctx.path);
    let target = confine(&state.root, &resolved.fs_path, ctx.path).await?;
    let metadata = fs::metadata(&target).await?;

    if metadata.is_dir() {
        if !resolved.trailing_slash {
            return Ok(http::build_redirect_response(&slash_location(ctx)));
        }
        if let Some(index) = find_index(state, &resolved.fs_path, ctx.path).await {
            return serve_file(ctx, &index.requested, &index.canonical, &index.metadata).await;
        }
        return Ok(listing::serve_listing(ctx, &target).await?);
    }

    // A file cannot be addressed as a directory
    if resolved.trailing_slash {
        return Err(ServeError::NotFound);
    }

    serve_file(ctx, &resolved.fs_path, &target, &metadata).await
}

/// Canonicalize `path` and make sure it is still under `root`
///
/// Lexical translation already keeps `..` inside the root; this catches
/// symlinks pointing elsewhere.
pub async fn confine(root: &Path, path: &Path, url_path: &str) -> Result<PathBuf, ServeError> {
    let canonical = fs::canonicalize(path).await?;
    if canonical.starts_with(root) {
        Ok(canonical)
    } else {
        logger::log_warning(&format!(
            "Path traversal attempt blocked: {} -> {}",
            url_path,
            canonical.display()
        ));
        Err(ServeError::NotFound)
    }
}

/// An index file found inside a requested directory
struct IndexFile {
    /// Path under the requested directory, named as configured
    requested: PathBuf,
    canonical: PathBuf,
    metadata: std::fs::Metadata,
}

/// First configured index file present in `dir`
async fn find_index(state: &AppState, dir: &Path, url_path: &str) -> Option<IndexFile> {
    for name in &state.config.http.index_files {
        let requested = dir.join(name);
        let Ok(canonical) = confine(&state.root, &requested, url_path).await else {
            continue;
        };
        if let Ok(metadata) = fs::metadata(&canonical).await {
            if metadata.is_file() {
                return Some(IndexFile {
                    requested,
                    canonical,
                    metadata,
                });
            }
        }
    }
    None
}

/// Answer with a file's contents
///
/// The Content-Type follows `requested`, the name the client asked for;
/// `canonical` is only used for reading.
async fn serve_file(
    ctx: &RequestContext<'_>,
    requested: &Path,
    canonical: &Path,
    metadata: &std::fs::Metadata,
) -> Result<Response<ResponseBody>, ServeError> {
    let modified = metadata.modified().ok();
    let last_modified = modified.map(conditional::http_date);

    if let (Some(mtime), Some(stamp)) = (modified, last_modified.as_deref()) {
        if conditional::not_modified(ctx.if_modified_since.as_deref(), ctx.has_if_none_match, mtime)
        {
            return Ok(http::build_304_response(stamp));
        }
    }

    let content_type = mime::content_type_for(requested);
    // Opening surfaces permission errors before any header is sent
    let file = fs::File::open(canonical).await?;
    let body = if ctx.is_head {
        body::empty()
    } else {
        body::file(file)
    };

    Ok(http::build_file_response(
        body,
        metadata.len(),
        content_type,
        last_modified.as_deref(),
    ))
}

/// The request URL with a `/` appended to the path, query preserved
fn slash_location(ctx: &RequestContext<'_>) -> String {
    match ctx.query {
        Some(q) => format!("{}/?{q}", ctx.path),
        None => format!("{}/", ctx.path),
    }
}
