//! Cross-origin isolation headers
//!
//! Every response leaves the server through `apply_isolation_headers`, which
//! makes the page cross-origin isolated (`SharedArrayBuffer`, high resolution
//! timers).

use hyper::header::{HeaderName, HeaderValue};
use hyper::Response;

pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-opener-policy");
pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName =
    HeaderName::from_static("cross-origin-embedder-policy");

pub const OPENER_POLICY_VALUE: &str = "same-origin";
pub const EMBEDDER_POLICY_VALUE: &str = "require-corp";

/// Set both isolation headers, replacing any value already present
pub fn apply_isolation_headers<B>(response: &mut Response<B>) {
    let headers = response.headers_mut();
    headers.insert(
        CROSS_ORIGIN_OPENER_POLICY,
        HeaderValue::from_static(OPENER_POLICY_VALUE),
    );
    headers.insert(
        CROSS_ORIGIN_EMBEDDER_POLICY,
        HeaderValue::from_static(EMBEDDER_POLICY_VALUE),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_added_once() {
        let mut resp = Response::builder()
            .status(404)
            .header("Cross-Origin-Opener-Policy", "unsafe-none")
            .header("Cross-Origin-Opener-Policy", "same-origin-allow-popups")
            .body(())
            .unwrap();

        apply_isolation_headers(&mut resp);
        apply_isolation_headers(&mut resp);

        let coop: Vec<_> = resp.headers().get_all(CROSS_ORIGIN_OPENER_POLICY).iter().collect();
        let coep: Vec<_> = resp.headers().get_all(CROSS_ORIGIN_EMBEDDER_POLICY).iter().collect();
        assert_eq!(coop, vec!["same-origin"]);
        assert_eq!(coep, vec!["require-corp"]);
        assert_eq!(resp.status(), 404);
    }
}
