//! REST helpers for the campus routing service.
//!
//! Browser builds (`csr`): real HTTP calls via `gloo-net`.
//! Native builds (tests): the fetches return `ApiError::Unavailable` since
//! the endpoints are only reachable from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is an `ApiError` value; the paths page logs it and shows a
//! banner without touching the line-mapper state.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use edges::service::{BuildingMap, PathResponse};
#[cfg(feature = "csr")]
use edges::service::{BUILDINGS_ROUTE, PATH_ROUTE};

/// Where the routing service listens unless the page overrides it.
pub const SERVICE_BASE_URL: &str = "http://localhost:4567";

/// `<meta name=...>` tag whose `content` overrides [`SERVICE_BASE_URL`].
pub const BASE_URL_META: &str = "campus-paths-url";

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("routing service unreachable: {0}")]
    ServiceUnreachable(String),
    #[error("routing service answered {0}")]
    UnexpectedStatus(u16),
    #[error("routing service sent an unreadable body: {0}")]
    InvalidBody(String),
    #[error("routing service is only reachable from the browser")]
    Unavailable,
}

/// Join a base URL and a route without doubling the slash.
#[must_use]
pub fn service_url(base: &str, route: &str) -> String {
    format!("{}{route}", base.trim_end_matches('/'))
}

/// Map a non-2xx status to `UnexpectedStatus`.
///
/// # Errors
///
/// Returns `ApiError::UnexpectedStatus` for any status outside `200..300`.
pub fn check_status(status: u16) -> Result<(), ApiError> {
    if (200..300).contains(&status) { Ok(()) } else { Err(ApiError::UnexpectedStatus(status)) }
}

/// Base URL for the routing service, honoring the page's meta override.
pub fn service_base_url() -> String {
    #[cfg(feature = "csr")]
    {
        if let Some(url) = meta_base_url() {
            return url;
        }
    }
    SERVICE_BASE_URL.to_owned()
}

#[cfg(feature = "csr")]
fn meta_base_url() -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{BASE_URL_META}\"]");
    let meta = document.query_selector(&selector).ok()??;
    let content = meta.dyn_into::<web_sys::HtmlMetaElement>().ok()?.content();
    let content = content.trim();
    (!content.is_empty()).then(|| content.to_owned())
}

/// Fetch every known building from `GET /buildings`.
///
/// # Errors
///
/// Returns an `ApiError` if the service is unreachable, answers with a
/// non-2xx status, or sends JSON that is not a building map.
pub async fn fetch_buildings() -> Result<BuildingMap, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = service_url(&service_base_url(), BUILDINGS_ROUTE);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::ServiceUnreachable(e.to_string()))?;
        check_status(resp.status())?;
        resp.json::<BuildingMap>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the shortest path between two building codes from `GET /path`.
///
/// # Errors
///
/// Returns an `ApiError` if the service is unreachable, answers with a
/// non-2xx status (400 for an unknown code), or sends a malformed path.
pub async fn fetch_path(start: &str, end: &str) -> Result<PathResponse, ApiError> {
    #[cfg(feature = "csr")]
    {
        let url = service_url(&service_base_url(), PATH_ROUTE);
        let resp = gloo_net::http::Request::get(&url)
            .query([("start", start), ("end", end)])
            .send()
            .await
            .map_err(|e| ApiError::ServiceUnreachable(e.to_string()))?;
        check_status(resp.status())?;
        resp.json::<PathResponse>()
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (start, end);
        Err(ApiError::Unavailable)
    }
}
