use super::*;

// =============================================================
// URLs
// =============================================================

#[test]
fn service_url_joins_base_and_route() {
    assert_eq!(service_url("http://localhost:4567", "/buildings"), "http://localhost:4567/buildings");
}

#[test]
fn service_url_drops_trailing_slash_on_base() {
    assert_eq!(service_url("http://campus.example/api/", "/path"), "http://campus.example/api/path");
}

#[test]
fn base_url_defaults_outside_the_browser() {
    assert_eq!(service_base_url(), SERVICE_BASE_URL);
}

// =============================================================
// Status
// =============================================================

#[test]
fn check_status_accepts_2xx() {
    assert!(check_status(200).is_ok());
    assert!(check_status(204).is_ok());
}

#[test]
fn check_status_rejects_missing_parameter() {
    assert_eq!(check_status(400), Err(ApiError::UnexpectedStatus(400)));
    assert_eq!(check_status(500), Err(ApiError::UnexpectedStatus(500)));
}

#[test]
fn api_error_messages_name_the_service() {
    assert_eq!(ApiError::UnexpectedStatus(400).to_string(), "routing service answered 400");
    assert!(ApiError::ServiceUnreachable("refused".into()).to_string().contains("refused"));
}

// =============================================================
// Native fetch stubs
// =============================================================

#[test]
fn fetches_are_unavailable_natively() {
    let buildings = block_on(fetch_buildings());
    assert_eq!(buildings, Err(ApiError::Unavailable));
    let path = block_on(fetch_path("CSE", "CS2"));
    assert_eq!(path, Err(ApiError::Unavailable));
}

/// Poll a future that never awaits anything to completion.
fn block_on<F: std::future::Future>(future: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut future = pin!(future);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = future.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
