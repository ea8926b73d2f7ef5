//! Integration tests for the AutoParts storefront.
//!
//! The tests drive the full router in-process through
//! `tower::ServiceExt::oneshot`; no server or network is needed.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p autoparts-integration-tests
//! ```
//!
//! [`TestClient`] keeps the session cookie between requests the way a
//! browser would, so a sequence of calls shares one cart.

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{HeaderMap, Request, StatusCode, header},
};
use tower::ServiceExt;

use autoparts_storefront::{app, config::StorefrontConfig, state::AppState};

/// A response with its body collected as text.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// Value of a response header as text.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// In-process client for the storefront router that carries the session
/// cookie between requests.
#[derive(Clone)]
pub struct TestClient {
    app: Router,
    cookie: Option<String>,
}

impl Default for TestClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClient {
    /// Build a client around a storefront with the default configuration
    /// and the bundled content panels.
    ///
    /// # Panics
    ///
    /// Panics if the bundled content cannot be loaded.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn new() -> Self {
        let state =
            AppState::new(StorefrontConfig::default()).expect("bundled content should load");
        Self {
            app: app(state),
            cookie: None,
        }
    }

    /// A client sharing this storefront but starting a new session.
    #[must_use]
    pub fn fresh_session(&self) -> Self {
        Self {
            app: self.app.clone(),
            cookie: None,
        }
    }

    /// Send a GET request.
    pub async fn get(&mut self, uri: &str) -> TestResponse {
        let request = self.builder("GET", uri).body(Body::empty());
        self.send(request).await
    }

    /// Send a urlencoded form POST, as HTMX does.
    pub async fn post_form(&mut self, uri: &str, form: &str) -> TestResponse {
        let request = self
            .builder("POST", uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header("HX-Request", "true")
            .body(Body::from(form.to_string()));
        self.send(request).await
    }

    fn builder(&self, method: &str, uri: &str) -> axum::http::request::Builder {
        let builder = Request::builder().method(method).uri(uri);
        match &self.cookie {
            Some(cookie) => builder.header(header::COOKIE, cookie),
            None => builder,
        }
    }

    #[allow(clippy::expect_used)]
    async fn send(&mut self, request: axum::http::Result<Request<Body>>) -> TestResponse {
        let request = request.expect("request should build");
        let response = self
            .app
            .clone()
            .oneshot(request)
            .await
            .expect("router is infallible");

        if let Some(cookie) = response
            .headers()
            .get(header::SET_COOKIE)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.split(';').next())
        {
            self.cookie = Some(cookie.to_string());
        }

        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body should be readable");

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }
}
