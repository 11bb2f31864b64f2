// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Tower layer running locale negotiation ahead of the router.
//!
//! ```ignore
//! Router::new()
//!     .route("/{locale}/dashboard", get(dashboard))
//!     .layer(LocaleLayer::new(registry).passthrough("/health"))
//! ```
//!
//! Redirects and scanner rejections are answered by the layer itself; the inner
//! service only sees requests whose first path segment is a supported locale.

use std::{
	future::Future,
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
};

use axum::{
	body::Body,
	http::{
		header::{HeaderValue, SET_COOKIE},
		Request, StatusCode,
	},
	response::{IntoResponse, Redirect, Response},
};
use lingo_i18n_core::{Locale, LocaleRegistry};
use pin_project_lite::pin_project;
use tower::{Layer, Service};

use crate::cookie::locale_cookie_header;
use crate::extract::RequestLocale;
use crate::negotiate::{negotiate, Decision};

/// Layer that negotiates the request locale.
#[derive(Debug, Clone)]
pub struct LocaleLayer {
	registry: Arc<LocaleRegistry>,
	passthrough: Arc<[String]>,
}

impl LocaleLayer {
	pub fn new(registry: Arc<LocaleRegistry>) -> Self {
		Self {
			registry,
			passthrough: Arc::from(Vec::new()),
		}
	}

	/// Skip negotiation for paths under `prefix` (health checks, assets).
	///
	/// Skipped requests carry no [`RequestLocale`].
	pub fn passthrough(mut self, prefix: impl Into<String>) -> Self {
		let mut prefixes = self.passthrough.to_vec();
		prefixes.push(prefix.into());
		self.passthrough = Arc::from(prefixes);
		self
	}

	pub fn registry(&self) -> &Arc<LocaleRegistry> {
		&self.registry
	}
}

impl<S> Layer<S> for LocaleLayer {
	type Service = LocaleService<S>;

	fn layer(&self, inner: S) -> Self::Service {
		LocaleService {
			inner,
			registry: Arc::clone(&self.registry),
			passthrough: Arc::clone(&self.passthrough),
		}
	}
}

/// Service wrapper for [`LocaleLayer`].
#[derive(Debug, Clone)]
pub struct LocaleService<S> {
	inner: S,
	registry: Arc<LocaleRegistry>,
	passthrough: Arc<[String]>,
}

impl<S> LocaleService<S> {
	fn is_passthrough(&self, path: &str) -> bool {
		self.passthrough.iter().any(|prefix| {
			path
				.strip_prefix(prefix.as_str())
				.is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
		})
	}
}

impl<S> Service<Request<Body>> for LocaleService<S>
where
	S: Service<Request<Body>, Response = Response> + Clone + Send + 'static,
	S::Future: Send,
{
	type Response = Response;
	type Error = S::Error;
	type Future = LocaleFuture<S::Future>;

	fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
		self.inner.poll_ready(cx)
	}

	fn call(&mut self, mut req: Request<Body>) -> Self::Future {
		let path = req.uri().path();
		if self.is_passthrough(path) {
			return LocaleFuture::Inner {
				fut: self.inner.call(req),
				set_cookie: None,
			};
		}

		let path_and_query = req
			.uri()
			.path_and_query()
			.map_or_else(|| path.to_string(), |pq| pq.as_str().to_string());

		match negotiate(&self.registry, &path_and_query, req.headers()) {
			Decision::Reject => {
				tracing::trace!(path = %req.uri().path(), "rejected scanner request");
				LocaleFuture::Ready {
					resp: Some(StatusCode::NOT_FOUND.into_response()),
				}
			}
			Decision::Redirect { locale, location } => {
				tracing::debug!(
					from = %path_and_query,
					to = %location,
					locale = %locale,
					"redirecting to localized path"
				);
				let resp = match cookie_value(&locale) {
					Some(cookie) => ([(SET_COOKIE, cookie)], Redirect::temporary(&location)).into_response(),
					None => Redirect::temporary(&location).into_response(),
				};
				LocaleFuture::Ready { resp: Some(resp) }
			}
			Decision::Continue { locale, persist } => {
				if persist {
					tracing::debug!(locale = %locale, "persisting path locale");
				}
				let set_cookie = persist.then(|| cookie_value(&locale)).flatten();
				req
					.extensions_mut()
					.insert(RequestLocale::new(locale, Arc::clone(&self.registry)));
				LocaleFuture::Inner {
					fut: self.inner.call(req),
					set_cookie,
				}
			}
		}
	}
}

fn cookie_value(locale: &Locale) -> Option<HeaderValue> {
	match HeaderValue::from_str(&locale_cookie_header(locale)) {
		Ok(value) => Some(value),
		Err(e) => {
			tracing::warn!(locale = %locale, error = %e, "locale is not a valid cookie value");
			None
		}
	}
}

pin_project! {
	/// Future for [`LocaleService`].
	#[project = LocaleFutureProj]
	pub enum LocaleFuture<F> {
		Inner { #[pin] fut: F, set_cookie: Option<HeaderValue> },
		Ready { resp: Option<Response> },
	}
}

impl<F, E> Future for LocaleFuture<F>
where
	F: Future<Output = Result<Response, E>>,
{
	type Output = Result<Response, E>;

	fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
		match self.project() {
			LocaleFutureProj::Inner { fut, set_cookie } => {
				let mut resp = match fut.poll(cx) {
					Poll::Ready(Ok(resp)) => resp,
					other => return other,
				};
				if let Some(cookie) = set_cookie.take() {
					resp.headers_mut().append(SET_COOKIE, cookie);
				}
				Poll::Ready(Ok(resp))
			}
			LocaleFutureProj::Ready { resp } => {
				Poll::Ready(Ok(resp.take().expect("polled after completion")))
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use axum::http::header::{ACCEPT_LANGUAGE, COOKIE, LOCATION};
	use axum::{routing::get, Router};
	use tower::ServiceExt;

	async fn echo_locale(locale: RequestLocale) -> String {
		locale.locale().to_string()
	}

	fn app() -> Router {
		let registry = Arc::new(LocaleRegistry::from_parts(Some("en"), Some("en,ar,fr")));
		Router::new()
			.route("/{locale}", get(echo_locale))
			.route("/{locale}/dashboard", get(echo_locale))
			.route("/health", get(|| async { "ok" }))
			.fallback(|| async { StatusCode::NOT_FOUND })
			.layer(LocaleLayer::new(registry).passthrough("/health"))
	}

	async fn body_string(resp: Response) -> String {
		let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
			.await
			.unwrap();
		String::from_utf8(bytes.to_vec()).unwrap()
	}

	#[tokio::test]
	async fn test_root_redirects_with_cookie() {
		let resp = app()
			.oneshot(
				Request::builder()
					.uri("/")
					.header(ACCEPT_LANGUAGE, "de-DE,de;q=0.9,ar;q=0.8")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
		assert_eq!(resp.headers()[LOCATION], "/ar");
		assert_eq!(
			resp.headers()[SET_COOKIE],
			"locale=ar; Path=/; Max-Age=31536000; SameSite=Lax"
		);
	}

	#[tokio::test]
	async fn test_missing_locale_redirect_keeps_query() {
		let resp = app()
			.oneshot(
				Request::builder()
					.uri("/dashboard?tab=orders")
					.header(COOKIE, "locale=fr")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::TEMPORARY_REDIRECT);
		assert_eq!(resp.headers()[LOCATION], "/fr/dashboard?tab=orders");
	}

	#[tokio::test]
	async fn test_matching_cookie_passes_through_untouched() {
		let resp = app()
			.oneshot(
				Request::builder()
					.uri("/en/dashboard")
					.header(COOKIE, "locale=en")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::OK);
		assert!(resp.headers().get(SET_COOKIE).is_none());
		assert_eq!(body_string(resp).await, "en");
	}

	#[tokio::test]
	async fn test_path_locale_rewrites_cookie() {
		let resp = app()
			.oneshot(
				Request::builder()
					.uri("/fr/dashboard")
					.header(COOKIE, "locale=en")
					.body(Body::empty())
					.unwrap(),
			)
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::OK);
		assert_eq!(
			resp.headers()[SET_COOKIE],
			"locale=fr; Path=/; Max-Age=31536000; SameSite=Lax"
		);
		assert_eq!(body_string(resp).await, "fr");
	}

	#[tokio::test]
	async fn test_scanner_is_bare_not_found() {
		for uri in ["/wp-login.php", "/.env", "/phpmyadmin/index.php"] {
			let resp = app()
				.oneshot(
					Request::builder()
						.uri(uri)
						.header(COOKIE, "locale=ar")
						.body(Body::empty())
						.unwrap(),
				)
				.await
				.unwrap();

			assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{uri}");
			assert!(resp.headers().get(SET_COOKIE).is_none());
			assert!(resp.headers().get(LOCATION).is_none());
			assert!(body_string(resp).await.is_empty());
		}
	}

	#[tokio::test]
	async fn test_passthrough_skips_negotiation() {
		let resp = app()
			.oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::OK);
		assert!(resp.headers().get(SET_COOKIE).is_none());
		assert_eq!(body_string(resp).await, "ok");
	}

	#[tokio::test]
	async fn test_extractor_without_layer_is_server_error() {
		let app = Router::new().route("/{locale}", get(echo_locale));
		let resp = app
			.oneshot(Request::builder().uri("/en").body(Body::empty()).unwrap())
			.await
			.unwrap();

		assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
		assert!(body_string(resp).await.contains("LocaleLayer"));
	}
}
