// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-request locale negotiation.
//!
//! Every request path is classified into one of three states:
//!
//! | State           | Path                 | Outcome                                  |
//! |-----------------|----------------------|------------------------------------------|
//! | `Root`          | `/`                  | redirect to `/{preferred}`, write cookie |
//! | `HasLocale`     | `/{supported}/...`   | continue, rewrite cookie if it differs   |
//! | `MissingLocale` | anything else        | redirect to `/{preferred}{path}`, write cookie |
//!
//! The preferred locale is, in order: the cookie (if supported), the first
//! supported `Accept-Language` entry, the registry default.
//!
//! Scanner paths are rejected before any of this runs.

use http::HeaderMap;
use lingo_i18n_core::{add_locale_prefix, Locale, LocaleRegistry};

use crate::accept_language::locale_from_headers;
use crate::cookie::extract_locale_cookie;
use crate::denylist::is_scanner_path;

/// Where a request path stands relative to the locale prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathState {
	Root,
	HasLocale(Locale),
	MissingLocale,
}

/// Classify a request path (without query).
pub fn classify_path(registry: &LocaleRegistry, path: &str) -> PathState {
	if path == "/" {
		return PathState::Root;
	}
	let segment = path
		.strip_prefix('/')
		.and_then(|rest| rest.split('/').next())
		.unwrap_or("");
	match registry.get(segment) {
		Some(locale) => PathState::HasLocale(locale),
		None => PathState::MissingLocale,
	}
}

/// Preferred locale for a request that carries no usable path locale.
pub fn preferred_locale(
	registry: &LocaleRegistry,
	cookie: Option<&str>,
	headers: &HeaderMap,
) -> Locale {
	if let Some(locale) = cookie.and_then(|c| registry.get(c)) {
		return locale;
	}
	if let Some(locale) = locale_from_headers(registry, headers) {
		return locale;
	}
	registry.default_locale().clone()
}

/// The outcome of negotiating one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
	/// Serve the request on `locale`, writing the cookie when `persist` is set.
	Continue { locale: Locale, persist: bool },
	/// Redirect to `location` and persist `locale`.
	Redirect { locale: Locale, location: String },
	/// Scanner request; answer with a bare 404.
	Reject,
}

impl Decision {
	pub fn locale(&self) -> Option<&Locale> {
		match self {
			Decision::Continue { locale, .. } | Decision::Redirect { locale, .. } => Some(locale),
			Decision::Reject => None,
		}
	}
}

/// Negotiate the locale for a request.
///
/// `path_and_query` is the request target as received (`/orders?page=2`).
pub fn negotiate(registry: &LocaleRegistry, path_and_query: &str, headers: &HeaderMap) -> Decision {
	let path = path_and_query
		.split_once('?')
		.map_or(path_and_query, |(path, _)| path);

	if is_scanner_path(path) {
		return Decision::Reject;
	}

	let cookie = extract_locale_cookie(headers);

	match classify_path(registry, path) {
		PathState::HasLocale(locale) => {
			let persist = cookie.as_deref() != Some(locale.as_str());
			Decision::Continue { locale, persist }
		}
		PathState::Root | PathState::MissingLocale => {
			let locale = preferred_locale(registry, cookie.as_deref(), headers);
			// Collapse leading slashes so `//host/x` cannot become an off-site redirect.
			let target = format!("/{}", path_and_query.trim_start_matches('/'));
			let location = add_locale_prefix(registry, &target, &locale);
			Decision::Redirect { locale, location }
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::header::{ACCEPT_LANGUAGE, COOKIE};
	use http::HeaderValue;

	fn registry() -> LocaleRegistry {
		LocaleRegistry::from_parts(Some("en"), Some("en,ar,fr"))
	}

	fn headers(cookie: Option<&'static str>, accept: Option<&'static str>) -> HeaderMap {
		let mut headers = HeaderMap::new();
		if let Some(cookie) = cookie {
			headers.insert(COOKIE, HeaderValue::from_static(cookie));
		}
		if let Some(accept) = accept {
			headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(accept));
		}
		headers
	}

	#[test]
	fn test_classify_path() {
		let r = registry();
		assert_eq!(classify_path(&r, "/"), PathState::Root);
		assert_eq!(classify_path(&r, "/ar"), PathState::HasLocale(Locale::new("ar")));
		assert_eq!(
			classify_path(&r, "/fr/dashboard"),
			PathState::HasLocale(Locale::new("fr"))
		);
		assert_eq!(classify_path(&r, "/dashboard"), PathState::MissingLocale);
		assert_eq!(classify_path(&r, "/de/dashboard"), PathState::MissingLocale);
		assert_eq!(classify_path(&r, "/EN/dashboard"), PathState::MissingLocale);
		assert_eq!(classify_path(&r, ""), PathState::MissingLocale);
	}

	#[test]
	fn test_preferred_locale_order() {
		let r = registry();
		let h = headers(None, Some("fr"));
		assert_eq!(preferred_locale(&r, Some("ar"), &h), Locale::new("ar"));
		assert_eq!(preferred_locale(&r, Some("de"), &h), Locale::new("fr"));
		assert_eq!(preferred_locale(&r, None, &h), Locale::new("fr"));
		assert_eq!(preferred_locale(&r, None, &HeaderMap::new()), Locale::new("en"));
	}

	#[test]
	fn test_root_redirects_to_accepted_locale() {
		let decision = negotiate(&registry(), "/", &headers(None, Some("de-DE, ar;q=0.8")));
		assert_eq!(
			decision,
			Decision::Redirect {
				locale: Locale::new("ar"),
				location: "/ar".to_string(),
			}
		);
	}

	#[test]
	fn test_root_prefers_cookie() {
		let decision = negotiate(&registry(), "/", &headers(Some("locale=fr"), Some("ar")));
		assert_eq!(decision.locale(), Some(&Locale::new("fr")));
	}

	#[test]
	fn test_missing_locale_keeps_query() {
		let decision = negotiate(
			&registry(),
			"/wallet/history?page=2",
			&headers(Some("locale=ar"), None),
		);
		assert_eq!(
			decision,
			Decision::Redirect {
				locale: Locale::new("ar"),
				location: "/ar/wallet/history?page=2".to_string(),
			}
		);
	}

	#[test]
	fn test_protocol_relative_path_stays_on_site() {
		let decision = negotiate(&registry(), "//evil.example/x", &HeaderMap::new());
		assert_eq!(
			decision,
			Decision::Redirect {
				locale: Locale::new("en"),
				location: "/en/evil.example/x".to_string(),
			}
		);
	}

	#[test]
	fn test_has_locale_matching_cookie_continues_quietly() {
		let decision = negotiate(&registry(), "/en/dashboard", &headers(Some("locale=en"), None));
		assert_eq!(
			decision,
			Decision::Continue {
				locale: Locale::new("en"),
				persist: false,
			}
		);
	}

	#[test]
	fn test_has_locale_rewrites_stale_cookie() {
		let decision = negotiate(&registry(), "/fr/dashboard", &headers(Some("locale=en"), None));
		assert_eq!(
			decision,
			Decision::Continue {
				locale: Locale::new("fr"),
				persist: true,
			}
		);

		let decision = negotiate(&registry(), "/fr", &HeaderMap::new());
		assert!(matches!(decision, Decision::Continue { persist: true, .. }));
	}

	#[test]
	fn test_scanner_rejected_before_locale_logic() {
		let r = registry();
		assert_eq!(negotiate(&r, "/wp-login.php", &HeaderMap::new()), Decision::Reject);
		assert_eq!(
			negotiate(&r, "/.env?x=1", &headers(Some("locale=en"), None)),
			Decision::Reject
		);
	}
}
