// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The persisted locale preference cookie.

use http::header::COOKIE;
use http::HeaderMap;
use lingo_i18n_core::Locale;

/// Name of the locale preference cookie.
pub const LOCALE_COOKIE_NAME: &str = "locale";

/// One year.
pub const LOCALE_COOKIE_MAX_AGE_SECONDS: u64 = 365 * 24 * 60 * 60;

/// Extract the locale preference from the Cookie header(s).
///
/// The value is returned as sent; callers check it against the registry.
pub fn extract_locale_cookie(headers: &HeaderMap) -> Option<String> {
	extract_cookie_with_name(headers, LOCALE_COOKIE_NAME)
}

pub fn extract_cookie_with_name(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
	headers
		.get_all(COOKIE)
		.iter()
		.filter_map(|value| value.to_str().ok())
		.flat_map(|value| value.split(';'))
		.find_map(|cookie| {
			let (name, value) = cookie.trim().split_once('=')?;
			(name.trim() == cookie_name).then(|| value.trim().trim_matches('"').to_string())
		})
}

/// `Set-Cookie` value persisting `locale`.
pub fn locale_cookie_header(locale: &Locale) -> String {
	format!(
		"{LOCALE_COOKIE_NAME}={locale}; Path=/; Max-Age={LOCALE_COOKIE_MAX_AGE_SECONDS}; SameSite=Lax"
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use http::HeaderValue;

	#[test]
	fn test_extracts_locale_cookie() {
		let mut headers = HeaderMap::new();
		headers.insert(COOKIE, HeaderValue::from_static("session=abc; locale=ar; theme=dark"));
		assert_eq!(extract_locale_cookie(&headers), Some("ar".to_string()));
	}

	#[test]
	fn test_missing_cookie() {
		let mut headers = HeaderMap::new();
		assert_eq!(extract_locale_cookie(&headers), None);

		headers.insert(COOKIE, HeaderValue::from_static("locale_hint=fr; other=1"));
		assert_eq!(extract_locale_cookie(&headers), None);
	}

	#[test]
	fn test_multiple_cookie_headers() {
		let mut headers = HeaderMap::new();
		headers.append(COOKIE, HeaderValue::from_static("session=abc"));
		headers.append(COOKIE, HeaderValue::from_static("locale=\"en\""));
		assert_eq!(extract_locale_cookie(&headers), Some("en".to_string()));
	}

	#[test]
	fn test_set_cookie_header() {
		assert_eq!(
			locale_cookie_header(&Locale::new("ar")),
			"locale=ar; Path=/; Max-Age=31536000; SameSite=Lax"
		);
	}
}
