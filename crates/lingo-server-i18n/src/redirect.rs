// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redirects that stay on the negotiated locale.

use axum::response::Redirect;
use lingo_i18n_core::Locale;

use crate::extract::RequestLocale;

/// A `303 See Other` redirect to `path` on the request's locale.
///
/// External targets are passed through untouched.
pub fn redirect_localized(locale: &RequestLocale, path: &str) -> Redirect {
	Redirect::to(&locale.links().href(path))
}

impl RequestLocale {
	/// See [`redirect_localized`].
	pub fn redirect(&self, path: &str) -> Redirect {
		redirect_localized(self, path)
	}

	/// Redirect to `path` on another locale.
	pub fn redirect_in(&self, path: &str, locale: &Locale) -> Redirect {
		Redirect::to(&self.links().href_in(path, Some(locale)))
	}
}
