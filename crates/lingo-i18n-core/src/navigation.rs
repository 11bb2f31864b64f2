// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale-aware path rewriting.
//!
//! Paths have the shape `/{locale}/...rest`. These helpers add, replace and
//! strip the locale segment so in-app links stay on the negotiated locale.
//! Query strings and fragments are preserved.

use std::sync::Arc;

use crate::locale::Locale;
use crate::registry::LocaleRegistry;

/// Split a path into the path proper and its `?query#fragment` suffix.
fn split_suffix(path: &str) -> (&str, &str) {
	match path.find(['?', '#']) {
		Some(i) => (&path[..i], &path[i..]),
		None => (path, ""),
	}
}

/// The remainder of `path` after a leading supported locale segment.
///
/// `path` must start with `/`. The remainder is empty or starts with `/`.
fn strip_locale_segment<'a>(registry: &LocaleRegistry, path: &'a str) -> Option<&'a str> {
	let after = path.strip_prefix('/')?;
	let (segment, rest) = match after.find('/') {
		Some(i) => (&after[..i], &after[i..]),
		None => (after, ""),
	};
	registry.is_valid_locale(segment).then_some(rest)
}

fn is_app_path(path: &str) -> bool {
	path.starts_with('/') && !path.starts_with("//")
}

/// Prefix `path` with `locale`, replacing an existing locale segment.
///
/// Unsupported locales are replaced by the registry default. Relative paths
/// and protocol-relative URLs are returned unchanged.
pub fn add_locale_prefix(registry: &LocaleRegistry, path: &str, locale: &Locale) -> String {
	if !is_app_path(path) {
		return path.to_string();
	}
	let locale = registry.resolve(locale.as_str());
	let (path, suffix) = split_suffix(path);
	let rest = strip_locale_segment(registry, path).unwrap_or(path);
	let rest = if rest == "/" { "" } else { rest };
	format!("/{locale}{rest}{suffix}")
}

/// Remove a leading supported locale segment from `path`.
///
/// Returns `/` when nothing remains. Paths without a locale segment are
/// returned unchanged.
pub fn remove_locale_prefix(registry: &LocaleRegistry, path: &str) -> String {
	if !is_app_path(path) {
		return path.to_string();
	}
	let (bare, suffix) = split_suffix(path);
	match strip_locale_segment(registry, bare) {
		Some("") => format!("/{suffix}"),
		Some(rest) => format!("{rest}{suffix}"),
		None => path.to_string(),
	}
}

/// The supported locale named by the first segment of `path`.
pub fn locale_from_path(registry: &LocaleRegistry, path: &str) -> Option<Locale> {
	let (path, _) = split_suffix(path);
	let segment = path.strip_prefix('/')?.split('/').next()?;
	registry.get(segment)
}

/// Whether `href` points outside the application.
///
/// Absolute URLs (`https:`, `mailto:`, `tel:` and any other scheme),
/// protocol-relative URLs and bare `#fragment`s never receive a locale
/// prefix.
pub fn is_external_href(href: &str) -> bool {
	href.starts_with("//") || href.starts_with('#') || has_scheme(href)
}

fn has_scheme(href: &str) -> bool {
	let Some(colon) = href.find(':') else {
		return false;
	};
	let scheme = &href[..colon];
	let mut chars = scheme.chars();
	match chars.next() {
		Some(first) if first.is_ascii_alphabetic() => {
			chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
		}
		_ => false,
	}
}

/// Builds in-app hrefs on an ambient locale.
#[derive(Debug, Clone)]
pub struct LinkBuilder {
	registry: Arc<LocaleRegistry>,
	locale: Locale,
}

impl LinkBuilder {
	/// Unsupported locales are replaced by the registry default.
	pub fn new(registry: Arc<LocaleRegistry>, locale: &Locale) -> Self {
		let locale = registry.resolve(locale.as_str());
		Self { registry, locale }
	}

	pub fn locale(&self) -> &Locale {
		&self.locale
	}

	pub fn registry(&self) -> &Arc<LocaleRegistry> {
		&self.registry
	}

	/// Localize `href` on the ambient locale.
	pub fn href(&self, href: &str) -> String {
		self.href_in(href, None)
	}

	/// Localize `href` on `locale`, or on the ambient locale when `None`.
	pub fn href_in(&self, href: &str, locale: Option<&Locale>) -> String {
		if is_external_href(href) {
			return href.to_string();
		}
		let locale = match locale {
			Some(locale) => self.registry.resolve(locale.as_str()),
			None => self.locale.clone(),
		};
		add_locale_prefix(&self.registry, href, &locale)
	}

	/// The same page as `current_path` in another locale.
	pub fn switch_locale(&self, current_path: &str, target: &Locale) -> String {
		self.href_in(current_path, Some(target))
	}
}
