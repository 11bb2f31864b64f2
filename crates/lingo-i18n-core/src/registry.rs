// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported locale set and defaults.

use tracing::debug;

use crate::locale::{locale_info, Direction, Locale, LocaleInfo};
use crate::namespace::Namespace;

/// Default locale used when none is configured.
pub const DEFAULT_LOCALE: &str = "en";

/// The default locale and its alternate when no supported locales are
/// configured.
pub const FALLBACK_LOCALES: &[&str] = &["en", "ar"];

/// Namespaces loaded for every page.
pub const DEFAULT_NAMESPACES: &[Namespace] = &[Namespace::Common, Namespace::Menu];

/// Environment variable holding the default locale.
pub const DEFAULT_LOCALE_ENV: &str = "LINGO_SERVER_DEFAULT_LOCALE";

/// Environment variable holding the supported locale list.
pub const LOCALES_ENV: &str = "LINGO_SERVER_LOCALES";

/// The supported locales, the default locale and the always-loaded
/// namespaces.
///
/// Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
	locales: Vec<Locale>,
	default_locale: Locale,
	default_namespaces: Vec<Namespace>,
}

impl LocaleRegistry {
	/// Build a registry from a default locale and a delimited locale list.
	///
	/// The list may be separated by commas or newlines. When it is absent or
	/// contains no codes, the set is the default locale plus the first
	/// [`FALLBACK_LOCALES`] entry that differs from it. The default locale is
	/// always part of the supported set.
	pub fn from_parts(default_locale: Option<&str>, locales: Option<&str>) -> Self {
		let default_locale = default_locale
			.map(str::trim)
			.filter(|s| !s.is_empty())
			.unwrap_or(DEFAULT_LOCALE);

		let mut codes = locales.map(parse_locale_list).unwrap_or_default();
		if codes.is_empty() {
			codes.push(default_locale.to_string());
			if let Some(alternate) = FALLBACK_LOCALES.iter().find(|c| **c != default_locale) {
				codes.push(alternate.to_string());
			}
		}
		if !codes.iter().any(|c| c == default_locale) {
			codes.insert(0, default_locale.to_string());
		}

		let registry = Self {
			locales: codes.into_iter().map(Locale::from).collect(),
			default_locale: Locale::new(default_locale),
			default_namespaces: DEFAULT_NAMESPACES.to_vec(),
		};

		debug!(
			default_locale = %registry.default_locale,
			locales = ?registry.locales.iter().map(Locale::as_str).collect::<Vec<_>>(),
			"locale registry configured"
		);

		registry
	}

	/// Replace the always-loaded namespace set.
	pub fn with_default_namespaces(mut self, namespaces: impl IntoIterator<Item = Namespace>) -> Self {
		self.default_namespaces = Vec::new();
		for ns in namespaces {
			if !self.default_namespaces.contains(&ns) {
				self.default_namespaces.push(ns);
			}
		}
		self
	}

	pub fn locales(&self) -> &[Locale] {
		&self.locales
	}

	pub fn default_locale(&self) -> &Locale {
		&self.default_locale
	}

	pub fn default_namespaces(&self) -> &[Namespace] {
		&self.default_namespaces
	}

	/// Check if a locale code is supported.
	pub fn is_valid_locale(&self, code: &str) -> bool {
		self.locales.iter().any(|l| l.as_str() == code)
	}

	/// The registry's own instance of a supported code.
	pub fn get(&self, code: &str) -> Option<Locale> {
		self.locales.iter().find(|l| l.as_str() == code).cloned()
	}

	/// The supported locale whose base language matches `subtag`.
	pub fn match_base_language(&self, subtag: &str) -> Option<Locale> {
		let subtag = subtag.to_ascii_lowercase();
		self
			.locales
			.iter()
			.find(|l| l.as_str().eq_ignore_ascii_case(&subtag))
			.or_else(|| self.locales.iter().find(|l| l.base_language() == subtag))
			.cloned()
	}

	/// Resolve a code to a supported locale, falling back to the default.
	pub fn resolve(&self, code: &str) -> Locale {
		self
			.get(code)
			.unwrap_or_else(|| self.default_locale.clone())
	}

	/// Metadata for a locale.
	pub fn info(&self, locale: &Locale) -> LocaleInfo {
		locale_info(locale.as_str())
	}

	pub fn direction(&self, locale: &Locale) -> Direction {
		self.info(locale).direction
	}
}

impl Default for LocaleRegistry {
	fn default() -> Self {
		Self::from_parts(None, None)
	}
}

/// Split a comma or newline separated locale list.
///
/// Entries are trimmed; empty entries and repeats are skipped, keeping the
/// first occurrence.
pub fn parse_locale_list(raw: &str) -> Vec<String> {
	let mut codes: Vec<String> = Vec::new();
	for code in raw.split([',', '\n']).map(str::trim) {
		if code.is_empty() || codes.iter().any(|c| c == code) {
			continue;
		}
		codes.push(code.to_string());
	}
	codes
}
