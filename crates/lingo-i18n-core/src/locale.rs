// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale codes, metadata and direction support.

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
	/// Left-to-right (e.g., English, Spanish)
	Ltr,
	/// Right-to-left (e.g., Arabic, Hebrew)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// A locale code such as `en` or `ar`.
///
/// The type does not prove membership in a registry on its own; use
/// [`crate::LocaleRegistry::get`] or [`crate::LocaleRegistry::resolve`] to
/// obtain a code that is known to be supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locale(Arc<str>);

impl Locale {
	pub fn new(code: impl AsRef<str>) -> Self {
		Self(Arc::from(code.as_ref()))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// The base language subtag (`pt` for `pt-BR`), lowercased.
	pub fn base_language(&self) -> String {
		base_subtag(&self.0)
	}
}

impl fmt::Display for Locale {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for Locale {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl Borrow<str> for Locale {
	fn borrow(&self) -> &str {
		&self.0
	}
}

impl From<&str> for Locale {
	fn from(code: &str) -> Self {
		Self::new(code)
	}
}

impl From<String> for Locale {
	fn from(code: String) -> Self {
		Self(Arc::from(code))
	}
}

impl PartialEq<str> for Locale {
	fn eq(&self, other: &str) -> bool {
		&*self.0 == other
	}
}

impl PartialEq<&str> for Locale {
	fn eq(&self, other: &&str) -> bool {
		&*self.0 == *other
	}
}

/// Lowercased primary language subtag of a tag like `en-US` or `zh_CN`.
pub(crate) fn base_subtag(tag: &str) -> String {
	tag
		.split(['-', '_'])
		.next()
		.unwrap_or(tag)
		.trim()
		.to_ascii_lowercase()
}

/// Metadata about a locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// Language code as configured (e.g., "en", "ar")
	pub code: String,
	/// English name of the language
	pub name: String,
	/// Native name of the language
	pub native_name: String,
	/// Text direction
	pub direction: Direction,
}

struct KnownLocale {
	code: &'static str,
	name: &'static str,
	native_name: &'static str,
	direction: Direction,
}

const KNOWN_LOCALES: &[KnownLocale] = &[
	KnownLocale {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
	KnownLocale {
		code: "fa",
		name: "Persian",
		native_name: "فارسی",
		direction: Direction::Rtl,
	},
	KnownLocale {
		code: "he",
		name: "Hebrew",
		native_name: "עברית",
		direction: Direction::Rtl,
	},
	KnownLocale {
		code: "ur",
		name: "Urdu",
		native_name: "اردو",
		direction: Direction::Rtl,
	},
	KnownLocale {
		code: "es",
		name: "Spanish",
		native_name: "Español",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "de",
		name: "German",
		native_name: "Deutsch",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "ru",
		name: "Russian",
		native_name: "Русский",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "tr",
		name: "Turkish",
		native_name: "Türkçe",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "pt",
		name: "Portuguese",
		native_name: "Português",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "zh",
		name: "Chinese",
		native_name: "中文",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "ja",
		name: "Japanese",
		native_name: "日本語",
		direction: Direction::Ltr,
	},
	KnownLocale {
		code: "ko",
		name: "Korean",
		native_name: "한국어",
		direction: Direction::Ltr,
	},
];

/// Get metadata for a locale code.
///
/// Codes without an entry in the built-in table are reported as
/// left-to-right and named by their code.
pub fn locale_info(code: &str) -> LocaleInfo {
	let base = base_subtag(code);
	match KNOWN_LOCALES.iter().find(|l| l.code == base) {
		Some(known) => LocaleInfo {
			code: code.to_string(),
			name: known.name.to_string(),
			native_name: known.native_name.to_string(),
			direction: known.direction,
		},
		None => LocaleInfo {
			code: code.to_string(),
			name: code.to_string(),
			native_name: code.to_string(),
			direction: Direction::Ltr,
		},
	}
}

/// Check if a locale uses right-to-left text direction.
pub fn is_rtl(code: &str) -> bool {
	locale_info(code).direction == Direction::Rtl
}
