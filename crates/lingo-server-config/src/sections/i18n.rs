// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale and message catalog configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use lingo_i18n_core::DEFAULT_LOCALE;
use serde::Deserialize;

use crate::error::ConfigError;

fn default_locale() -> String {
	DEFAULT_LOCALE.to_string()
}

fn default_messages_dir() -> PathBuf {
	PathBuf::from("messages")
}

/// Deployment environment.
///
/// Development loads every namespace on each page so newly added messages show
/// up without declaring them on the route.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	#[default]
	Production,
	Development,
}

impl Environment {
	pub fn as_str(&self) -> &'static str {
		match self {
			Environment::Production => "production",
			Environment::Development => "development",
		}
	}

	pub fn is_development(&self) -> bool {
		matches!(self, Environment::Development)
	}
}

impl fmt::Display for Environment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for Environment {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"production" | "prod" => Ok(Environment::Production),
			"development" | "dev" => Ok(Environment::Development),
			other => Err(ConfigError::InvalidValue {
				key: "i18n.environment".to_string(),
				message: format!("expected 'production' or 'development', got '{other}'"),
			}),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct I18nConfig {
	pub default_locale: String,
	/// Supported locale codes. Empty means the registry's built-in set.
	pub locales: Vec<String>,
	/// Root of `<locale>/<namespace>.json` message documents.
	pub messages_dir: PathBuf,
	pub environment: Environment,
}

impl Default for I18nConfig {
	fn default() -> Self {
		I18nConfigLayer::default().finalize()
	}
}

impl I18nConfig {
	/// The supported locales as a comma separated list.
	pub fn locales_list(&self) -> Option<String> {
		(!self.locales.is_empty()).then(|| self.locales.join(","))
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nConfigLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub locales: Option<Vec<String>>,
	#[serde(default)]
	pub messages_dir: Option<PathBuf>,
	#[serde(default)]
	pub environment: Option<Environment>,
}

impl I18nConfigLayer {
	pub fn merge(&mut self, other: I18nConfigLayer) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.locales.is_some() {
			self.locales = other.locales;
		}
		if other.messages_dir.is_some() {
			self.messages_dir = other.messages_dir;
		}
		if other.environment.is_some() {
			self.environment = other.environment;
		}
	}

	pub fn finalize(self) -> I18nConfig {
		I18nConfig {
			default_locale: self.default_locale.unwrap_or_else(default_locale),
			locales: self.locales.unwrap_or_default(),
			messages_dir: self.messages_dir.unwrap_or_else(default_messages_dir),
			environment: self.environment.unwrap_or_default(),
		}
	}
}
