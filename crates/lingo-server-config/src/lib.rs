// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Centralized configuration management for the Lingo server.
//!
//! This crate provides:
//! - Layered configuration from multiple sources (defaults, TOML file, environment)
//! - Type-safe configuration with validation
//! - Consistent environment variable naming (`LINGO_SERVER_*`)
//!
//! # Usage
//!
//! ```ignore
//! use lingo_server_config::load_config;
//!
//! let config = load_config()?;
//! println!("Server listening on {}", config.socket_addr());
//! ```

pub mod error;
pub mod layer;
pub mod sections;
pub mod sources;

pub use error::ConfigError;
pub use layer::ServerConfigLayer;
pub use sections::*;
pub use sources::{
	ConfigSource, DefaultsSource, EnvSource, Precedence, TomlSource, SYSTEM_CONFIG_PATH,
};

use tracing::{debug, info};

/// Fully resolved server configuration.
#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
	pub http: HttpConfig,
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,
}

impl ServerConfig {
	/// Get the socket address string for binding.
	pub fn socket_addr(&self) -> String {
		format!("{}:{}", self.http.host, self.http.port)
	}
}

/// Load configuration from all sources with standard precedence.
///
/// Precedence (highest to lowest):
/// 1. Environment variables (`LINGO_SERVER_*`)
/// 2. Config file (`/etc/lingo/server.toml`)
/// 3. Built-in defaults
pub fn load_config() -> Result<ServerConfig, ConfigError> {
	load_config_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::system()),
		Box::new(EnvSource),
	])
}

/// Load configuration with a custom config file path.
pub fn load_config_with_file(
	config_path: impl Into<std::path::PathBuf>,
) -> Result<ServerConfig, ConfigError> {
	load_config_from_sources(vec![
		Box::new(DefaultsSource),
		Box::new(TomlSource::new(config_path)),
		Box::new(EnvSource),
	])
}

/// Merge `sources` in precedence order and finalize.
pub fn load_config_from_sources(
	mut sources: Vec<Box<dyn ConfigSource>>,
) -> Result<ServerConfig, ConfigError> {
	sources.sort_by_key(|s| s.precedence());

	let mut merged = ServerConfigLayer::default();
	for source in sources {
		debug!(source = source.name(), "loading configuration source");
		let layer = source.load()?;
		merged.merge(layer);
	}

	finalize(merged)
}

/// Finalize configuration layer into resolved config.
fn finalize(layer: ServerConfigLayer) -> Result<ServerConfig, ConfigError> {
	let http = layer.http.unwrap_or_default().finalize();
	let i18n = layer.i18n.unwrap_or_default().finalize();
	let logging = layer.logging.unwrap_or_default().finalize();

	validate_config(&i18n)?;

	info!(
		host = %http.host,
		port = http.port,
		default_locale = %i18n.default_locale,
		locales = ?i18n.locales,
		messages_dir = %i18n.messages_dir.display(),
		environment = %i18n.environment,
		"Server configuration loaded"
	);

	Ok(ServerConfig {
		http,
		i18n,
		logging,
	})
}

/// Locale codes end up in URL segments and the `locale` cookie.
fn validate_config(i18n: &I18nConfig) -> Result<(), ConfigError> {
	let codes = std::iter::once(&i18n.default_locale).chain(i18n.locales.iter());
	for code in codes {
		let valid = !code.is_empty()
			&& code
				.chars()
				.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
		if !valid {
			return Err(ConfigError::Validation(format!(
				"locale code '{code}' must be non-empty ASCII letters, digits, '-' or '_'"
			)));
		}
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::PathBuf;

	struct StaticSource {
		precedence: Precedence,
		layer: ServerConfigLayer,
	}

	impl ConfigSource for StaticSource {
		fn name(&self) -> &'static str {
			"static"
		}

		fn precedence(&self) -> Precedence {
			self.precedence
		}

		fn load(&self) -> Result<ServerConfigLayer, ConfigError> {
			Ok(self.layer.clone())
		}
	}

	fn i18n_layer(default_locale: &str) -> ServerConfigLayer {
		ServerConfigLayer {
			i18n: Some(I18nConfigLayer {
				default_locale: Some(default_locale.to_string()),
				..Default::default()
			}),
			..Default::default()
		}
	}

	#[test]
	fn test_environment_overrides_file_regardless_of_order() {
		let config = load_config_from_sources(vec![
			Box::new(StaticSource {
				precedence: Precedence::Environment,
				layer: i18n_layer("ar"),
			}),
			Box::new(StaticSource {
				precedence: Precedence::ConfigFile,
				layer: ServerConfigLayer {
					http: Some(HttpConfigLayer {
						port: Some(8081),
						..Default::default()
					}),
					..i18n_layer("fr")
				},
			}),
			Box::new(DefaultsSource),
		])
		.unwrap();

		assert_eq!(config.i18n.default_locale, "ar");
		assert_eq!(config.http.port, 8081);
		assert_eq!(config.http.host, "0.0.0.0");
	}

	#[test]
	fn test_defaults_only() {
		let config = load_config_from_sources(vec![Box::new(DefaultsSource)]).unwrap();
		assert_eq!(config.i18n, I18nConfig::default());
		assert_eq!(config.i18n.messages_dir, PathBuf::from("messages"));
		assert_eq!(config.socket_addr(), "0.0.0.0:3000");
	}

	#[test]
	fn test_invalid_locale_code_rejected() {
		let err = load_config_from_sources(vec![Box::new(StaticSource {
			precedence: Precedence::ConfigFile,
			layer: i18n_layer("en; Path=/evil"),
		})])
		.unwrap_err();
		assert!(matches!(err, ConfigError::Validation(_)));
	}

	#[test]
	fn test_toml_file_layered_over_defaults() {
		let dir = tempfile::TempDir::new().unwrap();
		let path = dir.path().join("server.toml");
		std::fs::write(
			&path,
			"[i18n]\nlocales = [\"en\", \"ar\", \"he\"]\nmessages_dir = \"/srv/messages\"\n",
		)
		.unwrap();

		let config = load_config_from_sources(vec![
			Box::new(DefaultsSource),
			Box::new(TomlSource::new(&path)),
		])
		.unwrap();
		assert_eq!(config.i18n.locales, vec!["en", "ar", "he"]);
		assert_eq!(config.i18n.messages_dir, PathBuf::from("/srv/messages"));
	}
}
