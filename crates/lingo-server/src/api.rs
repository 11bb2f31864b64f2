// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application state and router assembly.

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use lingo_i18n_core::{FsMessageSource, LocaleRegistry, MessageCatalog, MessageSource};
use lingo_server_config::{Environment, ServerConfig};
use lingo_server_i18n::{LoadStrategy, LocaleLayer};

use crate::routes;

/// Paths served without locale negotiation.
pub const UNLOCALIZED_PREFIXES: &[&str] = &["/health"];

#[derive(Clone)]
pub struct AppState {
	pub registry: Arc<LocaleRegistry>,
	pub catalog: Arc<MessageCatalog>,
	pub environment: Environment,
}

impl std::fmt::Debug for AppState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("AppState")
			.field("registry", &self.registry)
			.field("environment", &self.environment)
			.finish_non_exhaustive()
	}
}

impl AppState {
	pub fn new(
		registry: Arc<LocaleRegistry>,
		source: Arc<dyn MessageSource>,
		environment: Environment,
	) -> Self {
		let catalog = Arc::new(MessageCatalog::new(Arc::clone(&registry), source));
		Self {
			registry,
			catalog,
			environment,
		}
	}

	pub fn load_strategy(&self) -> LoadStrategy {
		if self.environment.is_development() {
			LoadStrategy::All
		} else {
			LoadStrategy::RouteScoped
		}
	}
}

/// Build application state from resolved configuration.
pub fn create_app_state(config: &ServerConfig) -> AppState {
	let locales = config.i18n.locales_list();
	let registry = Arc::new(LocaleRegistry::from_parts(
		Some(&config.i18n.default_locale),
		locales.as_deref(),
	));

	if !config.i18n.messages_dir.is_dir() {
		tracing::warn!(
			messages_dir = %config.i18n.messages_dir.display(),
			"messages directory does not exist; every key will render as itself"
		);
	}
	let source = Arc::new(FsMessageSource::new(&config.i18n.messages_dir));

	AppState::new(registry, source, config.i18n.environment)
}

pub fn create_router(state: AppState) -> Router {
	let mut locale_layer = LocaleLayer::new(Arc::clone(&state.registry));
	for prefix in UNLOCALIZED_PREFIXES {
		locale_layer = locale_layer.passthrough(*prefix);
	}

	Router::new()
		.route("/health", get(routes::health::health_check))
		.route("/{locale}", get(routes::pages::home))
		.route("/{locale}/dashboard", get(routes::pages::dashboard))
		.route("/{locale}/wallet", get(routes::pages::wallet))
		.route("/{locale}/account", get(routes::pages::account))
		.route("/{locale}/messages", get(routes::messages::get_messages))
		.fallback(routes::pages::not_found)
		.layer(locale_layer)
		.layer(Extension(Arc::clone(&state.catalog)))
		.layer(Extension(state.load_strategy()))
		.with_state(state)
}
