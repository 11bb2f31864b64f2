// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Health check handler.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::api::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
	pub status: &'static str,
	pub version: &'static str,
	pub environment: &'static str,
	pub default_locale: String,
	pub locales: Vec<String>,
	pub cached_namespaces: usize,
}

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
	Json(HealthResponse {
		status: "ok",
		version: env!("CARGO_PKG_VERSION"),
		environment: state.environment.as_str(),
		default_locale: state.registry.default_locale().to_string(),
		locales: state
			.registry
			.locales()
			.iter()
			.map(|l| l.to_string())
			.collect(),
		cached_namespaces: state.catalog.cached_entries(),
	})
}
