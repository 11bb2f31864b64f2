// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message export for client-side rendering.

use axum::{extract::Query, Json};
use lingo_i18n_core::Namespace;
use lingo_server_i18n::I18n;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

#[derive(Debug, Deserialize)]
pub struct MessagesQuery {
	/// Comma-separated namespace identifiers.
	pub ns: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
	pub locale: String,
	pub direction: &'static str,
	pub messages: serde_json::Value,
}

fn parse_namespaces(list: &str) -> Result<Vec<Namespace>, ServerError> {
	list
		.split(',')
		.map(str::trim)
		.filter(|s| !s.is_empty())
		.map(|s| s.parse::<Namespace>().map_err(ServerError::from))
		.collect()
}

/// GET /{locale}/messages?ns=common,dashboard
///
/// Without `ns`, returns the route-scoped default set.
pub async fn get_messages(
	i18n: I18n,
	Query(query): Query<MessagesQuery>,
) -> Result<Json<MessagesResponse>, ServerError> {
	let set = match query.ns.as_deref() {
		Some(list) => {
			let namespaces = parse_namespaces(list)?;
			i18n.catalog().load_namespaces(i18n.locale(), &namespaces).await
		}
		None => i18n.messages(&[]).await,
	};

	Ok(Json(MessagesResponse {
		locale: set.locale().to_string(),
		direction: i18n.request_locale().direction().as_html_dir(),
		messages: set.to_json(),
	}))
}
