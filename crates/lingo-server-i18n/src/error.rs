// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use serde::Serialize;
use thiserror::Error;

/// JSON body for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

/// Extractor failures.
///
/// Both variants mean the router was assembled without a required layer; no
/// client input can cause them.
#[derive(Debug, Error)]
pub enum ExtractError {
	#[error("RequestLocale missing: the route is not wrapped in LocaleLayer")]
	MissingLocaleLayer,

	#[error("MessageCatalog missing: add Extension(Arc<MessageCatalog>) to the router")]
	MissingCatalog,
}

impl IntoResponse for ExtractError {
	fn into_response(self) -> Response {
		tracing::error!(error = %self, "i18n extractor misconfigured");
		let body = ErrorResponse {
			error: "i18n_misconfigured".to_string(),
			message: self.to_string(),
		};
		(StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
	}
}
