// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use axum::{
	http::StatusCode,
	response::{IntoResponse, Response},
	Json,
};
use lingo_i18n_core::UnknownNamespace;
use lingo_server_i18n::ErrorResponse;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
	#[error(transparent)]
	UnknownNamespace(#[from] UnknownNamespace),
}

impl IntoResponse for ServerError {
	fn into_response(self) -> Response {
		let (status, error_response) = match &self {
			ServerError::UnknownNamespace(e) => {
				tracing::debug!(namespace = %e.0, "rejected unknown namespace");
				(
					StatusCode::BAD_REQUEST,
					ErrorResponse {
						error: "unknown_namespace".to_string(),
						message: self.to_string(),
					},
				)
			}
		};

		(status, Json(error_response)).into_response()
	}
}
