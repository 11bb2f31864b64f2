// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Rendering with absent or broken message documents.

use axum::{
	body::Body,
	http::{Request, StatusCode},
	Router,
};
use lingo_server::{create_app_state, create_router};
use lingo_server_config::ServerConfig;
use tempfile::tempdir;
use tower::ServiceExt;

async fn render(app: Router, uri: &str) -> (StatusCode, String) {
	let resp = app
		.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
		.await
		.unwrap();
	let status = resp.status();
	let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
		.await
		.unwrap();
	(status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn app_for(dir: &std::path::Path) -> Router {
	let mut config = ServerConfig::default();
	config.i18n.messages_dir = dir.to_path_buf();
	create_router(create_app_state(&config))
}

#[tokio::test]
async fn test_missing_directory_renders_keys() {
	let dir = tempdir().unwrap();
	let app = app_for(&dir.path().join("does-not-exist"));

	let (status, html) = render(app, "/en/dashboard").await;

	assert_eq!(status, StatusCode::OK);
	assert!(html.contains("<h1>title</h1>"));
	assert!(html.contains("<a href=\"/en/wallet\">wallet</a>"));
}

#[tokio::test]
async fn test_malformed_document_degrades_to_keys() {
	let dir = tempdir().unwrap();
	std::fs::create_dir_all(dir.path().join("en")).unwrap();
	std::fs::write(dir.path().join("en/dashboard.json"), "{ not json").unwrap();
	std::fs::write(
		dir.path().join("en/menu.json"),
		r#"{"home": "Start", "wallet": "Purse"}"#,
	)
	.unwrap();
	let app = app_for(dir.path());

	let (status, html) = render(app, "/en/dashboard").await;

	assert_eq!(status, StatusCode::OK);
	assert!(html.contains("<h1>title</h1>"));
	assert!(html.contains("<a href=\"/en/wallet\">Purse</a>"));
	assert!(html.contains("<a href=\"/en\">Start</a>"));
}

#[tokio::test]
async fn test_arabic_without_documents_uses_english() {
	let dir = tempdir().unwrap();
	std::fs::create_dir_all(dir.path().join("en")).unwrap();
	std::fs::write(
		dir.path().join("en/wallet.json"),
		r#"{"title": "Wallet", "empty": "Nothing here"}"#,
	)
	.unwrap();
	let app = app_for(dir.path());

	let (_, html) = render(app, "/ar/wallet").await;

	assert!(html.contains("<html lang=\"ar\" dir=\"rtl\">"));
	assert!(html.contains("<h1>Wallet</h1>"));
	assert!(html.contains("Nothing here"));
}
