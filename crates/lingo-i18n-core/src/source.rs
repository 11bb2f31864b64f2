// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Message document sources.
//!
//! A [`MessageSource`] fetches the raw document for one `(locale, namespace)`
//! pair. Sources do not merge or cache; [`crate::MessageCatalog`] does both.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, trace};

use crate::error::SourceError;
use crate::locale::Locale;
use crate::namespace::Namespace;
use crate::tree::MessageTree;

#[async_trait]
pub trait MessageSource: Send + Sync {
	/// Fetch the document for a locale and namespace.
	///
	/// Returns `Ok(None)` when no document exists.
	async fn fetch(
		&self,
		locale: &Locale,
		namespace: Namespace,
	) -> Result<Option<MessageTree>, SourceError>;
}

/// Reads `<root>/<locale>/<namespace>.json` from disk.
#[derive(Debug, Clone)]
pub struct FsMessageSource {
	root: PathBuf,
}

impl FsMessageSource {
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self { root: root.into() }
	}

	pub fn root(&self) -> &Path {
		&self.root
	}

	fn document_path(&self, locale: &Locale, namespace: Namespace) -> PathBuf {
		self
			.root
			.join(locale.as_str())
			.join(format!("{}.json", namespace.as_str()))
	}
}

#[async_trait]
impl MessageSource for FsMessageSource {
	async fn fetch(
		&self,
		locale: &Locale,
		namespace: Namespace,
	) -> Result<Option<MessageTree>, SourceError> {
		let path = self.document_path(locale, namespace);

		let contents = match tokio::fs::read_to_string(&path).await {
			Ok(contents) => contents,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %path.display(), "message document not found");
				return Ok(None);
			}
			Err(e) => return Err(SourceError::Io { path, source: e }),
		};

		let value: Value =
			serde_json::from_str(&contents).map_err(|e| SourceError::Parse {
				path: path.clone(),
				source: e,
			})?;

		let tree = MessageTree::from_json(value).ok_or_else(|| SourceError::Malformed {
			locale: locale.to_string(),
			namespace,
			reason: "document root is not an object".to_string(),
		})?;

		trace!(
			path = %path.display(),
			messages = tree.leaf_count(),
			"loaded message document"
		);

		Ok(Some(tree))
	}
}

/// In-memory documents keyed by locale and namespace.
#[derive(Debug, Clone, Default)]
pub struct MemoryMessageSource {
	documents: HashMap<(Locale, Namespace), Value>,
}

impl MemoryMessageSource {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a raw JSON document. Non-object documents are reported as
	/// malformed when fetched.
	pub fn with_document(
		mut self,
		locale: impl Into<Locale>,
		namespace: Namespace,
		document: Value,
	) -> Self {
		self.documents.insert((locale.into(), namespace), document);
		self
	}
}

#[async_trait]
impl MessageSource for MemoryMessageSource {
	async fn fetch(
		&self,
		locale: &Locale,
		namespace: Namespace,
	) -> Result<Option<MessageTree>, SourceError> {
		let Some(document) = self.documents.get(&(locale.clone(), namespace)) else {
			return Ok(None);
		};

		MessageTree::from_json(document.clone())
			.map(Some)
			.ok_or_else(|| SourceError::Malformed {
				locale: locale.to_string(),
				namespace,
				reason: "document root is not an object".to_string(),
			})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;
	use tempfile::TempDir;

	fn write_doc(dir: &TempDir, locale: &str, ns: &str, contents: &str) {
		let locale_dir = dir.path().join(locale);
		std::fs::create_dir_all(&locale_dir).unwrap();
		std::fs::write(locale_dir.join(format!("{ns}.json")), contents).unwrap();
	}

	#[tokio::test]
	async fn test_fs_source_reads_document() {
		let dir = TempDir::new().unwrap();
		write_doc(&dir, "en", "common", r#"{"greeting": {"hello": "Hello"}}"#);

		let source = FsMessageSource::new(dir.path());
		let tree = source
			.fetch(&Locale::new("en"), Namespace::Common)
			.await
			.unwrap()
			.unwrap();
		assert_eq!(tree.get_text("greeting.hello"), Some("Hello"));
	}

	#[tokio::test]
	async fn test_fs_source_missing_document_is_none() {
		let dir = TempDir::new().unwrap();
		let source = FsMessageSource::new(dir.path());
		let result = source.fetch(&Locale::new("en"), Namespace::Menu).await.unwrap();
		assert!(result.is_none());
	}

	#[tokio::test]
	async fn test_fs_source_invalid_json_is_parse_error() {
		let dir = TempDir::new().unwrap();
		write_doc(&dir, "en", "common", "{ not json");

		let source = FsMessageSource::new(dir.path());
		let err = source
			.fetch(&Locale::new("en"), Namespace::Common)
			.await
			.unwrap_err();
		assert!(matches!(err, SourceError::Parse { .. }));
	}

	#[tokio::test]
	async fn test_fs_source_array_root_is_malformed() {
		let dir = TempDir::new().unwrap();
		write_doc(&dir, "ar", "menu", r#"["a", "b"]"#);

		let source = FsMessageSource::new(dir.path());
		let err = source
			.fetch(&Locale::new("ar"), Namespace::Menu)
			.await
			.unwrap_err();
		assert!(matches!(err, SourceError::Malformed { .. }));
	}

	#[tokio::test]
	async fn test_memory_source() {
		let source = MemoryMessageSource::new()
			.with_document("en", Namespace::Common, json!({ "title": "Home" }))
			.with_document("en", Namespace::Menu, json!("broken"));

		let tree = source
			.fetch(&Locale::new("en"), Namespace::Common)
			.await
			.unwrap()
			.unwrap();
		assert_eq!(tree.get_text("title"), Some("Home"));

		assert!(source
			.fetch(&Locale::new("ar"), Namespace::Common)
			.await
			.unwrap()
			.is_none());
		assert!(source
			.fetch(&Locale::new("en"), Namespace::Menu)
			.await
			.is_err());
	}
}
